use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::settings::CurrencyFormat;
use crate::state::{LoadingState, OrdersState};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &OrdersState, currency: &CurrencyFormat) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let loading = if state.is_confirmed() {
        LoadingState::Loaded
    } else {
        LoadingState::Error(state.error.clone().unwrap_or_default())
    };
    screen_title::render_screen_title(f, title_area, "Orders", None, &loading);

    render_content(f, content_area, state, currency);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_ORDERS);
}

fn render_content(f: &mut Frame, area: Rect, state: &OrdersState, currency: &CurrencyFormat) {
    let status = match &state.error {
        None => Line::from(Span::styled(
            "Order placed",
            Style::default()
                .fg(theme::COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Some(error) => Line::from(vec![
            Span::styled(
                "Order could not be confirmed: ",
                Style::default()
                    .fg(theme::COLOR_BORDER_DANGER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(error.clone()),
        ]),
    };

    let mut lines = vec![
        status,
        Line::from(""),
        Line::from(format!("{} x {}", state.food_quantity, state.food.name)),
    ];
    lines.extend(state.extras.iter().map(|extra| {
        Line::from(Span::styled(
            format!(
                "  + {} x {} ({})",
                extra.quantity,
                extra.name,
                utils::fmt_currency(extra.value, currency)
            ),
            theme::help_text_style(),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(utils::fmt_currency(state.total, currency), theme::price_style()),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Pedido"));

    f.render_widget(paragraph, area);
}
