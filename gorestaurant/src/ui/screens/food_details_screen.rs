use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::settings::CurrencyFormat;
use crate::state::{FavoriteSync, FoodDetailsState, LoadingState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme, utils,
};
use gorestaurant_api::endpoints::foods::FoodItem;

pub fn render(f: &mut Frame, state: &FoodDetailsState, currency: &CurrencyFormat) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = state
        .food
        .as_ref()
        .map(|food| food.name.as_str())
        .unwrap_or("Food details");
    // The icon is only meaningful once the favorite status is known
    let favorite = (state.favorite_sync != FavoriteSync::Unknown).then(|| state.favorite_icon());
    screen_title::render_screen_title(f, title_area, title, favorite, &state.food_loading);

    render_content(f, content_area, state, currency);
    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_FOOD_DETAILS);
}

fn render_content(f: &mut Frame, area: Rect, state: &FoodDetailsState, currency: &CurrencyFormat) {
    let Some(food) = state.food.as_ref() else {
        match &state.food_loading {
            LoadingState::Error(error) => empty_state::render_message(
                f,
                area,
                "Food",
                &format!("Could not load food {}: {}", state.food_id, error),
                Style::default().fg(theme::COLOR_BORDER_DANGER),
                Some("Press r to try again"),
            ),
            _ => empty_state::render_loading_state(f, area, "Food", "Loading food..."),
        }
        return;
    };

    let (food_area, extras_area, total_area) = layouts::food_details_layout(area);
    render_food_card(f, food_area, food);
    render_extras(f, extras_area, state, currency);
    render_total(f, total_area, state, currency);
}

fn render_food_card(f: &mut Frame, area: Rect, food: &FoodItem) {
    let lines = vec![
        Line::from(Span::styled(
            food.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(food.description.clone()),
        Line::from(Span::styled(
            food.formatted_price.clone().unwrap_or_default(),
            theme::price_style(),
        )),
        Line::from(Span::styled(
            food.image_url.clone(),
            theme::help_text_style(),
        )),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Prato"));

    f.render_widget(card, area);
}

fn render_extras(f: &mut Frame, area: Rect, state: &FoodDetailsState, currency: &CurrencyFormat) {
    if state.extras.is_empty() {
        empty_state::render_message(
            f,
            area,
            "Adicionais",
            "No extras for this food",
            theme::help_text_style(),
            None,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("Extra"),
        Cell::from(Text::from("Price").right_aligned()),
        Cell::from(Text::from("Quantity").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .extras
        .iter()
        .map(|extra| {
            Row::new(vec![
                Cell::from(extra.name.clone()),
                Cell::from(Text::from(utils::fmt_currency(extra.value, currency)).right_aligned()),
                Cell::from(Text::from(format!("-  {}  +", extra.quantity)).right_aligned())
                    .style(Style::default().fg(utils::quantity_color(extra.quantity))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(Block::default().borders(Borders::ALL).title("Adicionais"))
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn render_total(f: &mut Frame, area: Rect, state: &FoodDetailsState, currency: &CurrencyFormat) {
    let total = utils::fmt_currency(state.cart_total(), currency);

    let action = if state.order_pending {
        Span::styled("Sending order...", theme::loading_style())
    } else {
        Span::styled("[Enter] Confirmar pedido", theme::header_style())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(total, theme::price_style()),
            Span::raw("    "),
            Span::raw(format!("<  {}  >", state.food_quantity)),
        ]),
        Line::from(""),
        Line::from(action),
    ];

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Total do pedido"));

    f.render_widget(card, area);
}
