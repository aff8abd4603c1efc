use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme};

/// Render a blocking alert; any of Enter/Esc dismisses it
pub fn render_alert(f: &mut Frame, message: &str) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        " Alert ",
        theme::danger_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let text = Paragraph::new(message)
        .style(theme::loading_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(
            "[Enter]",
            Style::default()
                .fg(theme::COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" OK"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}
