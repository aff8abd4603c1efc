use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the key hint bar at the bottom of a screen
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_FOOD_DETAILS: &str =
    "+/- extra  </> quantity  f favorite  Enter confirm order  ? help";

pub const HELP_TEXT_ORDERS: &str = "Esc back  q quit  ? help";
