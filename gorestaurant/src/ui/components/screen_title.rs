//! Screen header: title on the left, header-right controls on the right.

use ratatui::prelude::Rect;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::{FavoriteIcon, LoadingState};
use crate::ui::{layouts, theme};

use super::loading_indicator;

/// Render a title with an optional favorite icon and the loading indicator
/// in the header's right slot.
pub fn render_screen_title(
    f: &mut Frame,
    area: Rect,
    title: &str,
    favorite: Option<FavoriteIcon>,
    loading_state: &LoadingState,
) {
    let (title_area, right_area) = layouts::title_with_header_right(area);

    f.render_widget(
        Paragraph::new(Span::styled(title.to_string(), theme::title_style())),
        title_area,
    );

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(right_area);

    if let Some(icon) = favorite {
        f.render_widget(
            Paragraph::new(Span::styled(icon.glyph(), theme::favorite_style())),
            slots[0],
        );
    }
    loading_indicator::render_loading_indicator(f, slots[2], loading_state);
}
