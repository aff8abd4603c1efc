use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::FoodDetails(..) => {
            items.push(("↑/k", "Select previous extra"));
            items.push(("↓/j", "Select next extra"));
            items.push(("+/→/l", "Add one of the selected extra"));
            items.push(("-/←", "Remove one of the selected extra"));
            items.push(("> or ]", "Increase order quantity"));
            items.push(("< or [", "Decrease order quantity"));
            items.push(("f", "Toggle favorite"));
            items.push(("Enter", "Confirm order"));
            items.push(("r", "Reload food"));
        }
        Screen::Orders(..) => {
            items.push(("Esc/h/←", "Back to the food"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}
