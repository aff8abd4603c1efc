pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    let currency = &state.preferences.currency;

    match state.current_screen() {
        Screen::FoodDetails(details) => {
            food_details_screen::render(f, details, currency);
        }
        Screen::Orders(orders) => {
            orders_screen::render(f, orders, currency);
        }
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    // Alerts block everything else, so they go on top
    if let Some(ref message) = state.alert {
        components::alert_popup::render_alert(f, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DataEvent;
    use crate::state::reducer::reduce_data_event;
    use crate::testing::sample_food;
    use gorestaurant_api::endpoints::FoodId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 30);
        Terminal::new(backend).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(FoodId::new(7));
        reduce_data_event(
            &mut state,
            DataEvent::FoodLoaded {
                food: sample_food(),
            },
        );
        state
    }

    #[test]
    fn loading_screen_renders_without_panic() {
        let mut terminal = make_terminal();
        let state = AppState::new(FoodId::new(7));
        terminal
            .draw(|frame| render_app(frame, &state))
            .expect("render should not panic");
    }

    #[test]
    fn details_screen_shows_food_and_total() {
        let mut terminal = make_terminal();
        let state = loaded_state();
        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Ao molho"));
        assert!(text.contains("Cheese"));
        assert!(text.contains("R$ 10,00"));
    }

    #[test]
    fn alert_is_drawn_over_the_screen() {
        let mut terminal = make_terminal();
        let mut state = loaded_state();
        state.show_alert("Error on favorite food");
        terminal.draw(|frame| render_app(frame, &state)).unwrap();

        assert!(screen_text(&terminal).contains("Error on favorite food"));
    }

    #[test]
    fn orders_screen_renders_without_panic() {
        let mut terminal = make_terminal();
        let mut state = loaded_state();
        reduce_data_event(
            &mut state,
            DataEvent::OrderSubmitFailed {
                food_id: FoodId::new(7),
                error: "(500 Internal Server Error)".to_string(),
            },
        );
        terminal
            .draw(|frame| render_app(frame, &state))
            .expect("render should not panic");

        assert!(screen_text(&terminal).contains("Order could not be confirmed"));
    }
}
