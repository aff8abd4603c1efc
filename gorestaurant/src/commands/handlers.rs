use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C always quits
    if event.modifiers.ctrl && matches!(key, Key::Char('c')) {
        return Some(AppCommand::Quit);
    }

    // Priority 1: An alert blocks the screen until dismissed
    if state.alert.is_some() {
        return match key {
            Key::Enter | Key::Esc | Key::Char(' ') => Some(AppCommand::DismissAlert),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: Help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Food details screen
        (Screen::FoodDetails(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::FoodDetails(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (
            Screen::FoodDetails(details),
            Key::Char('+') | Key::Char('=') | Key::Right | Key::Char('l'),
        ) => details
            .selected_extra_id()
            .map(|extra_id| AppCommand::IncrementExtra { extra_id }),
        (Screen::FoodDetails(details), Key::Char('-') | Key::Left) => details
            .selected_extra_id()
            .map(|extra_id| AppCommand::DecrementExtra { extra_id }),
        (Screen::FoodDetails(..), Key::Char('>') | Key::Char(']')) => {
            Some(AppCommand::IncrementFood)
        }
        (Screen::FoodDetails(..), Key::Char('<') | Key::Char('[')) => {
            Some(AppCommand::DecrementFood)
        }
        (Screen::FoodDetails(..), Key::Char('f')) => Some(AppCommand::ToggleFavorite),
        (Screen::FoodDetails(..), Key::Enter) => Some(AppCommand::FinishOrder),
        (Screen::FoodDetails(details), Key::Char('r')) => Some(AppCommand::LoadFood {
            food_id: details.food_id,
        }),
        (Screen::FoodDetails(..), Key::Esc | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Orders screen
        (Screen::Orders(..), Key::Esc | Key::Left | Key::Char('h')) => {
            Some(AppCommand::NavigateBack)
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gorestaurant_api::endpoints::FoodId;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(FoodId::new(7));
        crate::state::reducer::reduce_data_event(
            &mut state,
            crate::events::DataEvent::FoodLoaded {
                food: crate::testing::sample_food(),
            },
        );
        state
    }

    fn key(state: &AppState, key: Key) -> Option<AppCommand> {
        handle_key_input(KeyEvent::new(key), state)
    }

    #[test]
    fn counters_target_the_selected_extra() {
        let state = loaded_state();

        assert_eq!(
            key(&state, Key::Char('+')),
            Some(AppCommand::IncrementExtra { extra_id: 1 })
        );
        assert_eq!(
            key(&state, Key::Left),
            Some(AppCommand::DecrementExtra { extra_id: 1 })
        );
    }

    #[test]
    fn extra_counters_are_ignored_without_extras() {
        let state = AppState::new(FoodId::new(7));

        assert_eq!(key(&state, Key::Char('+')), None);
        assert_eq!(key(&state, Key::Char('-')), None);
    }

    #[test]
    fn alert_swallows_screen_keys() {
        let mut state = loaded_state();
        state.show_alert("Error on favorite food");

        assert_eq!(key(&state, Key::Char('f')), None);
        assert_eq!(key(&state, Key::Enter), Some(AppCommand::DismissAlert));
        assert_eq!(key(&state, Key::Char('q')), Some(AppCommand::Quit));
    }

    #[test]
    fn help_popup_only_closes_or_quits() {
        let mut state = loaded_state();
        state.help_visible = true;

        assert_eq!(key(&state, Key::Enter), None);
        assert_eq!(key(&state, Key::Esc), Some(AppCommand::ToggleHelp));
    }

    #[test]
    fn ctrl_c_quits_even_under_an_alert() {
        let mut state = loaded_state();
        state.show_alert("Error on food load details");

        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn reload_targets_the_current_food() {
        let state = loaded_state();

        assert_eq!(
            key(&state, Key::Char('r')),
            Some(AppCommand::LoadFood {
                food_id: FoodId::new(7)
            })
        );
    }
}
