use crate::backend::FoodBackend;
use crate::background::{
    data_loader::DataLoader, favorite_task_id, food_task_id, order_task_id,
    BackgroundTaskManager,
};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use gorestaurant_api::endpoints::{foods::FoodItem, FoodId};
use throbber_widgets_tui::ThrobberState;

/// Execute a command by spawning background tasks or updating state
pub fn execute_command<B: FoodBackend>(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader<B>,
) {
    match command {
        AppCommand::LoadFood { food_id } => {
            begin_food_load(state, food_id);

            // Replaces (aborts) any load still running for this food
            let data_loader = data_loader.clone();
            task_manager.spawn_task(food_task_id(food_id), async move {
                data_loader.load_food(food_id).await;
            });
        }

        AppCommand::ToggleFavorite => {
            if let Some((food, favorite)) = begin_favorite_toggle(state) {
                let data_loader = data_loader.clone();
                task_manager.spawn_task(favorite_task_id(food.id), async move {
                    data_loader.set_favorite(food, favorite).await;
                });
            }
        }

        AppCommand::FinishOrder => {
            if let Some(food) = begin_finish_order(state) {
                let data_loader = data_loader.clone();
                task_manager.spawn_task(order_task_id(food.id), async move {
                    data_loader.submit_order(food).await;
                });
            }
        }

        AppCommand::NavigateBack => {
            let leaving = state.food_details().map(|details| details.food_id);
            if state.navigate_back() {
                // Nothing is left to receive this screen's results
                if let Some(food_id) = leaving {
                    if state.food_details_mut(food_id).is_none() {
                        task_manager.cancel_food_tasks(food_id);
                    }
                }
            }
        }

        AppCommand::Quit => {
            task_manager.cancel_all();
            state.should_quit = true;
        }

        command => execute_command_sync(command, state),
    }
}

/// Put the details screen for `food_id` into its loading state, opening it
/// first if another screen is showing.
pub fn begin_food_load(state: &mut AppState, food_id: FoodId) {
    if !state.is_showing_food(food_id) {
        tracing::debug!("Opening details screen for food {}", food_id);
        state.navigate_to(Screen::FoodDetails(Box::new(FoodDetailsState::new(food_id))));
    }

    if let Some(details) = state.current_food_details_mut() {
        tracing::debug!("Loading details for food {}", food_id);
        details.food_loading = LoadingState::Loading(ThrobberState::default());
        details.favorite_sync = FavoriteSync::Unknown;
    }
}

/// Mark a favorite write as in flight.
///
/// Returns the food and the flag to store, or `None` when toggling is not
/// possible yet (food missing, status unknown, or a write already running).
pub fn begin_favorite_toggle(state: &mut AppState) -> Option<(FoodItem, bool)> {
    let details = state.current_food_details_mut()?;
    if !details.can_toggle_favorite() {
        tracing::debug!(
            "Ignoring favorite toggle for food {} ({:?})",
            details.food_id,
            details.favorite_sync
        );
        return None;
    }

    let food = details.food.clone()?;
    details.favorite_sync = FavoriteSync::Saving;
    Some((food, !details.is_favorite))
}

/// Mark an order as in flight and return the food to submit
pub fn begin_finish_order(state: &mut AppState) -> Option<FoodItem> {
    let details = state.current_food_details_mut()?;
    if details.order_pending {
        tracing::debug!("Order for food {} already in flight", details.food_id);
        return None;
    }

    let food = details.food.clone()?;
    details.order_pending = true;
    Some(food)
}

/// Execute commands that only touch state.
///
/// Commands that would start a request only run their state half here, so
/// tests can drive the app and inject the matching `DataEvent`s by hand.
///
/// NOTE: This is public for use by the testing module but should not be used in production code.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::DismissAlert => state.alert = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::SelectNext => {
            if let Some(details) = state.current_food_details_mut() {
                details.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if let Some(details) = state.current_food_details_mut() {
                details.select_prev();
            }
        }

        // Extras and quantity
        AppCommand::IncrementExtra { extra_id } => {
            if let Some(details) = state.current_food_details_mut() {
                details.extras = increment_extra(&details.extras, extra_id);
            }
        }
        AppCommand::DecrementExtra { extra_id } => {
            if let Some(details) = state.current_food_details_mut() {
                details.extras = decrement_extra(&details.extras, extra_id);
            }
        }
        AppCommand::IncrementFood => {
            if let Some(details) = state.current_food_details_mut() {
                details.increment_food();
            }
        }
        AppCommand::DecrementFood => {
            if let Some(details) = state.current_food_details_mut() {
                details.decrement_food();
            }
        }

        // Requests
        AppCommand::LoadFood { food_id } => begin_food_load(state, food_id),
        AppCommand::ToggleFavorite => {
            begin_favorite_toggle(state);
        }
        AppCommand::FinishOrder => {
            begin_finish_order(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DataEvent;
    use crate::state::reducer::reduce_data_event;
    use crate::testing::sample_food;

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

    fn ready_state(is_favorite: bool) -> AppState {
        let mut state = loaded_state();
        reduce_data_event(
            &mut state,
            DataEvent::FavoriteStatusLoaded {
                food_id: FoodId::new(7),
                is_favorite,
            },
        );
        state
    }

    #[test]
    fn toggle_is_refused_until_status_is_known() {
        let mut state = loaded_state();
        assert_eq!(begin_favorite_toggle(&mut state), None);
        assert_eq!(
            state.food_details().unwrap().favorite_sync,
            FavoriteSync::Unknown
        );
    }

    #[test]
    fn toggle_requests_the_negated_flag_without_flipping_it() {
        let mut state = ready_state(true);

        let (food, favorite) = begin_favorite_toggle(&mut state).unwrap();

        assert_eq!(food.id, FoodId::new(7));
        assert!(!favorite);
        let details = state.food_details().unwrap();
        assert!(details.is_favorite);
        assert_eq!(details.favorite_sync, FavoriteSync::Saving);
    }

    #[test]
    fn second_toggle_while_saving_is_ignored() {
        let mut state = ready_state(false);
        assert!(begin_favorite_toggle(&mut state).is_some());
        assert_eq!(begin_favorite_toggle(&mut state), None);
    }

    #[test]
    fn finish_order_is_single_flight() {
        let mut state = loaded_state();
        assert!(begin_finish_order(&mut state).is_some());
        assert!(state.food_details().unwrap().order_pending);
        assert_eq!(begin_finish_order(&mut state), None);
    }

    #[test]
    fn finish_order_needs_a_loaded_food() {
        let mut state = AppState::new(FoodId::new(7));
        assert_eq!(begin_finish_order(&mut state), None);
        assert!(!state.food_details().unwrap().order_pending);
    }

    #[test]
    fn reload_resets_favorite_sync() {
        let mut state = ready_state(true);

        begin_food_load(&mut state, FoodId::new(7));

        let details = state.food_details().unwrap();
        assert!(matches!(details.food_loading, LoadingState::Loading(_)));
        assert_eq!(details.favorite_sync, FavoriteSync::Unknown);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn loading_another_food_opens_a_new_screen() {
        let mut state = loaded_state();

        begin_food_load(&mut state, FoodId::new(8));

        assert_eq!(state.history.len(), 2);
        assert!(state.is_showing_food(FoodId::new(8)));
    }

    #[test]
    fn extras_are_replaced_not_mutated() {
        let mut state = loaded_state();
        let before = state.food_details().unwrap().extras.clone();

        execute_command_sync(AppCommand::IncrementExtra { extra_id: 1 }, &mut state);

        assert_eq!(before[0].quantity, 0);
        assert_eq!(state.food_details().unwrap().extras[0].quantity, 1);
    }

    #[tokio::test]
    async fn quit_cancels_running_tasks() {
        use crate::testing::MockBackend;
        use std::sync::Arc;

        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let loader = DataLoader::new(Arc::new(MockBackend::new()), tx);
        let mut task_manager = BackgroundTaskManager::new();
        let mut state = AppState::new(FoodId::new(7));

        task_manager.spawn_task(order_task_id(FoodId::new(7)), async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        execute_command(AppCommand::Quit, &mut state, &mut task_manager, &loader);

        assert!(state.should_quit);
        assert!(!task_manager.is_running(&order_task_id(FoodId::new(7))));
    }
}
