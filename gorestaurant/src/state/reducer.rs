use super::{AppState, ExtraSelection, FavoriteSync, LoadingState, OrdersState};
use crate::events::DataEvent;
use crate::ui::{screens::Screen, utils};
use gorestaurant_api::endpoints::FoodId;
use ratatui::widgets::TableState;
use std::cell::RefCell;

pub const FOOD_LOAD_ALERT: &str = "Error on food load details";
pub const FAVORITE_ALERT: &str = "Error on favorite food";
pub const ORDER_ALERT: &str = "Error on finish order.";

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::FoodLoaded { food } => {
            let formatted_price = utils::fmt_currency(food.price, &state.preferences.currency);
            let Some(details) = state.food_details_mut(food.id) else {
                tracing::debug!("Ignoring food {} loaded for an inactive screen", food.id);
                return;
            };

            details.extras = food.extras.iter().map(ExtraSelection::from_extra).collect();
            details.table_state = RefCell::new(if details.extras.is_empty() {
                TableState::default()
            } else {
                TableState::default().with_selected(0)
            });
            details.food = Some(food.with_formatted_price(formatted_price));
            details.food_loading = LoadingState::Loaded;
        }

        DataEvent::FoodLoadFailed { food_id, error } => {
            tracing::error!("Food {} failed to load: {}", food_id, error);
            let Some(details) = state.food_details_mut(food_id) else {
                return;
            };
            details.food_loading = LoadingState::Error(error);
            state.show_alert(FOOD_LOAD_ALERT);
        }

        DataEvent::FavoriteStatusLoaded {
            food_id,
            is_favorite,
        } => {
            if let Some(details) = state.food_details_mut(food_id) {
                // A user toggle in flight owns the flag from here on
                if details.favorite_sync == FavoriteSync::Unknown {
                    details.is_favorite = is_favorite;
                    details.favorite_sync = FavoriteSync::Ready;
                }
            }
        }

        DataEvent::FavoriteStatusFailed { food_id, error } => {
            tracing::warn!("Favorite status for food {} unavailable: {}", food_id, error);
            let Some(details) = state.food_details_mut(food_id) else {
                return;
            };
            if details.favorite_sync == FavoriteSync::Unknown {
                details.favorite_sync = FavoriteSync::Ready;
            }
            state.show_alert(FOOD_LOAD_ALERT);
        }

        DataEvent::FavoriteUpdated {
            food_id,
            is_favorite,
        } => {
            if let Some(details) = state.food_details_mut(food_id) {
                details.is_favorite = is_favorite;
                details.favorite_sync = FavoriteSync::Ready;
                tracing::info!("Food {} favorite set to {}", food_id, is_favorite);
            }
        }

        DataEvent::FavoriteUpdateFailed { food_id, error } => {
            tracing::error!("Favorite update for food {} failed: {}", food_id, error);
            let Some(details) = state.food_details_mut(food_id) else {
                return;
            };
            // Flag was never flipped, so only the sync phase needs resetting
            details.favorite_sync = FavoriteSync::Ready;
            state.show_alert(FAVORITE_ALERT);
        }

        DataEvent::OrderSubmitted { food_id } => {
            tracing::info!("Order for food {} accepted", food_id);
            finish_order(state, food_id, None);
        }

        DataEvent::OrderSubmitFailed { food_id, error } => {
            tracing::error!("Order for food {} failed: {}", food_id, error);
            if state.preferences.navigate_on_order_failure {
                finish_order(state, food_id, Some(error));
            } else if let Some(details) = state.food_details_mut(food_id) {
                details.order_pending = false;
                state.show_alert(ORDER_ALERT);
            }
        }
    }
}

/// Leave the details screen for the orders screen once the order request
/// has settled.
fn finish_order(state: &mut AppState, food_id: FoodId, error: Option<String>) {
    let is_showing_food = state.is_showing_food(food_id);
    let Some(details) = state.food_details_mut(food_id) else {
        tracing::debug!("Order for food {} settled after its screen closed", food_id);
        return;
    };
    details.order_pending = false;

    let Some(food) = details.food.clone() else {
        return;
    };
    if !is_showing_food {
        return;
    }
    let orders = OrdersState::from_details(details, food, error);
    state.navigate_to(Screen::Orders(orders));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Preferences;
    use gorestaurant_api::endpoints::{
        foods::{Extra, FoodItem},
        Cents,
    };

    fn food() -> FoodItem {
        FoodItem {
            id: FoodId::new(7),
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: Cents::new(1000),
            image_url: "https://example.com/ao_molho.png".to_string(),
            extras: vec![Extra {
                id: 1,
                name: "Cheese".to_string(),
                value: Cents::new(250),
            }],
            formatted_price: None,
            favorite: None,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(FoodId::new(7));
        reduce_data_event(&mut state, DataEvent::FoodLoaded { food: food() });
        state
    }

    #[test]
    fn food_loaded_seeds_extras_and_formats_price() {
        let state = loaded_state();
        let details = state.food_details().unwrap();

        assert_eq!(details.food_loading, LoadingState::Loaded);
        assert_eq!(details.extras.len(), 1);
        assert_eq!(details.extras[0].quantity, 0);
        assert_eq!(details.selected_extra_id(), Some(1));
        assert_eq!(
            details.food.as_ref().unwrap().formatted_price.as_deref(),
            Some("R$ 10,00")
        );
    }

    #[test]
    fn results_reach_the_details_screen_under_orders() {
        let mut state = loaded_state();
        state.food_details_mut(FoodId::new(7)).unwrap().favorite_sync = FavoriteSync::Saving;
        reduce_data_event(
            &mut state,
            DataEvent::OrderSubmitted {
                food_id: FoodId::new(7),
            },
        );
        assert!(matches!(state.current_screen(), Screen::Orders(_)));

        reduce_data_event(
            &mut state,
            DataEvent::FavoriteUpdated {
                food_id: FoodId::new(7),
                is_favorite: true,
            },
        );

        state.navigate_back();
        let details = state.food_details().unwrap();
        assert!(details.is_favorite);
        assert_eq!(details.favorite_sync, FavoriteSync::Ready);
    }

    #[test]
    fn extreme_prices_load_and_total_without_panicking() {
        for price in [1e17, -1e17] {
            let mut state = AppState::new(FoodId::new(7));
            let mut food = food();
            food.price = Cents::from_decimal(price);
            reduce_data_event(&mut state, DataEvent::FoodLoaded { food });

            let details = state.current_food_details_mut().unwrap();
            details.increment_food();
            details.extras = crate::state::increment_extra(&details.extras, 1);
            let total = details.cart_total();

            assert_eq!(total.is_negative(), price < 0.0);
            assert_eq!(details.food_loading, LoadingState::Loaded);
        }
    }

    #[test]
    fn food_loaded_for_other_id_is_ignored() {
        let mut state = AppState::new(FoodId::new(8));
        reduce_data_event(&mut state, DataEvent::FoodLoaded { food: food() });
        assert!(state.food_details().unwrap().food.is_none());
    }

    #[test]
    fn late_favorite_status_does_not_override_toggle() {
        let mut state = loaded_state();
        state.food_details_mut(FoodId::new(7)).unwrap().favorite_sync = FavoriteSync::Saving;

        reduce_data_event(
            &mut state,
            DataEvent::FavoriteStatusLoaded {
                food_id: FoodId::new(7),
                is_favorite: true,
            },
        );

        let details = state.food_details().unwrap();
        assert!(!details.is_favorite);
        assert_eq!(details.favorite_sync, FavoriteSync::Saving);
    }

    #[test]
    fn favorite_status_failure_alerts_and_enables_toggle() {
        let mut state = loaded_state();
        reduce_data_event(
            &mut state,
            DataEvent::FavoriteStatusFailed {
                food_id: FoodId::new(7),
                error: "(500 Internal Server Error)".to_string(),
            },
        );

        assert_eq!(state.alert.as_deref(), Some(FOOD_LOAD_ALERT));
        let details = state.food_details().unwrap();
        assert!(!details.is_favorite);
        assert!(details.can_toggle_favorite());
    }

    #[test]
    fn order_failure_stays_when_navigation_is_gated() {
        let preferences = Preferences {
            navigate_on_order_failure: false,
            ..Preferences::default()
        };
        let mut state = AppState::with_preferences(FoodId::new(7), preferences);
        reduce_data_event(&mut state, DataEvent::FoodLoaded { food: food() });
        state.food_details_mut(FoodId::new(7)).unwrap().order_pending = true;

        reduce_data_event(
            &mut state,
            DataEvent::OrderSubmitFailed {
                food_id: FoodId::new(7),
                error: "connection refused".to_string(),
            },
        );

        assert_eq!(state.alert.as_deref(), Some(ORDER_ALERT));
        let details = state.food_details().unwrap();
        assert!(!details.order_pending);
    }

    #[test]
    fn order_settled_snapshots_selection() {
        let mut state = loaded_state();
        {
            let details = state.food_details_mut(FoodId::new(7)).unwrap();
            details.extras[0].quantity = 2;
            details.food_quantity = 2;
        }

        reduce_data_event(
            &mut state,
            DataEvent::OrderSubmitted {
                food_id: FoodId::new(7),
            },
        );

        let Screen::Orders(orders) = state.current_screen() else {
            panic!("expected orders screen");
        };
        assert!(orders.is_confirmed());
        assert_eq!(orders.total, Cents::new(3000));
        assert_eq!(orders.extras.len(), 1);
        assert_eq!(orders.food_quantity, 2);
    }
}
