pub mod reducer;

use crate::settings::{CurrencyFormat, Settings};
use crate::ui::screens::Screen;
use gorestaurant_api::endpoints::{
    foods::{Extra, FoodItem},
    Cents, FoodId,
};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Where the favorite flag stands relative to the server.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteSync {
    /// Status lookup has not answered yet; toggling is disabled.
    #[default]
    Unknown,
    Ready,
    /// A POST/DELETE is in flight.
    Saving,
}

/// Icon shown in the header for the favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    Favorite,
    FavoriteBorder,
}

impl FavoriteIcon {
    pub fn for_flag(is_favorite: bool) -> Self {
        if is_favorite {
            Self::Favorite
        } else {
            Self::FavoriteBorder
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::FavoriteBorder => "favorite-border",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Favorite => "♥",
            Self::FavoriteBorder => "♡",
        }
    }
}

/// An extra offered with the food, together with how many the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSelection {
    pub id: u64,
    pub name: String,
    pub value: Cents,
    pub quantity: u32,
}

impl ExtraSelection {
    pub fn from_extra(extra: &Extra) -> Self {
        Self {
            id: extra.id,
            name: extra.name.clone(),
            value: extra.value,
            quantity: 0,
        }
    }

    pub fn subtotal(&self) -> Cents {
        self.value * self.quantity
    }
}

/// Returns a new extras list with the quantity of `extra_id` raised by one.
/// Unknown ids leave the list unchanged.
pub fn increment_extra(extras: &[ExtraSelection], extra_id: u64) -> Vec<ExtraSelection> {
    extras
        .iter()
        .map(|extra| {
            if extra.id == extra_id {
                ExtraSelection {
                    quantity: extra.quantity.saturating_add(1),
                    ..extra.clone()
                }
            } else {
                extra.clone()
            }
        })
        .collect()
}

/// Returns a new extras list with the quantity of `extra_id` lowered by one,
/// never below zero.
pub fn decrement_extra(extras: &[ExtraSelection], extra_id: u64) -> Vec<ExtraSelection> {
    extras
        .iter()
        .map(|extra| {
            if extra.id == extra_id {
                ExtraSelection {
                    quantity: extra.quantity.saturating_sub(1),
                    ..extra.clone()
                }
            } else {
                extra.clone()
            }
        })
        .collect()
}

/// User-facing options that shape how state is derived and displayed
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub currency: CurrencyFormat,
    pub navigate_on_order_failure: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            navigate_on_order_failure: true,
        }
    }
}

impl From<&Settings> for Preferences {
    fn from(settings: &Settings) -> Self {
        Self {
            currency: settings.currency.clone(),
            navigate_on_order_failure: settings.orders.navigate_on_failure,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,
    pub preferences: Preferences,

    // UI state
    pub alert: Option<String>,
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    /// Start on the details screen of `food_id`
    pub fn new(food_id: FoodId) -> Self {
        Self::with_preferences(food_id, Preferences::default())
    }

    pub fn with_preferences(food_id: FoodId, preferences: Preferences) -> Self {
        Self {
            history: vec![Screen::FoodDetails(Box::new(FoodDetailsState::new(food_id)))],
            preferences,

            alert: None,
            help_visible: false,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Details state of the current screen, if it is a food details screen
    pub fn food_details(&self) -> Option<&FoodDetailsState> {
        match self.current_screen() {
            Screen::FoodDetails(details) => Some(&**details),
            _ => None,
        }
    }

    /// Mutable details state of the current screen
    pub fn current_food_details_mut(&mut self) -> Option<&mut FoodDetailsState> {
        match self.current_screen_mut() {
            Screen::FoodDetails(details) => Some(&mut **details),
            _ => None,
        }
    }

    /// Mutable details state for `food_id`, searched through the whole
    /// navigation stack (the screen stays mounted under the orders screen).
    /// `None` means the screen was torn down and results should be dropped.
    pub fn food_details_mut(&mut self, food_id: FoodId) -> Option<&mut FoodDetailsState> {
        self.history.iter_mut().rev().find_map(|screen| match screen {
            Screen::FoodDetails(details) if details.food_id == food_id => Some(&mut **details),
            _ => None,
        })
    }

    /// Whether the current screen is the details screen of `food_id`
    pub fn is_showing_food(&self, food_id: FoodId) -> bool {
        self.food_details()
            .is_some_and(|details| details.food_id == food_id)
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Showing alert: {}", message);
        self.alert = Some(message);
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::FoodDetails(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.food_loading {
                    return Some(throbber_state);
                }
            }
            Screen::Orders(_) => {}
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct FoodDetailsState {
    pub food_id: FoodId,
    pub food: Option<FoodItem>,
    pub food_loading: LoadingState,
    pub extras: Vec<ExtraSelection>,
    pub food_quantity: u32,
    pub is_favorite: bool,
    pub favorite_sync: FavoriteSync,
    pub order_pending: bool,
    pub table_state: RefCell<TableState>,
}

impl FoodDetailsState {
    pub fn new(food_id: FoodId) -> Self {
        Self {
            food_id,
            food: None,
            food_loading: LoadingState::default(),
            extras: Vec::new(),
            food_quantity: 1,
            is_favorite: false,
            favorite_sync: FavoriteSync::default(),
            order_pending: false,
            table_state: RefCell::default(),
        }
    }

    /// (food price + Σ extra value × quantity) × order quantity
    pub fn cart_total(&self) -> Cents {
        let food_price = self.food.as_ref().map(|f| f.price).unwrap_or_default();
        let extras_value: Cents = self.extras.iter().map(ExtraSelection::subtotal).sum();

        (food_price + extras_value) * self.food_quantity
    }

    pub fn increment_food(&mut self) {
        self.food_quantity = self.food_quantity.saturating_add(1);
    }

    pub fn decrement_food(&mut self) {
        self.food_quantity = self.food_quantity.saturating_sub(1).max(1);
    }

    pub fn favorite_icon(&self) -> FavoriteIcon {
        FavoriteIcon::for_flag(self.is_favorite)
    }

    pub fn can_toggle_favorite(&self) -> bool {
        self.food.is_some() && self.favorite_sync == FavoriteSync::Ready
    }

    pub fn selected_extra_id(&self) -> Option<u64> {
        let selected = self.table_state.borrow().selected()?;
        self.extras.get(selected).map(|extra| extra.id)
    }
}

/// Result of a finished order, shown on the orders screen
#[derive(Debug, Clone)]
pub struct OrdersState {
    pub food: FoodItem,
    pub food_quantity: u32,
    pub extras: Vec<ExtraSelection>,
    pub total: Cents,
    /// Set when the order request failed; the screen is shown anyway.
    pub error: Option<String>,
}

impl OrdersState {
    pub fn from_details(details: &FoodDetailsState, food: FoodItem, error: Option<String>) -> Self {
        Self {
            food,
            food_quantity: details.food_quantity,
            extras: details
                .extras
                .iter()
                .filter(|extra| extra.quantity > 0)
                .cloned()
                .collect(),
            total: details.cart_total(),
            error,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.error.is_none()
    }
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(self.num_items() - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }
}

impl Scrollable for FoodDetailsState {
    fn num_items(&self) -> usize {
        self.extras.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
