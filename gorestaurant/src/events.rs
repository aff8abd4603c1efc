use gorestaurant_api::endpoints::{foods::FoodItem, FoodId};

/// Commands to execute (user actions → background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,

    // Navigation
    NavigateBack,

    // Data loading
    LoadFood {
        food_id: FoodId,
    },

    // Extras and quantity
    IncrementExtra {
        extra_id: u64,
    },
    DecrementExtra {
        extra_id: u64,
    },
    IncrementFood,
    DecrementFood,

    // Remote writes
    ToggleFavorite,
    FinishOrder,

    // Popups
    DismissAlert,
    ToggleHelp,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    FoodLoaded {
        food: FoodItem,
    },
    FoodLoadFailed {
        food_id: FoodId,
        error: String,
    },

    // Favorite status lookup (issued after the food is loaded)
    FavoriteStatusLoaded {
        food_id: FoodId,
        is_favorite: bool,
    },
    FavoriteStatusFailed {
        food_id: FoodId,
        error: String,
    },

    // Favorite toggle
    FavoriteUpdated {
        food_id: FoodId,
        is_favorite: bool,
    },
    FavoriteUpdateFailed {
        food_id: FoodId,
        error: String,
    },

    // Order submission
    OrderSubmitted {
        food_id: FoodId,
    },
    OrderSubmitFailed {
        food_id: FoodId,
        error: String,
    },
}
