pub mod food_details_screen;
pub mod orders_screen;

use crate::state::{FoodDetailsState, OrdersState};

#[derive(Debug, Clone)]
pub enum Screen {
    FoodDetails(Box<FoodDetailsState>),
    Orders(OrdersState),
}
