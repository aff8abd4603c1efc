use super::{Cents, FoodId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::Request;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Cents,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
    /// Display price, filled in by the client after loading.
    #[serde(
        rename = "formattedPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl FoodItem {
    pub fn with_formatted_price(mut self, formatted_price: impl Into<String>) -> Self {
        self.formatted_price = Some(formatted_price.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: Cents,
}

// Requests

#[derive(Debug, Clone)]
pub struct GetFood {
    food_id: FoodId,
}

impl GetFood {
    pub fn new(food_id: FoodId) -> Self {
        Self { food_id }
    }
}

impl Request for GetFood {
    type Data = ();
    type Response = FoodItem;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/foods/{}", self.food_id).into()
    }
}
