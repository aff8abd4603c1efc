use super::foods::FoodItem;
use serde_json::Value;
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Requests

/// Places an order. The body is the food item as loaded by the client.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    food: FoodItem,
}

impl CreateOrder {
    pub fn new(food: FoodItem) -> Self {
        Self { food }
    }
}

impl Request for CreateOrder {
    type Data = FoodItem;
    type Response = Value;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/orders".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.food)
    }
}
