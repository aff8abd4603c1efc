use super::foods::FoodItem;
use super::FoodId;
use serde_json::Value;
use std::borrow::Cow;
use tower_api_client::{EmptyResponse, Method, Request, RequestData};

// Common

/// Whether a favorites lookup body marks the food as favorite.
///
/// The endpoint answers with the stored record, or with an empty body when
/// there is none, so membership is decided by JavaScript-style truthiness:
/// any object or array counts, even an empty one.
pub fn is_favorite_record(record: &Value) -> bool {
    match record {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Requests

#[derive(Debug, Clone)]
pub struct GetFavorite {
    food_id: FoodId,
}

impl GetFavorite {
    pub fn new(food_id: FoodId) -> Self {
        Self { food_id }
    }
}

impl Request for GetFavorite {
    type Data = ();
    type Response = Value;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/favorites/{}", self.food_id).into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateFavorite {
    food: FoodItem,
}

impl CreateFavorite {
    pub fn new(food: FoodItem) -> Self {
        Self { food }
    }
}

impl Request for CreateFavorite {
    type Data = FoodItem;
    type Response = Value;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/favorites".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.food)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteFavorite {
    food_id: FoodId,
}

impl DeleteFavorite {
    pub fn new(food_id: FoodId) -> Self {
        Self { food_id }
    }
}

impl Request for DeleteFavorite {
    type Data = ();
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/favorites/{}", self.food_id).into()
    }
}
