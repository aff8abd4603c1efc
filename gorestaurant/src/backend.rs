use gorestaurant_api::{
    endpoints::{favorites::is_favorite_record, foods::FoodItem, FoodId},
    ApiError, Client, Request,
};
use std::future::Future;

/// Remote operations behind the food details screen.
///
/// Implemented by the HTTP [`Client`]; tests substitute
/// [`crate::testing::MockBackend`].
pub trait FoodBackend: Send + Sync + 'static {
    /// `GET /foods/{id}`
    fn get_food(&self, food_id: FoodId)
        -> impl Future<Output = Result<FoodItem, ApiError>> + Send;

    /// `GET /favorites/{id}`, reduced to membership
    fn is_favorite(&self, food_id: FoodId) -> impl Future<Output = Result<bool, ApiError>> + Send;

    /// `POST /favorites`
    fn add_favorite(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /favorites/{id}`
    fn remove_favorite(&self, food_id: FoodId)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `POST /orders`
    fn create_order(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl FoodBackend for Client {
    fn get_food(
        &self,
        food_id: FoodId,
    ) -> impl Future<Output = Result<FoodItem, ApiError>> + Send {
        self.send(Request::foods().get(food_id))
    }

    fn is_favorite(&self, food_id: FoodId) -> impl Future<Output = Result<bool, ApiError>> + Send {
        async move {
            match self.send(Request::favorites().get(food_id)).await {
                Ok(record) => Ok(is_favorite_record(&record)),
                // No record stored for this food
                Err(e) if e.is_not_found() => Ok(false),
                Err(e) => Err(e),
            }
        }
    }

    fn add_favorite(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move {
            self.send(Request::favorites().create(food)).await?;
            Ok(())
        }
    }

    fn remove_favorite(
        &self,
        food_id: FoodId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move {
            self.send(Request::favorites().delete(food_id)).await?;
            Ok(())
        }
    }

    fn create_order(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move {
            self.send(Request::orders().create(food)).await?;
            Ok(())
        }
    }
}
