pub mod endpoints;
mod error;
pub mod repositories;

pub use crate::error::ApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub use tower_api_client::StatusCode;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, ApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn foods() -> FoodRepository {
        FoodRepository::new()
    }

    pub fn favorites() -> FavoriteRepository {
        FavoriteRepository::new()
    }

    pub fn orders() -> OrderRepository {
        OrderRepository::new()
    }
}
