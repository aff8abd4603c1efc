use crate::endpoints::{
    FoodId,
    favorites::{CreateFavorite, DeleteFavorite, GetFavorite},
    foods::{FoodItem, GetFood},
    orders::CreateOrder,
};

pub struct FoodRepository;

impl FoodRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get(&self, food_id: FoodId) -> GetFood {
        GetFood::new(food_id)
    }
}

pub struct FavoriteRepository;

impl FavoriteRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get(&self, food_id: FoodId) -> GetFavorite {
        GetFavorite::new(food_id)
    }

    pub fn create(&self, food: FoodItem) -> CreateFavorite {
        CreateFavorite::new(food)
    }

    pub fn delete(&self, food_id: FoodId) -> DeleteFavorite {
        DeleteFavorite::new(food_id)
    }
}

pub struct OrderRepository;

impl OrderRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn create(&self, food: FoodItem) -> CreateOrder {
        CreateOrder::new(food)
    }
}
