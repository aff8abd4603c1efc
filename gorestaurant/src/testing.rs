use crate::app_core::{AppCore, DataEventHandler};
use crate::backend::FoodBackend;
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, FoodDetailsState, Preferences};
use gorestaurant_api::{
    endpoints::{
        foods::{Extra, FoodItem},
        Cents, FoodId,
    },
    ApiError, StatusCode,
};
use std::collections::{HashMap, HashSet};
use std::future::{ready, Future};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Food 7 at R$ 10,00 with a single R$ 2,50 extra
pub fn sample_food() -> FoodItem {
    FoodItem {
        id: FoodId::new(7),
        name: "Ao molho".to_string(),
        description: "Macarrão ao molho branco, fughi e cheiro verde das montanhas.".to_string(),
        price: Cents::new(1000),
        image_url: "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-gorestaurant-mobile/ao_molho.png".to_string(),
        extras: vec![Extra {
            id: 1,
            name: "Cheese".to_string(),
            value: Cents::new(250),
        }],
        formatted_price: None,
        favorite: None,
    }
}

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through execute_command_sync, so requests only get as far
/// as their in-flight state. Every command is recorded for assertions.
#[derive(Default)]
pub struct MockDataHandler {
    pub executed: Vec<AppCommand>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        self.executed.push(command.clone());
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Test app on the details screen of `food_id`, as if just opened
    pub fn new(food_id: FoodId) -> Self {
        Self::with_preferences(food_id, Preferences::default())
    }

    pub fn with_preferences(food_id: FoodId, preferences: Preferences) -> Self {
        let mut core = AppCore::new(
            MockDataHandler::new(),
            AppState::with_preferences(food_id, preferences),
        );
        core.execute(AppCommand::LoadFood { food_id });
        Self { core }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Commands executed so far, including the initial load
    pub fn executed(&self) -> &[AppCommand] {
        &self.core.handler().executed
    }

    /// Details state of the current screen; panics on any other screen
    pub fn details(&self) -> &FoodDetailsState {
        self.state()
            .food_details()
            .expect("Expected the food details screen")
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

/// Request seen by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    GetFood(FoodId),
    GetFavorite(FoodId),
    AddFavorite(FoodId),
    RemoveFavorite(FoodId),
    CreateOrder(FoodId),
}

/// In-memory [`FoodBackend`] that records every request
#[derive(Default)]
pub struct MockBackend {
    foods: HashMap<FoodId, FoodItem>,
    favorites: Mutex<HashSet<FoodId>>,
    orders: Mutex<Vec<FoodItem>>,
    calls: Mutex<Vec<BackendCall>>,
    fail_favorite_lookup: bool,
    fail_writes: bool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn server_error() -> ApiError {
    ApiError::Http(StatusCode::INTERNAL_SERVER_ERROR, String::new())
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_food(mut self, food: FoodItem) -> Self {
        self.foods.insert(food.id, food);
        self
    }

    pub fn with_favorite(self, food_id: FoodId) -> Self {
        lock(&self.favorites).insert(food_id);
        self
    }

    /// `GET /favorites/{id}` answers 500
    pub fn failing_favorite_lookup(mut self) -> Self {
        self.fail_favorite_lookup = true;
        self
    }

    /// Every POST/DELETE answers 500
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        lock(&self.calls).clone()
    }

    pub fn is_stored_favorite(&self, food_id: FoodId) -> bool {
        lock(&self.favorites).contains(&food_id)
    }

    pub fn orders(&self) -> Vec<FoodItem> {
        lock(&self.orders).clone()
    }

    fn record(&self, call: BackendCall) {
        lock(&self.calls).push(call);
    }
}

impl FoodBackend for MockBackend {
    fn get_food(
        &self,
        food_id: FoodId,
    ) -> impl Future<Output = Result<FoodItem, ApiError>> + Send {
        self.record(BackendCall::GetFood(food_id));
        ready(
            self.foods
                .get(&food_id)
                .cloned()
                .ok_or_else(|| ApiError::Http(StatusCode::NOT_FOUND, "{}".to_string())),
        )
    }

    fn is_favorite(&self, food_id: FoodId) -> impl Future<Output = Result<bool, ApiError>> + Send {
        self.record(BackendCall::GetFavorite(food_id));
        ready(if self.fail_favorite_lookup {
            Err(server_error())
        } else {
            Ok(self.is_stored_favorite(food_id))
        })
    }

    fn add_favorite(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send {
        self.record(BackendCall::AddFavorite(food.id));
        ready(if self.fail_writes {
            Err(server_error())
        } else {
            lock(&self.favorites).insert(food.id);
            Ok(())
        })
    }

    fn remove_favorite(
        &self,
        food_id: FoodId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        self.record(BackendCall::RemoveFavorite(food_id));
        ready(if self.fail_writes {
            Err(server_error())
        } else {
            lock(&self.favorites).remove(&food_id);
            Ok(())
        })
    }

    fn create_order(&self, food: FoodItem) -> impl Future<Output = Result<(), ApiError>> + Send {
        self.record(BackendCall::CreateOrder(food.id));
        ready(if self.fail_writes {
            Err(server_error())
        } else {
            lock(&self.orders).push(food);
            Ok(())
        })
    }
}
