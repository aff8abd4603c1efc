pub mod data_loader;

use gorestaurant_api::endpoints::FoodId;
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Task id for loading a food and its favorite status
pub fn food_task_id(food_id: FoodId) -> String {
    format!("load_food_{}", food_id)
}

/// Task id for a favorite POST/DELETE
pub fn favorite_task_id(food_id: FoodId) -> String {
    format!("favorite_{}", food_id)
}

/// Task id for an order submission
pub fn order_task_id(food_id: FoodId) -> String {
    format!("order_{}", food_id)
}

/// Manages background requests
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Finished handles pile up otherwise
        self.tasks.retain(|_, handle| !handle.is_finished());

        if let Some(handle) = self.tasks.remove(&task_id) {
            tracing::debug!("Replacing running task {}", task_id);
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Cancel every task belonging to `food_id` (screen teardown)
    pub fn cancel_food_tasks(&mut self, food_id: FoodId) {
        for task_id in [
            food_task_id(food_id),
            favorite_task_id(food_id),
            order_task_id(food_id),
        ] {
            if let Some(handle) = self.tasks.remove(&task_id) {
                tracing::debug!("Cancelling task {}", task_id);
                handle.abort();
            }
        }
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.tasks
            .get(task_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
