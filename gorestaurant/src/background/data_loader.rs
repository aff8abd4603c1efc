use crate::backend::FoodBackend;
use crate::events::DataEvent;
use gorestaurant_api::endpoints::{foods::FoodItem, FoodId};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs backend requests and reports their outcome as [`DataEvent`]s
pub struct DataLoader<B> {
    pub backend: Arc<B>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

// Derive would require `B: Clone`
impl<B> Clone for DataLoader<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            data_tx: self.data_tx.clone(),
        }
    }
}

impl<B: FoodBackend> DataLoader<B> {
    pub fn new(backend: Arc<B>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { backend, data_tx }
    }

    /// Load a food, then its favorite status.
    ///
    /// The status lookup only starts once the food has arrived, and is
    /// skipped entirely when the food could not be loaded.
    pub async fn load_food(&self, food_id: FoodId) {
        tracing::info!("Loading food {}", food_id);

        match self.backend.get_food(food_id).await {
            Ok(food) => {
                tracing::info!("Loaded food {} ({} extras)", food_id, food.extras.len());
                let _ = self.data_tx.send(DataEvent::FoodLoaded { food });
            }
            Err(e) => {
                tracing::error!("Failed to load food {}: {}", food_id, e);
                let _ = self.data_tx.send(DataEvent::FoodLoadFailed {
                    food_id,
                    error: e.to_string(),
                });
                return;
            }
        }

        match self.backend.is_favorite(food_id).await {
            Ok(is_favorite) => {
                tracing::debug!("Food {} favorite status: {}", food_id, is_favorite);
                let _ = self.data_tx.send(DataEvent::FavoriteStatusLoaded {
                    food_id,
                    is_favorite,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load favorite status for food {}: {}", food_id, e);
                let _ = self.data_tx.send(DataEvent::FavoriteStatusFailed {
                    food_id,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Store (`favorite == true`) or remove the favorite record for `food`
    pub async fn set_favorite(&self, food: FoodItem, favorite: bool) {
        let food_id = food.id;
        tracing::info!("Setting favorite={} for food {}", favorite, food_id);

        let result = if favorite {
            self.backend.add_favorite(food).await
        } else {
            self.backend.remove_favorite(food_id).await
        };

        match result {
            Ok(()) => {
                let _ = self.data_tx.send(DataEvent::FavoriteUpdated {
                    food_id,
                    is_favorite: favorite,
                });
            }
            Err(e) => {
                tracing::error!("Failed to update favorite for food {}: {}", food_id, e);
                let _ = self.data_tx.send(DataEvent::FavoriteUpdateFailed {
                    food_id,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Submit an order for `food`
    pub async fn submit_order(&self, food: FoodItem) {
        let food_id = food.id;
        tracing::info!("Submitting order for food {}", food_id);

        match self.backend.create_order(food).await {
            Ok(()) => {
                tracing::info!("Order for food {} created", food_id);
                let _ = self.data_tx.send(DataEvent::OrderSubmitted { food_id });
            }
            Err(e) => {
                tracing::error!("Failed to submit order for food {}: {}", food_id, e);
                let _ = self.data_tx.send(DataEvent::OrderSubmitFailed {
                    food_id,
                    error: e.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_food, BackendCall, MockBackend};

    fn loader(backend: MockBackend) -> (DataLoader<MockBackend>, mpsc::UnboundedReceiver<DataEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DataLoader::new(Arc::new(backend), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<DataEvent>) -> Vec<DataEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn load_food_fetches_the_food_before_its_favorite_status() {
        let backend = MockBackend::new().with_food(sample_food()).with_favorite(FoodId::new(7));
        let (loader, mut rx) = loader(backend);

        loader.load_food(FoodId::new(7)).await;

        assert_eq!(
            loader.backend.calls(),
            vec![
                BackendCall::GetFood(FoodId::new(7)),
                BackendCall::GetFavorite(FoodId::new(7)),
            ]
        );
        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], DataEvent::FoodLoaded { food } if food.id == FoodId::new(7)));
        assert!(matches!(
            events[1],
            DataEvent::FavoriteStatusLoaded { is_favorite: true, .. }
        ));
    }

    #[tokio::test]
    async fn failed_food_load_skips_the_favorite_lookup() {
        let (loader, mut rx) = loader(MockBackend::new());

        loader.load_food(FoodId::new(7)).await;

        assert_eq!(loader.backend.calls(), vec![BackendCall::GetFood(FoodId::new(7))]);
        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], DataEvent::FoodLoadFailed { .. }));
    }

    #[tokio::test]
    async fn favorite_lookup_failure_is_reported() {
        let backend = MockBackend::new()
            .with_food(sample_food())
            .failing_favorite_lookup();
        let (loader, mut rx) = loader(backend);

        loader.load_food(FoodId::new(7)).await;

        let events = drain(&mut rx);
        assert!(matches!(events[0], DataEvent::FoodLoaded { .. }));
        assert!(matches!(events[1], DataEvent::FavoriteStatusFailed { .. }));
    }

    #[tokio::test]
    async fn favoriting_posts_the_food() {
        let (loader, mut rx) = loader(MockBackend::new().with_food(sample_food()));

        loader.set_favorite(sample_food(), true).await;

        assert_eq!(loader.backend.calls(), vec![BackendCall::AddFavorite(FoodId::new(7))]);
        assert!(loader.backend.is_stored_favorite(FoodId::new(7)));
        assert!(matches!(
            drain(&mut rx)[..],
            [DataEvent::FavoriteUpdated { is_favorite: true, .. }]
        ));
    }

    #[tokio::test]
    async fn unfavoriting_deletes_the_record() {
        let backend = MockBackend::new()
            .with_food(sample_food())
            .with_favorite(FoodId::new(7));
        let (loader, mut rx) = loader(backend);

        loader.set_favorite(sample_food(), false).await;

        assert_eq!(
            loader.backend.calls(),
            vec![BackendCall::RemoveFavorite(FoodId::new(7))]
        );
        assert!(!loader.backend.is_stored_favorite(FoodId::new(7)));
        assert!(matches!(
            drain(&mut rx)[..],
            [DataEvent::FavoriteUpdated { is_favorite: false, .. }]
        ));
    }

    #[tokio::test]
    async fn failed_favorite_write_reports_failure() {
        let backend = MockBackend::new().with_food(sample_food()).failing_writes();
        let (loader, mut rx) = loader(backend);

        loader.set_favorite(sample_food(), true).await;

        assert!(!loader.backend.is_stored_favorite(FoodId::new(7)));
        assert!(matches!(
            drain(&mut rx)[..],
            [DataEvent::FavoriteUpdateFailed { .. }]
        ));
    }

    #[tokio::test]
    async fn order_failure_still_produces_an_event() {
        let backend = MockBackend::new().with_food(sample_food()).failing_writes();
        let (loader, mut rx) = loader(backend);

        loader.submit_order(sample_food()).await;

        assert_eq!(loader.backend.calls(), vec![BackendCall::CreateOrder(FoodId::new(7))]);
        assert!(matches!(
            drain(&mut rx)[..],
            [DataEvent::OrderSubmitFailed { .. }]
        ));
    }

    #[tokio::test]
    async fn successful_order_is_reported() {
        let (loader, mut rx) = loader(MockBackend::new().with_food(sample_food()));

        loader.submit_order(sample_food()).await;

        assert!(matches!(
            drain(&mut rx)[..],
            [DataEvent::OrderSubmitted { .. }]
        ));
    }
}
