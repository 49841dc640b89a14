use crate::source::NumberSource;
use number_window::{MergeResult, NumberWindow};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub window: Arc<Mutex<NumberWindow>>,
    pub number_source: Arc<dyn NumberSource>,
}

impl AppState {
    pub fn new(window: NumberWindow, number_source: Arc<dyn NumberSource>) -> Self {
        Self {
            window: Arc::new(Mutex::new(window)),
            number_source,
        }
    }

    /// Merge a batch and read the post-merge average under one lock.
    pub async fn merge_and_average(&self, numbers: Vec<i64>) -> (MergeResult, f64) {
        let mut window = self.window.lock().await;
        let result = window.merge(numbers);
        (result, window.average())
    }
}
