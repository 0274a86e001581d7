//! A `tracing-subscriber` layer that collects emitted events so tests can assert on the logs a
//! data source produced.

use alloc::{format, string::String, sync::Arc, vec::Vec};
use spin::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// A single collected event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedEvent {
    /// The level the event was emitted at.
    pub level: Level,
    /// The target of the event.
    pub target: String,
    /// The debug rendering of the event, including its message and fields.
    pub message: String,
}

/// The storage for the collected events.
#[derive(Debug, Default, Clone)]
pub struct TraceStorage(pub Arc<Mutex<Vec<CollectedEvent>>>);

impl TraceStorage {
    /// Returns the messages in the storage that match the specified level.
    pub fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0.lock().iter().filter(|e| e.level == level).map(|e| e.message.clone()).collect()
    }

    /// Returns the messages in the storage that were emitted under the specified target.
    pub fn get_by_target(&self, target: &str) -> Vec<String> {
        self.0.lock().iter().filter(|e| e.target == target).map(|e| e.message.clone()).collect()
    }

    /// Locks the storage and returns the items.
    pub fn lock(&self) -> spin::MutexGuard<'_, Vec<CollectedEvent>> {
        self.0.lock()
    }
}

/// A subscriber layer that collects events along with their level and target.
#[derive(Debug, Default)]
pub struct CollectingLayer {
    /// The storage for the collected events.
    pub storage: TraceStorage,
}

impl CollectingLayer {
    /// Creates a new collecting layer with the specified storage.
    pub const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let collected = CollectedEvent {
            level: *metadata.level(),
            target: String::from(metadata.target()),
            message: format!("{:?}", event),
        };
        self.storage.0.lock().push(collected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[test]
    fn test_collects_by_level_and_target() {
        let trace_store: TraceStorage = Default::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard = tracing_subscriber::Registry::default().with(layer).set_default();

        tracing::warn!(target: "mixed-source", "skipping item");
        tracing::debug!(target: "blob-resolution", "resolving blobs");

        assert_eq!(trace_store.lock().len(), 2);
        let warns = trace_store.get_by_level(Level::WARN);
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("skipping item"));
        assert_eq!(trace_store.get_by_target("blob-resolution").len(), 1);
        assert!(trace_store.get_by_target("batch-tx").is_empty());
    }
}
