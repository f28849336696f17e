//! Comparison basket store

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::CourseId;
use tokio::sync::watch;

use crate::core::error::Result;
use crate::notify::Notifier;
use crate::storage::{Storage, COMPARISON_ITEMS_KEY};

/// Most courses the basket holds at once.
pub const MAX_COMPARISON_ITEMS: usize = 3;

pub const DUPLICATE_ITEM_MESSAGE: &str = "This course is already in the comparison basket.";
pub const BASKET_FULL_MESSAGE: &str = "You can compare at most 3 courses at a time.";

/// A course picked for comparison.
///
/// Only `id` is interpreted; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub id: CourseId,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl ComparisonItem {
    pub fn new(id: CourseId) -> Self {
        Self {
            id,
            details: Map::new(),
        }
    }

    /// Build an item from any course shape that serializes with an `id`.
    pub fn from_course<T: Serialize + ?Sized>(course: &T) -> Result<Self> {
        Ok(serde_json::from_value(serde_json::to_value(course)?)?)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.details.get(name)
    }
}

/// Ordered set of up to [`MAX_COMPARISON_ITEMS`] courses, unique by id,
/// mirrored into the storage port under `comparison_items`.
///
/// Refused additions are reported to the user through the [`Notifier`] and
/// silently skipped; callers get no signal.
pub struct ComparisonStore {
    items: watch::Sender<Vec<ComparisonItem>>,
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn Notifier>,
}

impl ComparisonStore {
    /// Rehydrate from storage. Absent or malformed data yields an empty basket.
    pub fn new(storage: Arc<dyn Storage>, notifier: Arc<dyn Notifier>) -> Self {
        let items = load(storage.as_ref());
        tracing::debug!(count = items.len(), "Comparison store rehydrated");

        let (items, _) = watch::channel(items);
        Self {
            items,
            storage,
            notifier,
        }
    }

    pub fn items(&self) -> Vec<ComparisonItem> {
        self.items.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_added(&self, course_id: CourseId) -> bool {
        self.items.borrow().iter().any(|item| item.id == course_id)
    }

    /// Ids in insertion order, ready for an analysis request.
    pub fn course_ids(&self) -> Vec<CourseId> {
        self.items.borrow().iter().map(|item| item.id).collect()
    }

    /// Receiver that observes every change to the basket.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ComparisonItem>> {
        self.items.subscribe()
    }

    /// Append a course unless it is already present or the basket is full.
    pub fn add_item(&self, course: ComparisonItem) {
        let course_id = course.id;
        let mut refusal = None;

        self.items.send_if_modified(|items| {
            if items.iter().any(|item| item.id == course.id) {
                refusal = Some(DUPLICATE_ITEM_MESSAGE);
                return false;
            }
            if items.len() >= MAX_COMPARISON_ITEMS {
                refusal = Some(BASKET_FULL_MESSAGE);
                return false;
            }
            items.push(course);
            true
        });

        match refusal {
            Some(message) => {
                tracing::debug!(course_id, reason = message, "Comparison item rejected");
                self.notifier.alert(message);
            }
            None => {
                tracing::debug!(course_id, "Comparison item added");
                self.persist();
            }
        }
    }

    /// Remove the course with this id. No-op when absent.
    pub fn remove_item(&self, course_id: CourseId) {
        let removed = self.items.send_if_modified(|items| {
            match items.iter().position(|item| item.id == course_id) {
                Some(index) => {
                    items.remove(index);
                    true
                }
                None => false,
            }
        });

        if removed {
            tracing::debug!(course_id, "Comparison item removed");
            self.persist();
        }
    }

    pub fn clear(&self) {
        self.items.send_modify(|items| items.clear());
        tracing::debug!("Comparison basket cleared");
        self.persist();
    }

    fn persist(&self) {
        let encoded = serde_json::to_string(&*self.items.borrow());
        let result = match encoded {
            Ok(json) => self.storage.set_item(COMPARISON_ITEMS_KEY, &json),
            Err(e) => Err(e.into()),
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist comparison basket");
        }
    }
}

fn load(storage: &dyn Storage) -> Vec<ComparisonItem> {
    let Some(raw) = storage.get_item(COMPARISON_ITEMS_KEY) else {
        return Vec::new();
    };

    let parsed: Vec<ComparisonItem> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed comparison basket");
            return Vec::new();
        }
    };

    // Hand-edited storage may break the basket's invariants
    let mut items: Vec<ComparisonItem> = Vec::with_capacity(MAX_COMPARISON_ITEMS);
    for item in parsed {
        if items.len() == MAX_COMPARISON_ITEMS {
            tracing::warn!("Persisted comparison basket over capacity, truncating");
            break;
        }
        if !items.iter().any(|kept| kept.id == item.id) {
            items.push(item);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogNotifier;
    use crate::storage::MemoryStorage;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts warn-level events
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.lock().push(message.to_string());
        }
    }

    struct Fixture {
        store: ComparisonStore,
        storage: Arc<dyn Storage>,
        notifier: Arc<RecordingNotifier>,
    }

    fn fixture_with(storage: Arc<dyn Storage>) -> Fixture {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = ComparisonStore::new(storage.clone(), notifier.clone());
        Fixture {
            store,
            storage,
            notifier,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(Arc::new(MemoryStorage::new()))
    }

    fn course(id: CourseId) -> ComparisonItem {
        ComparisonItem::from_course(&serde_json::json!({
            "id": id,
            "name": format!("Course {}", id),
            "org_name": "Seoul National University"
        }))
        .unwrap()
    }

    fn persisted(storage: &Arc<dyn Storage>) -> Vec<ComparisonItem> {
        serde_json::from_str(&storage.get_item(COMPARISON_ITEMS_KEY).unwrap()).unwrap()
    }

    #[test]
    fn test_fourth_item_rejected_and_order_kept() {
        let f = fixture();

        f.store.add_item(course(1));
        f.store.add_item(course(2));
        f.store.add_item(course(3));
        f.store.add_item(course(4));

        assert_eq!(f.store.count(), 3);
        assert_eq!(f.store.course_ids(), vec![1, 2, 3]);
        assert!(!f.store.is_added(4));
        assert_eq!(*f.notifier.messages.lock(), vec![BASKET_FULL_MESSAGE.to_string()]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let f = fixture();

        f.store.add_item(course(1));
        f.store.add_item(course(1));

        assert_eq!(f.store.course_ids(), vec![1]);
        assert_eq!(*f.notifier.messages.lock(), vec![DUPLICATE_ITEM_MESSAGE.to_string()]);
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let f = fixture();
        for id in 1..=3 {
            f.store.add_item(course(id));
        }

        f.store.add_item(course(2));

        assert_eq!(*f.notifier.messages.lock(), vec![DUPLICATE_ITEM_MESSAGE.to_string()]);
    }

    #[test]
    fn test_invariants_hold_for_arbitrary_sequences() {
        let f = fixture();
        let ids = [5, 1, 5, 2, 2, 9, 1, 7, 3, 5, 8];

        for (step, id) in ids.iter().enumerate() {
            if step % 4 == 3 {
                f.store.remove_item(*id);
            } else {
                f.store.add_item(course(*id));
            }

            let current = f.store.course_ids();
            assert!(current.len() <= MAX_COMPARISON_ITEMS);
            let mut deduped = current.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), current.len());
        }
    }

    #[test]
    fn test_add_then_is_added() {
        let f = fixture();
        f.store.add_item(course(42));
        assert!(f.store.is_added(42));
        assert!(f.notifier.messages.lock().is_empty());
    }

    #[test]
    fn test_remove_then_not_added() {
        let f = fixture();
        f.store.add_item(course(1));
        f.store.add_item(course(2));

        f.store.remove_item(1);

        assert!(!f.store.is_added(1));
        assert_eq!(f.store.course_ids(), vec![2]);
        assert_eq!(
            persisted(&f.storage).iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let f = fixture();
        f.store.add_item(course(1));

        f.store.remove_item(99);

        assert_eq!(f.store.course_ids(), vec![1]);
    }

    #[test]
    fn test_clear_empties_memory_and_storage() {
        let f = fixture();
        f.store.add_item(course(1));
        f.store.add_item(course(2));

        f.store.clear();

        assert_eq!(f.store.count(), 0);
        assert_eq!(f.storage.get_item(COMPARISON_ITEMS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_persisted_state_round_trips() {
        let f = fixture();
        f.store.add_item(course(3));
        f.store.add_item(course(1));
        f.store.add_item(course(2));

        let rehydrated = fixture_with(f.storage.clone());

        assert_eq!(rehydrated.store.items(), f.store.items());
        assert_eq!(
            rehydrated.store.items()[0].field("org_name"),
            Some(&serde_json::json!("Seoul National University"))
        );
    }

    #[test]
    fn test_malformed_storage_fails_closed() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set_item(COMPARISON_ITEMS_KEY, "not json at all").unwrap();

        let f = fixture_with(storage);

        assert_eq!(f.store.count(), 0);
        f.store.add_item(course(1));
        assert_eq!(f.store.course_ids(), vec![1]);
    }

    #[test]
    fn test_items_without_id_fail_closed() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .set_item(COMPARISON_ITEMS_KEY, r#"[{"name":"no id"}]"#)
            .unwrap();

        assert_eq!(fixture_with(storage).store.count(), 0);
    }

    #[test]
    fn test_rehydrate_drops_duplicates_and_excess() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage
            .set_item(
                COMPARISON_ITEMS_KEY,
                r#"[{"id":1},{"id":1},{"id":2},{"id":3},{"id":4}]"#,
            )
            .unwrap();

        assert_eq!(fixture_with(storage).store.course_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_subscribers_see_additions() {
        let f = fixture();
        let mut rx = f.store.subscribe();
        rx.borrow_and_update();

        f.store.add_item(course(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        // Rejected additions are not a change
        f.store.add_item(course(1));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_rejection_reported_once() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        let store = ComparisonStore::new(Arc::new(MemoryStorage::new()), Arc::new(LogNotifier));

        tracing::subscriber::with_default(subscriber, || {
            store.add_item(course(1));
            store.add_item(course(1));
        });

        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
