use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::RenderedDataset;
use crate::error::{ChartError, ChartResult};

/// Post-render view of the chart handed to subscribers.
///
/// Every render publishes a freshly allocated snapshot; holding on to an old
/// one never observes later state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub labels: Vec<String>,
    pub datasets: Vec<RenderedDataset>,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}

pub type SnapshotCallback = Rc<dyn Fn(Rc<ChartSnapshot>)>;

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, SnapshotCallback)>,
}

/// Handle returned by [`SnapshotChannel::subscribe`].
///
/// Dropping the handle keeps the subscription alive; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Clone)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<SubscriberList>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    /// Removes exactly this subscriber. Returns `false` when it was already
    /// removed or the chart is gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };
        let mut subscribers = subscribers.borrow_mut();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(id, _)| *id != self.id);
        subscribers.entries.len() != before
    }
}

/// Ordered observer list plus the last published snapshot.
#[derive(Default)]
pub struct SnapshotChannel {
    subscribers: Rc<RefCell<SubscriberList>>,
    last: Option<Rc<ChartSnapshot>>,
}

impl fmt::Debug for SnapshotChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotChannel")
            .field("subscriber_count", &self.subscriber_count())
            .field("has_snapshot", &self.last.is_some())
            .finish()
    }
}

impl SnapshotChannel {
    /// Registers `callback`; it runs right away when a snapshot already exists.
    pub fn subscribe(&mut self, callback: SnapshotCallback) -> Subscription {
        let id = {
            let mut subscribers = self.subscribers.borrow_mut();
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.entries.push((id, Rc::clone(&callback)));
            id
        };
        if let Some(snapshot) = &self.last {
            callback(Rc::clone(snapshot));
        }
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Stores `snapshot` and notifies subscribers in registration order.
    ///
    /// The list is copied before the pass, so callbacks may unsubscribe
    /// themselves or others without affecting who is notified this time.
    pub fn publish(&mut self, snapshot: ChartSnapshot) {
        let snapshot = Rc::new(snapshot);
        self.last = Some(Rc::clone(&snapshot));
        let callbacks: Vec<SnapshotCallback> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        trace!(subscribers = callbacks.len(), "publishing chart snapshot");
        for callback in callbacks {
            callback(Rc::clone(&snapshot));
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<Rc<ChartSnapshot>> {
        self.last.clone()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.borrow_mut().entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{ChartSnapshot, SnapshotChannel};

    fn snapshot(label: &str) -> ChartSnapshot {
        ChartSnapshot {
            labels: vec![label.to_owned()],
            datasets: Vec::new(),
        }
    }

    #[test]
    fn late_subscriber_receives_current_snapshot_immediately() {
        let mut channel = SnapshotChannel::default();
        channel.publish(snapshot("a"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        channel.subscribe(Rc::new(move |snapshot: Rc<ChartSnapshot>| {
            sink.borrow_mut().push(snapshot.labels[0].clone());
        }));

        assert_eq!(seen.borrow().as_slice(), ["a".to_owned()]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let mut channel = SnapshotChannel::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            channel.subscribe(Rc::new(move |_| order.borrow_mut().push(name)));
        }

        channel.publish(snapshot("a"));
        assert_eq!(order.borrow().as_slice(), ["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_entry_and_is_idempotent() {
        let mut channel = SnapshotChannel::default();
        let first = channel.subscribe(Rc::new(|_| {}));
        let _second = channel.subscribe(Rc::new(|_| {}));

        assert!(first.unsubscribe());
        assert!(!first.unsubscribe());
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribing_during_notification_keeps_current_pass_intact() {
        let mut channel = SnapshotChannel::default();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let later: Rc<RefCell<Option<super::Subscription>>> = Rc::new(RefCell::new(None));

        let calls_first = Rc::clone(&calls);
        let later_handle = Rc::clone(&later);
        channel.subscribe(Rc::new(move |_| {
            calls_first.borrow_mut().push("first");
            if let Some(subscription) = later_handle.borrow().as_ref() {
                subscription.unsubscribe();
            }
        }));
        let calls_second = Rc::clone(&calls);
        let second = channel.subscribe(Rc::new(move |_| calls_second.borrow_mut().push("second")));
        *later.borrow_mut() = Some(second);

        channel.publish(snapshot("a"));
        assert_eq!(calls.borrow().as_slice(), ["first", "second"]);

        channel.publish(snapshot("b"));
        assert_eq!(calls.borrow().as_slice(), ["first", "second", "first"]);
    }

    #[test]
    fn consecutive_snapshots_are_distinct_allocations() {
        let mut channel = SnapshotChannel::default();
        channel.publish(snapshot("a"));
        let first = channel.last().expect("first");
        channel.publish(snapshot("a"));
        let second = channel.last().expect("second");

        assert_eq!(first, second);
        assert!(!Rc::ptr_eq(&first, &second));
    }
}
