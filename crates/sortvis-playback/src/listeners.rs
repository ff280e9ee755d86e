//! Listener registries for status, render and per-event subscribers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sortvis_events::SortEvent;

use crate::controller::PlaybackStatus;
use crate::visual::RenderSnapshot;

/// Handle returned by every registration; pass it to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Receives a status value after every state-affecting operation.
pub type StatusListener = dyn FnMut(&PlaybackStatus) + Send;

/// Receives the render snapshot. All render listeners of one publish see
/// the same instance.
pub type RenderListener = dyn FnMut(&Arc<RenderSnapshot>) + Send;

/// Receives each applied event with the array right after it was applied.
pub type EventListener = dyn FnMut(&SortEvent, &[i32]) + Send;

struct ListenerSet<F: ?Sized> {
    entries: Vec<(SubscriptionId, Box<F>)>,
}

impl<F: ?Sized> ListenerSet<F> {
    fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All listener registries of one controller, sharing one id space.
pub(crate) struct Listeners {
    next_id: u64,
    status: ListenerSet<StatusListener>,
    render: ListenerSet<RenderListener>,
    events: ListenerSet<EventListener>,
}

impl Listeners {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            status: ListenerSet::new(),
            render: ListenerSet::new(),
            events: ListenerSet::new(),
        }
    }

    fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn add_status(&mut self, listener: Box<StatusListener>) -> SubscriptionId {
        let id = self.next_id();
        self.status.entries.push((id, listener));
        id
    }

    pub(crate) fn add_render(&mut self, listener: Box<RenderListener>) -> SubscriptionId {
        let id = self.next_id();
        self.render.entries.push((id, listener));
        id
    }

    pub(crate) fn add_event(&mut self, listener: Box<EventListener>) -> SubscriptionId {
        let id = self.next_id();
        self.events.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.status.remove(id) || self.render.remove(id) || self.events.remove(id)
    }

    pub(crate) fn wants_status(&self) -> bool {
        !self.status.is_empty()
    }

    pub(crate) fn wants_render(&self) -> bool {
        !self.render.is_empty()
    }

    pub(crate) fn emit_status(&mut self, status: &PlaybackStatus) {
        for (_, listener) in &mut self.status.entries {
            listener(status);
        }
    }

    pub(crate) fn emit_render(&mut self, snapshot: &Arc<RenderSnapshot>) {
        for (_, listener) in &mut self.render.entries {
            listener(snapshot);
        }
    }

    pub(crate) fn emit_event(&mut self, event: &SortEvent, array: &[i32]) {
        for (_, listener) in &mut self.events.entries {
            listener(event, array);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.status.entries.len() + self.render.entries.len() + self.events.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn ids_are_unique_across_registries() {
        let mut listeners = Listeners::new();
        let a = listeners.add_status(Box::new(|_| {}));
        let b = listeners.add_render(Box::new(|_| {}));
        let c = listeners.add_event(Box::new(|_, _| {}));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(listeners.len(), 3);
    }

    #[test]
    fn remove_reports_whether_found() {
        let mut listeners = Listeners::new();
        let id = listeners.add_event(Box::new(|_, _| {}));
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn event_listeners_see_array() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut listeners = Listeners::new();
        listeners.add_event(Box::new(move |event, array| {
            sink.lock().unwrap().push((*event, array.to_vec()));
        }));
        listeners.emit_event(&SortEvent::Swap { i: 0, j: 1 }, &[2, 1]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, vec![2, 1]);
    }
}
