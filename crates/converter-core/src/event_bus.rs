//! Simple event bus carrying backend results back to the UI.
//!
//! The bus is single-threaded (WASM constraint) and uses interior mutability
//! via RefCell. Events are buffered and drained by the UI on each frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use converter_types::event::SessionEvent;

/// Shared event bus, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called when a backend call resolves.
    pub fn emit(&self, event: SessionEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    ///
    /// Health results are level-triggered, so only the latest one in the
    /// batch is kept. Conversion and chat results are all delivered, in
    /// emission order.
    pub fn drain(&self) -> Vec<SessionEvent> {
        let mut events: Vec<SessionEvent> = self.inner.borrow_mut().drain(..).collect();
        let last_health = events
            .iter()
            .rposition(|e| matches!(e, SessionEvent::HealthChecked { .. }));
        if let Some(last) = last_health {
            let mut index = 0;
            events.retain(|e| {
                let keep = index == last || !matches!(e, SessionEvent::HealthChecked { .. });
                index += 1;
                keep
            });
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
