//! Testing utilities for Hark.
//!
//! This module stands in for the browser so decorators and registrations can
//! be exercised in plain `#[test]` functions.
//!
//! # Features
//!
//! - [`MockEvent`]: A spy event that records default-action and propagation calls
//! - [`MemoryTarget`]: An in-memory [`EventTarget`] with DOM dispatch semantics
//! - [`CountingHandler`]: A handler that counts invocations

use hark_core::{
    BoxHandler, DomEvent, EventTarget, Handler, HarkError, KeyboardEvent, ListenerOptions,
    ModifierKeys, ModifierState, MouseEvent,
};
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    rc::Rc,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Mock Event
// ============================================================================

/// Identity of a node in the in-memory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeId(pub u32);

/// A spy event.
///
/// Built with a builder API; every control action is counted so tests can
/// assert on it afterwards. By default the event is trusted, has no key, button
/// `0`, no modifier keys, and targets [`NodeId::default`] with that node as
/// its current target.
///
/// # Example
///
/// ```rust,ignore
/// let event = MockEvent::new().with_key("Enter").with_modifier_keys(ModifierKeys::SHIFT);
/// handler.handle(&event);
/// assert_eq!(event.prevent_default_calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockEvent {
    target: NodeId,
    current_target: Cell<Option<NodeId>>,
    trusted: bool,
    key: String,
    button: i16,
    modifier_keys: ModifierKeys,
    in_passive_listener: Cell<bool>,
    default_prevented: Cell<bool>,
    prevent_default_calls: Cell<usize>,
    stop_propagation_calls: Cell<usize>,
    stop_immediate_propagation_calls: Cell<usize>,
}

impl MockEvent {
    /// Create a new trusted event.
    pub fn new() -> Self {
        Self {
            target: NodeId::default(),
            current_target: Cell::new(Some(NodeId::default())),
            trusted: true,
            key: String::new(),
            button: 0,
            modifier_keys: ModifierKeys::empty(),
            in_passive_listener: Cell::new(false),
            default_prevented: Cell::new(false),
            prevent_default_calls: Cell::new(0),
            stop_propagation_calls: Cell::new(0),
            stop_immediate_propagation_calls: Cell::new(0),
        }
    }

    /// Sets the node the event originated from. Also makes it the current
    /// target until the event is dispatched on a [`MemoryTarget`].
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = target;
        self.current_target = Cell::new(Some(target));
        self
    }

    /// Sets the node currently handling the event.
    pub fn with_current_target(self, current_target: NodeId) -> Self {
        self.current_target.set(Some(current_target));
        self
    }

    /// Marks the event as script-dispatched.
    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }

    /// Sets the `KeyboardEvent.key` identifier.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the `MouseEvent.button` index.
    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    /// Sets the modifier keys held.
    pub fn with_modifier_keys(mut self, modifier_keys: ModifierKeys) -> Self {
        self.modifier_keys = modifier_keys;
        self
    }

    /// The node the event originated from.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node currently handling the event.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target.get()
    }

    /// Whether the default action is cancelled. Calls made from a passive
    /// listener do not count, as in the DOM.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Number of `prevent_default` calls, passive or not.
    pub fn prevent_default_calls(&self) -> usize {
        self.prevent_default_calls.get()
    }

    /// Number of `stop_propagation` calls.
    pub fn stop_propagation_calls(&self) -> usize {
        self.stop_propagation_calls.get()
    }

    /// Number of `stop_immediate_propagation` calls.
    pub fn stop_immediate_propagation_calls(&self) -> usize {
        self.stop_immediate_propagation_calls.get()
    }

    /// Whether propagation to further nodes is stopped.
    pub fn propagation_stopped(&self) -> bool {
        self.stop_propagation_calls() > 0 || self.immediate_propagation_stopped()
    }

    /// Whether the remaining listeners on the current node are skipped.
    pub fn immediate_propagation_stopped(&self) -> bool {
        self.stop_immediate_propagation_calls() > 0
    }
}

impl Default for MockEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl DomEvent for MockEvent {
    fn is_trusted(&self) -> bool {
        self.trusted
    }

    fn targets_current(&self) -> bool {
        self.current_target.get() == Some(self.target)
    }

    fn prevent_default(&self) {
        self.prevent_default_calls
            .set(self.prevent_default_calls.get() + 1);
        if !self.in_passive_listener.get() {
            self.default_prevented.set(true);
        }
    }

    fn stop_propagation(&self) {
        self.stop_propagation_calls
            .set(self.stop_propagation_calls.get() + 1);
    }

    fn stop_immediate_propagation(&self) {
        self.stop_immediate_propagation_calls
            .set(self.stop_immediate_propagation_calls.get() + 1);
    }
}

impl ModifierState for MockEvent {
    fn modifier_keys(&self) -> ModifierKeys {
        self.modifier_keys
    }
}

impl KeyboardEvent for MockEvent {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.key)
    }
}

impl MouseEvent for MockEvent {
    fn button(&self) -> i16 {
        self.button
    }
}

// ============================================================================
// Memory Target
// ============================================================================

/// Registration handle returned by [`MemoryTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct MemoryListener {
    id: ListenerId,
    event_type: String,
    options: ListenerOptions,
    handler: Rc<BoxHandler<MockEvent>>,
}

#[derive(Default)]
struct MemoryState {
    node: NodeId,
    next_id: u64,
    capacity: Option<usize>,
    listeners: Vec<MemoryListener>,
}

/// An in-memory node implementing [`EventTarget`] for [`MockEvent`].
///
/// Dispatch follows the DOM at-target rules: listeners run in registration
/// order, `once` listeners are removed before they run, a stopped immediate
/// propagation skips the remaining listeners, and listeners added during a
/// dispatch are not run by it. Clones share the same node.
///
/// # Example
///
/// ```rust,ignore
/// let target = MemoryTarget::new(NodeId(1));
/// let listeners = attach(&target, events! { "click" => EventParams::func(on_click) })?;
///
/// target.dispatch("click", &MockEvent::new().with_target(NodeId(1)));
/// ```
#[derive(Clone, Default)]
pub struct MemoryTarget {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryTarget {
    /// Create a node with the given identity.
    pub fn new(node: NodeId) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                node,
                ..MemoryState::default()
            })),
        }
    }

    /// Create a node that refuses registrations once it holds `capacity` listeners.
    pub fn with_capacity(node: NodeId, capacity: usize) -> Self {
        let target = Self::new(node);
        target.state.borrow_mut().capacity = Some(capacity);
        target
    }

    /// The node's identity.
    pub fn node(&self) -> NodeId {
        self.state.borrow().node
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Number of registered listeners for `event_type`.
    pub fn listener_count_for(&self, event_type: &str) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.event_type == event_type)
            .count()
    }

    /// The native options of each listener for `event_type`, in order.
    pub fn options_for(&self, event_type: &str) -> Vec<ListenerOptions> {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.event_type == event_type)
            .map(|listener| listener.options)
            .collect()
    }

    /// Dispatches `event` to the listeners for `event_type` on this node.
    pub fn dispatch(&self, event_type: &str, event: &MockEvent) {
        let snapshot: Vec<_> = {
            let state = self.state.borrow();
            event.current_target.set(Some(state.node));
            state
                .listeners
                .iter()
                .filter(|listener| listener.event_type == event_type)
                .map(|listener| (listener.id, listener.options, Rc::clone(&listener.handler)))
                .collect()
        };

        for (id, options, handler) in snapshot {
            if event.immediate_propagation_stopped() {
                break;
            }

            {
                let mut state = self.state.borrow_mut();
                // Removed by an earlier listener during this dispatch.
                let Some(position) = state.listeners.iter().position(|listener| listener.id == id)
                else {
                    continue;
                };
                if options.once() {
                    state.listeners.remove(position);
                }
            }

            event.in_passive_listener.set(options.passive());
            handler.handle(event);
            event.in_passive_listener.set(false);
        }
    }
}

impl std::fmt::Debug for MemoryTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryTarget")
            .field("node", &state.node)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl EventTarget for MemoryTarget {
    type Event = MockEvent;
    type Registration = ListenerId;

    fn add_listener(
        &self,
        event_type: &str,
        handler: BoxHandler<MockEvent>,
        options: ListenerOptions,
    ) -> Result<ListenerId, HarkError> {
        let mut state = self.state.borrow_mut();
        if let Some(capacity) = state.capacity
            && state.listeners.len() >= capacity
        {
            return Err(HarkError::registration(
                event_type,
                format!("node {:?} is full ({capacity} listeners)", state.node),
            ));
        }

        let id = ListenerId(state.next_id);
        state.next_id += 1;
        state.listeners.push(MemoryListener {
            id,
            event_type: event_type.to_string(),
            options,
            handler: Rc::new(handler),
        });
        Ok(id)
    }

    fn remove_listener(&self, event_type: &str, registration: &ListenerId, options: ListenerOptions) {
        self.state.borrow_mut().listeners.retain(|listener| {
            !(listener.id == *registration
                && listener.event_type == event_type
                && listener.options.capture() == options.capture())
        });
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// let counter_clone = counter.clone();
///
/// let handler = counter.once();
/// handler.handle(&MockEvent::new());
///
/// assert_eq!(counter_clone.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E> Handler<E> for CountingHandler {
    fn handle(&self, _event: &E) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_in_registration_order() {
        let target = MemoryTarget::new(NodeId(1));
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let order = Rc::clone(&order);
            target
                .add_listener(
                    "click",
                    BoxHandler::new(move |_: &MockEvent| order.borrow_mut().push(id)),
                    ListenerOptions::default(),
                )
                .unwrap();
        }

        target.dispatch("click", &MockEvent::new());
        target.dispatch("keydown", &MockEvent::new());

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_dispatch_sets_current_target() {
        let target = MemoryTarget::new(NodeId(4));
        let event = MockEvent::new().with_target(NodeId(9));
        assert!(event.targets_current());

        target.dispatch("click", &event);

        assert_eq!(event.current_target(), Some(NodeId(4)));
        assert!(!event.targets_current());
    }

    #[test]
    fn test_native_once_removes_listener() {
        let target = MemoryTarget::new(NodeId(1));
        let counter = CountingHandler::new();
        target
            .add_listener(
                "click",
                BoxHandler::new(counter.clone()),
                ListenerOptions {
                    once: Some(true),
                    ..ListenerOptions::default()
                },
            )
            .unwrap();

        target.dispatch("click", &MockEvent::new());
        target.dispatch("click", &MockEvent::new());

        assert_eq!(counter.count(), 1);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn test_stop_immediate_propagation_skips_later_listeners() {
        let target = MemoryTarget::new(NodeId(1));
        let counter = CountingHandler::new();
        target
            .add_listener(
                "click",
                BoxHandler::new(|event: &MockEvent| event.stop_immediate_propagation()),
                ListenerOptions::default(),
            )
            .unwrap();
        target
            .add_listener("click", BoxHandler::new(counter.clone()), ListenerOptions::default())
            .unwrap();

        target.dispatch("click", &MockEvent::new());

        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_passive_listener_cannot_prevent_default() {
        let target = MemoryTarget::new(NodeId(1));
        target
            .add_listener(
                "wheel",
                BoxHandler::new(|event: &MockEvent| event.prevent_default()),
                ListenerOptions {
                    passive: Some(true),
                    ..ListenerOptions::default()
                },
            )
            .unwrap();

        let event = MockEvent::new();
        target.dispatch("wheel", &event);

        assert_eq!(event.prevent_default_calls(), 1);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_removal_matches_capture_flag() {
        let target = MemoryTarget::new(NodeId(1));
        let capture = ListenerOptions {
            capture: Some(true),
            ..ListenerOptions::default()
        };
        let id = target
            .add_listener("click", BoxHandler::new(CountingHandler::new()), capture)
            .unwrap();

        target.remove_listener("click", &id, ListenerOptions::default());
        assert_eq!(target.listener_count(), 1);

        target.remove_listener("click", &id, capture);
        assert_eq!(target.listener_count(), 0);

        // Already gone.
        target.remove_listener("click", &id, capture);
    }

    #[test]
    fn test_capacity_rejects_registration() {
        let target = MemoryTarget::with_capacity(NodeId(1), 1);
        target
            .add_listener("click", BoxHandler::new(CountingHandler::new()), ListenerOptions::default())
            .unwrap();

        let err = target
            .add_listener("click", BoxHandler::new(CountingHandler::new()), ListenerOptions::default())
            .unwrap_err();

        assert!(matches!(err, HarkError::Registration { ref event_type, .. } if event_type == "click"));
    }
}
