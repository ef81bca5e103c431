use crate::event::{DomEvent, KeyboardEvent, ModifierKeys, ModifierState, MouseEvent};
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    rc::Rc,
};

#[derive(Debug)]
pub(crate) struct TestEvent {
    pub trusted: bool,
    pub self_target: bool,
    pub key: String,
    pub button: i16,
    pub keys: ModifierKeys,
    pub prevented: Cell<usize>,
    pub stopped: Cell<usize>,
    pub stopped_immediately: Cell<usize>,
    log: RefCell<Vec<&'static str>>,
}

impl Default for TestEvent {
    fn default() -> Self {
        Self {
            trusted: true,
            self_target: true,
            key: String::new(),
            button: 0,
            keys: ModifierKeys::empty(),
            prevented: Cell::new(0),
            stopped: Cell::new(0),
            stopped_immediately: Cell::new(0),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl TestEvent {
    pub fn keydown(key: &str, keys: ModifierKeys) -> Self {
        Self {
            key: key.to_string(),
            keys,
            ..Self::default()
        }
    }

    pub fn mousedown(button: i16, keys: ModifierKeys) -> Self {
        Self {
            button,
            keys,
            ..Self::default()
        }
    }

    pub fn bubbled(mut self) -> Self {
        self.self_target = false;
        self
    }

    pub fn untrusted(mut self) -> Self {
        self.trusted = false;
        self
    }

    pub fn log(&self, entry: &'static str) {
        self.log.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }
}

impl DomEvent for TestEvent {
    fn is_trusted(&self) -> bool {
        self.trusted
    }

    fn targets_current(&self) -> bool {
        self.self_target
    }

    fn prevent_default(&self) {
        self.prevented.set(self.prevented.get() + 1);
        self.log("preventDefault");
    }

    fn stop_propagation(&self) {
        self.stopped.set(self.stopped.get() + 1);
        self.log("stopPropagation");
    }

    fn stop_immediate_propagation(&self) {
        self.stopped_immediately
            .set(self.stopped_immediately.get() + 1);
        self.log("stopImmediatePropagation");
    }
}

impl ModifierState for TestEvent {
    fn modifier_keys(&self) -> ModifierKeys {
        self.keys
    }
}

impl KeyboardEvent for TestEvent {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.key)
    }
}

impl MouseEvent for TestEvent {
    fn button(&self) -> i16 {
        self.button
    }
}

/// A handler that counts its invocations.
pub(crate) fn counter() -> (Rc<Cell<usize>>, impl Fn(&TestEvent) + Clone + 'static) {
    let count = Rc::new(Cell::new(0));
    let handler = {
        let count = Rc::clone(&count);
        move |_: &TestEvent| count.set(count.get() + 1)
    };
    (count, handler)
}
