//! Handler composition.

use hark_core::{BoxHandler, Handler};
use std::fmt;

/// Runs several handlers against the same event, in order.
///
/// Every handler runs; return values do not exist to short-circuit on. A
/// panic in one handler unwinds through the composite and the remaining
/// handlers do not run.
pub struct Compose<E> {
    handlers: Vec<BoxHandler<E>>,
}

impl<E: 'static> Compose<E> {
    /// An empty composite, which does nothing when invoked.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// A composite over already boxed handlers.
    pub fn from_handlers(handlers: Vec<BoxHandler<E>>) -> Self {
        Self { handlers }
    }

    /// Appends a handler to run after the current ones.
    pub fn then<H>(mut self, handler: H) -> Self
    where
        H: Handler<E>,
    {
        self.handlers.push(handler.boxed());
        self
    }

    /// Number of composed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the composite is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E: 'static> Default for Compose<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Handler<E> for Compose<E> {
    fn handle(&self, event: &E) {
        for handler in &self.handlers {
            handler.handle(event);
        }
    }
}

impl<E: 'static, H: Handler<E>> FromIterator<H> for Compose<E> {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        Self::from_handlers(iter.into_iter().map(BoxHandler::new).collect())
    }
}

impl<E> fmt::Debug for Compose<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Composes handlers of one type into a single handler.
///
/// For handlers of different types use the [`compose!`](crate::compose!) macro.
pub fn compose<E, I>(handlers: I) -> Compose<E>
where
    E: 'static,
    I: IntoIterator,
    I::Item: Handler<E>,
{
    handlers.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug)]
    struct Ping(u32);

    fn recorder(log: &Rc<RefCell<Vec<(char, u32)>>>, name: char) -> impl Fn(&Ping) + 'static {
        let log = Rc::clone(log);
        move |ping: &Ping| log.borrow_mut().push((name, ping.0))
    }

    fn explode(_: &Ping) {
        panic!("boom");
    }

    #[test]
    fn test_compose_runs_in_order_with_same_event() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler = crate::compose![
            recorder(&log, 'a'),
            recorder(&log, 'b'),
            recorder(&log, 'c'),
        ];

        handler.handle(&Ping(7));

        assert_eq!(*log.borrow(), vec![('a', 7), ('b', 7), ('c', 7)]);
    }

    #[test]
    fn test_compose_same_typed_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler: Compose<Ping> = compose(['x', 'y'].map(|name| recorder(&log, name)));

        handler.handle(&Ping(1));
        handler.handle(&Ping(2));

        assert_eq!(handler.len(), 2);
        assert_eq!(
            *log.borrow(),
            vec![('x', 1), ('y', 1), ('x', 2), ('y', 2)]
        );
    }

    #[test]
    fn test_empty_compose_is_noop() {
        let handler: Compose<Ping> = crate::compose![];
        assert!(handler.is_empty());
        handler.handle(&Ping(0));
    }

    #[test]
    fn test_then_appends() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler = Compose::new()
            .then(recorder(&log, 'a'))
            .then(recorder(&log, 'b'));

        handler.handle(&Ping(3));

        assert_eq!(*log.borrow(), vec![('a', 3), ('b', 3)]);
    }

    #[test]
    fn test_panic_aborts_remaining_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handler = crate::compose![
            recorder(&log, 'a'),
            explode,
            recorder(&log, 'c'),
        ];

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.handle(&Ping(5));
        }));

        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec![('a', 5)]);
    }
}
