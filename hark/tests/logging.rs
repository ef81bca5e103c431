//! Log output of the registration facade and the `Logged` decorator.

#![cfg(feature = "tracing")]

use hark::{
    EventParams, Modifiers, attach, events, logged,
    testing::{CountingHandler, MemoryTarget, MockEvent, NodeId},
};
use std::{
    io,
    sync::{Arc, Mutex},
};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn test_logged_handler_emits_named_span() {
    let counter = CountingHandler::new();

    let output = capture(|| {
        let target = MemoryTarget::new(NodeId(1));
        let _listeners = attach(&target, events! {
            "submit" => EventParams::handler(logged(counter.clone(), "submit"))
                .with_modifiers(Modifiers::PREVENT_DEFAULT),
        })
        .unwrap();
        target.dispatch("submit", &MockEvent::new().with_target(NodeId(1)));
    });

    assert_eq!(counter.count(), 1);
    assert!(output.contains("attaching listeners"), "{output}");
    assert!(output.contains("handler=submit"), "{output}");
    assert!(output.contains("handling event"), "{output}");
    assert!(output.contains("detaching listeners"), "{output}");
}

#[test]
fn test_failed_registration_is_warned() {
    let output = capture(|| {
        let target = MemoryTarget::with_capacity(NodeId(1), 0);
        let result = attach(&target, events! {
            "click" => EventParams::func(CountingHandler::new()),
        });
        assert!(result.is_err());
    });

    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("rolling back"), "{output}");
}
