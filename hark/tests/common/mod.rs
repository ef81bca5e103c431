#![allow(dead_code)]

use hark::{Handler, testing::MockEvent};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Handlers
// ============================================================================

pub struct OrderRecordingHandler {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl Handler<MockEvent> for OrderRecordingHandler {
    fn handle(&self, _event: &MockEvent) {
        self.order.lock().unwrap().push(self.id);
    }
}

pub fn recorders(count: usize) -> (Arc<Mutex<Vec<usize>>>, Vec<OrderRecordingHandler>) {
    let order = Arc::new(Mutex::new(Vec::new()));
    let handlers = (0..count)
        .map(|id| OrderRecordingHandler {
            id,
            order: Arc::clone(&order),
        })
        .collect();
    (order, handlers)
}

/// Records the address of every event it sees.
pub struct AddressRecordingHandler {
    pub addresses: Arc<Mutex<Vec<usize>>>,
}

impl Handler<MockEvent> for AddressRecordingHandler {
    fn handle(&self, event: &MockEvent) {
        self.addresses
            .lock()
            .unwrap()
            .push(event as *const MockEvent as usize);
    }
}
