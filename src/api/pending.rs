//! In-flight Request Registry
//!
//! Serializes mutations per entity: while a request for `(action, entity)` is
//! pending, an identical one is refused without touching the network.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct InFlight {
    keys: Rc<RefCell<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `(action, entity)`; released when the guard drops
    pub fn try_begin(&self, action: &str, entity: &str) -> Result<PendingGuard, ApiError> {
        let key = format!("{action}:{entity}");
        if !self.keys.borrow_mut().insert(key.clone()) {
            return Err(ApiError::Busy(key));
        }
        Ok(PendingGuard {
            keys: self.keys.clone(),
            key,
        })
    }

    pub fn is_pending(&self, action: &str, entity: &str) -> bool {
        self.keys.borrow().contains(&format!("{action}:{entity}"))
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    keys: Rc<RefCell<HashSet<String>>>,
    key: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}
