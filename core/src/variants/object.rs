//! Dynamic slot objects with single-parent delegation.
//!
//! Shared by the prototype and transpiled variants: both describe classes as
//! runtime values built from these objects, never as Rust types.

use std::sync::Arc;

use rustc_hash::FxHashMap;

pub type Method = fn(&Object);

#[derive(Clone)]
pub enum Slot {
    Method(Method),
    /// Back-reference from a prototype to the class that owns it, by name.
    Constructor(&'static str),
}

#[derive(Clone, Default)]
pub struct Object {
    proto: Option<Arc<Object>>,
    slots: FxHashMap<&'static str, Slot>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proto(proto: Arc<Object>) -> Self {
        Self {
            proto: Some(proto),
            slots: FxHashMap::default(),
        }
    }

    pub fn set(&mut self, key: &'static str, slot: Slot) {
        self.slots.insert(key, slot);
    }

    pub fn get_own(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    /// Looks `key` up on this object, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Slot> {
        let mut current = self;
        loop {
            if let Some(slot) = current.slots.get(key) {
                return Some(slot);
            }
            current = current.proto.as_deref()?;
        }
    }

    /// Calls the method found under `key`. Returns false when no method is reachable.
    pub fn invoke(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Slot::Method(method)) => {
                method(self);
                true
            }
            _ => false,
        }
    }

    pub fn constructor_name(&self) -> Option<&'static str> {
        match self.get("constructor") {
            Some(Slot::Constructor(name)) => Some(*name),
            _ => None,
        }
    }

    pub fn proto(&self) -> Option<&Arc<Object>> {
        self.proto.as_ref()
    }

    /// Number of prototypes between this object and the end of its chain.
    pub fn chain_len(&self) -> usize {
        let mut len = 0;
        let mut current = self.proto.as_deref();
        while let Some(object) = current {
            len += 1;
            current = object.proto.as_deref();
        }
        len
    }
}
