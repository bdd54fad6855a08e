//! Class records in the shape a class-to-prototype transpiler emits.
//!
//! Each class body becomes a function returning a record with its prototype
//! attached. Subclasses go through [`extends`], which copies the parent's
//! statics, links a fresh prototype whose `constructor` names the subclass, and
//! makes construction run the parent initializer first.

use std::hint::black_box;
use std::sync::Arc;

use anyhow::Result;
use rustc_hash::FxHashMap;

use super::object::{Method, Object, Slot};
use crate::registry::RunnableUnit;

pub struct Class {
    name: &'static str,
    statics: FxHashMap<&'static str, Slot>,
    prototype: Arc<Object>,
    parent: Option<Arc<Class>>,
}

impl Class {
    pub fn declare(name: &'static str, methods: &[(&'static str, Method)]) -> Self {
        let mut prototype = Object::new();
        prototype.set("constructor", Slot::Constructor(name));
        for (key, method) in methods {
            prototype.set(*key, Slot::Method(*method));
        }
        Self {
            name,
            statics: FxHashMap::default(),
            prototype: Arc::new(prototype),
            parent: None,
        }
    }

    pub fn with_static(mut self, key: &'static str, slot: Slot) -> Self {
        self.statics.insert(key, slot);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get_static(&self, key: &str) -> Option<&Slot> {
        self.statics.get(key)
    }

    pub fn parent(&self) -> Option<&Arc<Class>> {
        self.parent.as_ref()
    }

    /// `new C()`: allocate against the prototype, then initialize from the root class down.
    pub fn construct(&self) -> Object {
        let mut this = Object::with_proto(Arc::clone(&self.prototype));
        self.initialize(&mut this);
        this
    }

    fn initialize(&self, this: &mut Object) {
        if let Some(parent) = &self.parent {
            parent.initialize(this);
        }
    }
}

pub fn extends(name: &'static str, base: &Arc<Class>) -> Class {
    let mut prototype = Object::with_proto(Arc::clone(&base.prototype));
    prototype.set("constructor", Slot::Constructor(name));
    Class {
        name,
        statics: base.statics.clone(),
        prototype: Arc::new(prototype),
        parent: Some(Arc::clone(base)),
    }
}

fn x(_this: &Object) {}

pub fn define_a() -> Arc<Class> {
    Arc::new(Class::declare("A", &[("x", x)]))
}

pub fn define_b(a: &Arc<Class>) -> Arc<Class> {
    Arc::new(extends("B", a))
}

pub fn create_class_a() -> Result<RunnableUnit> {
    Ok(Box::new(|| {
        black_box(define_a());
    }))
}

pub fn create_instance_a() -> Result<RunnableUnit> {
    let a = define_a();
    Ok(Box::new(move || {
        black_box(a.construct());
    }))
}

pub fn create_class_b_from_a() -> Result<RunnableUnit> {
    let a = define_a();
    Ok(Box::new(move || {
        black_box(define_b(&a));
    }))
}

/// Also registered for the "with constructor" scenario: the emitted subclass
/// constructor always forwards to its parent.
pub fn create_instance_b() -> Result<RunnableUnit> {
    let b = define_b(&define_a());
    Ok(Box::new(move || {
        black_box(b.construct());
    }))
}
