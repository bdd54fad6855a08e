//! Constructor functions with a mutable `prototype` object.
//!
//! Inheritance is expressed by making `B.prototype` an instance of `A`. There
//! is no way to run `A`'s constructor from `B`'s, so this family has no
//! "with constructor" variant.

use std::hint::black_box;
use std::sync::Arc;

use anyhow::Result;

use super::object::{Object, Slot};
use crate::registry::RunnableUnit;

pub struct Constructor {
    prototype: Arc<Object>,
}

impl Constructor {
    /// A fresh prototype object that only points back at its constructor.
    pub fn blank_prototype(name: &'static str) -> Object {
        let mut prototype = Object::new();
        prototype.set("constructor", Slot::Constructor(name));
        prototype
    }

    pub fn with_prototype(prototype: Object) -> Self {
        Self {
            prototype: Arc::new(prototype),
        }
    }

    /// `new F()`
    pub fn instantiate(&self) -> Object {
        Object::with_proto(Arc::clone(&self.prototype))
    }

    pub fn prototype(&self) -> &Object {
        &self.prototype
    }
}

fn x(_this: &Object) {}

pub fn define_a() -> Constructor {
    let mut prototype = Constructor::blank_prototype("A");
    prototype.set("x", Slot::Method(x));
    Constructor::with_prototype(prototype)
}

pub fn define_b(a: &Constructor) -> Constructor {
    Constructor::with_prototype(a.instantiate())
}

pub fn create_class_a() -> Result<RunnableUnit> {
    Ok(Box::new(|| {
        black_box(define_a());
    }))
}

pub fn create_instance_a() -> Result<RunnableUnit> {
    let a = define_a();
    Ok(Box::new(move || {
        black_box(a.instantiate());
    }))
}

pub fn create_class_b_from_a() -> Result<RunnableUnit> {
    let a = define_a();
    Ok(Box::new(move || {
        black_box(define_b(&a));
    }))
}

pub fn create_instance_b() -> Result<RunnableUnit> {
    let b = define_b(&define_a());
    Ok(Box::new(move || {
        black_box(b.instantiate());
    }))
}
