//! Plain structs and `impl` blocks.
//!
//! Every factory declares its own `A` and `B`, so the types are private to the
//! function that uses them. Inheritance is a `base` field plus `Deref`.

use std::hint::black_box;
use std::ops::Deref;

use anyhow::Result;

use crate::registry::RunnableUnit;

pub fn create_class_a() -> Result<RunnableUnit> {
    Ok(Box::new(|| {
        struct A;
        impl A {
            fn x(&self) {}
        }
        black_box(A).x();
    }))
}

pub fn create_instance_a() -> Result<RunnableUnit> {
    struct A;
    impl A {
        #[allow(dead_code)]
        fn x(&self) {}
    }
    Ok(Box::new(|| {
        black_box(A);
    }))
}

pub fn create_class_b_from_a() -> Result<RunnableUnit> {
    #[derive(Default)]
    struct A;
    impl A {
        fn x(&self) {}
    }
    Ok(Box::new(|| {
        #[derive(Default)]
        struct B {
            base: A,
        }
        impl Deref for B {
            type Target = A;

            fn deref(&self) -> &A {
                &self.base
            }
        }
        black_box(B::default()).x();
    }))
}

pub fn create_instance_b() -> Result<RunnableUnit> {
    #[derive(Default)]
    struct A;
    impl A {
        #[allow(dead_code)]
        fn x(&self) {}
    }
    #[derive(Default)]
    struct B {
        base: A,
    }
    impl Deref for B {
        type Target = A;

        fn deref(&self) -> &A {
            &self.base
        }
    }
    Ok(Box::new(|| {
        black_box(B::default());
    }))
}

pub fn create_instance_b_with_constructor() -> Result<RunnableUnit> {
    struct A;
    impl A {
        fn new() -> Self {
            A
        }

        #[allow(dead_code)]
        fn x(&self) {}
    }
    struct B {
        base: A,
    }
    impl B {
        fn new() -> Self {
            Self { base: A::new() }
        }
    }
    impl Deref for B {
        type Target = A;

        fn deref(&self) -> &A {
            &self.base
        }
    }
    Ok(Box::new(|| {
        black_box(B::new());
    }))
}
