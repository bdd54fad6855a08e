//! Built-in scenarios.
//!
//! Each submodule is one way of defining classes; the table below pairs them
//! up per scenario. New benchmarks only need an entry here.

pub mod native;
pub mod object;
pub mod prototype;
pub mod transpiled;


use crate::error::HarnessError;
use crate::registry::{Registry, Scenario, Variant};

pub const CREATE_CLASS_A: &str = "create class A";
pub const CREATE_INSTANCE_A: &str = "create instance A";
pub const CREATE_CLASS_B_FROM_A: &str = "create class B from A";
pub const CREATE_INSTANCE_B: &str = "create instance B";
pub const CREATE_INSTANCE_B_WITH_CONSTRUCTOR: &str = "create instance B with constructor";

pub const PROTOTYPE: &str = "prototype";
pub const NATIVE: &str = "native";
pub const TRANSPILED: &str = "transpiled";

pub(crate) fn builtin() -> Result<Registry, HarnessError> {
    Registry::new(vec![
        Scenario::new(
            CREATE_CLASS_A,
            vec![
                Variant::new(PROTOTYPE, prototype::create_class_a),
                Variant::new(NATIVE, native::create_class_a),
                Variant::new(TRANSPILED, transpiled::create_class_a),
            ],
        )?,
        Scenario::new(
            CREATE_INSTANCE_A,
            vec![
                Variant::new(PROTOTYPE, prototype::create_instance_a),
                Variant::new(NATIVE, native::create_instance_a),
                Variant::new(TRANSPILED, transpiled::create_instance_a),
            ],
        )?,
        Scenario::new(
            CREATE_CLASS_B_FROM_A,
            vec![
                Variant::new(PROTOTYPE, prototype::create_class_b_from_a),
                Variant::new(NATIVE, native::create_class_b_from_a),
                Variant::new(TRANSPILED, transpiled::create_class_b_from_a),
            ],
        )?,
        Scenario::new(
            CREATE_INSTANCE_B,
            vec![
                Variant::new(PROTOTYPE, prototype::create_instance_b),
                Variant::new(NATIVE, native::create_instance_b),
                Variant::new(TRANSPILED, transpiled::create_instance_b),
            ],
        )?,
        // Prototype constructors cannot call their parent, so that family sits this one out.
        Scenario::new(
            CREATE_INSTANCE_B_WITH_CONSTRUCTOR,
            vec![
                Variant::new(NATIVE, native::create_instance_b_with_constructor),
                Variant::new(TRANSPILED, transpiled::create_instance_b),
            ],
        )?,
    ])
}
