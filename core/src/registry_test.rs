#[cfg(test)]
mod tests {
    use crate::error::HarnessError;
    use crate::registry::{Registry, Scenario, builtin_registry};
    use crate::test_support::noop_variant;
    use crate::variants;

    #[test]
    fn test_empty_scenario_is_rejected() {
        let err = Scenario::new("nothing", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            HarnessError::EmptyScenario {
                scenario: "nothing".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_variant_is_rejected() {
        let err = Scenario::new("dup", vec![noop_variant("a"), noop_variant("b"), noop_variant("a")]).unwrap_err();
        assert_eq!(
            err,
            HarnessError::DuplicateVariant {
                scenario: "dup".to_string(),
                variant: "a".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_scenario_is_rejected() {
        let first = Scenario::new("S", vec![noop_variant("v")]).unwrap();
        let second = Scenario::new("S", vec![noop_variant("w")]).unwrap();
        let err = Registry::new(vec![first, second]).unwrap_err();
        assert_eq!(err.scenario(), "S");
        assert!(matches!(err, HarnessError::DuplicateScenario { .. }));
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let registry = Registry::new(vec![
            Scenario::new("zeta", vec![noop_variant("z2"), noop_variant("z1")]).unwrap(),
            Scenario::new("alpha", vec![noop_variant("a")]).unwrap(),
        ])
        .unwrap();
        assert_eq!(registry.names(), vec!["zeta", "alpha"]);
        assert_eq!(registry.get("zeta").unwrap().variant_names(), vec!["z2", "z1"]);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_builtin_registry_layout() {
        let registry = builtin_registry().unwrap();
        assert_eq!(
            registry.names(),
            vec![
                variants::CREATE_CLASS_A,
                variants::CREATE_INSTANCE_A,
                variants::CREATE_CLASS_B_FROM_A,
                variants::CREATE_INSTANCE_B,
                variants::CREATE_INSTANCE_B_WITH_CONSTRUCTOR,
            ]
        );
        let all_three = vec![variants::PROTOTYPE, variants::NATIVE, variants::TRANSPILED];
        for name in &registry.names()[..4] {
            assert_eq!(registry.get(name).unwrap().variant_names(), all_three, "scenario {}", name);
        }
        assert_eq!(
            registry
                .get(variants::CREATE_INSTANCE_B_WITH_CONSTRUCTOR)
                .unwrap()
                .variant_names(),
            vec![variants::NATIVE, variants::TRANSPILED]
        );
    }

    #[test]
    fn test_builtin_registry_is_shared() {
        let first = builtin_registry().unwrap();
        let second = builtin_registry().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.iter().all(|scenario| !scenario.is_empty()));
    }
}
