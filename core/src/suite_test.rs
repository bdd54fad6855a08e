#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use crate::error::HarnessError;
    use crate::registry::{Registry, Scenario, builtin_registry};
    use crate::suite::{build_suite, build_suite_collection};
    use crate::test_support::{counter, counting_variant, failing_variant, noop_variant};

    #[test]
    fn test_build_suite_keeps_names_and_order() {
        let scenario = Scenario::new("S", vec![noop_variant("c"), noop_variant("a"), noop_variant("b")]).unwrap();
        let suite = build_suite(&scenario).unwrap();
        assert_eq!(suite.scenario(), "S");
        assert_eq!(suite.len(), scenario.len());
        assert_eq!(suite.names(), scenario.variant_names());
    }

    #[test]
    fn test_factory_runs_once_per_build() {
        let builds = counter();
        let runs = counter();
        let scenario = Scenario::new(
            "S",
            vec![
                counting_variant("v1", builds.clone(), runs.clone()),
                counting_variant("v2", builds.clone(), runs.clone()),
            ],
        )
        .unwrap();

        let suite = build_suite(&scenario).unwrap();
        assert_eq!(builds.load(Ordering::SeqCst), 2);
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        for entry in suite.entries() {
            entry.run();
            entry.run();
        }
        assert_eq!(builds.load(Ordering::SeqCst), 2, "running units must not rebuild fixtures");
        assert_eq!(runs.load(Ordering::SeqCst), 4);

        build_suite(&scenario).unwrap();
        assert_eq!(builds.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_failing_factory_aborts_scenario() {
        let builds = counter();
        let runs = counter();
        let scenario = Scenario::new(
            "broken",
            vec![
                noop_variant("ok"),
                failing_variant("bad"),
                counting_variant("after", builds.clone(), runs),
            ],
        )
        .unwrap();

        let err = build_suite(&scenario).unwrap_err();
        let setup = err.downcast_ref::<HarnessError>().expect("setup context");
        assert_eq!(
            setup,
            &HarnessError::Setup {
                scenario: "broken".to_string(),
                variant: "bad".to_string()
            }
        );
        assert!(format!("{:#}", err).contains("could not be built"));
        assert_eq!(builds.load(Ordering::SeqCst), 0, "later variants must not be set up");
    }

    #[test]
    fn test_collection_fails_as_a_whole() {
        let registry = Registry::new(vec![
            Scenario::new("fine", vec![noop_variant("v")]).unwrap(),
            Scenario::new("broken", vec![failing_variant("v")]).unwrap(),
        ])
        .unwrap();
        let err = build_suite_collection(&registry).unwrap_err();
        assert_eq!(err.downcast_ref::<HarnessError>().unwrap().scenario(), "broken");
    }

    #[test]
    fn test_collection_follows_registry_order() {
        let registry = builtin_registry().unwrap();
        let collection = build_suite_collection(registry).unwrap();
        assert_eq!(collection.names(), registry.names());
        for scenario in registry.iter() {
            let suite = collection.get(scenario.name()).unwrap();
            assert_eq!(suite.names(), scenario.variant_names());
        }
    }

    #[test]
    fn test_rebuilding_collection_is_structurally_equal() {
        let registry = builtin_registry().unwrap();
        let first = build_suite_collection(registry).unwrap();
        let second = build_suite_collection(registry).unwrap();
        assert_eq!(first.names(), second.names());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.names(), b.names());
        }
    }
}
