//! Ordered, immutable table of benchmark scenarios.
//!
//! A scenario is one benchmark question ("create instance A") asked of several
//! variants. Every variant carries a factory that does its setup once and hands
//! back the closure the engine repeats.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::error::HarnessError;

/// One iteration of measured work.
pub type RunnableUnit = Box<dyn Fn() + Send + Sync>;

/// One-time setup producing the [`RunnableUnit`] of a variant.
pub type VariantFactory = Arc<dyn Fn() -> Result<RunnableUnit> + Send + Sync>;

static BUILTIN: Lazy<Result<Registry, HarnessError>> = Lazy::new(crate::variants::builtin);

/// Process-wide registry of the built-in scenarios.
pub fn builtin_registry() -> Result<&'static Registry, HarnessError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

#[derive(Clone)]
pub struct Variant {
    name: String,
    factory: VariantFactory,
}

impl Variant {
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<RunnableUnit> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the factory. Each call performs the variant's setup again.
    pub fn build(&self) -> Result<RunnableUnit> {
        (self.factory)()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    variants: Vec<Variant>,
}

impl Scenario {
    /// Rejects empty variant lists and repeated variant names.
    pub fn new(name: impl Into<String>, variants: Vec<Variant>) -> Result<Self, HarnessError> {
        let name = name.into();
        if variants.is_empty() {
            return Err(HarnessError::EmptyScenario { scenario: name });
        }
        let mut seen = FxHashSet::default();
        for variant in &variants {
            if !seen.insert(variant.name()) {
                return Err(HarnessError::DuplicateVariant {
                    scenario: name.clone(),
                    variant: variant.name().to_string(),
                });
            }
        }
        Ok(Self { name, variants })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant_names(&self) -> Vec<&str> {
        self.variants.iter().map(Variant::name).collect()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    scenarios: Vec<Scenario>,
}

impl Registry {
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, HarnessError> {
        let mut seen = FxHashSet::default();
        for scenario in &scenarios {
            if !seen.insert(scenario.name()) {
                return Err(HarnessError::DuplicateScenario {
                    scenario: scenario.name().to_string(),
                });
            }
        }
        Ok(Self { scenarios })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(Scenario::name).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
