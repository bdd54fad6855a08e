use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::error::HarnessError;
use crate::registry::{Registry, RunnableUnit, Scenario};

pub struct SuiteEntry {
    name: String,
    unit: RunnableUnit,
}

impl SuiteEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self) {
        (self.unit)()
    }
}

impl fmt::Debug for SuiteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteEntry").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Runnable variants of one scenario, in registration order.
#[derive(Debug)]
pub struct Suite {
    scenario: String,
    entries: Vec<SuiteEntry>,
}

impl Suite {
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn entries(&self) -> &[SuiteEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(SuiteEntry::name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Invokes every factory of `scenario` exactly once.
///
/// The first failing factory aborts the whole scenario; no partial suite is
/// ever returned.
pub fn build_suite(scenario: &Scenario) -> Result<Suite> {
    let mut entries = Vec::with_capacity(scenario.len());
    for variant in scenario.variants() {
        let unit = variant.build().with_context(|| HarnessError::Setup {
            scenario: scenario.name().to_string(),
            variant: variant.name().to_string(),
        })?;
        entries.push(SuiteEntry {
            name: variant.name().to_string(),
            unit,
        });
    }
    Ok(Suite {
        scenario: scenario.name().to_string(),
        entries,
    })
}

#[derive(Debug, Default)]
pub struct SuiteCollection {
    suites: Vec<Arc<Suite>>,
}

impl SuiteCollection {
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Suite>> {
        self.suites.iter()
    }

    pub fn get(&self, scenario: &str) -> Option<&Arc<Suite>> {
        self.suites.iter().find(|suite| suite.scenario() == scenario)
    }

    pub fn names(&self) -> Vec<&str> {
        self.suites.iter().map(|suite| suite.scenario()).collect()
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

pub fn build_suite_collection(registry: &Registry) -> Result<SuiteCollection> {
    let suites = registry
        .iter()
        .map(|scenario| build_suite(scenario).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;
    Ok(SuiteCollection { suites })
}
