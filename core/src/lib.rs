pub mod engine;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod suite;
pub mod variants;

#[cfg(test)]
mod registry_test;
#[cfg(test)]
mod suite_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use engine::{EngineOptions, Measurement, SamplingEngine, SuiteEvent, SuiteRun, TimingEngine};
pub use error::HarnessError;
pub use registry::{Registry, RunnableUnit, Scenario, Variant, VariantFactory, builtin_registry};
pub use report::Reporter;
pub use runner::{SuiteReport, launch, run_collection};
pub use suite::{Suite, SuiteCollection, build_suite, build_suite_collection};
