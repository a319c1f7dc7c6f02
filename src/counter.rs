//! Shared fox counter state.
//!
//! The counter is a `prometheus::IntCounter` registered in a private
//! registry, so the same atomic value backs both the application routes
//! and the metrics exposition. The registry starts empty
//! (`Registry::new()`): no process or runtime collectors, exactly one
//! metric family in the rendered output.

use prometheus::{IntCounter, Registry, TextEncoder};

/// Help text attached to the exposition metric family.
const METRIC_HELP: &str = "Foxes instance count";

/// Handle to the single shared counter. Cloning is cheap; all clones
/// observe and mutate the same value.
#[derive(Clone)]
pub struct FoxCounter {
    registry: Registry,
    foxes: IntCounter,
}

impl FoxCounter {
    /// Create the counter metric under `metric_name` and register it in a
    /// fresh registry. Fails only on an invalid metric name.
    pub fn new(metric_name: &str) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let foxes = IntCounter::new(metric_name, METRIC_HELP)?;
        registry.register(Box::new(foxes.clone()))?;
        Ok(Self { registry, foxes })
    }

    /// Current value. No side effects.
    pub fn get(&self) -> u64 {
        self.foxes.get()
    }

    /// Add one. Concurrent increments are never lost.
    pub fn increment(&self) {
        self.foxes.inc();
    }

    /// Set the value back to zero.
    pub fn reset(&self) {
        self.foxes.reset();
    }

    /// Render the registry in Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut buf)?;
        Ok(buf)
    }
}
