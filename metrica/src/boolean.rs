use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

use tracing::debug;

use crate::{
    descriptor::Descriptor,
    errors::Error,
    metric::{Metric, MetricKind},
};

/// A flag that can be set and replaced.
#[derive(Debug)]
pub struct BooleanMetric {
    descriptor: Descriptor,
    initial: bool,
    value: AtomicBool,
}

impl BooleanMetric {
    /// Creates a new metric with `false` as the initial value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_initial(name, help, namespace, false)
    }

    /// Creates a new metric with the provided initial value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn with_initial(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
        initial: bool,
    ) -> Result<Self, Error> {
        let descriptor = Descriptor::new(name, help, namespace)?;
        Ok(Self::from_descriptor(descriptor, initial))
    }

    /// Creates a new metric from the already validated descriptor.
    pub fn from_descriptor(descriptor: Descriptor, initial: bool) -> Self {
        descriptor.trace_created(MetricKind::Boolean);

        Self {
            descriptor,
            initial,
            value: AtomicBool::new(initial),
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> bool {
        self.value.load(Relaxed)
    }

    /// Replaces the value.
    #[inline]
    pub fn set(&self, value: bool) {
        self.value.store(value, Relaxed);
    }

    /// Replaces the value and returns it.
    #[inline]
    pub fn set_and_get(&self, value: bool) -> bool {
        self.set(value);
        value
    }
}

impl Metric for BooleanMetric {
    type Value = bool;

    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Boolean
    }

    fn value(&self) -> bool {
        self.get()
    }

    fn reset(&self) {
        debug!(metric = %self.descriptor, "resetting metric");
        self.set(self.initial);
    }
}
