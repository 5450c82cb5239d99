use std::sync::atomic::{AtomicI64, Ordering::Relaxed};

use tracing::debug;

use crate::{
    descriptor::Descriptor,
    errors::Error,
    metric::{Metric, MetricKind},
};

/// A monotonically increasing counter.
///
/// The value never goes below zero: negative initial values and negative
/// deltas are rejected. Additions saturate at `i64::MAX`.
#[derive(Debug)]
pub struct CounterMetric {
    descriptor: Descriptor,
    initial: i64,
    value: AtomicI64,
}

impl CounterMetric {
    /// Creates a new counter starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_initial(name, help, namespace, 0)
    }

    /// Creates a new counter starting at `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty, or
    /// [`Error::NegativeInitialValue`] if `initial` is negative.
    pub fn with_initial(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
        initial: i64,
    ) -> Result<Self, Error> {
        let descriptor = Descriptor::new(name, help, namespace)?;
        Self::from_descriptor(descriptor, initial)
    }

    /// Creates a new counter from the already validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeInitialValue`] if `initial` is negative.
    pub fn from_descriptor(descriptor: Descriptor, initial: i64) -> Result<Self, Error> {
        if initial < 0 {
            debug!(metric = %descriptor, initial, "rejected negative initial value");
            return Err(Error::NegativeInitialValue {
                name: descriptor.qualified_name(),
                value: initial,
            });
        }

        descriptor.trace_created(MetricKind::Counter);

        Ok(Self {
            descriptor,
            initial,
            value: AtomicI64::new(initial),
        })
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.value.load(Relaxed)
    }

    /// Increments the value by one.
    #[inline]
    pub fn inc(&self) {
        self.add_unchecked(1);
    }

    /// Increments the value by one and returns the new value.
    #[inline]
    pub fn inc_and_get(&self) -> i64 {
        self.add_unchecked(1)
    }

    /// Increases the value by `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeDelta`] if `delta` is negative, the value
    /// is left unchanged in this case.
    #[inline]
    pub fn add(&self, delta: i64) -> Result<(), Error> {
        self.add_and_get(delta).map(|_| ())
    }

    /// Increases the value by `delta` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeDelta`] if `delta` is negative, the value
    /// is left unchanged in this case.
    #[inline]
    pub fn add_and_get(&self, delta: i64) -> Result<i64, Error> {
        if delta < 0 {
            return Err(self.reject(delta));
        }

        Ok(self.add_unchecked(delta))
    }

    // `delta` must be non-negative.
    fn add_unchecked(&self, delta: i64) -> i64 {
        debug_assert!(delta >= 0);

        let prev = self
            .value
            .fetch_update(Relaxed, Relaxed, |value| Some(value.saturating_add(delta)))
            .unwrap_or_else(|value| value);

        prev.saturating_add(delta)
    }

    #[cold]
    fn reject(&self, delta: i64) -> Error {
        debug!(metric = %self.descriptor, delta, "rejected negative delta");

        Error::NegativeDelta {
            name: self.descriptor.qualified_name(),
            delta,
        }
    }
}

impl Metric for CounterMetric {
    type Value = i64;

    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Counter
    }

    fn value(&self) -> i64 {
        self.get()
    }

    fn reset(&self) {
        debug!(metric = %self.descriptor, "resetting metric");
        self.value.store(self.initial, Relaxed);
    }
}
