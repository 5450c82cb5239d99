use std::{
    fmt,
    sync::atomic::{AtomicI64, AtomicU64, Ordering::Relaxed},
};

use sealed::sealed;
use tracing::debug;

use crate::{
    descriptor::Descriptor,
    errors::Error,
    metric::{Metric, MetricKind},
    sample::SampleValue,
};

/// A gauge holding a signed 64-bit integer.
pub type LongGaugeMetric = GaugeMetric<i64>;

/// A gauge holding a 64-bit float.
pub type DoubleGaugeMetric = GaugeMetric<f64>;

/// A value that can be held by [`GaugeMetric`]: `i64` or `f64`.
#[sealed]
pub trait GaugeValue:
    Copy + PartialEq + fmt::Debug + Send + Sync + Into<SampleValue> + 'static
{
    #[doc(hidden)]
    type Atomic: Send + Sync;

    #[doc(hidden)]
    const ZERO: Self;
    #[doc(hidden)]
    const ONE: Self;
    #[doc(hidden)]
    const KIND: MetricKind;

    #[doc(hidden)]
    fn new_atomic(value: Self) -> Self::Atomic;
    #[doc(hidden)]
    fn load(atomic: &Self::Atomic) -> Self;
    #[doc(hidden)]
    fn store(atomic: &Self::Atomic, value: Self);
    /// Returns the updated value.
    #[doc(hidden)]
    fn add(atomic: &Self::Atomic, delta: Self) -> Self;
    /// Returns the updated value.
    #[doc(hidden)]
    fn sub(atomic: &Self::Atomic, delta: Self) -> Self;
}

// Wraps on overflow, the same way `fetch_add` does.
#[sealed]
impl GaugeValue for i64 {
    type Atomic = AtomicI64;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const KIND: MetricKind = MetricKind::LongGauge;

    #[inline]
    fn new_atomic(value: Self) -> AtomicI64 {
        AtomicI64::new(value)
    }

    #[inline]
    fn load(atomic: &AtomicI64) -> Self {
        atomic.load(Relaxed)
    }

    #[inline]
    fn store(atomic: &AtomicI64, value: Self) {
        atomic.store(value, Relaxed);
    }

    #[inline]
    fn add(atomic: &AtomicI64, delta: Self) -> Self {
        atomic.fetch_add(delta, Relaxed).wrapping_add(delta)
    }

    #[inline]
    fn sub(atomic: &AtomicI64, delta: Self) -> Self {
        atomic.fetch_sub(delta, Relaxed).wrapping_sub(delta)
    }
}

// There is no `AtomicF64`, so bits are stored in `AtomicU64` and updated
// by a CAS loop.
#[sealed]
impl GaugeValue for f64 {
    type Atomic = AtomicU64;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const KIND: MetricKind = MetricKind::DoubleGauge;

    #[inline]
    fn new_atomic(value: Self) -> AtomicU64 {
        AtomicU64::new(value.to_bits())
    }

    #[inline]
    fn load(atomic: &AtomicU64) -> Self {
        f64::from_bits(atomic.load(Relaxed))
    }

    #[inline]
    fn store(atomic: &AtomicU64, value: Self) {
        atomic.store(value.to_bits(), Relaxed);
    }

    #[inline]
    fn add(atomic: &AtomicU64, delta: Self) -> Self {
        let prev = atomic
            .fetch_update(Relaxed, Relaxed, |bits| {
                Some((f64::from_bits(bits) + delta).to_bits())
            })
            .unwrap_or_else(|bits| bits);

        f64::from_bits(prev) + delta
    }

    #[inline]
    fn sub(atomic: &AtomicU64, delta: Self) -> Self {
        <Self as GaugeValue>::add(atomic, -delta)
    }
}

/// A numerical value that can arbitrarily go up and down.
///
/// Use it via [`LongGaugeMetric`] or [`DoubleGaugeMetric`].
pub struct GaugeMetric<T: GaugeValue> {
    descriptor: Descriptor,
    initial: T,
    value: T::Atomic,
}

impl<T: GaugeValue> GaugeMetric<T> {
    /// Creates a new gauge starting at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_initial(name, help, namespace, T::ZERO)
    }

    /// Creates a new gauge starting at `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn with_initial(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
        initial: T,
    ) -> Result<Self, Error> {
        let descriptor = Descriptor::new(name, help, namespace)?;
        Ok(Self::from_descriptor(descriptor, initial))
    }

    /// Creates a new gauge from the already validated descriptor.
    pub fn from_descriptor(descriptor: Descriptor, initial: T) -> Self {
        descriptor.trace_created(T::KIND);

        Self {
            descriptor,
            initial,
            value: T::new_atomic(initial),
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> T {
        T::load(&self.value)
    }

    /// Replaces the value.
    #[inline]
    pub fn set(&self, value: T) {
        T::store(&self.value, value);
    }

    /// Increments the value by one.
    #[inline]
    pub fn inc(&self) {
        T::add(&self.value, T::ONE);
    }

    /// Decrements the value by one.
    #[inline]
    pub fn dec(&self) {
        T::sub(&self.value, T::ONE);
    }

    /// Increments the value by one and returns the new value.
    #[inline]
    pub fn inc_and_get(&self) -> T {
        T::add(&self.value, T::ONE)
    }

    /// Decrements the value by one and returns the new value.
    #[inline]
    pub fn dec_and_get(&self) -> T {
        T::sub(&self.value, T::ONE)
    }

    /// Adds `delta`, which can be negative.
    #[inline]
    pub fn add(&self, delta: T) {
        T::add(&self.value, delta);
    }

    /// Adds `delta`, which can be negative, and returns the new value.
    #[inline]
    pub fn add_and_get(&self, delta: T) -> T {
        T::add(&self.value, delta)
    }
}

impl<T: GaugeValue> fmt::Debug for GaugeMetric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeMetric")
            .field("descriptor", &self.descriptor)
            .field("initial", &self.initial)
            .field("value", &self.get())
            .finish()
    }
}

impl<T: GaugeValue> Metric for GaugeMetric<T> {
    type Value = T;

    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn kind(&self) -> MetricKind {
        T::KIND
    }

    fn value(&self) -> T {
        self.get()
    }

    fn reset(&self) {
        debug!(metric = %self.descriptor, "resetting metric");
        self.set(self.initial);
    }
}
