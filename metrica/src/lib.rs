//! Typed metric value holders, meant to be registered with a metrics
//! collector and exposed for scraping.
//!
//! Five metric types are provided:
//! * [`BooleanMetric`] is a flag, exposed as a gauge with values `0` and `1`.
//! * [`CounterMetric`] is a monotonically increasing non-negative integer.
//! * [`LongGaugeMetric`] is an integer that can arbitrarily go up and down.
//! * [`DoubleGaugeMetric`] is a float that can arbitrarily go up and down.
//! * [`InfoMetric`] is a string fixed at construction.
//!
//! Every metric has a name, a help string and a namespace, see [`Descriptor`].
//! Both the name and the help string must be non-empty.
//!
//! All metrics are updated through a shared reference using atomics, thus
//! they can be shared between threads via `Arc` without extra locking.
//! Collectors read them through the [`Metric`] trait.
//!
//! ```
//! use metrica::{CounterMetric, ErrorKind, Metric};
//!
//! let counter = CounterMetric::new("packets", "Received packets", "jvb").unwrap();
//! counter.inc();
//! assert_eq!(counter.add_and_get(9), Ok(10));
//!
//! // Counters cannot go down.
//! let err = counter.add_and_get(-1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IllegalArgument);
//! assert_eq!(counter.get(), 10);
//!
//! let sample = counter.sample();
//! assert_eq!(sample.name, "jvb_packets");
//! ```

pub use self::{
    boolean::BooleanMetric,
    counter::CounterMetric,
    descriptor::Descriptor,
    errors::{Error, ErrorKind, Field},
    gauge::{DoubleGaugeMetric, GaugeMetric, GaugeValue, LongGaugeMetric},
    info::InfoMetric,
    metric::{Metric, MetricKind},
    sample::{Sample, SampleValue},
};

mod boolean;
mod counter;
mod descriptor;
mod errors;
mod gauge;
mod info;
mod metric;
mod sample;
