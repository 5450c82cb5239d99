use std::fmt;

use derive_more::{Display, IsVariant};
use serde::Serialize;

use crate::{
    descriptor::Descriptor,
    sample::{Sample, SampleValue},
};

/// The closed set of metric types provided by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// See [`BooleanMetric`](crate::BooleanMetric).
    Boolean,
    /// See [`CounterMetric`](crate::CounterMetric).
    Counter,
    /// See [`LongGaugeMetric`](crate::LongGaugeMetric).
    LongGauge,
    /// See [`DoubleGaugeMetric`](crate::DoubleGaugeMetric).
    DoubleGauge,
    /// See [`InfoMetric`](crate::InfoMetric).
    Info,
}

impl MetricKind {
    /// Returns the metric type in terms of the Prometheus exposition format.
    ///
    /// Booleans are exposed as gauges with values `0` and `1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean | Self::LongGauge | Self::DoubleGauge => "gauge",
            Self::Counter => "counter",
            Self::Info => "info",
        }
    }
}

/// The interface shared by all metrics, used by collectors to read them.
///
/// Every metric is `Send + Sync` and mutated through a shared reference,
/// so it can be registered somewhere and updated elsewhere via `Arc`.
pub trait Metric: fmt::Debug + Send + Sync {
    /// The type of the held value.
    type Value: Into<SampleValue>;

    /// Returns the identity of the metric.
    fn descriptor(&self) -> &Descriptor;

    /// Returns the type of the metric.
    fn kind(&self) -> MetricKind;

    /// Returns the current value.
    fn value(&self) -> Self::Value;

    /// Restores the value the metric has been created with.
    fn reset(&self);

    /// The name of the metric, without the namespace.
    fn name(&self) -> &str {
        self.descriptor().name()
    }

    /// A human-readable description of the metric.
    fn help(&self) -> &str {
        self.descriptor().help()
    }

    /// The grouping label of the metric.
    fn namespace(&self) -> &str {
        self.descriptor().namespace()
    }

    /// Takes a point-in-time snapshot of the metric.
    fn sample(&self) -> Sample {
        Sample::new(self.descriptor(), self.kind(), self.value().into())
    }
}
