use derive_more::{From, IsVariant};
use serde::Serialize;

use crate::{descriptor::Descriptor, metric::MetricKind};

/// A point-in-time snapshot of a metric, see [`Metric::sample`].
///
/// [`Metric::sample`]: crate::Metric::sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// The qualified name, see [`Descriptor::qualified_name`].
    pub name: String,
    /// The help string of the metric.
    pub help: String,
    /// The type of the metric.
    pub kind: MetricKind,
    /// The value at the moment of sampling.
    pub value: SampleValue,
}

impl Sample {
    pub(crate) fn new(descriptor: &Descriptor, kind: MetricKind, value: SampleValue) -> Self {
        Self {
            name: descriptor.qualified_name(),
            help: descriptor.help().to_owned(),
            kind,
            value,
        }
    }
}

/// A type-erased value of a metric.
#[derive(Debug, Clone, PartialEq, From, IsVariant, Serialize)]
#[serde(untagged)]
pub enum SampleValue {
    /// A value of [`BooleanMetric`](crate::BooleanMetric).
    Bool(bool),
    /// A value of [`CounterMetric`](crate::CounterMetric) or
    /// [`LongGaugeMetric`](crate::LongGaugeMetric).
    Integer(i64),
    /// A value of [`DoubleGaugeMetric`](crate::DoubleGaugeMetric).
    Float(f64),
    /// A value of [`InfoMetric`](crate::InfoMetric).
    Text(String),
}

impl SampleValue {
    /// Returns the value as it's exposed by Prometheus-like backends.
    /// Booleans are mapped to `0` and `1`, text has no numeric form.
    // allow: precision loss only for huge counters, that's fine for metrics.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn as_f64() {
        assert_eq!(SampleValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(SampleValue::Bool(false).as_f64(), Some(0.0));
        assert_eq!(SampleValue::Integer(-50).as_f64(), Some(-50.0));
        assert_eq!(SampleValue::Float(0.25).as_f64(), Some(0.25));
        assert_eq!(SampleValue::Text("v1".into()).as_f64(), None);
    }

    #[test]
    fn json() {
        let descriptor = Descriptor::new("uptime", "Uptime in seconds", "jvb").unwrap();
        let sample = Sample::new(&descriptor, MetricKind::Counter, SampleValue::Integer(21));

        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({
                "name": "jvb_uptime",
                "help": "Uptime in seconds",
                "kind": "counter",
                "value": 21,
            })
        );
    }

    #[test]
    fn from() {
        assert!(SampleValue::from(true).is_bool());
        assert!(SampleValue::from(1i64).is_integer());
        assert!(SampleValue::from(1.5f64).is_float());
        assert!(SampleValue::from(String::from("v")).is_text());
    }
}
