use crate::{
    descriptor::Descriptor,
    errors::Error,
    metric::{Metric, MetricKind},
};

/// A static string, e.g. a version or a region, fixed at construction.
///
/// The value may be empty, only the name and help are validated.
#[derive(Debug)]
pub struct InfoMetric {
    descriptor: Descriptor,
    value: String,
}

impl InfoMetric {
    /// Creates a new info metric.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, Error> {
        let descriptor = Descriptor::new(name, help, namespace)?;
        Ok(Self::from_descriptor(descriptor, value))
    }

    /// Creates a new info metric from the already validated descriptor.
    pub fn from_descriptor(descriptor: Descriptor, value: impl Into<String>) -> Self {
        descriptor.trace_created(MetricKind::Info);

        Self {
            descriptor,
            value: value.into(),
        }
    }

    /// Returns the value.
    #[inline]
    pub fn get(&self) -> &str {
        &self.value
    }
}

impl Metric for InfoMetric {
    type Value = String;

    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Info
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    // Nothing to reset, the value is immutable.
    fn reset(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleValue;

    #[test]
    fn value_differs_from_name() {
        let info = InfoMetric::new("testInfo", "Help", "test", "testInfoValue").unwrap();
        assert_eq!(info.get(), "testInfoValue");
        assert_eq!(info.name(), "testInfo");

        info.reset();
        assert_eq!(info.get(), "testInfoValue");
    }

    #[test]
    fn empty_value() {
        let info = InfoMetric::new("region", "Help", "jvb", "").unwrap();
        assert_eq!(info.get(), "");
    }

    #[test]
    fn sample() {
        let info = InfoMetric::new("version", "Help", "jvb", "2.3.1").unwrap();
        let sample = info.sample();

        assert_eq!(sample.name, "jvb_version");
        assert_eq!(sample.kind, MetricKind::Info);
        assert_eq!(sample.value, SampleValue::Text("2.3.1".into()));
        assert_eq!(sample.value.as_f64(), None);
    }
}
