use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    errors::{Error, Field},
    metric::MetricKind,
};

/// The identity of a metric: its name, help string and namespace.
///
/// Both `name` and `help` are guaranteed to be non-empty, the namespace can
/// be anything, including an empty string.
///
/// Can be embedded into configs, the validation happens on deserialization:
/// ```
/// # use metrica::Descriptor;
/// let descriptor: Descriptor = serde_json::from_str(
///     r#"{ "name": "conferences", "help": "Active conferences", "namespace": "jvb" }"#,
/// ).unwrap();
///
/// assert_eq!(descriptor.qualified_name(), "jvb_conferences");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub struct Descriptor {
    name: String,
    help: String,
    namespace: String,
}

#[derive(Deserialize)]
struct RawDescriptor {
    name: String,
    help: String,
    #[serde(default)]
    namespace: String,
}

impl TryFrom<RawDescriptor> for Descriptor {
    type Error = Error;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.help, raw.namespace)
    }
}

impl Descriptor {
    /// Creates a new descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if `name` or `help` is empty. The name is
    /// checked first.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, Error> {
        let name = name.into();
        let help = help.into();
        validate(&name, &help)?;

        Ok(Self {
            name,
            help,
            namespace: namespace.into(),
        })
    }

    /// The name of the metric, without the namespace.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A human-readable description of the metric.
    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The grouping label of the metric.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns `<namespace>_<name>`, or just the name if the namespace is empty.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }

    pub(crate) fn trace_created(&self, kind: MetricKind) {
        trace!(metric = %self, kind = %kind, "metric created");
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.namespace.is_empty() {
            f.write_str(&self.namespace)?;
            f.write_str("_")?;
        }
        f.write_str(&self.name)
    }
}

/// The precondition shared by all metric constructors.
fn validate(name: &str, help: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyField(Field::Name));
    }
    if help.is_empty() {
        return Err(Error::EmptyField(Field::Help));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields() {
        assert_eq!(
            Descriptor::new("", "Help", "test"),
            Err(Error::EmptyField(Field::Name))
        );
        assert_eq!(
            Descriptor::new("name", "", "test"),
            Err(Error::EmptyField(Field::Help))
        );
        // The name is checked first.
        assert_eq!(
            Descriptor::new("", "", "test"),
            Err(Error::EmptyField(Field::Name))
        );
    }

    #[test]
    fn qualified_name() {
        let descriptor = Descriptor::new("bitrate", "Help", "jvb").unwrap();
        assert_eq!(descriptor.qualified_name(), "jvb_bitrate");
        assert_eq!(descriptor.to_string(), "jvb_bitrate");

        let descriptor = Descriptor::new("bitrate", "Help", "").unwrap();
        assert_eq!(descriptor.qualified_name(), "bitrate");
        assert_eq!(descriptor.to_string(), "bitrate");
    }

    #[test]
    fn deserialize() {
        let config = r#"
            name = "participants"
            help = "Number of participants"
        "#;

        let descriptor: Descriptor = toml::from_str(config).unwrap();
        assert_eq!(descriptor.name(), "participants");
        assert_eq!(descriptor.help(), "Number of participants");
        assert_eq!(descriptor.namespace(), "");
    }

    #[test]
    fn deserialize_invalid() {
        let config = r#"
            name = "participants"
            help = ""
            namespace = "jvb"
        "#;

        let err = toml::from_str::<Descriptor>(config).unwrap_err();
        assert!(err.to_string().contains("metric help must not be empty"));
    }

    #[test]
    fn serialize() {
        let descriptor = Descriptor::new("bitrate", "Help", "jvb").unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "bitrate", "help": "Help", "namespace": "jvb" })
        );
    }
}
