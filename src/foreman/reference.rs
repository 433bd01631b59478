//! Reference kinds resolvable through the Foreman API

use serde_json::Value;
use std::fmt;

/// Foreign entity types a host record points at (plus hosts themselves)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Host,
    Hostgroup,
    OperatingSystem,
    Environment,
    Model,
    ComputeResource,
    Domain,
    Subnet,
    Architecture,
}

impl ReferenceKind {
    /// Key wrapping the record in v1-style `{ "<key>": {...} }` envelopes
    pub fn envelope_key(self) -> &'static str {
        match self {
            ReferenceKind::Host => "host",
            ReferenceKind::Hostgroup => "hostgroup",
            ReferenceKind::OperatingSystem => "operatingsystem",
            ReferenceKind::Environment => "environment",
            ReferenceKind::Model => "model",
            ReferenceKind::ComputeResource => "compute_resource",
            ReferenceKind::Domain => "domain",
            ReferenceKind::Subnet => "subnet",
            ReferenceKind::Architecture => "architecture",
        }
    }

    /// API collection serving the "show" call for this kind
    pub fn collection(self) -> &'static str {
        match self {
            ReferenceKind::Host => "hosts",
            ReferenceKind::Hostgroup => "hostgroups",
            ReferenceKind::OperatingSystem => "operatingsystems",
            ReferenceKind::Environment => "environments",
            ReferenceKind::Model => "models",
            ReferenceKind::ComputeResource => "compute_resources",
            ReferenceKind::Domain => "domains",
            ReferenceKind::Subnet => "subnets",
            ReferenceKind::Architecture => "architectures",
        }
    }

    /// Extract the human-readable label from a resolved record.
    ///
    /// Hostgroups carry their full path in `label` (v1) or `title` (v2);
    /// everything else is named by `name`. Environments are lowercased.
    pub fn label_of(self, record: &Value) -> Option<String> {
        let field = |key: &str| record.get(key).and_then(Value::as_str);

        match self {
            ReferenceKind::Hostgroup => field("label")
                .or_else(|| field("title"))
                .or_else(|| field("name"))
                .map(str::to_string),
            ReferenceKind::Environment => field("name").map(str::to_lowercase),
            _ => field("name").map(str::to_string),
        }
    }

    /// Strip the v1 envelope if present, otherwise return the bare record
    pub fn unwrap_envelope(self, body: Value) -> Value {
        let key = self.envelope_key();
        match body {
            Value::Object(mut map) if map.get(key).is_some_and(Value::is_object) => {
                map.remove(key).unwrap_or(Value::Null)
            }
            other => other,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.envelope_key())
    }
}
