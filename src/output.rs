//! JSON output formatter
//!
//! Ansible reads the inventory from stdout, so everything printed here is a
//! single JSON document with sorted keys and 4-space indentation.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::foreman::{GroupedInventory, HostVars};

/// Result of one inventory request
#[derive(Debug)]
pub enum InventoryOutput {
    /// `--host`: flat variables, `{}` when the host is unknown
    Host(Option<HostVars>),
    /// `--list`: hosts grouped by hostgroup label
    Groups(GroupedInventory),
    /// Neither mode requested
    Empty,
}

impl InventoryOutput {
    fn to_value(&self) -> Result<Value> {
        let value = match self {
            InventoryOutput::Host(Some(vars)) => serde_json::to_value(vars)?,
            InventoryOutput::Groups(groups) => serde_json::to_value(groups)?,
            InventoryOutput::Host(None) | InventoryOutput::Empty => Value::Object(Map::new()),
        };
        Ok(value)
    }
}

/// Serialize any value the way the inventory is printed
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    let sorted = sort_keys(serde_json::to_value(value)?);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    sorted.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render an inventory result
pub fn render_output(output: &InventoryOutput) -> Result<String> {
    render(&output.to_value()?)
}

/// Print an inventory result to stdout
pub fn output_inventory(output: &InventoryOutput) -> Result<()> {
    println!("{}", render_output(output)?);
    Ok(())
}

/// Rebuild objects in key order, independent of serde_json's map backend
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_sorts_keys_and_indents_four_spaces() {
        let rendered = render(&json!({"b": 1, "a": {"d": 2, "c": 3}})).unwrap();
        assert_eq!(
            rendered,
            "{\n    \"a\": {\n        \"c\": 3,\n        \"d\": 2\n    },\n    \"b\": 1\n}"
        );
    }

    #[test]
    fn test_unknown_host_renders_empty_object() {
        let rendered = render_output(&InventoryOutput::Host(None)).unwrap();
        assert_eq!(rendered, "{}");
    }

    #[test]
    fn test_empty_request_renders_empty_object() {
        assert_eq!(render_output(&InventoryOutput::Empty).unwrap(), "{}");
    }

    #[test]
    fn test_grouped_output_keeps_host_order() {
        let mut groups = GroupedInventory::default();
        groups.add_host("web".to_string(), "z".to_string());
        groups.add_host("web".to_string(), "a".to_string());

        let rendered = render_output(&InventoryOutput::Groups(groups)).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            json!({"_meta": {"hostvars": {}}, "web": ["z", "a"]})
        );
        assert!(rendered.starts_with("{\n    \"_meta\""));
    }

    #[test]
    fn test_host_vars_render_nulls() {
        let vars = HostVars {
            name: Some("web01".to_string()),
            ..Default::default()
        };
        let rendered = render_output(&InventoryOutput::Host(Some(vars))).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["name"], "web01");
        assert_eq!(parsed["os"], Value::Null);
        assert!(rendered.find("\"ansible_ssh_host\"") < rendered.find("\"name\""));
    }
}
