//! Host data models from the Foreman API

use serde::Deserialize;
use serde_json::Value;

/// Host record from the Foreman API (fields the inventory uses)
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Host {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub ip: Option<String>,
    pub environment_id: Option<u64>,
    pub environment_name: Option<String>,
    pub operatingsystem_id: Option<u64>,
    pub model_id: Option<u64>,
    pub compute_resource_id: Option<u64>,
    pub domain_id: Option<u64>,
    pub subnet_id: Option<u64>,
    pub architecture_id: Option<u64>,
    pub hostgroup_id: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// String in v1, object in newer API versions; copied through as-is
    pub status: Option<Value>,
}

/// A host entry in an index response: v1 wraps each record in `{ "host": {...} }`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum HostEntry {
    Enveloped { host: Host },
    Bare(Host),
}

impl From<HostEntry> for Host {
    fn from(entry: HostEntry) -> Self {
        match entry {
            HostEntry::Enveloped { host } => host,
            HostEntry::Bare(host) => host,
        }
    }
}

/// One page of the host index, in either API shape
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum HostsPage {
    /// v2: `{ "total": .., "page": .., "results": [...] }`
    Paged { results: Vec<HostEntry> },
    /// v1: bare JSON array
    List(Vec<HostEntry>),
}

impl HostsPage {
    /// Consume the page and return the host records in API order
    pub fn into_hosts(self) -> Vec<Host> {
        let entries = match self {
            HostsPage::Paged { results } => results,
            HostsPage::List(entries) => entries,
        };
        entries.into_iter().map(Host::from).collect()
    }
}
