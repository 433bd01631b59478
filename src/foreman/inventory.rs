//! Fleet-wide inventory grouped by hostgroup

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::config::inventory as inventory_config;
use crate::error::Result;
use crate::foreman::cache::ReferenceCache;
use crate::foreman::client::ForemanClient;
use crate::foreman::reference::ReferenceKind;

/// Per-run context: the API client plus the reference cache it feeds
pub struct ForemanInventory {
    pub(crate) client: ForemanClient,
    pub(crate) cache: ReferenceCache,
}

impl ForemanInventory {
    pub fn new(client: ForemanClient) -> Self {
        Self {
            client,
            cache: ReferenceCache::new(),
        }
    }

    /// Lookups performed so far
    pub fn cache(&self) -> &ReferenceCache {
        &self.cache
    }

    /// Fetch every host and group host names by hostgroup label
    pub async fn list_inventory(&mut self) -> Result<GroupedInventory> {
        let hosts = self.client.fetch_all_hosts().await?;
        let mut inventory = GroupedInventory::default();

        if hosts.is_empty() {
            debug!("Foreman returned no hosts");
            return Ok(inventory);
        }

        for host in hosts {
            let Some(name) = host.name else {
                warn!("Skipping host {:?} without a name", host.id);
                continue;
            };

            let group = self
                .cache
                .label(&self.client, ReferenceKind::Hostgroup, host.hostgroup_id)
                .await
                .unwrap_or_else(|| inventory_config::UNGROUPED.to_string());

            inventory.add_host(group, name);
        }

        debug!(
            "Grouped hosts into {} groups using {} lookups",
            inventory.groups.len(),
            self.cache.len()
        );
        Ok(inventory)
    }
}

/// Host names per group label, plus the reserved `_meta` key
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct GroupedInventory {
    #[serde(flatten)]
    groups: BTreeMap<String, Vec<String>>,
    #[serde(rename = "_meta")]
    meta: InventoryMeta,
}

/// Per-host variables are never emitted in grouped mode
#[derive(Serialize, Debug, Default, PartialEq)]
struct InventoryMeta {
    hostvars: BTreeMap<String, Value>,
}

impl GroupedInventory {
    /// Append a host to a group, creating the group on first use.
    ///
    /// A group label colliding with the reserved `_meta` key is filed
    /// under `ungrouped` instead.
    pub fn add_host(&mut self, group: String, host_name: String) {
        let group = if group == inventory_config::META_KEY {
            warn!(
                "Hostgroup label '{}' is reserved, listing host '{}' as {}",
                group,
                host_name,
                inventory_config::UNGROUPED
            );
            inventory_config::UNGROUPED.to_string()
        } else {
            group
        };
        self.groups.entry(group).or_default().push(host_name);
    }

    /// Host names of a group in API order
    pub fn hosts(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<String>> {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
