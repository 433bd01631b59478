//! Variables for a single host (`--host` mode)

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::foreman::inventory::ForemanInventory;
use crate::foreman::models::Host;
use crate::foreman::reference::ReferenceKind;

/// Flat attribute record returned for one host
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct HostVars {
    pub id: Option<u64>,
    pub ip: Option<String>,
    pub name: Option<String>,
    pub environment: Option<String>,
    pub os: Option<String>,
    pub model: Option<String>,
    pub compute_resource: Option<String>,
    pub domain: Option<String>,
    pub subnet: Option<String>,
    pub architecture: Option<String>,
    pub hostgroup: Option<String>,
    pub status: Option<Value>,
    pub created: Option<String>,
    pub updated: Option<String>,
    /// Same as `ip`; Ansible connects to this address
    pub ansible_ssh_host: Option<String>,
}

impl ForemanInventory {
    /// Describe one host by ID or name. Unknown hosts yield `None`.
    pub async fn describe_host(&mut self, host_id: &str) -> Option<HostVars> {
        let Some(record) = self
            .cache
            .resolve(&self.client, ReferenceKind::Host, Some(host_id))
            .await
            .cloned()
        else {
            debug!("Host '{}' not found, returning empty record", host_id);
            return None;
        };

        let host: Host = match serde_json::from_value(record) {
            Ok(host) => host,
            Err(e) => {
                warn!("Could not decode host '{}': {}", host_id, e);
                return None;
            }
        };

        let environment = match host.environment_id {
            Some(id) => self.label(ReferenceKind::Environment, Some(id)).await,
            None => host.environment_name.as_deref().map(str::to_lowercase),
        };

        Some(HostVars {
            id: host.id,
            ip: host.ip.clone(),
            name: host.name.clone(),
            environment,
            os: self
                .label(ReferenceKind::OperatingSystem, host.operatingsystem_id)
                .await,
            model: self.label(ReferenceKind::Model, host.model_id).await,
            compute_resource: self
                .label(ReferenceKind::ComputeResource, host.compute_resource_id)
                .await,
            domain: self.label(ReferenceKind::Domain, host.domain_id).await,
            subnet: self.label(ReferenceKind::Subnet, host.subnet_id).await,
            architecture: self
                .label(ReferenceKind::Architecture, host.architecture_id)
                .await,
            hostgroup: self.label(ReferenceKind::Hostgroup, host.hostgroup_id).await,
            status: host.status.clone(),
            created: host.created_at.clone(),
            updated: host.updated_at.clone(),
            ansible_ssh_host: host.ip,
        })
    }

    async fn label(&mut self, kind: ReferenceKind, id: Option<u64>) -> Option<String> {
        self.cache.label(&self.client, kind, id).await
    }
}
