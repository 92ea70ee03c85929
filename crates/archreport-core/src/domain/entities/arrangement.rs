use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{entities::port::PortSet, value_objects::PortId};

/// Bookmark title used when a studio arrangement is saved.
pub const ARRANGEMENT_BOOKMARK_TITLE: &str = "Hexagonal Architecture Arrangement";

/// One row of an arrangement snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangementEntry {
    pub port: PortId,
    /// Title of the adapter in the port, `None` when empty.
    pub adapter: Option<String>,
}

/// Port-to-adapter mapping at one point in time, in fixed port order.
///
/// Derived on demand from a [`PortSet`]; never stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement {
    entries: Vec<ArrangementEntry>,
}

impl Arrangement {
    pub fn snapshot(ports: &PortSet) -> Self {
        Self {
            entries: ports
                .iter()
                .map(|p| ArrangementEntry {
                    port: p.id,
                    adapter: p.content.as_ref().map(|a| a.title.clone()),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ArrangementEntry] {
        &self.entries
    }

    pub fn adapter_at(&self, port: PortId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.port == port)
            .and_then(|e| e.adapter.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.adapter.is_none())
    }

    /// Bookmark payload: `{ "arrangement": [{ "port", "adapter" }, ...] }`.
    pub fn to_bookmark_data(&self) -> Value {
        json!({ "arrangement": self.entries })
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match &entry.adapter {
                Some(title) => writeln!(f, "{}: {}", entry.port, title)?,
                None => writeln!(f, "{}: (empty)", entry.port)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::adapter::BUILTIN_ADAPTERS;

    #[test]
    fn empty_ports_snapshot_to_six_nones() {
        let arrangement = Arrangement::snapshot(&PortSet::new());
        assert_eq!(arrangement.entries().len(), 6);
        assert!(arrangement.is_empty());
    }

    #[test]
    fn bookmark_data_shape() {
        let mut ports = PortSet::new();
        ports.assign(PortId::Port2, BUILTIN_ADAPTERS[1].to_adapter());

        let data = Arrangement::snapshot(&ports).to_bookmark_data();
        let rows = data["arrangement"].as_array().unwrap();

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], json!({ "port": "port-1", "adapter": null }));
        assert_eq!(
            rows[1],
            json!({ "port": "port-2", "adapter": "Payment Gateway" })
        );
    }

    #[test]
    fn display_lists_every_port() {
        let text = Arrangement::snapshot(&PortSet::new()).to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("port-1: (empty)"));
    }
}
