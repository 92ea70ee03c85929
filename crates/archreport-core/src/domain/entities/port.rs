use serde::Serialize;

use crate::domain::{
    entities::adapter::Adapter,
    value_objects::{AdapterId, PortId},
};

/// A slot on the hexagon, holding at most one adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Port {
    pub id: PortId,
    pub content: Option<Adapter>,
}

impl Port {
    pub fn is_occupied(&self) -> bool {
        self.content.is_some()
    }
}

/// The six ports around the hexagon.
///
/// Invariant: exactly one entry per [`PortId`], stored in [`PortId::ALL`]
/// order. Only `content` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortSet {
    ports: [Port; 6],
}

impl PortSet {
    /// Six empty ports.
    pub fn new() -> Self {
        Self {
            ports: PortId::ALL.map(|id| Port { id, content: None }),
        }
    }

    pub fn get(&self, id: PortId) -> &Port {
        &self.ports[id.index()]
    }

    pub fn occupant(&self, id: PortId) -> Option<&Adapter> {
        self.get(id).content.as_ref()
    }

    /// Place an adapter, returning whatever was there before.
    pub fn assign(&mut self, id: PortId, adapter: Adapter) -> Option<Adapter> {
        self.ports[id.index()].content.replace(adapter)
    }

    /// Empty a port, returning its previous content.
    pub fn clear(&mut self, id: PortId) -> Option<Adapter> {
        self.ports[id.index()].content.take()
    }

    /// Which port hosts the given adapter, if any.
    pub fn locate(&self, adapter: &AdapterId) -> Option<PortId> {
        self.ports
            .iter()
            .find(|p| p.content.as_ref().is_some_and(|a| &a.id == adapter))
            .map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    /// Adapters currently placed, in port order.
    pub fn placed(&self) -> impl Iterator<Item = &Adapter> {
        self.ports.iter().filter_map(|p| p.content.as_ref())
    }

    pub fn occupied_count(&self) -> usize {
        self.placed().count()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for PortSet {
    fn default() -> Self {
        Self::new()
    }
}
