//! The studio assignment engine.
//!
//! A small reducer over [`StudioState`]: every [`StudioEvent`] is a total
//! transition that never fails. What happened is reported back as a
//! [`Transition`] so callers can render feedback without inspecting state.
//!
//! ```text
//!            BeginDrag(a)               EndDrag(port | none)
//!   Idle ───────────────────▶ Dragging(a) ──────────────────▶ Idle
//!                              │    ▲
//!                              └────┘ UpdateHover(port | none)
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    entities::{
        adapter::{Adapter, AdapterCatalog},
        arrangement::Arrangement,
        port::PortSet,
    },
    error::DomainError,
    value_objects::{AdapterId, DropPolicy, PortId},
};

/// Input to the engine, one per pointer gesture phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioEvent {
    BeginDrag(AdapterId),
    UpdateHover(Option<PortId>),
    EndDrag(Option<PortId>),
    /// Return every adapter to the catalog and clear selection.
    Reset,
}

/// Why an event left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "adapter", rename_all = "kebab-case")]
pub enum IgnoreReason {
    /// A drag gesture is already in progress for this adapter.
    DragInProgress(AdapterId),
    /// The adapter is not in the catalog (unknown or already placed).
    NotAvailable(AdapterId),
    /// Hover or drop arrived with no drag in progress.
    NoActiveDrag,
}

/// What became of a port's previous occupant after a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "adapter", rename_all = "kebab-case")]
pub enum Displacement {
    /// Back in the catalog, draggable again.
    Returned(AdapterId),
    /// Out of the session until the next reset.
    Orphaned(AdapterId),
}

impl Displacement {
    pub fn adapter(&self) -> &AdapterId {
        match self {
            Self::Returned(id) | Self::Orphaned(id) => id,
        }
    }
}

/// Outcome of applying one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "transition", rename_all = "kebab-case")]
pub enum Transition {
    Picked {
        adapter: AdapterId,
    },
    Hovered {
        port: Option<PortId>,
    },
    Committed {
        port: PortId,
        adapter: AdapterId,
        displaced: Option<Displacement>,
    },
    /// Dropped outside every port.
    Cancelled {
        adapter: AdapterId,
    },
    /// Dropped on an occupied port under [`DropPolicy::Reject`].
    Rejected {
        port: PortId,
        adapter: AdapterId,
        occupant: AdapterId,
    },
    Reset {
        returned: usize,
    },
    Ignored {
        #[serde(flatten)]
        reason: IgnoreReason,
    },
}

impl Transition {
    /// `true` if the transition changed catalog or ports.
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::Reset { .. })
    }
}

/// Complete state of one studio session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioState {
    catalog: AdapterCatalog,
    ports: PortSet,
    active: Option<Adapter>,
    selected: Option<Adapter>,
    hovered: Option<PortId>,
    orphaned: Vec<Adapter>,
    policy: DropPolicy,
}

impl StudioState {
    /// Fresh session over the given catalog.
    pub fn new(catalog: AdapterCatalog, policy: DropPolicy) -> Self {
        Self {
            catalog,
            ports: PortSet::new(),
            active: None,
            selected: None,
            hovered: None,
            orphaned: Vec::new(),
            policy,
        }
    }

    /// Built-in catalog with the default drop policy.
    pub fn builtin() -> Self {
        Self::new(AdapterCatalog::builtin(), DropPolicy::default())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &AdapterCatalog {
        &self.catalog
    }

    pub fn ports(&self) -> &PortSet {
        &self.ports
    }

    pub fn active(&self) -> Option<&Adapter> {
        self.active.as_ref()
    }

    pub fn selected(&self) -> Option<&Adapter> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<PortId> {
        self.hovered
    }

    /// Adapters dropped out of the session by [`DropPolicy::Overwrite`].
    pub fn orphaned(&self) -> &[Adapter] {
        &self.orphaned
    }

    pub fn policy(&self) -> DropPolicy {
        self.policy
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn arrangement(&self) -> Arrangement {
        Arrangement::snapshot(&self.ports)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Apply one event in place.
    pub fn apply(&mut self, event: StudioEvent) -> Transition {
        let transition = match event {
            StudioEvent::BeginDrag(id) => self.begin_drag(id),
            StudioEvent::UpdateHover(port) => self.update_hover(port),
            StudioEvent::EndDrag(target) => self.end_drag(target),
            StudioEvent::Reset => self.reset(),
        };

        debug!(?transition, "studio transition");
        debug_assert!(self.verify().is_ok(), "{:?}", self.verify());
        transition
    }

    fn begin_drag(&mut self, id: AdapterId) -> Transition {
        if let Some(active) = &self.active {
            return Transition::Ignored {
                reason: IgnoreReason::DragInProgress(active.id.clone()),
            };
        }

        let Some(adapter) = self.catalog.get(&id).cloned() else {
            return Transition::Ignored {
                reason: IgnoreReason::NotAvailable(id),
            };
        };

        // Selection follows pick-up, not drop.
        self.selected = Some(adapter.clone());
        self.active = Some(adapter);
        Transition::Picked { adapter: id }
    }

    fn update_hover(&mut self, port: Option<PortId>) -> Transition {
        if self.active.is_none() {
            return Transition::Ignored {
                reason: IgnoreReason::NoActiveDrag,
            };
        }
        self.hovered = port;
        Transition::Hovered { port }
    }

    fn end_drag(&mut self, target: Option<PortId>) -> Transition {
        self.hovered = None;
        let Some(adapter) = self.active.take() else {
            return Transition::Ignored {
                reason: IgnoreReason::NoActiveDrag,
            };
        };

        match target {
            None => Transition::Cancelled { adapter: adapter.id },
            Some(port) => self.commit(port, adapter),
        }
    }

    fn commit(&mut self, port: PortId, adapter: Adapter) -> Transition {
        let id = adapter.id.clone();

        if self.policy == DropPolicy::Reject {
            if let Some(occupant) = self.ports.occupant(port) {
                warn!(%port, adapter = %id, occupant = %occupant.id, "drop onto occupied port rejected");
                return Transition::Rejected {
                    port,
                    adapter: id,
                    occupant: occupant.id.clone(),
                };
            }
        }

        self.catalog.remove(&id);
        let displaced = self.ports.assign(port, adapter).map(|previous| {
            let previous_id = previous.id.clone();
            match self.policy {
                DropPolicy::Overwrite => {
                    self.orphaned.push(previous);
                    Displacement::Orphaned(previous_id)
                }
                _ => {
                    self.catalog.restore(previous);
                    Displacement::Returned(previous_id)
                }
            }
        });

        info!(%port, adapter = %id, ?displaced, "adapter committed to port");
        Transition::Committed {
            port,
            adapter: id,
            displaced,
        }
    }

    fn reset(&mut self) -> Transition {
        let mut returned = 0;
        for port in PortId::ALL {
            if let Some(adapter) = self.ports.clear(port) {
                self.catalog.restore(adapter);
                returned += 1;
            }
        }
        for adapter in std::mem::take(&mut self.orphaned) {
            self.catalog.restore(adapter);
            returned += 1;
        }

        self.active = None;
        self.selected = None;
        self.hovered = None;
        Transition::Reset { returned }
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check that every seed adapter lives in exactly one place.
    ///
    /// Places are the catalog, one of the ports, or the orphan list.
    pub fn verify(&self) -> Result<(), DomainError> {
        let mut seen: HashSet<&AdapterId> = HashSet::new();
        let located = self
            .catalog
            .available()
            .iter()
            .chain(self.ports.placed())
            .chain(self.orphaned.iter());

        for adapter in located {
            if !seen.insert(&adapter.id) {
                return Err(DomainError::InvariantViolated(format!(
                    "adapter '{}' is referenced twice",
                    adapter.id
                )));
            }
        }

        if let Some(missing) = self.catalog.seed_ids().iter().find(|id| !seen.contains(id)) {
            return Err(DomainError::InvariantViolated(format!(
                "adapter '{missing}' is missing"
            )));
        }

        if self.active.is_none() && self.hovered.is_some() {
            return Err(DomainError::InvariantViolated(
                "hover target without an active drag".into(),
            ));
        }

        Ok(())
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pure reducer: the state after `event`, leaving `state` untouched.
pub fn reduce(state: &StudioState, event: StudioEvent) -> StudioState {
    let mut next = state.clone();
    next.apply(event);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AdapterId {
        AdapterId::new(s)
    }

    fn drop_onto(state: &mut StudioState, adapter: &str, port: PortId) -> Transition {
        state.apply(StudioEvent::BeginDrag(id(adapter)));
        state.apply(StudioEvent::EndDrag(Some(port)))
    }

    fn with_policy(policy: DropPolicy) -> StudioState {
        StudioState::new(AdapterCatalog::builtin(), policy)
    }

    #[test]
    fn begin_drag_sets_active_and_selected() {
        let mut state = StudioState::builtin();
        let t = state.apply(StudioEvent::BeginDrag(id("adapter-2")));

        assert_eq!(t, Transition::Picked { adapter: id("adapter-2") });
        assert_eq!(state.active().unwrap().id, id("adapter-2"));
        assert_eq!(state.selected().unwrap().id, id("adapter-2"));
        // Still in the catalog until dropped.
        assert!(state.catalog().contains(&id("adapter-2")));
    }

    #[test]
    fn drop_on_port_moves_adapter_out_of_catalog() {
        let mut state = StudioState::builtin();
        let t = drop_onto(&mut state, "adapter-3", PortId::Port4);

        assert_eq!(
            t,
            Transition::Committed {
                port: PortId::Port4,
                adapter: id("adapter-3"),
                displaced: None,
            }
        );
        assert_eq!(state.catalog().len(), 4);
        assert!(!state.catalog().contains(&id("adapter-3")));
        assert_eq!(
            state.ports().occupant(PortId::Port4).unwrap().id,
            id("adapter-3")
        );
        assert_eq!(state.ports().occupied_count(), 1);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_outside_changes_nothing_but_keeps_selection() {
        let mut state = StudioState::builtin();
        let before = state.clone();

        state.apply(StudioEvent::BeginDrag(id("adapter-1")));
        state.apply(StudioEvent::UpdateHover(Some(PortId::Port1)));
        let t = state.apply(StudioEvent::EndDrag(None));

        assert_eq!(t, Transition::Cancelled { adapter: id("adapter-1") });
        assert_eq!(state.catalog(), before.catalog());
        assert_eq!(state.ports(), before.ports());
        assert!(state.active().is_none());
        assert!(state.hovered().is_none());
        assert_eq!(state.selected().unwrap().id, id("adapter-1"));
    }

    #[test]
    fn hover_is_observational() {
        let mut state = StudioState::builtin();
        state.apply(StudioEvent::BeginDrag(id("adapter-5")));
        let before = state.arrangement();

        let t = state.apply(StudioEvent::UpdateHover(Some(PortId::Port3)));

        assert_eq!(t, Transition::Hovered { port: Some(PortId::Port3) });
        assert_eq!(state.hovered(), Some(PortId::Port3));
        assert_eq!(state.arrangement(), before);
    }

    #[test]
    fn hover_without_drag_is_ignored() {
        let mut state = StudioState::builtin();
        let t = state.apply(StudioEvent::UpdateHover(Some(PortId::Port1)));
        assert_eq!(
            t,
            Transition::Ignored {
                reason: IgnoreReason::NoActiveDrag
            }
        );
        assert!(state.hovered().is_none());
    }

    #[test]
    fn placed_adapter_cannot_be_picked_again() {
        let mut state = StudioState::builtin();
        drop_onto(&mut state, "adapter-1", PortId::Port1);

        let t = state.apply(StudioEvent::BeginDrag(id("adapter-1")));
        assert_eq!(
            t,
            Transition::Ignored {
                reason: IgnoreReason::NotAvailable(id("adapter-1"))
            }
        );
        assert!(!state.is_dragging());
    }

    #[test]
    fn second_pick_during_drag_is_ignored() {
        let mut state = StudioState::builtin();
        state.apply(StudioEvent::BeginDrag(id("adapter-1")));
        let t = state.apply(StudioEvent::BeginDrag(id("adapter-2")));

        assert!(matches!(
            t,
            Transition::Ignored {
                reason: IgnoreReason::DragInProgress(_)
            }
        ));
        assert_eq!(state.selected().unwrap().id, id("adapter-1"));
    }

    #[test]
    fn overwrite_policy_orphans_previous_occupant() {
        let mut state = with_policy(DropPolicy::Overwrite);
        drop_onto(&mut state, "adapter-1", PortId::Port2);
        let t = drop_onto(&mut state, "adapter-2", PortId::Port2);

        assert_eq!(
            t,
            Transition::Committed {
                port: PortId::Port2,
                adapter: id("adapter-2"),
                displaced: Some(Displacement::Orphaned(id("adapter-1"))),
            }
        );
        assert_eq!(
            state.ports().occupant(PortId::Port2).unwrap().id,
            id("adapter-2")
        );
        assert!(!state.catalog().contains(&id("adapter-1")));
        assert!(state.ports().locate(&id("adapter-1")).is_none());
        assert_eq!(state.orphaned().len(), 1);
    }

    #[test]
    fn displace_policy_returns_previous_occupant() {
        let mut state = with_policy(DropPolicy::Displace);
        drop_onto(&mut state, "adapter-1", PortId::Port2);
        let t = drop_onto(&mut state, "adapter-2", PortId::Port2);

        assert!(matches!(
            t,
            Transition::Committed {
                displaced: Some(Displacement::Returned(_)),
                ..
            }
        ));
        assert!(state.catalog().contains(&id("adapter-1")));
        assert_eq!(state.catalog().available()[0].id, id("adapter-1"));
        assert!(state.orphaned().is_empty());
    }

    #[test]
    fn reject_policy_refuses_occupied_port() {
        let mut state = with_policy(DropPolicy::Reject);
        drop_onto(&mut state, "adapter-1", PortId::Port2);
        let t = drop_onto(&mut state, "adapter-2", PortId::Port2);

        assert_eq!(
            t,
            Transition::Rejected {
                port: PortId::Port2,
                adapter: id("adapter-2"),
                occupant: id("adapter-1"),
            }
        );
        assert!(state.catalog().contains(&id("adapter-2")));
        assert!(!state.is_dragging());
    }

    #[test]
    fn snapshot_after_last_drop_wins() {
        let mut state = with_policy(DropPolicy::Overwrite);
        drop_onto(&mut state, "adapter-1", PortId::Port2);
        drop_onto(&mut state, "adapter-2", PortId::Port2);

        let arrangement = state.arrangement();
        let rows: Vec<_> = arrangement
            .entries()
            .iter()
            .map(|e| (e.port.as_str(), e.adapter.as_deref()))
            .collect();

        assert_eq!(
            rows,
            [
                ("port-1", None),
                ("port-2", Some("Payment Gateway")),
                ("port-3", None),
                ("port-4", None),
                ("port-5", None),
                ("port-6", None),
            ]
        );
    }

    #[test]
    fn reset_restores_everything() {
        let mut state = with_policy(DropPolicy::Overwrite);
        drop_onto(&mut state, "adapter-1", PortId::Port2);
        drop_onto(&mut state, "adapter-2", PortId::Port2);
        drop_onto(&mut state, "adapter-5", PortId::Port6);

        let t = state.apply(StudioEvent::Reset);

        assert_eq!(t, Transition::Reset { returned: 3 });
        assert_eq!(state, with_policy(DropPolicy::Overwrite));
    }

    #[test]
    fn invariant_holds_across_random_walk() {
        // Deterministic pseudo-random walk over every event kind.
        for policy in [DropPolicy::Displace, DropPolicy::Reject] {
            let mut state = with_policy(policy);
            let mut seed: u32 = 0x2545_f491;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;

                let port = PortId::ALL.get((seed % 7) as usize).copied();
                let event = match seed % 4 {
                    0 => StudioEvent::BeginDrag(id(&format!("adapter-{}", 1 + (seed >> 3) % 6))),
                    1 => StudioEvent::UpdateHover(port),
                    2 => StudioEvent::EndDrag(port),
                    _ => StudioEvent::BeginDrag(id(&format!("adapter-{}", 1 + (seed >> 5) % 5))),
                };
                state.apply(event);

                assert!(state.verify().is_ok(), "{policy}: {:?}", state.verify());
                assert!(state.orphaned().is_empty());
                assert_eq!(state.ports().len(), 6);
            }
        }
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = StudioState::builtin();
        let next = reduce(&state, StudioEvent::BeginDrag(id("adapter-4")));

        assert!(state.active().is_none());
        assert_eq!(next.active().unwrap().id, id("adapter-4"));
    }
}
