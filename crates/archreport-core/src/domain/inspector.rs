//! Read-only projection of the studio selection.

use serde::Serialize;

use crate::domain::{
    entities::adapter::Adapter, studio::StudioState, value_objects::AdapterRole,
};

pub const EMPTY_TITLE: &str = "Inspector";
pub const EMPTY_PROMPT: &str = "Drag an adapter to a port to see details.";
pub const EMPTY_BODY: &str = "Select an adapter to inspect.";

/// What the inspector panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum InspectorView {
    Empty {
        title: String,
        prompt: String,
        body: String,
    },
    #[serde(rename_all = "camelCase")]
    Details {
        title: String,
        description: String,
        role: AdapterRole,
        details: String,
        example_layout: String,
        /// Offer the "Save Arrangement" action.
        can_save: bool,
    },
}

impl InspectorView {
    pub fn of(selected: Option<&Adapter>) -> Self {
        match selected {
            None => Self::Empty {
                title: EMPTY_TITLE.to_string(),
                prompt: EMPTY_PROMPT.to_string(),
                body: EMPTY_BODY.to_string(),
            },
            Some(adapter) => Self::Details {
                title: adapter.title.clone(),
                description: adapter.description.clone(),
                role: adapter.role,
                details: adapter.details.clone(),
                example_layout: adapter.example_layout.clone(),
                can_save: true,
            },
        }
    }

    pub fn from_state(state: &StudioState) -> Self {
        Self::of(state.selected())
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Empty { title, .. } | Self::Details { title, .. } => title,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}
