//! Draggable adapters and the catalog they are picked from.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{AdapterId, AdapterRole},
};

/// A draggable integration point in the hexagon demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adapter {
    pub id: AdapterId,
    pub title: String,
    pub description: String,
    pub role: AdapterRole,
    pub details: String,
    pub example_layout: String,
}

/// Static description of a built-in adapter.
#[derive(Debug, Clone, Copy)]
pub struct AdapterDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub role: AdapterRole,
    pub details: &'static str,
    pub example_layout: &'static str,
}

impl AdapterDef {
    pub fn to_adapter(&self) -> Adapter {
        Adapter {
            id: AdapterId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            role: self.role,
            details: self.details.to_string(),
            example_layout: self.example_layout.to_string(),
        }
    }
}

/// The adapters every studio session starts with.
pub static BUILTIN_ADAPTERS: &[AdapterDef] = &[
    AdapterDef {
        id: "adapter-1",
        title: "HTTP Controller",
        description: "Receives web requests and calls a use case.",
        role: AdapterRole::Driving,
        details: "Controllers translate HTTP params into plain input objects and hand them \
                  to an interactor. They never touch ActiveRecord directly.",
        example_layout: "app/\n└── controllers/\n    └── subscriptions_controller.rb",
    },
    AdapterDef {
        id: "adapter-2",
        title: "Payment Gateway",
        description: "Wraps the Stripe/PayPal API behind a port.",
        role: AdapterRole::Driven,
        details: "The core calls a PaymentGateway port; the infrastructure layer implements \
                  it with the vendor SDK, so switching providers never touches business rules.",
        example_layout: "app/\n└── infrastructure/\n    └── gateways/\n        └── stripe_gateway.rb",
    },
    AdapterDef {
        id: "adapter-3",
        title: "Background Job",
        description: "Triggers use cases asynchronously.",
        role: AdapterRole::Driving,
        details: "Jobs are thin entry points: they deserialize arguments and invoke the same \
                  interactor a controller would, so behaviour is identical in both paths.",
        example_layout: "app/\n└── jobs/\n    └── renew_subscription_job.rb",
    },
    AdapterDef {
        id: "adapter-4",
        title: "Database Repository",
        description: "ActiveRecord implementation of a repository port.",
        role: AdapterRole::Driven,
        details: "Repositories map between ActiveRecord models and pure domain entities. \
                  The core depends only on the repository interface.",
        example_layout: "app/\n└── infrastructure/\n    └── repositories/\n        └── subscription_repository.rb",
    },
    AdapterDef {
        id: "adapter-5",
        title: "Email Notifier",
        description: "Sends transactional mail through ActionMailer.",
        role: AdapterRole::Driven,
        details: "The core emits a notification through a port; the mailer adapter decides \
                  how and when the message is delivered.",
        example_layout: "app/\n└── infrastructure/\n    └── mailers/\n        └── subscription_mailer.rb",
    },
];

/// Adapters still available for dragging, kept in seed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterCatalog {
    seed: Vec<AdapterId>,
    available: Vec<Adapter>,
}

impl AdapterCatalog {
    /// Build a catalog from a seed list.
    ///
    /// Rejects an empty list and duplicate ids.
    pub fn new(adapters: Vec<Adapter>) -> Result<Self, DomainError> {
        if adapters.is_empty() {
            return Err(DomainError::InvalidCatalog(
                "catalog must contain at least one adapter".into(),
            ));
        }

        let mut seed: Vec<AdapterId> = Vec::with_capacity(adapters.len());
        for adapter in &adapters {
            if seed.contains(&adapter.id) {
                return Err(DomainError::DuplicateAdapter {
                    id: adapter.id.to_string(),
                });
            }
            seed.push(adapter.id.clone());
        }

        Ok(Self {
            seed,
            available: adapters,
        })
    }

    /// The built-in five-adapter catalog.
    pub fn builtin() -> Self {
        Self {
            seed: BUILTIN_ADAPTERS.iter().map(|d| AdapterId::new(d.id)).collect(),
            available: BUILTIN_ADAPTERS.iter().map(AdapterDef::to_adapter).collect(),
        }
    }

    /// Adapters currently available, in seed order.
    pub fn available(&self) -> &[Adapter] {
        &self.available
    }

    /// Every id the session started with, in seed order.
    pub fn seed_ids(&self) -> &[AdapterId] {
        &self.seed
    }

    pub fn get(&self, id: &AdapterId) -> Option<&Adapter> {
        self.available.iter().find(|a| &a.id == id)
    }

    pub fn contains(&self, id: &AdapterId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an adapter from the available list.
    ///
    /// Idempotent: removing an absent id returns `None` and changes nothing.
    pub fn remove(&mut self, id: &AdapterId) -> Option<Adapter> {
        let index = self.available.iter().position(|a| &a.id == id)?;
        Some(self.available.remove(index))
    }

    /// Put an adapter back at its seed position.
    ///
    /// Adapters that are already available, or were never part of the
    /// seed, are ignored.
    pub fn restore(&mut self, adapter: Adapter) {
        let Some(rank) = self.seed_rank(&adapter.id) else {
            return;
        };
        if self.contains(&adapter.id) {
            return;
        }

        let index = self
            .available
            .iter()
            .position(|a| self.seed_rank(&a.id).is_some_and(|r| r > rank))
            .unwrap_or(self.available.len());
        self.available.insert(index, adapter);
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    fn seed_rank(&self, id: &AdapterId) -> Option<usize> {
        self.seed.iter().position(|s| s == id)
    }
}

impl Default for AdapterCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AdapterId {
        AdapterId::new(s)
    }

    #[test]
    fn builtin_has_five_adapters_in_order() {
        let catalog = AdapterCatalog::builtin();
        let ids: Vec<_> = catalog.available().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            ["adapter-1", "adapter-2", "adapter-3", "adapter-4", "adapter-5"]
        );
        assert_eq!(catalog.get(&id("adapter-2")).unwrap().title, "Payment Gateway");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut catalog = AdapterCatalog::builtin();
        assert!(catalog.remove(&id("adapter-3")).is_some());
        assert!(catalog.remove(&id("adapter-3")).is_none());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn restore_keeps_seed_order() {
        let mut catalog = AdapterCatalog::builtin();
        let two = catalog.remove(&id("adapter-2")).unwrap();
        let four = catalog.remove(&id("adapter-4")).unwrap();

        catalog.restore(four);
        catalog.restore(two.clone());
        catalog.restore(two);

        let ids: Vec<_> = catalog.available().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            ["adapter-1", "adapter-2", "adapter-3", "adapter-4", "adapter-5"]
        );
    }

    #[test]
    fn restore_ignores_foreign_adapter() {
        let mut catalog = AdapterCatalog::builtin();
        let mut stranger = BUILTIN_ADAPTERS[0].to_adapter();
        stranger.id = id("adapter-99");
        catalog.restore(stranger);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn new_rejects_duplicates_and_empty() {
        let a = BUILTIN_ADAPTERS[0].to_adapter();
        assert!(matches!(
            AdapterCatalog::new(vec![a.clone(), a]),
            Err(DomainError::DuplicateAdapter { .. })
        ));
        assert!(matches!(
            AdapterCatalog::new(vec![]),
            Err(DomainError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn adapter_serializes_camel_case() {
        let json = serde_json::to_value(BUILTIN_ADAPTERS[1].to_adapter()).unwrap();
        assert_eq!(json["exampleLayout"].as_str().unwrap().lines().count(), 4);
        assert_eq!(json["role"], "driven");
    }
}
