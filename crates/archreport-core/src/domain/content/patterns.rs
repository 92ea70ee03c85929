//! The pattern timeline.

use serde::Serialize;
use serde_json::json;

use crate::domain::{entities::bookmark::BookmarkDraft, error::DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    pub label: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub id: &'static str,
    pub title: &'static str,
    /// Period the pattern was prevalent, e.g. `c. 2015-2025`.
    pub era: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub code_samples: &'static [CodeSample],
}

impl Pattern {
    pub fn bookmark_draft(&self) -> BookmarkDraft {
        BookmarkDraft::new(self.id).with_data(json!({ "title": self.title }))
    }
}

/// Patterns in timeline order.
pub fn all() -> &'static [Pattern] {
    PATTERNS
}

pub fn find(id: &str) -> Result<&'static Pattern, DomainError> {
    PATTERNS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| DomainError::UnknownPattern(id.to_string()))
}

pub static PATTERNS: &[Pattern] = &[
    Pattern {
        id: "service-objects",
        title: "Service Objects",
        era: "c. 2015-2025",
        description: "Encapsulating business logic into single-purpose classes.",
        content: "The Service Object pattern moves complex business logic out of controllers and \
                  models into dedicated, reusable classes. This improves testability and keeps \
                  your core MVC components clean and focused.",
        code_samples: &[CodeSample {
            label: "Service Object",
            code: "class CreateSubscription
  def self.call(user, plan)
    # ... logic to create subscription
  end
end",
        }],
    },
    Pattern {
        id: "hexagonal-architecture",
        title: "Hexagonal Architecture",
        era: "c. 2020-2025",
        description: "Isolating the core domain from external dependencies.",
        content: "Also known as Ports and Adapters, this pattern decouples your application's \
                  core logic from external concerns like databases, APIs, or UI frameworks. This \
                  makes the core logic framework-agnostic and highly testable.",
        code_samples: &[CodeSample {
            label: "Folder Structure",
            code: "app/
├── core/
│   └── billing/
│       ├── domain/
│       └── use_cases/
└── infrastructure/
    ├── repositories/
    └── gateways/",
        }],
    },
    Pattern {
        id: "linting-standards",
        title: "Linting Standards",
        era: "c. 2022-2025",
        description: "Enforcing consistent code style across teams.",
        content: "Strict, automated code style enforcement eliminates debates and ensures \
                  consistency. StandardRB provides a zero-configuration solution, while RuboCop \
                  Omakase offers the official Rails-blessed style.",
        code_samples: &[
            CodeSample {
                label: "StandardRB",
                code: "# Gemfile\ngem \"standard\", require: false",
            },
            CodeSample {
                label: "RuboCop Omakase",
                code: "# Gemfile\ngem \"rubocop-rails-omakase\", require: false",
            },
        ],
    },
    Pattern {
        id: "testing-frameworks",
        title: "Testing Frameworks",
        era: "c. 2010-2025",
        description: "The ongoing debate between Minitest and RSpec.",
        content: "Minitest is the fast, simple default in Rails. RSpec is the expressive, \
                  BDD-style industry standard, favored for its readability and powerful mocking.",
        code_samples: &[
            CodeSample {
                label: "Minitest",
                code: "class UserTest < ActiveSupport::TestCase
  test \"the truth\" do
    assert true
  end
end",
            },
            CodeSample {
                label: "RSpec",
                code: "describe User do
  it \"is valid\" do
    expect(user).to be_valid
  end
end",
            },
        ],
    },
];
