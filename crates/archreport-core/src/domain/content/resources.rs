//! The resource library: case studies, tooling notes and cheat-sheets.

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::ResourceCategory};

/// Where a resource card leads when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ResourceBody {
    /// Inline text shown in a dialog.
    Content(&'static str),
    /// Route into the report.
    Link(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ResourceCategory,
    pub body: ResourceBody,
}

pub fn all() -> &'static [Resource] {
    RESOURCES
}

pub fn by_category(category: ResourceCategory) -> Vec<&'static Resource> {
    RESOURCES.iter().filter(|r| r.category == category).collect()
}

pub fn find(id: &str) -> Result<&'static Resource, DomainError> {
    RESOURCES
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| DomainError::UnknownResource(id.to_string()))
}

const CASE_STUDIES_LINK: &str = "/report#case-studies";

pub static RESOURCES: &[Resource] = &[
    Resource {
        id: "shopify-case-study",
        title: "Shopify: Modular Monolith",
        description: "How the world's largest Rails app scales.",
        category: ResourceCategory::CaseStudies,
        body: ResourceBody::Link(CASE_STUDIES_LINK),
    },
    Resource {
        id: "github-case-study",
        title: "GitHub: Continuous Modernization",
        description: "Upgrading Rails weekly at massive scale.",
        category: ResourceCategory::CaseStudies,
        body: ResourceBody::Link(CASE_STUDIES_LINK),
    },
    Resource {
        id: "37signals-case-study",
        title: "37signals: Deployment Pioneers",
        description: "From AWS to bare-metal with Kamal.",
        category: ResourceCategory::CaseStudies,
        body: ResourceBody::Link(CASE_STUDIES_LINK),
    },
    Resource {
        id: "standardrb-tool",
        title: "StandardRB",
        description: "Zero-configuration Ruby style guide.",
        category: ResourceCategory::Tooling,
        body: ResourceBody::Content("Gemfile\n\n    gem \"standard\", require: false"),
    },
    Resource {
        id: "rspec-tool",
        title: "RSpec",
        description: "BDD testing framework for Ruby.",
        category: ResourceCategory::Tooling,
        body: ResourceBody::Content("Gemfile\n\n    gem \"rspec-rails\""),
    },
    Resource {
        id: "service-object-cheatsheet",
        title: "Service Object Cheatsheet",
        description: "Quick reference for the Callable pattern.",
        category: ResourceCategory::Cheatsheets,
        body: ResourceBody::Content(
            "Key Principles\n\nSingle responsibility, explicit inputs/outputs, and framework \
             agnostic.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_partition_the_library() {
        let counts: Vec<_> = ResourceCategory::ALL
            .iter()
            .map(|c| by_category(*c).len())
            .collect();
        assert_eq!(counts, [3, 2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), all().len());
    }

    #[test]
    fn case_studies_link_into_the_report() {
        assert!(
            by_category(ResourceCategory::CaseStudies)
                .iter()
                .all(|r| r.body == ResourceBody::Link("/report#case-studies"))
        );
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("rspec-tool").unwrap().category, ResourceCategory::Tooling);
        assert!(matches!(find("pry"), Err(DomainError::UnknownResource(_))));
    }
}
