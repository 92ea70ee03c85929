//! Domain value objects: AdapterId, AdapterRole, PortId, DropPolicy,
//! ErrorHandling, ResourceCategory.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, no behaviour
//! beyond their string forms. Every enum round-trips through `as_str` /
//! `FromStr` so the CLI and the TOML catalog loader share one spelling.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AdapterId ────────────────────────────────────────────────────────────────

/// Identifier of a draggable adapter (`adapter-1`, `adapter-2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterId(String);

impl AdapterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AdapterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AdapterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── AdapterRole ──────────────────────────────────────────────────────────────

/// Whether an adapter drives the core domain or is driven by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterRole {
    /// Initiates action into the core (HTTP controllers, jobs).
    Driving,
    /// Invoked by the core (repositories, gateways, mailers).
    Driven,
}

impl AdapterRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Driven => "driven",
        }
    }
}

impl fmt::Display for AdapterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdapterRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" | "primary" => Ok(Self::Driving),
            "driven" | "secondary" => Ok(Self::Driven),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

// ── PortId ───────────────────────────────────────────────────────────────────

/// One of the six fixed slots around the hexagon.
///
/// Declaration order is the arrangement order (`port-1` .. `port-6`),
/// clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PortId {
    #[serde(rename = "port-1")]
    Port1,
    #[serde(rename = "port-2")]
    Port2,
    #[serde(rename = "port-3")]
    Port3,
    #[serde(rename = "port-4")]
    Port4,
    #[serde(rename = "port-5")]
    Port5,
    #[serde(rename = "port-6")]
    Port6,
}

impl PortId {
    /// All ports in arrangement order.
    pub const ALL: [PortId; 6] = [
        Self::Port1,
        Self::Port2,
        Self::Port3,
        Self::Port4,
        Self::Port5,
        Self::Port6,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Port1 => "port-1",
            Self::Port2 => "port-2",
            Self::Port3 => "port-3",
            Self::Port4 => "port-4",
            Self::Port5 => "port-5",
            Self::Port6 => "port-6",
        }
    }

    /// Zero-based position in [`PortId::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Self::Port1 => 0,
            Self::Port2 => 1,
            Self::Port3 => 2,
            Self::Port4 => 3,
            Self::Port5 => 4,
            Self::Port6 => 5,
        }
    }

    /// One-based number shown on an empty port ("Port 4").
    pub const fn number(&self) -> usize {
        self.index() + 1
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortId {
    type Err = DomainError;

    /// Accepts `port-3`, `port3` or a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("port-")
            .or_else(|| lowered.strip_prefix("port"))
            .unwrap_or(&lowered);

        match digits.parse::<usize>() {
            Ok(n @ 1..=6) => Ok(Self::ALL[n - 1]),
            _ => Err(DomainError::UnknownPort(s.to_string())),
        }
    }
}

// ── DropPolicy ───────────────────────────────────────────────────────────────

/// What happens when an adapter is dropped onto an occupied port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPolicy {
    /// Last drop wins; the previous occupant goes back to the catalog.
    #[default]
    Displace,
    /// The drop is refused; both adapters stay where they were.
    Reject,
    /// Last drop wins; the previous occupant leaves the session entirely.
    Overwrite,
}

impl DropPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Displace => "displace",
            Self::Reject => "reject",
            Self::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for DropPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "displace" | "return" => Ok(Self::Displace),
            "reject" | "strict" => Ok(Self::Reject),
            "overwrite" | "replace" => Ok(Self::Overwrite),
            other => Err(DomainError::InvalidDropPolicy(other.to_string())),
        }
    }
}

// ── ErrorHandling ────────────────────────────────────────────────────────────

/// Error-handling style of a generated service object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorHandling {
    /// Return `OpenStruct.new(success?: ...)` result objects.
    #[default]
    ResultMonad,
    /// `raise` on failure.
    Exceptions,
}

impl ErrorHandling {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResultMonad => "result-monad",
            Self::Exceptions => "exceptions",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ResultMonad => "Result Monad",
            Self::Exceptions => "Raise Exceptions",
        }
    }
}

impl fmt::Display for ErrorHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorHandling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "result-monad" | "result" | "monad" => Ok(Self::ResultMonad),
            "exceptions" | "raise" => Ok(Self::Exceptions),
            other => Err(DomainError::InvalidErrorHandling(other.to_string())),
        }
    }
}

// ── ResourceCategory ─────────────────────────────────────────────────────────

/// Tabs of the resource library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceCategory {
    CaseStudies,
    Tooling,
    Cheatsheets,
}

impl ResourceCategory {
    /// Tab order.
    pub const ALL: [ResourceCategory; 3] = [Self::CaseStudies, Self::Tooling, Self::Cheatsheets];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CaseStudies => "case-studies",
            Self::Tooling => "tooling",
            Self::Cheatsheets => "cheatsheets",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CaseStudies => "Case Studies",
            Self::Tooling => "Tooling",
            Self::Cheatsheets => "Cheat-sheets",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "case-studies" | "casestudies" | "cases" => Ok(Self::CaseStudies),
            "tooling" | "tools" => Ok(Self::Tooling),
            "cheatsheets" | "cheat-sheets" => Ok(Self::Cheatsheets),
            other => Err(DomainError::InvalidCategory(other.to_string())),
        }
    }
}
