use crate::domain::{
    entities::{AdapterCatalog, BookmarkDraft},
    error::DomainError,
    studio::StudioState,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A Ruby constant name: an uppercase ASCII letter followed by ASCII
    /// letters or digits.
    pub fn validate_class_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidClassName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = name.chars();
        match chars.next() {
            None => return Err(invalid("must not be empty")),
            Some(c) if !c.is_ascii_uppercase() => {
                return Err(invalid("must start with an uppercase letter"));
            }
            Some(_) => {}
        }

        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(invalid(&format!("'{bad}' is not allowed")));
        }
        Ok(())
    }

    pub fn validate_bookmark(draft: &BookmarkDraft) -> Result<(), DomainError> {
        draft.validate()
    }

    pub fn validate_catalog(catalog: &AdapterCatalog) -> Result<(), DomainError> {
        if catalog.seed_ids().is_empty() {
            return Err(DomainError::InvalidCatalog(
                "catalog must contain at least one adapter".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_studio(state: &StudioState) -> Result<(), DomainError> {
        state.verify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ruby_constants() {
        for name in ["CreateSubscription", "A", "Charge2Card"] {
            assert!(DomainValidator::validate_class_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_non_constants() {
        for name in ["", "createSubscription", "Create_Subscription", "Create Sub", "9Lives"] {
            assert!(
                matches!(
                    DomainValidator::validate_class_name(name),
                    Err(DomainError::InvalidClassName { .. })
                ),
                "{name}"
            );
        }
    }
}
