use crate::errors::internal::ItemError;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Candidate item that has not been persisted yet
///
/// The HTTP layer enforces the same limits through `CreateItemRequest`
/// validators; `validate` covers writers that bypass it (CLI, tests).
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        let name_len = self.name.chars().count();
        if name_len == 0 {
            return Err(ItemError::validation("name", "must not be empty"));
        }
        if name_len > NAME_MAX_CHARS {
            return Err(ItemError::validation(
                "name",
                format!("must be at most {} characters", NAME_MAX_CHARS),
            ));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                return Err(ItemError::validation(
                    "description",
                    format!("must be at most {} characters", DESCRIPTION_MAX_CHARS),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_passes() {
        let item = NewItem::new("widget", Some("a small widget".to_string()));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_description_is_optional() {
        let item = NewItem::new("widget", None);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = NewItem::new("", None).validate().unwrap_err();
        match err {
            ItemError::Validation { field, reason } => {
                assert_eq!(field, "name");
                assert!(reason.contains("empty"));
            }
        }
    }

    #[test]
    fn test_name_length_boundary() {
        let at_limit = NewItem::new("a".repeat(NAME_MAX_CHARS), None);
        assert!(at_limit.validate().is_ok());

        let over_limit = NewItem::new("a".repeat(NAME_MAX_CHARS + 1), None);
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let item = NewItem::new("é".repeat(NAME_MAX_CHARS), None);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_overlong_description_is_rejected() {
        let item = NewItem::new("widget", Some("d".repeat(DESCRIPTION_MAX_CHARS + 1)));
        let err = item.validate().unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
