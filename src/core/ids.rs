//! Identifier generation

use uuid::Uuid;

/// Source of fresh record identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a new, statistically unique identifier
    fn generate(&self) -> String;
}

/// Random (v4) UUID generator
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_format() {
        let id = UuidGenerator.generate();
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_uuids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
