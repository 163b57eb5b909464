use std::hash::Hash;

/// Key types that identify a resource in REST paths and in the local list
pub trait ResourceKey: Clone + PartialEq + Eq + Hash + std::fmt::Debug {
    /// Key as it appears in `/resource/:key`
    fn as_key(&self) -> String;

    /// Parse a key taken from a path or a form
    fn from_key(s: &str) -> Result<Self, String>;
}

impl ResourceKey for String {
    fn as_key(&self) -> String {
        self.clone()
    }

    fn from_key(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Key must not be empty".into());
        }
        Ok(s.to_string())
    }
}

impl ResourceKey for uuid::Uuid {
    fn as_key(&self) -> String {
        ToString::to_string(self)
    }

    fn from_key(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keys_reject_blank() {
        assert!(String::from_key("   ").is_err());
        assert_eq!(String::from_key("Acme Co").unwrap(), "Acme Co");
    }

    #[test]
    fn uuid_keys_parse_and_print() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(uuid::Uuid::from_key(&id.as_key()).unwrap(), id);
        assert!(uuid::Uuid::from_key("not-a-uuid").is_err());
    }
}
