// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

// Backend ids are opaque strings; the front end only passes them through.
macro_rules! opaque_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(SupplierId);
opaque_id!(QuoteId);
opaque_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::{OrderId, QuoteId, SupplierId};

    #[test]
    fn ids_serialize_as_bare_strings() -> anyhow::Result<()> {
        let encoded = serde_json::to_string(&QuoteId::new("Q1"))?;
        assert_eq!(encoded, "\"Q1\"");

        let decoded: SupplierId = serde_json::from_str("\"S-42\"")?;
        assert_eq!(decoded.as_str(), "S-42");
        Ok(())
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(OrderId::new("   ").is_blank());
        assert!(!OrderId::from("ORD-1").is_blank());
    }
}
