use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque key the host assigns to one contact-handling session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(String);

impl InteractionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InteractionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InteractionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
