use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::BURN_ADDRESS;

/// Opaque principal identifier supplied by the host environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        AccountId(id.into())
    }

    /// The reserved "no valid destination" identity
    pub fn burn() -> Self {
        AccountId(BURN_ADDRESS.to_string())
    }

    /// Whether this is the burn sentinel
    pub fn is_burn(&self) -> bool {
        self.0 == BURN_ADDRESS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        AccountId(s)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        AccountId(s.to_string())
    }
}
