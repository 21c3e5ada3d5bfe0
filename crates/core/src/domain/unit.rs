// Unit Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{DomainError, Result};

/// Name used when no unit is given
pub const DEFAULT_UNIT_NAME: &str = "Mile";

/// A named unit of measure.
///
/// `Display` writes exactly the name, so `to_string()` is the string
/// conversion and `write!(out, "{unit}")` is the stream form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    name: String,
}

impl Unit {
    /// Create a unit with the given name
    ///
    /// # Errors
    /// `DomainError::InvalidUnitName` if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidUnitName(name));
        }
        Ok(Self { name })
    }

    pub fn mile() -> Self {
        Self {
            name: DEFAULT_UNIT_NAME.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::mile()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
