//! Region and locality value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code of a first-level administrative division (a Brazilian UF, e.g. `SP`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Creates region code, returning `None` for empty input.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    /// Returns code as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Name of a locality (municipality) within a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalityName(String);

impl LocalityName {
    /// Creates locality name, returning `None` for empty input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    /// Returns name as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocalityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_rejected() {
        assert!(RegionCode::new("").is_none());
        assert!(LocalityName::new("").is_none());
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        assert_eq!(RegionCode::new(" ").unwrap().as_str(), " ");
        assert_eq!(LocalityName::new(" Campinas").unwrap().as_str(), " Campinas");
    }

    #[test]
    fn test_any_non_empty_region_is_accepted() {
        let code = RegionCode::new("XX").unwrap();
        assert_eq!(code.as_str(), "XX");
        assert_eq!(code.to_string(), "XX");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = LocalityName::new("São Paulo").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"São Paulo\"");
    }
}
