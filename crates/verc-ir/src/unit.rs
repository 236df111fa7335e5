use crate::decl::Decl;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully qualified declaration name, e.g. `std::math::max`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName(Vec<String>);

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parses a `::`-separated path.
    pub fn from_path(path: &str) -> Self {
        Self::new(path.split("::").map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final segment, without any qualifying path.
    pub fn unqualified(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("::"))
    }
}

/// One compilation unit: a named module together with its top-level declarations,
/// in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    pub name: QualifiedName,
    pub declarations: Vec<Decl>,
}

impl SourceUnit {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            declarations: Vec::new(),
        }
    }
}
