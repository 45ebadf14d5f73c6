//! Operation identifier parsing.
//!
//! An operation id such as `Widgets.list` names a dispatch target: an
//! optional group (`Widgets`) and a method (`list`). Ids without a dot have
//! no group.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A parsed operation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId {
    name: String,
    parts: Vec<String>,
}

impl OperationId {
    /// Split `name` on `.`. Any string is accepted, including `""`.
    pub fn parse(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parts: name.split('.').map(str::to_string).collect(),
        }
    }

    /// The identifier as declared.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// All dot-separated parts. Parts after the second take no part in
    /// group/method resolution.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn has_group(&self) -> bool {
        self.parts.len() > 1
    }

    /// First part when grouped, otherwise empty.
    pub fn group_name(&self) -> &str {
        if self.has_group() {
            &self.parts[0]
        } else {
            ""
        }
    }

    /// Second part when grouped, otherwise the sole part.
    pub fn method_name(&self) -> &str {
        if self.has_group() {
            &self.parts[1]
        } else {
            &self.parts[0]
        }
    }

    /// Dispatch coordinates for this operation.
    pub fn descriptor(&self) -> OperationDescriptor {
        OperationDescriptor {
            has_group: self.has_group(),
            group_name: self.group_name().to_string(),
            method_name: self.method_name().to_string(),
        }
    }
}

impl FromStr for OperationId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Serializable dispatch coordinates of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub has_group: bool,
    pub group_name: String,
    pub method_name: String,
}
