//! Namespaces: hierarchical names that own mosaics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Nem2Error, Result};
use crate::id;

/// A namespace identifier, optionally remembering its dotted full name.
///
/// Equality and hashing look at the numeric id only.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceId {
    id: u64,
    full_name: Option<String>,
}

impl NamespaceId {
    /// Wraps a raw id.
    pub fn new(id: u64) -> Self {
        Self { id, full_name: None }
    }

    /// Id of the last level of a dotted name such as `foo.bar.baz`.
    pub fn from_full_name(full_name: &str) -> Result<Self> {
        Ok(Self {
            id: id::generate_namespace_id(full_name)?,
            full_name: Some(full_name.to_string()),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

impl PartialEq for NamespaceId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NamespaceId {}

impl Hash for NamespaceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.full_name {
            Some(name) => write!(f, "NamespaceId({:#018x}, {})", self.id, name),
            None => write!(f, "NamespaceId({:#018x})", self.id),
        }
    }
}

impl From<u64> for NamespaceId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Whether a namespace is a root or nested under a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamespaceType {
    Root,
    Sub,
}

impl NamespaceType {
    pub fn value(self) -> u8 {
        match self {
            Self::Root => 0,
            Self::Sub => 1,
        }
    }
}

impl TryFrom<u8> for NamespaceType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Root),
            1 => Ok(Self::Sub),
            other => Err(Nem2Error::illegal(format!(
                "{} is not a valid namespace type",
                other
            ))),
        }
    }
}
