//! Metadata a node attaches to a transaction it has seen.

use serde::{Deserialize, Serialize};

/// Where and how a transaction was recorded.
///
/// Standalone transactions carry `hash` and `merkle_component_hash`. Inner
/// transactions of an aggregate carry `aggregate_hash` and `aggregate_id`
/// instead. Listener notifications only have height, hash and merkle hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub height: u64,
    pub index: Option<u32>,
    pub id: Option<String>,
    pub hash: Option<Vec<u8>>,
    pub merkle_component_hash: Option<Vec<u8>>,
    pub aggregate_hash: Option<Vec<u8>>,
    pub aggregate_id: Option<String>,
}

impl TransactionInfo {
    /// Info of a standalone transaction.
    pub fn new(
        height: u64,
        index: u32,
        id: impl Into<String>,
        hash: Vec<u8>,
        merkle_component_hash: Vec<u8>,
    ) -> Self {
        Self {
            height,
            index: Some(index),
            id: Some(id.into()),
            hash: Some(hash),
            merkle_component_hash: Some(merkle_component_hash),
            aggregate_hash: None,
            aggregate_id: None,
        }
    }

    /// Info of a transaction embedded in an aggregate.
    pub fn aggregate(
        height: u64,
        index: u32,
        id: impl Into<String>,
        aggregate_hash: Vec<u8>,
        aggregate_id: impl Into<String>,
    ) -> Self {
        Self {
            height,
            index: Some(index),
            id: Some(id.into()),
            hash: None,
            merkle_component_hash: None,
            aggregate_hash: Some(aggregate_hash),
            aggregate_id: Some(aggregate_id.into()),
        }
    }

    /// Info pushed by the listener, without index or id.
    pub fn announced(height: u64, hash: Vec<u8>, merkle_component_hash: Vec<u8>) -> Self {
        Self {
            height,
            index: None,
            id: None,
            hash: Some(hash),
            merkle_component_hash: Some(merkle_component_hash),
            aggregate_hash: None,
            aggregate_id: None,
        }
    }
}
