//! Transaction status reports.

use serde::Serialize;

use super::deadline::Deadline;
use crate::codec::hex;
use crate::config::HASH_LENGTH;
use crate::error::Result;
use crate::json::JsonObject;

/// Where a transaction currently sits on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionStatus {
    /// `"confirmed"`, `"unconfirmed"` or `"failed"`.
    pub group: Option<String>,
    /// `"Success"` or a `Failure_*` code.
    pub status: String,
    pub hash: Option<Vec<u8>>,
    pub deadline: Option<Deadline>,
    pub height: Option<u64>,
}

impl TransactionStatus {
    /// Decodes a status object. Only `status` is required.
    ///
    /// Deadlines arrive as `[low, high]` milliseconds since nemesis.
    pub fn from_json(object: &JsonObject) -> Result<Self> {
        let hash = object
            .get("hash")
            .map(|_| object.get_string("hash").and_then(hex::decode))
            .transpose()?;
        let deadline = object
            .get("deadline")
            .map(|_| object.get_u64("deadline").map(Deadline::from_timestamp))
            .transpose()?;
        let height = object
            .get("height")
            .map(|_| object.get_u64("height"))
            .transpose()?;
        let group = object
            .get("group")
            .map(|_| object.get_string("group").map(str::to_owned))
            .transpose()?;

        Ok(Self {
            group,
            status: object.get_string("status")?.to_owned(),
            hash,
            deadline,
            height,
        })
    }

    pub fn is_success(&self) -> bool {
        self.status == "Success"
    }
}

/// A rejection pushed by a node's status channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionStatusError {
    pub hash: [u8; HASH_LENGTH],
    pub status: String,
    pub deadline: Deadline,
}

impl TransactionStatusError {
    pub fn from_json(object: &JsonObject) -> Result<Self> {
        Ok(Self {
            hash: hex::decode_array(object.get_string("hash")?)?,
            status: object.get_string("status")?.to_owned(),
            deadline: Deadline::from_timestamp(object.get_u64("deadline")?),
        })
    }
}
