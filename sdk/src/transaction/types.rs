//! Wire-level vocabulary shared by every transaction: type discriminants,
//! hash algorithms, messages and multisig modifications.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::PublicAccount;
use crate::error::{Nem2Error, Result};

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Discriminant written as a little-endian `u16` in every signing envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    AggregateComplete,
    AggregateBonded,
    MosaicDefinition,
    MosaicSupplyChange,
    ModifyMultisigAccount,
    RegisterNamespace,
    Transfer,
    Lock,
    SecretLock,
    SecretProof,
}

impl TransactionType {
    pub const ALL: [TransactionType; 10] = [
        Self::AggregateComplete,
        Self::AggregateBonded,
        Self::MosaicDefinition,
        Self::MosaicSupplyChange,
        Self::ModifyMultisigAccount,
        Self::RegisterNamespace,
        Self::Transfer,
        Self::Lock,
        Self::SecretLock,
        Self::SecretProof,
    ];

    /// The `u16` written on the wire.
    pub fn value(self) -> u16 {
        match self {
            Self::AggregateComplete => 0x4141,
            Self::AggregateBonded => 0x4241,
            Self::MosaicDefinition => 0x414d,
            Self::MosaicSupplyChange => 0x424d,
            Self::ModifyMultisigAccount => 0x4155,
            Self::RegisterNamespace => 0x414e,
            Self::Transfer => 0x4154,
            Self::Lock => 0x414c,
            Self::SecretLock => 0x424c,
            Self::SecretProof => 0x434c,
        }
    }

    /// Schema version the builders stamp on new transactions of this type.
    pub fn version(self) -> u8 {
        match self {
            Self::AggregateComplete
            | Self::AggregateBonded
            | Self::MosaicDefinition
            | Self::MosaicSupplyChange
            | Self::RegisterNamespace => 2,
            Self::Transfer
            | Self::ModifyMultisigAccount
            | Self::Lock
            | Self::SecretLock
            | Self::SecretProof => 3,
        }
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::AggregateComplete | Self::AggregateBonded)
    }

    pub fn from_value(value: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.value() == value)
            .ok_or_else(|| Nem2Error::illegal(format!("{:#06x} is not a valid transaction type", value)))
    }
}

impl TryFrom<u16> for TransactionType {
    type Error = Nem2Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::from_value(value)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AggregateComplete => "AggregateComplete",
            Self::AggregateBonded => "AggregateBonded",
            Self::MosaicDefinition => "MosaicDefinition",
            Self::MosaicSupplyChange => "MosaicSupplyChange",
            Self::ModifyMultisigAccount => "ModifyMultisigAccount",
            Self::RegisterNamespace => "RegisterNamespace",
            Self::Transfer => "Transfer",
            Self::Lock => "Lock",
            Self::SecretLock => "SecretLock",
            Self::SecretProof => "SecretProof",
        };
        f.write_str(name)
    }
}

/// Whether an aggregate is fully signed at announcement or waits for
/// cosignatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregateKind {
    Complete,
    Bonded,
}

impl AggregateKind {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Self::Complete => TransactionType::AggregateComplete,
            Self::Bonded => TransactionType::AggregateBonded,
        }
    }
}

// ---------------------------------------------------------------------------
// HashType
// ---------------------------------------------------------------------------

/// Hash algorithm of a secret lock/proof pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashType {
    Sha3_512,
}

impl HashType {
    pub fn value(self) -> u8 {
        match self {
            Self::Sha3_512 => 0,
        }
    }
}

impl TryFrom<u8> for HashType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Sha3_512),
            other => Err(Nem2Error::illegal(format!("{} is not a valid hash type", other))),
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    Plain,
    Secure,
}

impl MessageType {
    pub fn value(self) -> u8 {
        match self {
            Self::Plain => 0,
            Self::Secure => 1,
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Plain),
            1 => Ok(Self::Secure),
            other => Err(Nem2Error::illegal(format!("{} is not a valid message type", other))),
        }
    }
}

/// Message attached to a transfer.
///
/// On the wire a message is its type byte followed by the payload, so even
/// an empty plain message occupies one byte. A transfer without a message
/// occupies none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// UTF-8 text, usually. Payloads decoded from the network are kept as
    /// raw bytes.
    Plain(Vec<u8>),
    /// Payload already encrypted for the recipient.
    Secure(Vec<u8>),
}

impl Message {
    pub fn plain(text: &str) -> Self {
        Self::Plain(text.as_bytes().to_vec())
    }

    pub fn empty() -> Self {
        Self::Plain(Vec::new())
    }

    /// Wraps an encrypted payload.
    pub fn secure(encoded_payload: Vec<u8>) -> Self {
        Self::Secure(encoded_payload)
    }

    /// Rebuilds a message from its wire type and payload.
    pub fn from_parts(message_type: MessageType, payload: Vec<u8>) -> Self {
        match message_type {
            MessageType::Plain => Self::Plain(payload),
            MessageType::Secure => Self::Secure(payload),
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Plain(_) => MessageType::Plain,
            Self::Secure(_) => MessageType::Secure,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Plain(payload) | Self::Secure(payload) => payload,
        }
    }

    /// Text of a plain message, when the payload is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Plain(payload) => std::str::from_utf8(payload).ok(),
            Self::Secure(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Multisig modifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultisigCosignatoryModificationType {
    Add,
    Remove,
}

impl MultisigCosignatoryModificationType {
    pub fn value(self) -> u8 {
        match self {
            Self::Add => 0,
            Self::Remove => 1,
        }
    }
}

impl TryFrom<u8> for MultisigCosignatoryModificationType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Add),
            1 => Ok(Self::Remove),
            other => Err(Nem2Error::illegal(format!(
                "{} is not a valid cosignatory modification type",
                other
            ))),
        }
    }
}

/// Adds or removes one cosignatory of a multisig account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigCosignatoryModification {
    pub modification_type: MultisigCosignatoryModificationType,
    pub cosignatory: PublicAccount,
}

impl MultisigCosignatoryModification {
    pub fn new(modification_type: MultisigCosignatoryModificationType, cosignatory: PublicAccount) -> Self {
        Self {
            modification_type,
            cosignatory,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
