//! Binary layout of transactions.
//!
//! Every integer is little-endian and fixed width. A transaction is written
//! in one of two envelopes around the same body:
//!
//! ```text
//! signing bytes  = version u8 | network u8 | type u16 | fee u64 | deadline u64 | body
//! aggregate inner = size u32 | signer [32] | version u8 | network u8 | type u16 | body
//! ```
//!
//! The aggregate inner form has no fee or deadline; the enclosing aggregate
//! carries them.

use super::builder::{NamespaceRegistration, Transaction, TransactionBody};
use super::types::Message;
use crate::config::{MOSAIC_DURATION_PROPERTY_KEY, MOSAIC_PROPERTY_COUNT};
use crate::error::{Nem2Error, Result};
use crate::mosaic::Mosaic;

impl Transaction {
    /// Type-specific payload.
    ///
    /// Fails when an inner transaction of an aggregate lacks a signer, or
    /// when a variable-length field overflows its length prefix.
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(128);
        match &self.body {
            TransactionBody::Transfer {
                recipient,
                mosaics,
                message,
            } => {
                buf.extend_from_slice(recipient.bytes());
                match message {
                    Some(message) => {
                        let size = len_u16(message.payload().len() + 1, "message")?;
                        buf.extend_from_slice(&size.to_le_bytes());
                        buf.push(len_u8(mosaics.len(), "mosaic count")?);
                        write_message(&mut buf, message);
                    }
                    None => {
                        buf.extend_from_slice(&0u16.to_le_bytes());
                        buf.push(len_u8(mosaics.len(), "mosaic count")?);
                    }
                }
                for mosaic in mosaics {
                    write_mosaic(&mut buf, mosaic);
                }
            }
            TransactionBody::Aggregate {
                inner_transactions, ..
            } => {
                let mut inner = Vec::new();
                for tx in inner_transactions {
                    inner.extend_from_slice(&tx.to_aggregate_bytes()?);
                }
                buf.extend_from_slice(&len_u32(inner.len(), "aggregate body")?.to_le_bytes());
                buf.extend_from_slice(&inner);
            }
            TransactionBody::MosaicDefinition {
                mosaic_name,
                mosaic_id,
                namespace_id,
                properties,
            } => {
                buf.extend_from_slice(&namespace_id.id().to_le_bytes());
                buf.extend_from_slice(&mosaic_id.id().to_le_bytes());
                buf.push(len_u8(mosaic_name.len(), "mosaic name")?);
                buf.push(MOSAIC_PROPERTY_COUNT);
                buf.push(properties.flags());
                buf.push(properties.divisibility);
                buf.extend_from_slice(mosaic_name.as_bytes());
                buf.push(MOSAIC_DURATION_PROPERTY_KEY);
                buf.extend_from_slice(&properties.duration.to_le_bytes());
            }
            TransactionBody::MosaicSupplyChange {
                mosaic_id,
                supply_type,
                delta,
            } => {
                buf.extend_from_slice(&mosaic_id.id().to_le_bytes());
                buf.push(supply_type.value());
                buf.extend_from_slice(&delta.to_le_bytes());
            }
            TransactionBody::ModifyMultisigAccount {
                min_approval_delta,
                min_removal_delta,
                modifications,
            } => {
                buf.extend_from_slice(&min_removal_delta.to_le_bytes());
                buf.extend_from_slice(&min_approval_delta.to_le_bytes());
                buf.push(len_u8(modifications.len(), "modification count")?);
                for modification in modifications {
                    buf.push(modification.modification_type.value());
                    buf.extend_from_slice(modification.cosignatory.public_key().as_bytes());
                }
            }
            TransactionBody::RegisterNamespace {
                namespace_name,
                namespace_id,
                registration,
            } => {
                buf.push(registration.namespace_type().value());
                match registration {
                    NamespaceRegistration::Root { duration } => {
                        buf.extend_from_slice(&duration.to_le_bytes())
                    }
                    NamespaceRegistration::Sub { parent_id } => {
                        buf.extend_from_slice(&parent_id.id().to_le_bytes())
                    }
                }
                buf.extend_from_slice(&namespace_id.id().to_le_bytes());
                buf.push(len_u8(namespace_name.len(), "namespace name")?);
                buf.extend_from_slice(namespace_name.as_bytes());
            }
            TransactionBody::LockFunds {
                mosaic,
                duration,
                hash,
            } => {
                write_mosaic(&mut buf, mosaic);
                buf.extend_from_slice(&duration.to_le_bytes());
                buf.extend_from_slice(hash);
            }
            TransactionBody::SecretLock {
                mosaic,
                duration,
                hash_type,
                secret,
                recipient,
            } => {
                write_mosaic(&mut buf, mosaic);
                buf.extend_from_slice(&duration.to_le_bytes());
                buf.push(hash_type.value());
                buf.extend_from_slice(secret);
                buf.extend_from_slice(recipient.bytes());
            }
            TransactionBody::SecretProof {
                hash_type,
                secret,
                proof,
            } => {
                buf.push(hash_type.value());
                buf.extend_from_slice(secret);
                buf.extend_from_slice(&len_u16(proof.len(), "proof")?.to_le_bytes());
                buf.extend_from_slice(proof);
            }
        }
        Ok(buf)
    }

    /// The exact bytes the signer signs.
    pub fn signing_bytes(&self) -> Result<Vec<u8>> {
        let body = self.body_bytes()?;
        let mut buf = Vec::with_capacity(20 + body.len());
        buf.push(self.version);
        buf.push(self.network_type.value());
        buf.extend_from_slice(&self.transaction_type().value().to_le_bytes());
        buf.extend_from_slice(&self.fee.to_le_bytes());
        buf.extend_from_slice(&self.deadline.timestamp().to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Encoding used when this transaction is embedded in an aggregate.
    ///
    /// # Errors
    ///
    /// `SerializeError` when no signer was assigned, see
    /// [`Transaction::with_signer`].
    pub fn to_aggregate_bytes(&self) -> Result<Vec<u8>> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            Nem2Error::SerializeError(
                "Failed to serialize transaction as aggregate inner transaction because it has no signer."
                    .to_string(),
            )
        })?;
        let body = self.body_bytes()?;

        let mut inner = Vec::with_capacity(36 + body.len());
        inner.extend_from_slice(signer.public_key().as_bytes());
        inner.push(self.version);
        inner.push(self.network_type.value());
        inner.extend_from_slice(&self.transaction_type().value().to_le_bytes());
        inner.extend_from_slice(&body);

        let size = len_u32(inner.len() + 4, "aggregate inner transaction")?;
        let mut buf = Vec::with_capacity(inner.len() + 4);
        buf.extend_from_slice(&size.to_le_bytes());
        buf.extend_from_slice(&inner);
        Ok(buf)
    }
}

fn write_mosaic(buf: &mut Vec<u8>, mosaic: &Mosaic) {
    buf.extend_from_slice(&mosaic.id.id().to_le_bytes());
    buf.extend_from_slice(&mosaic.amount.to_le_bytes());
}

fn write_message(buf: &mut Vec<u8>, message: &Message) {
    buf.push(message.message_type().value());
    buf.extend_from_slice(message.payload());
}

fn len_u8(len: usize, what: &str) -> Result<u8> {
    u8::try_from(len).map_err(|_| Nem2Error::illegal(format!("{} is too long: {}", what, len)))
}

fn len_u16(len: usize, what: &str) -> Result<u16> {
    u16::try_from(len).map_err(|_| Nem2Error::illegal(format!("{} is too long: {}", what, len)))
}

fn len_u32(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Nem2Error::illegal(format!("{} is too long: {}", what, len)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
