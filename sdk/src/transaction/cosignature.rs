//! Cosigning announced aggregate bonded transactions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::Transaction;
use crate::account::PublicAccount;
use crate::codec::hex;
use crate::config::HASH_LENGTH;
use crate::crypto::keys::{KeyPair, PublicKey, Signature};
use crate::error::{Nem2Error, Result};

/// A cosignature already attached to an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTransactionCosignature {
    /// Hex signature over the aggregate hash.
    pub signature: String,
    pub signer: PublicAccount,
}

impl AggregateTransactionCosignature {
    pub fn new(signature: impl Into<String>, signer: PublicAccount) -> Self {
        Self {
            signature: signature.into(),
            signer,
        }
    }
}

/// An announced aggregate waiting for this account's cosignature.
#[derive(Debug, Clone)]
pub struct CosignatureTransaction {
    transaction: Transaction,
    hash: [u8; HASH_LENGTH],
}

impl CosignatureTransaction {
    /// Wraps an aggregate fetched from a node.
    ///
    /// # Errors
    ///
    /// `IllegalArgument` when `transaction` is not an aggregate or carries
    /// no 32-byte hash in its info.
    pub fn new(transaction: Transaction) -> Result<Self> {
        if !transaction.transaction_type().is_aggregate() {
            return Err(Nem2Error::illegal("Transaction to cosign must be an aggregate"));
        }
        let hash = transaction
            .info
            .as_ref()
            .and_then(|info| info.hash.as_deref())
            .and_then(|hash| <[u8; HASH_LENGTH]>::try_from(hash).ok())
            .ok_or_else(|| {
                Nem2Error::illegal(
                    "Transaction to cosign should be announced before being able to cosign it",
                )
            })?;
        Ok(Self { transaction, hash })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Hash of the aggregate being cosigned.
    pub fn hash(&self) -> &[u8; HASH_LENGTH] {
        &self.hash
    }

    /// Signs the aggregate hash.
    pub fn sign_with(&self, key_pair: &KeyPair) -> CosignatureSignedTransaction {
        let signature = key_pair.sign(&self.hash);
        debug!(parent_hash = %hex::encode_upper(self.hash), "cosigned aggregate");
        CosignatureSignedTransaction {
            parent_hash: self.hash,
            signature,
            signer: *key_pair.public_key(),
        }
    }
}

/// A cosignature ready to announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosignatureSignedTransaction {
    pub parent_hash: [u8; HASH_LENGTH],
    pub signature: Signature,
    pub signer: PublicKey,
}
