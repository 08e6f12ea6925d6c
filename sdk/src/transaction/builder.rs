//! Transaction model and construction.
//!
//! A [`Transaction`] is the common header (network, version, deadline, fee
//! and, once known, signature, signer and node metadata) plus a
//! [`TransactionBody`] holding the type-specific fields. The wire type is
//! derived from the body, never stored separately.
//!
//! [`TransactionBuilder`] stamps the header and validates arguments. It does
//! not sign: that happens in [`super::signing`], so construction stays
//! testable without key material.

use serde::{Deserialize, Serialize};

use super::cosignature::AggregateTransactionCosignature;
use super::deadline::Deadline;
use super::info::TransactionInfo;
use super::signing::SignedTransaction;
use super::types::{
    AggregateKind, HashType, Message, MultisigCosignatoryModification, TransactionType,
};
use crate::account::{Address, NetworkType, PublicAccount};
use crate::config::HASH_LENGTH;
use crate::error::{Nem2Error, Result};
use crate::id;
use crate::mosaic::{Mosaic, MosaicId, MosaicProperties, MosaicSupplyType};
use crate::namespace::{NamespaceId, NamespaceType};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A transaction of any type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub network_type: NetworkType,
    /// Schema version of the transaction type.
    pub version: u8,
    pub deadline: Deadline,
    /// Fee in micro XEM.
    pub fee: u64,
    /// Hex signature, present on transactions decoded from the network.
    pub signature: Option<String>,
    /// Signer. Mandatory for inner transactions of an aggregate.
    pub signer: Option<PublicAccount>,
    pub info: Option<TransactionInfo>,
    pub body: TransactionBody,
}

/// Type-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionBody {
    Transfer {
        recipient: Address,
        mosaics: Vec<Mosaic>,
        message: Option<Message>,
    },
    Aggregate {
        kind: AggregateKind,
        inner_transactions: Vec<Transaction>,
        cosignatures: Vec<AggregateTransactionCosignature>,
    },
    MosaicDefinition {
        mosaic_name: String,
        mosaic_id: MosaicId,
        namespace_id: NamespaceId,
        properties: MosaicProperties,
    },
    MosaicSupplyChange {
        mosaic_id: MosaicId,
        supply_type: MosaicSupplyType,
        delta: u64,
    },
    ModifyMultisigAccount {
        /// Relative change of the approval threshold.
        min_approval_delta: i8,
        /// Relative change of the removal threshold.
        min_removal_delta: i8,
        modifications: Vec<MultisigCosignatoryModification>,
    },
    RegisterNamespace {
        namespace_name: String,
        namespace_id: NamespaceId,
        registration: NamespaceRegistration,
    },
    LockFunds {
        mosaic: Mosaic,
        duration: u64,
        /// Hash of the aggregate bonded transaction being locked for.
        hash: [u8; HASH_LENGTH],
    },
    SecretLock {
        mosaic: Mosaic,
        duration: u64,
        hash_type: HashType,
        secret: Vec<u8>,
        recipient: Address,
    },
    SecretProof {
        hash_type: HashType,
        secret: Vec<u8>,
        proof: Vec<u8>,
    },
}

/// Root namespaces are rented for a duration; sub namespaces hang off a
/// parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamespaceRegistration {
    Root { duration: u64 },
    Sub { parent_id: NamespaceId },
}

impl NamespaceRegistration {
    pub fn namespace_type(&self) -> NamespaceType {
        match self {
            Self::Root { .. } => NamespaceType::Root,
            Self::Sub { .. } => NamespaceType::Sub,
        }
    }
}

impl TransactionBody {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Transfer { .. } => TransactionType::Transfer,
            Self::Aggregate { kind, .. } => kind.transaction_type(),
            Self::MosaicDefinition { .. } => TransactionType::MosaicDefinition,
            Self::MosaicSupplyChange { .. } => TransactionType::MosaicSupplyChange,
            Self::ModifyMultisigAccount { .. } => TransactionType::ModifyMultisigAccount,
            Self::RegisterNamespace { .. } => TransactionType::RegisterNamespace,
            Self::LockFunds { .. } => TransactionType::Lock,
            Self::SecretLock { .. } => TransactionType::SecretLock,
            Self::SecretProof { .. } => TransactionType::SecretProof,
        }
    }
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        self.body.transaction_type()
    }

    /// Never seen by a node.
    pub fn is_unannounced(&self) -> bool {
        self.info.is_none()
    }

    /// Waiting in the unconfirmed pool.
    pub fn is_unconfirmed(&self) -> bool {
        self.info.as_ref().map_or(false, |info| {
            info.height == 0 && info.hash == info.merkle_component_hash
        })
    }

    /// Included in a block.
    pub fn is_confirmed(&self) -> bool {
        self.info.as_ref().map_or(false, |info| info.height > 0)
    }

    /// Aggregate bonded waiting for cosignatures.
    pub fn has_missing_signatures(&self) -> bool {
        self.info.as_ref().map_or(false, |info| {
            info.height == 0 && info.hash != info.merkle_component_hash
        })
    }

    /// A copy of this transaction attributed to `signer`, ready to be
    /// embedded in an aggregate.
    pub fn with_signer(&self, signer: PublicAccount) -> Transaction {
        Transaction {
            signer: Some(signer),
            ..self.clone()
        }
    }

    /// Inner transactions of an aggregate; empty for every other type.
    pub fn inner_transactions(&self) -> &[Transaction] {
        match &self.body {
            TransactionBody::Aggregate {
                inner_transactions, ..
            } => inner_transactions,
            _ => &[],
        }
    }

    /// Cosignatures collected by an aggregate; empty for every other type.
    pub fn cosignatures(&self) -> &[AggregateTransactionCosignature] {
        match &self.body {
            TransactionBody::Aggregate { cosignatures, .. } => cosignatures,
            _ => &[],
        }
    }

    /// True when `account` signed this transaction or cosigned it.
    pub fn signed_by_account(&self, account: &PublicAccount) -> bool {
        self.signer.as_ref() == Some(account)
            || self.cosignatures().iter().any(|c| &c.signer == account)
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Builds unsigned transactions for one network.
///
/// ```rust
/// use nem2_sdk::account::{Address, NetworkType};
/// use nem2_sdk::mosaic::Xem;
/// use nem2_sdk::transaction::{Message, TransactionBuilder, TransactionType};
///
/// let recipient = Address::from_raw("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM").unwrap();
/// let tx = TransactionBuilder::new(NetworkType::MijinTest)
///     .fee(0)
///     .transfer(recipient, vec![Xem::of_micro(100)], Some(Message::plain("hi")));
///
/// assert_eq!(tx.transaction_type(), TransactionType::Transfer);
/// assert_eq!(tx.version, 3);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    network_type: NetworkType,
    deadline: Option<Deadline>,
    fee: u64,
}

impl TransactionBuilder {
    pub fn new(network_type: NetworkType) -> Self {
        Self {
            network_type,
            deadline: None,
            fee: 0,
        }
    }

    /// Defaults to one hour after the transaction is built.
    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Defaults to zero.
    pub fn fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    fn build(&self, body: TransactionBody) -> Transaction {
        Transaction {
            network_type: self.network_type,
            version: body.transaction_type().version(),
            deadline: self.deadline.unwrap_or_default(),
            fee: self.fee,
            signature: None,
            signer: None,
            info: None,
            body,
        }
    }

    /// Sends `mosaics` and an optional message to `recipient`.
    pub fn transfer(
        &self,
        recipient: Address,
        mosaics: Vec<Mosaic>,
        message: Option<Message>,
    ) -> Transaction {
        self.build(TransactionBody::Transfer {
            recipient,
            mosaics,
            message,
        })
    }

    /// Aggregate signed by all parties before announcement.
    ///
    /// Every inner transaction must have a signer, see
    /// [`Transaction::with_signer`].
    pub fn aggregate_complete(&self, inner_transactions: Vec<Transaction>) -> Result<Transaction> {
        self.aggregate(AggregateKind::Complete, inner_transactions)
    }

    /// Aggregate announced first and cosigned afterwards. Requires a funds
    /// lock on its hash.
    pub fn aggregate_bonded(&self, inner_transactions: Vec<Transaction>) -> Result<Transaction> {
        self.aggregate(AggregateKind::Bonded, inner_transactions)
    }

    fn aggregate(
        &self,
        kind: AggregateKind,
        inner_transactions: Vec<Transaction>,
    ) -> Result<Transaction> {
        if inner_transactions.iter().any(|tx| tx.signer.is_none()) {
            return Err(Nem2Error::illegal("Inner transaction must have a signer."));
        }
        Ok(self.build(TransactionBody::Aggregate {
            kind,
            inner_transactions,
            cosignatures: Vec::new(),
        }))
    }

    /// Defines mosaic `mosaic_name` under `namespace_full_name`.
    pub fn mosaic_definition(
        &self,
        mosaic_name: &str,
        namespace_full_name: &str,
        properties: MosaicProperties,
    ) -> Result<Transaction> {
        let mosaic_id = MosaicId::from_parts(namespace_full_name, mosaic_name)?;
        let namespace_id = NamespaceId::from_full_name(namespace_full_name)?;
        Ok(self.build(TransactionBody::MosaicDefinition {
            mosaic_name: mosaic_name.to_string(),
            mosaic_id,
            namespace_id,
            properties,
        }))
    }

    pub fn mosaic_supply_change(
        &self,
        mosaic_id: MosaicId,
        supply_type: MosaicSupplyType,
        delta: u64,
    ) -> Transaction {
        self.build(TransactionBody::MosaicSupplyChange {
            mosaic_id,
            supply_type,
            delta,
        })
    }

    /// Converts the signer into (or edits) a multisig account.
    pub fn modify_multisig_account(
        &self,
        min_approval_delta: i8,
        min_removal_delta: i8,
        modifications: Vec<MultisigCosignatoryModification>,
    ) -> Transaction {
        self.build(TransactionBody::ModifyMultisigAccount {
            min_approval_delta,
            min_removal_delta,
            modifications,
        })
    }

    /// Rents root namespace `namespace_name` for `duration` blocks.
    pub fn register_root_namespace(&self, namespace_name: &str, duration: u64) -> Result<Transaction> {
        let namespace_id = NamespaceId::from_full_name(namespace_name)?;
        Ok(self.build(TransactionBody::RegisterNamespace {
            namespace_name: namespace_name.to_string(),
            namespace_id,
            registration: NamespaceRegistration::Root { duration },
        }))
    }

    /// Registers `namespace_name` one level below `parent_id`.
    pub fn register_sub_namespace(
        &self,
        namespace_name: &str,
        parent_id: NamespaceId,
    ) -> Result<Transaction> {
        let namespace_id =
            NamespaceId::new(id::generate_sub_namespace_id(namespace_name, parent_id.id())?);
        Ok(self.build(TransactionBody::RegisterNamespace {
            namespace_name: namespace_name.to_string(),
            namespace_id,
            registration: NamespaceRegistration::Sub { parent_id },
        }))
    }

    /// Locks `mosaic` for `duration` blocks as a deposit for an aggregate
    /// bonded transaction.
    pub fn lock_funds(
        &self,
        mosaic: Mosaic,
        duration: u64,
        signed_transaction: &SignedTransaction,
    ) -> Result<Transaction> {
        if signed_transaction.transaction_type() != TransactionType::AggregateBonded {
            return Err(Nem2Error::illegal(
                "Signed transaction must be Aggregate Bonded Transaction",
            ));
        }
        Ok(self.build(TransactionBody::LockFunds {
            mosaic,
            duration,
            hash: *signed_transaction.hash(),
        }))
    }

    /// Locks `mosaic` for `recipient` until the proof of `secret` is shown.
    pub fn secret_lock(
        &self,
        mosaic: Mosaic,
        duration: u64,
        hash_type: HashType,
        secret: Vec<u8>,
        recipient: Address,
    ) -> Transaction {
        self.build(TransactionBody::SecretLock {
            mosaic,
            duration,
            hash_type,
            secret,
            recipient,
        })
    }

    /// Reveals `proof`, the preimage of `secret`.
    pub fn secret_proof(&self, hash_type: HashType, secret: Vec<u8>, proof: Vec<u8>) -> Transaction {
        self.build(TransactionBody::SecretProof {
            hash_type,
            secret,
            proof,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
