//! # Transaction Module
//!
//! Construction, binary serialization and signing of catapult transactions.
//! Every state change an account requests from the network is a
//! [`Transaction`]: a common header plus one [`TransactionBody`] variant.
//!
//! ## Architecture
//!
//! ```text
//! types.rs       wire enumerations, messages, multisig modifications
//! deadline.rs    deadline measured from the nemesis block
//! info.rs        metadata attached once a node has seen the transaction
//! builder.rs     Transaction, TransactionBody and the TransactionBuilder factory
//! serialize.rs   per-variant body layout, signing bytes, aggregate-inner form
//! signing.rs     SignedTransaction, hashing, aggregate cosigning at sign time
//! cosignature.rs cosigning an aggregate that is already announced
//! status.rs      node-reported status and status errors
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: [`TransactionBuilder`] assembles an unsigned transaction.
//!    The deadline defaults to one hour from now.
//! 2. **Sign**: [`sign_transaction`] produces an immutable
//!    [`SignedTransaction`] without touching the original value.
//! 3. **Announce**: the payload goes to a node (outside this crate).
//! 4. **Observe**: transactions fetched back from a node carry a
//!    [`TransactionInfo`] and answer `is_unconfirmed` / `is_confirmed`.
//!
//! ## Wire Layout
//!
//! ```text
//! payload      = u32 size | signature(64) | signer(32) | signing bytes
//! signing bytes = version u8 | network u8 | type u16 | fee u64 | deadline u64 | body
//! hash         = SHA3-256( signature[0..32] | signer | signing bytes )
//! ```
//!
//! All integers are little-endian. Inside an aggregate each inner
//! transaction drops its signature, fee and deadline.

pub mod builder;
pub mod cosignature;
pub mod deadline;
pub mod info;
pub mod serialize;
pub mod signing;
pub mod status;
pub mod types;

pub use builder::{NamespaceRegistration, Transaction, TransactionBody, TransactionBuilder};
pub use cosignature::{
    AggregateTransactionCosignature, CosignatureSignedTransaction, CosignatureTransaction,
};
pub use deadline::Deadline;
pub use info::TransactionInfo;
pub use signing::{
    payload_hash, sign_transaction, sign_with_cosignatories, transaction_hash, SignedTransaction,
};
pub use status::{TransactionStatus, TransactionStatusError};
pub use types::{
    AggregateKind, HashType, Message, MessageType, MultisigCosignatoryModification,
    MultisigCosignatoryModificationType, TransactionType,
};
