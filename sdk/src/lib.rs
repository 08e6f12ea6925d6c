// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nem2-sdk: Catapult Client Core
//!
//! Everything a client needs to talk to a NEM2 (Catapult) network short of
//! the network itself: build transactions, serialize them byte for byte,
//! sign them, and read them back from the JSON a node returns.
//!
//! ## Architecture
//!
//! Modules are layered leaves first:
//!
//! - **codec**: base32, hex and little-endian `u64` helpers.
//! - **crypto**: SHA3-256/512, RIPEMD-160, Ed25519 running over SHA3-512.
//! - **id**: namespace and mosaic id derivation from names.
//! - **account**: networks, addresses, public and signing accounts, multisig info.
//! - **mosaic** / **namespace**: identifier value types.
//! - **transaction**: the transaction model, binary layout and signing.
//! - **json** / **mapping**: node JSON back into typed transactions.
//! - **config**: protocol constants.
//!
//! ## Example
//!
//! ```rust
//! use nem2_sdk::account::{Account, Address, NetworkType};
//! use nem2_sdk::mosaic::Xem;
//! use nem2_sdk::transaction::{Message, TransactionBuilder};
//!
//! let account = Account::generate(NetworkType::MijinTest);
//! let recipient = Address::from_raw("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM").unwrap();
//! let transfer = TransactionBuilder::new(NetworkType::MijinTest)
//!     .transfer(recipient, vec![Xem::of_micro(1_000_000)], Some(Message::plain("hello")));
//!
//! let signed = account.sign(&transfer).unwrap();
//! assert_eq!(signed.hash().len(), 32);
//! ```
//!
//! ## Conventions
//!
//! 1. Every fallible operation returns [`Result`]; malformed input never panics.
//! 2. Values are immutable. Signing returns a new [`transaction::SignedTransaction`].
//! 3. Integers on the wire are little-endian, with no padding.

pub mod account;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod id;
pub mod json;
pub mod mapping;
pub mod mosaic;
pub mod namespace;
pub mod transaction;

pub use error::{Nem2Error, Result};
