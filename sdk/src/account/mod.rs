//! # Accounts
//!
//! Networks, addresses and the public/private views of an account.
//!
//! ```text
//! network.rs         NetworkType and its address initial
//! address.rs         25-byte address, base32 plain and pretty forms
//! public_account.rs  public key bound to a network
//! account.rs         key pair bound to a network; signs transactions
//! multisig.rs        multisig configuration and graph reported by nodes
//! ```

#[allow(clippy::module_inception)]
pub mod account;
pub mod address;
pub mod multisig;
pub mod network;
pub mod public_account;

pub use account::Account;
pub use address::Address;
pub use multisig::{MultisigAccountGraphInfo, MultisigAccountInfo};
pub use network::NetworkType;
pub use public_account::PublicAccount;
