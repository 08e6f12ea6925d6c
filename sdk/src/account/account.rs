//! An account that can sign: a key pair bound to a network.

use std::fmt;

use super::address::Address;
use super::network::NetworkType;
use super::public_account::PublicAccount;
use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::transaction::{
    sign_transaction, sign_with_cosignatories, CosignatureSignedTransaction,
    CosignatureTransaction, SignedTransaction, Transaction,
};

/// A key pair plus the public account it derives.
///
/// # Example
///
/// ```
/// use nem2_sdk::account::{Account, NetworkType};
///
/// let account = Account::from_private_key_hex(
///     "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d",
///     NetworkType::MijinTest,
/// ).unwrap();
/// assert_eq!(account.address().plain(), "SDRDGFTDLLCB67D4HPGIMIHPNSRYRJRT7DOBGWZY");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    key_pair: KeyPair,
    public_account: PublicAccount,
}

impl Account {
    pub fn from_key_pair(key_pair: KeyPair, network_type: NetworkType) -> Self {
        let public_account = PublicAccount::new(*key_pair.public_key(), network_type);
        Self {
            key_pair,
            public_account,
        }
    }

    /// Parses a hex private key. Either case is accepted.
    pub fn from_private_key_hex(private_key: &str, network_type: NetworkType) -> Result<Self> {
        Ok(Self::from_key_pair(KeyPair::from_hex(private_key)?, network_type))
    }

    /// A fresh account around a random seed.
    pub fn generate(network_type: NetworkType) -> Self {
        Self::from_key_pair(KeyPair::generate(), network_type)
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn public_account(&self) -> &PublicAccount {
        &self.public_account
    }

    pub fn network_type(&self) -> NetworkType {
        self.public_account.network_type()
    }

    pub fn address(&self) -> Address {
        self.public_account.address()
    }

    /// Upper-case hex.
    pub fn public_key_hex(&self) -> String {
        self.key_pair.public_key().to_hex()
    }

    /// Upper-case hex.
    pub fn private_key_hex(&self) -> String {
        self.key_pair.private_key().to_hex()
    }

    pub fn sign(&self, transaction: &Transaction) -> Result<SignedTransaction> {
        sign_transaction(transaction, &self.key_pair)
    }

    pub fn sign_cosignature(&self, transaction: &CosignatureTransaction) -> CosignatureSignedTransaction {
        transaction.sign_with(&self.key_pair)
    }

    /// Signs an aggregate and appends a cosignature from each of `cosignatories`.
    pub fn sign_with_cosignatories(
        &self,
        aggregate: &Transaction,
        cosignatories: &[Account],
    ) -> Result<SignedTransaction> {
        sign_with_cosignatories(
            aggregate,
            &self.key_pair,
            cosignatories.iter().map(|account| &account.key_pair),
        )
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({:?})", self.public_account)
    }
}
