//! Network identifiers.
//!
//! The network byte is the first byte of every raw address and the high
//! byte of every transaction's `version` field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Nem2Error, Result};

/// The four networks the protocol knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// Public main network.
    MainNet,
    /// Public test network.
    TestNet,
    /// Private network.
    Mijin,
    /// Private test network.
    MijinTest,
}

impl NetworkType {
    /// Every network, in lookup order.
    pub const ALL: [NetworkType; 4] = [
        NetworkType::MainNet,
        NetworkType::TestNet,
        NetworkType::Mijin,
        NetworkType::MijinTest,
    ];

    /// The version byte written into addresses and transactions.
    pub fn value(self) -> u8 {
        match self {
            Self::MainNet => 104,
            Self::TestNet => 152,
            Self::Mijin => 96,
            Self::MijinTest => 144,
        }
    }

    /// First character of every plain address on this network.
    pub fn address_initial(self) -> char {
        match self {
            Self::MainNet => 'N',
            Self::TestNet => 'T',
            Self::Mijin => 'M',
            Self::MijinTest => 'S',
        }
    }

    /// Canonical upper-snake name, e.g. `MIJIN_TEST`.
    pub fn name(self) -> &'static str {
        match self {
            Self::MainNet => "MAIN_NET",
            Self::TestNet => "TEST_NET",
            Self::Mijin => "MIJIN",
            Self::MijinTest => "MIJIN_TEST",
        }
    }

    /// Looks up a network by version byte.
    pub fn from_value(value: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.value() == value)
            .ok_or_else(|| Nem2Error::illegal(format!("unknown network {}", value)))
    }

    /// Looks up a network by address initial.
    pub fn from_address_initial(initial: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.address_initial() == initial)
            .ok_or_else(|| {
                Nem2Error::illegal(format!(
                    "'{}' is not the initial character of any network",
                    initial
                ))
            })
    }
}

impl TryFrom<u8> for NetworkType {
    type Error = Nem2Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_value(value)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = Nem2Error;

    /// Accepts `MIJIN_TEST`, `mijin-test`, `mijinTest` and similar spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "mainnet" => Ok(Self::MainNet),
            "testnet" => Ok(Self::TestNet),
            "mijin" => Ok(Self::Mijin),
            "mijintest" => Ok(Self::MijinTest),
            _ => Err(Nem2Error::illegal(format!("unknown network '{}'", s))),
        }
    }
}
