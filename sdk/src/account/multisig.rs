//! Multisig account configuration as reported by a node.

use std::collections::BTreeMap;

use super::network::NetworkType;
use super::public_account::PublicAccount;
use crate::error::{Nem2Error, Result};
use crate::json::{JsonObject, JsonValue};

/// The cosignatory setup of one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultisigAccountInfo {
    pub account: PublicAccount,
    /// Cosignatures needed to approve a transaction.
    pub min_approval: i32,
    /// Cosignatures needed to remove a cosignatory.
    pub min_removal: i32,
    pub cosignatories: Vec<PublicAccount>,
    /// Multisig accounts this account cosigns for.
    pub multisig_accounts: Vec<PublicAccount>,
}

impl MultisigAccountInfo {
    /// Both thresholds set.
    pub fn is_multisig(&self) -> bool {
        self.min_approval != 0 && self.min_removal != 0
    }

    pub fn has_cosigner(&self, account: &PublicAccount) -> bool {
        self.cosignatories.contains(account)
    }

    pub fn is_cosigner_of(&self, account: &PublicAccount) -> bool {
        self.multisig_accounts.contains(account)
    }

    /// Decodes `{"multisig": {...}}` as returned for a single account.
    pub fn from_json(object: &JsonObject, network_type: NetworkType) -> Result<Self> {
        let multisig = object.get_object("multisig")?;
        Ok(Self {
            account: public_account(multisig.get_string("account")?, network_type)?,
            min_approval: threshold(multisig, "minApproval")?,
            min_removal: threshold(multisig, "minRemoval")?,
            cosignatories: public_accounts(multisig, "cosignatories", network_type)?,
            multisig_accounts: public_accounts(multisig, "multisigAccounts", network_type)?,
        })
    }
}

/// Multisig relations around an account, grouped by distance.
///
/// Level 0 is the queried account. Positive levels are multisig accounts it
/// cosigns for; negative levels are its cosignatories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultisigAccountGraphInfo {
    pub multisig_accounts: BTreeMap<i32, Vec<MultisigAccountInfo>>,
}

impl MultisigAccountGraphInfo {
    /// The levels present, in ascending order.
    pub fn levels_number(&self) -> Vec<i32> {
        self.multisig_accounts.keys().copied().collect()
    }

    /// Decodes `[{"level": n, "multisigEntries": [...]}, ...]`.
    pub fn from_json(value: &JsonValue, network_type: NetworkType) -> Result<Self> {
        let mut multisig_accounts = BTreeMap::new();
        for entry in value.expect_array("multisig account graph")? {
            let entry = entry.expect_object("multisig account graph entry")?;
            let level = i32::try_from(entry.get_int("level")?)
                .map_err(|_| Nem2Error::parse("Failed to parse level"))?;
            let infos = entry
                .get_array_of_object("multisigEntries")?
                .into_iter()
                .map(|info| MultisigAccountInfo::from_json(info, network_type))
                .collect::<Result<Vec<_>>>()?;
            multisig_accounts.insert(level, infos);
        }
        Ok(Self { multisig_accounts })
    }
}

fn threshold(object: &JsonObject, key: &str) -> Result<i32> {
    i32::try_from(object.get_int(key)?).map_err(|_| Nem2Error::parse(format!("Failed to parse {}", key)))
}

fn public_account(hex: &str, network_type: NetworkType) -> Result<PublicAccount> {
    PublicAccount::from_public_key_hex(hex, network_type)
}

fn public_accounts(object: &JsonObject, key: &str, network_type: NetworkType) -> Result<Vec<PublicAccount>> {
    object
        .get_array(key)?
        .iter()
        .map(|value| {
            let hex = value
                .as_str()
                .ok_or_else(|| Nem2Error::parse(format!("Failed to parse {} element as string.", key)))?;
            public_account(hex, network_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY1: &str = "b4f12e7c9f6946091e2cb8b6d3a12b50d17ccbbf646386ea27ce2946a7423dcf";
    const KEY2: &str = "846b4439154579a5903b1459c9cf69cb8153f6d0110a7a0ed61de29ae4810bf2";
    const KEY3: &str = "cf893ffcc47c33e7f68ab1db56365c156b0736824a0c1e273f9e00b8df8f01eb";
    const KEY4: &str = "68b3fbb18729c1fde225c57f8ce080fa828f0067e451a3fd81fa628842b0b763";

    fn account(key: &str) -> PublicAccount {
        PublicAccount::from_public_key_hex(key, NetworkType::MijinTest).unwrap()
    }

    fn info(
        min_approval: i32,
        min_removal: i32,
        cosignatories: &[&str],
        multisig_accounts: &[&str],
    ) -> MultisigAccountInfo {
        MultisigAccountInfo {
            account: account(KEY1),
            min_approval,
            min_removal,
            cosignatories: cosignatories.iter().map(|k| account(k)).collect(),
            multisig_accounts: multisig_accounts.iter().map(|k| account(k)).collect(),
        }
    }

    #[test]
    fn cosigner_lookups() {
        let cosigned = info(2, 1, &[KEY2, KEY3], &[]);
        assert!(cosigned.has_cosigner(&account(KEY2)));
        assert!(!cosigned.has_cosigner(&account(KEY4)));

        let cosigner = info(2, 1, &[], &[KEY2, KEY3]);
        assert!(cosigner.is_cosigner_of(&account(KEY2)));
        assert!(!cosigner.is_cosigner_of(&account(KEY4)));
    }

    #[test]
    fn multisig_requires_both_thresholds() {
        assert!(!info(0, 1, &[], &[]).is_multisig());
        assert!(!info(1, 0, &[], &[]).is_multisig());
        assert!(info(1, 1, &[], &[]).is_multisig());
    }

    #[test]
    fn decodes_account_info() {
        let json = JsonValue::parse(&format!(
            r#"{{"multisig": {{"account": "{KEY1}", "minApproval": 2, "minRemoval": 1,
                "cosignatories": ["{KEY2}", "{KEY3}"], "multisigAccounts": []}}}}"#
        ))
        .unwrap();
        let decoded =
            MultisigAccountInfo::from_json(json.as_object().unwrap(), NetworkType::MijinTest).unwrap();
        assert_eq!(decoded, info(2, 1, &[KEY2, KEY3], &[]));
    }

    #[test]
    fn decodes_graph_levels() {
        let entry = format!(
            r#"{{"multisig": {{"account": "{KEY1}", "minApproval": 1, "minRemoval": 1,
                "cosignatories": [], "multisigAccounts": []}}}}"#
        );
        let json = JsonValue::parse(&format!(
            r#"[{{"level": 2, "multisigEntries": [{entry}]}},
                {{"level": -1, "multisigEntries": [{entry}, {entry}]}}]"#
        ))
        .unwrap();
        let graph = MultisigAccountGraphInfo::from_json(&json, NetworkType::MijinTest).unwrap();

        assert_eq!(graph.levels_number(), vec![-1, 2]);
        assert_eq!(graph.multisig_accounts[&-1].len(), 2);
        assert_eq!(graph.multisig_accounts[&2][0].account, account(KEY1));
    }

    #[test]
    fn rejects_non_string_cosignatory() {
        let json = JsonValue::parse(&format!(
            r#"{{"multisig": {{"account": "{KEY1}", "minApproval": 1, "minRemoval": 1,
                "cosignatories": [1], "multisigAccounts": []}}}}"#
        ))
        .unwrap();
        let err = MultisigAccountInfo::from_json(json.as_object().unwrap(), NetworkType::MijinTest)
            .unwrap_err();
        assert_eq!(err.message(), "Failed to parse cosignatories element as string.");
    }
}
