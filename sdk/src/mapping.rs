//! # Transaction Mapping
//!
//! Rebuilds typed [`Transaction`]s from the JSON a node returns. Every
//! transaction arrives as a `meta` / `transaction` pair:
//!
//! ```text
//! {
//!   "meta":        { "hash", "height", "id", "index", "merkleComponentHash" },
//!   "transaction": { "type", "version", "deadline", "fee", "signature", "signer", ... }
//! }
//! ```
//!
//! `version` packs the network byte above the schema version
//! (`network << 8 | version`). 64-bit fields arrive as `[low, high]` pairs.
//!
//! Inner transactions of an aggregate carry neither deadline, fee nor
//! signature; they inherit the aggregate's. When an inner transaction has no
//! `meta` of its own (listener messages) the aggregate's meta is used.

use tracing::{debug, trace};

use crate::account::{Address, NetworkType, PublicAccount};
use crate::codec::hex;
use crate::error::{Nem2Error, Result};
use crate::json::{JsonObject, JsonValue};
use crate::mosaic::{Mosaic, MosaicId, MosaicProperties};
use crate::namespace::{NamespaceId, NamespaceType};
use crate::transaction::{
    AggregateKind, AggregateTransactionCosignature, Deadline, Message, MessageType,
    MultisigCosignatoryModification, NamespaceRegistration, Transaction, TransactionBody,
    TransactionInfo, TransactionType,
};

/// Fields an inner transaction takes from its aggregate.
const INHERITED_FIELDS: [&str; 3] = ["deadline", "fee", "signature"];

/// Parses JSON text holding one `meta` / `transaction` pair.
pub fn transaction_from_str(text: &str) -> Result<Transaction> {
    map_transaction(&JsonValue::parse(text)?)
}

/// Maps one `meta` / `transaction` pair.
///
/// # Errors
///
/// `ParseError` naming the first missing or malformed field.
pub fn map_transaction(value: &JsonValue) -> Result<Transaction> {
    let object = value.expect_object("transaction")?;
    map_transaction_parts(object.get_object("meta")?, object.get_object("transaction")?)
}

/// Maps an array of `meta` / `transaction` pairs, as returned by account
/// transaction listings.
pub fn map_transactions(value: &JsonValue) -> Result<Vec<Transaction>> {
    value
        .expect_array("transactions")?
        .iter()
        .map(map_transaction)
        .collect()
}

/// Maps an already split `meta` and `transaction` object.
pub fn map_transaction_parts(meta: &JsonObject, transaction: &JsonObject) -> Result<Transaction> {
    let transaction_type: TransactionType = transaction.get_enum("type")?;
    trace!(tx_type = %transaction_type, "mapping transaction");

    let header = Header::from_json(meta, transaction)?;
    let body = match transaction_type {
        TransactionType::AggregateComplete => aggregate(AggregateKind::Complete, meta, transaction, &header)?,
        TransactionType::AggregateBonded => aggregate(AggregateKind::Bonded, meta, transaction, &header)?,
        TransactionType::MosaicDefinition => mosaic_definition(transaction)?,
        TransactionType::MosaicSupplyChange => mosaic_supply_change(transaction)?,
        TransactionType::ModifyMultisigAccount => modify_multisig_account(transaction, header.network_type)?,
        TransactionType::RegisterNamespace => register_namespace(transaction)?,
        TransactionType::Transfer => transfer(transaction)?,
        TransactionType::Lock => lock_funds(transaction)?,
        TransactionType::SecretLock => secret_lock(transaction)?,
        TransactionType::SecretProof => secret_proof(transaction)?,
    };

    Ok(Transaction {
        network_type: header.network_type,
        version: header.version,
        deadline: header.deadline,
        fee: header.fee,
        signature: Some(header.signature),
        signer: Some(header.signer),
        info: Some(header.info),
        body,
    })
}

// ---------------------------------------------------------------------------
// Common header
// ---------------------------------------------------------------------------

struct Header {
    network_type: NetworkType,
    version: u8,
    deadline: Deadline,
    fee: u64,
    signature: String,
    signer: PublicAccount,
    info: TransactionInfo,
}

impl Header {
    fn from_json(meta: &JsonObject, transaction: &JsonObject) -> Result<Self> {
        let packed = transaction.get_int("version")?;
        let version = (packed & 0xFF) as u8;
        let network_value = ((packed >> 8) & 0xFF) as u8;
        let network_type = NetworkType::try_from(network_value)
            .map_err(|_| Nem2Error::parse(format!("Unknown network {}.", network_value)))?;

        Ok(Self {
            network_type,
            version,
            deadline: Deadline::from_timestamp(transaction.get_u64("deadline")?),
            fee: transaction.get_u64("fee")?,
            signature: transaction.get_string("signature")?.to_owned(),
            signer: public_account(transaction, "signer", network_type)?,
            info: transaction_info(meta)?,
        })
    }
}

/// Picks the info shape from the keys present: standalone (`hash` + `id`),
/// aggregate-inner (`aggregateHash` + `id`) or listener (height, hash and
/// merkle hash only).
fn transaction_info(meta: &JsonObject) -> Result<TransactionInfo> {
    let height = meta.get_u64("height")?;
    let id = meta.get_string("id").ok();
    let has_hash = meta.get_string("hash").is_ok();
    let has_aggregate_hash = meta.get_string("aggregateHash").is_ok();

    match id {
        Some(id) if has_hash => Ok(TransactionInfo::new(
            height,
            index(meta)?,
            id,
            hex_field(meta, "hash")?,
            hex_field(meta, "merkleComponentHash")?,
        )),
        Some(id) if has_aggregate_hash => Ok(TransactionInfo::aggregate(
            height,
            index(meta)?,
            id,
            hex_field(meta, "aggregateHash")?,
            meta.get_string("aggregateId")?,
        )),
        _ => Ok(TransactionInfo::announced(
            height,
            hex_field(meta, "hash")?,
            hex_field(meta, "merkleComponentHash")?,
        )),
    }
}

fn index(meta: &JsonObject) -> Result<u32> {
    u32::try_from(meta.get_int("index")?).map_err(|_| Nem2Error::parse("Failed to parse index"))
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

fn aggregate(
    kind: AggregateKind,
    meta: &JsonObject,
    transaction: &JsonObject,
    header: &Header,
) -> Result<TransactionBody> {
    let inner_transactions = transaction
        .get_array_of_object("transactions")?
        .into_iter()
        .map(|inner| {
            let mut inner_transaction = inner.get_object("transaction")?.clone();
            for key in INHERITED_FIELDS {
                if let Some(value) = transaction.get(key) {
                    inner_transaction.insert(key, value.clone());
                }
            }
            let inner_meta = inner.get_object("meta").unwrap_or(meta);
            map_transaction_parts(inner_meta, &inner_transaction)
        })
        .collect::<Result<Vec<_>>>()?;

    let cosignatures = optional_objects(transaction, "cosignatures")?
        .into_iter()
        .map(|cosignature| {
            let signature = cosignature.get_string("signature")?;
            hex::decode(signature).map_err(|_| Nem2Error::parse("Failed to parse signature"))?;
            Ok(AggregateTransactionCosignature::new(
                signature,
                public_account(cosignature, "signer", header.network_type)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        inner = inner_transactions.len(),
        cosignatures = cosignatures.len(),
        "mapped aggregate"
    );
    Ok(TransactionBody::Aggregate {
        kind,
        inner_transactions,
        cosignatures,
    })
}

fn mosaic_definition(transaction: &JsonObject) -> Result<TransactionBody> {
    let properties = transaction.get_array_of_object("properties")?;
    let property = |position: usize| {
        properties
            .get(position)
            .copied()
            .ok_or_else(|| Nem2Error::parse("Failed to parse properties"))
    };
    let first_value = |position: usize| -> Result<i64> {
        property(position)?
            .get_array_of_int("value")?
            .first()
            .copied()
            .ok_or_else(|| Nem2Error::parse("Failed to parse value"))
    };

    let flags = u8::try_from(first_value(0)?).map_err(|_| Nem2Error::parse("Failed to parse flags"))?;
    let divisibility =
        u8::try_from(first_value(1)?).map_err(|_| Nem2Error::parse("Failed to parse divisibility"))?;
    let duration = match properties.get(2) {
        Some(duration) => duration.get_u64("value")?,
        None => 0,
    };

    Ok(TransactionBody::MosaicDefinition {
        mosaic_name: transaction.get_string("name")?.to_owned(),
        mosaic_id: MosaicId::new(transaction.get_u64("mosaicId")?),
        namespace_id: NamespaceId::new(transaction.get_u64("parentId")?),
        properties: MosaicProperties::from_flags(flags, divisibility, duration),
    })
}

fn mosaic_supply_change(transaction: &JsonObject) -> Result<TransactionBody> {
    Ok(TransactionBody::MosaicSupplyChange {
        mosaic_id: MosaicId::new(transaction.get_u64("mosaicId")?),
        supply_type: transaction.get_enum("direction")?,
        delta: transaction.get_u64("delta")?,
    })
}

fn modify_multisig_account(transaction: &JsonObject, network_type: NetworkType) -> Result<TransactionBody> {
    let modifications = optional_objects(transaction, "modifications")?
        .into_iter()
        .map(|modification| {
            Ok(MultisigCosignatoryModification::new(
                modification.get_enum("type")?,
                public_account(modification, "cosignatoryPublicKey", network_type)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TransactionBody::ModifyMultisigAccount {
        min_approval_delta: delta(transaction, "minApprovalDelta")?,
        min_removal_delta: delta(transaction, "minRemovalDelta")?,
        modifications,
    })
}

fn delta(transaction: &JsonObject, key: &str) -> Result<i8> {
    i8::try_from(transaction.get_int(key)?).map_err(|_| Nem2Error::parse(format!("Failed to parse {}", key)))
}

fn register_namespace(transaction: &JsonObject) -> Result<TransactionBody> {
    let namespace_type: NamespaceType = transaction.get_enum("namespaceType")?;
    let registration = match namespace_type {
        NamespaceType::Root => NamespaceRegistration::Root {
            duration: transaction.get_u64("duration")?,
        },
        NamespaceType::Sub => NamespaceRegistration::Sub {
            parent_id: NamespaceId::new(transaction.get_u64("parentId")?),
        },
    };

    Ok(TransactionBody::RegisterNamespace {
        namespace_name: transaction.get_string("name")?.to_owned(),
        namespace_id: NamespaceId::new(transaction.get_u64("namespaceId")?),
        registration,
    })
}

fn transfer(transaction: &JsonObject) -> Result<TransactionBody> {
    let mosaics = optional_objects(transaction, "mosaics")?
        .into_iter()
        .map(|mosaic| Ok(Mosaic::new(MosaicId::new(mosaic.get_u64("id")?), mosaic.get_u64("amount")?)))
        .collect::<Result<Vec<_>>>()?;

    let message = match present(transaction, "message") {
        Some(_) => {
            let message = transaction.get_object("message")?;
            let message_type: MessageType = message.get_enum("type")?;
            Some(Message::from_parts(message_type, hex_field(message, "payload")?))
        }
        None => None,
    };

    Ok(TransactionBody::Transfer {
        recipient: address(transaction, "recipient")?,
        mosaics,
        message,
    })
}

fn lock_funds(transaction: &JsonObject) -> Result<TransactionBody> {
    let hash = hex::decode_array(transaction.get_string("hash")?)
        .map_err(|_| Nem2Error::parse("Failed to parse hash"))?;
    Ok(TransactionBody::LockFunds {
        mosaic: locked_mosaic(transaction)?,
        duration: transaction.get_u64("duration")?,
        hash,
    })
}

fn secret_lock(transaction: &JsonObject) -> Result<TransactionBody> {
    Ok(TransactionBody::SecretLock {
        mosaic: locked_mosaic(transaction)?,
        duration: transaction.get_u64("duration")?,
        hash_type: transaction.get_enum("hashAlgorithm")?,
        secret: hex_field(transaction, "secret")?,
        recipient: address(transaction, "recipient")?,
    })
}

fn secret_proof(transaction: &JsonObject) -> Result<TransactionBody> {
    Ok(TransactionBody::SecretProof {
        hash_type: transaction.get_enum("hashAlgorithm")?,
        secret: hex_field(transaction, "secret")?,
        proof: hex_field(transaction, "proof")?,
    })
}

/// Locks carry either flat `mosaicId` / `amount` or a nested `mosaic`.
fn locked_mosaic(transaction: &JsonObject) -> Result<Mosaic> {
    let (source, id_key) = if transaction.contains_key("mosaicId") {
        (transaction, "mosaicId")
    } else {
        (transaction.get_object("mosaic")?, "id")
    };
    Ok(Mosaic::new(
        MosaicId::new(source.get_u64(id_key)?),
        source.get_u64("amount")?,
    ))
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// The value under `key`, treating `null` as absent.
fn present<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
    object.get(key).filter(|value| !matches!(value, JsonValue::Null))
}

fn optional_objects<'a>(object: &'a JsonObject, key: &str) -> Result<Vec<&'a JsonObject>> {
    match present(object, key) {
        Some(_) => object.get_array_of_object(key),
        None => Ok(Vec::new()),
    }
}

fn hex_field(object: &JsonObject, key: &str) -> Result<Vec<u8>> {
    hex::decode(object.get_string(key)?).map_err(|_| Nem2Error::parse(format!("Failed to parse {}", key)))
}

fn public_account(object: &JsonObject, key: &str, network_type: NetworkType) -> Result<PublicAccount> {
    PublicAccount::from_public_key_hex(object.get_string(key)?, network_type)
        .map_err(|_| Nem2Error::parse(format!("Failed to parse {}", key)))
}

fn address(object: &JsonObject, key: &str) -> Result<Address> {
    Address::from_encoded(object.get_string(key)?)
        .map_err(|_| Nem2Error::parse(format!("Failed to parse {}", key)))
}
