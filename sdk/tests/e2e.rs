//! End-to-end tests for the signing pipeline.
//!
//! These tests drive the public API the way a wallet would: derive an
//! account, build a transaction, sign it, and read it back from node-shaped
//! JSON. Payload fixtures use a deadline timestamp of 1 so the signed bytes
//! are stable.

use serde_json::json;

use nem2_sdk::account::{Account, Address, NetworkType};
use nem2_sdk::codec::{hex, uint64};
use nem2_sdk::config::TRANSACTION_HEADER_SIZE;
use nem2_sdk::crypto::Signature;
use nem2_sdk::json::JsonValue;
use nem2_sdk::mapping::map_transaction;
use nem2_sdk::mosaic::{Mosaic, MosaicId, Xem};
use nem2_sdk::transaction::{
    payload_hash, CosignatureTransaction, Deadline, Message, SignedTransaction, Transaction,
    TransactionBody, TransactionBuilder, TransactionInfo, TransactionType,
};
use nem2_sdk::Nem2Error;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const PRIVATE_KEY: &str = "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d";

fn fixture_account() -> Account {
    Account::from_private_key_hex(PRIVATE_KEY, NetworkType::MijinTest).expect("fixture key")
}

fn fixed_builder() -> TransactionBuilder {
    TransactionBuilder::new(NetworkType::MijinTest).deadline(Deadline::from_timestamp(1))
}

fn recipient() -> Address {
    Address::from_raw("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM").expect("fixture address")
}

/// Size prefix and the bytes after signature and signer, as hex.
fn split_payload(signed: &SignedTransaction) -> (String, String) {
    let payload = signed.payload();
    (
        hex::encode_upper(&payload[..4]),
        hex::encode_upper(&payload[TRANSACTION_HEADER_SIZE..]),
    )
}

/// Renders a signed standalone transfer the way a node reports it.
fn node_json(tx: &Transaction, signed: &SignedTransaction, account: &Account) -> JsonValue {
    let TransactionBody::Transfer {
        recipient,
        mosaics,
        message,
    } = &tx.body
    else {
        panic!("expected a transfer");
    };
    let payload = signed.payload();
    let message = message.as_ref().expect("message");
    let value = json!({
        "meta": {
            "hash": signed.hash_hex(),
            "height": [42, 0],
            "id": "5A0069D83F17CF0001777E55",
            "index": 0,
            "merkleComponentHash": signed.hash_hex(),
        },
        "transaction": {
            "deadline": uint64::to_pair(tx.deadline.timestamp()),
            "fee": uint64::to_pair(tx.fee),
            "signature": hex::encode_upper(&payload[4..68]),
            "signer": account.public_key_hex(),
            "type": tx.transaction_type().value(),
            "version": (u16::from(tx.network_type.value()) << 8) | u16::from(tx.version),
            "recipient": hex::encode_upper(recipient.bytes()),
            "mosaics": mosaics.iter().map(|m| json!({
                "id": uint64::to_pair(m.id.id()),
                "amount": uint64::to_pair(m.amount),
            })).collect::<Vec<_>>(),
            "message": {
                "type": message.message_type().value(),
                "payload": hex::encode_upper(message.payload()),
            },
        },
    });
    serde_json::from_value(value).expect("node json")
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

#[test]
fn root_namespace_registration_end_to_end() {
    let tx = fixed_builder()
        .register_root_namespace("newnamespace", 10_000)
        .expect("valid name");
    let signed = fixture_account().sign(&tx).expect("sign");

    let (size, body) = split_payload(&signed);
    assert_eq!(signed.payload().len(), 150);
    assert_eq!(size, "96000000");
    assert_eq!(
        body,
        "02904E41000000000000000001000000000000000010270000000000007EE9B3B8AFDF53400C6E65776E616D657370616365"
    );
    assert_eq!(signed.transaction_type(), TransactionType::RegisterNamespace);
}

#[test]
fn transfer_hash_is_recomputable_from_payload() {
    let account = Account::generate(NetworkType::MijinTest);
    let tx = TransactionBuilder::new(NetworkType::MijinTest).transfer(
        recipient(),
        vec![Xem::of(12.5).expect("amount")],
        Some(Message::plain("invoice 17")),
    );
    let signed = account.sign(&tx).expect("sign");

    assert_eq!(&payload_hash(signed.payload()).expect("hash"), signed.hash());

    let payload = signed.payload();
    let signature = Signature::from_slice(&payload[4..68]).expect("signature");
    assert!(account
        .public_account()
        .verify_signature(&payload[TRANSACTION_HEADER_SIZE..], &signature));
}

#[test]
fn signing_twice_yields_the_same_hash() {
    let account = fixture_account();
    let tx = fixed_builder().transfer(
        recipient(),
        vec![Mosaic::new(MosaicId::new(95_442_763_262_823), 100)],
        Some(Message::empty()),
    );
    let first = account.sign(&tx).expect("sign");
    let second = account.sign(&tx).expect("sign");
    assert_eq!(first.hash(), second.hash());
    assert_eq!(
        first.hash_hex(),
        "350AE56BC97DB805E2098AB2C596FA4C6B37EF974BF24DFD61CD9F77C7687424"
    );
}

// ---------------------------------------------------------------------------
// Aggregate bonded flow
// ---------------------------------------------------------------------------

#[test]
fn bonded_aggregate_lock_and_cosign() {
    let initiator = Account::generate(NetworkType::MijinTest);
    let cosigner = Account::generate(NetworkType::MijinTest);
    let builder = TransactionBuilder::new(NetworkType::MijinTest);

    let inner = builder
        .transfer(cosigner.address(), vec![Xem::of_micro(1)], None)
        .with_signer(initiator.public_account().clone());
    let mut aggregate = builder.aggregate_bonded(vec![inner]).expect("aggregate");
    let signed = initiator.sign(&aggregate).expect("sign");

    let lock = builder
        .lock_funds(Xem::of_micro(10_000_000), 480, &signed)
        .expect("lock");
    match &lock.body {
        TransactionBody::LockFunds { hash, duration, .. } => {
            assert_eq!(hash, signed.hash());
            assert_eq!(*duration, 480);
        }
        other => panic!("unexpected body {other:?}"),
    }

    // Announced but still waiting for the cosigner.
    assert!(CosignatureTransaction::new(aggregate.clone()).is_err());
    aggregate.info = Some(TransactionInfo::new(
        0,
        0,
        "5A0069D83F17CF0001777E55",
        signed.hash().to_vec(),
        vec![0; 32],
    ));
    assert!(aggregate.has_missing_signatures());

    let pending = CosignatureTransaction::new(aggregate).expect("announced aggregate");
    let cosignature = cosigner.sign_cosignature(&pending);
    assert_eq!(&cosignature.parent_hash, signed.hash());
    assert!(cosigner
        .public_account()
        .verify_signature(&cosignature.parent_hash, &cosignature.signature));
}

#[test]
fn lock_funds_rejects_complete_aggregate() {
    let account = Account::generate(NetworkType::MijinTest);
    let builder = TransactionBuilder::new(NetworkType::MijinTest);
    let complete = builder.aggregate_complete(vec![]).expect("aggregate");
    let signed = account.sign(&complete).expect("sign");

    let err = builder
        .lock_funds(Xem::of_micro(10_000_000), 480, &signed)
        .unwrap_err();
    assert_eq!(
        err,
        Nem2Error::IllegalArgument("Signed transaction must be Aggregate Bonded Transaction".into())
    );
}

#[test]
fn aggregate_rejects_unsigned_inner() {
    let builder = TransactionBuilder::new(NetworkType::MijinTest);
    let inner = builder.transfer(recipient(), vec![], None);
    let err = builder.aggregate_complete(vec![inner]).unwrap_err();
    assert!(matches!(err, Nem2Error::IllegalArgument(_)));
}

// ---------------------------------------------------------------------------
// Round trip through node JSON
// ---------------------------------------------------------------------------

#[test]
fn signed_transfer_survives_node_round_trip() {
    let account = Account::generate(NetworkType::MijinTest);
    let tx = TransactionBuilder::new(NetworkType::MijinTest).fee(7).transfer(
        recipient(),
        vec![Xem::of_micro(3_000_000), Mosaic::new(MosaicId::new(u64::MAX), 1)],
        Some(Message::plain("round trip")),
    );
    let signed = account.sign(&tx).expect("sign");

    let mapped = map_transaction(&node_json(&tx, &signed, &account)).expect("map");

    assert_eq!(mapped.body, tx.body);
    assert_eq!(mapped.deadline, tx.deadline);
    assert_eq!(mapped.fee, 7);
    assert_eq!(mapped.signer.as_ref(), Some(account.public_account()));
    assert!(mapped.is_confirmed());
    assert_eq!(
        mapped.signing_bytes().expect("bytes"),
        tx.signing_bytes().expect("bytes")
    );
    assert!(mapped.signed_by_account(account.public_account()));
}
