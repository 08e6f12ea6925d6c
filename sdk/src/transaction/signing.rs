//! Transaction signing.
//!
//! ```text
//! signature = Ed25519-SHA3(signing_bytes)
//! hash      = SHA3-256(signature[0..32] | signer | signing_bytes)
//! payload   = size u32 | signature [64] | signer [32] | signing_bytes
//! ```
//!
//! Cosigners of an aggregate sign the hash and their `signer | signature`
//! pairs are appended to the initiator's payload.

use serde::Serialize;
use tracing::debug;

use super::builder::Transaction;
use super::types::TransactionType;
use crate::codec::hex;
use crate::config::{HASH_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, TRANSACTION_HEADER_SIZE};
use crate::crypto::hash::sha3_256_parts;
use crate::crypto::keys::KeyPair;
use crate::error::{Nem2Error, Result};

/// A signed payload ready to announce, with its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedTransaction {
    payload: Vec<u8>,
    hash: [u8; HASH_LENGTH],
    transaction_type: TransactionType,
}

impl SignedTransaction {
    pub(crate) fn new(
        payload: Vec<u8>,
        hash: [u8; HASH_LENGTH],
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            payload,
            hash,
            transaction_type,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Upper-case hex payload, the form nodes accept.
    pub fn payload_hex(&self) -> String {
        hex::encode_upper(&self.payload)
    }

    pub fn hash(&self) -> &[u8; HASH_LENGTH] {
        &self.hash
    }

    pub fn hash_hex(&self) -> String {
        hex::encode_upper(self.hash)
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }
}

/// Hash of a transaction from its signature, signer public key and signing
/// bytes.
pub fn transaction_hash(
    signature: &[u8],
    signer: &[u8],
    signing_bytes: &[u8],
) -> Result<[u8; HASH_LENGTH]> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(Nem2Error::illegal(format!(
            "signature must be {} bytes, got {}",
            SIGNATURE_LENGTH,
            signature.len()
        )));
    }
    if signer.len() != PUBLIC_KEY_LENGTH {
        return Err(Nem2Error::illegal(format!(
            "signer must be {} bytes, got {}",
            PUBLIC_KEY_LENGTH,
            signer.len()
        )));
    }
    Ok(sha3_256_parts(&[&signature[..32], signer, signing_bytes]))
}

/// Hash of a complete signed payload, e.g. one received from another
/// client.
pub fn payload_hash(payload: &[u8]) -> Result<[u8; HASH_LENGTH]> {
    if payload.len() < TRANSACTION_HEADER_SIZE {
        return Err(Nem2Error::illegal(format!(
            "payload must be at least {} bytes, got {}",
            TRANSACTION_HEADER_SIZE,
            payload.len()
        )));
    }
    let signature = &payload[4..4 + SIGNATURE_LENGTH];
    let signer = &payload[4 + SIGNATURE_LENGTH..TRANSACTION_HEADER_SIZE];
    transaction_hash(signature, signer, &payload[TRANSACTION_HEADER_SIZE..])
}

/// Signs `tx` with `key_pair`.
///
/// # Errors
///
/// Propagates serialization failures, e.g. an aggregate whose inner
/// transactions lack a signer.
pub fn sign_transaction(tx: &Transaction, key_pair: &KeyPair) -> Result<SignedTransaction> {
    let signing_bytes = tx.signing_bytes()?;
    let signature = key_pair.sign(&signing_bytes);
    let signer = key_pair.public_key().as_bytes();
    let hash = transaction_hash(signature.as_bytes(), signer, &signing_bytes)?;

    let size = u32::try_from(TRANSACTION_HEADER_SIZE + signing_bytes.len())
        .map_err(|_| Nem2Error::illegal("transaction is too large"))?;
    let mut payload = Vec::with_capacity(TRANSACTION_HEADER_SIZE + signing_bytes.len());
    payload.extend_from_slice(&size.to_le_bytes());
    payload.extend_from_slice(signature.as_bytes());
    payload.extend_from_slice(signer);
    payload.extend_from_slice(&signing_bytes);

    debug!(
        tx_type = %tx.transaction_type(),
        size = payload.len(),
        hash = %hex::encode_upper(hash),
        "signed transaction"
    );
    Ok(SignedTransaction::new(payload, hash, tx.transaction_type()))
}

/// Signs an aggregate with `initiator` and appends a cosignature from each
/// of `cosigners`.
///
/// Each cosignature is `public_key [32] | Ed25519-SHA3(hash) [64]`. After
/// appending them only the leading `u32` size is rewritten; the initiator's
/// signature and the hash are unchanged.
pub fn sign_with_cosignatories<'a>(
    tx: &Transaction,
    initiator: &KeyPair,
    cosigners: impl IntoIterator<Item = &'a KeyPair>,
) -> Result<SignedTransaction> {
    if !tx.transaction_type().is_aggregate() {
        return Err(Nem2Error::illegal(format!(
            "{} transaction cannot carry cosignatures",
            tx.transaction_type()
        )));
    }
    let signed = sign_transaction(tx, initiator)?;
    let mut payload = signed.payload;
    let mut count = 0usize;
    for cosigner in cosigners {
        let signature = cosigner.sign(&signed.hash);
        payload.extend_from_slice(cosigner.public_key().as_bytes());
        payload.extend_from_slice(signature.as_bytes());
        count += 1;
    }

    let size = u32::try_from(payload.len())
        .map_err(|_| Nem2Error::illegal("transaction is too large"))?;
    payload[..4].copy_from_slice(&size.to_le_bytes());

    debug!(
        tx_type = %tx.transaction_type(),
        cosignatures = count,
        size = payload.len(),
        "cosigned aggregate"
    );
    Ok(SignedTransaction::new(payload, signed.hash, signed.transaction_type))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Address, NetworkType, PublicAccount};
    use crate::crypto::keys::{PublicKey, Signature};
    use crate::mosaic::{Mosaic, MosaicId, MosaicProperties, MosaicSupplyType, Xem};
    use crate::namespace::NamespaceId;
    use crate::transaction::types::{
        HashType, Message, MultisigCosignatoryModification, MultisigCosignatoryModificationType,
    };
    use crate::transaction::{Deadline, TransactionBuilder};

    const PRIVATE_KEY: &str = "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d";
    const SECRET: &str = "b778a39a3663719dfc5e48c9d78431b1e45c2af9df538782bf199c189dabeac7680ada57dcec8eee91c4e3bf3bfa9af6ffde90cd1d249d1c6121d7b759a001b1";

    fn key_pair() -> KeyPair {
        KeyPair::from_hex(PRIVATE_KEY).unwrap()
    }

    fn builder() -> TransactionBuilder {
        TransactionBuilder::new(NetworkType::MijinTest).deadline(Deadline::from_timestamp(1))
    }

    fn address(raw: &str) -> Address {
        Address::from_raw(raw).unwrap()
    }

    fn public_account(hex: &str) -> PublicAccount {
        PublicAccount::from_public_key_hex(hex, NetworkType::MijinTest).unwrap()
    }

    /// Signs with a throwaway key and returns the payload after the
    /// signature and signer.
    fn signed_without_header(tx: &Transaction) -> (Vec<u8>, String) {
        let signed = sign_transaction(tx, &KeyPair::generate()).unwrap();
        let payload = signed.payload().to_vec();
        (payload[..4].to_vec(), hex::encode_upper(&payload[TRANSACTION_HEADER_SIZE..]))
    }

    #[test]
    fn transfer_payload_and_hash() {
        let tx = builder().transfer(
            address("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM"),
            vec![Mosaic::new(MosaicId::new(95_442_763_262_823), 100)],
            Some(Message::empty()),
        );
        let signed = sign_transaction(&tx, &key_pair()).unwrap();
        assert_eq!(
            signed.payload_hex(),
            "A5000000773891AD01DD4CDF6E3A55C186C673E256D7DF9D471846F1943CC3529E4E02B38B9AF3F8D13784645FF5FAAFA94A321B94933C673D12DE60E4BC05ABA56F750E1026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF37755039054410000000000000000010000000000000090E8FEBD671DD41BEE94EC3BA5831CB608A312C2F203BA84AC01000100672B0000CE5600006400000000000000"
        );
        assert_eq!(
            signed.hash_hex(),
            "350AE56BC97DB805E2098AB2C596FA4C6B37EF974BF24DFD61CD9F77C7687424"
        );
        assert_eq!(signed.transaction_type(), TransactionType::Transfer);
    }

    #[test]
    fn register_root_namespace_layout() {
        let tx = builder().register_root_namespace("newnamespace", 10_000).unwrap();
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![150, 0, 0, 0]);
        assert_eq!(
            body,
            "02904E41000000000000000001000000000000000010270000000000007EE9B3B8AFDF53400C6E65776E616D657370616365"
        );
    }

    #[test]
    fn register_sub_namespace_layout() {
        let tx = builder()
            .register_sub_namespace("subnamespace", NamespaceId::new(4_635_294_387_305_441_662))
            .unwrap();
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![150, 0, 0, 0]);
        assert_eq!(
            body,
            "02904E4100000000000000000100000000000000017EE9B3B8AFDF53400312981B7879A3710C7375626E616D657370616365"
        );
    }

    #[test]
    fn mosaic_definition_layout() {
        let tx = builder()
            .mosaic_definition("mosaics", "sname", MosaicProperties::new(true, true, true, 4, 10_000))
            .unwrap();
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![156, 0, 0, 0]);
        assert_eq!(
            body,
            "02904D41000000000000000001000000000000009B8A161CF5092390159911AEA72EBD3C070107046D6F7361696373021027000000000000"
        );
    }

    #[test]
    fn mosaic_supply_change_layout() {
        let tx = builder().mosaic_supply_change(
            MosaicId::new(6_300_565_133_566_699_912),
            MosaicSupplyType::Increase,
            10,
        );
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![137, 0, 0, 0]);
        assert_eq!(
            body,
            "02904D42000000000000000001000000000000008869746E9B1A7057010A00000000000000"
        );
    }

    #[test]
    fn modify_multisig_layout() {
        let add = |key: &str| {
            MultisigCosignatoryModification::new(
                MultisigCosignatoryModificationType::Add,
                public_account(key),
            )
        };
        let tx = builder().modify_multisig_account(
            2,
            1,
            vec![
                add("68b3fbb18729c1fde225c57f8ce080fa828f0067e451a3fd81fa628842b0b763"),
                add("cf893ffcc47c33e7f68ab1db56365c156b0736824a0c1e273f9e00b8df8f01eb"),
            ],
        );
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![189, 0, 0, 0]);
        assert_eq!(
            body,
            "03905541000000000000000001000000000000000102020068B3FBB18729C1FDE225C57F8CE080FA828F0067E451A3FD81FA628842B0B76300CF893FFCC47C33E7F68AB1DB56365C156B0736824A0C1E273F9E00B8DF8F01EB"
        );
    }

    #[test]
    fn aggregate_complete_layout() {
        let inner = builder()
            .transfer(
                address("SBILTA367K2LX2FEXG5TFWAS7GEFYAGY7QLFBYKC"),
                vec![Xem::of_micro(10_000_000)],
                Some(Message::empty()),
            )
            .with_signer(public_account(
                "846B4439154579A5903B1459C9CF69CB8153F6D0110A7A0ED61DE29AE4810BF2",
            ));
        let tx = builder().aggregate_complete(vec![inner]).unwrap();
        let (size, body) = signed_without_header(&tx);
        assert_eq!(size, vec![209, 0, 0, 0]);
        assert_eq!(
            body,
            "02904141000000000000000001000000000000005500000055000000846B4439154579A5903B1459C9CF69CB8153F6D0110A7A0ED61DE29AE4810BF2039054419050B9837EFAB4BBE8A4B9BB32D812F9885C00D8FC1650E1420100010029CF5FD941AD25D58096980000000000"
        );
    }

    #[test]
    fn lock_funds_payload_and_hash() {
        let signed_aggregate = SignedTransaction::new(
            b"payload".to_vec(),
            hex::decode_array::<32>("8498B38D89C1DC8A448EA5824938FF828926CD9F7747B1844B59B4B6807E878B")
                .unwrap(),
            TransactionType::AggregateBonded,
        );
        let tx = builder()
            .lock_funds(Xem::of(10.0).unwrap(), 100, &signed_aggregate)
            .unwrap();
        let signed = sign_transaction(&tx, &key_pair()).unwrap();
        assert_eq!(
            signed.payload_hex(),
            "B0000000D079047B87DCEDA0DE68558C1322A453D55D52BDA2778D66C5344BF79EE9E946C731F9ED565E5A854AFC0A1E1476B571940F920F33ADD9BAC245DB46A59794051026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF3775503904C410000000000000000010000000000000029CF5FD941AD25D5809698000000000064000000000000008498B38D89C1DC8A448EA5824938FF828926CD9F7747B1844B59B4B6807E878B"
        );
        assert_eq!(
            signed.hash_hex(),
            "1F8A695B23F595646D43307DE0C6487AC642520FD31ACC6E6F8163AD2DD98B5A"
        );
    }

    #[test]
    fn secret_lock_payload_and_hash() {
        let tx = builder().secret_lock(
            Xem::of(10.0).unwrap(),
            100,
            HashType::Sha3_512,
            hex::decode(SECRET).unwrap(),
            address("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM"),
        );
        let signed = sign_transaction(&tx, &key_pair()).unwrap();
        assert_eq!(
            signed.payload_hex(),
            "EA0000005A3B75AE172855381353250EA9A1DFEB86E9280C0006B8FD997C2FCECF211C9A260E76CB704A22EAD4648F18E6931381921A4EDC7D309C32275D0147E9BAD3051026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF3775503904C420000000000000000010000000000000029CF5FD941AD25D58096980000000000640000000000000000B778A39A3663719DFC5E48C9D78431B1E45C2AF9DF538782BF199C189DABEAC7680ADA57DCEC8EEE91C4E3BF3BFA9AF6FFDE90CD1D249D1C6121D7B759A001B190E8FEBD671DD41BEE94EC3BA5831CB608A312C2F203BA84AC"
        );
        assert_eq!(
            signed.hash_hex(),
            "B3AF46027909CD24204AF4E7B5B43C3116307D90A1F83A5DE6DBDF1F7759ABC5"
        );
    }

    #[test]
    fn secret_proof_payload_and_hash() {
        let tx = builder().secret_proof(
            HashType::Sha3_512,
            hex::decode(SECRET).unwrap(),
            hex::decode("9a493664").unwrap(),
        );
        let signed = sign_transaction(&tx, &key_pair()).unwrap();
        assert_eq!(
            signed.payload_hex(),
            "BF000000147827E5FDAB2201ABD3663964B0493166DA7DD18497718F53DF09AAFC55271B57A9E81B4E2F627FD19E9E9B77283D1620FB8E9E32BAC5AC265EB0B43C75B4071026D70E1954775749C6811084D6450A3184D977383F0E4282CD47118AF3775503904C430000000000000000010000000000000000B778A39A3663719DFC5E48C9D78431B1E45C2AF9DF538782BF199C189DABEAC7680ADA57DCEC8EEE91C4E3BF3BFA9AF6FFDE90CD1D249D1C6121D7B759A001B104009A493664"
        );
        assert_eq!(
            signed.hash_hex(),
            "1169864A7290940854D87C8818625A7A498E6550D19F9BFAF5BA7BEFEB9206D0"
        );
    }

    #[test]
    fn hash_from_transfer_payload() {
        let payload = hex::decode("C7000000D0B190DFEEAB0378F943F79CDB7BC44453491890FAA70F5AA95B909E67487408407956BDE32AC977D035FBBA575C11AA034B23402066C16FD6126893F3661B099A49366406ACA952B88BADF5F1E9BE6CE4968141035A60BE503273EA65456B24039054410000000000000000A76541BE0C00000090E8FEBD671DD41BEE94EC3BA5831CB608A312C2F203BA84AC03000300303064000000000000006400000000000000002F00FA0DEDD9086400000000000000443F6D806C05543A6400000000000000").unwrap();
        assert_eq!(
            hex::encode_upper(payload_hash(&payload).unwrap()),
            "1105F408BA2C2B2769717197954F85DFC6C502C578CC9D0B8DD628BD88330EE7"
        );
    }

    #[test]
    fn hash_from_aggregate_payload() {
        let payload = hex::decode("E9000000A37C8B0456474FB5E3E910E84B5929293C114E0AF97FEF0D940D3A2A2C337BAFA0C59538E5988229B65A3065B4E9BD57B1AFAEC64DFBE2211B8AF6E742801E08C2F93346E27CE6AD1A9F8F5E3066F8326593A406BDF357ACB041E2F9AB402EFE0390414100000000000000008EEAC2C80C0000006D0000006D000000C2F93346E27CE6AD1A9F8F5E3066F8326593A406BDF357ACB041E2F9AB402EFE0390554101020200B0F93CBEE49EEB9953C6F3985B15A4F238E205584D8F924C621CBE4D7AC6EC2400B1B5581FC81A6970DEE418D2C2978F2724228B7B36C5C6DF71B0162BB04778B4").unwrap();
        assert_eq!(
            hex::encode_upper(payload_hash(&payload).unwrap()),
            "AED6DD7B9575FD29D604A4D3CE57A6F9BE7B88CC3AE0B6C5F3CB26C261592907"
        );
    }

    #[test]
    fn hash_helpers_reject_short_input() {
        assert!(payload_hash(&[0; 99]).is_err());
        assert!(transaction_hash(&[0; 32], &[0; 32], b"").is_err());
        assert!(transaction_hash(&[0; 64], &[0; 31], b"").is_err());
    }

    #[test]
    fn aggregate_with_cosignatories() {
        let inner = builder()
            .transfer(
                address("SBILTA367K2LX2FEXG5TFWAS7GEFYAGY7QLFBYKC"),
                vec![],
                Some(Message::plain("test-message")),
            )
            .with_signer(public_account(
                "B694186EE4AB0558CA4AFCFDD43B42114AE71094F5A1FC4A913FE9971CACD21D",
            ));
        let tx = builder().aggregate_complete(vec![inner]).unwrap();
        let initiator =
            KeyPair::from_hex("2a2b1f5d366a5dd5dc56c3c757cf4fe6c66e2787087692cf329d7a49a594658b")
                .unwrap();
        let cosigner =
            KeyPair::from_hex("b8afae6f4ad13a1b8aad047b488e0738a437c7389d4ff30c359ac068910c1d59")
                .unwrap();

        let signed = sign_with_cosignatories(&tx, &initiator, [&cosigner]).unwrap();
        let payload = signed.payload();
        assert_eq!(hex::encode(&payload[0..4]), "2d010000");
        assert_eq!(hex::encode(&payload[120..128]), "5100000051000000");

        // The initiator's signature still covers the original signing bytes.
        let unsigned_len = payload.len() - PUBLIC_KEY_LENGTH - SIGNATURE_LENGTH;
        let signature = Signature::from_slice(&payload[4..68]).unwrap();
        assert!(initiator
            .public_key()
            .verify(&payload[TRANSACTION_HEADER_SIZE..unsigned_len], &signature));
        assert_eq!(payload_hash(&payload[..unsigned_len]).unwrap(), *signed.hash());

        // The trailing cosignature signs the hash.
        let cosigner_key = PublicKey::from_slice(&payload[unsigned_len..unsigned_len + 32]).unwrap();
        assert_eq!(&cosigner_key, cosigner.public_key());
        let cosignature = Signature::from_slice(&payload[unsigned_len + 32..]).unwrap();
        assert!(cosigner_key.verify(signed.hash(), &cosignature));
    }

    #[test]
    fn cosignatures_need_an_aggregate() {
        let tx = builder().transfer(address("SBILTA367K2LX2FEXG5TFWAS7GEFYAGY7QLFBYKC"), vec![], None);
        let kp = key_pair();
        assert!(sign_with_cosignatories(&tx, &kp, [&kp]).is_err());
    }

    #[test]
    fn signing_unsigned_inner_fails() {
        let inner = builder().transfer(address("SBILTA367K2LX2FEXG5TFWAS7GEFYAGY7QLFBYKC"), vec![], None);
        let mut tx = builder().aggregate_complete(vec![]).unwrap();
        if let crate::transaction::TransactionBody::Aggregate {
            inner_transactions, ..
        } = &mut tx.body
        {
            inner_transactions.push(inner);
        }
        assert!(matches!(
            sign_transaction(&tx, &key_pair()),
            Err(Nem2Error::SerializeError(_))
        ));
    }
}
