// Signing and derivation benchmarks for the NEM2 SDK.
//
// Covers key pair derivation, raw Ed25519-SHA3 signing and verification,
// transfer signing, aggregate cosigning, and namespace/mosaic id derivation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nem2_sdk::account::{Account, Address, NetworkType};
use nem2_sdk::crypto::keys::KeyPair;
use nem2_sdk::crypto::signatures::{sign, verify};
use nem2_sdk::id::{generate_mosaic_id, generate_namespace_path};
use nem2_sdk::mosaic::Xem;
use nem2_sdk::transaction::{Message, TransactionBuilder};

const PRIVATE_KEY: &str = "787225aaff3d2c71f4ffa32d4f19ec4922f3cd869747f267378f81f8e3fcb12d";

fn recipient() -> Address {
    Address::from_raw("SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM").unwrap()
}

fn bench_keypair_derivation(c: &mut Criterion) {
    c.bench_function("ed25519_sha3/keypair_from_hex", |b| {
        b.iter(|| KeyPair::from_hex(PRIVATE_KEY).unwrap());
    });
}

fn bench_sign_message(c: &mut Criterion) {
    let keypair = KeyPair::from_hex(PRIVATE_KEY).unwrap();
    let message = b"transfer 10 xem to SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM";

    c.bench_function("ed25519_sha3/sign_message", |b| {
        b.iter(|| sign(&keypair, message));
    });
}

fn bench_verify_signature(c: &mut Criterion) {
    let keypair = KeyPair::from_hex(PRIVATE_KEY).unwrap();
    let message = b"transfer 10 xem to SDUP5PLHDXKBX3UU5Q52LAY4WYEKGEWC6IB3VBFM";
    let signature = sign(&keypair, message);

    c.bench_function("ed25519_sha3/verify_signature", |b| {
        b.iter(|| verify(keypair.public_key(), message, &signature));
    });
}

fn bench_sign_transfer(c: &mut Criterion) {
    let account = Account::from_private_key_hex(PRIVATE_KEY, NetworkType::MijinTest).unwrap();
    let transfer = TransactionBuilder::new(NetworkType::MijinTest).transfer(
        recipient(),
        vec![Xem::of_micro(10_000_000)],
        Some(Message::plain("bench")),
    );

    c.bench_function("transaction/sign_transfer", |b| {
        b.iter(|| account.sign(&transfer).unwrap());
    });
}

fn bench_aggregate_cosigning(c: &mut Criterion) {
    let mut group = c.benchmark_group("transaction/sign_with_cosignatories");
    let initiator = Account::from_private_key_hex(PRIVATE_KEY, NetworkType::MijinTest).unwrap();
    let builder = TransactionBuilder::new(NetworkType::MijinTest);

    for size in [1, 5, 15] {
        let cosigners: Vec<Account> = (0..size)
            .map(|_| Account::generate(NetworkType::MijinTest))
            .collect();
        let inner = cosigners
            .iter()
            .map(|cosigner| {
                builder
                    .transfer(initiator.address(), vec![Xem::of_micro(1)], None)
                    .with_signer(cosigner.public_account().clone())
            })
            .collect();
        let aggregate = builder.aggregate_complete(inner).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &cosigners, |b, cosigners| {
            b.iter(|| initiator.sign_with_cosignatories(&aggregate, cosigners).unwrap());
        });
    }

    group.finish();
}

fn bench_id_derivation(c: &mut Criterion) {
    c.bench_function("id/namespace_path", |b| {
        b.iter(|| generate_namespace_path("nem.subnem.subsubnem").unwrap());
    });
    c.bench_function("id/mosaic_id", |b| {
        b.iter(|| generate_mosaic_id("nem", "xem").unwrap());
    });
}

criterion_group!(
    benches,
    bench_keypair_derivation,
    bench_sign_message,
    bench_verify_signature,
    bench_sign_transfer,
    bench_aggregate_cosigning,
    bench_id_derivation,
);
criterion_main!(benches);
