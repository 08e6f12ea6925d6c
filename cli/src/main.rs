// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nem2
//!
//! Entry point for the `nem2` binary. Parses CLI arguments, initializes
//! logging, and runs one offline command:
//!
//! - `keygen`        generate an account
//! - `address`       derive the address of a public key
//! - `namespace-id`  derive namespace ids
//! - `mosaic-id`     derive a mosaic id
//! - `sign-transfer` sign a transfer and print its payload
//! - `decode`        map node JSON to a typed transaction
//!
//! Results are printed to stdout as JSON.

mod cli;
mod logging;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use nem2_sdk::account::{Account, Address, NetworkType, PublicAccount};
use nem2_sdk::id::{generate_mosaic_id, generate_namespace_path};
use nem2_sdk::json::JsonValue;
use nem2_sdk::mapping::{map_transaction, map_transactions};
use nem2_sdk::mosaic::Xem;
use nem2_sdk::transaction::{Message, TransactionBuilder};

use cli::{Commands, Nem2Cli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = Nem2Cli::parse();
    logging::init_logging(
        "nem2_cli=info,nem2_sdk=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    let network = cli.network;
    let output = match cli.command {
        Commands::Keygen => keygen(network),
        Commands::Address(args) => address(&args, network)?,
        Commands::NamespaceId(args) => namespace_id(&args)?,
        Commands::MosaicId(args) => mosaic_id(&args)?,
        Commands::SignTransfer(args) => sign_transfer(&args, network)?,
        Commands::Decode(args) => decode(&args)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn keygen(network: NetworkType) -> serde_json::Value {
    let account = Account::generate(network);
    tracing::info!(network = %network, "account generated");
    json!({
        "network": network.name(),
        "privateKey": account.private_key_hex(),
        "publicKey": account.public_key_hex(),
        "address": account.address().pretty(),
    })
}

fn address(args: &cli::AddressArgs, network: NetworkType) -> Result<serde_json::Value> {
    let public_account = PublicAccount::from_public_key_hex(&args.public_key, network)
        .context("invalid public key")?;
    let address = public_account.address();
    Ok(json!({
        "network": network.name(),
        "plain": address.plain(),
        "pretty": address.pretty(),
    }))
}

fn namespace_id(args: &cli::NamespaceIdArgs) -> Result<serde_json::Value> {
    let path = generate_namespace_path(&args.name)
        .with_context(|| format!("invalid namespace name '{}'", args.name))?;
    let levels: Vec<_> = path.iter().map(|id| format!("{:016X}", id)).collect();
    Ok(json!({
        "name": args.name,
        "id": levels.last(),
        "path": levels,
    }))
}

fn mosaic_id(args: &cli::MosaicIdArgs) -> Result<serde_json::Value> {
    let id = generate_mosaic_id(&args.namespace, &args.mosaic).with_context(|| {
        format!("invalid mosaic name '{}:{}'", args.namespace, args.mosaic)
    })?;
    Ok(json!({
        "name": format!("{}:{}", args.namespace, args.mosaic),
        "id": format!("{:016X}", id),
    }))
}

fn sign_transfer(args: &cli::SignTransferArgs, network: NetworkType) -> Result<serde_json::Value> {
    let account =
        Account::from_private_key_hex(&args.private_key, network).context("invalid private key")?;
    let recipient = Address::from_raw(&args.recipient)
        .with_context(|| format!("invalid recipient '{}'", args.recipient))?;

    let transfer = TransactionBuilder::new(network).fee(args.fee).transfer(
        recipient,
        vec![Xem::of_micro(args.amount)],
        args.message.as_deref().map(Message::plain),
    );
    let signed = account.sign(&transfer).context("failed to sign transfer")?;
    tracing::info!(hash = %signed.hash_hex(), signer = %account.address().plain(), "transfer signed");

    Ok(json!({
        "hash": signed.hash_hex(),
        "payload": signed.payload_hex(),
        "signer": account.public_key_hex(),
        "deadline": transfer.deadline.timestamp(),
    }))
}

fn decode(args: &cli::DecodeArgs) -> Result<serde_json::Value> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let value = JsonValue::parse(&text)?;
    let decoded = match value {
        JsonValue::Array(_) => {
            let transactions = map_transactions(&value)?;
            tracing::debug!(count = transactions.len(), "decoded transaction list");
            serde_json::to_value(transactions)?
        }
        _ => serde_json::to_value(map_transaction(&value)?)?,
    };
    Ok(decoded)
}
