//! # CLI Interface
//!
//! Defines the command-line argument structure for `nem2` using `clap`
//! derive. Every subcommand works offline: nothing here talks to a node.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nem2_sdk::account::NetworkType;

/// Offline NEM2 toolbox.
///
/// Generates keys, derives addresses and identifiers, signs transfers, and
/// decodes transaction JSON returned by a node.
#[derive(Parser, Debug)]
#[command(
    name = "nem2",
    about = "Offline NEM2 keys, identifiers and transactions",
    version,
    propagate_version = true
)]
pub struct Nem2Cli {
    /// Network the keys and transactions belong to.
    #[arg(long, short = 'n', global = true, env = "NEM2_NETWORK", default_value = "mijin-test")]
    pub network: NetworkType,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "NEM2_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `nem2` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh account and print its keys and address.
    Keygen,
    /// Derive the address of a public key.
    Address(AddressArgs),
    /// Derive the ids of every level of a namespace name.
    NamespaceId(NamespaceIdArgs),
    /// Derive a mosaic id from its namespace and name.
    MosaicId(MosaicIdArgs),
    /// Build and sign a transfer, printing the payload and hash.
    SignTransfer(SignTransferArgs),
    /// Decode node transaction JSON into its typed form.
    Decode(DecodeArgs),
}

/// Arguments for the `address` subcommand.
#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// Hex-encoded 32-byte public key.
    pub public_key: String,
}

/// Arguments for the `namespace-id` subcommand.
#[derive(Parser, Debug)]
pub struct NamespaceIdArgs {
    /// Dot-separated namespace name, e.g. `nem.subnem`.
    pub name: String,
}

/// Arguments for the `mosaic-id` subcommand.
#[derive(Parser, Debug)]
pub struct MosaicIdArgs {
    /// Full name of the owning namespace.
    pub namespace: String,
    /// Mosaic name within the namespace.
    pub mosaic: String,
}

/// Arguments for the `sign-transfer` subcommand.
#[derive(Parser, Debug)]
pub struct SignTransferArgs {
    /// Hex-encoded private key of the sender.
    ///
    /// **Prefer the environment variable** so the key stays out of shell history.
    #[arg(long, env = "NEM2_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Recipient address, plain or pretty.
    #[arg(long, short = 'r')]
    pub recipient: String,

    /// Amount of xem in micro units.
    #[arg(long, short = 'a')]
    pub amount: u64,

    /// Plain text message.
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Maximum fee.
    #[arg(long, default_value_t = 0)]
    pub fee: u64,
}

/// Arguments for the `decode` subcommand.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// File holding the JSON; reads stdin when omitted.
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Nem2Cli::command().debug_assert();
    }

    #[test]
    fn network_defaults_and_parses() {
        let cli = Nem2Cli::try_parse_from(["nem2", "keygen"]).unwrap();
        assert_eq!(cli.network, NetworkType::MijinTest);

        let cli = Nem2Cli::try_parse_from(["nem2", "--network", "MAIN_NET", "keygen"]).unwrap();
        assert_eq!(cli.network, NetworkType::MainNet);

        assert!(Nem2Cli::try_parse_from(["nem2", "--network", "moon", "keygen"]).is_err());
    }

    #[test]
    fn mosaic_id_takes_two_names() {
        let cli = Nem2Cli::try_parse_from(["nem2", "mosaic-id", "nem", "xem"]).unwrap();
        match cli.command {
            Commands::MosaicId(args) => {
                assert_eq!(args.namespace, "nem");
                assert_eq!(args.mosaic, "xem");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
