//! Contains the command line interface for the application.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cosmos_evm_address::Address;
use cosmos_evm_feemarket::U256;

/// The command line interface for the harness.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct HarnessCli {
    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bech32 prefix of account addresses. Overrides the config file.
    #[arg(long, global = true, env = "ADDRESS_PREFIX")]
    pub prefix: Option<String>,

    /// Wei per unit of the chain denomination. Overrides the config file.
    #[arg(long, global = true, env = "WEI_PER_DENOM")]
    pub wei_per_denom: Option<u64>,

    /// Log level. Overrides the config file.
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The subcommands for the harness.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Encode a hex address as bech32.
    Bech32 {
        /// `0x` prefixed hex address.
        address: Address,
    },

    /// Decode a bech32 address to its checksummed hex form.
    Eth {
        /// Bech32 address.
        address: String,
    },

    /// Derive a module account address.
    ModuleAddress {
        /// Module name, e.g. `gov`.
        name: String,
        /// Derivation keys, applied in order.
        #[arg(long = "key")]
        keys: Vec<String>,
    },

    /// Derive the isolated address the IBC callbacks middleware uses for a
    /// remote sender.
    IsolatedAddress {
        /// Local channel identifier.
        channel_id: String,
        /// Sender address on the counterparty.
        sender: String,
    },

    /// Derive the ERC-20 contract address of a native denomination.
    Erc20Address {
        /// Denomination, e.g. `ibc/27394F...`.
        denom: String,
    },

    /// Hash a denomination trace path.
    DenomHash {
        /// Full trace path, e.g. `transfer/channel-0/uatom`.
        path: String,
    },

    /// Derive the ICS-20 escrow account of a channel.
    EscrowAddress {
        /// Channel identifier.
        channel: String,
        /// Port identifier.
        #[arg(long, default_value = "transfer")]
        port: String,
    },

    /// Derive the ERC-20 address of an IBC voucher denomination.
    IbcDenomAddress {
        /// `ibc/<HASH>` denomination.
        denom: String,
    },

    /// Compute the base fee of the next block.
    BaseFee(BaseFeeCmd),

    /// Compute the address of a contract deployed with CREATE.
    ContractAddress {
        /// Deployer address.
        sender: Address,
        /// Deployer nonce at deployment.
        nonce: u64,
    },
}

/// The arguments for the `base-fee` subcommand.
#[derive(Clone, Debug, Parser)]
pub struct BaseFeeCmd {
    /// Base fee of the parent block, in wei.
    pub parent_fee: U256,
    /// Gas limit of the parent block.
    pub gas_limit: u64,
    /// Gas used by the parent block.
    pub gas_used: u64,

    /// Fee market params as returned by the chain's params query. Takes
    /// precedence over the config file.
    #[arg(long)]
    pub chain_params: Option<PathBuf>,

    /// Overrides `base_fee_change_denominator`.
    #[arg(long)]
    pub base_fee_change_denominator: Option<u32>,

    /// Overrides `elasticity_multiplier`.
    #[arg(long)]
    pub elasticity_multiplier: Option<u32>,

    /// Overrides `min_gas_price`, in wei.
    #[arg(long)]
    pub min_gas_price: Option<U256>,
}
