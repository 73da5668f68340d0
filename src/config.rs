use alloy::{
    primitives::Address, signers::local::PrivateKeySigner, transports::http::reqwest::Url,
};
use clap::{Parser, ValueEnum};

use crate::{
    chain::{Chain, MEKONG_RPC_URL},
    error::InvokeError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Delegate an account to a batch-call contract with EIP-7702 and execute a
/// batch of transfers through it.
#[derive(Parser)]
#[command(version, about)]
pub struct Config {
    /// Hex private key of the account to delegate.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    /// Delegation contract whose code the account adopts.
    #[arg(long, env = "DELEGATION_CONTRACT")]
    pub contract: Address,

    #[arg(long, env = "RPC_URL", default_value = MEKONG_RPC_URL)]
    pub rpc_url: Url,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Config {
    pub fn signer(&self) -> Result<PrivateKeySigner, InvokeError> {
        self.private_key.parse().map_err(InvokeError::Key)
    }

    pub fn chain(&self) -> Chain {
        Chain::mekong(self.rpc_url.clone())
    }
}
