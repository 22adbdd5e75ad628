use std::fmt;

use crate::core::network_config::{current_chain_config, ChainConfig};
use crate::core::rpc_base::RpcConnection;
use crate::core::wallet::{CosmWasmWallet, WalletError};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    NotConnected,
    Wallet(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotConnected => write!(f, "Wallet not connected"),
            SessionError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
        }
    }
}

impl From<WalletError> for SessionError {
    fn from(e: WalletError) -> Self {
        SessionError::Wallet(e.to_string())
    }
}

/// Connected wallet plus the chain configuration it was connected against
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    config: ChainConfig,
    wallet: Option<CosmWasmWallet>,
}

impl Session {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            wallet: None,
        }
    }

    pub async fn connect(&mut self) -> Result<String, SessionError> {
        let wallet = CosmWasmWallet::connect(&self.config).await?;
        let address = wallet.address().to_string();
        self.wallet = Some(wallet);
        Ok(address)
    }

    pub fn logout(&mut self) {
        if let Some(wallet) = self.wallet.take() {
            log::info!("Disconnected wallet {}", wallet.address());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Empty string when no wallet is connected
    pub fn wallet_address(&self) -> String {
        self.wallet
            .as_ref()
            .map(|w| w.address().to_string())
            .unwrap_or_default()
    }

    pub fn signing_client(&self) -> Result<CosmWasmWallet, SessionError> {
        self.wallet.clone().ok_or(SessionError::NotConnected)
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Re-read stored settings, e.g. after the settings page saved
    pub fn reload_config(&mut self) {
        self.config = current_chain_config();
    }

    pub fn query_client(&self) -> RpcConnection {
        RpcConnection::with_endpoint(&self.config.rest_endpoint)
    }
}
