use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

use super::settings::{self, UserSettings};

/// Network environment enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    /// Juno testnet (uni-6)
    Testnet,
    /// Juno mainnet (juno-1)
    Mainnet,
}

impl NetworkType {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "testnet",
            NetworkType::Mainnet => "mainnet",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "Testnet",
            NetworkType::Mainnet => "Mainnet",
        }
    }

    /// Parse a network name, anything unrecognised falls back to testnet
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "juno-1" => NetworkType::Mainnet,
            _ => NetworkType::Testnet,
        }
    }
}

/// Static chain parameters for one network
#[derive(Debug, Clone)]
pub struct NetworkDefaults {
    pub chain_id: &'static str,
    pub chain_name: &'static str,
    pub rpc_endpoint: &'static str,
    pub rest_endpoint: &'static str,
    /// Native fee and staking denom
    pub staking_denom: &'static str,
    /// Minimum gas price, in `staking_denom` per gas unit
    pub gas_price_amount: &'static str,
}

impl NetworkDefaults {
    const TESTNET: NetworkDefaults = NetworkDefaults {
        chain_id: "uni-6",
        chain_name: "Juno Testnet",
        rpc_endpoint: "https://juno-testnet-rpc.polkachu.com",
        rest_endpoint: "https://juno-testnet-api.polkachu.com",
        staking_denom: "ujunox",
        gas_price_amount: "0.075",
    };

    const MAINNET: NetworkDefaults = NetworkDefaults {
        chain_id: "juno-1",
        chain_name: "Juno",
        rpc_endpoint: "https://juno-rpc.polkachu.com",
        rest_endpoint: "https://juno-api.polkachu.com",
        staking_denom: "ujuno",
        gas_price_amount: "0.075",
    };

    pub fn for_network(network: NetworkType) -> &'static NetworkDefaults {
        match network {
            NetworkType::Testnet => &Self::TESTNET,
            NetworkType::Mainnet => &Self::MAINNET,
        }
    }
}

/// Build-time overrides, each one optional
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub network: Option<&'static str>,
    pub contract_address: Option<&'static str>,
    pub validator_address: Option<&'static str>,
    pub rpc_endpoint: Option<&'static str>,
    pub rest_endpoint: Option<&'static str>,
    pub chain_name: Option<&'static str>,
    pub staking_denom: Option<&'static str>,
    pub gas_price_amount: Option<&'static str>,
}

impl EnvOverrides {
    fn from_build_env() -> Self {
        Self {
            network: option_env!("NFT_MINTER_NETWORK"),
            contract_address: option_env!("NFT_MINTER_CONTRACT_ADDRESS"),
            validator_address: option_env!("NFT_MINTER_VALIDATOR_ADDRESS"),
            rpc_endpoint: option_env!("NFT_MINTER_RPC_ENDPOINT"),
            rest_endpoint: option_env!("NFT_MINTER_REST_ENDPOINT"),
            chain_name: option_env!("NFT_MINTER_CHAIN_NAME"),
            staking_denom: option_env!("NFT_MINTER_STAKING_DENOM"),
            gas_price_amount: option_env!("NFT_MINTER_GAS_PRICE"),
        }
    }
}

/// Resolved chain configuration used by the clients and pages
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub network_type: NetworkType,
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_endpoint: String,
    pub rest_endpoint: String,
    pub staking_denom: String,
    pub gas_price_amount: String,
    pub contract_address: String,
    pub validator_address: String,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ChainConfig {
    /// Merge build-time overrides on top of the static network defaults
    pub fn resolve(overrides: &EnvOverrides) -> Self {
        let network_type = overrides.network
            .map(NetworkType::parse)
            .unwrap_or(NetworkType::Testnet);
        let defaults = NetworkDefaults::for_network(network_type);

        Self {
            network_type,
            chain_id: defaults.chain_id.to_string(),
            chain_name: non_blank(overrides.chain_name)
                .unwrap_or_else(|| defaults.chain_name.to_string()),
            rpc_endpoint: non_blank(overrides.rpc_endpoint)
                .unwrap_or_else(|| defaults.rpc_endpoint.to_string()),
            rest_endpoint: non_blank(overrides.rest_endpoint)
                .unwrap_or_else(|| defaults.rest_endpoint.to_string()),
            staking_denom: non_blank(overrides.staking_denom)
                .unwrap_or_else(|| defaults.staking_denom.to_string()),
            gas_price_amount: non_blank(overrides.gas_price_amount)
                .unwrap_or_else(|| defaults.gas_price_amount.to_string()),
            contract_address: non_blank(overrides.contract_address).unwrap_or_default(),
            validator_address: non_blank(overrides.validator_address).unwrap_or_default(),
        }
    }

    /// Apply user settings (custom REST endpoint, custom contract)
    pub fn with_settings(&self, settings: &UserSettings) -> Self {
        let mut config = self.clone();
        if let Some(endpoint) = settings.custom_rest_endpoint() {
            config.rest_endpoint = endpoint;
        }
        if let Some(contract) = settings.custom_contract_address() {
            config.contract_address = contract;
        }
        config
    }

    /// Gas price in CosmJS notation, e.g. `0.075ujunox`
    pub fn gas_price(&self) -> String {
        format!("{}{}", self.gas_price_amount, self.staking_denom)
    }

    /// Address used as the sender of execute calls
    pub fn sender_for(&self, wallet_address: &str) -> String {
        if self.validator_address.is_empty() {
            wallet_address.to_string()
        } else {
            self.validator_address.clone()
        }
    }
}

/// Configuration resolved once from the build environment
static BASE_CONFIG: Lazy<ChainConfig> = Lazy::new(|| {
    let config = ChainConfig::resolve(&EnvOverrides::from_build_env());
    log::info!("===========================================");
    log::info!("Network: {} ({})", config.network_type.display_name(), config.chain_id);
    log::info!("REST: {}", config.rest_endpoint);
    log::info!("Gas price: {}", config.gas_price());
    if config.contract_address.is_empty() {
        log::warn!("No contract address configured, set one on the settings page");
    }
    log::info!("===========================================");
    config
});

// ============ Public API ============

/// Configuration from the build environment only
pub fn base_chain_config() -> &'static ChainConfig {
    &BASE_CONFIG
}

/// Configuration with the user's stored settings applied
pub fn current_chain_config() -> ChainConfig {
    let base = base_chain_config();
    match settings::load_settings_for_network(base.network_type) {
        Some(settings) => base.with_settings(&settings),
        None => base.clone(),
    }
}
