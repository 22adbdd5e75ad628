pub mod constants;
pub mod conversion;
pub mod msg;
pub mod network_config;
pub mod settings;
pub mod rpc_base;
pub mod wallet;
pub mod session;
pub mod mint;
pub mod nfts;
