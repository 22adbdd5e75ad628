pub mod wallet_loader;
pub mod mint_page;
pub mod nfts_page;
pub mod settings_page;

pub use mint_page::MintPage;
pub use nfts_page::NftsPage;
pub use settings_page::SettingsPage;
