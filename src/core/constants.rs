/// Shared constants used across the chain client, wallet bridge and pages.

// ============================================================================
// Denomination
// ============================================================================

/// Number of micro units in one whole unit (10^6)
pub const MICRO_DENOM_SCALE: f64 = 1_000_000.0;

// ============================================================================
// Minting
// ============================================================================

/// Whole denom units attached as funds by the paid mint variant
pub const PAID_MINT_PRICE: f64 = 10.0;

/// Token id used when the contract holds no tokens yet
pub const FIRST_TOKEN_ID: u64 = 1;

/// Page size requested from `all_tokens`
pub const TOKEN_PAGE_LIMIT: u32 = 30;

/// Prefix shown in front of every surfaced error message
pub const ERROR_PREFIX: &str = "Error! ";

// ============================================================================
// Storage
// ============================================================================

/// LocalStorage key prefix for persisted user settings
pub const SETTINGS_STORAGE_PREFIX: &str = "nft-minter.settings.";
