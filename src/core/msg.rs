//! cw721-metadata contract messages and the cosmos wire types around them.

use serde::{Serialize, Deserialize};
use serde_json::json;

use super::constants::FIRST_TOKEN_ID;

/// Native coin in cosmos wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Decimal string, base units
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Fee selection passed to the signing client
#[derive(Debug, Clone, PartialEq)]
pub enum FeeMode {
    /// Simulate and let the client pick gas and fee
    Auto,
}

impl FeeMode {
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FeeMode::Auto => json!("auto"),
        }
    }
}

/// On-chain token metadata (the cw721 `extension`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub image: Option<String>,
    pub image_data: Option<String>,
    pub external_url: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub background_color: Option<String>,
    pub animation_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintMsg {
    pub token_id: String,
    pub owner: String,
    pub token_uri: Option<String>,
    pub extension: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Mint(MintMsg),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    AllTokens {
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    Tokens {
        owner: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    NftInfo {
        token_id: String,
    },
}

impl QueryMsg {
    /// One page of `all_tokens`, continuing after `start_after`
    pub fn all_tokens_page(start_after: Option<String>, limit: u32) -> Self {
        QueryMsg::AllTokens { start_after, limit: Some(limit) }
    }

    pub fn tokens_of(owner: &str) -> Self {
        QueryMsg::Tokens {
            owner: owner.to_string(),
            start_after: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NftInfoResponse {
    #[serde(default)]
    pub token_uri: Option<String>,
    #[serde(default)]
    pub extension: Option<Metadata>,
}

/// Candidate id for the next mint: highest numeric id in the list plus one.
///
/// The list must hold every token of the contract, not a single `all_tokens` page.
///
/// Advisory only. A concurrent mint between this read and the submit makes the
/// candidate collide, and the contract will reject it.
pub fn next_token_id(tokens: &[String]) -> Option<String> {
    if tokens.is_empty() {
        return Some(FIRST_TOKEN_ID.to_string());
    }

    tokens
        .iter()
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .and_then(|highest| highest.checked_add(1))
        .map(|next| next.to_string())
}
