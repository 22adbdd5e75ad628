use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use gloo_utils::format::JsValueSerdeExt;
use serde::{Deserialize, de::DeserializeOwned};
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::msg::{Coin, ExecuteMsg, FeeMode, QueryMsg};

// error type
#[derive(Debug, Clone, PartialEq)]
pub enum RpcError {
    ConnectionFailed(String),
    InvalidAddress(String),
    TransactionFailed(String),
    QueryFailed(String),
    InvalidResponse(String),
    Other(String),
}

// implement the display for the rpc error
impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            RpcError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            RpcError::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            RpcError::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
            RpcError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            RpcError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Result of a broadcast execute
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecuteResult {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(rename = "gasUsed", default)]
    pub gas_used: Option<u64>,
}

/// Read-only chain access
#[allow(async_fn_in_trait)]
pub trait ChainQuery {
    async fn query_contract_smart<R: DeserializeOwned>(
        &self,
        contract_address: &str,
        query: &QueryMsg,
    ) -> Result<R, RpcError>;

    async fn get_balance(&self, address: &str, denom: &str) -> Result<Coin, RpcError>;
}

/// Wallet-backed client that signs and broadcasts
#[allow(async_fn_in_trait)]
pub trait SigningClient {
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &ExecuteMsg,
        fee: &FeeMode,
        funds: &[Coin],
    ) -> Result<ExecuteResult, RpcError>;
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: Option<Coin>,
}

#[derive(Deserialize)]
struct SmartQueryResponse<T> {
    data: T,
}

#[derive(Deserialize)]
struct RestErrorBody {
    #[serde(default)]
    message: String,
}

/// Percent-encode the characters of standard base64 that are not path-safe
fn encode_path_segment(segment: &str) -> String {
    segment
        .replace('+', "%2B")
        .replace('/', "%2F")
        .replace('=', "%3D")
}

/// Path of a CosmWasm smart query on the REST gateway
pub fn smart_query_path(contract_address: &str, query: &QueryMsg) -> Result<String, RpcError> {
    if contract_address.trim().is_empty() {
        return Err(RpcError::InvalidAddress("contract address is not configured".to_string()));
    }
    let query_json = serde_json::to_vec(query)
        .map_err(|e| RpcError::Other(format!("Failed to serialize query: {}", e)))?;
    let encoded = BASE64.encode(query_json);
    Ok(format!(
        "/cosmwasm/wasm/v1/contract/{}/smart/{}",
        contract_address.trim(),
        encode_path_segment(&encoded)
    ))
}

/// Path of a single-denom bank balance query
pub fn balance_path(address: &str, denom: &str) -> Result<String, RpcError> {
    if address.trim().is_empty() {
        return Err(RpcError::InvalidAddress("wallet address is empty".to_string()));
    }
    Ok(format!(
        "/cosmos/bank/v1beta1/balances/{}/by_denom?denom={}",
        address.trim(),
        encode_path_segment(denom)
    ))
}

/// REST (LCD) connection to a chain node
#[derive(Debug, Clone)]
pub struct RpcConnection {
    endpoint: String,
}

impl RpcConnection {
    pub fn with_endpoint(endpoint: &str) -> Self {
        log::debug!("Selected REST endpoint: {}", endpoint);
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, RpcError> {
        let url = format!("{}{}", self.endpoint, path);
        log::debug!("REST GET {}", url);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| {
                log::error!("Failed to create HTTP request: {:?}", e);
                RpcError::ConnectionFailed(format!("Failed to create request: {:?}", e))
            })?;

        request.headers().set("Accept", "application/json")
            .map_err(|e| RpcError::ConnectionFailed(format!("Failed to set headers: {:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| RpcError::ConnectionFailed("No window object available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                log::error!("HTTP request failed: {:?}", e);
                RpcError::ConnectionFailed(format!("Failed to send request: {:?}", e))
            })?;

        let resp: Response = resp_value.dyn_into()
            .map_err(|e| RpcError::Other(format!("Failed to convert response: {:?}", e)))?;

        let status = resp.status();
        let status_text = resp.status_text();
        let json = JsFuture::from(resp.json().map_err(|e| {
            RpcError::InvalidResponse(format!("Failed to get JSON: {:?}", e))
        })?)
            .await
            .map_err(|e| RpcError::InvalidResponse(format!("Failed to parse JSON: {:?}", e)));

        if !resp.ok() {
            // gateway errors carry {"code": .., "message": ..}
            let message = json.ok()
                .and_then(|body| body.into_serde::<RestErrorBody>().ok())
                .map(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("HTTP {} {}", status, status_text));
            log::error!("REST error: status={}, message={}", status, message);
            return Err(RpcError::QueryFailed(message));
        }

        json?.into_serde()
            .map_err(|e| RpcError::InvalidResponse(format!("Failed to parse response as JSON: {:?}", e)))
    }

    /// Raw account record, as returned by the auth module
    pub async fn get_account(&self, address: &str) -> Result<serde_json::Value, RpcError> {
        if address.trim().is_empty() {
            return Err(RpcError::InvalidAddress("account address is empty".to_string()));
        }
        let value = self.get_json(&format!("/cosmos/auth/v1beta1/accounts/{}", address.trim())).await?;
        value.get("account")
            .cloned()
            .ok_or_else(|| RpcError::InvalidResponse("missing account field".to_string()))
    }
}

impl ChainQuery for RpcConnection {
    async fn query_contract_smart<R: DeserializeOwned>(
        &self,
        contract_address: &str,
        query: &QueryMsg,
    ) -> Result<R, RpcError> {
        let path = smart_query_path(contract_address, query)?;
        let value = self.get_json(&path).await?;
        let response: SmartQueryResponse<R> = serde_json::from_value(value)
            .map_err(|e| RpcError::InvalidResponse(format!("Unexpected query response: {}", e)))?;
        Ok(response.data)
    }

    async fn get_balance(&self, address: &str, denom: &str) -> Result<Coin, RpcError> {
        let path = balance_path(address, denom)?;
        let value = self.get_json(&path).await?;
        let response: BalanceResponse = serde_json::from_value(value)
            .map_err(|e| RpcError::InvalidResponse(format!("Unexpected balance response: {}", e)))?;
        // an account that never held the denom has no balance entry
        Ok(response.balance.unwrap_or_else(|| Coin::new("0", denom)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_query_path_encodes_query() {
        let path = smart_query_path("juno1contract", &QueryMsg::AllTokens { start_after: None, limit: None }).unwrap();
        // base64 of {"all_tokens":{}}
        assert_eq!(
            path,
            "/cosmwasm/wasm/v1/contract/juno1contract/smart/eyJhbGxfdG9rZW5zIjp7fX0%3D"
        );
    }

    #[test]
    fn test_smart_query_path_requires_contract() {
        let err = smart_query_path("  ", &QueryMsg::AllTokens { start_after: None, limit: None }).unwrap_err();
        assert!(matches!(err, RpcError::InvalidAddress(_)));
    }

    #[test]
    fn test_balance_path() {
        assert_eq!(
            balance_path("juno1wallet", "ujuno").unwrap(),
            "/cosmos/bank/v1beta1/balances/juno1wallet/by_denom?denom=ujuno"
        );
        assert_eq!(
            balance_path("juno1wallet", "ibc/ABC").unwrap(),
            "/cosmos/bank/v1beta1/balances/juno1wallet/by_denom?denom=ibc%2FABC"
        );
        assert!(balance_path("", "ujuno").is_err());
    }

    #[test]
    fn test_balance_response_deserialize() {
        let json = r#"{"balance":{"denom":"ujuno","amount":"1000000"}}"#;
        let response: BalanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.balance, Some(Coin::new("1000000", "ujuno")));
    }

    #[test]
    fn test_execute_result_deserialize() {
        let json = r#"{"transactionHash":"ABCD","height":123,"gasUsed":90000,"logs":[]}"#;
        let result: ExecuteResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.transaction_hash, "ABCD");
        assert_eq!(result.height, Some(123));
        assert_eq!(result.gas_used, Some(90000));
    }

    #[test]
    fn test_error_display() {
        let err = RpcError::QueryFailed("contract not found".to_string());
        assert_eq!(err.to_string(), "Query failed: contract not found");
    }
}
