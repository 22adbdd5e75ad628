use gloo_utils::format::JsValueSerdeExt;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use super::msg::{Coin, ExecuteMsg, FeeMode};
use super::network_config::ChainConfig;
use super::rpc_base::{ExecuteResult, RpcError, SigningClient};

/// Name of the page-provided bridge object wrapping the browser wallet and CosmJS
const BRIDGE_OBJECT: &str = "CosmWasmBridge";

#[derive(Debug, Clone)]
pub enum WalletError {
    NotInstalled,
    ConnectionFailed(String),
    JavaScriptError(String),
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::NotInstalled => write!(f, "No wallet extension found, please install Keplr"),
            WalletError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            WalletError::JavaScriptError(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

fn bridge_object() -> Result<JsValue, WalletError> {
    let window = window().ok_or(WalletError::JavaScriptError("No window object".to_string()))?;
    let bridge = js_sys::Reflect::get(&window, &JsValue::from_str(BRIDGE_OBJECT))
        .map_err(|e| WalletError::JavaScriptError(format!("Failed to get {}: {:?}", BRIDGE_OBJECT, e)))?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(WalletError::NotInstalled);
    }
    Ok(bridge)
}

fn bridge_function(name: &str) -> Result<js_sys::Function, WalletError> {
    let bridge = bridge_object()?;
    let func = js_sys::Reflect::get(&bridge, &JsValue::from_str(name))
        .map_err(|e| WalletError::JavaScriptError(format!("Failed to get {} function: {:?}", name, e)))?;
    if !func.is_function() {
        return Err(WalletError::JavaScriptError(format!("{} is not a function", name)));
    }
    Ok(js_sys::Function::from(func))
}

fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Browser wallet reached through `window.CosmWasmBridge`.
///
/// The bridge owns the offline signer and the CosmJS signing client; this type
/// only marshals arguments across and awaits the returned promises.
#[derive(Debug, Clone, PartialEq)]
pub struct CosmWasmWallet {
    address: String,
}

impl CosmWasmWallet {
    /// Check if the wallet bridge and extension are present in the page
    pub fn is_installed() -> bool {
        bridge_function("isInstalled")
            .ok()
            .and_then(|func| func.call0(&JsValue::NULL).ok())
            .and_then(|result| result.as_bool())
            .unwrap_or(false)
    }

    /// Enable the chain in the wallet and return the connected account.
    /// Fees are paid at the configured gas price, in the configured denom.
    pub async fn connect(config: &ChainConfig) -> Result<Self, WalletError> {
        if !Self::is_installed() {
            return Err(WalletError::NotInstalled);
        }
        let func = bridge_function("connect")?;
        let promise = func
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(&config.chain_id),
                &JsValue::from_str(&config.rpc_endpoint),
                &JsValue::from_str(&config.gas_price()),
            )
            .map_err(|e| WalletError::ConnectionFailed(js_error_message(&e)))?;

        let result = JsFuture::from(Promise::from(promise)).await
            .map_err(|e| WalletError::ConnectionFailed(js_error_message(&e)))?;

        let address = result.as_string()
            .ok_or(WalletError::ConnectionFailed("Address is not a string".to_string()))?;
        log::info!("Wallet connected on {}: {}", config.chain_id, address);
        Ok(Self { address })
    }

    pub async fn disconnect() -> Result<(), WalletError> {
        let func = match bridge_function("disconnect") {
            Ok(func) => func,
            // nothing to tear down
            Err(_) => return Ok(()),
        };
        let promise = func.call0(&JsValue::NULL)
            .map_err(|e| WalletError::JavaScriptError(js_error_message(&e)))?;
        if promise.is_object() {
            JsFuture::from(Promise::from(promise)).await
                .map_err(|e| WalletError::JavaScriptError(js_error_message(&e)))?;
        }
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl SigningClient for CosmWasmWallet {
    async fn execute(
        &self,
        sender_address: &str,
        contract_address: &str,
        msg: &ExecuteMsg,
        fee: &FeeMode,
        funds: &[Coin],
    ) -> Result<ExecuteResult, RpcError> {
        let msg_json = serde_json::to_string(msg)
            .map_err(|e| RpcError::Other(format!("Failed to serialize message: {}", e)))?;
        let fee_json = fee.to_json_value().to_string();
        let funds_json = serde_json::to_string(funds)
            .map_err(|e| RpcError::Other(format!("Failed to serialize funds: {}", e)))?;

        log::debug!("Executing on {} as {}: {}", contract_address, sender_address, msg_json);

        let func = bridge_function("execute")
            .map_err(|e| RpcError::ConnectionFailed(e.to_string()))?;
        let args = js_sys::Array::of5(
            &JsValue::from_str(sender_address),
            &JsValue::from_str(contract_address),
            &JsValue::from_str(&msg_json),
            &JsValue::from_str(&fee_json),
            &JsValue::from_str(&funds_json),
        );
        let promise = func.apply(&JsValue::NULL, &args)
            .map_err(|e| RpcError::TransactionFailed(js_error_message(&e)))?;

        let result = JsFuture::from(Promise::from(promise)).await
            .map_err(|e| {
                let message = js_error_message(&e);
                log::error!("Execute rejected: {}", message);
                RpcError::TransactionFailed(message)
            })?;

        result.into_serde::<ExecuteResult>()
            .map_err(|e| RpcError::InvalidResponse(format!("Unexpected execute result: {}", e)))
    }
}
