//! Mint page controller: form state, the balance/token-id loader and the submit handler.
//!
//! The page keeps a [`MintState`] in a signal and drives it through
//! `begin_load`/`apply_*` and `begin_submit`/`finish_submit`; the chain calls in
//! between go through [`load_chain_state`] and [`submit_mint`], which only see
//! the [`ChainQuery`] and [`SigningClient`] traits.

use std::fmt;

use super::constants::{ERROR_PREFIX, PAID_MINT_PRICE, TOKEN_PAGE_LIMIT};
use super::conversion::{convert_denom_to_micro_denom, format_balance};
use super::msg::{next_token_id, Coin, ExecuteMsg, FeeMode, Metadata, MintMsg, QueryMsg, TokensResponse};
use super::network_config::ChainConfig;
use super::rpc_base::{ChainQuery, ExecuteResult, RpcError, SigningClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintVariant {
    /// Token id derived from the contract, metadata stored on chain
    OnChainMetadata,
    /// Like `OnChainMetadata`, with the mint price attached as funds
    PaidMint,
    /// Token id typed by the user, no token list query
    ManualTokenId,
}

impl MintVariant {
    pub fn all() -> [MintVariant; 3] {
        [MintVariant::OnChainMetadata, MintVariant::PaidMint, MintVariant::ManualTokenId]
    }

    pub fn derives_token_id(&self) -> bool {
        !matches!(self, MintVariant::ManualTokenId)
    }

    pub fn fee(&self) -> FeeMode {
        FeeMode::Auto
    }

    pub fn funds(&self, denom: &str) -> Vec<Coin> {
        match self {
            MintVariant::PaidMint => vec![Coin::new(convert_denom_to_micro_denom(PAID_MINT_PRICE), denom)],
            _ => Vec::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MintVariant::OnChainMetadata => "Mint an NFT (with metadata stored on chain)",
            MintVariant::PaidMint => "Mint an NFT (paid mint)",
            MintVariant::ManualTokenId => "Mint an NFT (choose your token id)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MintError {
    MissingTokenUri,
    MissingTokenId,
    MissingContract,
    NotConnected,
}

impl fmt::Display for MintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MintError::MissingTokenUri => write!(f, "Token URI is required"),
            MintError::MissingTokenId => write!(f, "Token ID is not available yet"),
            MintError::MissingContract => write!(f, "No contract address configured"),
            MintError::NotConnected => write!(f, "Wallet not connected"),
        }
    }
}

/// Values of the mint form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub token_uri: String,
    pub youtube_url: String,
    pub animation_url: String,
    pub background_color: String,
    pub description: String,
    pub external_url: String,
    /// Name of the selected image file
    pub image: Option<String>,
    pub image_data: String,
    pub name: String,
    pub token_id: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl FormState {
    pub fn to_metadata(&self) -> Metadata {
        Metadata {
            image: self.image.as_deref().and_then(optional),
            image_data: optional(&self.image_data),
            external_url: optional(&self.external_url),
            description: optional(&self.description),
            name: optional(&self.name),
            background_color: optional(&self.background_color),
            animation_url: optional(&self.animation_url),
            youtube_url: optional(&self.youtube_url),
        }
    }

    pub fn to_mint_msg(&self, owner: &str) -> Result<ExecuteMsg, MintError> {
        let token_uri = optional(&self.token_uri).ok_or(MintError::MissingTokenUri)?;
        let token_id = optional(&self.token_id).ok_or(MintError::MissingTokenId)?;
        Ok(ExecuteMsg::Mint(MintMsg {
            token_id,
            owner: owner.to_string(),
            token_uri: Some(token_uri),
            extension: self.to_metadata(),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MintStatus {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

/// Identifies one run of the loader; results from older runs are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Everything one execute call needs
#[derive(Debug, Clone, PartialEq)]
pub struct MintRequest {
    pub sender: String,
    pub contract_address: String,
    pub msg: ExecuteMsg,
    pub fee: FeeMode,
    pub funds: Vec<Coin>,
}

/// Inputs of one loader run
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub wallet_address: String,
    pub contract_address: String,
    pub denom: String,
    pub derive_token_id: bool,
}

pub struct LoadOutcome {
    pub balance: Result<Coin, RpcError>,
    /// `None` when the token list was not queried
    pub tokens: Option<Result<TokensResponse, RpcError>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MintState {
    pub variant: MintVariant,
    pub form: FormState,
    /// Submit lifecycle only; loader failures go to `load_error`
    pub status: MintStatus,
    pub balance: String,
    load_error: Option<String>,
    load_generation: u64,
    refresh_count: u64,
}

impl MintState {
    pub fn new(variant: MintVariant) -> Self {
        Self {
            variant,
            form: FormState::default(),
            status: MintStatus::Idle,
            balance: String::new(),
            load_error: None,
            load_generation: 0,
            refresh_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == MintStatus::Loading
    }

    /// Bumped after every successful mint so the loader runs again
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            MintStatus::Error(msg) => Some(msg.as_str()),
            _ => self.load_error.as_deref(),
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.status {
            MintStatus::Success(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    fn set_error(&mut self, message: impl fmt::Display) {
        self.status = MintStatus::Error(format!("{}{}", ERROR_PREFIX, message));
    }

    fn set_load_error(&mut self, message: impl fmt::Display) {
        self.load_error = Some(format!("{}{}", ERROR_PREFIX, message));
    }

    /// Starts a loader run. A submit in flight keeps its `Loading` status.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.load_error = None;
        if matches!(self.status, MintStatus::Error(_)) {
            self.status = MintStatus::Idle;
        }
        LoadTicket(self.load_generation)
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_generation
    }

    /// Returns false when the result belongs to a superseded load
    pub fn apply_balance(&mut self, ticket: LoadTicket, result: Result<Coin, RpcError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping stale balance response (load {})", ticket.0);
            return false;
        }
        match result {
            Ok(coin) => self.balance = format_balance(&coin),
            Err(e) => {
                log::error!("Error getting balance: {}", e);
                self.set_load_error(e);
            }
        }
        true
    }

    pub fn apply_token_list(&mut self, ticket: LoadTicket, result: Result<TokensResponse, RpcError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Dropping stale token list response (load {})", ticket.0);
            return false;
        }
        match result {
            Ok(response) => match next_token_id(&response.tokens) {
                Some(token_id) => {
                    log::info!("Next token id: {}", token_id);
                    self.form.token_id = token_id;
                }
                None => log::warn!("Could not derive a token id from {:?}", response.tokens),
            },
            Err(e) => {
                log::error!("Error querying all tokens: {}", e);
                self.set_load_error(e);
            }
        }
        true
    }

    pub fn apply_load(&mut self, ticket: LoadTicket, outcome: LoadOutcome) -> bool {
        let current = self.apply_balance(ticket, outcome.balance);
        if let Some(tokens) = outcome.tokens {
            self.apply_token_list(ticket, tokens);
        }
        current
    }

    /// Validate the form and enter the loading state
    pub fn begin_submit(&mut self, config: &ChainConfig, wallet_address: &str) -> Result<MintRequest, MintError> {
        let request = self.build_request(config, wallet_address);
        match &request {
            Ok(_) => self.status = MintStatus::Loading,
            Err(e) => self.set_error(e),
        }
        request
    }

    fn build_request(&self, config: &ChainConfig, wallet_address: &str) -> Result<MintRequest, MintError> {
        if wallet_address.is_empty() {
            return Err(MintError::NotConnected);
        }
        if config.contract_address.is_empty() {
            return Err(MintError::MissingContract);
        }
        let msg = self.form.to_mint_msg(wallet_address)?;
        Ok(MintRequest {
            sender: config.sender_for(wallet_address),
            contract_address: config.contract_address.clone(),
            msg,
            fee: self.variant.fee(),
            funds: self.variant.funds(&config.staking_denom),
        })
    }

    pub fn finish_submit(&mut self, result: Result<ExecuteResult, RpcError>) {
        match result {
            Ok(resp) => {
                log::info!(
                    "Mint succeeded: {} (height {:?}, gas used {:?})",
                    resp.transaction_hash, resp.height, resp.gas_used
                );
                self.status = MintStatus::Success(format!(
                    "Minted token {} (tx {})",
                    self.form.token_id, resp.transaction_hash
                ));
                self.refresh_count += 1;
            }
            Err(e) => {
                log::error!("Error executing mint: {}", e);
                self.set_error(e);
            }
        }
    }
}

/// Every token id of the contract, walking `all_tokens` page by page
async fn query_all_token_ids<Q: ChainQuery>(client: &Q, contract_address: &str) -> Result<TokensResponse, RpcError> {
    let mut tokens: Vec<String> = Vec::new();
    loop {
        let start_after = tokens.last().cloned();
        let query = QueryMsg::all_tokens_page(start_after.clone(), TOKEN_PAGE_LIMIT);
        let page: TokensResponse = client.query_contract_smart(contract_address, &query).await?;

        // stop on an empty page, or one that did not move past the cursor
        let exhausted = match page.tokens.last() {
            None => true,
            Some(last) => start_after.as_ref() == Some(last),
        };
        if exhausted {
            break;
        }
        tokens.extend(page.tokens);
    }
    log::debug!("Fetched {} token ids from {}", tokens.len(), contract_address);
    Ok(TokensResponse { tokens })
}

/// Balance query, plus the token list query when the variant derives ids
pub async fn load_chain_state<Q: ChainQuery>(client: &Q, request: &LoadRequest) -> LoadOutcome {
    let balance = client.get_balance(&request.wallet_address, &request.denom).await;
    let tokens = if request.derive_token_id {
        Some(query_all_token_ids(client, &request.contract_address).await)
    } else {
        None
    };
    LoadOutcome { balance, tokens }
}

pub async fn submit_mint<S: SigningClient>(client: &S, request: &MintRequest) -> Result<ExecuteResult, RpcError> {
    client
        .execute(
            &request.sender,
            &request.contract_address,
            &request.msg,
            &request.fee,
            &request.funds,
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network_config::EnvOverrides;
    use serde::de::DeserializeOwned;
    use std::cell::{Cell, RefCell};

    /// Serves `all_tokens` the way cw721 does: string order, paged after `start_after`
    struct MockChain {
        balance: Result<Coin, RpcError>,
        tokens: Result<Vec<String>, RpcError>,
        balance_calls: RefCell<Vec<String>>,
        token_calls: Cell<usize>,
    }

    impl MockChain {
        fn new(amount: &str, tokens: &[&str]) -> Self {
            let mut tokens: Vec<String> = tokens.iter().map(|id| id.to_string()).collect();
            tokens.sort();
            Self {
                balance: Ok(Coin::new(amount, "ujuno")),
                tokens: Ok(tokens),
                balance_calls: RefCell::new(Vec::new()),
                token_calls: Cell::new(0),
            }
        }

        fn with_minted(amount: &str, count: u64) -> Self {
            let ids: Vec<String> = (1..=count).map(|id| id.to_string()).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            Self::new(amount, &refs)
        }
    }

    impl ChainQuery for MockChain {
        async fn query_contract_smart<R: DeserializeOwned>(
            &self,
            _contract_address: &str,
            query: &QueryMsg,
        ) -> Result<R, RpcError> {
            self.token_calls.set(self.token_calls.get() + 1);
            let QueryMsg::AllTokens { start_after, limit } = query else {
                return Err(RpcError::QueryFailed("unexpected query".to_string()));
            };
            let page: Vec<String> = self.tokens.clone()?
                .into_iter()
                .filter(|id| start_after.as_ref().map_or(true, |after| id > after))
                .take(limit.unwrap_or(10) as usize)
                .collect();
            serde_json::from_value(serde_json::json!({ "tokens": page }))
                .map_err(|e| RpcError::InvalidResponse(e.to_string()))
        }

        async fn get_balance(&self, address: &str, _denom: &str) -> Result<Coin, RpcError> {
            self.balance_calls.borrow_mut().push(address.to_string());
            self.balance.clone()
        }
    }

    struct MockSigner {
        result: Result<ExecuteResult, RpcError>,
        executed: RefCell<Vec<MintRequest>>,
    }

    impl MockSigner {
        fn ok() -> Self {
            Self {
                result: Ok(ExecuteResult {
                    transaction_hash: "A1B2".to_string(),
                    height: Some(10),
                    gas_used: None,
                }),
                executed: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(RpcError::TransactionFailed(message.to_string())),
                executed: RefCell::new(Vec::new()),
            }
        }
    }

    impl SigningClient for MockSigner {
        async fn execute(
            &self,
            sender_address: &str,
            contract_address: &str,
            msg: &ExecuteMsg,
            fee: &FeeMode,
            funds: &[Coin],
        ) -> Result<ExecuteResult, RpcError> {
            self.executed.borrow_mut().push(MintRequest {
                sender: sender_address.to_string(),
                contract_address: contract_address.to_string(),
                msg: msg.clone(),
                fee: fee.clone(),
                funds: funds.to_vec(),
            });
            self.result.clone()
        }
    }

    fn test_config() -> ChainConfig {
        ChainConfig::resolve(&EnvOverrides {
            contract_address: Some("juno1contract"),
            ..Default::default()
        })
    }

    fn load_request(wallet: &str, derive: bool) -> LoadRequest {
        LoadRequest {
            wallet_address: wallet.to_string(),
            contract_address: "juno1contract".to_string(),
            denom: "ujuno".to_string(),
            derive_token_id: derive,
        }
    }

    fn filled_form() -> FormState {
        FormState {
            token_uri: "ipfs://token".to_string(),
            name: "Token".to_string(),
            token_id: "6".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_publishes_balance_and_next_token_id() {
        let chain = MockChain::new("1000000", &["5"]);
        let mut state = MintState::new(MintVariant::OnChainMetadata);

        let ticket = state.begin_load();
        let outcome = load_chain_state(&chain, &load_request("juno1wallet", true)).await;
        assert!(state.apply_load(ticket, outcome));

        assert_eq!(state.balance, "1 JUNO");
        assert_eq!(state.form.token_id, "6");
        assert_eq!(state.status, MintStatus::Idle);
    }

    #[tokio::test]
    async fn test_manual_variant_skips_token_list() {
        let chain = MockChain::new("1000000", &["5"]);
        let mut state = MintState::new(MintVariant::ManualTokenId);
        state.form.token_id = "42".to_string();

        let ticket = state.begin_load();
        let outcome = load_chain_state(&chain, &load_request("juno1wallet", false)).await;
        state.apply_load(ticket, outcome);

        assert_eq!(chain.token_calls.get(), 0);
        assert_eq!(state.form.token_id, "42");
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let mut chain = MockChain::new("0", &[]);
        chain.balance = Err(RpcError::ConnectionFailed("offline".to_string()));
        let mut state = MintState::new(MintVariant::OnChainMetadata);

        let ticket = state.begin_load();
        let outcome = load_chain_state(&chain, &load_request("juno1wallet", true)).await;
        state.apply_load(ticket, outcome);

        assert_eq!(state.error_message(), Some("Error! Connection failed: offline"));
        assert_eq!(state.form.token_id, "1");
    }

    #[tokio::test]
    async fn test_wallet_change_discards_stale_response() {
        let old_chain = MockChain::new("5000000", &["1"]);
        let new_chain = MockChain::new("1000000", &["9"]);
        let mut state = MintState::new(MintVariant::OnChainMetadata);

        let old_ticket = state.begin_load();
        let new_ticket = state.begin_load();

        let new_outcome = load_chain_state(&new_chain, &load_request("juno1new", true)).await;
        assert!(state.apply_load(new_ticket, new_outcome));

        // the old address's response arrives last
        let old_outcome = load_chain_state(&old_chain, &load_request("juno1old", true)).await;
        assert!(!state.apply_load(old_ticket, old_outcome));

        assert_eq!(new_chain.balance_calls.borrow().as_slice(), ["juno1new".to_string()]);
        // one page of ids, then the empty page that ends the walk
        assert_eq!(new_chain.token_calls.get(), 2);
        assert_eq!(old_chain.balance_calls.borrow().as_slice(), ["juno1old".to_string()]);
        assert_eq!(state.balance, "1 JUNO");
        assert_eq!(state.form.token_id, "10");
    }

    #[test]
    fn test_empty_token_uri_is_rejected() {
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = FormState { token_uri: "   ".to_string(), ..filled_form() };

        let result = state.begin_submit(&test_config(), "juno1wallet");

        assert_eq!(result, Err(MintError::MissingTokenUri));
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), Some("Error! Token URI is required"));
    }

    #[test]
    fn test_submit_requires_wallet_and_contract() {
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = filled_form();
        assert_eq!(state.begin_submit(&test_config(), ""), Err(MintError::NotConnected));

        let config = ChainConfig::resolve(&EnvOverrides::default());
        assert_eq!(state.begin_submit(&config, "juno1wallet"), Err(MintError::MissingContract));
    }

    #[tokio::test]
    async fn test_successful_mint_triggers_refresh() {
        let signer = MockSigner::ok();
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = filled_form();

        let request = state.begin_submit(&test_config(), "juno1wallet").unwrap();
        assert!(state.is_loading());

        let result = submit_mint(&signer, &request).await;
        state.finish_submit(result);

        assert!(!state.is_loading());
        assert_eq!(state.refresh_count(), 1);
        assert!(state.success_message().unwrap().contains("A1B2"));

        let executed = signer.executed.borrow();
        let ExecuteMsg::Mint(msg) = &executed[0].msg;
        assert_eq!(msg.owner, "juno1wallet");
        assert_eq!(msg.token_id, "6");
        assert_eq!(msg.extension.name.as_deref(), Some("Token"));
        assert_eq!(msg.extension.description, None);
        assert_eq!(executed[0].fee, FeeMode::Auto);
        assert!(executed[0].funds.is_empty());
    }

    #[tokio::test]
    async fn test_failed_mint_keeps_form() {
        let signer = MockSigner::failing("token_id already claimed");
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = filled_form();

        let request = state.begin_submit(&test_config(), "juno1wallet").unwrap();
        state.finish_submit(submit_mint(&signer, &request).await);

        assert!(!state.is_loading());
        assert_eq!(state.refresh_count(), 0);
        assert_eq!(
            state.error_message(),
            Some("Error! Transaction failed: token_id already claimed")
        );
        assert_eq!(state.form, filled_form());
    }

    #[test]
    fn test_paid_mint_attaches_funds() {
        let mut state = MintState::new(MintVariant::PaidMint);
        state.form = filled_form();

        let request = state.begin_submit(&test_config(), "juno1wallet").unwrap();

        assert_eq!(request.funds, vec![Coin::new("10000000", "ujunox")]);
        assert_eq!(request.fee, FeeMode::Auto);
    }

    #[test]
    fn test_sender_uses_validator_address_when_configured() {
        let mut config = test_config();
        config.validator_address = "juno1validator".to_string();
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = filled_form();

        let request = state.begin_submit(&config, "juno1wallet").unwrap();

        assert_eq!(request.sender, "juno1validator");
        let ExecuteMsg::Mint(msg) = &request.msg;
        assert_eq!(msg.owner, "juno1wallet");
    }

    #[test]
    fn test_new_load_clears_previous_error_but_keeps_success() {
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.status = MintStatus::Error("Error! boom".to_string());
        state.begin_load();
        assert_eq!(state.status, MintStatus::Idle);

        state.status = MintStatus::Success("done".to_string());
        state.begin_load();
        assert_eq!(state.success_message(), Some("done"));
    }

    #[tokio::test]
    async fn test_next_token_id_spans_every_page() {
        // 25 ids: the first string-ordered page of 10 ends at "18"
        let chain = MockChain::with_minted("1000000", 25);
        let mut state = MintState::new(MintVariant::OnChainMetadata);

        let ticket = state.begin_load();
        state.apply_load(ticket, load_chain_state(&chain, &load_request("juno1wallet", true)).await);
        assert_eq!(state.form.token_id, "26");

        let chain = MockChain::with_minted("1000000", 75);
        let ticket = state.begin_load();
        state.apply_load(ticket, load_chain_state(&chain, &load_request("juno1wallet", true)).await);
        assert_eq!(state.form.token_id, "76");
        // 30 + 30 + 15, then an empty page
        assert_eq!(chain.token_calls.get(), 4);
    }

    #[tokio::test]
    async fn test_load_error_during_submit_keeps_loading() {
        let mut chain = MockChain::new("0", &[]);
        chain.balance = Err(RpcError::QueryFailed("x".to_string()));
        let signer = MockSigner::ok();
        let mut state = MintState::new(MintVariant::OnChainMetadata);
        state.form = filled_form();

        let request = state.begin_submit(&test_config(), "juno1wallet").unwrap();
        // wallet or settings change while the execute is pending
        let ticket = state.begin_load();
        state.apply_load(ticket, load_chain_state(&chain, &load_request("juno1wallet", true)).await);

        assert!(state.is_loading());
        assert_eq!(state.status, MintStatus::Loading);
        assert_eq!(state.error_message(), Some("Error! Query failed: x"));

        state.finish_submit(submit_mint(&signer, &request).await);
        assert!(!state.is_loading());
        assert!(state.success_message().unwrap().contains("A1B2"));
    }

    #[tokio::test]
    async fn test_refresh_after_mint_reloads_balance_and_token_id() {
        let signer = MockSigner::ok();
        let mut state = MintState::new(MintVariant::OnChainMetadata);

        let before = MockChain::new("3000000", &["5"]);
        let ticket = state.begin_load();
        state.apply_load(ticket, load_chain_state(&before, &load_request("juno1wallet", true)).await);
        assert_eq!(state.balance, "3 JUNO");
        state.form = FormState { token_id: state.form.token_id.clone(), ..filled_form() };

        let request = state.begin_submit(&test_config(), "juno1wallet").unwrap();
        state.finish_submit(submit_mint(&signer, &request).await);
        assert_eq!(state.refresh_count(), 1);

        // the refresh sees the minted token and the spent fee
        let after = MockChain::new("2500000", &["5", "6"]);
        let ticket = state.begin_load();
        assert!(state.apply_load(ticket, load_chain_state(&after, &load_request("juno1wallet", true)).await));

        assert_eq!(state.balance, "2.5 JUNO");
        assert_eq!(state.form.token_id, "7");
        assert!(state.success_message().unwrap().contains("Minted token 6"));
    }

    #[test]
    fn test_image_file_name_goes_into_extension() {
        let form = FormState {
            image: Some("cat.png".to_string()),
            background_color: "ffffff".to_string(),
            ..filled_form()
        };
        let metadata = form.to_metadata();
        assert_eq!(metadata.image.as_deref(), Some("cat.png"));
        assert_eq!(metadata.background_color.as_deref(), Some("ffffff"));
        assert_eq!(metadata.youtube_url, None);
    }
}
