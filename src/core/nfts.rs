use super::msg::{NftInfoResponse, QueryMsg, TokensResponse};
use super::rpc_base::{ChainQuery, RpcError};

/// One token owned by the connected wallet
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedNft {
    pub token_id: String,
    pub name: Option<String>,
    pub token_uri: Option<String>,
    pub image: Option<String>,
}

/// Tokens of `owner` with their metadata, in contract order
pub async fn load_owned_nfts<Q: ChainQuery>(
    client: &Q,
    contract_address: &str,
    owner: &str,
) -> Result<Vec<OwnedNft>, RpcError> {
    let owned: TokensResponse = client
        .query_contract_smart(contract_address, &QueryMsg::tokens_of(owner))
        .await?;
    log::debug!("{} owns {} tokens", owner, owned.tokens.len());

    let mut nfts = Vec::with_capacity(owned.tokens.len());
    for token_id in owned.tokens {
        let info: NftInfoResponse = client
            .query_contract_smart(contract_address, &QueryMsg::NftInfo { token_id: token_id.clone() })
            .await?;
        let extension = info.extension.unwrap_or_default();
        nfts.push(OwnedNft {
            token_id,
            name: extension.name,
            token_uri: info.token_uri,
            image: extension.image,
        });
    }
    Ok(nfts)
}
