use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::constants::ERROR_PREFIX;
use crate::core::mint::MintError;
use crate::core::nfts::{load_owned_nfts, OwnedNft};
use crate::core::session::Session;
use crate::pages::wallet_loader::WalletLoader;

#[component]
pub fn NftsPage(
    session: RwSignal<Session>
) -> impl IntoView {
    let (nfts, set_nfts) = create_signal(Vec::<OwnedNft>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(String::new());

    create_effect(move |_| {
        let (owner, config) = session.with(|s| (s.wallet_address(), s.config().clone()));
        if owner.is_empty() {
            return;
        }
        if config.contract_address.is_empty() {
            set_error.set(format!("{}{}", ERROR_PREFIX, MintError::MissingContract));
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        let client = session.with_untracked(|s| s.query_client());

        spawn_local(async move {
            match load_owned_nfts(&client, &config.contract_address, &owner).await {
                Ok(list) => {
                    log::info!("Loaded {} NFTs for {}", list.len(), owner);
                    set_nfts.set(list);
                }
                Err(e) => {
                    log::error!("Error loading NFTs: {}", e);
                    set_error.set(format!("{}{}", ERROR_PREFIX, e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <WalletLoader session=session loading=loading>
            <div class="nfts-page">
                <h1 class="page-title">"All of your NFTs"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !nfts.with(|list| list.is_empty())
                    fallback=move || view! {
                        <p class="empty-hint">
                            {move || if loading.get() { "" } else { "You don't own any NFTs from this collection yet." }}
                        </p>
                    }
                >
                    <ul class="nft-list">
                        <For
                            each=move || nfts.get()
                            key=|nft| nft.token_id.clone()
                            children=move |nft: OwnedNft| view! {
                                <li class="nft-card">
                                    <span class="nft-id">"#" {nft.token_id.clone()}</span>
                                    <span class="nft-name">{nft.name.clone().unwrap_or_else(|| "Untitled".to_string())}</span>
                                    {nft.image.clone().map(|image| view! {
                                        <span class="nft-image">{image}</span>
                                    })}
                                    {nft.token_uri.clone().map(|uri| view! {
                                        <a class="nft-uri" href=uri.clone() target="_blank">{uri}</a>
                                    })}
                                </li>
                            }
                        />
                    </ul>
                </Show>
            </div>
        </WalletLoader>
    }
}
