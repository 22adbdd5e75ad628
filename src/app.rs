use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::mint::MintVariant;
use crate::core::network_config::current_chain_config;
use crate::core::session::Session;
use crate::core::wallet::CosmWasmWallet;
use crate::pages::{MintPage, NftsPage, SettingsPage};

// top level pages
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Mint(MintVariant),
    Nfts,
    Settings,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Page::Mint(MintVariant::OnChainMetadata) => "Mint",
            Page::Mint(MintVariant::PaidMint) => "Paid Mint",
            Page::Mint(MintVariant::ManualTokenId) => "Mint by ID",
            Page::Nfts => "My NFTs",
            Page::Settings => "Settings",
        }
    }

    fn all() -> Vec<Page> {
        let mut pages: Vec<Page> = MintVariant::all().into_iter().map(Page::Mint).collect();
        pages.push(Page::Nfts);
        pages.push(Page::Settings);
        pages
    }
}

// main app component
#[component]
pub fn App() -> impl IntoView {
    let session = create_rw_signal(Session::new(current_chain_config()));
    let (current_page, set_current_page) = create_signal(Page::Mint(MintVariant::OnChainMetadata));

    // Logout handler - disconnects the wallet and drops the session's account
    let handle_logout = move |_| {
        log::info!("Logging out...");
        session.update(|s| s.logout());
        spawn_local(async move {
            if let Err(e) = CosmWasmWallet::disconnect().await {
                log::warn!("Wallet disconnect failed: {}", e);
            }
        });
    };

    view! {
        <main class="container">
            <nav class="top-bar">
                <span class="brand">{move || session.with(|s| s.config().chain_name.clone())}" NFT Minter"</span>
                {Page::all().into_iter().map(|page| view! {
                    <button
                        class="nav-item"
                        class:active=move || current_page.get() == page
                        on:click=move |_| set_current_page.set(page)
                    >
                        {page.label()}
                    </button>
                }).collect_view()}
                <Show when=move || session.with(|s| s.is_connected())>
                    <span class="wallet-address" title=move || session.with(|s| s.wallet_address())>
                        {move || short_address(&session.with(|s| s.wallet_address()))}
                    </span>
                    <button class="nav-item" on:click=handle_logout>"Disconnect"</button>
                </Show>
            </nav>

            {move || match current_page.get() {
                Page::Mint(variant) => view! { <MintPage session=session variant=variant/> }.into_view(),
                Page::Nfts => view! { <NftsPage session=session/> }.into_view(),
                Page::Settings => view! { <SettingsPage session=session/> }.into_view(),
            }}
        </main>
    }
}

fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        address.to_string()
    } else {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 6..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
