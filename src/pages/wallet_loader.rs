use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::constants::ERROR_PREFIX;
use crate::core::session::Session;
use crate::core::wallet::CosmWasmWallet;

/// Shows a connect prompt until a wallet is connected, then the children.
/// `loading` only drives the busy indicator.
#[component]
pub fn WalletLoader(
    session: RwSignal<Session>,
    #[prop(into)] loading: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let (connecting, set_connecting) = create_signal(false);
    let (connect_error, set_connect_error) = create_signal(String::new());

    let connect = move |_| {
        if connecting.get_untracked() {
            return;
        }
        set_connecting.set(true);
        set_connect_error.set(String::new());

        spawn_local(async move {
            let mut updated = session.get_untracked();
            match updated.connect().await {
                Ok(address) => {
                    log::info!("Connected wallet: {}", address);
                    let client = updated.query_client();
                    session.set(updated);
                    // accounts without any transaction are unknown to the auth module
                    match client.get_account(&address).await {
                        Ok(account) => log::debug!("Account: {}", account),
                        Err(e) => log::warn!("Account lookup failed: {}", e),
                    }
                }
                Err(e) => {
                    log::error!("Failed to connect wallet: {}", e);
                    set_connect_error.set(format!("{}{}", ERROR_PREFIX, e));
                }
            }
            set_connecting.set(false);
        });
    };

    view! {
        <div class="wallet-loader">
            <Show
                when=move || session.with(|s| s.is_connected())
                fallback=move || view! {
                    <div class="connect-panel">
                        <h2>"Connect your wallet"</h2>
                        <p class="chain-name">{move || session.with(|s| s.config().chain_name.clone())}</p>
                        <Show when=move || !CosmWasmWallet::is_installed()>
                            <p class="hint">"Install the Keplr browser extension to continue."</p>
                        </Show>
                        <button
                            class="btn btn-primary"
                            on:click=connect
                            prop:disabled=move || connecting.get()
                        >
                            {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
                        </button>
                        <Show when=move || !connect_error.get().is_empty()>
                            <p class="error-message">{move || connect_error.get()}</p>
                        </Show>
                    </div>
                }
            >
                <Show when=move || loading.get()>
                    <div class="loading-indicator">"Loading..."</div>
                </Show>
                {children()}
            </Show>
        </div>
    }
}
