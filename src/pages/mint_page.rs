use leptos::*;
use leptos::leptos_dom::ev::SubmitEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::core::mint::{load_chain_state, submit_mint, FormState, LoadRequest, MintState, MintVariant};
use crate::core::rpc_base::RpcError;
use crate::core::session::Session;
use crate::pages::wallet_loader::WalletLoader;

#[component]
fn TextField(
    id: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <input
                type="text"
                id=id
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn MintPage(
    session: RwSignal<Session>,
    variant: MintVariant,
) -> impl IntoView {
    let state = create_rw_signal(MintState::new(variant));
    let refresh = create_memo(move |_| state.with(|s| s.refresh_count()));

    // reload balance (and next token id) when wallet, contract or refresh count change
    create_effect(move |_| {
        let (wallet_address, config) = session.with(|s| (s.wallet_address(), s.config().clone()));
        let _ = refresh.get();
        if wallet_address.is_empty() {
            return;
        }

        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let request = LoadRequest {
            wallet_address,
            contract_address: config.contract_address.clone(),
            denom: config.staking_denom.clone(),
            derive_token_id: variant.derives_token_id() && !config.contract_address.is_empty(),
        };
        let client = session.with_untracked(|s| s.query_client());

        spawn_local(async move {
            let outcome = load_chain_state(&client, &request).await;
            state.update(|s| {
                s.apply_load(ticket, outcome);
            });
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let (wallet_address, config, client) = session.with_untracked(|s| {
            (s.wallet_address(), s.config().clone(), s.signing_client())
        });
        let request = match state.try_update(|s| s.begin_submit(&config, &wallet_address)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Mint rejected before submit: {}", e);
                return;
            }
            None => return,
        };
        let client = match client {
            Ok(client) => client,
            Err(e) => {
                state.update(|s| s.finish_submit(Err(RpcError::ConnectionFailed(e.to_string()))));
                return;
            }
        };

        log::info!("Minting token {} on {}", state.with_untracked(|s| s.form.token_id.clone()), request.contract_address);
        spawn_local(async move {
            let result = submit_mint(&client, &request).await;
            state.update(|s| s.finish_submit(result));
        });
    };

    let field = move |get: fn(&FormState) -> String| {
        Signal::derive(move || state.with(|s| get(&s.form)))
    };

    let on_image_change = move |ev: web_sys::Event| {
        let file_name = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        log::debug!("Selected image: {:?}", file_name);
        state.update(|s| s.form.image = file_name);
    };

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let token_id_placeholder = if variant.derives_token_id() {
        "Loading next token id ..."
    } else {
        "Token ID ..."
    };

    view! {
        <WalletLoader session=session loading=loading>
            <div class="mint-page">
                <p class="balance">"Your wallet has " {move || state.with(|s| s.balance.clone())}</p>
                <h1 class="page-title">{variant.title()}</h1>

                <form class="mint-form" on:submit=on_submit>
                    <TextField
                        id="token-uri"
                        placeholder="Token URI ..."
                        required=true
                        value=field(|f| f.token_uri.clone())
                        on_input=move |v: String| state.update(|s| s.form.token_uri = v)
                    />
                    <div class="form-row">
                        <label for="token-id">"Token ID"</label>
                        <input
                            type="text"
                            id="token-id"
                            class="form-input"
                            placeholder=token_id_placeholder
                            required=true
                            prop:value=move || state.with(|s| s.form.token_id.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                state.update(|s| s.form.token_id = v);
                            }
                        />
                    </div>
                    <TextField
                        id="youtube-url"
                        placeholder="Youtube URL(Optional) ..."
                        value=field(|f| f.youtube_url.clone())
                        on_input=move |v: String| state.update(|s| s.form.youtube_url = v)
                    />
                    <TextField
                        id="animation-url"
                        placeholder="Animation URL(Optional) ..."
                        value=field(|f| f.animation_url.clone())
                        on_input=move |v: String| state.update(|s| s.form.animation_url = v)
                    />
                    <TextField
                        id="background-color"
                        placeholder="Background color(Optional) ..."
                        value=field(|f| f.background_color.clone())
                        on_input=move |v: String| state.update(|s| s.form.background_color = v)
                    />
                    <div class="form-row">
                        <textarea
                            id="description"
                            class="form-input form-textarea"
                            placeholder="Description(Optional) ..."
                            prop:value=move || state.with(|s| s.form.description.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                state.update(|s| s.form.description = v);
                            }
                        ></textarea>
                    </div>
                    <TextField
                        id="external-url"
                        placeholder="External URL(Optional) ..."
                        value=field(|f| f.external_url.clone())
                        on_input=move |v: String| state.update(|s| s.form.external_url = v)
                    />
                    <div class="form-row">
                        <label for="image">"Image (Optional)"</label>
                        <input
                            type="file"
                            id="image"
                            class="form-input"
                            accept="image/*"
                            on:change=on_image_change
                        />
                    </div>
                    <TextField
                        id="image-data"
                        placeholder="Image Data(Optional) ..."
                        value=field(|f| f.image_data.clone())
                        on_input=move |v: String| state.update(|s| s.form.image_data = v)
                    />
                    <TextField
                        id="name"
                        placeholder="Name(Optional) ..."
                        value=field(|f| f.name.clone())
                        on_input=move |v: String| state.update(|s| s.form.name = v)
                    />

                    <div class="form-row">
                        <button type="submit" class="btn btn-primary btn-lg">"MINT"</button>
                    </div>
                </form>

                {move || state.with(|s| s.error_message().map(|msg| view! {
                    <p class="error-message">{msg.to_string()}</p>
                }))}
                {move || state.with(|s| s.success_message().map(|msg| view! {
                    <p class="success-message">{msg.to_string()}</p>
                }))}
            </div>
        </WalletLoader>
    }
}
