use leptos::*;

use crate::core::constants::ERROR_PREFIX;
use crate::core::network_config::base_chain_config;
use crate::core::session::Session;
use crate::core::settings::{load_settings_for_network, save_settings_for_network, RestSelection, UserSettings};

#[component]
pub fn SettingsPage(
    session: RwSignal<Session>
) -> impl IntoView {
    let base = base_chain_config();
    let network = base.network_type;
    let stored = load_settings_for_network(network).unwrap_or_default();

    let (rest_selection, set_rest_selection) = create_signal(stored.rest_selection.clone());
    let (custom_rest_url, set_custom_rest_url) = create_signal(stored.custom_rest_url.clone());
    let (custom_contract, set_custom_contract) = create_signal(stored.custom_contract_address.clone());
    let (status, set_status) = create_signal(String::new());
    let contract_placeholder = if base.contract_address.is_empty() {
        "juno1..."
    } else {
        base.contract_address.as_str()
    };

    let save = move |_| {
        let settings = UserSettings {
            rest_selection: rest_selection.get_untracked(),
            custom_rest_url: custom_rest_url.get_untracked(),
            custom_contract_address: custom_contract.get_untracked(),
        };
        match save_settings_for_network(network, &settings) {
            Ok(()) => {
                log::info!("Saved settings for {}", network.as_str());
                session.update(|s| s.reload_config());
                set_status.set("Settings saved".to_string());
            }
            Err(e) => {
                log::error!("Failed to save settings: {}", e);
                set_status.set(format!("{}{}", ERROR_PREFIX, e));
            }
        }
    };

    view! {
        <div class="settings-page">
            <h2>"Settings"</h2>
            <p class="network-name">{format!("{} ({})", base.chain_name, base.chain_id)}</p>

            <div class="settings-section">
                <h3>"REST Endpoint"</h3>
                <div class="radio-option">
                    <input
                        type="radio"
                        id="rest-default"
                        name="rest-endpoint"
                        checked=move || rest_selection.get() == RestSelection::Default
                        on:change=move |_| set_rest_selection.set(RestSelection::Default)
                    />
                    <label for="rest-default">{format!("Default ({})", base.rest_endpoint)}</label>
                </div>
                <div class="radio-option">
                    <input
                        type="radio"
                        id="rest-custom"
                        name="rest-endpoint"
                        checked=move || rest_selection.get() == RestSelection::Custom
                        on:change=move |_| set_rest_selection.set(RestSelection::Custom)
                    />
                    <label for="rest-custom">"Custom"</label>
                    <input
                        type="text"
                        class="custom-rpc-input"
                        placeholder="Enter custom REST URL"
                        prop:value=move || custom_rest_url.get()
                        on:input=move |ev| set_custom_rest_url.set(event_target_value(&ev))
                        disabled=move || rest_selection.get() != RestSelection::Custom
                    />
                </div>
            </div>

            <div class="settings-section">
                <h3>"Contract"</h3>
                <input
                    type="text"
                    class="custom-rpc-input"
                    placeholder=contract_placeholder
                    prop:value=move || custom_contract.get()
                    on:input=move |ev| set_custom_contract.set(event_target_value(&ev))
                />
            </div>

            <div class="current-rpc">
                <h4>"Active configuration:"</h4>
                <div class="rpc-url">{move || session.with(|s| s.config().rest_endpoint.clone())}</div>
                <div class="rpc-url">{move || session.with(|s| s.config().contract_address.clone())}</div>
            </div>

            <button class="btn btn-primary" on:click=save>"Save"</button>
            <Show when=move || !status.get().is_empty()>
                <p class="status-message">{move || status.get()}</p>
            </Show>
        </div>
    }
}
