use serde::{Deserialize, Serialize};
use web_sys::Storage;

use super::constants::SETTINGS_STORAGE_PREFIX;
use super::network_config::NetworkType;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RestSelection {
    Default,
    Custom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub rest_selection: RestSelection,
    pub custom_rest_url: String,
    /// Contract to mint against instead of the configured one (blank = configured)
    #[serde(default)]
    pub custom_contract_address: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            rest_selection: RestSelection::Default,
            custom_rest_url: String::new(),
            custom_contract_address: String::new(),
        }
    }
}

impl UserSettings {
    fn local_storage() -> Option<Storage> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
    }

    fn storage_key(network_type: NetworkType) -> String {
        format!("{}{}", SETTINGS_STORAGE_PREFIX, network_type.as_str())
    }

    pub fn load(network_type: NetworkType) -> Option<Self> {
        let storage = Self::local_storage()?;
        let value = storage
            .get_item(&Self::storage_key(network_type))
            .ok()
            .flatten()?;

        serde_json::from_str(&value).ok()
    }

    pub fn save(network_type: NetworkType, settings: &Self) -> Result<(), String> {
        let storage = Self::local_storage().ok_or_else(|| "Local storage not available".to_string())?;
        let serialized = serde_json::to_string(settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        storage
            .set_item(&Self::storage_key(network_type), &serialized)
            .map_err(|_| "Failed to write settings to local storage".to_string())
    }

    pub fn custom_rest_endpoint(&self) -> Option<String> {
        match self.rest_selection {
            RestSelection::Custom => {
                let trimmed = self.custom_rest_url.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            RestSelection::Default => None,
        }
    }

    pub fn custom_contract_address(&self) -> Option<String> {
        let trimmed = self.custom_contract_address.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

pub fn load_settings_for_network(network_type: NetworkType) -> Option<UserSettings> {
    UserSettings::load(network_type)
}

pub fn save_settings_for_network(network_type: NetworkType, settings: &UserSettings) -> Result<(), String> {
    UserSettings::save(network_type, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_ignores_custom_url() {
        let settings = UserSettings {
            custom_rest_url: "https://lcd.example.org".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.custom_rest_endpoint(), None);
    }

    #[test]
    fn test_custom_url_is_trimmed() {
        let settings = UserSettings {
            rest_selection: RestSelection::Custom,
            custom_rest_url: "  https://lcd.example.org/ ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.custom_rest_endpoint().as_deref(), Some("https://lcd.example.org"));
    }

    #[test]
    fn test_settings_without_contract_field_deserialize() {
        let json = r#"{"rest_selection":"Custom","custom_rest_url":"https://lcd.example.org"}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.rest_selection, RestSelection::Custom);
        assert_eq!(settings.custom_contract_address(), None);
    }
}
