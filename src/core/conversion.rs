//! Conversions between micro-denom base units and their display form.

use super::constants::MICRO_DENOM_SCALE;
use super::msg::Coin;

/// Micro-denom amount (decimal string) to whole units. Unparseable amounts read as zero.
pub fn convert_micro_denom_to_denom(amount: &str) -> f64 {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value / MICRO_DENOM_SCALE,
        _ => 0.0,
    }
}

/// Whole units to a micro-denom amount string, truncating sub-micro fractions
pub fn convert_denom_to_micro_denom(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "0".to_string();
    }
    let micro = (amount * MICRO_DENOM_SCALE).trunc() as u128;
    micro.to_string()
}

/// `ujuno` -> `JUNO`
pub fn convert_from_micro_denom(denom: &str) -> String {
    denom.strip_prefix('u').unwrap_or(denom).to_uppercase()
}

/// Human readable balance, e.g. `1 JUNO`
pub fn format_balance(coin: &Coin) -> String {
    format!(
        "{} {}",
        convert_micro_denom_to_denom(&coin.amount),
        convert_from_micro_denom(&coin.denom)
    )
}
