//! Parsing of user-entered amounts and recipients.
use alloy::primitives::utils::{ParseUnits, format_units, parse_units};
use alloy_primitives::{Address, U256};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("amount is empty")]
    EmptyAmount,
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("invalid amount `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },
    #[error("invalid recipient address `{0}`")]
    InvalidRecipient(String)
}

/// Scales a decimal string such as `"12.34"` to the token's base units.
pub fn parse_amount(input: &str, decimals: u8) -> Result<U256, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyAmount)
    }

    match parse_units(trimmed, decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(InputError::NegativeAmount),
        Err(e) => {
            Err(InputError::InvalidAmount { input: trimmed.to_string(), reason: e.to_string() })
        }
    }
}

/// Renders base units as a decimal string with trailing zeros dropped, so
/// `12_340_000` at 6 decimals becomes `"12.34"`.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    let formatted = format_units(amount, decimals).unwrap_or_else(|_| amount.to_string());
    if !formatted.contains('.') {
        return formatted
    }

    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Parses a `0x`-prefixed hex address. Inputs shorter than 20 bytes are left
/// padded with zeros, the same way the address would be read as a uint160.
/// Mixed-case input must carry a valid EIP-55 checksum after padding.
pub fn parse_recipient(input: &str) -> Result<Address, InputError> {
    let trimmed = input.trim();
    let invalid = || InputError::InvalidRecipient(trimmed.to_string());

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(invalid)?;

    if digits.is_empty() || digits.len() > 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid())
    }

    let padded = format!("0x{digits:0>40}");
    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());

    if mixed_case {
        Address::parse_checksummed(&padded, None).map_err(|_| invalid())
    } else {
        padded.parse().map_err(|_| invalid())
    }
}
