/// Wallet address validation
///
/// Accepts the canonical 20-byte hex form: "0x" followed by exactly 40 hex
/// digits, case-insensitive. No EIP-55 checksum verification. This is a pure
/// predicate; malformed input returns false, never an error.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) else {
        return false;
    };

    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}
