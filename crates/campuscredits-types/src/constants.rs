//! System-wide constants for the Campus Credits engine.

/// Credits a student account holds with an empty on-chain wallet.
pub const BASELINE_STUDENT: i64 = 60;

/// Credits a canteen account holds with an empty on-chain wallet.
pub const BASELINE_CANTEEN: i64 = 100;

/// Default bound on identifier regeneration attempts before
/// provisioning fails with `IdentityExhausted`.
pub const DEFAULT_MAX_IDENTITY_ATTEMPTS: u32 = 10;

/// Default deadline for a single on-chain gateway call (mint
/// confirmation or balance read), in milliseconds.
pub const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 15_000;

/// Hex characters in a wallet address (excluding the `0x` prefix).
pub const WALLET_ADDRESS_HEX_LEN: usize = 40;

/// Hex characters in an NFT display identifier (excluding the `#` prefix).
pub const NFT_ID_HEX_LEN: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baselines_match_provisioning_policy() {
        assert_eq!(BASELINE_STUDENT, 60);
        assert_eq!(BASELINE_CANTEEN, 100);
    }
}
