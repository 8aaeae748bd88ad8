//! Globally unique identifiers used throughout Campus Credits.
//!
//! Entity ids (`UserId`, `TransactionId`) use UUIDv7 for time-ordered
//! lexicographic sorting. `WalletAddress` and `NftId` are validated
//! string newtypes — their values come from the identity generator and
//! must be unique across all users at assignment time, a guarantee the
//! *caller* enforces by checking the record store (see the engine crate).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{constants, CreditError, Result};

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// Unique identifier for a user profile. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TransactionId
// ---------------------------------------------------------------------------

/// Globally unique transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// WalletAddress
// ---------------------------------------------------------------------------

/// An on-chain wallet address: `0x` followed by 40 lowercase hex characters.
///
/// Uniqueness across users is NOT guaranteed by construction — callers
/// assigning a generated address must verify against the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate and wrap an address string.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if the string is not `0x` + 40 lowercase
    /// hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let hex_part = value.strip_prefix("0x").ok_or_else(|| {
            CreditError::InvalidOperation {
                reason: format!("wallet address missing 0x prefix: {value}"),
            }
        })?;
        if hex_part.len() != constants::WALLET_ADDRESS_HEX_LEN
            || !hex_part.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(CreditError::InvalidOperation {
                reason: format!("malformed wallet address: {value}"),
            });
        }
        Ok(Self(value))
    }

    /// Build an address from 20 raw bytes (the generator's path).
    #[must_use]
    pub fn from_raw_bytes(bytes: &[u8; 20]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// NftId
// ---------------------------------------------------------------------------

/// Cosmetic unique display identifier for a user profile, formatted
/// `#XXXXXX` with six uppercase hex characters. Unrelated to any token
/// standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NftId(String);

impl NftId {
    /// Validate and wrap an NFT id string.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if the string is not `#` + 6 uppercase
    /// hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let hex_part = value
            .strip_prefix('#')
            .ok_or_else(|| CreditError::InvalidOperation {
                reason: format!("nft id missing # prefix: {value}"),
            })?;
        if hex_part.len() != constants::NFT_ID_HEX_LEN
            || !hex_part.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase())
        {
            return Err(CreditError::InvalidOperation {
                reason: format!("malformed nft id: {value}"),
            });
        }
        Ok(Self(value))
    }

    /// Build an NFT id from 3 raw bytes (the generator's path).
    #[must_use]
    pub fn from_raw_bytes(bytes: &[u8; 3]) -> Self {
        Self(format!("#{}", hex::encode_upper(bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// IdentityKind
// ---------------------------------------------------------------------------

/// Which generated identifier a collision or exhaustion refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityKind {
    WalletAddress,
    NftId,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WalletAddress => f.write_str("wallet address"),
            Self::NftId => f.write_str("nft id"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
