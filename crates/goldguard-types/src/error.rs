use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::height::BlockHeight;

/// Every way a ledger call can be rejected.
///
/// The numeric [`code`](LedgerError::code) values are stable and match the
/// error constants of the deployed contract, so hosts can surface them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LedgerError {
    #[error("Caller is not the admin")]
    NotAdmin,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Insufficient staked balance")]
    InsufficientStake,

    #[error("Mint would exceed the maximum supply")]
    SupplyCapExceeded,

    #[error("Ledger is paused")]
    Paused,

    #[error("Invalid recipient")]
    InvalidRecipient,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Caller is not the oracle")]
    NotOracle,

    /// `unlocks_at` is `None` when redemption is disabled for everyone and
    /// `Some(height)` when the caller is in cooldown until `height`.
    #[error("Redemption locked{}", lock_suffix(.unlocks_at))]
    RedemptionLocked { unlocks_at: Option<BlockHeight> },

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Block height regressed: last seen {last_seen}, got {got}")]
    HeightRegression { last_seen: BlockHeight, got: BlockHeight },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LedgerError {
    /// Stable numeric error code
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::NotAdmin => 100,
            LedgerError::InsufficientBalance => 101,
            LedgerError::InsufficientStake => 102,
            LedgerError::SupplyCapExceeded => 103,
            LedgerError::Paused => 104,
            LedgerError::InvalidRecipient => 105,
            LedgerError::InvalidAmount => 106,
            LedgerError::NotOracle => 107,
            LedgerError::RedemptionLocked { .. } => 108,
            LedgerError::ArithmeticOverflow => 109,
            LedgerError::HeightRegression { .. } => 110,
            LedgerError::Config(_) => 120,
            LedgerError::Serialization(_) => 121,
        }
    }
}

fn lock_suffix(unlocks_at: &Option<BlockHeight>) -> String {
    match unlocks_at {
        Some(h) => format!(" until block {}", h),
        None => ": redemption disabled".to_string(),
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_contract() {
        assert_eq!(LedgerError::NotAdmin.code(), 100);
        assert_eq!(LedgerError::InsufficientBalance.code(), 101);
        assert_eq!(LedgerError::InsufficientStake.code(), 102);
        assert_eq!(LedgerError::SupplyCapExceeded.code(), 103);
        assert_eq!(LedgerError::Paused.code(), 104);
        assert_eq!(LedgerError::InvalidRecipient.code(), 105);
        assert_eq!(LedgerError::InvalidAmount.code(), 106);
        assert_eq!(LedgerError::NotOracle.code(), 107);
    }

    #[test]
    fn test_redemption_locked_shares_code() {
        let disabled = LedgerError::RedemptionLocked { unlocks_at: None };
        let cooling = LedgerError::RedemptionLocked { unlocks_at: Some(2440) };

        assert_eq!(disabled.code(), 108);
        assert_eq!(cooling.code(), 108);
        assert_eq!(disabled.to_string(), "Redemption locked: redemption disabled");
        assert_eq!(cooling.to_string(), "Redemption locked until block 2440");
    }
}
