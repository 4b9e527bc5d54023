//! Protocol constants for the gold token.

/// Reserved burn identity. Rejected wherever a recipient is required.
pub const BURN_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// Default hard cap on circulating supply, in base units
pub const DEFAULT_MAX_SUPPLY: u128 = 1_000_000_000_000;

/// Default smallest amount that may be redeemed in one call
pub const DEFAULT_MIN_REDEMPTION: u128 = 1_000_000;

/// Default cooldown between redemptions, in blocks (~10 days at 10 min blocks)
pub const DEFAULT_REDEMPTION_LOCK_PERIOD: u64 = 1440;
