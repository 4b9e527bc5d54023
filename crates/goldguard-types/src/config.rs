use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_SUPPLY, DEFAULT_MIN_REDEMPTION, DEFAULT_REDEMPTION_LOCK_PERIOD,
};
use crate::error::{LedgerError, Result};
use crate::{AccountId, Amount};

/// Construction-time configuration of a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Sole identity allowed to flip flags, rotate the oracle and co-sign mints
    pub admin: AccountId,

    /// Identity attesting to gold reserves; must also be admin to mint
    pub oracle: AccountId,

    /// Hard cap on total supply
    #[serde(default = "default_max_supply")]
    pub max_supply: Amount,

    /// Smallest amount accepted by a single redemption
    #[serde(default = "default_min_redemption")]
    pub min_redemption: Amount,

    /// Blocks an account must wait between redemptions
    #[serde(default = "default_redemption_lock_period")]
    pub redemption_lock_period: u64,
}

fn default_max_supply() -> Amount {
    Amount::from_units(DEFAULT_MAX_SUPPLY)
}

fn default_min_redemption() -> Amount {
    Amount::from_units(DEFAULT_MIN_REDEMPTION)
}

fn default_redemption_lock_period() -> u64 {
    DEFAULT_REDEMPTION_LOCK_PERIOD
}

impl LedgerConfig {
    /// Config with the default supply cap, redemption floor and lock period
    pub fn new(admin: impl Into<AccountId>, oracle: impl Into<AccountId>) -> Self {
        LedgerConfig {
            admin: admin.into(),
            oracle: oracle.into(),
            max_supply: default_max_supply(),
            min_redemption: default_min_redemption(),
            redemption_lock_period: default_redemption_lock_period(),
        }
    }

    pub fn with_max_supply(mut self, max_supply: Amount) -> Self {
        self.max_supply = max_supply;
        self
    }

    pub fn with_min_redemption(mut self, min_redemption: Amount) -> Self {
        self.min_redemption = min_redemption;
        self
    }

    pub fn with_redemption_lock_period(mut self, blocks: u64) -> Self {
        self.redemption_lock_period = blocks;
        self
    }

    /// Reject configurations the ledger could never operate under
    pub fn validate(&self) -> Result<()> {
        if self.admin.is_burn() {
            return Err(LedgerError::Config("admin cannot be the burn address".to_string()));
        }
        if self.oracle.is_burn() {
            return Err(LedgerError::Config("oracle cannot be the burn address".to_string()));
        }
        if self.max_supply.is_zero() {
            return Err(LedgerError::Config("max_supply must be positive".to_string()));
        }
        if self.min_redemption.is_zero() {
            return Err(LedgerError::Config("min_redemption must be positive".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
