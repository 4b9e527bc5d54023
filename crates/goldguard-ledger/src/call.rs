use goldguard_types::{AccountId, Amount, Result};
use serde::{Deserialize, Serialize};

use crate::context::CallContext;
use crate::ledger::TokenLedger;

/// A state-changing ledger operation, as a host would encode it in a
/// transaction payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    SetPaused {
        pause: bool,
    },
    SetRedemptionEnabled {
        enabled: bool,
    },
    SetOracle {
        new_oracle: AccountId,
    },
    Mint {
        recipient: AccountId,
        amount: Amount,
        #[serde(default)]
        oracle_verified: bool,
    },
    Redeem {
        amount: Amount,
    },
    Transfer {
        recipient: AccountId,
        amount: Amount,
    },
    Stake {
        amount: Amount,
    },
    Unstake {
        amount: Amount,
    },
}

impl Call {
    /// Stable operation name for logs and receipts
    pub fn name(&self) -> &'static str {
        match self {
            Call::SetPaused { .. } => "set_paused",
            Call::SetRedemptionEnabled { .. } => "set_redemption_enabled",
            Call::SetOracle { .. } => "set_oracle",
            Call::Mint { .. } => "mint",
            Call::Redeem { .. } => "redeem",
            Call::Transfer { .. } => "transfer",
            Call::Stake { .. } => "stake",
            Call::Unstake { .. } => "unstake",
        }
    }

    /// Whether only the admin can ever succeed with this call
    pub fn is_privileged(&self) -> bool {
        matches!(
            self,
            Call::SetPaused { .. }
                | Call::SetRedemptionEnabled { .. }
                | Call::SetOracle { .. }
                | Call::Mint { .. }
        )
    }

    /// Route the call to the matching ledger operation
    pub fn dispatch<L: TokenLedger + ?Sized>(self, ledger: &mut L, ctx: &CallContext) -> Result<bool> {
        match self {
            Call::SetPaused { pause } => ledger.set_paused(ctx, pause),
            Call::SetRedemptionEnabled { enabled } => ledger.set_redemption_enabled(ctx, enabled),
            Call::SetOracle { new_oracle } => ledger.set_oracle(ctx, new_oracle),
            Call::Mint {
                recipient,
                amount,
                oracle_verified,
            } => ledger.mint(ctx, recipient, amount, oracle_verified),
            Call::Redeem { amount } => ledger.redeem(ctx, amount),
            Call::Transfer { recipient, amount } => ledger.transfer(ctx, recipient, amount),
            Call::Stake { amount } => ledger.stake(ctx, amount),
            Call::Unstake { amount } => ledger.unstake(ctx, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryLedger;
    use goldguard_types::LedgerConfig;

    #[test]
    fn test_call_json_encoding() {
        let call = Call::Mint {
            recipient: AccountId::new("alice"),
            amount: Amount::from_units(1_000_000),
            oracle_verified: true,
        };
        let json = serde_json::to_string(&call).unwrap();
        assert_eq!(
            json,
            r#"{"mint":{"recipient":"alice","amount":1000000,"oracle_verified":true}}"#
        );
        assert_eq!(serde_json::from_str::<Call>(&json).unwrap(), call);

        let parsed: Call = serde_json::from_str(r#"{"mint":{"recipient":"bob","amount":5}}"#).unwrap();
        assert_eq!(
            parsed,
            Call::Mint {
                recipient: AccountId::new("bob"),
                amount: Amount::from_units(5),
                oracle_verified: false,
            }
        );
    }

    #[test]
    fn test_dispatch_routes_to_ledger() {
        let mut ledger = MemoryLedger::new(LedgerConfig::new("admin", "admin")).unwrap();
        let admin = CallContext::new("admin", 10);

        let result = Call::Mint {
            recipient: AccountId::new("alice"),
            amount: Amount::from_units(50),
            oracle_verified: true,
        }
        .dispatch(&mut ledger, &admin);
        assert_eq!(result, Ok(true));

        let result = Call::Stake { amount: Amount::from_units(20) }
            .dispatch(&mut ledger, &CallContext::new("alice", 11));
        assert_eq!(result, Ok(true));
        assert_eq!(ledger.staked_of(&AccountId::new("alice")), Amount::from_units(20));

        assert_eq!(Call::SetPaused { pause: true }.dispatch(&mut ledger, &admin), Ok(true));
        assert!(ledger.is_paused());
    }

    #[test]
    fn test_privileged_calls() {
        assert!(Call::SetPaused { pause: false }.is_privileged());
        assert!(Call::SetOracle { new_oracle: AccountId::new("o") }.is_privileged());
        assert!(!Call::Stake { amount: Amount::ZERO }.is_privileged());
        assert_eq!(Call::Unstake { amount: Amount::ZERO }.name(), "unstake");
    }
}
