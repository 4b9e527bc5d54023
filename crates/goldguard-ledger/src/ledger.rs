use goldguard_types::{
    compute_json_hash, AccountId, Amount, BlockHeight, HashRef, LedgerConfig, Result,
    SupplyEvent,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::context::CallContext;

/// The gold token state machine.
///
/// Every mutating call takes the caller and block height explicitly through
/// [`CallContext`], evaluates its preconditions in a fixed order and either
/// applies all of its effects or none of them.
pub trait TokenLedger {
    /// Pause or unpause transfers, staking and redemption. Admin only.
    fn set_paused(&mut self, ctx: &CallContext, pause: bool) -> Result<bool>;

    /// Globally allow or forbid redemption. Admin only.
    fn set_redemption_enabled(&mut self, ctx: &CallContext, enabled: bool) -> Result<bool>;

    /// Rotate the oracle identity. Admin only; the burn address is rejected.
    fn set_oracle(&mut self, ctx: &CallContext, new_oracle: AccountId) -> Result<bool>;

    /// Issue new supply to `recipient`. The caller must hold both the admin
    /// and the oracle role. `oracle_verified` is carried for off-chain
    /// attestation plumbing and is not checked.
    fn mint(
        &mut self,
        ctx: &CallContext,
        recipient: AccountId,
        amount: Amount,
        oracle_verified: bool,
    ) -> Result<bool>;

    /// Burn the caller's tokens in exchange for physical gold and restart the
    /// caller's redemption cooldown.
    fn redeem(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool>;

    /// Move the caller's own tokens to `recipient`
    fn transfer(&mut self, ctx: &CallContext, recipient: AccountId, amount: Amount)
        -> Result<bool>;

    /// Move tokens from the caller's balance into their stake
    fn stake(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool>;

    /// Move tokens from the caller's stake back to their balance
    fn unstake(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool>;

    fn config(&self) -> &LedgerConfig;

    fn is_paused(&self) -> bool;

    fn is_redemption_enabled(&self) -> bool;

    fn total_supply(&self) -> Amount;

    /// Spendable balance (0 for unknown accounts)
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Staked balance (0 for unknown accounts)
    fn staked_of(&self, account: &AccountId) -> Amount;

    /// First height at which `account` may redeem again (0 if never locked)
    fn redemption_lock_of(&self, account: &AccountId) -> BlockHeight;

    fn last_mint_event(&self) -> Option<&SupplyEvent>;

    fn last_redemption_event(&self) -> Option<&SupplyEvent>;

    /// Sum of all staked balances
    fn total_staked(&self) -> Result<Amount>;

    /// Every account holding a balance or stake entry
    fn list_accounts(&self) -> Vec<AccountId>;

    /// Get a snapshot of the full ledger state (for checkpoint/restore)
    fn snapshot(&self) -> LedgerSnapshot;

    /// Restore from a snapshot
    fn restore(&mut self, snapshot: &LedgerSnapshot) -> Result<()>;

    fn admin(&self) -> &AccountId {
        &self.config().admin
    }

    fn oracle(&self) -> &AccountId {
        &self.config().oracle
    }

    fn is_admin(&self, account: &AccountId) -> bool {
        self.admin() == account
    }

    fn is_oracle(&self, account: &AccountId) -> bool {
        self.oracle() == account
    }

    /// Whether the account's cooldown has elapsed at `height`.
    /// Ignores the pause and global redemption switches.
    fn can_redeem_at(&self, account: &AccountId, height: BlockHeight) -> bool {
        height >= self.redemption_lock_of(account)
    }
}

/// Snapshot of ledger state for checkpoint/restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub config: LedgerConfig,
    pub paused: bool,
    pub redemption_enabled: bool,
    pub total_supply: Amount,
    pub balances: BTreeMap<AccountId, Amount>,
    pub staked: BTreeMap<AccountId, Amount>,
    pub redemption_locks: BTreeMap<AccountId, BlockHeight>,
    pub last_mint_event: Option<SupplyEvent>,
    pub last_redemption_event: Option<SupplyEvent>,
}

impl LedgerSnapshot {
    /// Deterministic SHA256 over the JSON encoding. BTreeMap ordering makes
    /// equal states hash equal.
    pub fn digest(&self) -> Result<HashRef> {
        compute_json_hash(self)
    }

    pub fn sum_of_balances(&self) -> Result<Amount> {
        Amount::checked_sum(self.balances.values().copied())
    }

    pub fn sum_of_staked(&self) -> Result<Amount> {
        Amount::checked_sum(self.staked.values().copied())
    }

    /// Every token in existence, liquid or staked. Equals `total_supply` in
    /// any consistent state.
    pub fn holdings(&self) -> Result<Amount> {
        self.sum_of_balances()?.checked_add(self.sum_of_staked()?)
    }
}
