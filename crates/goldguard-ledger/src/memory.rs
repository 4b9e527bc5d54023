use goldguard_types::{
    lock_expiry, AccountId, Amount, BlockHeight, LedgerConfig, LedgerError, Result, SupplyEvent,
};
use std::collections::{BTreeMap, BTreeSet};

use crate::context::CallContext;
use crate::ledger::{LedgerSnapshot, TokenLedger};

/// Return `$err` unless `$cond` holds
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// In-memory gold token ledger.
///
/// Reads of unknown accounts yield zero without creating entries; only
/// credits, debits and lock updates write to the maps.
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    config: LedgerConfig,
    paused: bool,
    redemption_enabled: bool,
    total_supply: Amount,
    balances: BTreeMap<AccountId, Amount>,
    staked: BTreeMap<AccountId, Amount>,
    redemption_locks: BTreeMap<AccountId, BlockHeight>,
    last_mint_event: Option<SupplyEvent>,
    last_redemption_event: Option<SupplyEvent>,
}

impl MemoryLedger {
    /// Create an empty, unpaused ledger with redemption disabled
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(MemoryLedger {
            config,
            paused: false,
            redemption_enabled: false,
            total_supply: Amount::ZERO,
            balances: BTreeMap::new(),
            staked: BTreeMap::new(),
            redemption_locks: BTreeMap::new(),
            last_mint_event: None,
            last_redemption_event: None,
        })
    }

    /// Rebuild a ledger from a previously taken snapshot
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Result<Self> {
        let mut ledger = MemoryLedger::new(snapshot.config.clone())?;
        ledger.restore(snapshot)?;
        Ok(ledger)
    }

    fn ensure_admin(&self, ctx: &CallContext) -> Result<()> {
        ensure!(self.is_admin(&ctx.caller), LedgerError::NotAdmin);
        Ok(())
    }

    fn ensure_not_paused(&self) -> Result<()> {
        ensure!(!self.paused, LedgerError::Paused);
        Ok(())
    }

    fn apply_mint(&mut self, ctx: &CallContext, recipient: &AccountId, amount: Amount) -> Result<()> {
        self.ensure_admin(ctx)?;
        ensure!(self.is_oracle(&ctx.caller), LedgerError::NotOracle);
        ensure!(!recipient.is_burn(), LedgerError::InvalidRecipient);
        ensure!(amount.is_positive(), LedgerError::InvalidAmount);

        // A sum too large for the integer type is necessarily above the cap
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .map_err(|_| LedgerError::SupplyCapExceeded)?;
        ensure!(new_supply <= self.config.max_supply, LedgerError::SupplyCapExceeded);
        let new_balance = self.balance_of(recipient).checked_add(amount)?;

        self.balances.insert(recipient.clone(), new_balance);
        self.total_supply = new_supply;
        self.last_mint_event = Some(SupplyEvent::new(recipient.clone(), amount, ctx.block_height));
        Ok(())
    }

    fn apply_redeem(&mut self, ctx: &CallContext, amount: Amount) -> Result<()> {
        self.ensure_not_paused()?;
        ensure!(
            self.redemption_enabled,
            LedgerError::RedemptionLocked { unlocks_at: None }
        );
        ensure!(amount >= self.config.min_redemption, LedgerError::InvalidAmount);

        let lock = self.redemption_lock_of(&ctx.caller);
        ensure!(
            ctx.block_height >= lock,
            LedgerError::RedemptionLocked { unlocks_at: Some(lock) }
        );

        let balance = self.balance_of(&ctx.caller);
        ensure!(balance >= amount, LedgerError::InsufficientBalance);

        let new_balance = balance.checked_sub(amount)?;
        let new_supply = self.total_supply.checked_sub(amount)?;
        let unlocks_at = lock_expiry(ctx.block_height, self.config.redemption_lock_period)?;

        self.balances.insert(ctx.caller.clone(), new_balance);
        self.total_supply = new_supply;
        self.redemption_locks.insert(ctx.caller.clone(), unlocks_at);
        self.last_redemption_event =
            Some(SupplyEvent::new(ctx.caller.clone(), amount, ctx.block_height));
        Ok(())
    }

    fn apply_transfer(&mut self, ctx: &CallContext, recipient: &AccountId, amount: Amount) -> Result<()> {
        self.ensure_not_paused()?;
        ensure!(!recipient.is_burn(), LedgerError::InvalidRecipient);
        ensure!(amount.is_positive(), LedgerError::InvalidAmount);

        let sender_balance = self.balance_of(&ctx.caller);
        ensure!(sender_balance >= amount, LedgerError::InsufficientBalance);

        // Debit and credit cancel out
        if *recipient == ctx.caller {
            return Ok(());
        }

        let new_sender = sender_balance.checked_sub(amount)?;
        let new_recipient = self.balance_of(recipient).checked_add(amount)?;

        self.balances.insert(ctx.caller.clone(), new_sender);
        self.balances.insert(recipient.clone(), new_recipient);
        Ok(())
    }

    fn apply_stake(&mut self, ctx: &CallContext, amount: Amount) -> Result<()> {
        self.ensure_not_paused()?;
        ensure!(amount.is_positive(), LedgerError::InvalidAmount);

        let balance = self.balance_of(&ctx.caller);
        ensure!(balance >= amount, LedgerError::InsufficientBalance);

        let new_balance = balance.checked_sub(amount)?;
        let new_staked = self.staked_of(&ctx.caller).checked_add(amount)?;

        self.balances.insert(ctx.caller.clone(), new_balance);
        self.staked.insert(ctx.caller.clone(), new_staked);
        Ok(())
    }

    fn apply_unstake(&mut self, ctx: &CallContext, amount: Amount) -> Result<()> {
        self.ensure_not_paused()?;
        ensure!(amount.is_positive(), LedgerError::InvalidAmount);

        let staked = self.staked_of(&ctx.caller);
        ensure!(staked >= amount, LedgerError::InsufficientStake);

        let new_staked = staked.checked_sub(amount)?;
        let new_balance = self.balance_of(&ctx.caller).checked_add(amount)?;

        self.staked.insert(ctx.caller.clone(), new_staked);
        self.balances.insert(ctx.caller.clone(), new_balance);
        Ok(())
    }
}

/// Log a rejected call at debug level and pass the error through
fn rejected(op: &str, ctx: &CallContext, err: LedgerError) -> LedgerError {
    tracing::debug!(
        op,
        caller = %ctx.caller,
        height = ctx.block_height,
        code = err.code(),
        "call rejected: {}",
        err
    );
    err
}

impl TokenLedger for MemoryLedger {
    fn set_paused(&mut self, ctx: &CallContext, pause: bool) -> Result<bool> {
        self.ensure_admin(ctx)
            .map_err(|e| rejected("set_paused", ctx, e))?;
        self.paused = pause;
        tracing::info!("Ledger {} by {}", if pause { "paused" } else { "unpaused" }, ctx.caller);
        Ok(pause)
    }

    fn set_redemption_enabled(&mut self, ctx: &CallContext, enabled: bool) -> Result<bool> {
        self.ensure_admin(ctx)
            .map_err(|e| rejected("set_redemption_enabled", ctx, e))?;
        self.redemption_enabled = enabled;
        tracing::info!(
            "Redemption {} by {}",
            if enabled { "enabled" } else { "disabled" },
            ctx.caller
        );
        Ok(enabled)
    }

    fn set_oracle(&mut self, ctx: &CallContext, new_oracle: AccountId) -> Result<bool> {
        self.ensure_admin(ctx)
            .and_then(|_| {
                ensure!(!new_oracle.is_burn(), LedgerError::InvalidRecipient);
                Ok(())
            })
            .map_err(|e| rejected("set_oracle", ctx, e))?;
        tracing::info!("Oracle rotated from {} to {}", self.config.oracle, new_oracle);
        self.config.oracle = new_oracle;
        Ok(true)
    }

    fn mint(
        &mut self,
        ctx: &CallContext,
        recipient: AccountId,
        amount: Amount,
        oracle_verified: bool,
    ) -> Result<bool> {
        self.apply_mint(ctx, &recipient, amount)
            .map_err(|e| rejected("mint", ctx, e))?;
        tracing::info!(
            oracle_verified,
            "Minted {} to {} at block {} (supply {})",
            amount,
            recipient,
            ctx.block_height,
            self.total_supply
        );
        Ok(true)
    }

    fn redeem(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool> {
        self.apply_redeem(ctx, amount)
            .map_err(|e| rejected("redeem", ctx, e))?;
        tracing::info!(
            "Redeemed {} from {} at block {} (supply {}, locked until {})",
            amount,
            ctx.caller,
            ctx.block_height,
            self.total_supply,
            self.redemption_lock_of(&ctx.caller)
        );
        Ok(true)
    }

    fn transfer(
        &mut self,
        ctx: &CallContext,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<bool> {
        self.apply_transfer(ctx, &recipient, amount)
            .map_err(|e| rejected("transfer", ctx, e))?;
        tracing::debug!("Transferred {} from {} to {}", amount, ctx.caller, recipient);
        Ok(true)
    }

    fn stake(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool> {
        self.apply_stake(ctx, amount)
            .map_err(|e| rejected("stake", ctx, e))?;
        tracing::debug!("{} staked {}", ctx.caller, amount);
        Ok(true)
    }

    fn unstake(&mut self, ctx: &CallContext, amount: Amount) -> Result<bool> {
        self.apply_unstake(ctx, amount)
            .map_err(|e| rejected("unstake", ctx, e))?;
        tracing::debug!("{} unstaked {}", ctx.caller, amount);
        Ok(true)
    }

    fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_redemption_enabled(&self) -> bool {
        self.redemption_enabled
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn staked_of(&self, account: &AccountId) -> Amount {
        self.staked.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn redemption_lock_of(&self, account: &AccountId) -> BlockHeight {
        self.redemption_locks.get(account).copied().unwrap_or(0)
    }

    fn last_mint_event(&self) -> Option<&SupplyEvent> {
        self.last_mint_event.as_ref()
    }

    fn last_redemption_event(&self) -> Option<&SupplyEvent> {
        self.last_redemption_event.as_ref()
    }

    fn total_staked(&self) -> Result<Amount> {
        Amount::checked_sum(self.staked.values().copied())
    }

    fn list_accounts(&self) -> Vec<AccountId> {
        let accounts: BTreeSet<&AccountId> =
            self.balances.keys().chain(self.staked.keys()).collect();
        accounts.into_iter().cloned().collect()
    }

    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            config: self.config.clone(),
            paused: self.paused,
            redemption_enabled: self.redemption_enabled,
            total_supply: self.total_supply,
            balances: self.balances.clone(),
            staked: self.staked.clone(),
            redemption_locks: self.redemption_locks.clone(),
            last_mint_event: self.last_mint_event.clone(),
            last_redemption_event: self.last_redemption_event.clone(),
        }
    }

    fn restore(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        snapshot.config.validate()?;
        // Staking moves tokens out of balances without burning them
        let holdings = snapshot.holdings().map_err(|_| {
            LedgerError::Config("snapshot balances and stakes overflow".to_string())
        })?;
        if holdings != snapshot.total_supply {
            return Err(LedgerError::Config(format!(
                "snapshot balances and stakes sum to {} but total supply is {}",
                holdings, snapshot.total_supply
            )));
        }
        if snapshot.total_supply > snapshot.config.max_supply {
            return Err(LedgerError::Config(format!(
                "snapshot supply {} exceeds cap {}",
                snapshot.total_supply, snapshot.config.max_supply
            )));
        }

        self.config = snapshot.config.clone();
        self.paused = snapshot.paused;
        self.redemption_enabled = snapshot.redemption_enabled;
        self.total_supply = snapshot.total_supply;
        self.balances = snapshot.balances.clone();
        self.staked = snapshot.staked.clone();
        self.redemption_locks = snapshot.redemption_locks.clone();
        self.last_mint_event = snapshot.last_mint_event.clone();
        self.last_redemption_event = snapshot.last_redemption_event.clone();
        Ok(())
    }
}
