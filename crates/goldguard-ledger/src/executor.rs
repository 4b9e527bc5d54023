use goldguard_types::{AccountId, BlockHeight, HashRef, LedgerError, Result};
use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::context::CallContext;
use crate::ledger::TokenLedger;

/// Outcome of one call applied through the [`Executor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub call: Call,
    pub caller: AccountId,
    pub block_height: BlockHeight,
    pub outcome: std::result::Result<bool, LedgerError>,
    /// Digest of the ledger state after the call (unchanged on rejection)
    pub state_digest: HashRef,
}

impl Receipt {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Call boundary between a host and a ledger.
///
/// Each call is applied against a snapshot and rolled back if it fails, so
/// no rejected call can leave partial effects even if the ledger
/// implementation itself mutates before failing. Block heights must not go
/// backwards across calls.
#[derive(Debug)]
pub struct Executor<L: TokenLedger> {
    ledger: L,
    last_height: Option<BlockHeight>,
}

impl<L: TokenLedger> Executor<L> {
    pub fn new(ledger: L) -> Self {
        Executor {
            ledger,
            last_height: None,
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_inner(self) -> L {
        self.ledger
    }

    /// Highest block height applied so far. Rejected calls that passed the
    /// height check still raise it.
    pub fn last_height(&self) -> Option<BlockHeight> {
        self.last_height
    }

    /// Apply one call atomically.
    ///
    /// Call rejections are reported in [`Receipt::outcome`]; the outer error
    /// is reserved for failures of the executor itself (snapshot hashing or
    /// rollback).
    pub fn apply(&mut self, ctx: &CallContext, call: Call) -> Result<Receipt> {
        if let Some(last_seen) = self.last_height {
            if ctx.block_height < last_seen {
                tracing::warn!(
                    "Rejecting {} from {}: height {} below last seen {}",
                    call.name(),
                    ctx.caller,
                    ctx.block_height,
                    last_seen
                );
                let digest = self.ledger.snapshot().digest()?;
                return Ok(Receipt {
                    call,
                    caller: ctx.caller.clone(),
                    block_height: ctx.block_height,
                    outcome: Err(LedgerError::HeightRegression {
                        last_seen,
                        got: ctx.block_height,
                    }),
                    state_digest: digest,
                });
            }
        }
        self.last_height = Some(ctx.block_height);

        let checkpoint = self.ledger.snapshot();
        let outcome = call.clone().dispatch(&mut self.ledger, ctx);

        let state_digest = match &outcome {
            Ok(_) => self.ledger.snapshot().digest()?,
            Err(e) => {
                let digest = checkpoint.digest()?;
                if self.ledger.snapshot().digest()? != digest {
                    tracing::warn!(
                        "Rolling back partial effects of rejected {} (code {})",
                        call.name(),
                        e.code()
                    );
                    self.ledger.restore(&checkpoint)?;
                }
                digest
            }
        };

        Ok(Receipt {
            call,
            caller: ctx.caller.clone(),
            block_height: ctx.block_height,
            outcome,
            state_digest,
        })
    }

    /// Apply calls in order at one height; each call is atomic on its own
    pub fn apply_batch(
        &mut self,
        ctx: &CallContext,
        calls: impl IntoIterator<Item = Call>,
    ) -> Result<Vec<Receipt>> {
        calls.into_iter().map(|call| self.apply(ctx, call)).collect()
    }
}
