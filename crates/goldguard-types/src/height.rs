use crate::error::{LedgerError, Result};

/// Block height supplied by the host (monotonic, never advanced by the ledger)
pub type BlockHeight = u64;

/// Height at which a lock of `period` blocks starting at `from` expires
pub fn lock_expiry(from: BlockHeight, period: u64) -> Result<BlockHeight> {
    from.checked_add(period).ok_or(LedgerError::ArithmeticOverflow)
}
