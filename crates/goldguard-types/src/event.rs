use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, BlockHeight};

/// Snapshot of the most recent supply change of one kind (mint or redemption).
/// Only the latest one is retained; it is not a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyEvent {
    /// Mint recipient, or the redeeming account
    pub recipient: AccountId,
    pub amount: Amount,
    pub block_height: BlockHeight,
}

impl SupplyEvent {
    pub fn new(recipient: AccountId, amount: Amount, block_height: BlockHeight) -> Self {
        SupplyEvent {
            recipient,
            amount,
            block_height,
        }
    }
}
