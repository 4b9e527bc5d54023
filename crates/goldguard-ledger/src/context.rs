use goldguard_types::{AccountId, BlockHeight};
use serde::{Deserialize, Serialize};

/// Per-call inputs supplied by the host: who is calling, and at what height.
/// The ledger never infers either on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: AccountId,
    pub block_height: BlockHeight,
}

impl CallContext {
    pub fn new(caller: impl Into<AccountId>, block_height: BlockHeight) -> Self {
        CallContext {
            caller: caller.into(),
            block_height,
        }
    }

    /// Same caller at a different height
    pub fn at(&self, block_height: BlockHeight) -> Self {
        CallContext {
            caller: self.caller.clone(),
            block_height,
        }
    }
}
