mod context;
mod ledger;
mod memory;
mod call;
mod executor;

pub use context::CallContext;
pub use ledger::{LedgerSnapshot, TokenLedger};
pub use memory::MemoryLedger;
pub use call::Call;
pub use executor::{Executor, Receipt};
