pub mod constants;
mod account;
mod amount;
mod height;
mod event;
mod config;
mod hashing;
mod error;

pub use account::AccountId;
pub use amount::Amount;
pub use height::{lock_expiry, BlockHeight};
pub use event::SupplyEvent;
pub use config::LedgerConfig;
pub use hashing::{compute_hash, compute_json_hash, HashRef};
pub use error::{LedgerError, Result};

#[cfg(test)]
mod tests;
