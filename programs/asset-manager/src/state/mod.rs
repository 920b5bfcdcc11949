//! State module for the yield asset manager
//!
//! The asset manager account and the ledgers it drives: the pool ledger acting
//! as custodian, the share vault, its reward gauge, the reward forwarder and
//! the relayer.

pub mod asset_manager;
pub mod gauge;
pub mod investment_config;
pub mod pool_ledger;
pub mod relayer;
pub mod reward_forwarder;
pub mod share_vault;

pub use asset_manager::*;
pub use gauge::*;
pub use investment_config::*;
pub use pool_ledger::*;
pub use relayer::*;
pub use reward_forwarder::*;
pub use share_vault::*;
