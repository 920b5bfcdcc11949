//! Constants for the yield asset manager

/// Seed for pool ledger PDAs
pub const POOL_LEDGER_SEED: &[u8] = b"pool_ledger";

/// Seed for asset manager PDAs
pub const ASSET_MANAGER_SEED: &[u8] = b"asset_manager";

/// Seed for share vault PDAs
pub const SHARE_VAULT_SEED: &[u8] = b"share_vault";

/// Seed for gauge PDAs
pub const GAUGE_SEED: &[u8] = b"gauge";

/// Seed for reward forwarder PDAs
pub const REWARD_FORWARDER_SEED: &[u8] = b"reward_forwarder";

/// Seed for relayer PDAs
pub const RELAYER_SEED: &[u8] = b"relayer";

/// Maximum number of tokens tracked by one pool ledger
pub const MAX_POOL_TOKENS: usize = 8;

/// Maximum number of share holders in a share vault
pub const MAX_VAULT_HOLDERS: usize = 16;

/// Maximum number of holders with pending gauge rewards
pub const MAX_GAUGE_ACCRUALS: usize = 16;

/// Maximum number of reward mints a forwarder keeps balances for
pub const MAX_REWARD_MINTS: usize = 8;
