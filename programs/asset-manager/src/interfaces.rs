//! Collaborator interfaces driven by the asset manager
//!
//! The rebalancing engine only ever talks to the pool custodian, the yield
//! vault, the reward gauge and the reward forwarder through these traits. The
//! program implements them with its own ledger accounts; tests swap in doubles
//! that misbehave on purpose.

use anchor_lang::prelude::*;

use crate::error::AssetManagerError;

/// Opaque 32-byte pool identifier. All zeroes is never a valid id.
pub type PoolId = [u8; 32];

pub fn is_empty_pool_id(pool_id: &PoolId) -> bool {
    pool_id.iter().all(|byte| *byte == 0)
}

/// Cash/managed split of one pool token
#[derive(Copy, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct PoolBalances {
    /// Held directly by the custodian
    pub cash: u64,
    /// Delegated to the asset manager
    pub managed: u64,
}

impl PoolBalances {
    pub fn total(&self) -> Result<u64> {
        Ok(self
            .cash
            .checked_add(self.managed)
            .ok_or(AssetManagerError::MathOverflow)?)
    }
}

/// Runs `op` against two collaborators and puts both back the way they were
/// if it fails.
pub fn with_checkpoint<A: Clone, B: Clone, T>(
    a: &mut A,
    b: &mut B,
    op: impl FnOnce(&mut A, &mut B) -> Result<T>,
) -> Result<T> {
    let checkpoint = (a.clone(), b.clone());
    let result = op(a, b);
    if result.is_err() {
        *a = checkpoint.0;
        *b = checkpoint.1;
    }
    result
}

/// Amount of a given mint
#[derive(Copy, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct TokenAmount {
    pub mint: Pubkey,
    pub amount: u64,
}

/// Ledger holding a pool's per-token cash and managed balances.
///
/// Every mutating call is gated to the asset manager registered for the
/// `(pool_id, token)` pair.
pub trait Custodian {
    fn pool_token_balances(&self, pool_id: &PoolId, token: &Pubkey) -> Result<PoolBalances>;

    fn register_asset_manager(
        &mut self,
        pool_id: &PoolId,
        token: &Pubkey,
        manager: &Pubkey,
    ) -> Result<()>;

    /// Moves `amount` from cash to managed and hands the tokens to the manager.
    fn transfer_to_manager(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        amount: u64,
    ) -> Result<()>;

    /// Moves `amount` from managed back to cash.
    fn transfer_from_manager(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        amount: u64,
    ) -> Result<()>;

    /// Overwrites the managed balance with the manager's reported value.
    fn update_managed_balance(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        managed: u64,
    ) -> Result<()>;
}

/// ERC-4626 style share vault.
pub trait YieldVault {
    /// Underlying token accepted by the vault
    fn asset(&self) -> Pubkey;

    /// Deposits `assets` on behalf of `owner`, returning the shares minted.
    fn deposit(&mut self, owner: &Pubkey, assets: u64) -> Result<u64>;

    /// Burns enough of `owner`'s shares to release `assets`, returning the
    /// underlying amount actually delivered.
    fn withdraw(&mut self, owner: &Pubkey, assets: u64) -> Result<u64>;

    fn balance_of(&self, owner: &Pubkey) -> u64;

    fn convert_to_assets(&self, shares: u64) -> Result<u64>;
}

/// Incentive source attached to a yield vault
pub trait RewardGauge {
    /// Pays out everything accrued to `holder`.
    fn claim(&mut self, holder: &Pubkey) -> Result<Vec<TokenAmount>>;
}

/// Receive-and-hold destination for claimed rewards
pub trait RewardSink {
    fn receive(&mut self, mint: &Pubkey, amount: u64) -> Result<()>;

    fn balance_of(&self, mint: &Pubkey) -> u64;
}
