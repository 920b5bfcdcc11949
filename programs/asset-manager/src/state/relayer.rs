use anchor_lang::prelude::*;

use crate::interfaces::PoolId;

/// Reentrancy state of a relayer
#[derive(Copy, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub enum RelayerLock {
    #[default]
    Idle,
    Locked,
}

/// Relayer account, the pool ledger's only authorized joiner and the asset
/// manager's rebalancer
#[account]
#[derive(Default, Debug)]
pub struct RelayerState {
    /// Pool authority, the only key that may move capital through the relayer
    /// outside a join or exit
    pub authority: Pubkey,
    pub pool_id: PoolId,
    pub pool_ledger: Pubkey,
    pub lock: RelayerLock,
    pub bump: u8,
}

impl RelayerState {
    pub const LEN: usize = 8 + std::mem::size_of::<RelayerState>();
}
