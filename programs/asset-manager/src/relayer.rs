//! Rebalancing relayer
//!
//! The relayer fronts joins and exits of a managed pool. It is the pool
//! ledger's only authorized joiner and the asset manager's rebalancer, so
//! capital can follow liquidity in the same call. Each relayed call holds the
//! relayer lock for its whole duration; a nested call finds it taken and fails.

use std::cell::Cell;

use anchor_lang::prelude::*;

use crate::{
    error::AssetManagerError,
    interfaces::{Custodian, PoolId, RewardGauge, RewardSink, TokenAmount, YieldVault},
    state::{AssetManager, ExitPoolRequest, JoinPoolRequest, PoolLedger, RebalanceOutcome, RelayerLock},
};

/// Pool operations the relayer sequences
pub trait RelayedPool {
    type Snapshot;

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);

    fn join(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &JoinPoolRequest) -> Result<()>;

    fn exit(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &ExitPoolRequest) -> Result<()>;

    /// Part of the requested exit of the managed token not covered by cash.
    fn managed_cash_shortfall(&self, pool_id: &PoolId, request: &ExitPoolRequest) -> Result<u64>;

    fn capital_out(&mut self, caller: &Pubkey, pool_id: &PoolId, amount: u64) -> Result<u64>;

    fn rebalance(&mut self, pool_id: &PoolId, force: bool) -> Result<RebalanceOutcome>;

    fn claim_rewards(&mut self, pool_id: &PoolId) -> Result<Vec<TokenAmount>>;
}

/// Result of a relayed exit
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ExitReport {
    /// Managed capital pulled back to cover the exit
    pub pulled: u64,
    pub rebalance: RebalanceOutcome,
}

pub struct Relayer<'a> {
    key: Pubkey,
    lock: &'a Cell<RelayerLock>,
}

/// Holds the relayer lock until dropped
pub struct LockGuard<'a> {
    lock: &'a Cell<RelayerLock>,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock.set(RelayerLock::Idle);
    }
}

impl<'a> Relayer<'a> {
    pub fn new(key: Pubkey, lock: &'a Cell<RelayerLock>) -> Self {
        Self { key, lock }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.get() == RelayerLock::Locked
    }

    fn enter(&self) -> Result<LockGuard<'a>> {
        require!(!self.is_locked(), AssetManagerError::RelayerReentered);
        self.lock.set(RelayerLock::Locked);
        Ok(LockGuard { lock: self.lock })
    }

    fn relayed<P: RelayedPool, T>(
        &self,
        pool: &mut P,
        op: impl FnOnce(&mut P) -> Result<T>,
    ) -> Result<T> {
        let _guard = self.enter()?;
        let snapshot = pool.snapshot();
        let result = op(pool);
        if result.is_err() {
            pool.restore(snapshot);
        }
        result
    }

    /// Joins on the caller's behalf, then lets the asset manager follow the
    /// new balance.
    pub fn join_pool<P: RelayedPool>(
        &self,
        pool: &mut P,
        pool_id: &PoolId,
        request: &JoinPoolRequest,
    ) -> Result<RebalanceOutcome> {
        self.relayed(pool, |pool| {
            pool.join(&self.key, pool_id, request)?;
            pool.rebalance(pool_id, false)
        })
    }

    /// Exits on the caller's behalf, first pulling from the asset manager
    /// whatever cash cannot cover.
    pub fn exit_pool<P: RelayedPool>(
        &self,
        pool: &mut P,
        pool_id: &PoolId,
        request: &ExitPoolRequest,
    ) -> Result<ExitReport> {
        self.relayed(pool, |pool| {
            let shortfall = pool.managed_cash_shortfall(pool_id, request)?;
            let pulled = if shortfall > 0 {
                pool.capital_out(&self.key, pool_id, shortfall)?
            } else {
                0
            };
            pool.exit(&self.key, pool_id, request)?;
            let rebalance = pool.rebalance(pool_id, false)?;
            Ok(ExitReport { pulled, rebalance })
        })
    }

    pub fn claim_asset_manager_rewards<P: RelayedPool>(
        &self,
        pool: &mut P,
        pool_id: &PoolId,
    ) -> Result<Vec<TokenAmount>> {
        self.relayed(pool, |pool| pool.claim_rewards(pool_id))
    }
}

/// A pool ledger with one managed token
pub struct ManagedPool<'a, V, G, F> {
    pub ledger: &'a mut PoolLedger,
    pub manager: &'a AssetManager,
    pub manager_key: Pubkey,
    pub vault: &'a mut V,
    pub gauge: Option<&'a mut G>,
    pub forwarder: Option<&'a mut F>,
}

impl<V, G, F> RelayedPool for ManagedPool<'_, V, G, F>
where
    V: YieldVault + Clone,
    G: RewardGauge + Clone,
    F: RewardSink + Clone,
{
    type Snapshot = (PoolLedger, V, Option<G>, Option<F>);

    fn snapshot(&self) -> Self::Snapshot {
        (
            self.ledger.clone(),
            self.vault.clone(),
            self.gauge.as_deref().cloned(),
            self.forwarder.as_deref().cloned(),
        )
    }

    fn restore(&mut self, snapshot: Self::Snapshot) {
        let (ledger, vault, gauge, forwarder) = snapshot;
        *self.ledger = ledger;
        *self.vault = vault;
        if let (Some(current), Some(saved)) = (self.gauge.as_deref_mut(), gauge) {
            *current = saved;
        }
        if let (Some(current), Some(saved)) = (self.forwarder.as_deref_mut(), forwarder) {
            *current = saved;
        }
    }

    fn join(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &JoinPoolRequest) -> Result<()> {
        self.ledger.join(sender, pool_id, request)
    }

    fn exit(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &ExitPoolRequest) -> Result<()> {
        self.ledger.exit(sender, pool_id, request)
    }

    fn managed_cash_shortfall(&self, pool_id: &PoolId, request: &ExitPoolRequest) -> Result<u64> {
        let requested = request.amount_out(&self.manager.token)?;
        let cash = self
            .ledger
            .pool_token_balances(pool_id, &self.manager.token)?
            .cash;
        Ok(requested.saturating_sub(cash))
    }

    fn capital_out(&mut self, caller: &Pubkey, pool_id: &PoolId, amount: u64) -> Result<u64> {
        self.manager.capital_out(
            caller,
            &self.manager_key,
            pool_id,
            amount,
            &mut *self.ledger,
            &mut *self.vault,
        )
    }

    fn rebalance(&mut self, pool_id: &PoolId, force: bool) -> Result<RebalanceOutcome> {
        self.manager.rebalance(
            &self.manager_key,
            pool_id,
            force,
            &mut *self.ledger,
            &mut *self.vault,
        )
    }

    fn claim_rewards(&mut self, pool_id: &PoolId) -> Result<Vec<TokenAmount>> {
        let forwarder = self
            .forwarder
            .as_deref_mut()
            .ok_or(AssetManagerError::InvalidDependency)?;
        self.manager
            .claim_rewards(&self.manager_key, pool_id, self.gauge.as_deref_mut(), forwarder)
    }
}
