//! Shared fixtures for unit tests

use anchor_lang::prelude::*;

use crate::{
    interfaces::{Custodian, PoolBalances, PoolId, YieldVault},
    math::ONE,
    relayer::ManagedPool,
    state::{
        AssetManager, AssetManagerParams, Gauge, InvestmentConfig, JoinPoolRequest, PoolLedger,
        RebalanceOutcome, RewardForwarder, ShareVault,
    },
};

/// `num / den` as an 18-decimal fraction
pub fn fp(num: u64, den: u64) -> u64 {
    ONE / den * num
}

pub fn pool_id(seed: u8) -> PoolId {
    [seed; 32]
}

/// Share vault that can be told to misbehave
#[derive(Clone, Debug)]
pub struct MockVault {
    pub inner: ShareVault,
    /// When false, deposits are absorbed without minting shares
    pub return_shares: bool,
    /// When false, withdrawals deliver half of what was asked
    pub return_tokens: bool,
    /// When false, withdrawals pay out without burning shares
    pub burn_shares: bool,
    /// Paid out on every withdrawal on top of what was asked
    pub withdraw_bonus: u64,
}

impl MockVault {
    pub fn new(asset: Pubkey, deposit_fee_bps: u64) -> Self {
        Self {
            inner: ShareVault {
                asset,
                authority: Pubkey::new_unique(),
                deposit_fee_bps,
                ..Default::default()
            },
            return_shares: true,
            return_tokens: true,
            burn_shares: true,
            withdraw_bonus: 0,
        }
    }
}

impl YieldVault for MockVault {
    fn asset(&self) -> Pubkey {
        self.inner.asset
    }

    fn deposit(&mut self, owner: &Pubkey, assets: u64) -> Result<u64> {
        if !self.return_shares {
            self.inner.total_assets += assets;
            return Ok(0);
        }
        self.inner.deposit(owner, assets)
    }

    fn withdraw(&mut self, owner: &Pubkey, assets: u64) -> Result<u64> {
        if !self.burn_shares {
            self.inner.total_assets -= assets;
            return Ok(assets);
        }
        let delivered = self.inner.withdraw(owner, assets)?;
        if !self.return_tokens {
            return Ok(delivered / 2);
        }
        Ok(delivered + self.withdraw_bonus)
    }

    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.inner.balance_of(owner)
    }

    fn convert_to_assets(&self, shares: u64) -> Result<u64> {
        self.inner.convert_to_assets(shares)
    }
}

/// A pool with one managed token, wired to a vault, a gauge and a forwarder
pub struct Fixture {
    pub ledger: PoolLedger,
    pub manager: AssetManager,
    pub manager_key: Pubkey,
    pub vault: MockVault,
    pub gauge: Gauge,
    pub forwarder: RewardForwarder,
    pub token: Pubkey,
    pub relayer_key: Pubkey,
    pub pool_authority: Pubkey,
}

impl Fixture {
    /// Target 0.8, critical band 0.1 to 0.9
    pub fn config() -> InvestmentConfig {
        InvestmentConfig::new(fp(8, 10), fp(9, 10), fp(1, 10))
    }

    pub fn uninitialized(deposit_fee_bps: u64) -> Self {
        let token = Pubkey::new_unique();
        let relayer_key = Pubkey::new_unique();
        let pool_authority = Pubkey::new_unique();

        let mut ledger = PoolLedger {
            pool_id: pool_id(1),
            authority: pool_authority,
            relayer: relayer_key,
            ..Default::default()
        };
        ledger.add_token(token).unwrap();

        let vault = MockVault::new(token, deposit_fee_bps);
        let gauge = Gauge {
            vault: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            ..Default::default()
        };

        let custodian = Pubkey::new_unique();
        let yield_vault = Pubkey::new_unique();
        let mut manager = AssetManager::new(
            AssetManagerParams {
                pool_id: pool_id(1),
                token,
                custodian,
                yield_vault,
                reward_forwarder: Pubkey::new_unique(),
                gauge: Some(gauge.vault),
            },
            255,
        )
        .unwrap();
        manager
            .bind(&pool_authority, &custodian, &ledger, &yield_vault, &vault)
            .unwrap();

        Self {
            ledger,
            manager,
            manager_key: Pubkey::new_unique(),
            vault,
            gauge,
            forwarder: RewardForwarder::default(),
            token,
            relayer_key,
            pool_authority,
        }
    }

    pub fn new(deposit_fee_bps: u64) -> Self {
        let mut fx = Self::uninitialized(deposit_fee_bps);
        fx.manager
            .initialize(&fx.manager_key, &pool_id(1), &mut fx.ledger)
            .unwrap();
        fx.manager
            .set_config(&fx.pool_authority, &pool_id(1), Self::config())
            .unwrap();
        fx
    }

    /// Credits pool cash directly, without rebalancing.
    pub fn join(&mut self, amount: u64) {
        let request = JoinPoolRequest {
            assets: vec![self.token],
            max_amounts_in: vec![amount],
        };
        self.ledger
            .join(&self.relayer_key, &pool_id(1), &request)
            .unwrap();
    }

    pub fn set_target(&mut self, target: u64) {
        let config = InvestmentConfig {
            target_percentage: target,
            ..Self::config()
        };
        self.manager
            .set_config(&self.pool_authority, &pool_id(1), config)
            .unwrap();
    }

    /// Balances as recorded by the pool ledger
    pub fn balances(&self) -> PoolBalances {
        self.ledger
            .pool_token_balances(&pool_id(1), &self.token)
            .unwrap()
    }

    pub fn aum(&self) -> u64 {
        self.manager.aum(&self.manager_key, &self.vault).unwrap()
    }

    pub fn max_investable(&self) -> i128 {
        self.manager
            .max_investable_balance(&self.manager_key, &pool_id(1), &self.ledger, &self.vault)
            .unwrap()
    }

    pub fn rebalance(&mut self, force: bool) -> Result<RebalanceOutcome> {
        self.manager.rebalance(
            &self.manager_key,
            &pool_id(1),
            force,
            &mut self.ledger,
            &mut self.vault,
        )
    }

    pub fn pool(&mut self) -> ManagedPool<'_, MockVault, Gauge, RewardForwarder> {
        ManagedPool {
            ledger: &mut self.ledger,
            manager: &self.manager,
            manager_key: self.manager_key,
            vault: &mut self.vault,
            gauge: Some(&mut self.gauge),
            forwarder: Some(&mut self.forwarder),
        }
    }
}
