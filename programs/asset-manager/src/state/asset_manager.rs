//! Asset manager account and rebalancing engine
//!
//! An asset manager is bound to one `(pool_id, token)` pair. It keeps a
//! configurable share of the pool's balance of that token in a yield vault and
//! reports the vault position back to the custodian as the pool's managed
//! balance.
//!
//! Capital moves in three steps: the vault call is made and its effect checked,
//! the custodian ledger is updated, and the managed balance is overwritten with
//! the freshly read AUM. Every top-level operation runs under a checkpoint of
//! the custodian and the vault, so a failure at any step leaves both untouched.

use anchor_lang::prelude::*;

use crate::{
    error::AssetManagerError,
    interfaces::{
        is_empty_pool_id, with_checkpoint, Custodian, PoolBalances, PoolId, RewardGauge,
        RewardSink, TokenAmount, YieldVault,
    },
    math::signed_delta,
    rewards::claim_and_forward,
    state::{InvestmentConfig, PoolLedger},
    vault_adapter::{total_underlying_value, VaultAdapter},
};

/// Construction parameters
#[derive(Clone, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct AssetManagerParams {
    pub pool_id: PoolId,
    pub token: Pubkey,
    pub custodian: Pubkey,
    pub yield_vault: Pubkey,
    pub reward_forwarder: Pubkey,
    pub gauge: Option<Pubkey>,
}

/// What a rebalance did
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RebalanceOutcome {
    /// Allocation inside the critical band and not forced
    Skipped,
    /// Already at target
    Balanced,
    Invested { amount: u64, shares: u64 },
    Divested { amount: u64 },
}

impl RebalanceOutcome {
    pub fn invested(&self) -> u64 {
        match self {
            RebalanceOutcome::Invested { amount, .. } => *amount,
            _ => 0,
        }
    }

    pub fn divested(&self) -> u64 {
        match self {
            RebalanceOutcome::Divested { amount } => *amount,
            _ => 0,
        }
    }
}

/// Asset manager account
#[account]
#[derive(Default, Debug)]
pub struct AssetManager {
    pub pool_id: PoolId,
    /// Managed token mint
    pub token: Pubkey,
    /// Pool ledger holding the token's cash
    pub custodian: Pubkey,
    pub yield_vault: Pubkey,
    /// Destination of claimed vault rewards
    pub reward_forwarder: Pubkey,
    pub gauge: Option<Pubkey>,
    /// Key allowed to call `capital_in` / `capital_out`, the pool's relayer
    pub rebalancer: Pubkey,
    /// Key allowed to write the investment config, the pool's authority
    pub pool_authority: Pubkey,
    pub config: InvestmentConfig,
    pub initialized: bool,
    pub bump: u8,
}

impl AssetManager {
    pub const LEN: usize = 8 + std::mem::size_of::<AssetManager>();

    pub fn new(params: AssetManagerParams, bump: u8) -> Result<Self> {
        require_keys_neq!(
            params.custodian,
            Pubkey::default(),
            AssetManagerError::ZeroCustodian
        );
        require_keys_neq!(
            params.yield_vault,
            Pubkey::default(),
            AssetManagerError::ZeroYieldVault
        );
        require_keys_neq!(params.token, Pubkey::default(), AssetManagerError::ZeroToken);
        require_keys_neq!(
            params.reward_forwarder,
            Pubkey::default(),
            AssetManagerError::ZeroRewardForwarder
        );

        Ok(Self {
            pool_id: params.pool_id,
            token: params.token,
            custodian: params.custodian,
            yield_vault: params.yield_vault,
            reward_forwarder: params.reward_forwarder,
            gauge: params.gauge,
            rebalancer: Pubkey::default(),
            pool_authority: Pubkey::default(),
            config: InvestmentConfig::default(),
            initialized: false,
            bump,
        })
    }

    /// Ties a freshly built manager to its pool. Only the pool authority may
    /// do so; it becomes the config writer and the pool's relayer becomes the
    /// rebalancer. The custodian and vault keys must be the ones the manager
    /// was built with, and the vault must hold the managed token.
    pub fn bind<V: YieldVault>(
        &mut self,
        creator: &Pubkey,
        ledger_key: &Pubkey,
        ledger: &PoolLedger,
        vault_key: &Pubkey,
        vault: &V,
    ) -> Result<()> {
        require_keys_eq!(*creator, ledger.authority, AssetManagerError::OnlyPool);
        require_keys_eq!(self.custodian, *ledger_key, AssetManagerError::InvalidDependency);
        self.ensure_pool(&ledger.pool_id)?;
        require_keys_eq!(self.yield_vault, *vault_key, AssetManagerError::InvalidDependency);
        require_keys_eq!(vault.asset(), self.token, AssetManagerError::VaultAssetMismatch);

        self.pool_authority = ledger.authority;
        self.rebalancer = ledger.relayer;
        Ok(())
    }

    /// Marks the manager live and registers `key` as the token's asset manager
    /// in the custodian. Succeeds once.
    pub fn initialize<C: Custodian>(
        &mut self,
        key: &Pubkey,
        pool_id: &PoolId,
        custodian: &mut C,
    ) -> Result<()> {
        require!(!self.initialized, AssetManagerError::AlreadyInitialized);
        require!(!is_empty_pool_id(pool_id), AssetManagerError::EmptyPoolId);
        self.ensure_pool(pool_id)?;

        custodian.register_asset_manager(pool_id, &self.token, key)?;
        self.initialized = true;
        Ok(())
    }

    pub fn set_config(
        &mut self,
        caller: &Pubkey,
        pool_id: &PoolId,
        config: InvestmentConfig,
    ) -> Result<()> {
        require_keys_eq!(*caller, self.pool_authority, AssetManagerError::OnlyPool);
        self.ensure_pool(pool_id)?;
        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn ensure_pool(&self, pool_id: &PoolId) -> Result<()> {
        require!(self.pool_id == *pool_id, AssetManagerError::IncorrectPoolId);
        Ok(())
    }

    fn ensure_live(&self, pool_id: &PoolId) -> Result<()> {
        self.ensure_pool(pool_id)?;
        require!(self.initialized, AssetManagerError::NotInitialized);
        Ok(())
    }

    pub fn aum<V: YieldVault>(&self, key: &Pubkey, vault: &V) -> Result<u64> {
        total_underlying_value(vault, key)
    }

    /// Pool cash as seen by the custodian, managed as the live AUM.
    pub fn pool_balances<C: Custodian, V: YieldVault>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        custodian: &C,
        vault: &V,
    ) -> Result<PoolBalances> {
        self.ensure_pool(pool_id)?;
        let cash = custodian.pool_token_balances(pool_id, &self.token)?.cash;
        Ok(PoolBalances {
            cash,
            managed: self.aum(key, vault)?,
        })
    }

    /// Amount still to invest at the current config, negative when
    /// over-invested.
    pub fn max_investable_balance<C: Custodian, V: YieldVault>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        custodian: &C,
        vault: &V,
    ) -> Result<i128> {
        let balances = self.pool_balances(key, pool_id, custodian, vault)?;
        let band = self.config.band(balances.total()?)?;
        Ok(signed_delta(band.desired, balances.managed))
    }

    /// Moves the vault position toward the target. Without `force` nothing
    /// happens while AUM stays inside the critical band.
    pub fn rebalance<C, V>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        force: bool,
        custodian: &mut C,
        vault: &mut V,
    ) -> Result<RebalanceOutcome>
    where
        C: Custodian + Clone,
        V: YieldVault + Clone,
    {
        self.ensure_live(pool_id)?;

        with_checkpoint(custodian, vault, |custodian, vault| {
            let cash = custodian.pool_token_balances(pool_id, &self.token)?.cash;
            let aum = self.aum(key, &*vault)?;
            let total = PoolBalances { cash, managed: aum }.total()?;
            let band = self.config.band(total)?;

            if !force && !band.is_breached(aum) {
                return Ok(RebalanceOutcome::Skipped);
            }

            match band.desired.cmp(&aum) {
                std::cmp::Ordering::Greater => {
                    let amount = band.desired - aum;
                    let shares = self.invest(key, pool_id, amount, custodian, vault)?;
                    Ok(RebalanceOutcome::Invested { amount, shares })
                }
                std::cmp::Ordering::Less => {
                    let amount = aum - band.desired;
                    self.divest(key, pool_id, amount, custodian, vault)?;
                    Ok(RebalanceOutcome::Divested { amount })
                }
                std::cmp::Ordering::Equal => Ok(RebalanceOutcome::Balanced),
            }
        })
    }

    /// Invests `amount` of pool cash on the rebalancer's request. Returns the
    /// shares received.
    pub fn capital_in<C, V>(
        &self,
        caller: &Pubkey,
        key: &Pubkey,
        pool_id: &PoolId,
        amount: u64,
        custodian: &mut C,
        vault: &mut V,
    ) -> Result<u64>
    where
        C: Custodian + Clone,
        V: YieldVault + Clone,
    {
        require_keys_eq!(*caller, self.rebalancer, AssetManagerError::OnlyRebalancer);
        self.ensure_live(pool_id)?;

        with_checkpoint(custodian, vault, |custodian, vault| {
            self.invest(key, pool_id, amount, custodian, vault)
        })
    }

    /// Returns `amount` of managed capital to pool cash on the rebalancer's
    /// request. Returns the tokens received from the vault.
    pub fn capital_out<C, V>(
        &self,
        caller: &Pubkey,
        key: &Pubkey,
        pool_id: &PoolId,
        amount: u64,
        custodian: &mut C,
        vault: &mut V,
    ) -> Result<u64>
    where
        C: Custodian + Clone,
        V: YieldVault + Clone,
    {
        require_keys_eq!(*caller, self.rebalancer, AssetManagerError::OnlyRebalancer);
        self.ensure_live(pool_id)?;

        with_checkpoint(custodian, vault, |custodian, vault| {
            self.divest(key, pool_id, amount, custodian, vault)
        })
    }

    /// Reports the live AUM to the custodian as the managed balance.
    pub fn update_balance_of_pool<C: Custodian, V: YieldVault>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        custodian: &mut C,
        vault: &V,
    ) -> Result<u64> {
        self.ensure_live(pool_id)?;
        let aum = self.aum(key, vault)?;
        custodian.update_managed_balance(key, pool_id, &self.token, aum)?;
        Ok(aum)
    }

    /// Claims vault incentives for `key` and forwards them. A manager without
    /// a gauge has nothing to claim.
    pub fn claim_rewards<G, F>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        gauge: Option<&mut G>,
        forwarder: &mut F,
    ) -> Result<Vec<TokenAmount>>
    where
        G: RewardGauge + Clone,
        F: RewardSink + Clone,
    {
        self.ensure_pool(pool_id)?;
        if self.gauge.is_none() {
            return Ok(Vec::new());
        }
        let gauge = gauge.ok_or(AssetManagerError::GaugeNotProvided)?;
        claim_and_forward(key, gauge, forwarder)
    }

    fn invest<C: Custodian, V: YieldVault>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        amount: u64,
        custodian: &mut C,
        vault: &mut V,
    ) -> Result<u64> {
        let cash = custodian.pool_token_balances(pool_id, &self.token)?.cash;
        require!(cash >= amount, AssetManagerError::InsufficientCash);

        let mut adapter = VaultAdapter::new(vault, *key);
        let shares = adapter.deposit(amount)?;
        let aum = adapter.total_underlying_value()?;

        custodian.transfer_to_manager(key, pool_id, &self.token, amount)?;
        custodian.update_managed_balance(key, pool_id, &self.token, aum)?;
        Ok(shares)
    }

    fn divest<C: Custodian, V: YieldVault>(
        &self,
        key: &Pubkey,
        pool_id: &PoolId,
        amount: u64,
        custodian: &mut C,
        vault: &mut V,
    ) -> Result<u64> {
        let mut adapter = VaultAdapter::new(vault, *key);
        let aum_before = adapter.total_underlying_value()?;
        let received = adapter.withdraw(amount)?;
        let aum_after = adapter.total_underlying_value()?;

        // sync first so yield earned since the last update is realised
        custodian.update_managed_balance(key, pool_id, &self.token, aum_before)?;
        // only the requested amount returns to cash, any surplus stays with the manager
        custodian.transfer_from_manager(key, pool_id, &self.token, amount)?;
        custodian.update_managed_balance(key, pool_id, &self.token, aum_after)?;
        Ok(received)
    }
}
