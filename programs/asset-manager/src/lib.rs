//! Yield Asset Manager
//!
//! Keeps a configurable share of a pool token invested in an ERC-4626 style
//! yield vault. A rebalancing engine moves capital between the pool's cash
//! and the vault inside a critical band, and a relayer runs joins, exits and
//! reward claims so that capital follows liquidity without reentrancy.

use std::cell::Cell;

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

pub mod constants;
pub mod error;
pub mod interfaces;
pub mod math;
pub mod relayer;
pub mod rewards;
pub mod state;
pub mod vault_adapter;

#[cfg(test)]
mod test_utils;

use constants::*;
use error::AssetManagerError;
use interfaces::{is_empty_pool_id, Custodian, PoolBalances, PoolId};
use relayer::{ManagedPool, Relayer};
use state::*;

declare_id!("AXPaiHw82qN6Ue1f9PJ986Pp87sjkZCxu9MF42tZLswS");

#[program]
pub mod asset_manager {
    use super::*;

    // ========== POOL LEDGER INSTRUCTIONS ==========

    pub fn create_pool_ledger(ctx: Context<CreatePoolLedger>, pool_id: PoolId) -> Result<()> {
        require!(!is_empty_pool_id(&pool_id), AssetManagerError::EmptyPoolId);
        let (relayer, _) =
            Pubkey::find_program_address(&[RELAYER_SEED, pool_id.as_ref()], ctx.program_id);

        let pool_ledger = &mut ctx.accounts.pool_ledger;
        pool_ledger.pool_id = pool_id;
        pool_ledger.authority = ctx.accounts.authority.key();
        pool_ledger.relayer = relayer;
        pool_ledger.tokens = Vec::new();
        pool_ledger.bump = ctx.bumps.pool_ledger;
        require!(pool_ledger.validate(), AssetManagerError::InvalidLedgerConfig);

        msg!("Pool ledger created, relayer {}", relayer);
        Ok(())
    }

    pub fn register_pool_token(ctx: Context<RegisterPoolToken>) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        ctx.accounts.pool_ledger.add_token(mint)?;
        require!(
            ctx.accounts.pool_ledger.validate(),
            AssetManagerError::InvalidLedgerConfig
        );

        msg!("Pool token registered: {}", mint);
        Ok(())
    }

    // ========== VAULT INSTRUCTIONS ==========

    pub fn create_share_vault(ctx: Context<CreateShareVault>, deposit_fee_bps: u64) -> Result<()> {
        require!(deposit_fee_bps <= math::BPS_POWER, AssetManagerError::InvalidFee);

        let share_vault = &mut ctx.accounts.share_vault;
        share_vault.asset = ctx.accounts.asset_mint.key();
        share_vault.authority = ctx.accounts.authority.key();
        share_vault.total_assets = 0;
        share_vault.total_supply = 0;
        share_vault.deposit_fee_bps = deposit_fee_bps;
        share_vault.collected_fees = 0;
        share_vault.holders = Vec::new();
        share_vault.bump = ctx.bumps.share_vault;
        require!(share_vault.validate(), AssetManagerError::InvalidLedgerConfig);

        msg!("Share vault created with {} bps deposit fee", deposit_fee_bps);
        Ok(())
    }

    pub fn create_gauge(ctx: Context<CreateGauge>) -> Result<()> {
        let gauge = &mut ctx.accounts.gauge;
        gauge.vault = ctx.accounts.share_vault.key();
        gauge.reward_mint = ctx.accounts.reward_mint.key();
        gauge.authority = ctx.accounts.authority.key();
        gauge.accrued = Vec::new();
        gauge.bump = ctx.bumps.gauge;

        msg!("Gauge created");
        Ok(())
    }

    pub fn accrue_gauge_rewards(
        ctx: Context<AccrueGaugeRewards>,
        holder: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.gauge.accrue(&holder, amount)?;

        msg!("Accrued {} rewards to {}", amount, holder);
        Ok(())
    }

    pub fn create_reward_forwarder(ctx: Context<CreateRewardForwarder>) -> Result<()> {
        let reward_forwarder = &mut ctx.accounts.reward_forwarder;
        reward_forwarder.received = Vec::new();
        reward_forwarder.bump = ctx.bumps.reward_forwarder;

        msg!("Reward forwarder created");
        Ok(())
    }

    // ========== ASSET MANAGER INSTRUCTIONS ==========

    pub fn create_asset_manager(
        ctx: Context<CreateAssetManager>,
        params: AssetManagerParams,
    ) -> Result<()> {
        let mut manager = AssetManager::new(params, ctx.bumps.asset_manager)?;
        manager.bind(
            &ctx.accounts.authority.key(),
            &ctx.accounts.pool_ledger.key(),
            &ctx.accounts.pool_ledger,
            &ctx.accounts.share_vault.key(),
            &**ctx.accounts.share_vault,
        )?;

        emit!(AssetManagerCreatedEvent {
            asset_manager: ctx.accounts.asset_manager.key(),
            pool_id: manager.pool_id,
            token: manager.token,
            yield_vault: manager.yield_vault,
        });

        ctx.accounts.asset_manager.set_inner(manager);

        msg!("Asset manager created");
        Ok(())
    }

    pub fn initialize(ctx: Context<InitializeAssetManager>, pool_id: PoolId) -> Result<()> {
        let asset_manager = &mut ctx.accounts.asset_manager;
        let key = asset_manager.key();
        asset_manager.initialize(&key, &pool_id, &mut **ctx.accounts.pool_ledger)?;

        emit!(AssetManagerInitializedEvent {
            asset_manager: key,
            pool_id,
        });

        msg!("Asset manager initialised");
        Ok(())
    }

    pub fn set_config(
        ctx: Context<SetConfig>,
        pool_id: PoolId,
        config: InvestmentConfig,
    ) -> Result<()> {
        let authority = ctx.accounts.authority.key();
        let asset_manager = &mut ctx.accounts.asset_manager;
        asset_manager.set_config(&authority, &pool_id, config)?;

        emit!(InvestmentConfigSetEvent {
            asset_manager: asset_manager.key(),
            target_percentage: config.target_percentage,
            upper_critical_percentage: config.upper_critical_percentage,
            lower_critical_percentage: config.lower_critical_percentage,
        });

        Ok(())
    }

    pub fn rebalance(ctx: Context<Rebalance>, pool_id: PoolId, force: bool) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let key = accounts.asset_manager.key();
        let outcome = accounts.asset_manager.rebalance(
            &key,
            &pool_id,
            force,
            &mut **accounts.pool_ledger,
            &mut **accounts.share_vault,
        )?;

        let balances = accounts
            .pool_ledger
            .pool_token_balances(&pool_id, &accounts.asset_manager.token)?;

        emit!(RebalancedEvent {
            asset_manager: key,
            force,
            invested: outcome.invested(),
            divested: outcome.divested(),
            cash: balances.cash,
            managed: balances.managed,
        });

        msg!("Rebalance: {:?}", outcome);
        Ok(())
    }

    pub fn capital_in(ctx: Context<CapitalMove>, pool_id: PoolId, amount: u64) -> Result<u64> {
        let accounts = &mut *ctx.accounts;
        let key = accounts.asset_manager.key();
        let shares = accounts.asset_manager.capital_in(
            &accounts.relayer.key(),
            &key,
            &pool_id,
            amount,
            &mut **accounts.pool_ledger,
            &mut **accounts.share_vault,
        )?;

        msg!("Capital in: {} for {} shares", amount, shares);
        Ok(shares)
    }

    pub fn capital_out(ctx: Context<CapitalMove>, pool_id: PoolId, amount: u64) -> Result<u64> {
        let accounts = &mut *ctx.accounts;
        let key = accounts.asset_manager.key();
        let received = accounts.asset_manager.capital_out(
            &accounts.relayer.key(),
            &key,
            &pool_id,
            amount,
            &mut **accounts.pool_ledger,
            &mut **accounts.share_vault,
        )?;

        msg!("Capital out: {} received", received);
        Ok(received)
    }

    pub fn update_balance_of_pool(ctx: Context<UpdateBalanceOfPool>, pool_id: PoolId) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let key = accounts.asset_manager.key();
        let managed = accounts.asset_manager.update_balance_of_pool(
            &key,
            &pool_id,
            &mut **accounts.pool_ledger,
            &**accounts.share_vault,
        )?;

        emit!(ManagedBalanceUpdatedEvent {
            asset_manager: key,
            managed,
        });

        Ok(())
    }

    // ========== VIEW INSTRUCTIONS ==========

    pub fn get_aum(ctx: Context<ViewAssetManager>) -> Result<u64> {
        let key = ctx.accounts.asset_manager.key();
        ctx.accounts
            .asset_manager
            .aum(&key, &**ctx.accounts.share_vault)
    }

    pub fn get_pool_balances(ctx: Context<ViewAssetManager>, pool_id: PoolId) -> Result<PoolBalances> {
        let key = ctx.accounts.asset_manager.key();
        ctx.accounts.asset_manager.pool_balances(
            &key,
            &pool_id,
            &**ctx.accounts.pool_ledger,
            &**ctx.accounts.share_vault,
        )
    }

    pub fn max_investable_balance(ctx: Context<ViewAssetManager>, pool_id: PoolId) -> Result<i128> {
        let key = ctx.accounts.asset_manager.key();
        ctx.accounts.asset_manager.max_investable_balance(
            &key,
            &pool_id,
            &**ctx.accounts.pool_ledger,
            &**ctx.accounts.share_vault,
        )
    }

    pub fn get_token(ctx: Context<ViewAssetManager>) -> Result<Pubkey> {
        Ok(ctx.accounts.asset_manager.token)
    }

    // ========== RELAYER INSTRUCTIONS ==========

    pub fn create_relayer(ctx: Context<CreateRelayer>, pool_id: PoolId) -> Result<()> {
        let relayer = &mut ctx.accounts.relayer;
        relayer.authority = ctx.accounts.authority.key();
        relayer.pool_id = pool_id;
        relayer.pool_ledger = ctx.accounts.pool_ledger.key();
        relayer.lock = RelayerLock::Idle;
        relayer.bump = ctx.bumps.relayer;

        msg!("Relayer created");
        Ok(())
    }

    pub fn join_pool(
        ctx: Context<RelayPool>,
        pool_id: PoolId,
        recipient: Pubkey,
        request: JoinPoolRequest,
    ) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let relayer_key = accounts.relayer.key();
        let manager_key = accounts.asset_manager.key();
        let relayer = Relayer::new(relayer_key, Cell::from_mut(&mut accounts.relayer.lock));

        let mut pool = ManagedPool::<ShareVault, Gauge, RewardForwarder> {
            ledger: &mut **accounts.pool_ledger,
            manager: &*accounts.asset_manager,
            manager_key,
            vault: &mut **accounts.share_vault,
            gauge: None,
            forwarder: None,
        };
        let outcome = relayer.join_pool(&mut pool, &pool_id, &request)?;

        emit!(PoolJoinedEvent {
            pool_id,
            sender: accounts.sender.key(),
            recipient,
            invested: outcome.invested(),
            divested: outcome.divested(),
        });

        msg!("Pool joined, rebalance: {:?}", outcome);
        Ok(())
    }

    pub fn exit_pool(
        ctx: Context<RelayPool>,
        pool_id: PoolId,
        recipient: Pubkey,
        request: ExitPoolRequest,
    ) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let relayer_key = accounts.relayer.key();
        let manager_key = accounts.asset_manager.key();
        let relayer = Relayer::new(relayer_key, Cell::from_mut(&mut accounts.relayer.lock));

        let mut pool = ManagedPool::<ShareVault, Gauge, RewardForwarder> {
            ledger: &mut **accounts.pool_ledger,
            manager: &*accounts.asset_manager,
            manager_key,
            vault: &mut **accounts.share_vault,
            gauge: None,
            forwarder: None,
        };
        let report = relayer.exit_pool(&mut pool, &pool_id, &request)?;

        emit!(PoolExitedEvent {
            pool_id,
            sender: accounts.sender.key(),
            recipient,
            pulled: report.pulled,
            invested: report.rebalance.invested(),
            divested: report.rebalance.divested(),
        });

        msg!("Pool exited, pulled {} from asset manager", report.pulled);
        Ok(())
    }

    pub fn claim_asset_manager_rewards(
        ctx: Context<ClaimAssetManagerRewards>,
        pool_id: PoolId,
    ) -> Result<()> {
        let accounts = &mut *ctx.accounts;
        let relayer_key = accounts.relayer.key();
        let manager_key = accounts.asset_manager.key();
        let reward_forwarder = accounts.reward_forwarder.key();
        let relayer = Relayer::new(relayer_key, Cell::from_mut(&mut accounts.relayer.lock));

        let mut pool = ManagedPool::<ShareVault, Gauge, RewardForwarder> {
            ledger: &mut **accounts.pool_ledger,
            manager: &*accounts.asset_manager,
            manager_key,
            vault: &mut **accounts.share_vault,
            gauge: accounts.gauge.as_deref_mut().map(|gauge| &mut **gauge),
            forwarder: Some(&mut *accounts.reward_forwarder),
        };
        let forwarded = relayer.claim_asset_manager_rewards(&mut pool, &pool_id)?;

        for reward in forwarded.iter() {
            emit!(RewardsForwardedEvent {
                asset_manager: manager_key,
                reward_forwarder,
                mint: reward.mint,
                amount: reward.amount,
            });
        }

        msg!("Claimed {} reward mints", forwarded.len());
        Ok(())
    }
}

// ========== ACCOUNT STRUCTURES ==========

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct CreatePoolLedger<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = PoolLedger::LEN,
        seeds = [POOL_LEDGER_SEED, pool_id.as_ref()],
        bump
    )]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RegisterPoolToken<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_LEDGER_SEED, pool_ledger.pool_id.as_ref()],
        bump = pool_ledger.bump,
        has_one = authority @ AssetManagerError::OnlyPool,
    )]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    pub mint: Account<'info, Mint>,
}

#[derive(Accounts)]
pub struct CreateShareVault<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub asset_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = ShareVault::LEN,
        seeds = [SHARE_VAULT_SEED, authority.key().as_ref(), asset_mint.key().as_ref()],
        bump
    )]
    pub share_vault: Box<Account<'info, ShareVault>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreateGauge<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(has_one = authority @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,

    pub reward_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = Gauge::LEN,
        seeds = [GAUGE_SEED, share_vault.key().as_ref()],
        bump
    )]
    pub gauge: Box<Account<'info, Gauge>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AccrueGaugeRewards<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GAUGE_SEED, gauge.vault.as_ref()],
        bump = gauge.bump,
        has_one = authority @ AssetManagerError::InvalidDependency,
    )]
    pub gauge: Box<Account<'info, Gauge>>,
}

#[derive(Accounts)]
pub struct CreateRewardForwarder<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = RewardForwarder::LEN,
        seeds = [REWARD_FORWARDER_SEED, authority.key().as_ref()],
        bump
    )]
    pub reward_forwarder: Account<'info, RewardForwarder>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(params: AssetManagerParams)]
pub struct CreateAssetManager<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [POOL_LEDGER_SEED, params.pool_id.as_ref()],
        bump = pool_ledger.bump,
        has_one = authority @ AssetManagerError::OnlyPool,
    )]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    pub share_vault: Box<Account<'info, ShareVault>>,

    #[account(
        init,
        payer = authority,
        space = AssetManager::LEN,
        seeds = [ASSET_MANAGER_SEED, params.pool_id.as_ref(), params.token.as_ref()],
        bump
    )]
    pub asset_manager: Account<'info, AssetManager>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InitializeAssetManager<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.custodian @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,
}

#[derive(Accounts)]
pub struct SetConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
    )]
    pub asset_manager: Account<'info, AssetManager>,
}

#[derive(Accounts)]
pub struct Rebalance<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.custodian @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(mut, address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,
}

#[derive(Accounts)]
pub struct CapitalMove<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [RELAYER_SEED, relayer.pool_id.as_ref()],
        bump = relayer.bump,
        has_one = authority @ AssetManagerError::OnlyRebalancer,
    )]
    pub relayer: Account<'info, RelayerState>,

    #[account(
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
        constraint = asset_manager.pool_id == relayer.pool_id @ AssetManagerError::IncorrectPoolId,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.custodian @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(mut, address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,
}

#[derive(Accounts)]
pub struct UpdateBalanceOfPool<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.custodian @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,
}

#[derive(Accounts)]
pub struct ViewAssetManager<'info> {
    pub asset_manager: Account<'info, AssetManager>,

    #[account(address = asset_manager.custodian @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,
}

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct CreateRelayer<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [POOL_LEDGER_SEED, pool_id.as_ref()],
        bump = pool_ledger.bump,
        has_one = authority @ AssetManagerError::OnlyPool,
        constraint = pool_ledger.relayer == relayer.key() @ AssetManagerError::InvalidDependency,
    )]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(
        init,
        payer = authority,
        space = RelayerState::LEN,
        seeds = [RELAYER_SEED, pool_id.as_ref()],
        bump
    )]
    pub relayer: Account<'info, RelayerState>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct RelayPool<'info> {
    pub sender: Signer<'info>,

    #[account(mut, seeds = [RELAYER_SEED, pool_id.as_ref()], bump = relayer.bump)]
    pub relayer: Account<'info, RelayerState>,

    #[account(mut, address = relayer.pool_ledger @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
        constraint = asset_manager.custodian == pool_ledger.key() @ AssetManagerError::InvalidDependency,
        constraint = asset_manager.rebalancer == relayer.key() @ AssetManagerError::OnlyRebalancer,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,
}

#[derive(Accounts)]
#[instruction(pool_id: PoolId)]
pub struct ClaimAssetManagerRewards<'info> {
    pub caller: Signer<'info>,

    #[account(mut, seeds = [RELAYER_SEED, pool_id.as_ref()], bump = relayer.bump)]
    pub relayer: Account<'info, RelayerState>,

    #[account(mut, address = relayer.pool_ledger @ AssetManagerError::InvalidDependency)]
    pub pool_ledger: Box<Account<'info, PoolLedger>>,

    #[account(
        seeds = [ASSET_MANAGER_SEED, asset_manager.pool_id.as_ref(), asset_manager.token.as_ref()],
        bump = asset_manager.bump,
        constraint = asset_manager.custodian == pool_ledger.key() @ AssetManagerError::InvalidDependency,
    )]
    pub asset_manager: Account<'info, AssetManager>,

    #[account(mut, address = asset_manager.yield_vault @ AssetManagerError::InvalidDependency)]
    pub share_vault: Box<Account<'info, ShareVault>>,

    #[account(
        mut,
        constraint = asset_manager.gauge == Some(gauge.key()) @ AssetManagerError::InvalidDependency,
    )]
    pub gauge: Option<Box<Account<'info, Gauge>>>,

    #[account(mut, address = asset_manager.reward_forwarder @ AssetManagerError::InvalidDependency)]
    pub reward_forwarder: Account<'info, RewardForwarder>,
}

// ========== EVENTS ==========

#[event]
pub struct AssetManagerCreatedEvent {
    pub asset_manager: Pubkey,
    pub pool_id: [u8; 32],
    pub token: Pubkey,
    pub yield_vault: Pubkey,
}

#[event]
pub struct AssetManagerInitializedEvent {
    pub asset_manager: Pubkey,
    pub pool_id: [u8; 32],
}

#[event]
pub struct InvestmentConfigSetEvent {
    pub asset_manager: Pubkey,
    pub target_percentage: u64,
    pub upper_critical_percentage: u64,
    pub lower_critical_percentage: u64,
}

#[event]
pub struct RebalancedEvent {
    pub asset_manager: Pubkey,
    pub force: bool,
    pub invested: u64,
    pub divested: u64,
    pub cash: u64,
    pub managed: u64,
}

#[event]
pub struct ManagedBalanceUpdatedEvent {
    pub asset_manager: Pubkey,
    pub managed: u64,
}

#[event]
pub struct PoolJoinedEvent {
    pub pool_id: [u8; 32],
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub invested: u64,
    pub divested: u64,
}

#[event]
pub struct PoolExitedEvent {
    pub pool_id: [u8; 32],
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub pulled: u64,
    pub invested: u64,
    pub divested: u64,
}

#[event]
pub struct RewardsForwardedEvent {
    pub asset_manager: Pubkey,
    pub reward_forwarder: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}
