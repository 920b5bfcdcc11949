//! ERC-4626 style share vault ledger
//!
//! Accounting only: deposits mint shares against `total_assets`, an optional
//! deposit fee is skimmed into `collected_fees` before shares are priced.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_VAULT_HOLDERS,
    error::AssetManagerError,
    interfaces::YieldVault,
    math::{bps_of, mul_div_down, mul_div_up, BPS_POWER},
};

#[derive(Copy, Clone, PartialEq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct ShareBalance {
    pub owner: Pubkey,
    pub shares: u64,
}

/// Share vault account
#[account]
#[derive(Default, Debug)]
pub struct ShareVault {
    /// Underlying mint
    pub asset: Pubkey,
    /// Creator, the only key allowed to attach a gauge
    pub authority: Pubkey,
    /// Underlying backing outstanding shares
    pub total_assets: u64,
    /// Outstanding shares
    pub total_supply: u64,
    /// Fee taken on deposit, in basis points
    pub deposit_fee_bps: u64,
    pub collected_fees: u64,
    pub holders: Vec<ShareBalance>,
    pub bump: u8,
}

impl ShareVault {
    pub const LEN: usize = 8
        + std::mem::size_of::<ShareVault>()
        + MAX_VAULT_HOLDERS * std::mem::size_of::<ShareBalance>();

    pub fn validate(&self) -> bool {
        self.asset != Pubkey::default()
            && self.deposit_fee_bps <= BPS_POWER
            && self.holders.len() <= MAX_VAULT_HOLDERS
    }

    /// Shares minted for `assets`, rounded down. 1:1 while the vault is empty.
    pub fn convert_to_shares(&self, assets: u64) -> Result<u64> {
        if self.total_supply == 0 || self.total_assets == 0 {
            return Ok(assets);
        }
        mul_div_down(assets, self.total_supply, self.total_assets)
    }

    /// Shares burned to release `assets`, rounded up.
    pub fn preview_withdraw(&self, assets: u64) -> Result<u64> {
        if self.total_supply == 0 || self.total_assets == 0 {
            return Ok(assets);
        }
        mul_div_up(assets, self.total_supply, self.total_assets)
    }

    fn holder_mut(&mut self, owner: &Pubkey) -> Result<&mut ShareBalance> {
        if let Some(index) = self.holders.iter().position(|h| h.owner == *owner) {
            return Ok(&mut self.holders[index]);
        }
        require!(
            self.holders.len() < MAX_VAULT_HOLDERS,
            AssetManagerError::CapacityReached
        );
        self.holders.push(ShareBalance {
            owner: *owner,
            shares: 0,
        });
        let last = self.holders.len() - 1;
        Ok(&mut self.holders[last])
    }
}

impl YieldVault for ShareVault {
    fn asset(&self) -> Pubkey {
        self.asset
    }

    fn deposit(&mut self, owner: &Pubkey, assets: u64) -> Result<u64> {
        let fee = bps_of(assets, self.deposit_fee_bps)?;
        let net = assets
            .checked_sub(fee)
            .ok_or(AssetManagerError::MathOverflow)?;
        let shares = self.convert_to_shares(net)?;

        let total_assets = self
            .total_assets
            .checked_add(net)
            .ok_or(AssetManagerError::MathOverflow)?;
        let total_supply = self
            .total_supply
            .checked_add(shares)
            .ok_or(AssetManagerError::MathOverflow)?;
        let collected_fees = self
            .collected_fees
            .checked_add(fee)
            .ok_or(AssetManagerError::MathOverflow)?;

        let holder = self.holder_mut(owner)?;
        holder.shares = holder
            .shares
            .checked_add(shares)
            .ok_or(AssetManagerError::MathOverflow)?;

        self.total_assets = total_assets;
        self.total_supply = total_supply;
        self.collected_fees = collected_fees;
        Ok(shares)
    }

    fn withdraw(&mut self, owner: &Pubkey, assets: u64) -> Result<u64> {
        require!(
            assets <= self.total_assets,
            AssetManagerError::InsufficientVaultLiquidity
        );
        let shares = self.preview_withdraw(assets)?;
        require!(
            self.balance_of(owner) >= shares,
            AssetManagerError::InsufficientShares
        );

        let holder = self.holder_mut(owner)?;
        holder.shares -= shares;
        self.total_supply = self
            .total_supply
            .checked_sub(shares)
            .ok_or(AssetManagerError::InsufficientShares)?;
        self.total_assets -= assets;
        Ok(assets)
    }

    fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.holders
            .iter()
            .find(|h| h.owner == *owner)
            .map_or(0, |h| h.shares)
    }

    fn convert_to_assets(&self, shares: u64) -> Result<u64> {
        if self.total_supply == 0 {
            return Ok(shares);
        }
        mul_div_down(shares, self.total_assets, self.total_supply)
    }
}
