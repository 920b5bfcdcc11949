//! Reward gauge attached to a share vault

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_GAUGE_ACCRUALS,
    error::AssetManagerError,
    interfaces::{RewardGauge, TokenAmount},
};

#[derive(Copy, Clone, PartialEq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct RewardAccrual {
    pub holder: Pubkey,
    pub amount: u64,
}

#[account]
#[derive(Default, Debug)]
pub struct Gauge {
    /// Share vault whose holders earn from this gauge
    pub vault: Pubkey,
    pub reward_mint: Pubkey,
    /// Key allowed to accrue rewards
    pub authority: Pubkey,
    pub accrued: Vec<RewardAccrual>,
    pub bump: u8,
}

impl Gauge {
    pub const LEN: usize = 8
        + std::mem::size_of::<Gauge>()
        + MAX_GAUGE_ACCRUALS * std::mem::size_of::<RewardAccrual>();

    pub fn accrue(&mut self, holder: &Pubkey, amount: u64) -> Result<()> {
        if let Some(entry) = self.accrued.iter_mut().find(|a| a.holder == *holder) {
            entry.amount = entry
                .amount
                .checked_add(amount)
                .ok_or(AssetManagerError::MathOverflow)?;
            return Ok(());
        }
        require!(
            self.accrued.len() < MAX_GAUGE_ACCRUALS,
            AssetManagerError::CapacityReached
        );
        self.accrued.push(RewardAccrual {
            holder: *holder,
            amount,
        });
        Ok(())
    }

    pub fn accrued_to(&self, holder: &Pubkey) -> u64 {
        self.accrued
            .iter()
            .find(|a| a.holder == *holder)
            .map_or(0, |a| a.amount)
    }
}

impl RewardGauge for Gauge {
    fn claim(&mut self, holder: &Pubkey) -> Result<Vec<TokenAmount>> {
        let Some(entry) = self.accrued.iter_mut().find(|a| a.holder == *holder) else {
            return Ok(Vec::new());
        };
        let amount = std::mem::take(&mut entry.amount);
        if amount == 0 {
            return Ok(Vec::new());
        }
        Ok(vec![TokenAmount {
            mint: self.reward_mint,
            amount,
        }])
    }
}
