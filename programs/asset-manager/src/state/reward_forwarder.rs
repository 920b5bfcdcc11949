use anchor_lang::prelude::*;

use crate::{
    constants::MAX_REWARD_MINTS,
    error::AssetManagerError,
    interfaces::{RewardSink, TokenAmount},
};

/// Fee collector that receives claimed rewards and holds them
#[account]
#[derive(Default, Debug)]
pub struct RewardForwarder {
    /// Running total received per mint
    pub received: Vec<TokenAmount>,
    pub bump: u8,
}

impl RewardForwarder {
    pub const LEN: usize = 8
        + std::mem::size_of::<RewardForwarder>()
        + MAX_REWARD_MINTS * std::mem::size_of::<TokenAmount>();
}

impl RewardSink for RewardForwarder {
    fn receive(&mut self, mint: &Pubkey, amount: u64) -> Result<()> {
        if let Some(entry) = self.received.iter_mut().find(|r| r.mint == *mint) {
            entry.amount = entry
                .amount
                .checked_add(amount)
                .ok_or(AssetManagerError::MathOverflow)?;
            return Ok(());
        }
        require!(
            self.received.len() < MAX_REWARD_MINTS,
            AssetManagerError::CapacityReached
        );
        self.received.push(TokenAmount {
            mint: *mint,
            amount,
        });
        Ok(())
    }

    fn balance_of(&self, mint: &Pubkey) -> u64 {
        self.received
            .iter()
            .find(|r| r.mint == *mint)
            .map_or(0, |r| r.amount)
    }
}
