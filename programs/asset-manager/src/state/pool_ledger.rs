//! Pool token ledger
//!
//! Tracks how much of each pool token is held as cash and how much has been
//! handed to an asset manager. Joins and exits only go through the pool's
//! relayer; managed balances only move at the request of the token's
//! registered asset manager.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_POOL_TOKENS,
    error::AssetManagerError,
    interfaces::{Custodian, PoolBalances, PoolId},
};

/// Balances of one token inside a pool
#[derive(Copy, Clone, PartialEq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct PoolTokenBalance {
    /// Token mint
    pub mint: Pubkey,
    /// Held directly by the ledger
    pub cash: u64,
    /// Delegated to the asset manager
    pub managed: u64,
    /// Asset manager allowed to move this token (default key when none)
    pub asset_manager: Pubkey,
}

/// Tokens a caller adds to the pool
#[derive(Clone, PartialEq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct JoinPoolRequest {
    pub assets: Vec<Pubkey>,
    pub max_amounts_in: Vec<u64>,
}

/// Tokens a caller takes out of the pool
#[derive(Clone, PartialEq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct ExitPoolRequest {
    pub assets: Vec<Pubkey>,
    pub min_amounts_out: Vec<u64>,
}

impl JoinPoolRequest {
    pub fn amounts(&self) -> Result<impl Iterator<Item = (&Pubkey, u64)>> {
        require!(
            self.assets.len() == self.max_amounts_in.len(),
            AssetManagerError::InvalidRequest
        );
        Ok(self.assets.iter().zip(self.max_amounts_in.iter().copied()))
    }
}

impl ExitPoolRequest {
    pub fn amounts(&self) -> Result<impl Iterator<Item = (&Pubkey, u64)>> {
        require!(
            self.assets.len() == self.min_amounts_out.len(),
            AssetManagerError::InvalidRequest
        );
        Ok(self.assets.iter().zip(self.min_amounts_out.iter().copied()))
    }

    /// Amount requested for `token`, zero when the token is not part of the exit.
    pub fn amount_out(&self, token: &Pubkey) -> Result<u64> {
        let mut total: u64 = 0;
        for (asset, amount) in self.amounts()? {
            if asset == token {
                total = total
                    .checked_add(amount)
                    .ok_or(AssetManagerError::MathOverflow)?;
            }
        }
        Ok(total)
    }
}

/// Pool ledger account
#[account]
#[derive(Default, Debug)]
pub struct PoolLedger {
    /// Pool identifier
    pub pool_id: PoolId,
    /// Pool owner, the only key allowed to configure asset managers
    pub authority: Pubkey,
    /// Relayer allowed to join and exit
    pub relayer: Pubkey,
    /// Per-token balances
    pub tokens: Vec<PoolTokenBalance>,
    /// PDA bump
    pub bump: u8,
}

impl PoolLedger {
    pub const LEN: usize = 8
        + std::mem::size_of::<PoolLedger>()
        + MAX_POOL_TOKENS * std::mem::size_of::<PoolTokenBalance>();

    pub fn validate(&self) -> bool {
        for i in 1..self.tokens.len() {
            let mint = self.tokens[i - 1].mint;
            if self.tokens[i..].iter().any(|token| token.mint == mint) {
                return false;
            }
        }

        !crate::interfaces::is_empty_pool_id(&self.pool_id)
            && self.authority != Pubkey::default()
            && self.relayer != Pubkey::default()
            && self.tokens.len() <= MAX_POOL_TOKENS
    }

    pub fn add_token(&mut self, mint: Pubkey) -> Result<()> {
        require!(
            self.tokens.iter().all(|token| token.mint != mint),
            AssetManagerError::TokenAlreadyRegistered
        );
        require!(
            self.tokens.len() < MAX_POOL_TOKENS,
            AssetManagerError::CapacityReached
        );
        self.tokens.push(PoolTokenBalance {
            mint,
            ..Default::default()
        });
        Ok(())
    }

    pub fn token(&self, mint: &Pubkey) -> Result<&PoolTokenBalance> {
        self.tokens
            .iter()
            .find(|token| token.mint == *mint)
            .ok_or_else(|| error!(AssetManagerError::UnsupportedToken))
    }

    fn token_mut(&mut self, mint: &Pubkey) -> Result<&mut PoolTokenBalance> {
        self.tokens
            .iter_mut()
            .find(|token| token.mint == *mint)
            .ok_or_else(|| error!(AssetManagerError::UnsupportedToken))
    }

    fn ensure_pool(&self, pool_id: &PoolId) -> Result<()> {
        require!(self.pool_id == *pool_id, AssetManagerError::IncorrectPoolId);
        Ok(())
    }

    /// Entry for `token`, only reachable by its registered asset manager
    fn managed_token_mut(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
    ) -> Result<&mut PoolTokenBalance> {
        self.ensure_pool(pool_id)?;
        let entry = self.token_mut(token)?;
        require!(
            entry.asset_manager != Pubkey::default() && entry.asset_manager == *manager,
            AssetManagerError::OnlyAssetManager
        );
        Ok(entry)
    }

    /// Credits every requested amount to cash. Pricing of the pool share
    /// issued in return is the pool's business, not the ledger's.
    pub fn join(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &JoinPoolRequest) -> Result<()> {
        require_keys_eq!(*sender, self.relayer, AssetManagerError::OnlyRelayerJoin);
        self.ensure_pool(pool_id)?;

        for (asset, amount) in request.amounts()? {
            let entry = self.token_mut(asset)?;
            entry.cash = entry
                .cash
                .checked_add(amount)
                .ok_or(AssetManagerError::MathOverflow)?;
        }
        Ok(())
    }

    /// Debits every requested amount from cash.
    pub fn exit(&mut self, sender: &Pubkey, pool_id: &PoolId, request: &ExitPoolRequest) -> Result<()> {
        require_keys_eq!(*sender, self.relayer, AssetManagerError::OnlyRelayerExit);
        self.ensure_pool(pool_id)?;

        for (asset, amount) in request.amounts()? {
            let entry = self.token_mut(asset)?;
            entry.cash = entry
                .cash
                .checked_sub(amount)
                .ok_or(AssetManagerError::InsufficientCash)?;
        }
        Ok(())
    }
}

impl Custodian for PoolLedger {
    fn pool_token_balances(&self, pool_id: &PoolId, token: &Pubkey) -> Result<PoolBalances> {
        self.ensure_pool(pool_id)?;
        let entry = self.token(token)?;
        Ok(PoolBalances {
            cash: entry.cash,
            managed: entry.managed,
        })
    }

    fn register_asset_manager(
        &mut self,
        pool_id: &PoolId,
        token: &Pubkey,
        manager: &Pubkey,
    ) -> Result<()> {
        self.ensure_pool(pool_id)?;
        let entry = self.token_mut(token)?;
        require!(
            entry.asset_manager == Pubkey::default() || entry.asset_manager == *manager,
            AssetManagerError::AssetManagerAlreadyRegistered
        );
        entry.asset_manager = *manager;
        Ok(())
    }

    fn transfer_to_manager(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let entry = self.managed_token_mut(manager, pool_id, token)?;
        let cash = entry
            .cash
            .checked_sub(amount)
            .ok_or(AssetManagerError::InsufficientCash)?;
        let managed = entry
            .managed
            .checked_add(amount)
            .ok_or(AssetManagerError::MathOverflow)?;
        entry.cash = cash;
        entry.managed = managed;
        Ok(())
    }

    fn transfer_from_manager(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let entry = self.managed_token_mut(manager, pool_id, token)?;
        let managed = entry
            .managed
            .checked_sub(amount)
            .ok_or(AssetManagerError::InsufficientManaged)?;
        let cash = entry
            .cash
            .checked_add(amount)
            .ok_or(AssetManagerError::MathOverflow)?;
        entry.cash = cash;
        entry.managed = managed;
        Ok(())
    }

    fn update_managed_balance(
        &mut self,
        manager: &Pubkey,
        pool_id: &PoolId,
        token: &Pubkey,
        managed: u64,
    ) -> Result<()> {
        let entry = self.managed_token_mut(manager, pool_id, token)?;
        entry.managed = managed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::pool_id;

    fn ledger() -> (PoolLedger, Pubkey, Pubkey) {
        let relayer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let mut ledger = PoolLedger {
            pool_id: pool_id(1),
            authority: Pubkey::new_unique(),
            relayer,
            ..Default::default()
        };
        ledger.add_token(mint).unwrap();
        (ledger, relayer, mint)
    }

    fn join(assets: Vec<Pubkey>, amounts: Vec<u64>) -> JoinPoolRequest {
        JoinPoolRequest {
            assets,
            max_amounts_in: amounts,
        }
    }

    #[test]
    fn only_relayer_can_join_or_exit() {
        let (mut ledger, _, mint) = ledger();
        let stranger = Pubkey::new_unique();

        let err = ledger
            .join(&stranger, &pool_id(1), &join(vec![mint], vec![10]))
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::OnlyRelayerJoin));

        let exit = ExitPoolRequest {
            assets: vec![mint],
            min_amounts_out: vec![1],
        };
        let err = ledger.exit(&stranger, &pool_id(1), &exit).unwrap_err();
        assert_eq!(err, error!(AssetManagerError::OnlyRelayerExit));
    }

    #[test]
    fn join_and_exit_move_cash() {
        let (mut ledger, relayer, mint) = ledger();
        ledger.join(&relayer, &pool_id(1), &join(vec![mint], vec![100])).unwrap();
        assert_eq!(ledger.token(&mint).unwrap().cash, 100);

        let exit = ExitPoolRequest {
            assets: vec![mint],
            min_amounts_out: vec![40],
        };
        ledger.exit(&relayer, &pool_id(1), &exit).unwrap();
        assert_eq!(ledger.token(&mint).unwrap().cash, 60);

        let too_much = ExitPoolRequest {
            assets: vec![mint],
            min_amounts_out: vec![61],
        };
        let err = ledger.exit(&relayer, &pool_id(1), &too_much).unwrap_err();
        assert_eq!(err, error!(AssetManagerError::InsufficientCash));
    }

    #[test]
    fn mismatched_request_lengths_are_rejected() {
        let (mut ledger, relayer, mint) = ledger();
        let err = ledger
            .join(&relayer, &pool_id(1), &join(vec![mint], vec![]))
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::InvalidRequest));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let (mut ledger, relayer, _) = ledger();
        let err = ledger
            .join(&relayer, &pool_id(1), &join(vec![Pubkey::new_unique()], vec![1]))
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::UnsupportedToken));
    }

    #[test]
    fn duplicate_tokens_are_rejected() {
        let (mut ledger, _, mint) = ledger();
        assert_eq!(
            ledger.add_token(mint).unwrap_err(),
            error!(AssetManagerError::TokenAlreadyRegistered)
        );
        assert!(ledger.validate());
    }

    #[test]
    fn incomplete_ledger_does_not_validate() {
        let (ledger, _, _) = ledger();
        assert!(ledger.validate());

        for broken in [
            PoolLedger { pool_id: [0; 32], ..ledger.clone() },
            PoolLedger { authority: Pubkey::default(), ..ledger.clone() },
            PoolLedger { relayer: Pubkey::default(), ..ledger.clone() },
            PoolLedger { tokens: vec![ledger.tokens[0]; 2], ..ledger.clone() },
        ] {
            assert!(!broken.validate());
        }
    }

    #[test]
    fn managed_balance_moves_are_gated_to_the_registered_manager() {
        let (mut ledger, relayer, mint) = ledger();
        let manager = Pubkey::new_unique();
        ledger.join(&relayer, &pool_id(1), &join(vec![mint], vec![100])).unwrap();

        let err = ledger
            .transfer_to_manager(&manager, &pool_id(1), &mint, 10)
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::OnlyAssetManager));

        ledger.register_asset_manager(&pool_id(1), &mint, &manager).unwrap();
        ledger.transfer_to_manager(&manager, &pool_id(1), &mint, 30).unwrap();
        assert_eq!(
            ledger.pool_token_balances(&pool_id(1), &mint).unwrap(),
            PoolBalances { cash: 70, managed: 30 }
        );

        ledger.transfer_from_manager(&manager, &pool_id(1), &mint, 10).unwrap();
        ledger.update_managed_balance(&manager, &pool_id(1), &mint, 25).unwrap();
        assert_eq!(
            ledger.pool_token_balances(&pool_id(1), &mint).unwrap(),
            PoolBalances { cash: 80, managed: 25 }
        );

        let other = Pubkey::new_unique();
        assert_eq!(
            ledger.register_asset_manager(&pool_id(1), &mint, &other).unwrap_err(),
            error!(AssetManagerError::AssetManagerAlreadyRegistered)
        );
    }

    #[test]
    fn failed_transfer_leaves_entry_untouched() {
        let (mut ledger, relayer, mint) = ledger();
        let manager = Pubkey::new_unique();
        ledger.join(&relayer, &pool_id(1), &join(vec![mint], vec![5])).unwrap();
        ledger.register_asset_manager(&pool_id(1), &mint, &manager).unwrap();

        let err = ledger
            .transfer_to_manager(&manager, &pool_id(1), &mint, 6)
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::InsufficientCash));
        assert_eq!(
            ledger.pool_token_balances(&pool_id(1), &mint).unwrap(),
            PoolBalances { cash: 5, managed: 0 }
        );
    }

    #[test]
    fn foreign_pool_id_is_rejected() {
        let (ledger, _, mint) = ledger();
        assert_eq!(
            ledger.pool_token_balances(&pool_id(2), &mint).unwrap_err(),
            error!(AssetManagerError::IncorrectPoolId)
        );
    }
}
