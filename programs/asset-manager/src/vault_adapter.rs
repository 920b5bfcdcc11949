//! Checked access to a yield vault on behalf of an asset manager
//!
//! The vault is not trusted: every deposit and withdraw is verified against
//! the manager's observed share and token balances.

use anchor_lang::prelude::*;

use crate::{error::AssetManagerError, interfaces::YieldVault};

pub struct VaultAdapter<'a, V: YieldVault> {
    vault: &'a mut V,
    owner: Pubkey,
}

impl<'a, V: YieldVault> VaultAdapter<'a, V> {
    pub fn new(vault: &'a mut V, owner: Pubkey) -> Self {
        Self { vault, owner }
    }

    /// Deposits `amount` and returns the shares the manager gained.
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        let shares_before = self.vault.balance_of(&self.owner);
        self.vault.deposit(&self.owner, amount)?;
        let shares_after = self.vault.balance_of(&self.owner);

        require!(
            shares_after > shares_before,
            AssetManagerError::NoSharesReceived
        );
        Ok(shares_after - shares_before)
    }

    /// Withdraws `amount` of underlying and returns what was delivered. The
    /// manager's shares must go down and at least `amount` must come back.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64> {
        let shares_before = self.vault.balance_of(&self.owner);
        let received = self.vault.withdraw(&self.owner, amount)?;
        let shares_after = self.vault.balance_of(&self.owner);

        require!(
            shares_after < shares_before,
            AssetManagerError::NoSharesBurned
        );
        require!(
            received >= amount,
            AssetManagerError::InsufficientTokensReceived
        );
        Ok(received)
    }

    pub fn total_underlying_value(&self) -> Result<u64> {
        total_underlying_value(&*self.vault, &self.owner)
    }
}

/// Underlying value of `owner`'s shares at the vault's current rate.
pub fn total_underlying_value<V: YieldVault>(vault: &V, owner: &Pubkey) -> Result<u64> {
    vault.convert_to_assets(vault.balance_of(owner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockVault;

    #[test]
    fn deposit_reports_share_delta() {
        let owner = Pubkey::new_unique();
        let mut vault = MockVault::new(Pubkey::new_unique(), 0);
        let mut adapter = VaultAdapter::new(&mut vault, owner);

        assert_eq!(adapter.deposit(100).unwrap(), 100);
        assert_eq!(adapter.deposit(50).unwrap(), 50);
        assert_eq!(adapter.total_underlying_value().unwrap(), 150);
    }

    #[test]
    fn deposit_without_shares_fails() {
        let owner = Pubkey::new_unique();
        let mut vault = MockVault::new(Pubkey::new_unique(), 0);
        vault.return_shares = false;
        let mut adapter = VaultAdapter::new(&mut vault, owner);

        assert_eq!(
            adapter.deposit(100).unwrap_err(),
            error!(AssetManagerError::NoSharesReceived)
        );
    }

    #[test]
    fn withdraw_must_burn_shares() {
        let owner = Pubkey::new_unique();
        let mut vault = MockVault::new(Pubkey::new_unique(), 0);
        VaultAdapter::new(&mut vault, owner).deposit(100).unwrap();

        vault.burn_shares = false;
        let mut adapter = VaultAdapter::new(&mut vault, owner);
        assert_eq!(
            adapter.withdraw(40).unwrap_err(),
            error!(AssetManagerError::NoSharesBurned)
        );

        let mut generous = MockVault::new(Pubkey::new_unique(), 0);
        generous.withdraw_bonus = 5;
        let mut adapter = VaultAdapter::new(&mut generous, owner);
        adapter.deposit(100).unwrap();
        assert_eq!(adapter.withdraw(40).unwrap(), 45);
        assert_eq!(generous.balance_of(&owner), 60);
    }

    #[test]
    fn short_withdraw_fails() {
        let owner = Pubkey::new_unique();
        let mut vault = MockVault::new(Pubkey::new_unique(), 0);
        let mut adapter = VaultAdapter::new(&mut vault, owner);
        adapter.deposit(100).unwrap();

        vault.return_tokens = false;
        let mut adapter = VaultAdapter::new(&mut vault, owner);
        assert_eq!(
            adapter.withdraw(40).unwrap_err(),
            error!(AssetManagerError::InsufficientTokensReceived)
        );
    }
}
