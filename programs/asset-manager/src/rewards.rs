//! Gauge reward claiming

use anchor_lang::prelude::*;

use crate::interfaces::{with_checkpoint, RewardGauge, RewardSink, TokenAmount};

/// Claims everything accrued to `holder` and hands it to `forwarder`. Returns
/// the non-zero amounts forwarded. Gauge and forwarder are left untouched if
/// any transfer fails.
pub fn claim_and_forward<G, F>(
    holder: &Pubkey,
    gauge: &mut G,
    forwarder: &mut F,
) -> Result<Vec<TokenAmount>>
where
    G: RewardGauge + Clone,
    F: RewardSink + Clone,
{
    with_checkpoint(gauge, forwarder, |gauge, forwarder| {
        let mut forwarded = Vec::new();
        for reward in gauge.claim(holder)? {
            if reward.amount == 0 {
                continue;
            }
            forwarder.receive(&reward.mint, reward.amount)?;
            forwarded.push(reward);
        }
        Ok(forwarded)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::MAX_REWARD_MINTS,
        error::AssetManagerError,
        state::{Gauge, RewardForwarder},
        test_utils::{pool_id, Fixture},
    };

    #[test]
    fn accrued_rewards_reach_the_forwarder() {
        let mut fx = Fixture::new(0);
        let mint = fx.gauge.reward_mint;
        fx.gauge.accrue(&fx.manager_key, 100).unwrap();

        let forwarded = fx
            .manager
            .claim_rewards(&fx.manager_key, &pool_id(1), Some(&mut fx.gauge), &mut fx.forwarder)
            .unwrap();

        assert_eq!(forwarded, vec![TokenAmount { mint, amount: 100 }]);
        assert_eq!(fx.forwarder.balance_of(&mint), 100);
        assert_eq!(fx.gauge.accrued_to(&fx.manager_key), 0);
    }

    #[test]
    fn manager_without_gauge_claims_nothing() {
        let mut fx = Fixture::new(0);
        fx.manager.gauge = None;
        fx.gauge.accrue(&fx.manager_key, 100).unwrap();

        let forwarded = fx
            .manager
            .claim_rewards(&fx.manager_key, &pool_id(1), None::<&mut Gauge>, &mut fx.forwarder)
            .unwrap();

        assert!(forwarded.is_empty());
        assert!(fx.forwarder.received.is_empty());
        assert_eq!(fx.gauge.accrued_to(&fx.manager_key), 100);
    }

    #[test]
    fn zero_rewards_leave_forwarder_unchanged() {
        let mut fx = Fixture::new(0);
        let forwarded = fx
            .manager
            .claim_rewards(&fx.manager_key, &pool_id(1), Some(&mut fx.gauge), &mut fx.forwarder)
            .unwrap();

        assert!(forwarded.is_empty());
        assert!(fx.forwarder.received.is_empty());
    }

    #[test]
    fn configured_gauge_must_be_supplied() {
        let mut fx = Fixture::new(0);
        let err = fx
            .manager
            .claim_rewards(&fx.manager_key, &pool_id(1), None::<&mut Gauge>, &mut fx.forwarder)
            .unwrap_err();
        assert_eq!(err, error!(AssetManagerError::GaugeNotProvided));
    }

    #[test]
    fn failed_forward_keeps_rewards_claimable() {
        let mut gauge = Gauge {
            reward_mint: Pubkey::new_unique(),
            ..Default::default()
        };
        let holder = Pubkey::new_unique();
        gauge.accrue(&holder, 100).unwrap();

        let mut forwarder = RewardForwarder::default();
        for _ in 0..MAX_REWARD_MINTS {
            forwarder.receive(&Pubkey::new_unique(), 1).unwrap();
        }

        let err = claim_and_forward(&holder, &mut gauge, &mut forwarder).unwrap_err();
        assert_eq!(err, error!(AssetManagerError::CapacityReached));
        assert_eq!(gauge.accrued_to(&holder), 100);
        assert_eq!(forwarder.balance_of(&gauge.reward_mint), 0);
    }
}
