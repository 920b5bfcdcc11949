//! Investment thresholds for one pool token

use anchor_lang::prelude::*;

use crate::{
    error::AssetManagerError,
    math::{mul_down, ONE},
};

/// Fraction of a pool token's value that should sit in the yield vault,
/// together with the hysteresis band around it. All values are 18-decimal
/// fractions.
#[derive(Copy, Clone, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, Default, Debug)]
pub struct InvestmentConfig {
    pub target_percentage: u64,
    pub upper_critical_percentage: u64,
    pub lower_critical_percentage: u64,
}

/// Investment levels of an `InvestmentConfig` resolved against a total value
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AllocationBand {
    pub desired: u64,
    pub upper: u64,
    pub lower: u64,
}

impl InvestmentConfig {
    pub fn new(target: u64, upper_critical: u64, lower_critical: u64) -> Self {
        Self {
            target_percentage: target,
            upper_critical_percentage: upper_critical,
            lower_critical_percentage: lower_critical,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.upper_critical_percentage <= ONE,
            AssetManagerError::UpperCriticalTooHigh
        );
        require!(
            self.target_percentage <= self.upper_critical_percentage,
            AssetManagerError::TargetAboveUpperCritical
        );
        require!(
            self.lower_critical_percentage <= self.target_percentage,
            AssetManagerError::LowerCriticalAboveTarget
        );
        Ok(())
    }

    /// Resolves the percentages against `total`, rounding each level down.
    pub fn band(&self, total: u64) -> Result<AllocationBand> {
        Ok(AllocationBand {
            desired: mul_down(total, self.target_percentage)?,
            upper: mul_down(total, self.upper_critical_percentage)?,
            lower: mul_down(total, self.lower_critical_percentage)?,
        })
    }
}

impl AllocationBand {
    /// True when `aum` sits outside the critical band and must be rebalanced
    /// even without `force`.
    pub fn is_breached(&self, aum: u64) -> bool {
        aum > self.upper || aum < self.lower
    }
}
