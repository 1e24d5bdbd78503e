use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::error::StakeClientError;

/// Lockup tier selected at stake time
/// The program defines the lockup duration and APY of each tier; the values
/// here are only what the form displays.
/// Borsh encodes the variant index, so the declaration order is the on-wire
/// tag and must match the program's `LockupTier` enum.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LockupTier {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl LockupTier {
    /// All tiers in the order the form lists them
    pub const ALL: [LockupTier; 4] = [
        LockupTier::OneMonth,
        LockupTier::ThreeMonths,
        LockupTier::SixMonths,
        LockupTier::OneYear,
    ];

    /// Selector name used by the form and the program interface
    pub fn wire_name(&self) -> &'static str {
        match self {
            LockupTier::OneMonth => "oneMonth",
            LockupTier::ThreeMonths => "threeMonths",
            LockupTier::SixMonths => "sixMonths",
            LockupTier::OneYear => "oneYear",
        }
    }

    /// APY advertised by the program for this tier
    pub fn apy_percent(&self) -> u8 {
        match self {
            LockupTier::OneMonth => 5,
            LockupTier::ThreeMonths => 15,
            LockupTier::SixMonths => 20,
            LockupTier::OneYear => 30,
        }
    }

    /// Human-readable duration
    pub fn duration_label(&self) -> &'static str {
        match self {
            LockupTier::OneMonth => "1 Month",
            LockupTier::ThreeMonths => "3 Months",
            LockupTier::SixMonths => "6 Months",
            LockupTier::OneYear => "1 Year",
        }
    }

    /// Option label, e.g. "3 Months (15% APY)"
    pub fn label(&self) -> String {
        format!("{} ({}% APY)", self.duration_label(), self.apy_percent())
    }
}

impl fmt::Display for LockupTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for LockupTier {
    type Err = StakeClientError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LockupTier::ALL
            .into_iter()
            .find(|tier| tier.wire_name() == s)
            .ok_or_else(|| StakeClientError::InvalidLockupTier(s.to_string()))
    }
}
