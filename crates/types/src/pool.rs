use std::ops::Deref;

use alloy_primitives::{U160, U256, Uint};
use malachite::{
    Natural, Rational,
    num::{arithmetic::traits::{Pow, PowerOf2}, conversion::traits::RoundingInto}
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqrtPriceX96(U160);

impl SqrtPriceX96 {
    /// Uses malachite.rs to approximate this value as a floating point number.
    /// Converts from the internal U160 representation of `sqrt(P)` to an
    /// approximated f64 representation of `P`, which is a change to the
    /// value of this number and why this isn't `From<SqrtPriceX96> for f64`
    pub fn as_f64(&self) -> f64 {
        let numerator = Natural::from_limbs_asc(self.0.as_limbs());
        let denominator: Natural = Natural::power_of_2(96u64);
        let sqrt_price = Rational::from_naturals(numerator, denominator);
        let price = sqrt_price.pow(2u64);
        let (res, _) = price.rounding_into(malachite::rounding_modes::RoundingMode::Floor);
        res
    }
}

impl Deref for SqrtPriceX96 {
    type Target = U160;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<U160> for SqrtPriceX96 {
    fn from(value: U160) -> Self {
        Self(value)
    }
}

impl From<SqrtPriceX96> for U256 {
    fn from(value: SqrtPriceX96) -> Self {
        Uint::from(value.0)
    }
}

/// The state of a pool at the moment it was read. Replaced wholesale on the
/// next successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolInfo {
    pub sqrt_price_x96: SqrtPriceX96,
    pub tick:           i32,
    pub liquidity:      u128
}

impl PoolInfo {
    /// token1 per token0, in raw base units.
    pub fn price(&self) -> f64 {
        self.sqrt_price_x96.as_f64()
    }

    /// token1 per token0 in whole tokens.
    pub fn adjusted_price(&self, token0_decimals: u8, token1_decimals: u8) -> f64 {
        self.price() * 10f64.powi(i32::from(token0_decimals) - i32::from(token1_decimals))
    }
}
