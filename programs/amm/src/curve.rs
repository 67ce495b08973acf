use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

/// Token amounts required to mint `lp_amount` shares against the current
/// reserves. Rounds up so the pool never mints shares for less than their
/// pro-rata backing.
pub fn deposit_amounts(
    lp_amount: u64,
    vault_x: u64,
    vault_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64)> {
    let x = mul_div_ceil(lp_amount, vault_x, lp_supply)?;
    let y = mul_div_ceil(lp_amount, vault_y, lp_supply)?;
    Ok((x, y))
}

/// Token amounts released by burning `lp_amount` shares. Rounds down.
pub fn withdraw_amounts(
    lp_amount: u64,
    vault_x: u64,
    vault_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64)> {
    let x = mul_div_floor(lp_amount, vault_x, lp_supply)?;
    let y = mul_div_floor(lp_amount, vault_y, lp_supply)?;
    Ok((x, y))
}

/// Constant product output for a fee-bearing swap. The fee is taken from the
/// input leg; output is floored, so the reserve product never decreases.
pub fn swap_amount_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<u64> {
    let keep_bps = BPS_DENOM
        .checked_sub(fee_bps as u64)
        .ok_or_else(|| error!(ErrorCode::InvalidFee))?;
    let fee_adjusted_in = mul_div_floor(amount_in, keep_bps, BPS_DENOM)?;

    let new_reserve_in = (reserve_in as u128)
        .checked_add(fee_adjusted_in as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let out = ((fee_adjusted_in as u128)
        .checked_mul(reserve_out as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(new_reserve_in)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok(out as u64)
}

pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let scaled = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let out = scaled
        .checked_div(denominator as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    u64::try_from(out).map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn mul_div_ceil(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let scaled = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let rounded = scaled
        .checked_add(
            (denominator as u128)
                .checked_sub(1)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?,
        )
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let out = rounded
        .checked_div(denominator as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    u64::try_from(out).map_err(|_| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deposit_half_of_supply_requires_half_of_reserves() {
        let (x, y) = deposit_amounts(500, 1_000_000_000, 1_000_000_000, 1_000).unwrap();
        assert_eq!(x, 500_000_000);
        assert_eq!(y, 500_000_000);
    }

    #[test]
    fn withdraw_half_of_supply_returns_half_of_reserves() {
        let (x, y) = withdraw_amounts(500, 1_000_000_000, 1_000_000_000, 1_000).unwrap();
        assert_eq!(x, 500_000_000);
        assert_eq!(y, 500_000_000);
    }

    #[test]
    fn rounding_favors_the_pool() {
        let (x, _) = deposit_amounts(3, 1_000_001, 1_000_001, 1_000).unwrap();
        assert_eq!(x, 3_001);
        let (x, _) = withdraw_amounts(3, 1_000_001, 1_000_001, 1_000).unwrap();
        assert_eq!(x, 3_000);
    }

    #[test]
    fn swap_output_matches_reference_values() {
        assert_eq!(
            swap_amount_out(50_000, 1_000_000_000, 1_000_000_000, 30).unwrap(),
            49_847
        );
        assert_eq!(
            swap_amount_out(50_000, 1_000_000_000, 1_000_000_000, 0).unwrap(),
            49_997
        );
        assert_eq!(
            swap_amount_out(123_456, 5_000_000_000, 250_000_000, 100).unwrap(),
            6_110
        );
    }

    #[test]
    fn swap_with_fee_strictly_grows_reserve_product() {
        let out = swap_amount_out(50_000, 1_000_000_000, 1_000_000_000, 30).unwrap();
        let k_before = 1_000_000_000u128 * 1_000_000_000u128;
        let k_after = (1_000_000_000u128 + 50_000) * (1_000_000_000u128 - out as u128);
        assert!(k_after > k_before);
    }

    #[test]
    fn zero_supply_is_an_error_not_a_panic() {
        assert!(deposit_amounts(1, 1, 1, 0).is_err());
        assert!(withdraw_amounts(1, 1, 1, 0).is_err());
    }

    #[test]
    fn fee_above_denominator_is_rejected() {
        assert!(swap_amount_out(1_000, 1_000_000, 1_000_000, 10_001).is_err());
    }

    proptest! {
        #[test]
        fn swap_never_shrinks_reserve_product(
            reserve_in in 1u64..=u32::MAX as u64,
            reserve_out in 1u64..=u32::MAX as u64,
            amount_in in 1u64..=u32::MAX as u64,
            fee_bps in 0u16..=10_000,
        ) {
            let out = swap_amount_out(amount_in, reserve_in, reserve_out, fee_bps).unwrap();
            prop_assert!(out < reserve_out);
            let k_before = (reserve_in as u128) * (reserve_out as u128);
            let k_after =
                (reserve_in as u128 + amount_in as u128) * (reserve_out as u128 - out as u128);
            prop_assert!(k_after >= k_before);
        }

        #[test]
        fn deposit_then_withdraw_never_pays_out_more(
            vault_x in 1u64..=u32::MAX as u64,
            vault_y in 1u64..=u32::MAX as u64,
            lp_supply in 1u64..=u32::MAX as u64,
            lp_amount in 1u64..=u32::MAX as u64,
        ) {
            let (dx, dy) = deposit_amounts(lp_amount, vault_x, vault_y, lp_supply).unwrap();
            let (wx, wy) = withdraw_amounts(
                lp_amount,
                vault_x + dx,
                vault_y + dy,
                lp_supply + lp_amount,
            )
            .unwrap();
            prop_assert!(wx <= dx);
            prop_assert!(wy <= dy);
        }

        #[test]
        fn required_deposit_fully_backs_minted_shares(
            vault in 1u64..=u32::MAX as u64,
            lp_supply in 1u64..=u32::MAX as u64,
            lp_amount in 1u64..=u32::MAX as u64,
        ) {
            let required = mul_div_ceil(lp_amount, vault, lp_supply).unwrap();
            prop_assert!(required as u128 * lp_supply as u128 >= lp_amount as u128 * vault as u128);
        }
    }
}
