use cosmwasm_bignumber::{Decimal256, Uint256};
use cosmwasm_std::{Coin, Deps, QuerierWrapper, StdResult};
use terra_cosmwasm::TerraQuerier;

use crate::denom::{tax_cap_required, DenomKind};
use crate::error::TaxError;
use crate::math::{decimal_ceil, decimal_min};

/// Network wide transfer tax rate, from the treasury module
pub fn query_tax_rate(querier: &QuerierWrapper) -> StdResult<Decimal256> {
    let terra_querier = TerraQuerier::new(querier);
    Ok(Decimal256::from((terra_querier.query_tax_rate()?).rate))
}

/// Tax cap for a denom, in its smallest unit. The treasury only registers
/// caps for taxable native denoms; for uluna, IBC vouchers and cw20
/// addresses the cap is unset and treated as zero.
pub fn query_tax_cap(querier: &QuerierWrapper, denom: &str) -> StdResult<Uint256> {
    if !tax_cap_required(denom) {
        return Ok(Uint256::zero());
    }

    let terra_querier = TerraQuerier::new(querier);
    Ok(Uint256::from((terra_querier.query_tax_cap(denom.to_string())?).cap))
}

/// Largest amount that can be sent out of `balance` such that the remainder
/// still covers the tax charged on it.
///
/// The tax implied by the full balance is `balance * rate / (1 + rate)`
/// rounded up. `Uint256 / Decimal256` truncates, so taking the complement
/// `balance - balance / (1 + rate)` yields exactly that ceiling without any
/// intermediate rounding.
pub fn compute_max_sendable(
    balance: Uint256,
    rate: Decimal256,
    cap: Uint256,
) -> Result<Uint256, TaxError> {
    validate_rate(rate)?;

    let gross_tax = balance - balance / (Decimal256::one() + rate);
    let tax = std::cmp::min(gross_tax, cap);
    Ok(balance - tax)
}

/// Tax due on a transfer of `amount`, rounded up to the next whole unit.
/// IBC denominated transfers are not subject to the cap.
pub fn compute_tax_amount(
    amount: Uint256,
    rate: Decimal256,
    cap: Uint256,
    kind: DenomKind,
) -> Result<Uint256, TaxError> {
    validate_rate(rate)?;

    let raw_tax = Decimal256::from_uint256(amount) * rate;
    let tax = match kind {
        DenomKind::Ibc => raw_tax,
        _ => decimal_min(raw_tax, Decimal256::from_uint256(cap)),
    };
    Ok(decimal_ceil(tax))
}

/// Querier backed version of [`compute_tax_amount`] for a concrete coin
pub fn compute_tax(deps: Deps, coin: &Coin) -> Result<Uint256, TaxError> {
    let rate = query_tax_rate(&deps.querier)?;
    let cap = query_tax_cap(&deps.querier, &coin.denom)?;
    compute_tax_amount(
        Uint256::from(coin.amount),
        rate,
        cap,
        DenomKind::classify(&coin.denom),
    )
}

/// Shrink `coin` to the amount that can actually be sent once the treasury
/// tax on it is withheld
pub fn deduct_tax(deps: Deps, coin: Coin) -> Result<Coin, TaxError> {
    let rate = query_tax_rate(&deps.querier)?;
    let cap = query_tax_cap(&deps.querier, &coin.denom)?;
    let max_sendable = compute_max_sendable(Uint256::from(coin.amount), rate, cap)?;
    Ok(Coin {
        denom: coin.denom,
        amount: max_sendable.into(),
    })
}

fn validate_rate(rate: Decimal256) -> Result<(), TaxError> {
    if rate >= Decimal256::one() {
        return Err(TaxError::InvalidRate { rate });
    }
    Ok(())
}
