use cosmwasm_bignumber::{Decimal256, Uint256};

/// Round a decimal amount up to the next whole smallest unit.
/// `Uint256 * Decimal256` truncates, so bump the result whenever a
/// fractional part was dropped.
pub fn decimal_ceil(value: Decimal256) -> Uint256 {
    let floored = Uint256::one() * value;
    if Decimal256::from_uint256(floored) == value {
        floored
    } else {
        floored + Uint256::one()
    }
}

pub fn decimal_min(a: Decimal256, b: Decimal256) -> Decimal256 {
    if a < b {
        a
    } else {
        b
    }
}
