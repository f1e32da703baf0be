use cosmwasm_bignumber::Decimal256;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TaxError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Tax rate must be smaller than 1: {rate}")]
    InvalidRate { rate: Decimal256 },
}
