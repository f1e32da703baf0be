use cosmwasm_std::{to_binary, Addr, BankMsg, Coin, CosmosMsg, Deps, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TaxError;
use crate::tax::deduct_tax;

/// Represents either a native coin or a cw20 token. Meant to be used as part
/// of a msg in a contract call and not to be used internally
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    Cw20 { contract_addr: String },
    Native { denom: String },
}

/// Native transfers are taxed by the treasury, so the recipient receives
/// `amount` minus the tax withheld on it (see
/// [`build_send_native_asset_with_tax_deduction_msg`]).
/// No tax is charged on cw20 transfers.
pub fn build_send_asset_with_tax_deduction_msg(
    deps: Deps,
    recipient_address: Addr,
    asset: Asset,
    amount: Uint128,
) -> Result<CosmosMsg, TaxError> {
    match asset {
        Asset::Native { denom } => build_send_native_asset_with_tax_deduction_msg(
            deps,
            recipient_address,
            denom.as_str(),
            amount,
        ),
        Asset::Cw20 { contract_addr } => {
            let contract_addr = deps.api.addr_validate(&contract_addr)?;
            build_send_cw20_token_msg(recipient_address, contract_addr, amount)
        }
    }
}

/// Prepare BankMsg::Send message.
/// The actual amount taken from the sender is: amount sent + tax.
/// Instead of sending `amount`, send the max sendable portion of it.
pub fn build_send_native_asset_with_tax_deduction_msg(
    deps: Deps,
    recipient: Addr,
    denom: &str,
    amount: Uint128,
) -> Result<CosmosMsg, TaxError> {
    Ok(CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.into(),
        amount: vec![deduct_tax(
            deps,
            Coin {
                denom: denom.to_string(),
                amount,
            },
        )?],
    }))
}

pub fn build_send_cw20_token_msg(
    recipient: Addr,
    token_contract_address: Addr,
    amount: Uint128,
) -> Result<CosmosMsg, TaxError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token_contract_address.into(),
        msg: to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.into(),
            amount,
        })?,
        funds: vec![],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock_dependencies;
    use cosmwasm_std::Decimal;

    #[test]
    fn test_build_send_native_asset_msg() {
        let mut deps = mock_dependencies(&[]);
        deps.querier.set_native_tax(
            Decimal::permille(2),
            &[(String::from("uusd"), Uint128::new(1_000_000u128))],
        );

        let msg = build_send_asset_with_tax_deduction_msg(
            deps.as_ref(),
            Addr::unchecked("recipient"),
            Asset::Native {
                denom: String::from("uusd"),
            },
            Uint128::new(1_000_000u128),
        )
        .unwrap();

        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: String::from("recipient"),
                amount: vec![Coin {
                    denom: String::from("uusd"),
                    amount: Uint128::new(998_003u128),
                }],
            })
        );
    }

    #[test]
    fn test_build_send_cw20_token_msg() {
        let deps = mock_dependencies(&[]);

        let msg = build_send_asset_with_tax_deduction_msg(
            deps.as_ref(),
            Addr::unchecked("recipient"),
            Asset::Cw20 {
                contract_addr: String::from("sometoken"),
            },
            Uint128::new(1_000_000u128),
        )
        .unwrap();

        assert_eq!(
            msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("sometoken"),
                msg: to_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: String::from("recipient"),
                    amount: Uint128::new(1_000_000u128),
                })
                .unwrap(),
                funds: vec![],
            })
        );
    }
}
