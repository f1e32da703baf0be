//! cosmwasm_std::testing overrides and custom test helpers

use std::collections::HashMap;

use cosmwasm_std::testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR};
use cosmwasm_std::{
    from_slice, to_binary, Addr, Binary, Coin, ContractResult, Decimal, OwnedDeps, Querier,
    QuerierResult, QueryRequest, SystemError, Uint128,
};
use terra_cosmwasm::{TaxCapResponse, TaxRateResponse, TerraQuery, TerraQueryWrapper, TerraRoute};

/// mock_dependencies replacement for cosmwasm_std::testing::mock_dependencies
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, TaxMockQuerier> {
    let contract_addr = Addr::unchecked(MOCK_CONTRACT_ADDR);
    let custom_querier: TaxMockQuerier = TaxMockQuerier::new(MockQuerier::new(&[(
        &contract_addr.to_string(),
        contract_balance,
    )]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
    }
}

#[derive(Clone, Default, Debug)]
pub struct TreasuryQuerier {
    /// maps denom to tax caps
    pub tax_caps: HashMap<String, Uint128>,

    pub tax_rate: Decimal,
}

impl TreasuryQuerier {
    fn handle_query(&self, route: &TerraRoute, query_data: &TerraQuery) -> QuerierResult {
        if route != &TerraRoute::Treasury {
            panic!(
                "[mock]: Unsupported route for QueryRequest::Custom : {:?}",
                route
            );
        }

        let ret: ContractResult<Binary> = match query_data {
            TerraQuery::TaxRate {} => {
                let res = TaxRateResponse {
                    rate: self.tax_rate,
                };
                to_binary(&res).into()
            }
            TerraQuery::TaxCap { denom } => match self.tax_caps.get(denom) {
                Some(cap) => {
                    let res = TaxCapResponse { cap: *cap };
                    to_binary(&res).into()
                }
                None => Err(format!("no tax cap available for provided denom: {}", denom)).into(),
            },
            _ => panic!(
                "[mock]: Unsupported query data for QueryRequest::Custom : {:?}",
                query_data
            ),
        };

        Ok(ret).into()
    }
}

pub struct TaxMockQuerier {
    base: MockQuerier<TerraQueryWrapper>,
    treasury_querier: TreasuryQuerier,
}

impl Querier for TaxMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        // MockQuerier doesn't support Custom, so we ignore it completely here
        let request: QueryRequest<TerraQueryWrapper> = match from_slice(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {}", e),
                    request: bin_request.into(),
                })
                .into()
            }
        };
        self.handle_query(&request)
    }
}

impl TaxMockQuerier {
    pub fn new(base: MockQuerier<TerraQueryWrapper>) -> Self {
        TaxMockQuerier {
            base,
            treasury_querier: TreasuryQuerier::default(),
        }
    }

    /// Set new balances for contract address
    pub fn set_contract_balances(&mut self, contract_balances: &[Coin]) {
        let contract_addr = Addr::unchecked(MOCK_CONTRACT_ADDR);
        self.base
            .update_balance(contract_addr.to_string(), contract_balances.to_vec());
    }

    /// Set mock querier for tax data
    pub fn set_native_tax(&mut self, tax_rate: Decimal, tax_caps: &[(String, Uint128)]) {
        self.treasury_querier.tax_rate = tax_rate;
        self.treasury_querier.tax_caps = tax_caps.iter().cloned().collect();
    }

    pub fn handle_query(&self, request: &QueryRequest<TerraQueryWrapper>) -> QuerierResult {
        match &request {
            QueryRequest::Custom(TerraQueryWrapper { route, query_data }) => {
                self.treasury_querier.handle_query(route, query_data)
            }

            _ => self.base.handle_query(request),
        }
    }
}
