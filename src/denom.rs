use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base fee token of the chain. The treasury registers no tax cap for it.
pub const NATIVE_DENOM: &str = "uluna";

/// Tax treatment class of a denom: the chain's base token, an IBC voucher,
/// or any other identifier (taxable native denoms and cw20 addresses).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DenomKind {
    Native,
    Ibc,
    Other,
}

impl DenomKind {
    pub fn classify(denom: &str) -> DenomKind {
        if denom == NATIVE_DENOM {
            DenomKind::Native
        } else if is_ibc_denom(denom) {
            DenomKind::Ibc
        } else {
            DenomKind::Other
        }
    }
}

/// `ibc/` followed by the uppercase hex hash of the denom trace
pub fn is_ibc_denom(denom: &str) -> bool {
    match denom.strip_prefix("ibc/") {
        Some(hash) => {
            hash.len() == 64 && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
        }
        None => false,
    }
}

/// cw20 tokens are identified by their bech32 contract address
pub fn is_token_address(denom: &str) -> bool {
    denom.len() == 44 && denom.starts_with("terra1")
}

/// Whether the treasury has a cap registered for this denom. uluna, IBC
/// vouchers and cw20 addresses have none, so querying one would fail.
pub fn tax_cap_required(denom: &str) -> bool {
    denom != NATIVE_DENOM && !is_ibc_denom(denom) && !is_token_address(denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IBC_LUNA: &str = "ibc/0471F1C4E7AFD3F07702BEF6DC365268D64570F7C1FDC98EA6098DD6DE59817B";

    #[test]
    fn test_classify() {
        assert_eq!(DenomKind::classify("uluna"), DenomKind::Native);
        assert_eq!(DenomKind::classify(IBC_LUNA), DenomKind::Ibc);
        assert_eq!(DenomKind::classify("uusd"), DenomKind::Other);
        assert_eq!(DenomKind::classify("ukrw"), DenomKind::Other);
        assert_eq!(
            DenomKind::classify("terra14z56l0fp2lsf86zy3hty2z47ezkhnthtr9yq76"),
            DenomKind::Other
        );
    }

    #[test]
    fn test_is_ibc_denom() {
        assert!(is_ibc_denom(IBC_LUNA));

        // wrong prefix
        assert!(!is_ibc_denom("uluna"));
        assert!(!is_ibc_denom(
            "factory/0471F1C4E7AFD3F07702BEF6DC365268D64570F7C1FDC98EA6098DD6DE59817B"
        ));
        // truncated hash
        assert!(!is_ibc_denom("ibc/0471F1C4E7AFD3F07702BEF6DC365268"));
        // lowercase hash
        assert!(!is_ibc_denom(
            "ibc/0471f1c4e7afd3f07702bef6dc365268d64570f7c1fdc98ea6098dd6de59817b"
        ));
    }

    #[test]
    fn test_is_token_address() {
        assert!(is_token_address(
            "terra14z56l0fp2lsf86zy3hty2z47ezkhnthtr9yq76"
        ));
        assert!(!is_token_address("uusd"));
        assert!(!is_token_address("terra1"));
    }

    #[test]
    fn test_tax_cap_required() {
        assert!(tax_cap_required("uusd"));
        assert!(tax_cap_required("ukrw"));

        assert!(!tax_cap_required("uluna"));
        assert!(!tax_cap_required(IBC_LUNA));
        assert!(!tax_cap_required(
            "terra14z56l0fp2lsf86zy3hty2z47ezkhnthtr9yq76"
        ));
    }
}
