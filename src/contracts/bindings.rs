//! Solidity interfaces and constructor argument encoding

use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
    sol_types::{SolCall, SolValue},
};

sol! {
    interface IMockToken {
        function mint(address to, uint256 amount) external;
        function balanceOf(address account) external view returns (uint256 balance);
    }
}

/// `MockToken(string name, string symbol)`
pub fn mock_token_args(name: &str, symbol: &str) -> Bytes {
    (name.to_string(), symbol.to_string()).abi_encode_params().into()
}

/// `MockPool(address token0, address token1)`
pub fn mock_pool_args(token0: Address, token1: Address) -> Bytes {
    (token0, token1).abi_encode_params().into()
}

/// `FlashloanArb(address lender, address pool)`
pub fn flashloan_arb_args(lender: Address, pool: Address) -> Bytes {
    (lender, pool).abi_encode_params().into()
}

pub fn mint_calldata(to: Address, amount: U256) -> Bytes {
    IMockToken::mintCall { to, amount }.abi_encode().into()
}

pub fn balance_of_calldata(account: Address) -> Bytes {
    IMockToken::balanceOfCall { account }.abi_encode().into()
}

pub fn decode_balance(data: &[u8]) -> anyhow::Result<U256> {
    let decoded = IMockToken::balanceOfCall::abi_decode_returns(data, true)?;
    Ok(decoded.balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex};

    const POOL: Address = address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0");

    #[test]
    fn pool_args_are_two_padded_words() {
        let token0 = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let encoded = mock_pool_args(token0, POOL);

        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[12..32], token0.as_slice());
        assert_eq!(&encoded[44..64], POOL.as_slice());
    }

    #[test]
    fn bot_receives_the_pool_twice() {
        let encoded = flashloan_arb_args(POOL, POOL);
        assert_eq!(encoded[..32], encoded[32..]);
    }

    #[test]
    fn token_args_encode_dynamic_strings() {
        let encoded = mock_token_args("Usdc", "fusdc");
        let (name, symbol) = <(String, String)>::abi_decode_params(&encoded, true).unwrap();

        assert_eq!(name, "Usdc");
        assert_eq!(symbol, "fusdc");
        // two offsets, then length + data for each string
        assert_eq!(encoded.len(), 32 * 6);
    }

    #[test]
    fn mint_uses_standard_selector() {
        let calldata = mint_calldata(POOL, U256::from(1u64));
        assert_eq!(&calldata[..4], &hex!("40c10f19"));
        assert_eq!(calldata.len(), 4 + 64);
    }

    #[test]
    fn balance_round_trips_through_return_data() {
        assert_eq!(&balance_of_calldata(POOL)[..4], &hex!("70a08231"));

        let amount = U256::from(10_000_000u64) * U256::from(10u64).pow(U256::from(18u64));
        let returned = amount.abi_encode();
        assert_eq!(decode_balance(&returned).unwrap(), amount);
    }

    #[test]
    fn short_return_data_fails_to_decode() {
        assert!(decode_balance(&[0u8; 8]).is_err());
    }
}
