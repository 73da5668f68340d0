use alloy::primitives::{
    address,
    utils::{parse_ether, UnitsError},
    Address, Bytes, U256,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: Address,
    pub data: Bytes,
    pub value: U256,
}

impl Call {
    /// Plain value transfer, no call data.
    pub fn transfer(target: Address, ether: &str) -> Result<Self, UnitsError> {
        Ok(Self {
            target,
            data: Bytes::new(),
            value: parse_ether(ether)?,
        })
    }
}

/// The two transfers the tool batches on every run.
pub fn demo_batch() -> Result<Vec<Call>, UnitsError> {
    Ok(vec![
        Call::transfer(address!("cb98643b8786950F0461f3B0edf99D88F274574D"), "0.001")?,
        Call::transfer(address!("d2135CfB216b74109775236E36d4b433F1DF507B"), "0.002")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_batch_is_fixed() {
        let calls = demo_batch().unwrap();
        assert_eq!(calls.len(), 2);

        assert_eq!(
            calls[0].target,
            "0xcb98643b8786950f0461f3b0edf99d88f274574d"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(calls[0].value, U256::from(1_000_000_000_000_000u64));
        assert!(calls[0].data.is_empty());

        assert_eq!(
            calls[1].target,
            "0xd2135cfb216b74109775236e36d4b433f1df507b"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(calls[1].value, U256::from(2_000_000_000_000_000u64));
        assert!(calls[1].data.is_empty());

        assert_eq!(calls, demo_batch().unwrap());
    }

    #[test]
    fn transfer_rejects_bad_amount() {
        assert!(Call::transfer(Address::ZERO, "one ether").is_err());
    }
}
