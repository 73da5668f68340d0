use alloy::sol;

use crate::calls::Call;

sol!(
    #[allow(missing_docs)]
    contract BatchCallDelegation {
        struct Call {
            address target;
            bytes callData;
            uint256 value;
        }

        function executeBatchTransactions(Call[] calldata calls) external payable;
    }
);

impl From<&Call> for BatchCallDelegation::Call {
    fn from(call: &Call) -> Self {
        BatchCallDelegation::Call {
            target: call.target,
            callData: call.data.clone(),
            value: call.value,
        }
    }
}
