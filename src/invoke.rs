use std::io::Write;

use alloy::primitives::{Address, TxHash};

use crate::{calls::Call, error::InvokeError, wallet::BatchWallet};

/// Delegates the wallet's account to `contract`, then executes `calls` as a
/// single batch through that delegation. The hash is written to `out` only
/// once the node accepted the transaction.
pub async fn run<W, O>(
    wallet: &W,
    contract: Address,
    calls: &[Call],
    out: &mut O,
) -> Result<TxHash, InvokeError>
where
    W: BatchWallet,
    O: Write,
{
    let authorization = wallet.sign_authorization(contract).await?;
    tracing::info!(
        account = %wallet.address(),
        contract = %authorization.address,
        nonce = authorization.nonce,
        "authorization signed"
    );

    let hash = wallet.execute_batch(authorization, calls).await?;

    writeln!(out, "Transaction:  {hash}").map_err(InvokeError::Output)?;
    Ok(hash)
}
