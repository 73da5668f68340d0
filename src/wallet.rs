use std::marker::PhantomData;

use alloy::{
    eips::eip7702::{Authorization, SignedAuthorization},
    network::{Ethereum, EthereumWallet, TransactionBuilder, TransactionBuilder7702},
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::{local::PrivateKeySigner, Signer},
    sol_types::SolCall,
    transports::{
        http::{Client, Http},
        Transport,
    },
};

use crate::{bindings::BatchCallDelegation, calls::Call, chain::Chain, error::InvokeError};

/// Nonce for an authorization carried by a transaction the account sends
/// itself: that transaction consumes `account_nonce` before the
/// authorization list is processed.
pub fn authorization_nonce(account_nonce: u64) -> Option<u64> {
    account_nonce.checked_add(1)
}

/// `executeBatchTransactions(calls)` sent by `account` to itself, carrying
/// `authorization` as the only authorization list entry.
pub fn batch_request(
    account: Address,
    authorization: SignedAuthorization,
    calls: &[Call],
) -> TransactionRequest {
    let input = BatchCallDelegation::executeBatchTransactionsCall {
        calls: calls.iter().map(Into::into).collect(),
    }
    .abi_encode();

    TransactionRequest::default()
        .with_from(account)
        .with_to(account)
        .with_input(input)
        .with_authorization_list(vec![authorization])
}

/// The capabilities the batch script needs from a wallet.
pub trait BatchWallet {
    fn address(&self) -> Address;

    /// Signs an EIP-7702 authorization delegating this account's code to `contract`.
    async fn sign_authorization(
        &self,
        contract: Address,
    ) -> Result<SignedAuthorization, InvokeError>;

    /// Sends `executeBatchTransactions(calls)` to this account's own address,
    /// with `authorization` as the only entry of the authorization list.
    async fn execute_batch(
        &self,
        authorization: SignedAuthorization,
        calls: &[Call],
    ) -> Result<TxHash, InvokeError>;
}

/// Account, chain and provider bound together for one run.
pub struct WalletClient<P, T> {
    signer: PrivateKeySigner,
    chain: Chain,
    provider: P,
    _phantom: PhantomData<T>,
}

impl<P, T> WalletClient<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    pub fn new(signer: PrivateKeySigner, chain: Chain, provider: P) -> Self {
        Self {
            signer,
            chain,
            provider,
            _phantom: PhantomData,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }
}

/// Builds a client talking to `chain` over HTTP, signing with `signer`.
pub fn connect_http(
    signer: PrivateKeySigner,
    chain: Chain,
) -> WalletClient<impl Provider<Http<Client>, Ethereum>, Http<Client>> {
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer.clone()))
        .on_http(chain.rpc_url.clone());

    tracing::debug!(
        chain_id = chain.id,
        chain = chain.name,
        rpc_url = %chain.rpc_url,
        account = %signer.address(),
        "wallet client built"
    );

    WalletClient::new(signer, chain, provider)
}

pub async fn sign_with(
    signer: &PrivateKeySigner,
    authorization: Authorization,
) -> Result<SignedAuthorization, InvokeError> {
    let signature = signer
        .sign_hash(&authorization.signature_hash())
        .await
        .map_err(InvokeError::Signing)?;
    Ok(authorization.into_signed(signature))
}

impl<P, T> BatchWallet for WalletClient<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn sign_authorization(
        &self,
        contract: Address,
    ) -> Result<SignedAuthorization, InvokeError> {
        let account_nonce = self
            .provider
            .get_transaction_count(self.address())
            .pending()
            .await
            .map_err(InvokeError::Nonce)?;

        let authorization = Authorization {
            chain_id: U256::from(self.chain.id),
            address: contract,
            nonce: authorization_nonce(account_nonce).ok_or(InvokeError::NonceExhausted)?,
        };
        tracing::debug!(
            contract = %contract,
            nonce = authorization.nonce,
            "signing authorization"
        );

        sign_with(&self.signer, authorization).await
    }

    async fn execute_batch(
        &self,
        authorization: SignedAuthorization,
        calls: &[Call],
    ) -> Result<TxHash, InvokeError> {
        let actual = self
            .provider
            .get_chain_id()
            .await
            .map_err(InvokeError::Transport)?;
        if actual != self.chain.id {
            return Err(InvokeError::ChainMismatch {
                expected: self.chain.id,
                actual,
            });
        }

        let tx = batch_request(self.address(), authorization, calls);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(InvokeError::from_submission)?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            tx_hash = %tx_hash,
            calls = calls.len(),
            explorer = ?self.chain.tx_url(&tx_hash).map(|url| url.to_string()),
            "batch submitted"
        );
        Ok(tx_hash)
    }
}
