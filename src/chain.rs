use alloy::{primitives::TxHash, transports::http::reqwest::Url};

pub const MEKONG_CHAIN_ID: u64 = 7078815900;
pub const MEKONG_RPC_URL: &str = "https://rpc.mekong.ethpandaops.io";
const MEKONG_EXPLORER_URL: &str = "https://explorer.mekong.ethpandaops.io";

/// Network the client is bound to for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub rpc_url: Url,
    pub explorer_url: Option<Url>,
}

impl Chain {
    /// Mekong Pectra devnet (Devcon testnet), reached through `rpc_url`.
    pub fn mekong(rpc_url: Url) -> Self {
        Self {
            id: MEKONG_CHAIN_ID,
            name: "Mekong Pectra Devnet",
            rpc_url,
            explorer_url: Url::parse(MEKONG_EXPLORER_URL).ok(),
        }
    }

    pub fn tx_url(&self, hash: &TxHash) -> Option<Url> {
        self.explorer_url
            .as_ref()
            .and_then(|base| base.join(&format!("tx/{hash}")).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    fn rpc() -> Url {
        MEKONG_RPC_URL.parse().unwrap()
    }

    #[test]
    fn mekong_descriptor() {
        let chain = Chain::mekong(rpc());
        assert_eq!(chain.id, 7078815900);
        assert_eq!(chain.rpc_url.as_str(), "https://rpc.mekong.ethpandaops.io/");
    }

    #[test]
    fn local_endpoint_keeps_network() {
        let local: Url = "http://127.0.0.1:8545".parse().unwrap();
        let chain = Chain::mekong(local.clone());
        assert_eq!(chain.id, MEKONG_CHAIN_ID);
        assert_eq!(chain.rpc_url, local);
    }

    #[test]
    fn explorer_link() {
        let hash = b256!("00000000000000000000000000000000000000000000000000000000000000ff");
        let url = Chain::mekong(rpc()).tx_url(&hash).unwrap();
        assert_eq!(
            url.as_str(),
            format!("https://explorer.mekong.ethpandaops.io/tx/{hash}")
        );

        let chain = Chain {
            explorer_url: None,
            ..Chain::mekong(rpc())
        };
        assert!(chain.tx_url(&hash).is_none());
    }
}
