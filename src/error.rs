use alloy::{
    signers::{self, local::LocalSignerError},
    transports::TransportError,
};

#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("invalid private key")]
    Key(#[source] LocalSignerError),

    #[error("failed to fetch account nonce")]
    Nonce(#[source] TransportError),

    #[error("account nonce exhausted")]
    NonceExhausted,

    #[error("failed to sign authorization")]
    Signing(#[source] signers::Error),

    #[error("transport error")]
    Transport(#[source] TransportError),

    #[error("transaction rejected by node ({code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("rpc serves chain {actual}, client is configured for chain {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("failed to write transaction hash")]
    Output(#[source] std::io::Error),
}

impl InvokeError {
    /// Splits a failed submission into a node-side rejection and a plain transport failure.
    pub fn from_submission(err: TransportError) -> Self {
        match err {
            TransportError::ErrorResp(payload) => Self::Rejected {
                code: payload.code,
                message: payload.message.to_string(),
            },
            err => Self::Transport(err),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Output(_) => 1,
            Self::Key(_) => 2,
            Self::Signing(_) => 3,
            Self::Nonce(_) | Self::NonceExhausted | Self::Transport(_) => 4,
            Self::Rejected { .. } => 5,
            Self::ChainMismatch { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{rpc::json_rpc::ErrorPayload, transports::TransportErrorKind};

    #[test]
    fn error_response_is_rejection() {
        let err = TransportError::ErrorResp(ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: None,
        });

        let err = InvokeError::from_submission(err);
        assert!(matches!(
            &err,
            InvokeError::Rejected { code: 3, message } if message == "execution reverted"
        ));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn transport_failure_is_not_rejection() {
        let err = InvokeError::from_submission(TransportErrorKind::custom_str("connection refused"));
        assert!(matches!(err, InvokeError::Transport(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_codes_are_distinct_per_stage() {
        let key = InvokeError::Key(LocalSignerError::HexError(
            alloy::hex::FromHexError::OddLength,
        ));
        let signing = InvokeError::Signing(signers::Error::other("no key"));
        let mismatch = InvokeError::ChainMismatch {
            expected: 1,
            actual: 2,
        };

        assert_eq!(key.exit_code(), 2);
        assert_eq!(signing.exit_code(), 3);
        assert_eq!(mismatch.exit_code(), 6);
        assert_eq!(InvokeError::NonceExhausted.exit_code(), 4);
        assert_ne!(key.exit_code(), 0);
    }
}
