use std::rc::Rc;

use anchor_client::{
    solana_client::{client_error::ClientErrorKind, rpc_request::RpcError},
    solana_sdk::signature::{Keypair, Signature, Signer},
    Client, ClientError, Program,
};
use anchor_lang::solana_program::instruction::Instruction;
use log::{info, warn};

use crate::{
    client::{ProgramClient, ProgramGateway},
    config::ClientConfig,
    error::{ExternalError, ExternalErrorKind, Result},
};

/// Sends instructions through the anchor RPC client, signed by the wallet
pub struct AnchorGateway {
    program: Program<Rc<Keypair>>,
}

impl AnchorGateway {
    pub fn new(config: &ClientConfig, payer: Rc<Keypair>) -> Result<Self> {
        let client = Client::new_with_options(config.cluster.clone(), payer, config.commitment);
        let program = client.program(config.program_id).map_err(classify_client_error)?;

        info!(
            "Connected to {} (program={}, commitment={:?})",
            config.cluster.url(),
            config.program_id,
            config.commitment.commitment
        );

        Ok(Self { program })
    }
}

impl ProgramGateway for AnchorGateway {
    fn send(&self, instruction: Instruction) -> std::result::Result<Signature, ExternalError> {
        self.program
            .request()
            .instruction(instruction)
            .send()
            .map_err(classify_client_error)
    }
}

impl ProgramClient<AnchorGateway> {
    /// Bind the wallet to the configured program and cluster
    pub fn connect(config: &ClientConfig, payer: Rc<Keypair>) -> Result<Self> {
        let wallet = payer.pubkey();
        let gateway = AnchorGateway::new(config, payer)?;
        Ok(ProgramClient::new(config.program_id, wallet, gateway))
    }

    /// Load the configured wallet and connect
    pub fn connect_with_wallet_file(config: &ClientConfig) -> Result<Self> {
        Self::connect(config, config.load_wallet()?)
    }
}

/// Sort an anchor client failure into connection, rejection or bad response
pub fn classify_client_error(err: ClientError) -> ExternalError {
    let kind = match &err {
        ClientError::SolanaClientError(inner) => classify_rpc_error(inner.kind()),
        ClientError::AccountNotFound
        | ClientError::AnchorError(_)
        | ClientError::ProgramError(_) => ExternalErrorKind::Rejected,
        ClientError::LogParseError(_) => ExternalErrorKind::MalformedResponse,
        _ => ExternalErrorKind::Connection,
    };

    let failure = ExternalError::new(kind, err.to_string());
    warn!("RPC failure ({:?}): {}", failure.kind, failure.message);
    failure
}

fn classify_rpc_error(kind: &ClientErrorKind) -> ExternalErrorKind {
    match kind {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => ExternalErrorKind::Connection,
        ClientErrorKind::SerdeJson(_) => ExternalErrorKind::MalformedResponse,
        ClientErrorKind::RpcError(RpcError::ParseError(_)) => ExternalErrorKind::MalformedResponse,
        ClientErrorKind::RpcError(RpcError::RpcRequestError(_)) => ExternalErrorKind::Connection,
        ClientErrorKind::RpcError(_)
        | ClientErrorKind::TransactionError(_)
        | ClientErrorKind::SigningError(_) => ExternalErrorKind::Rejected,
        _ => ExternalErrorKind::Connection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::solana_sdk::transaction::TransactionError;

    #[test]
    fn test_transaction_errors_are_rejections() {
        let kind = ClientErrorKind::TransactionError(TransactionError::InsufficientFundsForFee);
        assert_eq!(classify_rpc_error(&kind), ExternalErrorKind::Rejected);
    }

    #[test]
    fn test_io_errors_are_connection_failures() {
        let kind = ClientErrorKind::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(classify_rpc_error(&kind), ExternalErrorKind::Connection);
    }

    #[test]
    fn test_parse_errors_are_malformed_responses() {
        let kind = ClientErrorKind::RpcError(RpcError::ParseError("unexpected field".to_string()));
        assert_eq!(classify_rpc_error(&kind), ExternalErrorKind::MalformedResponse);

        let failure = classify_client_error(ClientError::LogParseError("Program log: ???".to_string()));
        assert_eq!(failure.kind, ExternalErrorKind::MalformedResponse);
    }

    #[test]
    fn test_client_error_text_is_kept() {
        let failure = classify_client_error(ClientError::AccountNotFound);
        assert_eq!(failure.kind, ExternalErrorKind::Rejected);
        assert_eq!(failure.message, ClientError::AccountNotFound.to_string());
    }
}
