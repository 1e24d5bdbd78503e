use std::env;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use anchor_client::{
    solana_sdk::{
        commitment_config::{CommitmentConfig, CommitmentLevel},
        signature::{read_keypair_file, Keypair},
    },
    Cluster,
};
use anchor_lang::prelude::Pubkey;

use crate::{
    constants::*,
    error::{Result, StakeClientError},
};

/// Where and how the client talks to the staking program
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// RPC endpoint
    pub cluster: Cluster,
    /// Deployed staking program; there is no default
    pub program_id: Pubkey,
    /// Finality requested for submitted transactions
    pub commitment: CommitmentConfig,
    /// Keypair file used as the wallet
    pub wallet_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Devnet, `confirmed` commitment, default wallet location
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            cluster: Cluster::Devnet,
            program_id,
            commitment: CommitmentConfig::confirmed(),
            wallet_path: None,
        }
    }

    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_wallet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wallet_path = Some(path.into());
        self
    }

    /// Read the configuration from `STAKE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let program_id = lookup(ENV_PROGRAM_ID)
            .ok_or_else(|| StakeClientError::Config(format!("{} is not set", ENV_PROGRAM_ID)))?;
        let program_id = parse_program_id(&program_id)?;

        let cluster = parse_cluster(&lookup(ENV_CLUSTER).unwrap_or_else(|| DEFAULT_CLUSTER.to_string()))?;
        let commitment =
            parse_commitment(&lookup(ENV_COMMITMENT).unwrap_or_else(|| DEFAULT_COMMITMENT.to_string()))?;

        Ok(Self {
            cluster,
            program_id,
            commitment,
            wallet_path: lookup(ENV_WALLET).map(PathBuf::from),
        })
    }

    /// Configured wallet path, or ~/.config/solana/id.json
    pub fn resolved_wallet_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.wallet_path {
            return Ok(path.clone());
        }
        let home = env::var("HOME")
            .map_err(|_| StakeClientError::Config("HOME is not set and no wallet path was given".to_string()))?;
        Ok(PathBuf::from(home).join(DEFAULT_WALLET_PATH))
    }

    /// Load the wallet keypair
    pub fn load_wallet(&self) -> Result<Rc<Keypair>> {
        let path = self.resolved_wallet_path()?;
        let keypair = read_keypair_file(&path).map_err(|err| {
            StakeClientError::Config(format!("unable to read wallet {}: {}", path.display(), err))
        })?;
        Ok(Rc::new(keypair))
    }
}

/// Parse a program id
pub fn parse_program_id(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value.trim())
        .map_err(|err| StakeClientError::Config(format!("invalid program id {:?}: {}", value, err)))
}

/// Parse a cluster name ("devnet", "mainnet", ...) or an RPC URL
pub fn parse_cluster(value: &str) -> Result<Cluster> {
    Cluster::from_str(value.trim())
        .map_err(|err| StakeClientError::Config(format!("invalid cluster {:?}: {}", value, err)))
}

/// Parse "processed", "confirmed" or "finalized"
pub fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    let commitment = CommitmentLevel::from_str(value.trim())
        .map_err(|err| StakeClientError::Config(format!("invalid commitment {:?}: {}", value, err)))?;
    Ok(CommitmentConfig { commitment })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let program_id = Pubkey::new_unique();
        let config = ClientConfig::new(program_id);

        assert_eq!(config.program_id, program_id);
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
        assert_eq!(config.wallet_path, None);
    }

    #[test]
    fn test_program_id_is_required() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.category(), "Configuration");
        assert!(err.to_string().contains(ENV_PROGRAM_ID));
    }

    #[test]
    fn test_from_lookup() {
        let program_id = Pubkey::new_unique();
        let id = program_id.to_string();
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_PROGRAM_ID, id.as_str()),
            (ENV_CLUSTER, "localnet"),
            (ENV_COMMITMENT, "finalized"),
            (ENV_WALLET, "/tmp/wallet.json"),
        ]))
        .unwrap();

        assert_eq!(config.program_id, program_id);
        assert_eq!(config.cluster, Cluster::Localnet);
        assert_eq!(config.commitment, CommitmentConfig::finalized());
        assert_eq!(config.resolved_wallet_path().unwrap(), PathBuf::from("/tmp/wallet.json"));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let program_id = Pubkey::new_unique();
        let id = program_id.to_string();
        let config = ClientConfig::from_lookup(lookup_from(&[(ENV_PROGRAM_ID, id.as_str())])).unwrap();

        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_program_id("not-a-program").is_err());
        assert!(parse_commitment("eventually").is_err());
        assert!(parse_cluster("devnet").is_ok());
        assert!(parse_cluster("http://127.0.0.1:8899").is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new(Pubkey::new_unique())
            .with_cluster(Cluster::Localnet)
            .with_commitment(CommitmentConfig::processed())
            .with_wallet_path("/keys/id.json");

        assert_eq!(config.cluster, Cluster::Localnet);
        assert_eq!(config.commitment, CommitmentConfig::processed());
        assert_eq!(config.resolved_wallet_path().unwrap(), PathBuf::from("/keys/id.json"));
    }

    #[test]
    fn test_missing_wallet_file() {
        let config = ClientConfig::new(Pubkey::new_unique())
            .with_wallet_path("/nonexistent/stake-client/id.json");
        let err = config.load_wallet().unwrap_err();
        assert_eq!(err.error_code(), 1301);
    }
}
