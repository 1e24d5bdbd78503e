use std::str::FromStr;

use anchor_lang::prelude::Pubkey;

// PDA Seeds for deterministic address generation

/// Seed for Pool PDAs: ["pool", authority.key()]
/// One pool per authority key
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for StakeAccount PDAs: ["stake", user.key(), pool.key()]
/// One stake account per user per pool
pub const STAKE_SEED: &[u8] = b"stake";

/// Seed for StakeVault PDAs: ["vault", pool.key()]
/// Token account that holds all staked tokens for a pool
pub const VAULT_SEED: &[u8] = b"vault";

// Connection defaults

/// Cluster used when none is configured
pub const DEFAULT_CLUSTER: &str = "devnet";

/// Commitment level used for request finality
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Keypair file used when no wallet path is configured, relative to $HOME
pub const DEFAULT_WALLET_PATH: &str = ".config/solana/id.json";

// Environment variables read by `ClientConfig::from_env`

pub const ENV_PROGRAM_ID: &str = "STAKE_PROGRAM_ID";
pub const ENV_CLUSTER: &str = "STAKE_CLUSTER";
pub const ENV_COMMITMENT: &str = "STAKE_COMMITMENT";
pub const ENV_WALLET: &str = "STAKE_WALLET";

// Outcome messages shown to the user

pub const POOL_INITIALIZED_MSG: &str = "Pool initialized successfully!";
pub const UNSTAKED_MSG: &str = "Unstaked successfully!";

/// Form title
pub const FORM_TITLE: &str = "Solana Staking Program";

/// Button label while a request is in flight
pub const PROCESSING_LABEL: &str = "Processing...";

// Input parsing

/// Parse a user-supplied stake amount in base units.
/// Surrounding whitespace is ignored; zero, negatives, fractions and
/// non-numeric input are rejected.
pub fn parse_stake_amount(input: &str) -> Option<u64> {
    let amount = input.trim().parse::<u64>().ok()?;
    is_valid_stake_amount(amount).then_some(amount)
}

/// Check if a stake amount is valid
pub fn is_valid_stake_amount(amount: u64) -> bool {
    amount > 0
}

/// Parse a user-supplied token mint address
pub fn parse_mint_address(input: &str) -> Option<Pubkey> {
    Pubkey::from_str(input.trim()).ok()
}
