//! Handlers behind the three form buttons.
//!
//! Every handler checks for a connected wallet, validates its input, holds
//! the busy flag while it derives addresses and submits exactly one
//! instruction, and reports the outcome as display text. Local failures
//! never reach the network and nothing is retried.

use anchor_client::solana_sdk::signature::Signature;
use log::warn;

use crate::{
    busy::BusyFlag,
    client::{ProgramClient, ProgramGateway},
    constants::{parse_mint_address, parse_stake_amount, POOL_INITIALIZED_MSG, UNSTAKED_MSG},
    error::{Result, StakeClientError},
    state::LockupTier,
};

/// The three user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    InitializePool,
    Stake,
    Unstake,
}

impl Action {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Action::InitializePool => "Initialize Pool",
            Action::Stake => "Stake",
            Action::Unstake => "Unstake",
        }
    }

    /// Prefix of the message shown when the network call fails
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Action::InitializePool => "Error initializing pool",
            Action::Stake => "Error staking",
            Action::Unstake => "Error unstaking",
        }
    }
}

/// Result of one handler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: Action,
    pub result: std::result::Result<ActionSuccess, StakeClientError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSuccess {
    pub signature: Signature,
    pub message: String,
}

impl ActionOutcome {
    fn new(action: Action, result: Result<ActionSuccess>) -> Self {
        if let Err(err) = &result {
            warn!(
                "{} failed: error {} ({}): {}",
                action.label(),
                err.error_code(),
                err.category(),
                err
            );
        }
        Self { action, result }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Text shown to the user
    /// Local failures show their own text; network failures are prefixed
    /// with the action that failed.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(success) => success.message.clone(),
            Err(err) if err.issued_network_call() => {
                format!("{}: {}", self.action.failure_prefix(), err)
            }
            Err(err) => err.to_string(),
        }
    }
}

/// Form input a stake needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeInput<'a> {
    pub mint_address: &'a str,
    pub amount: &'a str,
    pub lockup_tier: LockupTier,
}

fn connected<G>(client: Option<&ProgramClient<G>>) -> Result<&ProgramClient<G>> {
    client.ok_or(StakeClientError::WalletNotConnected)
}

fn mint_from(input: &str) -> Result<anchor_lang::prelude::Pubkey> {
    parse_mint_address(input).ok_or(StakeClientError::InvalidMintAddress)
}

/// Create the connected wallet's pool for the given mint
pub fn initialize_pool<G: ProgramGateway>(
    client: Option<&ProgramClient<G>>,
    busy: &BusyFlag,
    mint_address: &str,
) -> ActionOutcome {
    let run = || -> Result<ActionSuccess> {
        let client = connected(client)?;
        let mint = mint_from(mint_address)?;

        let _guard = busy.acquire().ok_or(StakeClientError::RequestInFlight)?;
        let signature = client.initialize_pool(vec![mint])?;

        Ok(ActionSuccess {
            signature,
            message: POOL_INITIALIZED_MSG.to_string(),
        })
    };
    ActionOutcome::new(Action::InitializePool, run())
}

/// Stake into the connected wallet's pool
pub fn stake<G: ProgramGateway>(
    client: Option<&ProgramClient<G>>,
    busy: &BusyFlag,
    input: StakeInput<'_>,
) -> ActionOutcome {
    let run = || -> Result<ActionSuccess> {
        let client = connected(client)?;
        let amount = parse_stake_amount(input.amount).ok_or(StakeClientError::InvalidAmount)?;
        let mint = mint_from(input.mint_address)?;

        let _guard = busy.acquire().ok_or(StakeClientError::RequestInFlight)?;
        let signature = client.stake(&mint, amount, input.lockup_tier)?;

        Ok(ActionSuccess {
            signature,
            message: format!("Staked {} tokens successfully!", amount),
        })
    };
    ActionOutcome::new(Action::Stake, run())
}

/// Withdraw the connected wallet's stake
pub fn unstake<G: ProgramGateway>(
    client: Option<&ProgramClient<G>>,
    busy: &BusyFlag,
    mint_address: &str,
) -> ActionOutcome {
    let run = || -> Result<ActionSuccess> {
        let client = connected(client)?;
        let mint = mint_from(mint_address)?;

        let _guard = busy.acquire().ok_or(StakeClientError::RequestInFlight)?;
        let signature = client.unstake(&mint)?;

        Ok(ActionSuccess {
            signature,
            message: UNSTAKED_MSG.to_string(),
        })
    };
    ActionOutcome::new(Action::Unstake, run())
}
