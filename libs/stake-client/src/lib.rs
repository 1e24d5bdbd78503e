//! # stake-client - Lockup Staking Client
//!
//! Client for a deployed lockup staking program. All staking logic (balance
//! accounting, lockup enforcement, APY, vault custody) lives in the program;
//! this crate derives the program addresses, builds the three instructions
//! and turns their outcome into text for the user.
//!
//! ## Flow
//!
//! 1. Connect:
//!    - `ClientConfig` names the cluster, program id and commitment
//!    - `ProgramClient::connect` binds a wallet keypair to the program
//!    - `StakeForm::connect` attaches the client to the screen
//!
//! 2. Act (one button, one instruction):
//!    - Check a wallet is connected
//!    - Validate the mint address (and amount for staking)
//!    - Mark the form busy, derive addresses, submit
//!    - Show the outcome message and clear the busy flag
//!
//! Addresses are derived on every action:
//! - Pool: ["pool", authority]
//! - StakeAccount: ["stake", user, pool]
//! - StakeVault: ["vault", pool]
//! - User token account: associated token account of (user, mint)

// Import our modules
pub mod actions;
pub mod busy;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod instructions;
pub mod pda;
pub mod rpc;
pub mod state;

#[cfg(test)]
mod testing;

pub use actions::{Action, ActionOutcome, ActionSuccess, StakeInput};
pub use busy::{BusyFlag, BusyGuard};
pub use client::{ProgramClient, ProgramGateway};
pub use config::ClientConfig;
pub use error::{ExternalError, ExternalErrorKind, StakeClientError};
pub use form::{ButtonView, FormView, StakeForm, TierOption};
pub use pda::StakeAddresses;
pub use rpc::AnchorGateway;
pub use state::LockupTier;
