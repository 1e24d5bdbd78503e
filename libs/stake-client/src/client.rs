use std::rc::Rc;

use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{
    prelude::Pubkey,
    solana_program::instruction::Instruction,
    InstructionData, ToAccountMetas,
};
use log::{debug, info};

use crate::{
    error::{ExternalError, Result},
    pda::StakeAddresses,
};

/// Submits one instruction to the network and waits for the outcome
pub trait ProgramGateway {
    fn send(&self, instruction: Instruction) -> std::result::Result<Signature, ExternalError>;
}

impl<G: ProgramGateway + ?Sized> ProgramGateway for Rc<G> {
    fn send(&self, instruction: Instruction) -> std::result::Result<Signature, ExternalError> {
        (**self).send(instruction)
    }
}

/// A connected wallet bound to the staking program
/// The instruction calls live next to their account lists in `instructions`.
#[derive(Debug)]
pub struct ProgramClient<G> {
    program_id: Pubkey,
    wallet: Pubkey,
    gateway: G,
}

impl<G: ProgramGateway> ProgramClient<G> {
    pub fn new(program_id: Pubkey, wallet: Pubkey, gateway: G) -> Self {
        Self {
            program_id,
            wallet,
            gateway,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Public key of the connected wallet
    pub fn wallet(&self) -> &Pubkey {
        &self.wallet
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Addresses a stake or unstake call for `mint` uses
    pub fn stake_addresses(&self, mint: &Pubkey) -> Result<StakeAddresses> {
        let addresses = StakeAddresses::derive(&self.program_id, &self.wallet, mint)?;
        debug!(
            "Derived addresses: pool={}, stake_account={}, stake_vault={}, user_token_account={}",
            addresses.pool,
            addresses.stake_account,
            addresses.stake_vault,
            addresses.user_token_account
        );
        Ok(addresses)
    }

    /// Build the instruction from its account list and arguments and send it
    pub(crate) fn submit<A, D>(&self, name: &str, accounts: A, args: D) -> Result<Signature>
    where
        A: ToAccountMetas,
        D: InstructionData,
    {
        let instruction = Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: args.data(),
        };

        info!(
            "Submitting {}: program={}, wallet={}, accounts={}",
            name,
            self.program_id,
            self.wallet,
            instruction.accounts.len()
        );

        let signature = self.gateway.send(instruction)?;
        info!("{} confirmed: signature={}", name, signature);

        Ok(signature)
    }
}
