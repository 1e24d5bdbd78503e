use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{
    prelude::*,
    solana_program::instruction::AccountMeta,
    system_program, Discriminator, InstructionData,
};
use log::debug;

use crate::{
    client::{ProgramClient, ProgramGateway},
    error::Result,
    pda::find_pool_address,
};

use super::INITIALIZE_POOL_DISCRIMINATOR;

/// Accounts for `initialize_pool`
/// The pool PDA is ["pool", authority.key()], so each authority owns one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializePoolAccounts {
    /// The pool account the program creates
    pub pool: Pubkey,
    /// Pool authority; signs and pays for the pool account
    pub authority: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for InitializePoolAccounts {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.authority, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Arguments for `initialize_pool`
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct InitializePoolArgs {
    /// Token mints the pool accepts
    pub mint_addresses: Vec<Pubkey>,
}

impl Discriminator for InitializePoolArgs {
    const DISCRIMINATOR: &'static [u8] = &INITIALIZE_POOL_DISCRIMINATOR;
}

impl InstructionData for InitializePoolArgs {}

impl<G: ProgramGateway> ProgramClient<G> {
    /// Create the pool owned by the connected wallet
    pub fn initialize_pool(&self, mint_addresses: Vec<Pubkey>) -> Result<Signature> {
        let (pool, _) = find_pool_address(self.wallet(), self.program_id())?;
        debug!("Derived pool address: {}", pool);

        let accounts = InitializePoolAccounts {
            pool,
            authority: *self.wallet(),
            system_program: system_program::ID,
        };

        self.submit("initialize_pool", accounts, InitializePoolArgs { mint_addresses })
    }
}
