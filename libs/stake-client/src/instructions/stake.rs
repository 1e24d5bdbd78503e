use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{
    prelude::*,
    solana_program::instruction::AccountMeta,
    system_program, Discriminator, InstructionData,
};

use crate::{
    client::{ProgramClient, ProgramGateway},
    error::Result,
    state::LockupTier,
};

use super::STAKE_DISCRIMINATOR;

/// Accounts for `stake`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeAccounts {
    /// The pool to stake into
    /// PDA: ["pool", authority.key()]
    pub pool: Pubkey,

    /// User's stake record, created on first stake
    /// PDA: ["stake", user.key(), pool.key()]
    pub stake_account: Pubkey,

    /// Pool's token custody account
    /// PDA: ["vault", pool.key()]
    pub stake_vault: Pubkey,

    /// User's associated token account the tokens leave from
    pub user_token_account: Pubkey,

    pub token_mint: Pubkey,

    /// The staking wallet; signs and pays for the stake account
    pub user: Pubkey,

    pub token_program: Pubkey,
    pub system_program: Pubkey,
}

impl ToAccountMetas for StakeAccounts {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.stake_account, false),
            AccountMeta::new(self.stake_vault, false),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new(self.user, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

/// Arguments for `stake`
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeArgs {
    /// Amount in base units of the mint
    pub amount: u64,
    pub lockup_tier: LockupTier,
}

impl Discriminator for StakeArgs {
    const DISCRIMINATOR: &'static [u8] = &STAKE_DISCRIMINATOR;
}

impl InstructionData for StakeArgs {}

impl<G: ProgramGateway> ProgramClient<G> {
    /// Stake `amount` of `mint` into the connected wallet's pool
    pub fn stake(&self, mint: &Pubkey, amount: u64, lockup_tier: LockupTier) -> Result<Signature> {
        let addresses = self.stake_addresses(mint)?;

        let accounts = StakeAccounts {
            pool: addresses.pool,
            stake_account: addresses.stake_account,
            stake_vault: addresses.stake_vault,
            user_token_account: addresses.user_token_account,
            token_mint: *mint,
            user: *self.wallet(),
            token_program: anchor_spl::token::ID,
            system_program: system_program::ID,
        };

        self.submit("stake", accounts, StakeArgs { amount, lockup_tier })
    }
}
