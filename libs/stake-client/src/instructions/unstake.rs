use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{
    prelude::*,
    solana_program::instruction::AccountMeta,
    Discriminator, InstructionData,
};

use crate::{
    client::{ProgramClient, ProgramGateway},
    error::Result,
};

use super::UNSTAKE_DISCRIMINATOR;

/// Accounts for `unstake`
/// Same addresses as `stake`, without the mint and system program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeAccounts {
    pub pool: Pubkey,
    pub stake_account: Pubkey,
    pub stake_vault: Pubkey,
    /// Receives the unstaked tokens
    pub user_token_account: Pubkey,
    pub user: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for UnstakeAccounts {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.stake_account, false),
            AccountMeta::new(self.stake_vault, false),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new(self.user, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.token_program, false),
        ]
    }
}

/// `unstake` takes no arguments
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeArgs;

impl Discriminator for UnstakeArgs {
    const DISCRIMINATOR: &'static [u8] = &UNSTAKE_DISCRIMINATOR;
}

impl InstructionData for UnstakeArgs {}

impl<G: ProgramGateway> ProgramClient<G> {
    /// Withdraw the connected wallet's stake of `mint`
    pub fn unstake(&self, mint: &Pubkey) -> Result<Signature> {
        let addresses = self.stake_addresses(mint)?;

        let accounts = UnstakeAccounts {
            pool: addresses.pool,
            stake_account: addresses.stake_account,
            stake_vault: addresses.stake_vault,
            user_token_account: addresses.user_token_account,
            user: *self.wallet(),
            token_program: anchor_spl::token::ID,
        };

        self.submit("unstake", accounts, UnstakeArgs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pda::StakeAddresses,
        testing::{client_with, RecordingGateway},
    };

    #[test]
    fn test_instruction_data_is_discriminator_only() {
        assert_eq!(UnstakeArgs.data(), UNSTAKE_DISCRIMINATOR.to_vec());
    }

    #[test]
    fn test_unstake_accounts() {
        let gateway = RecordingGateway::succeeding();
        let client = client_with(&gateway);
        let mint = Pubkey::new_unique();

        client.unstake(&mint).unwrap();

        assert_eq!(gateway.calls(), 1);
        let instruction = gateway.last();
        let expected = StakeAddresses::derive(client.program_id(), client.wallet(), &mint).unwrap();

        let keys: Vec<Pubkey> = instruction.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                expected.pool,
                expected.stake_account,
                expected.stake_vault,
                expected.user_token_account,
                *client.wallet(),
                anchor_spl::token::ID,
            ]
        );
        assert!(instruction.accounts[4].is_signer);
        assert!(!instruction.accounts[5].is_writable);
    }
}
