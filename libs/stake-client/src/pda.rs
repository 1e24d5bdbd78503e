//! Program-derived addresses used by the staking program.
//!
//! Addresses are recomputed for every action; nothing here is cached.

use anchor_lang::prelude::Pubkey;
use anchor_spl::associated_token::get_associated_token_address;

use crate::{
    constants::{POOL_SEED, STAKE_SEED, VAULT_SEED},
    error::{Result, StakeClientError},
};

/// Derive a program address from a seed label followed by public keys
pub fn derive_address(label: &[u8], keys: &[&Pubkey], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(keys.len() + 1);
    seeds.push(label);
    seeds.extend(keys.iter().map(|key| key.as_ref()));

    Pubkey::try_find_program_address(&seeds, program_id).ok_or(StakeClientError::AddressDerivation)
}

/// Pool PDA: ["pool", authority]
pub fn find_pool_address(authority: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(POOL_SEED, &[authority], program_id)
}

/// StakeAccount PDA: ["stake", user, pool]
pub fn find_stake_account_address(
    user: &Pubkey,
    pool: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive_address(STAKE_SEED, &[user, pool], program_id)
}

/// StakeVault PDA: ["vault", pool]
pub fn find_stake_vault_address(pool: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(VAULT_SEED, &[pool], program_id)
}

/// The user's associated token account for `mint`
pub fn user_token_account(user: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(user, mint)
}

/// Every address a stake or unstake call needs for one user and mint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeAddresses {
    pub pool: Pubkey,
    pub stake_account: Pubkey,
    pub stake_vault: Pubkey,
    pub user_token_account: Pubkey,
}

impl StakeAddresses {
    /// The pool is the one owned by `user` as authority
    pub fn derive(program_id: &Pubkey, user: &Pubkey, mint: &Pubkey) -> Result<Self> {
        let (pool, _) = find_pool_address(user, program_id)?;
        let (stake_account, _) = find_stake_account_address(user, &pool, program_id)?;
        let (stake_vault, _) = find_stake_vault_address(&pool, program_id)?;

        Ok(Self {
            pool,
            stake_account,
            stake_vault,
            user_token_account: user_token_account(user, mint),
        })
    }
}
