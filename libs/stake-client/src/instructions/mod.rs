// Typed mirror of the program interface in idl/staking.json

pub mod initialize_pool;
pub mod stake;
pub mod unstake;

// Re-export the account lists and arguments for easy access
pub use initialize_pool::*;
pub use stake::*;
pub use unstake::*;

/// Instruction discriminators: first 8 bytes of sha256("global:<name>")
pub const INITIALIZE_POOL_DISCRIMINATOR: [u8; 8] = [95, 180, 10, 172, 84, 174, 232, 40];
pub const STAKE_DISCRIMINATOR: [u8; 8] = [206, 176, 202, 18, 200, 209, 179, 108];
pub const UNSTAKE_DISCRIMINATOR: [u8; 8] = [90, 95, 107, 42, 205, 124, 50, 225];
