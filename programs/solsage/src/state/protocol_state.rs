use crate::constants::{ANCHOR_DISCRIMINATOR, DEFAULT_REWARD_PER_ATTRIBUTION, PROTOCOL_SEED};
use crate::error::SolSageError;
use anchor_lang::prelude::*;

/// Global protocol state. One per deployment, at PDA `["protocol"]`.
#[account]
#[derive(InitSpace, Debug)]
pub struct ProtocolState {
    /// Set once by `initialize`, never changes.
    pub authority: Pubkey,
    pub total_knowledge_entries: u64,
    pub total_attributions: u64,
    /// Reward credited per attribution, in reward mint base units.
    pub reward_per_attribution: u64,
    pub bump: u8,
    /// Zero until `initialize_reward_mint` runs.
    pub reward_mint_bump: u8,
}

impl ProtocolState {
    pub const SEED_PREFIX: &'static [u8] = PROTOCOL_SEED;
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    // Byte offsets into the raw account data, discriminator included.
    pub const AUTHORITY_OFFSET: usize = 8;
    pub const TOTAL_KNOWLEDGE_ENTRIES_OFFSET: usize = 40;
    pub const TOTAL_ATTRIBUTIONS_OFFSET: usize = 48;
    pub const REWARD_PER_ATTRIBUTION_OFFSET: usize = 56;
    pub const BUMP_OFFSET: usize = 64;
    pub const REWARD_MINT_BUMP_OFFSET: usize = 65;

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            total_knowledge_entries: 0,
            total_attributions: 0,
            reward_per_attribution: DEFAULT_REWARD_PER_ATTRIBUTION,
            bump,
            reward_mint_bump: 0,
        }
    }

    pub fn record_knowledge_entry(&mut self) -> Result<()> {
        self.total_knowledge_entries = self
            .total_knowledge_entries
            .checked_add(1)
            .ok_or(error!(SolSageError::ArithmeticOverflow))?;
        Ok(())
    }

    /// Counts one attribution and returns the reward it earns.
    pub fn record_attribution(&mut self) -> Result<u64> {
        self.total_attributions = self
            .total_attributions
            .checked_add(1)
            .ok_or(error!(SolSageError::ArithmeticOverflow))?;
        Ok(self.reward_per_attribution)
    }
}
