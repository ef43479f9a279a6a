use crate::constants::{ANCHOR_DISCRIMINATOR, KNOWLEDGE_SEED, MAX_CATEGORY_LEN, MAX_TITLE_LEN};
use crate::error::SolSageError;
use anchor_lang::prelude::*;

/// A staked piece of knowledge, at PDA `["knowledge", staker, content_hash]`.
///
/// Fixed-size fields come first so off-chain scanners can filter on stable
/// offsets; the two bounded strings are stored last.
#[account]
#[derive(InitSpace, Debug)]
pub struct KnowledgeEntry {
    /// The only key allowed to claim this entry's rewards.
    pub staker: Pubkey,
    /// SHA-256 of the content. The content itself never goes on chain.
    pub content_hash: [u8; 32],
    pub created_at: i64,
    pub total_attributions: u64,
    /// Rewards accrued since the last claim.
    pub pending_rewards: u64,
    /// Always true; no instruction deactivates an entry yet.
    pub is_active: bool,
    pub bump: u8,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_CATEGORY_LEN)]
    pub category: String,
}

impl KnowledgeEntry {
    pub const SEED_PREFIX: &'static [u8] = KNOWLEDGE_SEED;
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    // Byte offsets into the raw account data, discriminator included.
    pub const STAKER_OFFSET: usize = 8;
    pub const CONTENT_HASH_OFFSET: usize = 40;
    pub const CREATED_AT_OFFSET: usize = 72;
    pub const TOTAL_ATTRIBUTIONS_OFFSET: usize = 80;
    pub const PENDING_REWARDS_OFFSET: usize = 88;
    pub const IS_ACTIVE_OFFSET: usize = 96;
    pub const BUMP_OFFSET: usize = 97;
    /// Start of the u32 length prefix of `title`. `category` follows the title bytes.
    pub const TITLE_OFFSET: usize = 98;

    pub fn validate_metadata(title: &str, category: &str) -> Result<()> {
        require!(title.len() <= MAX_TITLE_LEN, SolSageError::InvalidInput);
        require!(category.len() <= MAX_CATEGORY_LEN, SolSageError::InvalidInput);
        Ok(())
    }

    pub fn new(
        staker: Pubkey,
        content_hash: [u8; 32],
        title: String,
        category: String,
        created_at: i64,
        bump: u8,
    ) -> Result<Self> {
        Self::validate_metadata(&title, &category)?;

        Ok(Self {
            staker,
            content_hash,
            created_at,
            total_attributions: 0,
            pending_rewards: 0,
            is_active: true,
            bump,
            title,
            category,
        })
    }

    /// Credits one attribution worth `reward`.
    pub fn accrue_reward(&mut self, reward: u64) -> Result<()> {
        let total_attributions = self
            .total_attributions
            .checked_add(1)
            .ok_or(error!(SolSageError::ArithmeticOverflow))?;
        let pending_rewards = self
            .pending_rewards
            .checked_add(reward)
            .ok_or(error!(SolSageError::ArithmeticOverflow))?;

        self.total_attributions = total_attributions;
        self.pending_rewards = pending_rewards;
        Ok(())
    }

    /// Zeroes the pending balance and returns the amount to pay out.
    ///
    /// Ownership is checked before the balance, so a non-staker gets
    /// `Unauthorized` even on an empty entry.
    pub fn claim(&mut self, claimant: &Pubkey) -> Result<u64> {
        require_keys_eq!(*claimant, self.staker, SolSageError::Unauthorized);
        require!(self.pending_rewards > 0, SolSageError::NothingToClaim);

        let amount = self.pending_rewards;
        self.pending_rewards = 0;
        Ok(amount)
    }
}
