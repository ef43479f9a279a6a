use crate::constants::{ANCHOR_DISCRIMINATOR, ATTRIBUTION_SEED, MAX_RELEVANCE_SCORE};
use crate::error::SolSageError;
use anchor_lang::prelude::*;

/// Audit record of one query crediting one knowledge entry, at PDA
/// `["attribution", query_hash, knowledge_entry]`. Written once, never mutated.
/// Its existence is what stops the same query from being paid twice.
#[account]
#[derive(InitSpace, Debug)]
pub struct AttributionRecord {
    pub knowledge_entry: Pubkey,
    pub query_hash: [u8; 32],
    /// 0..=100, recorded for display; the reward does not depend on it.
    pub relevance_score: u8,
    pub recorded_at: i64,
    pub bump: u8,
}

impl AttributionRecord {
    pub const SEED_PREFIX: &'static [u8] = ATTRIBUTION_SEED;
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    pub const KNOWLEDGE_ENTRY_OFFSET: usize = 8;
    pub const QUERY_HASH_OFFSET: usize = 40;
    pub const RELEVANCE_SCORE_OFFSET: usize = 72;
    pub const RECORDED_AT_OFFSET: usize = 73;
    pub const BUMP_OFFSET: usize = 81;

    pub fn new(
        knowledge_entry: Pubkey,
        query_hash: [u8; 32],
        relevance_score: u8,
        recorded_at: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            relevance_score <= MAX_RELEVANCE_SCORE,
            SolSageError::InvalidScore
        );

        Ok(Self {
            knowledge_entry,
            query_hash,
            relevance_score,
            recorded_at,
            bump,
        })
    }
}
