use anchor_lang::prelude::*;

// PDA seed tags, one per account kind
#[constant]
pub const PROTOCOL_SEED: &[u8] = b"protocol";
#[constant]
pub const KNOWLEDGE_SEED: &[u8] = b"knowledge";
#[constant]
pub const ATTRIBUTION_SEED: &[u8] = b"attribution";
#[constant]
pub const REWARD_MINT_SEED: &[u8] = b"reward_mint";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Metadata bounds are structural: KnowledgeEntry is allocated at its maximum size.
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 50;

pub const MAX_RELEVANCE_SCORE: u8 = 100;

/// 1 SAGE at 6 decimals.
#[constant]
pub const DEFAULT_REWARD_PER_ATTRIBUTION: u64 = 1_000_000;
#[constant]
pub const REWARD_MINT_DECIMALS: u8 = 6;
