use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("F2tbCMp68bpKdVGBaVJWzGA8Bnh756H2a4i3UDXyEhAU");

#[program]
pub mod solsage {
    use super::*;

    /// Creates the singleton protocol account. The caller becomes its authority.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Creates the SAGE reward mint, owned by the protocol PDA. Authority only.
    pub fn initialize_reward_mint(ctx: Context<InitializeRewardMint>) -> Result<()> {
        instructions::initialize_reward_mint(ctx)
    }

    /// Registers a content hash for the calling staker.
    pub fn stake_knowledge(
        ctx: Context<StakeKnowledge>,
        content_hash: [u8; 32],
        title: String,
        category: String,
    ) -> Result<()> {
        instructions::stake_knowledge(ctx, content_hash, title, category)
    }

    /// Credits a knowledge entry for one query. Each (query, entry) pair pays once.
    pub fn record_attribution(
        ctx: Context<RecordAttribution>,
        query_hash: [u8; 32],
        relevance_score: u8,
    ) -> Result<()> {
        instructions::record_attribution(ctx, query_hash, relevance_score)
    }

    /// Pays the entry's pending rewards to its staker and resets them to zero.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards(ctx)
    }
}
