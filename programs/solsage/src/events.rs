use anchor_lang::prelude::*;

#[event]
pub struct ProtocolInitialized {
    pub protocol: Pubkey,
    pub authority: Pubkey,
    pub reward_per_attribution: u64,
    pub initialized_at: i64,
}

#[event]
pub struct RewardMintInitialized {
    pub protocol: Pubkey,
    pub reward_mint: Pubkey,
    pub decimals: u8,
    pub initialized_at: i64,
}

#[event]
pub struct KnowledgeStaked {
    pub knowledge_entry: Pubkey,
    pub staker: Pubkey,
    pub content_hash: [u8; 32],
    pub title: String,
    pub category: String,
    pub created_at: i64,
}

#[event]
pub struct AttributionRecorded {
    pub attribution: Pubkey,
    pub knowledge_entry: Pubkey,
    pub query_hash: [u8; 32],
    pub relevance_score: u8,
    pub reward: u64,
    pub pending_rewards: u64,
    pub recorded_at: i64,
}

#[event]
pub struct RewardsClaimed {
    pub knowledge_entry: Pubkey,
    pub staker: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
