//! Address derivation for every account the program owns.
//!
//! Each account kind has its own seed tag, so the same components can never
//! collide across kinds. `find_program_address` searches for the bump that
//! puts the address off the ed25519 curve, so no private key exists for it.

use crate::constants::REWARD_MINT_SEED;
use crate::state::{AttributionRecord, KnowledgeEntry, ProtocolState};
use anchor_lang::prelude::*;

pub fn derive_protocol_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ProtocolState::SEED_PREFIX], program_id)
}

pub fn derive_knowledge_entry_address(
    program_id: &Pubkey,
    staker: &Pubkey,
    content_hash: &[u8; 32],
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[KnowledgeEntry::SEED_PREFIX, staker.as_ref(), content_hash],
        program_id,
    )
}

pub fn derive_attribution_address(
    program_id: &Pubkey,
    query_hash: &[u8; 32],
    knowledge_entry: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AttributionRecord::SEED_PREFIX, query_hash, knowledge_entry.as_ref()],
        program_id,
    )
}

pub fn derive_reward_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARD_MINT_SEED], program_id)
}
