use crate::error::SolSageError;
use crate::events::AttributionRecorded;
use crate::state::{AttributionRecord, KnowledgeEntry, ProtocolState};
use crate::utils::{create_pda_account, write_account};
use anchor_lang::prelude::*;

pub fn record_attribution(
    ctx: Context<RecordAttribution>,
    query_hash: [u8; 32],
    relevance_score: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let knowledge_key = ctx.accounts.knowledge_entry.key();
    let bump = ctx.bumps.attribution;

    let record = AttributionRecord::new(
        knowledge_key,
        query_hash,
        relevance_score,
        clock.unix_timestamp,
        bump,
    )?;

    // The attribution address is the idempotency guard: a second record for
    // the same (query, entry) pair finds it occupied.
    let signer_seeds: &[&[&[u8]]] = &[&[
        AttributionRecord::SEED_PREFIX,
        &query_hash,
        knowledge_key.as_ref(),
        &[bump],
    ]];
    create_pda_account(
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.attribution.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        AttributionRecord::SPACE,
        SolSageError::DuplicateAttribution,
    )?;
    write_account(&ctx.accounts.attribution.to_account_info(), &record)?;

    let reward = ctx.accounts.protocol.record_attribution()?;
    let knowledge_entry = &mut ctx.accounts.knowledge_entry;
    knowledge_entry.accrue_reward(reward)?;

    msg!(
        "Attribution recorded for {}, score: {}, reward: {}",
        knowledge_key,
        relevance_score,
        reward
    );

    emit!(AttributionRecorded {
        attribution: ctx.accounts.attribution.key(),
        knowledge_entry: knowledge_key,
        query_hash,
        relevance_score,
        reward,
        pending_rewards: knowledge_entry.pending_rewards,
        recorded_at: record.recorded_at,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(query_hash: [u8; 32])]
pub struct RecordAttribution<'info> {
    #[account(
        mut,
        seeds = [ProtocolState::SEED_PREFIX],
        bump = protocol.bump
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [
            KnowledgeEntry::SEED_PREFIX,
            knowledge_entry.staker.as_ref(),
            knowledge_entry.content_hash.as_ref(),
        ],
        bump = knowledge_entry.bump
    )]
    pub knowledge_entry: Account<'info, KnowledgeEntry>,

    /// CHECK: Created in the handler; an occupied address fails with DuplicateAttribution
    #[account(
        mut,
        seeds = [AttributionRecord::SEED_PREFIX, query_hash.as_ref(), knowledge_entry.key().as_ref()],
        bump
    )]
    pub attribution: UncheckedAccount<'info>,

    /// Whoever submits the attribution, usually the query engine. Pays the record deposit.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
