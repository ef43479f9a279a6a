use crate::error::SolSageError;
use crate::events::KnowledgeStaked;
use crate::state::{KnowledgeEntry, ProtocolState};
use crate::utils::{create_pda_account, write_account};
use anchor_lang::prelude::*;

pub fn stake_knowledge(
    ctx: Context<StakeKnowledge>,
    content_hash: [u8; 32],
    title: String,
    category: String,
) -> Result<()> {
    let clock = Clock::get()?;
    let staker = ctx.accounts.staker.key();
    let bump = ctx.bumps.knowledge_entry;

    // Validates title and category before anything is allocated
    let entry = KnowledgeEntry::new(
        staker,
        content_hash,
        title,
        category,
        clock.unix_timestamp,
        bump,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[
        KnowledgeEntry::SEED_PREFIX,
        staker.as_ref(),
        &content_hash,
        &[bump],
    ]];
    create_pda_account(
        &ctx.accounts.staker.to_account_info(),
        &ctx.accounts.knowledge_entry.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        KnowledgeEntry::SPACE,
        SolSageError::AlreadyStaked,
    )?;
    write_account(&ctx.accounts.knowledge_entry.to_account_info(), &entry)?;

    ctx.accounts.protocol.record_knowledge_entry()?;

    msg!(
        "Knowledge staked: {} ({})",
        entry.title,
        hex::encode(content_hash)
    );

    emit!(KnowledgeStaked {
        knowledge_entry: ctx.accounts.knowledge_entry.key(),
        staker,
        content_hash,
        title: entry.title,
        category: entry.category,
        created_at: entry.created_at,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(content_hash: [u8; 32])]
pub struct StakeKnowledge<'info> {
    #[account(
        mut,
        seeds = [ProtocolState::SEED_PREFIX],
        bump = protocol.bump
    )]
    pub protocol: Account<'info, ProtocolState>,

    /// CHECK: Created in the handler; an occupied address fails with AlreadyStaked
    #[account(
        mut,
        seeds = [KnowledgeEntry::SEED_PREFIX, staker.key().as_ref(), content_hash.as_ref()],
        bump
    )]
    pub knowledge_entry: UncheckedAccount<'info>,

    #[account(mut)]
    pub staker: Signer<'info>,

    pub system_program: Program<'info, System>,
}
