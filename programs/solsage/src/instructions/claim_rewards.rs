use crate::constants::REWARD_MINT_SEED;
use crate::error::SolSageError;
use crate::events::RewardsClaimed;
use crate::state::{KnowledgeEntry, ProtocolState};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::{
        create_idempotent, get_associated_token_address_with_program_id, AssociatedToken, Create,
    },
    token_interface::{mint_to, Mint, MintTo, TokenInterface},
};

pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;
    let staker = ctx.accounts.staker.key();

    // Zeroed here and minted below; a failed mint reverts the zeroing too
    let amount = ctx.accounts.knowledge_entry.claim(&staker)?;

    // Only a staker with something to claim pays for the token account
    let create_accounts = Create {
        payer: ctx.accounts.staker.to_account_info(),
        associated_token: ctx.accounts.staker_token_account.to_account_info(),
        authority: ctx.accounts.staker.to_account_info(),
        mint: ctx.accounts.reward_mint.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    create_idempotent(CpiContext::new(
        ctx.accounts.associated_token_program.to_account_info(),
        create_accounts,
    ))?;

    let protocol_bump = ctx.accounts.protocol.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[ProtocolState::SEED_PREFIX, &[protocol_bump]]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.reward_mint.to_account_info(),
        to: ctx.accounts.staker_token_account.to_account_info(),
        authority: ctx.accounts.protocol.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_context = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

    mint_to(cpi_context, amount)?;

    msg!("Claimed {} SAGE base units for staker {}", amount, staker);

    emit!(RewardsClaimed {
        knowledge_entry: ctx.accounts.knowledge_entry.key(),
        staker,
        amount,
        claimed_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(
        mut,
        seeds = [
            KnowledgeEntry::SEED_PREFIX,
            knowledge_entry.staker.as_ref(),
            knowledge_entry.content_hash.as_ref(),
        ],
        bump = knowledge_entry.bump,
        has_one = staker @ SolSageError::Unauthorized
    )]
    pub knowledge_entry: Account<'info, KnowledgeEntry>,

    /// Must be the entry's staker. Pays for its token account on first claim.
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        seeds = [ProtocolState::SEED_PREFIX],
        bump = protocol.bump
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [REWARD_MINT_SEED],
        bump = protocol.reward_mint_bump,
        mint::authority = protocol,
        mint::token_program = token_program,
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: the staker's associated token account for the reward mint, created
    /// in the handler once the claim has passed its checks.
    #[account(
        mut,
        address = get_associated_token_address_with_program_id(
            &staker.key(),
            &reward_mint.key(),
            &token_program.key(),
        )
    )]
    pub staker_token_account: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
