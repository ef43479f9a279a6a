use crate::constants::{REWARD_MINT_DECIMALS, REWARD_MINT_SEED};
use crate::error::SolSageError;
use crate::events::RewardMintInitialized;
use crate::state::ProtocolState;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

/// Creates the SAGE mint that `claim_rewards` pays out from. The protocol PDA
/// is its mint authority, so only program logic can issue rewards.
pub fn initialize_reward_mint(ctx: Context<InitializeRewardMint>) -> Result<()> {
    let clock = Clock::get()?;

    let protocol = &mut ctx.accounts.protocol;
    protocol.reward_mint_bump = ctx.bumps.reward_mint;

    emit!(RewardMintInitialized {
        protocol: protocol.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        decimals: REWARD_MINT_DECIMALS,
        initialized_at: clock.unix_timestamp,
    });

    msg!(
        "Reward mint initialized: {}, decimals: {}",
        ctx.accounts.reward_mint.key(),
        REWARD_MINT_DECIMALS
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRewardMint<'info> {
    #[account(
        mut,
        seeds = [ProtocolState::SEED_PREFIX],
        bump = protocol.bump,
        has_one = authority @ SolSageError::Unauthorized
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init,
        payer = authority,
        seeds = [REWARD_MINT_SEED],
        bump,
        mint::decimals = REWARD_MINT_DECIMALS,
        mint::authority = protocol,
        mint::token_program = token_program,
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}
