use crate::error::SolSageError;
use crate::events::ProtocolInitialized;
use crate::state::ProtocolState;
use crate::utils::{create_pda_account, write_account};
use anchor_lang::prelude::*;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();
    let bump = ctx.bumps.protocol;

    let signer_seeds: &[&[&[u8]]] = &[&[ProtocolState::SEED_PREFIX, &[bump]]];
    create_pda_account(
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.protocol.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        ProtocolState::SPACE,
        SolSageError::AlreadyInitialized,
    )?;

    let protocol = ProtocolState::new(authority, bump);
    write_account(&ctx.accounts.protocol.to_account_info(), &protocol)?;

    emit!(ProtocolInitialized {
        protocol: ctx.accounts.protocol.key(),
        authority,
        reward_per_attribution: protocol.reward_per_attribution,
        initialized_at: clock.unix_timestamp,
    });

    msg!("SolSage protocol initialized, authority: {}", authority);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: Created in the handler; an occupied address fails with AlreadyInitialized
    #[account(
        mut,
        seeds = [ProtocolState::SEED_PREFIX],
        bump
    )]
    pub protocol: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
