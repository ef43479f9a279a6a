use crate::error::SolSageError;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

/// An address is free to be created when the system program still owns it
/// and it holds no data. Lamports alone do not count as occupation.
pub fn is_vacant(owner: &Pubkey, data_len: usize) -> bool {
    *owner == system_program::ID && data_len == 0
}

/// Creates a program-owned account at a PDA, failing with `occupied` if
/// anything already lives there.
///
/// Runs to completion or not at all: the runtime executes one instruction at a
/// time, so of two transactions racing for the same address exactly one sees
/// it vacant.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    space: usize,
    occupied: SolSageError,
) -> Result<()> {
    if !is_vacant(new_account.owner, new_account.data_len()) {
        return Err(occupied.into());
    }

    let rent = Rent::get()?;
    let required = rent
        .minimum_balance(space)
        .saturating_sub(new_account.lamports());
    require!(payer.lamports() >= required, SolSageError::InsufficientFunds);

    if new_account.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    // Someone already sent lamports to the address: top up, then allocate and assign
    if required > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            required,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: new_account.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )?;

    Ok(())
}

/// Writes `value` with its discriminator into a freshly created account.
pub fn write_account<T: AccountSerialize>(account: &AccountInfo, value: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer = &mut data[..];
    value.try_serialize(&mut writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_address_is_vacant() {
        assert!(is_vacant(&system_program::ID, 0));
    }

    #[test]
    fn test_program_owned_address_is_occupied() {
        assert!(!is_vacant(&crate::ID, 256));
        // Assigned but not yet written still counts as taken
        assert!(!is_vacant(&crate::ID, 0));
    }

    #[test]
    fn test_system_account_with_data_is_occupied() {
        assert!(!is_vacant(&system_program::ID, 1));
    }
}
