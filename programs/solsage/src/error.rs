use anchor_lang::prelude::*;

#[error_code]
pub enum SolSageError {
    #[msg("The protocol account has already been initialized.")]
    AlreadyInitialized,
    #[msg("Title must be at most 100 bytes and category at most 50 bytes.")]
    InvalidInput,
    #[msg("This content hash has already been staked by this staker.")]
    AlreadyStaked,
    #[msg("Relevance score must be between 0 and 100.")]
    InvalidScore,
    #[msg("This query has already been attributed to this knowledge entry.")]
    DuplicateAttribution,
    #[msg("Only the staker of this knowledge entry can perform this action.")]
    Unauthorized,
    #[msg("There are no pending rewards to claim.")]
    NothingToClaim,
    #[msg("Payer cannot fund the rent-exempt deposit for the new account.")]
    InsufficientFunds,
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}

/// Numeric code carried by a program error: the Anchor error number, or the
/// custom code of a raw `ProgramError`. `None` for builtin program errors.
pub fn code_of(err: &anchor_lang::error::Error) -> Option<u32> {
    match err {
        anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
        anchor_lang::error::Error::ProgramError(e) => match e.program_error {
            ProgramError::Custom(code) => Some(code),
            _ => None,
        },
    }
}
