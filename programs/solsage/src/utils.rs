pub mod account;
pub mod content_hash;
pub mod pda;

pub use account::{create_pda_account, is_vacant, write_account};
pub use content_hash::{content_hash, query_hash};
pub use pda::*;
