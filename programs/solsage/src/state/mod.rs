pub mod attribution_record;
pub mod knowledge_entry;
pub mod protocol_state;

pub use attribution_record::*;
pub use knowledge_entry::*;
pub use protocol_state::*;
