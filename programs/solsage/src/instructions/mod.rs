// Protocol setup
pub mod initialize;
pub mod initialize_reward_mint;

// Knowledge lifecycle
pub mod claim_rewards;
pub mod record_attribution;
pub mod stake_knowledge;

pub use claim_rewards::*;
pub use initialize::*;
pub use initialize_reward_mint::*;
pub use record_attribution::*;
pub use stake_knowledge::*;
