pub mod admin_assign_and_release;
pub mod assign_contributor;
pub mod cancel_bounty;
pub mod complete_bounty;
pub mod initialize_bounty;
pub mod initialize_config;
pub mod update_admin;

pub use admin_assign_and_release::*;
pub use assign_contributor::*;
pub use cancel_bounty::*;
pub use complete_bounty::*;
pub use initialize_bounty::*;
pub use initialize_config::*;
pub use update_admin::*;
