pub mod authority;
pub mod bounty;
pub mod config;

pub use authority::*;
pub use bounty::*;
pub use config::*;
