//! Wordlist invariants: validation policy, structural validator, and the
//! final validated wordlist type.

pub mod list;
pub mod policy;
pub mod validator;

// Re-export commonly used types
pub use list::*;
pub use policy::*;
pub use validator::*;
