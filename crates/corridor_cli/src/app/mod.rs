//! Demo application: one Context Capability, two realizations, and the
//! dependents that resolve against it.

pub mod api;
pub mod context;
pub mod types;

pub use context::for_profile;
pub use types::{AType, Dashboard, StaticType};
