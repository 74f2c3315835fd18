pub mod calc;
pub mod identity;
pub mod reset;

pub use identity::{IdentityError, IdentityService};
pub use reset::{ResetFlow, ResetFormError, ResetPhase};
