//! HTTP implementation of the identity service collaborator.

mod http;

pub use http::{HttpIdentityService, IdentityConfig};
