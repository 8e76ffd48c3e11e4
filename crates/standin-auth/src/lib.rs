//! # standin-auth
//!
//! Token gate for Standin: compact HS256 tokens signed with a shared
//! process secret, plus the base64url helpers they ride on.
//!
//! This is deliberately not an identity system. Validation checks the
//! signature and the expiry, nothing else, and answers with a plain
//! boolean. No subject, audience, or claim-shape checks exist; any
//! serializable payload can be signed.

pub mod base64url;
pub mod token;

pub use token::{
    DEFAULT_SECRET, DEFAULT_TTL_SECONDS, TokenError, issue, issue_with_expiry, validate,
};
