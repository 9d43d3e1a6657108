//! Verification of access tokens issued by the external auth provider.

pub mod jwt;
