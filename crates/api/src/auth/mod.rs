//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Tokens are issued by the external auth service, which shares the signing
//! secret; this server only validates them.

pub mod jwt;
