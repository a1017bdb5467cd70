//! Authentication for the Snipcart API.
//!
//! Snipcart uses HTTP Basic authentication: the secret API key is the user
//! name and the password is empty, so the `Authorization` header carries
//! `Basic base64("{key}:")`. There is no token exchange, refresh, or
//! signature scheme.
//!
//! The main type is [`Credentials`], which owns the key and its precomputed
//! header value.

mod credentials;

pub use credentials::Credentials;
