/// Token acquisition and transparent re-authorization
pub mod auth;
/// Access token model
pub mod token;
