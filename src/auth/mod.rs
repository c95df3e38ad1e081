// OAuth token plumbing
// Wire types and token-endpoint calls for the two grants the SDK uses

mod token;
mod types;

pub use types::{OAuthErrorResponse, TokenData, TokenResponse};

pub(crate) use token::{exchange_code, refresh_access_token};
