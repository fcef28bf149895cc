pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod login;
pub mod role;

pub use claims::Claims;
pub use jwt::{decode_access_token, is_token_valid, mint_access_token, MintedToken};
pub use login::{authenticate, LoginOutcome, ACCESS_TOKEN_TTL};
pub use role::Role;
