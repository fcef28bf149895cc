pub mod current_claims;
pub mod rejections;
pub mod validated_json;

pub use current_claims::CurrentClaims;
pub use validated_json::ValidatedJson;
