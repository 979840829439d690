pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::AuthUser;

use chrono::{Duration, Utc};
use claims::Claims;
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

/// Issues a signed HS256 token carrying the management capability flag.
///
/// Token issuance normally happens in an external identity service; this
/// helper exists for tests and local tooling.
pub fn generate_token(user_id: i64, management: bool) -> String {
    let expiry = Utc::now() + Duration::minutes(config::jwt_duration_minutes() as i64);
    let claims = Claims {
        sub: user_id,
        exp: expiry.timestamp() as usize,
        management,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )
    .expect("Failed to sign JWT")
}
