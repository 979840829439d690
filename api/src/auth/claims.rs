use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    /// Whether the caller holds the management capability.
    pub management: bool,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
