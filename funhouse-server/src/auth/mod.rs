//! Staff JWT authentication for the CRM API
//!
//! Login issues an HS256 token good for 24 hours. Every `/crm` route except
//! login runs through [`staff_auth_middleware`], which verifies the bearer
//! token and injects a [`StaffIdentity`] extension. Content-management routes
//! additionally pass through [`require_admin`].

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use shared::models::Staff;

use crate::state::AppState;

const JWT_EXPIRY_HOURS: i64 = 24;

/// JWT claims for staff authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct StaffClaims {
    /// Staff ID
    pub sub: i64,
    pub username: String,
    pub display_name: String,
    pub is_admin: bool,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated staff identity extracted from the JWT
#[derive(Debug, Clone)]
pub struct StaffIdentity {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub is_admin: bool,
}

/// Create a JWT token for a staff account
pub fn create_token(staff: &Staff, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = StaffClaims {
        sub: staff.id,
        username: staff.username.clone(),
        display_name: staff.display_name.clone(),
        is_admin: staff.is_admin,
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Middleware that extracts and verifies the staff JWT from the
/// Authorization header
pub async fn staff_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<StaffClaims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::invalid_token("Invalid or expired token").into_response()
    })?;

    let claims = token_data.claims;
    let identity = StaffIdentity {
        id: claims.sub,
        username: claims.username,
        display_name: claims.display_name,
        is_admin: claims.is_admin,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Middleware gating content-management routes to admin staff
pub async fn require_admin(request: Request, next: Next) -> Result<Response, Response> {
    let is_admin = request
        .extensions()
        .get::<StaffIdentity>()
        .map(|identity| identity.is_admin)
        .unwrap_or(false);

    if !is_admin {
        return Err(AppError::forbidden("Admin role required").into_response());
    }

    Ok(next.run(request).await)
}

// ── Password hashing ─────────────────────────────────────────────────

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() {
        let hash = hash_password("party-time").unwrap();
        assert!(verify_password("party-time", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_token_contains_identity() {
        let staff = Staff {
            id: 42,
            username: "maya".into(),
            hashed_password: String::new(),
            display_name: "Maya".into(),
            is_admin: true,
            created_at: 0,
        };
        let token = create_token(&staff, "test-secret").unwrap();
        let decoded = jsonwebtoken::decode::<StaffClaims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, 42);
        assert!(decoded.claims.is_admin);
    }
}
