//! Identity claims embedded in every auth token issued by the server.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The decoded payload of an auth token.
///
/// Verifying a token requires zero storage reads: the claims carry enough
/// information to identify and authorize the caller. The claims are signed
/// at issuance and trusted as-is on verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Opaque principal identifier.
    pub sub: String,

    /// Whether this principal has admin privileges.
    ///
    /// Embedded so privileged routes need no extra lookup. A newly promoted
    /// or demoted principal must be issued a fresh token for this flag to
    /// update.
    pub is_admin: bool,

    /// Issued-at (Unix timestamp, seconds).
    ///
    /// There is no expiry claim: tokens remain valid until the signing
    /// secret rotates.
    pub iat: i64,
}

impl IdentityClaims {
    /// Builds claims for a principal, stamped at the current instant.
    pub fn new(sub: impl Into<String>, is_admin: bool) -> Self {
        Self {
            sub: sub.into(),
            is_admin,
            iat: Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_issued_at() {
        let before = Utc::now().timestamp();
        let claims = IdentityClaims::new("user-1", true);
        let after = Utc::now().timestamp();

        assert_eq!(claims.sub, "user-1");
        assert!(claims.is_admin);
        assert!(claims.iat >= before && claims.iat <= after);
    }

    #[test]
    fn test_claims_serde_round_trip() {
        let claims = IdentityClaims::new("user-2", false);
        let json = serde_json::to_string(&claims).unwrap();
        let decoded: IdentityClaims = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, claims);
    }
}
