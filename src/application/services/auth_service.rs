//! Token issuance and verification.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

use crate::domain::entities::IdentityClaims;

type HmacSha256 = Hmac<Sha256>;

/// Why a token failed verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Framing, encoding, or claims payload could not be decoded.
    #[error("malformed token")]
    Malformed,

    /// Well-formed token whose MAC does not match the payload.
    #[error("signature mismatch")]
    BadSignature,
}

/// Issues and verifies self-contained identity tokens.
///
/// A token is `base64url(claims JSON) + "." + hex(HMAC-SHA256(payload))`,
/// keyed by a server-held signing secret. Verification recomputes the MAC
/// over the payload and compares in constant time, then decodes the claims.
/// No storage is consulted in either direction: the codec trusts whatever
/// claims were embedded at issuance, and tokens are never stored server-side.
pub struct AuthService {
    signing_secret: String,
}

impl AuthService {
    /// Creates a new auth service.
    ///
    /// `signing_secret` is the HMAC key; config validation guarantees it is
    /// non-empty before the server starts.
    pub fn new(signing_secret: String) -> Self {
        Self { signing_secret }
    }

    /// Serializes and signs the claims into an opaque token string.
    pub fn issue_token(&self, claims: &IdentityClaims) -> String {
        let payload = URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(claims).expect("claims always serialize to JSON"));
        let signature = hex::encode(self.sign(payload.as_bytes()));

        format!("{payload}.{signature}")
    }

    /// Verifies the signature and decodes the embedded claims.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] when the framing, hex, base64, or claims
    ///   JSON cannot be decoded
    /// - [`TokenError::BadSignature`] when the MAC does not match
    pub fn verify_token(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;

        let expected = hex::decode(signature).map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac.verify_slice(&expected)
            .map_err(|_| TokenError::BadSignature)?;

        let claims = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;

        serde_json::from_slice(&claims).map_err(|_| TokenError::Malformed)
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new("test-signing-secret".to_string())
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let service = test_service();
        let claims = IdentityClaims::new("user-1", true);

        let token = service.issue_token(&claims);
        let decoded = service.verify_token(&token).unwrap();

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_round_trip_preserves_admin_flag() {
        let service = test_service();

        for is_admin in [true, false] {
            let token = service.issue_token(&IdentityClaims::new("user-1", is_admin));
            assert_eq!(service.verify_token(&token).unwrap().is_admin, is_admin);
        }
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = test_service();

        for token in ["a", "", "no-dot-here", "two..dots", "payload."] {
            assert!(
                matches!(service.verify_token(token), Err(TokenError::Malformed)),
                "token = {token:?}"
            );
        }
    }

    #[test]
    fn test_tampered_payload_fails_verification() {
        let service = test_service();
        let token = service.issue_token(&IdentityClaims::new("user-1", false));

        let (payload, signature) = token.split_once('.').unwrap();
        let forged_claims = IdentityClaims::new("user-1", true);
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        assert_ne!(forged_payload, payload);

        let forged = format!("{forged_payload}.{signature}");
        assert!(matches!(
            service.verify_token(&forged),
            Err(TokenError::BadSignature)
        ));
    }

    #[test]
    fn test_secret_matters() {
        let token = AuthService::new("secret-a".to_string())
            .issue_token(&IdentityClaims::new("user-1", false));

        let result = AuthService::new("secret-b".to_string()).verify_token(&token);

        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_non_hex_signature_is_malformed() {
        let service = test_service();
        let token = service.issue_token(&IdentityClaims::new("user-1", false));
        let (payload, _) = token.split_once('.').unwrap();

        let result = service.verify_token(&format!("{payload}.zzzz"));

        assert!(matches!(result, Err(TokenError::Malformed)));
    }
}
