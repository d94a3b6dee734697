//! HMAC-SHA256 signing for the payment hand-off.
//!
//! The gateway verifies `base64(HMAC-SHA256(secret, message))` where the
//! message is the canonical string
//!
//! ```text
//! total_amount={v},transaction_uuid={v},product_code={v}
//! ```
//!
//! Field order and the `,` separator are part of the contract. The secret is
//! a merchant credential and must only ever be handled backend-side.

use rust_decimal::Decimal;
use uuid::Uuid;

/// Errors produced by signature verification.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("invalid signature")]
    SignatureMismatch,
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

/// Build the canonical signed message for a payment form.
///
/// Must stay byte-for-byte in sync with
/// [`SIGNED_FIELD_NAMES`](crate::objects::payment::SIGNED_FIELD_NAMES).
pub fn payment_message(
    total_amount: Decimal,
    transaction_uuid: Uuid,
    product_code: &str,
) -> String {
    format!(
        "total_amount={total_amount},transaction_uuid={transaction_uuid},product_code={product_code}"
    )
}

/// `base64(HMAC-SHA256(key, message))`, padded RFC 4648 alphabet as the
/// gateway expects.
pub fn sign_hmac_base64(message: &str, key: &[u8]) -> String {
    let signature = ring::hmac::sign(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key),
        message.as_bytes(),
    );
    fast32::base64::RFC4648.encode(signature.as_ref())
}

/// Verify a base64 signature against a message, e.g. when checking the
/// gateway's success callback.
pub fn verify_hmac_base64(
    message: &str,
    signature_b64: &str,
    key: &[u8],
) -> Result<(), SignatureError> {
    let raw = fast32::base64::RFC4648
        .decode_str(signature_b64)
        .map_err(|_| SignatureError::InvalidBase64)?;
    ring::hmac::verify(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key),
        message.as_bytes(),
        &raw,
    )?;
    Ok(())
}
