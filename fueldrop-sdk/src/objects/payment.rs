//! The eSewa hosted-form payment contract.
//!
//! The gateway consumes a plain HTML form POST, not JSON. The field set,
//! the `signed_field_names` value, and the order of fields inside the signed
//! message are all fixed by the gateway's documentation; changing any of
//! them gets the signature rejected remotely.
//!
//! This module only carries the signed payload. Building and signing one
//! requires the merchant secret and therefore lives in `fueldrop-core`,
//! which runs backend-side; a frontend should receive a ready-made
//! [`PaymentForm`] and render it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// The gateway's hosted form endpoint (test environment).
pub const GATEWAY_FORM_URL: &str = "https://rc-epay.esewa.com.np/api/epay/main/v2/form";

/// Exact value of the `signed_field_names` form field. The signed message is
/// built from these fields, in this order, joined with `,`.
pub const SIGNED_FIELD_NAMES: &str = "total_amount,transaction_uuid,product_code";

/// Product code assigned to merchants on the gateway's test environment.
pub const TEST_PRODUCT_CODE: &str = "EPAYTEST";

/// A fully populated, signed payment form ready for auto-submission.
///
/// Serde names match the gateway's form field names one-to-one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentForm {
    pub amount: Decimal,
    pub tax_amount: Decimal,
    /// `amount + tax_amount + product_service_charge + product_delivery_charge`.
    pub total_amount: Decimal,
    /// Fresh per signed form; reuse gets the submission rejected.
    pub transaction_uuid: Uuid,
    pub product_code: String,
    pub product_service_charge: Decimal,
    pub product_delivery_charge: Decimal,
    pub success_url: Url,
    pub failure_url: Url,
    /// Always [`SIGNED_FIELD_NAMES`].
    pub signed_field_names: String,
    /// base64(HMAC-SHA256) over the canonical signed message.
    pub signature: String,
}

impl PaymentForm {
    /// The hidden form fields in the order the gateway documents them.
    pub fn form_fields(&self) -> [(&'static str, String); 11] {
        [
            ("amount", self.amount.to_string()),
            ("tax_amount", self.tax_amount.to_string()),
            ("total_amount", self.total_amount.to_string()),
            ("transaction_uuid", self.transaction_uuid.to_string()),
            ("product_code", self.product_code.clone()),
            ("product_service_charge", self.product_service_charge.to_string()),
            ("product_delivery_charge", self.product_delivery_charge.to_string()),
            ("success_url", self.success_url.to_string()),
            ("failure_url", self.failure_url.to_string()),
            ("signed_field_names", self.signed_field_names.clone()),
            ("signature", self.signature.clone()),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_form() -> PaymentForm {
        PaymentForm {
            amount: Decimal::new(100, 0),
            tax_amount: Decimal::new(10, 0),
            total_amount: Decimal::new(110, 0),
            transaction_uuid: Uuid::nil(),
            product_code: TEST_PRODUCT_CODE.to_owned(),
            product_service_charge: Decimal::ZERO,
            product_delivery_charge: Decimal::ZERO,
            success_url: Url::parse("https://shop.example/payment/success").unwrap(),
            failure_url: Url::parse("https://shop.example/payment/failure").unwrap(),
            signed_field_names: SIGNED_FIELD_NAMES.to_owned(),
            signature: "sig".to_owned(),
        }
    }

    #[test]
    fn form_fields_match_gateway_contract() {
        let fields = sample_form().form_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "amount",
                "tax_amount",
                "total_amount",
                "transaction_uuid",
                "product_code",
                "product_service_charge",
                "product_delivery_charge",
                "success_url",
                "failure_url",
                "signed_field_names",
                "signature",
            ]
        );
        assert_eq!(fields[2].1, "110");
        assert_eq!(fields[9].1, "total_amount,transaction_uuid,product_code");
    }

    #[test]
    fn serde_names_match_form_field_names() {
        let value = serde_json::to_value(sample_form()).unwrap();
        let object = value.as_object().unwrap();
        for (name, _) in sample_form().form_fields() {
            assert!(object.contains_key(name), "missing field {name}");
        }
        assert_eq!(object.len(), 11);
    }
}
