//! Server-side payment request signing.
//!
//! The merchant secret never ships to a frontend. A backend holds a
//! [`PaymentSigner`] and hands out ready-made signed [`PaymentForm`]s; the
//! frontend only renders the hidden form and submits it to the gateway.

use fueldrop_sdk::objects::payment::{PaymentForm, SIGNED_FIELD_NAMES};
use fueldrop_sdk::signature::{payment_message, sign_hmac_base64};
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

/// Signs payment forms for one merchant account.
///
/// Tax defaults to the gateway test environment's flat 10; service and
/// delivery charges default to zero. All three are overridable.
pub struct PaymentSigner {
    secret: Box<[u8]>,
    product_code: String,
    success_url: Url,
    failure_url: Url,
    tax_amount: Decimal,
    service_charge: Decimal,
    delivery_charge: Decimal,
}

impl PaymentSigner {
    pub fn new(
        secret: impl Into<Box<[u8]>>,
        product_code: impl Into<String>,
        success_url: Url,
        failure_url: Url,
    ) -> Self {
        Self {
            secret: secret.into(),
            product_code: product_code.into(),
            success_url,
            failure_url,
            tax_amount: Decimal::TEN,
            service_charge: Decimal::ZERO,
            delivery_charge: Decimal::ZERO,
        }
    }

    pub fn with_tax_amount(mut self, tax_amount: Decimal) -> Self {
        self.tax_amount = tax_amount;
        self
    }

    pub fn with_service_charge(mut self, service_charge: Decimal) -> Self {
        self.service_charge = service_charge;
        self
    }

    pub fn with_delivery_charge(mut self, delivery_charge: Decimal) -> Self {
        self.delivery_charge = delivery_charge;
        self
    }

    /// Build and sign a payment form for `amount`.
    ///
    /// Every call draws a fresh v4 transaction UUID; the gateway rejects
    /// reused ones.
    pub fn sign(&self, amount: Decimal) -> PaymentForm {
        let total_amount = amount + self.tax_amount + self.service_charge + self.delivery_charge;
        let transaction_uuid = Uuid::new_v4();
        let message = payment_message(total_amount, transaction_uuid, &self.product_code);
        let signature = sign_hmac_base64(&message, &self.secret);

        PaymentForm {
            amount,
            tax_amount: self.tax_amount,
            total_amount,
            transaction_uuid,
            product_code: self.product_code.clone(),
            product_service_charge: self.service_charge,
            product_delivery_charge: self.delivery_charge,
            success_url: self.success_url.clone(),
            failure_url: self.failure_url.clone(),
            signed_field_names: SIGNED_FIELD_NAMES.to_owned(),
            signature,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fueldrop_sdk::objects::payment::TEST_PRODUCT_CODE;
    use fueldrop_sdk::signature::verify_hmac_base64;

    const SECRET: &[u8] = b"8gBm/:&EnhH.1/q";

    fn signer() -> PaymentSigner {
        PaymentSigner::new(
            SECRET,
            TEST_PRODUCT_CODE,
            Url::parse("https://shop.example/payment/success").unwrap(),
            Url::parse("https://shop.example/payment/failure").unwrap(),
        )
    }

    #[test]
    fn default_charges_give_total_110_for_amount_100() {
        let form = signer().sign(Decimal::new(100, 0));
        assert_eq!(form.total_amount, Decimal::new(110, 0));
        assert_eq!(form.tax_amount, Decimal::TEN);
        assert_eq!(form.product_service_charge, Decimal::ZERO);
        assert_eq!(form.product_delivery_charge, Decimal::ZERO);
        assert_eq!(form.signed_field_names, "total_amount,transaction_uuid,product_code");
    }

    #[test]
    fn signature_recomputes_over_the_canonical_message() {
        let form = signer().sign(Decimal::new(100, 0));
        let message = format!(
            "total_amount=110,transaction_uuid={},product_code=EPAYTEST",
            form.transaction_uuid
        );
        assert_eq!(form.signature, sign_hmac_base64(&message, SECRET));
        verify_hmac_base64(&message, &form.signature, SECRET).unwrap();
    }

    #[test]
    fn each_form_gets_a_fresh_transaction_uuid() {
        let signer = signer();
        let a = signer.sign(Decimal::new(100, 0));
        let b = signer.sign(Decimal::new(100, 0));
        assert_ne!(a.transaction_uuid, b.transaction_uuid);
    }

    #[test]
    fn charge_overrides_flow_into_the_total() {
        let form = signer()
            .with_tax_amount(Decimal::ZERO)
            .with_service_charge(Decimal::new(5, 0))
            .with_delivery_charge(Decimal::new(15, 0))
            .sign(Decimal::new(80, 0));
        assert_eq!(form.total_amount, Decimal::new(100, 0));
    }
}
