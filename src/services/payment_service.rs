use std::sync::Arc;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::PurchasedAccess,
    models::dto::request::PaymentVerificationRequest,
    models::dto::response::VerifyPaymentResponse,
    repositories::AccessRepository,
};

type HmacSha256 = Hmac<Sha256>;

/// Verifies gateway payment callbacks and records paid access to
/// question sets. The gateway signs `"{order_id}|{payment_id}"` with the
/// shared key secret; anything that fails that check is rejected outright.
pub struct PaymentService {
    access: Arc<dyn AccessRepository>,
    key_secret: SecretString,
}

impl PaymentService {
    pub fn new(access: Arc<dyn AccessRepository>, key_secret: SecretString) -> Self {
        Self { access, key_secret }
    }

    pub async fn verify(
        &self,
        request: PaymentVerificationRequest,
    ) -> AppResult<VerifyPaymentResponse> {
        request.validate()?;

        if !signature_matches(
            self.key_secret.expose_secret(),
            &request.razorpay_order_id,
            &request.razorpay_payment_id,
            &request.razorpay_signature,
        ) {
            log::warn!(
                "rejected payment verification for order {}: signature mismatch",
                request.razorpay_order_id
            );
            return Err(AppError::InvalidSignature);
        }

        // A payment id can only ever grant once; replaying the callback
        // acknowledges the existing grant instead of inserting a twin.
        if let Some(existing) = self
            .access
            .find_by_payment_id(&request.razorpay_payment_id)
            .await?
        {
            log::info!(
                "payment {} already granted set {} to user {}",
                existing.razorpay_payment_id,
                existing.set_number,
                existing.user_id
            );
            return Ok(VerifyPaymentResponse {
                success: true,
                set_number: existing.set_number,
            });
        }

        let grant = PurchasedAccess::new(
            &request.user_id,
            request.set_number,
            &request.razorpay_order_id,
            &request.razorpay_payment_id,
        );

        match self.access.insert(grant).await {
            Ok(grant) => {
                log::info!(
                    "granted set {} to user {} (payment {})",
                    grant.set_number,
                    grant.user_id,
                    grant.razorpay_payment_id
                );
                Ok(VerifyPaymentResponse {
                    success: true,
                    set_number: grant.set_number,
                })
            }
            // Lost the insert race against a concurrent retry of the same
            // callback; the unique payment-id index guarantees the grant
            // already exists.
            Err(AppError::DuplicateResource(_)) => Ok(VerifyPaymentResponse {
                success: true,
                set_number: request.set_number,
            }),
            Err(err) => Err(err),
        }
    }

    pub async fn check_access(&self, user_id: &str, set_number: u32) -> AppResult<bool> {
        let access = self.access.find_active(user_id, set_number).await?;
        Ok(access.is_some())
    }
}

/// Recomputes the gateway signature and compares in constant time.
/// `verify_slice` is the timing-safe comparison; a claimed signature that
/// is not valid hex fails the same way as a wrong one.
fn signature_matches(secret: &str, order_id: &str, payment_id: &str, claimed: &str) -> bool {
    let Ok(claimed_bytes) = hex::decode(claimed) else {
        return false;
    };

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    mac.verify_slice(&claimed_bytes).is_ok()
}

#[cfg(test)]
pub(crate) fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
