use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A paid-access grant for one question set. A (user, set, active=true)
/// row denotes unrevoked access; historical rows may accumulate when a
/// set is re-purchased. Created only after the gateway signature checks
/// out.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PurchasedAccess {
    pub id: String,
    pub user_id: String,
    pub set_number: u32,
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub active: bool,
    pub purchased_at: DateTime<Utc>,
}

impl PurchasedAccess {
    pub fn new(user_id: &str, set_number: u32, order_id: &str, payment_id: &str) -> Self {
        PurchasedAccess {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            set_number,
            razorpay_order_id: order_id.to_string(),
            razorpay_payment_id: payment_id.to_string(),
            active: true,
            purchased_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grant_is_active_and_keeps_gateway_ids() {
        let grant = PurchasedAccess::new("user-1", 2, "order_abc", "pay_xyz");

        assert!(grant.active);
        assert_eq!(grant.set_number, 2);
        assert_eq!(grant.razorpay_order_id, "order_abc");
        assert_eq!(grant.razorpay_payment_id, "pay_xyz");
    }
}
