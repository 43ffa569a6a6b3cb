use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::PurchasedAccess};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccessRepository: Send + Sync {
    async fn insert(&self, access: PurchasedAccess) -> AppResult<PurchasedAccess>;
    async fn find_active(&self, user_id: &str, set_number: u32)
        -> AppResult<Option<PurchasedAccess>>;
    async fn find_by_payment_id(&self, payment_id: &str) -> AppResult<Option<PurchasedAccess>>;
}

pub struct MongoAccessRepository {
    collection: Collection<PurchasedAccess>,
}

impl MongoAccessRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("purchased_access");
        Self { collection }
    }

    /// The unique payment-id index is what makes duplicate verification
    /// calls idempotent instead of double-granting.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for purchased_access collection");

        let payment_index = IndexModel::builder()
            .keys(doc! { "razorpay_payment_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("payment_id_unique".to_string())
                    .build(),
            )
            .build();

        let user_set_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "set_number": 1 })
            .options(IndexOptions::builder().name("user_set".to_string()).build())
            .build();

        self.collection.create_index(payment_index).await?;
        self.collection.create_index(user_set_index).await?;
        Ok(())
    }
}

#[async_trait]
impl AccessRepository for MongoAccessRepository {
    async fn insert(&self, access: PurchasedAccess) -> AppResult<PurchasedAccess> {
        self.collection.insert_one(&access).await?;
        Ok(access)
    }

    async fn find_active(
        &self,
        user_id: &str,
        set_number: u32,
    ) -> AppResult<Option<PurchasedAccess>> {
        let access = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "set_number": set_number,
                "active": true
            })
            .await?;
        Ok(access)
    }

    async fn find_by_payment_id(&self, payment_id: &str) -> AppResult<Option<PurchasedAccess>> {
        let access = self
            .collection
            .find_one(doc! { "razorpay_payment_id": payment_id })
            .await?;
        Ok(access)
    }
}
