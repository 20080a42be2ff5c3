//! Deliveries service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Acquire, Postgres, Transaction};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        deliveries::{
            DeliveryRecord, DeliveryStatus, DeliveryUuid, data::NewDelivery,
            errors::DeliveriesServiceError, repository::PgDeliveriesRepository,
        },
        updates::{UpdateMarker, UpdateOperation, repository::PgUpdatesRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgDeliveriesService {
    db: Db,
    repository: PgDeliveriesRepository,
    updates: PgUpdatesRepository,
}

impl PgDeliveriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDeliveriesRepository::new(),
            updates: PgUpdatesRepository::new(),
        }
    }

    /// Touch the last-update marker inside a savepoint so a failure never undoes the
    /// change it describes.
    async fn record_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        operation: UpdateOperation,
    ) -> Result<(), sqlx::Error> {
        let mut savepoint = Acquire::begin(&mut *tx).await?;

        match self.updates.touch(&mut savepoint, operation).await {
            Ok(()) => savepoint.commit().await,
            Err(error) => {
                warn!(%error, %operation, "failed to record last update");

                savepoint.rollback().await
            }
        }
    }
}

#[async_trait]
impl DeliveriesService for PgDeliveriesService {
    async fn list_deliveries(&self) -> Result<Vec<DeliveryRecord>, DeliveriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let deliveries = self.repository.list_deliveries(&mut tx).await?;

        tx.commit().await?;

        Ok(deliveries)
    }

    async fn create_delivery(
        &self,
        delivery: NewDelivery,
    ) -> Result<DeliveryRecord, DeliveriesServiceError> {
        delivery.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_delivery(&mut tx, DeliveryUuid::new(), &delivery)
            .await?;

        self.record_update(&mut tx, UpdateOperation::Insert).await?;

        tx.commit().await?;

        info!(delivery = %created.uuid, invoice = %created.invoice, "delivery created");

        Ok(created)
    }

    async fn update_status(
        &self,
        delivery: DeliveryUuid,
        status: DeliveryStatus,
    ) -> Result<DeliveryRecord, DeliveriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_status(&mut tx, delivery, status)
            .await?;

        tx.commit().await?;

        info!(%delivery, %status, "delivery status changed");

        Ok(updated)
    }

    async fn delete_delivery(&self, delivery: DeliveryUuid) -> Result<(), DeliveriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_delivery(&mut tx, delivery).await?;

        if rows_affected == 0 {
            return Err(DeliveriesServiceError::NotFound);
        }

        self.record_update(&mut tx, UpdateOperation::Delete).await?;

        tx.commit().await?;

        info!(%delivery, "delivery deleted");

        Ok(())
    }

    async fn last_update(&self) -> Result<Option<UpdateMarker>, DeliveriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let marker = self.updates.get(&mut tx).await?;

        tx.commit().await?;

        Ok(marker)
    }
}

#[automock]
#[async_trait]
/// Delivery persistence operations.
pub trait DeliveriesService: Send + Sync {
    /// Retrieves all deliveries, newest first.
    async fn list_deliveries(&self) -> Result<Vec<DeliveryRecord>, DeliveriesServiceError>;

    /// Stores a new delivery. The store assigns its UUID and creation time.
    async fn create_delivery(
        &self,
        delivery: NewDelivery,
    ) -> Result<DeliveryRecord, DeliveriesServiceError>;

    /// Moves a delivery to the given status. The dock arrival time is left as is.
    async fn update_status(
        &self,
        delivery: DeliveryUuid,
        status: DeliveryStatus,
    ) -> Result<DeliveryRecord, DeliveriesServiceError>;

    /// Deletes a delivery permanently.
    async fn delete_delivery(&self, delivery: DeliveryUuid) -> Result<(), DeliveriesServiceError>;

    /// When deliveries were last inserted or deleted, if ever.
    async fn last_update(&self) -> Result<Option<UpdateMarker>, DeliveriesServiceError>;
}
