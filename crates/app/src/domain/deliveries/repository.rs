//! Deliveries Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::deliveries::{
    DeliveryRecord, DeliveryStatus, DeliveryUuid, data::NewDelivery,
};

const LIST_DELIVERIES_SQL: &str = include_str!("sql/list_deliveries.sql");
const CREATE_DELIVERY_SQL: &str = include_str!("sql/create_delivery.sql");
const UPDATE_STATUS_SQL: &str = include_str!("sql/update_status.sql");
const DELETE_DELIVERY_SQL: &str = include_str!("sql/delete_delivery.sql");

/// A delivery row as stored in `deliveries`.
struct StoredDelivery(DeliveryRecord);

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDeliveriesRepository;

impl PgDeliveriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_deliveries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DeliveryRecord>, sqlx::Error> {
        let rows = query_as::<Postgres, StoredDelivery>(LIST_DELIVERIES_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(rows.into_iter().map(|row| row.0).collect())
    }

    pub(crate) async fn create_delivery(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: DeliveryUuid,
        delivery: &NewDelivery,
    ) -> Result<DeliveryRecord, sqlx::Error> {
        query_as::<Postgres, StoredDelivery>(CREATE_DELIVERY_SQL)
            .bind(uuid.into_uuid())
            .bind(&delivery.client)
            .bind(&delivery.invoice)
            .bind(&delivery.destination)
            .bind(delivery.weight)
            .bind(delivery.volume)
            .bind(delivery.status.as_str())
            .bind(&delivery.observation)
            .bind(SqlxTimestamp::from(delivery.dock_arrival_time))
            .fetch_one(&mut **tx)
            .await
            .map(|row| row.0)
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        delivery: DeliveryUuid,
        status: DeliveryStatus,
    ) -> Result<DeliveryRecord, sqlx::Error> {
        query_as::<Postgres, StoredDelivery>(UPDATE_STATUS_SQL)
            .bind(delivery.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
            .map(|row| row.0)
    }

    pub(crate) async fn delete_delivery(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        delivery: DeliveryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DELIVERY_SQL)
            .bind(delivery.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for StoredDelivery {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<DeliveryStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self(DeliveryRecord {
            uuid: DeliveryUuid::from_uuid(row.try_get("uuid")?),
            client: row.try_get("client")?,
            invoice: row.try_get("invoice")?,
            destination: row.try_get("destination")?,
            weight: row.try_get("weight")?,
            volume: row.try_get("volume")?,
            status,
            observation: row.try_get("observation")?,
            dock_arrival_time: row
                .try_get::<SqlxTimestamp, _>("dock_arrival_time")?
                .to_jiff()
                .to_string(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        }))
    }
}
