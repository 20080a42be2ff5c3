//! Last Update Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::updates::records::{UpdateMarker, UpdateOperation};

const TOUCH_LAST_UPDATE_SQL: &str = include_str!("sql/touch_last_update.sql");
const GET_LAST_UPDATE_SQL: &str = include_str!("sql/get_last_update.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUpdatesRepository;

impl PgUpdatesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn touch(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        operation: UpdateOperation,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_LAST_UPDATE_SQL)
            .bind(operation.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<UpdateMarker>, sqlx::Error> {
        query_as::<Postgres, UpdateMarker>(GET_LAST_UPDATE_SQL)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for UpdateMarker {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let operation: String = row.try_get("operation")?;

        let operation = operation
            .parse::<UpdateOperation>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "operation".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            operation,
        })
    }
}
