use crate::repositories::row::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult, UserRepository};

use cc_core::{ErrorLocation, PointReason, PointTransaction};

use std::panic::Location;
use std::str::FromStr;

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct PointTransactionRepository {
    pool: SqlitePool,
}

impl PointTransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the transaction, then apply it to the user's balance.
    ///
    /// Two separate statements: a failure between them leaves the balance
    /// short by `amount` but never inconsistent in the other direction.
    pub async fn record(&self, transaction: &PointTransaction) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO point_transactions (id, user_id, amount, reason, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(transaction.id.to_string())
        .bind(transaction.user_id.to_string())
        .bind(transaction.amount)
        .bind(transaction.reason.as_str())
        .bind(transaction.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        UserRepository::new(self.pool.clone())
            .add_points(transaction.user_id, transaction.amount)
            .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<PointTransaction>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, amount, reason, created_at
              FROM point_transactions
              WHERE user_id = ?
              ORDER BY created_at ASC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                let id: String = r.try_get("id")?;
                let user_id: String = r.try_get("user_id")?;
                let reason: String = r.try_get("reason")?;
                Ok(PointTransaction {
                    id: parse_uuid(&id)?,
                    user_id: parse_uuid(&user_id)?,
                    amount: r.try_get("amount")?,
                    reason: PointReason::from_str(&reason).map_err(|e| DbError::Decode {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?,
                    created_at: parse_timestamp(r.try_get("created_at")?)?,
                })
            })
            .collect()
    }
}
