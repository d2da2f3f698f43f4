use crate::PointReason;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of a points adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTransaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub reason: PointReason,
    pub created_at: DateTime<Utc>,
}

impl PointTransaction {
    pub fn new(user_id: Uuid, amount: i64, reason: PointReason) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            reason,
            created_at: Utc::now(),
        }
    }
}
