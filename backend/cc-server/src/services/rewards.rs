//! Gamification side effects of registration

use crate::services::registration_listener::RegistrationListener;

use cc_core::{COMMUNITY_MEMBER_BADGE, PointReason, PointTransaction, User};
use cc_db::{BadgeRepository, PointTransactionRepository, Result as DbErrorResult};

use async_trait::async_trait;
use sqlx::SqlitePool;

/// Credits a fixed number of points as a `welcome_bonus` transaction
pub struct WelcomeBonus {
    pool: SqlitePool,
    points: i64,
}

impl WelcomeBonus {
    pub fn new(pool: SqlitePool, points: i64) -> Self {
        Self { pool, points }
    }
}

#[async_trait]
impl RegistrationListener for WelcomeBonus {
    fn name(&self) -> &'static str {
        "welcome_bonus"
    }

    async fn on_registered(&self, user: &User) -> DbErrorResult<()> {
        let transaction = PointTransaction::new(user.id, self.points, PointReason::WelcomeBonus);
        PointTransactionRepository::new(self.pool.clone())
            .record(&transaction)
            .await?;

        log::info!("Awarded {} welcome points to {}", self.points, user.id);
        Ok(())
    }
}

/// Awards the "Community Member" badge
pub struct CommunityBadge {
    pool: SqlitePool,
}

impl CommunityBadge {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationListener for CommunityBadge {
    fn name(&self) -> &'static str {
        "community_badge"
    }

    async fn on_registered(&self, user: &User) -> DbErrorResult<()> {
        let badges = BadgeRepository::new(self.pool.clone());

        let Some(badge) = badges.find_by_name(COMMUNITY_MEMBER_BADGE).await? else {
            log::warn!("Badge '{}' is not seeded; skipping", COMMUNITY_MEMBER_BADGE);
            return Ok(());
        };

        if badges.award(user.id, badge.id).await? {
            log::info!("Awarded badge '{}' to {}", badge.name, user.id);
        }
        Ok(())
    }
}
