use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the badge every account receives on registration
pub const COMMUNITY_MEMBER_BADGE: &str = "Community Member";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
}
