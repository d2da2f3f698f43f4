use cc_core::{Result as CoreErrorResult, ValidationErrors};
use cc_db::SnippetQuery;

use serde::Deserialize;
use uuid::Uuid;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Feed query string. Numbers arrive as text so a bad value becomes a
/// field error rather than a rejected request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListSnippetsQuery {
    pub language: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated feed request
#[derive(Debug, Clone)]
pub struct FeedRequest {
    pub query: SnippetQuery,
    pub page: i64,
    pub limit: i64,
}

impl ListSnippetsQuery {
    #[track_caller]
    pub fn into_feed_request(self, viewer: Option<Uuid>) -> CoreErrorResult<FeedRequest> {
        let mut errors = ValidationErrors::new();

        let page = match Self::parse_number(self.page) {
            None => DEFAULT_PAGE,
            Some(Some(page)) if page >= 1 => page,
            Some(_) => {
                errors.push("page", "Page must be a positive integer");
                DEFAULT_PAGE
            }
        };

        let limit = match Self::parse_number(self.limit) {
            None => DEFAULT_LIMIT,
            Some(Some(limit)) if (1..=MAX_LIMIT).contains(&limit) => limit,
            Some(_) => {
                errors.push(
                    "limit",
                    format!("Limit must be between 1 and {}", MAX_LIMIT),
                );
                DEFAULT_LIMIT
            }
        };

        errors.finish(FeedRequest {
            query: SnippetQuery {
                viewer,
                language: Self::non_empty(self.language),
                tag: Self::non_empty(self.tag),
                search: Self::non_empty(self.search),
                limit,
                offset: (page - 1).saturating_mul(limit),
            },
            page,
            limit,
        })
    }

    /// `None` when absent or blank, `Some(None)` when not a number
    fn parse_number(raw: Option<String>) -> Option<Option<i64>> {
        let raw = Self::non_empty(raw)?;
        Some(raw.parse().ok())
    }

    fn non_empty(raw: Option<String>) -> Option<String> {
        raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }
}
