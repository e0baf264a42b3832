//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::EntryStats;

/// Click statistics for a single short link.
///
/// Serialized as `{"clicks": <integer>}`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub clicks: u64,
}

impl From<EntryStats> for StatsResponse {
    fn from(stats: EntryStats) -> Self {
        Self {
            clicks: stats.clicks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_shape() {
        let body = serde_json::to_value(StatsResponse::from(EntryStats { clicks: 3 })).unwrap();
        assert_eq!(body, serde_json::json!({ "clicks": 3 }));
    }
}
