//! Response DTOs for the content API
//!
//! Defines the structure of outgoing HTTP response bodies. Entity reads
//! serialize the content models directly; these types cover everything
//! else.

use serde::Serialize;
use uuid::Uuid;

use crate::cache::CacheStats;

// == Mutation Response ==
/// Response body for create/update/delete operations
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// Id of the affected entity
    pub id: Uuid,
}

impl MutationResponse {
    /// Creates a new MutationResponse
    pub fn new(message: impl Into<String>, id: Uuid) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

// == Stats Response ==
/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of cache entries
    pub entries: usize,
    /// Number of fetches currently in flight
    pub in_flight: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed after their TTL elapsed
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            entries: stats.entries,
            in_flight: stats.in_flight,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            hit_rate,
        }
    }
}

// == Clear Response ==
/// Response body for the cache clear endpoint (POST /cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

// == Health Response ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_response_serialize() {
        let id = Uuid::new_v4();
        let resp = MutationResponse::new("Blog created", id);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Blog created"));
        assert!(json.contains(&id.to_string()));
    }

    #[test]
    fn test_stats_response_from_cache_stats() {
        let stats = CacheStats {
            entries: 3,
            in_flight: 1,
            hits: 8,
            misses: 2,
            expirations: 1,
        };
        let resp = StatsResponse::from(stats);
        assert_eq!(resp.entries, 3);
        assert_eq!(resp.in_flight, 1);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse {
            error: "Something went wrong".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
