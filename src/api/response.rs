use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::controller::CacheStatus;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data
    pub data: T,
    /// Response timestamp
    pub timestamp: DateTime<Utc>,
    /// Request metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Additional metadata about the response
#[derive(Debug, Default, Serialize)]
pub struct ResponseMetadata {
    /// Number of records in `data`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
    /// History length the data was generated for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Whether the series was served from the cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    /// Processing duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    fn metadata_mut(&mut self) -> &mut ResponseMetadata {
        self.metadata.get_or_insert_with(ResponseMetadata::default)
    }

    /// Add total count to metadata
    pub fn with_count(mut self, count: usize) -> Self {
        self.metadata_mut().total_count = Some(count);
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.metadata_mut().days = Some(days);
        self
    }

    pub fn with_cache(mut self, status: CacheStatus) -> Self {
        self.metadata_mut().cached = Some(status == CacheStatus::Hit);
        self
    }

    /// Add processing duration to metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata_mut().duration_ms = Some(duration_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("test data");
        assert!(response.success);
        assert_eq!(response.data, "test data");
        assert!(response.metadata.is_none());
    }

    #[test]
    fn test_response_with_metadata() {
        let response = ApiResponse::success(vec![1, 2, 3])
            .with_count(3)
            .with_days(7)
            .with_cache(CacheStatus::Hit)
            .with_duration(50);

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata.total_count, Some(3));
        assert_eq!(metadata.days, Some(7));
        assert_eq!(metadata.cached, Some(true));
        assert_eq!(metadata.duration_ms, Some(50));
    }

    #[test]
    fn test_metadata_omitted_when_empty() {
        let json = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert!(json.get("metadata").is_none());
        assert_eq!(json["data"], 1);
        assert_eq!(json["success"], true);
    }
}
