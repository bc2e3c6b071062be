// file: src/models/search_result.rs
// description: Search result model with similarity scores
// reference: JSON body returned by the search endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Path relative to the image base, used verbatim
    pub image_path: String,

    /// Similarity score (higher is more similar)
    pub similarity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Backend order, never re-sorted
    pub results: Vec<SearchResult>,
}

/// Error body some backends send along with a failure status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl SearchResult {
    pub fn new(image_path: impl Into<String>, similarity: f64) -> Self {
        Self {
            image_path: image_path.into(),
            similarity,
        }
    }

    /// Four decimals, with exact ties rounded away from zero: 0.03125
    /// shows as "0.0313".
    pub fn format_similarity(&self) -> String {
        format_fixed4(self.similarity)
    }
}

/// Exact halfway values at four decimals are all odd multiples of 1/32.
const TIE_DENOMINATOR: f64 = 32.0;

/// Above this every f64 has fewer than five fraction bits, so it cannot sit
/// exactly halfway between two ten-thousandths.
const TIE_LIMIT: f64 = (1u64 << 48) as f64;

fn format_fixed4(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let scaled = magnitude * TIE_DENOMINATOR;

    // value * 10^4 = scaled * 625 / 2, exact for multiples of 1/32
    if magnitude < TIE_LIMIT && scaled.fract() == 0.0 {
        let doubled = scaled as u128 * 625;
        let units = doubled.div_ceil(2);
        return format!("{sign}{}.{:04}", units / 10_000, units % 10_000);
    }

    format!("{sign}{magnitude:.4}")
}

impl SearchResponse {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_keeps_order() {
        let body = r#"{"results":[
            {"image_path":"b.jpg","similarity":0.2},
            {"image_path":"a.jpg","similarity":0.9}
        ]}"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.results[0].image_path, "b.jpg");
        assert_eq!(response.results[1].image_path, "a.jpg");
    }

    #[test]
    fn test_missing_results_is_decode_error() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"error":"boom"}"#).is_err());
        let err: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(err.error, "boom");
    }

    #[test]
    fn test_format_similarity() {
        assert_eq!(SearchResult::new("a.jpg", 0.8765432).format_similarity(), "0.8765");
        assert_eq!(SearchResult::new("a.jpg", 1.0).format_similarity(), "1.0000");
    }

    #[test]
    fn test_format_similarity_rounds_ties_up() {
        assert_eq!(SearchResult::new("a.jpg", 0.03125).format_similarity(), "0.0313");
        assert_eq!(SearchResult::new("a.jpg", 0.15625).format_similarity(), "0.1563");
        assert_eq!(SearchResult::new("a.jpg", 0.28125).format_similarity(), "0.2813");
        assert_eq!(SearchResult::new("a.jpg", 0.96875).format_similarity(), "0.9688");
    }

    #[test]
    fn test_format_similarity_negative() {
        assert_eq!(SearchResult::new("a.jpg", -0.00001).format_similarity(), "-0.0000");
        assert_eq!(SearchResult::new("a.jpg", -0.03125).format_similarity(), "-0.0313");
        assert_eq!(SearchResult::new("a.jpg", -0.25).format_similarity(), "-0.2500");
        assert_eq!(SearchResult::new("a.jpg", -0.0).format_similarity(), "0.0000");
    }

    #[test]
    fn test_format_similarity_at_least_one() {
        assert_eq!(SearchResult::new("a.jpg", 1.03125).format_similarity(), "1.0313");
        assert_eq!(SearchResult::new("a.jpg", 2.5).format_similarity(), "2.5000");
        assert_eq!(SearchResult::new("a.jpg", 12.345678).format_similarity(), "12.3457");
        assert_eq!(SearchResult::new("a.jpg", 0.99999).format_similarity(), "1.0000");
    }
}
