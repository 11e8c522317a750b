//! Geocoding lookups: resolve a free-text search term to an address and
//! coordinates.

use serde::{Deserialize, Serialize};

use crate::client::{Provider, RestClient};
use crate::error::ApiError;

const GEOCODE_TEMPLATE: &str = "maps/api/geocode/json?address={q}&sensor=false&key={key}";

/// Geographic coordinate pair as the providers serialize it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// One component of a structured address (street, locality, country...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Location,
}

/// A single geocoding match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: String,
    pub geometry: Geometry,
    pub place_id: String,
}

/// Envelope the geocoding provider wraps matches in.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

/// Client for the geocoding provider.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    provider: Provider,
    rest: RestClient,
}

impl GeocodingClient {
    pub fn new(provider: Provider, rest: RestClient) -> Self {
        Self { provider, rest }
    }

    /// Resolve a free-text search term to a geocoding match.
    ///
    /// The provider ranks results by relevance; the top match is returned.
    /// An empty results envelope fails with [`ApiError::NoResult`].
    pub async fn find_by_search_term(&self, q: &str) -> Result<GeocodingResult, ApiError> {
        tracing::debug!("Geocoding search term: {}", q);

        let response: GeocodingResponse = self
            .rest
            .get(&self.provider, GEOCODE_TEMPLATE)
            .param("q", q)?
            .execute()
            .await?;

        response.results.into_iter().next().ok_or(ApiError::NoResult)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "address_components": [
                {"long_name": "Seattle", "short_name": "Seattle", "types": ["locality"]}
            ],
            "formatted_address": "Seattle, WA, USA",
            "geometry": {"location": {"lat": 47.6062, "lng": -122.3321}},
            "place_id": "ChIJVTPokywQkFQRmtVEaUZlJRA"
        }"#;
        let result: GeocodingResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.formatted_address, "Seattle, WA, USA");
        assert_eq!(result.place_id, "ChIJVTPokywQkFQRmtVEaUZlJRA");
        assert!((result.geometry.location.latitude - 47.6062).abs() < 1e-9);
        assert_eq!(result.address_components[0].long_name, "Seattle");
    }

    #[test]
    fn test_response_tolerates_unknown_fields() {
        let json = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Seattle, WA, USA",
                "geometry": {"location": {"lat": 47.6, "lng": -122.3, "altitude": 56.0}},
                "place_id": "abc",
                "plus_code": {"global_code": "84VVJM24+VF"}
            }],
            "error_message": null
        }"#;
        let response: GeocodingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.as_deref(), Some("OK"));
        assert_eq!(response.results.len(), 1);
    }

    #[test]
    fn test_empty_results_deserialize() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_missing_results_field_defaults_empty() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"status": "OVER_QUERY_LIMIT"}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
