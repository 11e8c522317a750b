//! Place details lookups by provider place id.

use serde::{Deserialize, Serialize};

use crate::client::{Provider, RestClient};
use crate::error::ApiError;
use crate::geocoding::Geometry;

const PLACE_DETAILS_TEMPLATE: &str =
    "maps/api/place/details/json?placeid={placeId}&sensor=false&key={key}";

/// Details of a single place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub geometry: Geometry,
}

/// Envelope for the place details call; carries one optional result rather
/// than a list.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    pub status: Option<String>,
    pub result: Option<PlaceResult>,
}

/// Client for the place details provider.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    provider: Provider,
    rest: RestClient,
}

impl PlacesClient {
    pub fn new(provider: Provider, rest: RestClient) -> Self {
        Self { provider, rest }
    }

    /// Look up the details of a place by its provider id.
    ///
    /// An absent result fails with [`ApiError::NoResult`].
    pub async fn find_by_place_id(&self, place_id: &str) -> Result<PlaceResult, ApiError> {
        tracing::debug!("Place details lookup: {}", place_id);

        let response: PlacesResponse = self
            .rest
            .get(&self.provider, PLACE_DETAILS_TEMPLATE)
            .param("placeId", place_id)?
            .execute()
            .await?;

        response.result.ok_or(ApiError::NoResult)
    }
}
