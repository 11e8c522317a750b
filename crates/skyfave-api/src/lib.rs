//! External API clients for Skyfave
//!
//! Provides geocoding, place-details, and weather lookups over a shared
//! generic request framework (URI template + typed response).

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod geocoding;
pub mod places;
pub mod weather;

pub use client::{Provider, RequestBuilder, RestClient};
pub use config::{ApiConfig, ProviderConfig};
pub use encode::uri_encode;
pub use error::ApiError;
pub use geocoding::{GeocodingClient, GeocodingResult, Location};
pub use places::{PlaceResult, PlacesClient};
pub use weather::{Weather, WeatherClient};
