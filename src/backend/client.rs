use regex::Regex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url_escape::encode_component;

use crate::{
    error::{Error, Result},
    timing::operating_hours::OperatingHoursEntry,
};

use super::place::{Place, PlaceFilter};

/// Thin GET-only client for the tourism REST backend.
///
/// Lookup, search and nearest-place queries are all answered by the backend;
/// this only builds the URLs and decodes the JSON.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
    id_sanitizer: Regex,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            id_sanitizer: Regex::new(r"^[A-Za-z0-9_-]+$").unwrap(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ids end up in the path, so anything but a plain slug is refused.
    fn place_path(&self, place_id: &str) -> Result<String> {
        if !self.id_sanitizer.is_match(place_id) {
            return Err(Error::InvalidPlaceId(place_id.to_string()));
        }
        Ok(format!("{}/places/{}", self.base_url, place_id))
    }

    pub fn search_url(&self, filter: &PlaceFilter) -> String {
        let query = filter
            .pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            format!("{}/places/search", self.base_url)
        } else {
            format!("{}/places/search?{}", self.base_url, query)
        }
    }

    pub fn nearest_url(&self, latitude: f64, longitude: f64, limit: usize) -> String {
        format!(
            "{}/places/nearest?lat={}&lng={}&limit={}",
            self.base_url, latitude, longitude, limit
        )
    }

    pub async fn place(&self, place_id: &str) -> Result<Place> {
        let url = self.place_path(place_id)?;
        self.get_json(&url).await
    }

    pub async fn operating_hours(&self, place_id: &str) -> Result<Vec<OperatingHoursEntry>> {
        let url = format!("{}/operating-hours", self.place_path(place_id)?);
        self.get_json(&url).await
    }

    pub async fn search(&self, filter: &PlaceFilter) -> Result<Vec<Place>> {
        self.get_json(&self.search_url(filter)).await
    }

    pub async fn nearest(&self, latitude: f64, longitude: f64, limit: usize) -> Result<Vec<Place>> {
        self.get_json(&self.nearest_url(latitude, longitude, limit))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn builds_search_url_with_encoded_filters() {
        let client = BackendClient::new("http://localhost:5000/api/");
        let filter = PlaceFilter {
            name: Some("Wat Phra Singh".to_string()),
            category: Some("Temple".to_string()),
            ..Default::default()
        };
        assert_eq!(
            client.search_url(&filter),
            "http://localhost:5000/api/places/search?name=Wat%20Phra%20Singh&category=Temple"
        );
        assert_eq!(
            client.search_url(&PlaceFilter::default()),
            "http://localhost:5000/api/places/search"
        );
    }

    #[test]
    fn builds_nearest_url() {
        let client = BackendClient::new("http://localhost:5000");
        assert_eq!(
            client.nearest_url(18.79, 98.98, 5),
            "http://localhost:5000/places/nearest?lat=18.79&lng=98.98&limit=5"
        );
    }

    #[tokio::test]
    async fn rejects_unsafe_place_ids() {
        let client = BackendClient::new("http://localhost:5000");
        let result = client.operating_hours("1/../admin").await;
        assert!(matches!(result, Err(Error::InvalidPlaceId(_))));
    }

    #[tokio::test]
    async fn fetches_operating_hours() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places/12/operating-hours"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"day_of_week": "Monday", "opening_time": "09:00", "closing_time": "17:00"},
                    {"day_of_week": "Everyday", "opening_time": "10:00", "closing_time": "16:00"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri());
        let entries = client.operating_hours("12").await.unwrap();
        assert_eq!(
            entries,
            vec![
                OperatingHoursEntry::new("Monday", "09:00", "17:00"),
                OperatingHoursEntry::new("Everyday", "10:00", "16:00"),
            ]
        );
    }

    #[tokio::test]
    async fn searches_and_finds_nearest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places/search"))
            .and(query_param("district", "Mueang"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[{"id": 1, "name": "Tha Phae Gate", "district": "Mueang"}]"#),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/places/nearest"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id": 7, "name": "Warorot Market", "distance": 0.4},
                    {"id": 2, "name": "Night Bazaar", "distance": 1.1}]"#,
            ))
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri());
        let filter = PlaceFilter {
            district: Some("Mueang".to_string()),
            ..Default::default()
        };
        let found = client.search(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tha Phae Gate");

        let nearest = client.nearest(18.79, 98.99, 2).await.unwrap();
        assert_eq!(nearest.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7, 2]);
        assert_eq!(nearest[0].distance, Some(0.4));
    }

    #[tokio::test]
    async fn maps_error_status_and_bad_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/places/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/places/5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri());
        assert!(matches!(
            client.place("404").await,
            Err(Error::Status { status: 404, .. })
        ));
        assert!(matches!(client.place("5").await, Err(Error::Json(_))));
    }
}
