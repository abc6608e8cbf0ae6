//! Shared HTTP client setup and JSON fetching

use crate::endpoints::USER_AGENT;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the client used for every request of a run.
///
/// One client is created per process so the connection pool is reused across
/// sequential calls.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}

/// GET `url` and decode the JSON body.
///
/// Any non-success status is returned as [`Error::HttpStatus`].
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    log::debug!("GET {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        log::error!("Request to {} failed with status {}", url, status);
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_json_decodes_body_and_sends_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/worlds"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "id": 63, "name": "Gilgamesh" }])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let url = format!("{}/api/v2/worlds", mock_server.uri());
        let worlds: serde_json::Value = get_json(&client, &url).await.unwrap();

        assert_eq!(worlds[0]["name"], "Gilgamesh");
    }

    #[tokio::test]
    async fn get_json_non_success_is_http_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let url = format!("{}/api/v2/worlds", mock_server.uri());
        let result = get_json::<serde_json::Value>(&client, &url).await;

        match result {
            Err(Error::HttpStatus { status, url: failed }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(failed, url);
            }
            other => panic!("Expected Error::HttpStatus, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_json_malformed_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let client = build_client(Duration::from_secs(5)).unwrap();
        let result = get_json::<serde_json::Value>(&client, &mock_server.uri()).await;

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
