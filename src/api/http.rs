//! Generic JSON request helpers with error mapping
//!
//! Every remote call in the crate goes through one of these helpers. Failures
//! are mapped to specific `AppError` variants by HTTP status and by response
//! body shape. No automatic retries and no response caching: every failure is
//! surfaced to the caller and requires explicit user-initiated re-submission.

use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a URL and decodes the JSON response body.
#[instrument(skip(client))]
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("GET {url}");
    let response = client.get(url).send().await.map_err(|e| send_error(e, url))?;
    decode_response(response, url).await
}

/// Posts a JSON body and decodes the JSON response.
#[instrument(skip(client, body))]
pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, AppError> {
    info!("POST {url}");
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| send_error(e, url))?;
    decode_response(response, url).await
}

/// Sends a PATCH with a JSON body and decodes the JSON response.
#[instrument(skip(client, body))]
pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, AppError> {
    info!("PATCH {url}");
    let response = client
        .patch(url)
        .json(body)
        .send()
        .await
        .map_err(|e| send_error(e, url))?;
    decode_response(response, url).await
}

/// Uploads a local file as a multipart form (part name `file`) and decodes
/// the JSON response. Used by the allocation CSV import.
#[instrument(skip(client))]
pub async fn post_multipart_file<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    file_path: &Path,
) -> Result<T, AppError> {
    if !file_path.exists() {
        return Err(AppError::ImportFileNotFound {
            path: file_path.display().to_string(),
        });
    }

    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv")
        .to_string();
    let bytes = tokio::fs::read(file_path).await?;

    info!("POST {url} (multipart, {} bytes)", bytes.len());
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("text/csv")
        .map_err(AppError::ApiFetch)?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| send_error(e, url))?;
    decode_response(response, url).await
}

/// Maps a reqwest send error to the network taxonomy.
fn send_error(e: reqwest::Error, url: &str) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Maps response status and body shape to either a decoded value or a
/// specific error variant.
async fn decode_response<T: DeserializeOwned>(
    response: Response,
    url: &str,
) -> Result<T, AppError> {
    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::create_test_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        value: i32,
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/thing", mock_server.uri());
        let payload: Payload = get_json(&client, &url).await.unwrap();
        assert_eq!(payload.value, 7);
    }

    #[tokio::test]
    async fn test_get_json_maps_404() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/missing", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_json_maps_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/boom", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }

    #[tokio::test]
    async fn test_get_json_maps_service_unavailable() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/down", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiServiceUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_get_json_empty_body_is_no_data() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/empty", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_get_json_non_json_body_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/html", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_get_json_wrong_shape_is_unexpected_structure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"other": true}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/shape", mock_server.uri());
        let result: Result<Payload, _> = get_json(&client, &url).await;
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_post_multipart_missing_file() {
        let client = create_test_http_client();
        let result: Result<Payload, _> = post_multipart_file(
            &client,
            "http://localhost:9/never",
            Path::new("/definitely/not/here.csv"),
        )
        .await;
        assert!(matches!(result, Err(AppError::ImportFileNotFound { .. })));
    }
}
