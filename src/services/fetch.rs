use bytes::Bytes;
use reqwest::Client;

use crate::error::AppError;

/// Fetch the dataset body from `url` as text.
///
/// Any non-success upstream status is a transport failure for this load
/// cycle; there is no retry. Bodies over `max_size` bytes are rejected, and
/// a non-UTF-8 body is decoded lossily rather than failing the load.
pub async fn load_text_from_url(url: &str, max_size: usize) -> Result<String, AppError> {
    let client = Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::HttpError(format!("Failed to fetch dataset: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::HttpError(format!(
            "Failed to fetch dataset. Status: {}",
            response.status()
        )));
    }

    let body: Bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::HttpError(format!("Failed to read response bytes: {}", e)))?;

    if body.len() > max_size {
        return Err(AppError::InvalidInput(format!(
            "Dataset too large: {} bytes (limit {})",
            body.len(),
            max_size
        )));
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{}/data/your_dataset.csv", addr)
    }

    #[tokio::test]
    async fn fetches_csv_body_as_text() {
        let url = serve_once("HTTP/1.1 200 OK", "a,b\n1,2\n").await;
        let text = load_text_from_url(&url, 1024).await.unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn upstream_404_is_a_transport_failure() {
        let url = serve_once("HTTP/1.1 404 Not Found", "").await;
        let err = load_text_from_url(&url, 1024).await.unwrap_err();
        match err {
            AppError::HttpError(msg) => assert!(msg.contains("404")),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let url = serve_once("HTTP/1.1 200 OK", "a,b\n1,2\n3,4\n").await;
        let err = load_text_from_url(&url, 4).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        // Bind then immediately drop a listener to get a port nobody serves
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/none.csv", addr);
        let err = load_text_from_url(&url, 1024).await.unwrap_err();
        assert!(matches!(err, AppError::HttpError(_)));
    }
}
