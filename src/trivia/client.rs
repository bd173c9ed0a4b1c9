//! HTTP client for the trivia question API

use reqwest::{Client, Url};

use super::error::TriviaError;
use super::models::{RawQuestion, TriviaResponse};

/// Trivia API client
#[derive(Debug, Clone)]
pub struct TriviaClient {
    /// HTTP client
    client: Client,
    /// Endpoint that serves question batches
    base_url: Url,
}

impl TriviaClient {
    /// Public Open Trivia Database endpoint
    pub const DEFAULT_API_URL: &'static str = "https://opentdb.com/api.php";

    /// Create a client for the given endpoint
    pub fn new(api_url: &str) -> Result<Self, TriviaError> {
        let base_url =
            Url::parse(api_url).map_err(|e| TriviaError::InvalidUrl(format!("{api_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(TriviaError::InvalidUrl(format!("{api_url}: expected http or https")));
        }

        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// URL requesting `amount` questions
    pub fn questions_url(&self, amount: usize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("amount", &amount.to_string());
        url
    }

    /// Fetch one batch of questions
    ///
    /// Issues a single GET; there is no retry. Non-success statuses and
    /// a non-zero `response_code` are both reported as errors.
    pub async fn fetch_questions(&self, amount: usize) -> Result<Vec<RawQuestion>, TriviaError> {
        let url = self.questions_url(amount);
        tracing::info!("Fetching {} questions from {}", amount, url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TriviaError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Parse a response body into raw questions
pub fn parse_response(body: &str) -> Result<Vec<RawQuestion>, TriviaError> {
    let response: TriviaResponse = serde_json::from_str(body)?;
    if response.response_code != 0 {
        return Err(TriviaError::response_code(response.response_code));
    }
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request on a local port; returns the endpoint URL
    async fn serve_once(status_line: &str, body: &str) -> String {
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            assert!(request.starts_with(b"GET /api.php?amount=5 "));
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/api.php")
    }

    #[test]
    fn client_creation() {
        let client = TriviaClient::new(TriviaClient::DEFAULT_API_URL).unwrap();
        assert_eq!(client.base_url.as_str(), "https://opentdb.com/api.php");
    }

    #[test]
    fn questions_url_has_amount() {
        let client = TriviaClient::new(TriviaClient::DEFAULT_API_URL).unwrap();
        assert_eq!(client.questions_url(5).as_str(), "https://opentdb.com/api.php?amount=5");
    }

    #[test]
    fn questions_url_keeps_host_and_path() {
        let client = TriviaClient::new("http://localhost:8080/trivia/api.php").unwrap();
        assert_eq!(
            client.questions_url(5).as_str(),
            "http://localhost:8080/trivia/api.php?amount=5"
        );
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(matches!(TriviaClient::new("not a url"), Err(TriviaError::InvalidUrl(_))));
        assert!(matches!(TriviaClient::new("ftp://example.com"), Err(TriviaError::InvalidUrl(_))));
    }

    #[test]
    fn parse_successful_body() {
        let body = r#"{"response_code":0,"results":[
            {"question":"A?","correct_answer":"a","incorrect_answers":["b","c","d"]},
            {"question":"B?","correct_answer":"True","incorrect_answers":["False"]}
        ]}"#;
        let questions = parse_response(body).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].correct_answer.as_deref(), Some("True"));
    }

    #[test]
    fn parse_rate_limited_body() {
        let err = parse_response(r#"{"response_code":5,"results":[]}"#).unwrap_err();
        assert!(matches!(err, TriviaError::ResponseCode { code: 5, .. }));
    }

    #[test]
    fn parse_garbage_body() {
        assert!(matches!(parse_response("<html>"), Err(TriviaError::JsonError(_))));
    }

    #[tokio::test]
    async fn fetch_returns_questions_on_success() {
        let body = r#"{"response_code":0,"results":[
            {"question":"A?","correct_answer":"a","incorrect_answers":["b"]}
        ]}"#;
        let url = serve_once("200 OK", body).await;
        let client = TriviaClient::new(&url).unwrap();

        let questions = client.fetch_questions(5).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "A?");
    }

    #[tokio::test]
    async fn fetch_reports_server_error_status() {
        let url = serve_once("503 Service Unavailable", "unavailable").await;
        let client = TriviaClient::new(&url).unwrap();

        let err = client.fetch_questions(5).await.unwrap_err();
        match err {
            TriviaError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "unavailable");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_reports_non_zero_response_code() {
        let url = serve_once("200 OK", r#"{"response_code":5,"results":[]}"#).await;
        let client = TriviaClient::new(&url).unwrap();

        let err = client.fetch_questions(5).await.unwrap_err();
        assert!(matches!(err, TriviaError::ResponseCode { code: 5, .. }));
    }

    #[tokio::test]
    async fn fetch_reports_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TriviaClient::new(&format!("http://{addr}/api.php")).unwrap();
        let err = client.fetch_questions(5).await.unwrap_err();
        assert!(matches!(err, TriviaError::RequestError(_)));
        assert!(err.is_recoverable());
    }
}
