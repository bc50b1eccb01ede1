use crate::config::ClientConfig;
use async_trait::async_trait;
use libgithub_core::error::ClientError;
use libgithub_core::transport::GraphQLRequest;
use libgithub_core::transport::GraphQLResponse;
use libgithub_core::transport::Transport;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

/// A [`Transport`] POSTing JSON requests over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}
impl HttpTransport {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);
        if let Some(token) = &config.token {
            let mut authorization = header_value(&format!("bearer {token}"))?;
            authorization.set_sensitive(true);
            headers.insert(AUTHORIZATION, authorization);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| ClientError::Transport {
            message: format!("Failed to set up the HTTP client: {err}"),
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: &GraphQLRequest,
    ) -> Result<GraphQLResponse, ClientError> {
        let response =
            self.client.post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|err| ClientError::Transport {
                    message: err.to_string(),
                })?;

        let status = response.status();
        log::trace!("{} answered with {status}.", self.endpoint);
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized {
                message: error_message(response).await,
            });
        }
        if !status.is_success() {
            return Err(ClientError::Http {
                message: error_message(response).await,
                status: status.as_u16(),
            });
        }

        response.json::<GraphQLResponse>().await.map_err(|err| ClientError::Transport {
            message: format!("Failed to decode the response body: {err}"),
        })
    }
}

/// GitHub's REST-style error body, also used for HTTP-level GraphQL errors.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { message }) => message,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body,
        },
        Err(err) => format!("{status} ({err})"),
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|err| ClientError::Transport {
        message: format!("Invalid HTTP header value: {err}"),
    })
}
