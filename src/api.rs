use crate::types::{Credential, ErrorResponse, ProjectList};
use anyhow::{anyhow, Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};

pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com";
const PROJECTS_PATH: &str = "/rest/v2/projects";
const CLIENT_AGENT: &str = concat!("todo/", env!("CARGO_PKG_VERSION"));

/// Anything that can fetch the caller's projects.
pub trait ProjectSource {
    async fn list_projects(&self) -> Result<ProjectList>;
}

/// Todoist REST client bound to one token.
pub struct TodoistClient {
    client: Client,
    base_url: String,
    token: Credential,
}

impl TodoistClient {
    /// Binds the token to the client. Nothing is sent yet.
    pub fn new(base_url: &str, token: Credential) -> Self {
        TodoistClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn projects_url(&self) -> String {
        format!("{}{}", self.base_url, PROJECTS_PATH)
    }
}

impl ProjectSource for TodoistClient {
    async fn list_projects(&self) -> Result<ProjectList> {
        let url = self.projects_url();
        o_debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .header(USER_AGENT, CLIENT_AGENT)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;
        handle_response(res).await
    }
}

async fn handle_response(res: Response) -> Result<ProjectList> {
    let status = res.status();
    let url = res.url().to_string();
    if status.is_success() {
        let body = res.text().await.context("Failed to read projects response")?;
        serde_json::from_str(&body).context("Failed to parse projects response")
    } else {
        let error_text = res.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(parsed_err) => parsed_err.error,
            Err(_) => error_text.trim().to_string(),
        };
        if message.is_empty() {
            Err(anyhow!("{} from {}", status, url))
        } else {
            Err(anyhow!("{} from {}: {}", status, url, message))
        }
    }
}
