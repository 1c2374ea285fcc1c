// src/client.rs
use log::{debug, error, info};
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::ClientError;
use crate::models::server::{CommandRequest, CreateServerRequest, ServerSpec};
use crate::utils::{api_endpoint, generate_rcon_password, retain_server_ids};

pub const DEFAULT_STATUS: &str = "running";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Client for the PacificES cloud server API.
///
/// Every call returns the service's JSON envelope untouched; `success` and
/// `error` flags inside it are for the caller to inspect.
#[derive(Debug, Clone)]
pub struct ServerClient {
    config: Config,
    http: reqwest::Client,
}

impl ServerClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self, route: &str) -> String {
        api_endpoint(&self.config.base_url, route)
    }

    fn route_url(&self, route: &str) -> Result<Url, ClientError> {
        let endpoint = self.endpoint(route);
        Url::parse(&endpoint).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// `servers/{id}[/{action}]`, with the id percent-encoded as a single path
    /// segment so it can't reach another resource.
    pub fn server_url(&self, server_id: &str, action: Option<&str>) -> Result<Url, ClientError> {
        // The url crate silently drops "." and ".." segments
        if server_id.is_empty() || server_id == "." || server_id == ".." {
            return Err(ClientError::InvalidServerId(server_id.to_string()));
        }

        let mut url = self.route_url("servers")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.config.base_url.clone()))?;
            segments.pop_if_empty().push(server_id);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    /// Provisions a new server. A random RCON password is generated when the
    /// spec doesn't carry one.
    pub async fn create(&self, spec: &ServerSpec) -> Result<Value, ClientError> {
        let rcon = match &spec.rcon_password {
            Some(password) => password.clone(),
            None => {
                debug!("No RCON password supplied, generating one");
                generate_rcon_password()
            }
        };
        let body = CreateServerRequest::from_spec(spec, rcon);
        info!("Creating server '{}' on {} ({})", spec.name, spec.map, spec.location);
        self.send(Verb::Post, self.route_url("servers")?, &[], Some(&body)).await
    }

    /// Lists servers in `status`. With a non-empty `server_ids`, only those
    /// records are kept in `result`.
    pub async fn retrieve(&self, server_ids: Option<&[String]>, status: &str) -> Result<Value, ClientError> {
        let response = self.send::<()>(Verb::Get, self.route_url("servers")?, &[("status", status)], None).await?;
        match server_ids {
            Some(ids) if !ids.is_empty() => {
                debug!("Filtering server list down to {} id(s)", ids.len());
                Ok(retain_server_ids(response, ids))
            }
            _ => Ok(response),
        }
    }

    pub async fn destroy(&self, server_id: &str) -> Result<Value, ClientError> {
        info!("Destroying server {}", server_id);
        self.send::<()>(Verb::Delete, self.server_url(server_id, None)?, &[], None).await
    }

    pub async fn update(&self, server_id: &str) -> Result<Value, ClientError> {
        info!("Updating server {}", server_id);
        self.send::<()>(Verb::Post, self.server_url(server_id, Some("update"))?, &[], None).await
    }

    pub async fn restart(&self, server_id: &str) -> Result<Value, ClientError> {
        info!("Restarting server {}", server_id);
        self.send::<()>(Verb::Post, self.server_url(server_id, Some("restart"))?, &[], None).await
    }

    pub async fn send_command(&self, server_id: &str, command: &str) -> Result<Value, ClientError> {
        let body = CommandRequest { command: command.to_string() };
        info!("Sending command to server {}", server_id);
        self.send(Verb::Post, self.server_url(server_id, Some("command"))?, &[], Some(&body)).await
    }

    pub async fn version(&self, server_id: &str) -> Result<Value, ClientError> {
        self.send::<()>(Verb::Get, self.server_url(server_id, Some("version"))?, &[], None).await
    }

    /// Issues one request and parses the reply as JSON. Non-2xx statuses and
    /// non-JSON bodies fail the call.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        verb: Verb,
        url: Url,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Value, ClientError> {
        debug!("{:?} {}", verb, url);

        let mut request = self
            .http
            .request(verb.as_method(), url.clone())
            .header(AUTHORIZATION, &self.config.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            // sets Content-Type: application/json
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        debug!("{} responded with {} ({} bytes)", url, status, text.len());

        if !status.is_success() {
            error!("{} returned {}", url, status);
            return Err(ClientError::Status { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse response from {}: {}", url, e);
            ClientError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_map_to_methods() {
        assert_eq!(Verb::Get.as_method(), reqwest::Method::GET);
        assert_eq!(Verb::Post.as_method(), reqwest::Method::POST);
        assert_eq!(Verb::Put.as_method(), reqwest::Method::PUT);
        assert_eq!(Verb::Delete.as_method(), reqwest::Method::DELETE);
    }

    #[test]
    fn endpoint_uses_configured_base() {
        let client = ServerClient::new(Config::new("key").with_base_url("http://127.0.0.1:9999/v1"));
        assert_eq!(client.endpoint("/servers/abcd/version"), "http://127.0.0.1:9999/v1/servers/abcd/version");
    }

    #[test]
    fn server_url_encodes_id_as_one_segment() {
        let client = ServerClient::new(Config::new("key").with_base_url("http://127.0.0.1:9999/v1"));
        let url = client.server_url("abcd/..", Some("restart")).unwrap();
        assert_eq!(url.path(), "/v1/servers/abcd%2F../restart");

        let url = client.server_url("x?status=all#top", None).unwrap();
        assert_eq!(url.path(), "/v1/servers/x%3Fstatus=all%23top");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn server_url_rejects_dot_segments_and_empty_ids() {
        let client = ServerClient::new(Config::new("key"));
        for id in ["", ".", ".."] {
            assert!(matches!(client.server_url(id, None), Err(ClientError::InvalidServerId(_))));
        }
    }
}
