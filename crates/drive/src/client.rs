//! Drive API client
//!
//! Wraps the Drive v3 files surface and implements the `DriveStore` trait
//! from dv-core. The API has no native path addressing, so lookups
//! resolve one segment at a time with list queries scoped to the running
//! parent.

use async_trait::async_trait;
use jiff::Timestamp;
use reqwest::StatusCode;
use url::Url;

use dv_core::{
    DrivePath, DriveStore, Error, Lookup, Properties, ROOT_PATH, Remote, RemoteNode, Result,
};

use crate::types::{CreateFileRequest, FOLDER_MIME_TYPE, FileList, FileResource};

/// Alias the API accepts for the root folder
const ROOT_ID: &str = "root";

/// Fields requested on every file read
const FILE_FIELDS: &str = "id,name,mimeType,appProperties,modifiedTime";

/// Drive API client wrapper
#[derive(Debug)]
pub struct DriveClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: String,
}

impl DriveClient {
    /// Create a new client from a remote configuration
    pub fn new(remote: Remote) -> Result<Self> {
        if remote.access_token.is_empty() {
            return Err(Error::Config(format!(
                "remote '{}' has no access token",
                remote.name
            )));
        }

        // Url::join drops the last path segment of a slash-less base
        let mut endpoint = remote.endpoint.clone();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {e}", remote.endpoint)))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("drivecli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            access_token: remote.access_token,
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| Error::Config(format!("invalid request URL '{path}': {e}")))
    }

    /// Fetch the root folder's metadata
    async fn get_root(&self) -> Result<FileResource> {
        let response = self
            .http
            .get(self.url(&format!("files/{ROOT_ID}"))?)
            .bearer_auth(&self.access_token)
            .query(&[("fields", FILE_FIELDS)])
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        read_json(response).await
    }

    /// Find a child of `parent_id` by name, excluding trashed objects
    async fn find_child(&self, parent_id: &str, name: &str) -> Result<Option<FileResource>> {
        let query = format!(
            "name = '{}' and '{}' in parents and trashed = false",
            escape_query_value(name),
            escape_query_value(parent_id),
        );
        let fields = format!("files({FILE_FIELDS})");

        let response = self
            .http
            .get(self.url("files")?)
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", query.as_str()),
                ("fields", fields.as_str()),
                ("pageSize", "2"),
            ])
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let list: FileList = read_json(response).await?;
        Ok(list.files.into_iter().next())
    }

    async fn create(&self, request: &CreateFileRequest) -> Result<FileResource> {
        let response = self
            .http
            .post(self.url("files")?)
            .bearer_auth(&self.access_token)
            .query(&[("fields", FILE_FIELDS)])
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        read_json(response).await
    }
}

#[async_trait]
impl DriveStore for DriveClient {
    async fn lookup(&self, path: &str) -> Result<Lookup> {
        let mut node = self.get_root().await?;
        if path == ROOT_PATH {
            return Ok(Lookup::Found(node_from(node)));
        }

        let drive_path = DrivePath::parse(path)?;
        for segment in drive_path.segments() {
            // Nothing can exist below a non-folder
            if !node.is_folder() {
                return Ok(Lookup::NotExist);
            }
            match self.find_child(&node.id, segment).await? {
                Some(child) => node = child,
                None => return Ok(Lookup::NotExist),
            }
        }

        Ok(Lookup::Found(node_from(node)))
    }

    async fn create_folder(
        &self,
        name: &str,
        parent: &RemoteNode,
        modified: Timestamp,
        properties: &Properties,
    ) -> Result<RemoteNode> {
        tracing::debug!(folder = name, parent = %parent.id, "creating folder");
        let request = CreateFileRequest {
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: vec![parent.id.clone()],
            app_properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            modified_time: modified.to_string(),
        };

        Ok(node_from(self.create(&request).await?))
    }

    async fn create_top_level_folder(
        &self,
        name: &str,
        modified: Timestamp,
        properties: &Properties,
    ) -> Result<RemoteNode> {
        tracing::debug!(folder = name, "creating top-level folder");
        let request = CreateFileRequest {
            name: name.to_string(),
            mime_type: FOLDER_MIME_TYPE.to_string(),
            parents: Vec::new(),
            app_properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            modified_time: modified.to_string(),
        };

        Ok(node_from(self.create(&request).await?))
    }
}

/// Decode a response body, mapping non-success statuses onto core errors
async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| Error::Network(format!("malformed response: {e}")));
    }

    let body = response.text().await.unwrap_or_default();
    Err(map_status(status, &body))
}

/// Map an API status onto a core error. Auth failures must stay
/// distinguishable from plain network errors so the materializer can fall
/// back to bootstrap creation under restricted scopes.
fn map_status(status: StatusCode, body: &str) -> Error {
    let detail = error_detail(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth(detail),
        _ => Error::Network(format!("HTTP {}: {detail}", status.as_u16())),
    }
}

/// Pull the human-readable message out of a Drive error body
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value["error"]["message"].as_str()
    {
        return message.to_string();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

/// Escape a value for interpolation into a Drive query expression
fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn node_from(file: FileResource) -> RemoteNode {
    let mut properties = Properties::new();
    for (key, value) in &file.app_properties {
        properties.set(key, value);
    }
    RemoteNode {
        is_folder: file.is_folder(),
        id: file.id,
        name: file.name,
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(endpoint: &str, token: &str) -> Remote {
        Remote::new("test", endpoint, token)
    }

    #[test]
    fn test_new_rejects_missing_token() {
        let err = DriveClient::new(remote("https://example.com/drive/v3", "")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let err = DriveClient::new(remote("not a url", "tok")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let client = DriveClient::new(remote("https://example.com/drive/v3", "tok")).unwrap();
        assert_eq!(
            client.url("files").unwrap().as_str(),
            "https://example.com/drive/v3/files"
        );
    }

    #[test]
    fn test_escape_query_value() {
        assert_eq!(escape_query_value("plain"), "plain");
        assert_eq!(escape_query_value("it's"), "it\\'s");
        assert_eq!(escape_query_value(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_map_status_auth() {
        let body = r#"{"error": {"message": "Insufficient Permission", "code": 403}}"#;
        let err = map_status(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, Error::Auth(msg) if msg == "Insufficient Permission"));
    }

    #[test]
    fn test_map_status_network() {
        let err = map_status(StatusCode::SERVICE_UNAVAILABLE, "");
        assert!(matches!(err, Error::Network(msg) if msg.contains("503")));
    }

    #[test]
    fn test_error_detail_falls_back_to_raw_body() {
        assert_eq!(error_detail("backend exploded"), "backend exploded");
        assert_eq!(error_detail("  "), "no response body");
    }

    #[test]
    fn test_node_from_maps_properties() {
        let file: FileResource = serde_json::from_str(
            r#"{
                "id": "1AbC",
                "name": "docs",
                "mimeType": "application/vnd.google-apps.folder",
                "appProperties": {"Permissions": "0755"}
            }"#,
        )
        .unwrap();

        let node = node_from(file);
        assert_eq!(node.id, "1AbC");
        assert!(node.is_folder);
        assert_eq!(node.properties.permissions(), Some("0755"));
    }
}
