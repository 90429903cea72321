//! IPC server for Psalter
//!
//! One JSON request per line, one JSON response per line, over a Unix socket.

use crate::service::VerseService;
use anyhow::Result;
use psalter_core::{AddVerseRequest, ErrorCode, Verse, VerseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

/// IPC request types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum IpcRequest {
    // Verse operations
    GetVerse { emotion: String },
    AddVerse(AddVerseRequest),
    ListVerses { emotion: String },

    // Status
    GetCategories,
    GetStats,
    GetServerInfo,
}

/// IPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum IpcResponse {
    Success { data: serde_json::Value },
    Error { code: ErrorCode, message: String },
}

impl IpcResponse {
    fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => IpcResponse::Success { data },
            Err(e) => IpcResponse::Error {
                code: ErrorCode::Internal,
                message: format!("Serialization failed: {}", e),
            },
        }
    }
}

impl From<VerseError> for IpcResponse {
    fn from(e: VerseError) -> Self {
        IpcResponse::Error {
            code: e.error_code(),
            message: e.to_string(),
        }
    }
}

/// IPC server
pub struct PsalterIpcServer {
    service: VerseService,
}

impl PsalterIpcServer {
    pub fn new(service: VerseService) -> Self {
        Self { service }
    }

    pub async fn start(&self, socket_path: &Path) -> Result<()> {
        let _ = std::fs::remove_file(socket_path);
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let listener = UnixListener::bind(socket_path)?;
        tracing::info!("Psalter IPC server listening on {:?}", socket_path);

        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    let service = self.service.clone();

                    tokio::spawn(async move {
                        if let Err(e) = handle_client(stream, service).await {
                            tracing::error!("Client error: {}", e);
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("Accept error: {}", e);
                }
            }
        }
    }
}

async fn handle_client(stream: UnixStream, service: VerseService) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    while reader.read_line(&mut line).await? > 0 {
        let response = match serde_json::from_str::<IpcRequest>(&line) {
            Ok(request) => process_request(request, &service).await,
            Err(e) => IpcResponse::Error {
                code: ErrorCode::InvalidInput,
                message: format!("Invalid request: {}", e),
            },
        };

        let response_json = serde_json::to_string(&response)?;
        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        line.clear();
    }

    Ok(())
}

pub(crate) async fn process_request(request: IpcRequest, service: &VerseService) -> IpcResponse {
    match request {
        IpcRequest::GetVerse { emotion } => match service.random(&emotion).await {
            Ok(verse) => IpcResponse::ok(verse),
            Err(e) => {
                tracing::debug!("GetVerse {} failed: {}", emotion, e);
                e.into()
            }
        },

        IpcRequest::AddVerse(request) => match service.add(request).await {
            Ok(verse) => {
                tracing::info!("Verse {} added to {}", verse.id, verse.emotion);
                IpcResponse::ok(verse)
            }
            Err(e) => e.into(),
        },

        IpcRequest::ListVerses { emotion } => match service.list(&emotion).await {
            Ok(verses) => IpcResponse::ok(serde_json::json!({ "verses": verses })),
            Err(e) => e.into(),
        },

        IpcRequest::GetCategories => {
            let categories = service.categories().await;
            IpcResponse::ok(serde_json::json!({ "categories": categories }))
        }

        IpcRequest::GetStats => IpcResponse::ok(service.stats().await),

        IpcRequest::GetServerInfo => IpcResponse::Success {
            data: serde_json::json!({
                "name": "Psalter",
                "version": env!("CARGO_PKG_VERSION"),
            }),
        },
    }
}

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("{message}")]
    Remote { code: ErrorCode, message: String },
}

impl ClientError {
    /// Daemon unreachable or misbehaving, as opposed to a request it rejected
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Remote { .. })
    }
}

/// IPC client
pub struct PsalterClient {
    socket_path: PathBuf,
}

impl PsalterClient {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub async fn get_verse(&self, emotion: &str) -> Result<Verse, ClientError> {
        let data = self.call(IpcRequest::GetVerse { emotion: emotion.to_string() }).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn add_verse(&self, request: AddVerseRequest) -> Result<Verse, ClientError> {
        let data = self.call(IpcRequest::AddVerse(request)).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn list_verses(&self, emotion: &str) -> Result<Vec<Verse>, ClientError> {
        let mut data = self.call(IpcRequest::ListVerses { emotion: emotion.to_string() }).await?;
        let verses = data
            .get_mut("verses")
            .map(serde_json::Value::take)
            .unwrap_or_default();
        Ok(serde_json::from_value(verses)?)
    }

    pub async fn stats(&self) -> Result<serde_json::Value, ClientError> {
        self.call(IpcRequest::GetStats).await
    }

    async fn call(&self, request: IpcRequest) -> Result<serde_json::Value, ClientError> {
        match self.send(request).await? {
            IpcResponse::Success { data } => Ok(data),
            IpcResponse::Error { code, message } => Err(ClientError::Remote { code, message }),
        }
    }

    async fn send(&self, request: IpcRequest) -> Result<IpcResponse, ClientError> {
        let mut stream = UnixStream::connect(&self.socket_path).await?;

        let request_json = serde_json::to_string(&request)?;
        stream.write_all(request_json.as_bytes()).await?;
        stream.write_all(b"\n").await?;
        stream.flush().await?;

        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line).await?;

        Ok(serde_json::from_str(&line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::seeded_service;
    use psalter_core::{EmotionCategory, SeedVariant};
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_request_wire_form() {
        let request: IpcRequest =
            serde_json::from_str(r#"{"type":"GetVerse","data":{"emotion":"happy"}}"#).unwrap();
        assert!(matches!(request, IpcRequest::GetVerse { emotion } if emotion == "happy"));

        let request: IpcRequest = serde_json::from_str(
            r#"{"type":"AddVerse","data":{"emotion":"sad","text":"t","reference":"r","personalMessage":"m"}}"#,
        )
        .unwrap();
        match request {
            IpcRequest::AddVerse(add) => assert_eq!(add.personal_message, "m"),
            _ => panic!("Wrong request type"),
        }

        let request: IpcRequest = serde_json::from_str(r#"{"type":"GetStats"}"#).unwrap();
        assert!(matches!(request, IpcRequest::GetStats));
    }

    #[test]
    fn test_error_response_wire_form() {
        let response: IpcResponse = VerseError::NotFound(EmotionCategory::Sad).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "Error");
        assert_eq!(json["code"], "not_found");
    }

    #[tokio::test]
    async fn test_process_invalid_category() {
        let service = seeded_service(SeedVariant::Full);
        let response = process_request(IpcRequest::GetVerse { emotion: "meh".into() }, &service).await;
        match response {
            IpcResponse::Error { code, .. } => {
                assert_eq!(code, ErrorCode::InvalidCategory);
                assert!(code.is_client_error());
            }
            _ => panic!("Expected error"),
        }
    }

    #[tokio::test]
    async fn test_process_list_and_stats() {
        let service = seeded_service(SeedVariant::Minimal);

        let response = process_request(IpcRequest::ListVerses { emotion: "anxious".into() }, &service).await;
        match response {
            IpcResponse::Success { data } => assert_eq!(data["verses"].as_array().unwrap().len(), 2),
            _ => panic!("Expected success"),
        }

        let response = process_request(IpcRequest::GetStats, &service).await;
        match response {
            IpcResponse::Success { data } => {
                assert_eq!(data["total"], 10);
                assert_eq!(data["next_id"], 11);
            }
            _ => panic!("Expected success"),
        }
    }

    #[tokio::test]
    async fn test_client_server_roundtrip() {
        let dir = tempdir().unwrap();
        let socket = dir.path().join("psalter.sock");

        let server = PsalterIpcServer::new(seeded_service(SeedVariant::Full));
        let server_socket = socket.clone();
        let handle = tokio::spawn(async move { server.start(&server_socket).await });

        for _ in 0..100 {
            if socket.exists() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let client = PsalterClient::new(&socket);

        let verse = client.get_verse("grateful").await.unwrap();
        assert_eq!(verse.emotion, EmotionCategory::Grateful);

        let err = client.get_verse("bored").await.unwrap_err();
        assert!(!err.is_transport());
        assert!(matches!(err, ClientError::Remote { code: ErrorCode::InvalidCategory, .. }));

        let added = client
            .add_verse(AddVerseRequest {
                emotion: "angry".into(),
                text: "Be still, and know that I am God.".into(),
                reference: "Psalm 46:10".into(),
                personal_message: String::new(),
            })
            .await
            .unwrap();
        let listed = client.list_verses("angry").await.unwrap();
        assert_eq!(listed.last(), Some(&added));

        handle.abort();
    }

    #[tokio::test]
    async fn test_client_without_daemon() {
        let dir = tempdir().unwrap();
        let client = PsalterClient::new(dir.path().join("missing.sock"));
        let err = client.get_verse("happy").await.unwrap_err();
        assert!(err.is_transport());
    }
}
