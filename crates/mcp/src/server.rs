// MCP server: JSON-RPC 2.0 over newline-delimited stdio

use crate::codec::JsonLineCodec;
use crate::protocol::{
    negotiate_protocol_version, CallToolParams, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities,
    ServerInfo, ToolsCapability, LATEST_PROTOCOL_VERSION,
};
use crate::tools::{ToolError, ToolRegistry};
use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, info, warn};

pub const SERVER_NAME: &str = "musclesworked";

const INSTRUCTIONS: &str = "Exercise and muscle data from musclesworked.com. \
    Use search_exercises or search_muscles to discover IDs, then call the other tools with them.";

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Serve on the process stdin/stdout until stdin closes.
    pub async fn start(self) -> Result<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one connection.
    ///
    /// Every request runs on its own task, so a slow tool call does not hold
    /// up the others. Replies go out in completion order through a single
    /// writer.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let server = Arc::new(self);
        let mut lines = FramedRead::new(reader, JsonLineCodec::new());
        let mut sink = FramedWrite::new(writer, JsonLineCodec::new());
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            while let Some(response) = rx.recv().await {
                match serde_json::to_string(&response) {
                    Ok(json) => sink.send(json).await?,
                    Err(e) => error!("Failed to serialize response: {}", e),
                }
            }
            Ok::<_, std::io::Error>(())
        });

        let mut read_error = None;
        while let Some(frame) = lines.next().await {
            let line = match frame {
                Ok(Ok(line)) => line,
                Ok(Err(e)) => {
                    warn!("Rejected input line: {}", e);
                    let response =
                        JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error());
                    if tx.send(response).is_err() {
                        warn!("Output closed, dropping response");
                    }
                    continue;
                }
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let server = server.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    if tx.send(response).is_err() {
                        warn!("Output closed, dropping response");
                    }
                }
            });
        }

        // Writer drains until every in-flight request has replied.
        drop(tx);
        writer_task
            .await
            .context("Writer task panicked")?
            .context("Failed to write to stdout")?;

        if let Some(e) = read_error {
            return Err(anyhow::Error::new(e).context("Failed to read from stdin"));
        }

        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for notifications.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) if request.jsonrpc == "2.0" => self.handle_request(request).await,
            _ => Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }
        let id = request.id.unwrap_or_default();

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::from_result(
                id,
                &ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => self.call_tool(id, request.params).await,
            other => {
                debug!(method = %other, "Unknown method");
                JsonRpcResponse::error(id, JsonRpcError::method_not_found(other))
            }
        };

        Some(response)
    }

    fn initialize(&self, id: serde_json::Value, params: Option<serde_json::Value>) -> JsonRpcResponse {
        let params = params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok());

        let protocol_version = match &params {
            Some(params) => negotiate_protocol_version(&params.protocol_version),
            None => LATEST_PROTOCOL_VERSION,
        };
        if let Some(client) = params.as_ref().and_then(|p| p.client_info.as_ref()) {
            info!(client = %client.name, version = %client.version, protocol = protocol_version, "Client connected");
        }

        JsonRpcResponse::from_result(
            id,
            &InitializeResult {
                protocol_version: protocol_version.to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability {
                        list_changed: false,
                    }),
                },
                server_info: self.info.clone(),
                instructions: Some(INSTRUCTIONS.to_string()),
            },
        )
    }

    async fn call_tool(&self, id: serde_json::Value, params: Option<serde_json::Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("Missing tools/call params"),
                )
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Tool {} not found", params.name)),
            );
        };

        info!(tool = %params.name, "Tool call");
        match tool.execute(params.arguments).await {
            Ok(result) => JsonRpcResponse::from_result(id, &result),
            Err(e) => {
                warn!(tool = %params.name, "{}", e);
                let data = match &e {
                    ToolError::InvalidArguments { errors, .. } => {
                        serde_json::to_value(errors).unwrap_or_default()
                    }
                };
                JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string()).with_data(data))
            }
        }
    }
}
