//! Polymarket market-channel websocket stream.
//!
//! # Connection Lifecycle
//!
//! 1. **Subscribe**: connect and send the subscription for the watched tokens
//! 2. **Read**: each text frame is parsed into zero or more book events,
//!    which are queued and handed out one at a time
//! 3. **Close**: a close frame or the end of the stream yields `None`; a
//!    transport error (including a reset without a closing handshake) is
//!    returned as [`Error::WebSocket`]. There is no reconnect.

use std::collections::VecDeque;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use super::message::{PolymarketSubscribeMessage, PolymarketWsMessage};
use crate::domain::{BookUpdateEvent, TokenId};
use crate::error::{Error, Result};
use crate::port::BookStream;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Book stream over the Polymarket CLOB market channel.
pub struct PolymarketBookStream {
    url: String,
    ws: Option<WsStream>,
    pending: VecDeque<BookUpdateEvent>,
}

impl PolymarketBookStream {
    /// Create a stream for the websocket at `url`. Nothing connects until
    /// [`BookStream::subscribe`] is called.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            ws: None,
            pending: VecDeque::new(),
        }
    }

    async fn connect(&self) -> Result<WsStream> {
        info!(url = %self.url, "Connecting to WebSocket");

        let (ws_stream, response) = connect_async(&self.url).await?;

        info!(status = %response.status(), "WebSocket connected");

        Ok(ws_stream)
    }

    /// Parse a text frame and queue its events. Unparseable frames are skipped.
    fn enqueue_text(&mut self, text: &str) {
        match serde_json::from_str::<PolymarketWsMessage>(text) {
            Ok(msg) => self.pending.extend(msg.into_events()),
            Err(e) => {
                warn!(error = %e, raw = %text, "Failed to parse message");
            }
        }
    }
}

#[async_trait]
impl BookStream for PolymarketBookStream {
    async fn subscribe(&mut self, tokens: &[TokenId]) -> Result<()> {
        let mut ws = self.connect().await?;

        let asset_ids: Vec<String> = tokens.iter().map(|t| t.as_str().to_string()).collect();
        let json = serde_json::to_string(&PolymarketSubscribeMessage::new(asset_ids))?;

        info!(assets = tokens.len(), "Subscribing to assets");
        ws.send(Message::Text(json)).await?;

        self.ws = Some(ws);
        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<BookUpdateEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            let Some(ws) = self.ws.as_mut() else {
                return Err(Error::Connection("book stream is not subscribed".into()));
            };

            match ws.next().await {
                Some(Ok(Message::Text(text))) => {
                    debug!(raw = %text, "Received message");
                    self.enqueue_text(&text);
                }
                Some(Ok(Message::Ping(data))) => {
                    debug!("Received ping");
                    ws.send(Message::Pong(data)).await?;
                }
                Some(Ok(Message::Close(frame))) => {
                    info!(frame = ?frame, "WebSocket closed by server");
                    self.ws = None;
                    return Ok(None);
                }
                // Binary, pong and raw frames carry nothing for us.
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!(error = %e, "WebSocket error");
                    self.ws = None;
                    return Err(e.into());
                }
                None => {
                    info!("WebSocket stream ended");
                    self.ws = None;
                    return Ok(None);
                }
            }
        }
    }

    fn venue_name(&self) -> &'static str {
        "Polymarket"
    }
}
