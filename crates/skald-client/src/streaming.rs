//! SSE stream decoding for streaming chat and document generation.
//!
//! The server emits one JSON event per `data:` line. The decoder buffers
//! bytes across chunk boundaries, so a line split between two network reads
//! is reassembled before parsing.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;

use skald_core::{Error, Result, StreamEvent};

/// Stream of typed events from a streaming chat or generation call.
///
/// Finite and non-restartable: zero or more `Token` items, then exactly one
/// `Done`, then the stream is exhausted. A transport fault or a body that
/// ends without `done` yields one terminal `Err` item instead. Dropping the
/// stream closes the underlying connection.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Decode an SSE byte stream into typed events.
pub fn decode_event_stream<S, E>(stream: S) -> EventStream
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let decoder = Decoder {
        inner: Box::pin(stream),
        buffer: String::new(),
        pending: VecDeque::new(),
        finished: false,
    };

    Box::pin(futures::stream::unfold(decoder, |mut d| async move {
        loop {
            if let Some(item) = d.pending.pop_front() {
                if matches!(&item, Ok(StreamEvent::Done) | Err(_)) {
                    // Terminal item: drop anything queued behind it and stop
                    // pulling from the connection.
                    d.finished = true;
                    d.pending.clear();
                }
                return Some((item, d));
            }

            if d.finished {
                return None;
            }

            match d.inner.next().await {
                Some(Ok(bytes)) => d.feed(&bytes),
                Some(Err(e)) => d
                    .pending
                    .push_back(Err(Error::Stream(format!("connection lost mid-stream: {e}")))),
                None => {
                    // Body ended. A final unterminated line may still hold the
                    // done event.
                    d.flush_tail();
                    if !d.pending.iter().any(|i| matches!(i, Ok(StreamEvent::Done))) {
                        d.pending
                            .push_back(Err(Error::Stream("stream ended before done event".to_string())));
                    }
                }
            }
        }
    }))
}

struct Decoder<S> {
    inner: Pin<Box<S>>,
    buffer: String,
    pending: VecDeque<Result<StreamEvent>>,
    finished: bool,
}

impl<S> Decoder<S> {
    /// Append a chunk and parse every complete line, keeping the incomplete
    /// tail in the buffer.
    fn feed(&mut self, bytes: &[u8]) {
        self.buffer.push_str(&String::from_utf8_lossy(bytes));

        while let Some(pos) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=pos).collect();
            self.parse_line(line.trim());
        }
    }

    /// Parse whatever is left in the buffer as a final line.
    fn flush_tail(&mut self) {
        if !self.buffer.is_empty() {
            let tail = std::mem::take(&mut self.buffer);
            self.parse_line(tail.trim());
        }
    }

    fn parse_line(&mut self, line: &str) {
        // Blank lines separate events; `:` lines are keep-alive comments.
        if line.is_empty() || line.starts_with(':') {
            return;
        }

        let Some(data) = line.strip_prefix("data: ") else {
            return;
        };

        // Undecodable payload lines are skipped rather than failing the
        // stream; the done/error contract is enforced at end of body.
        if let Ok(event) = serde_json::from_str::<StreamEvent>(data) {
            self.pending.push_back(Ok(event));
        }
    }
}
