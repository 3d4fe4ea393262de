//! Optional request body logging.
//!
//! [`RequestBodyLogger`] swaps the request body for a [`PayloadRecorder`]
//! that forwards every chunk untouched and keeps a copy. When the body has
//! been read to the end the copy is handed to a sink, which by default logs
//! it as a single `Payload [...]` line.
//!
//! The copy is unbounded. Only enable this where request bodies are known to
//! be small.

use std::{
    pin::Pin,
    sync::Arc,
    task::{ready, Context, Poll},
};

use bytes::{Bytes, BytesMut};
use futures::{stream::BoxStream, Stream, StreamExt};
use poem::{async_trait, Body, Endpoint, Middleware, Request, Result};
use tracing::info;

type Sink = Arc<dyn Fn(Bytes) + Send + Sync>;

/// Passes a byte-chunk stream through unchanged while buffering it, and calls
/// `on_complete` with the buffered bytes once the stream ends cleanly.
///
/// A stream that ends with an error never reaches `on_complete`.
pub struct PayloadRecorder<S, F> {
    inner: S,
    buffer: BytesMut,
    on_complete: Option<F>,
}

impl<S, F> PayloadRecorder<S, F> {
    pub fn new(inner: S, on_complete: F) -> Self {
        Self {
            inner,
            buffer: BytesMut::new(),
            on_complete: Some(on_complete),
        }
    }
}

impl<S, E, F> Stream for PayloadRecorder<S, F>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    F: FnOnce(Bytes) + Unpin,
{
    type Item = Result<Bytes, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        match ready!(this.inner.poll_next_unpin(cx)) {
            Some(Ok(chunk)) => {
                this.buffer.extend_from_slice(&chunk);

                Poll::Ready(Some(Ok(chunk)))
            },
            Some(Err(e)) => {
                this.on_complete = None;

                Poll::Ready(Some(Err(e)))
            },
            None => {
                if let Some(on_complete) = this.on_complete.take() {
                    on_complete(this.buffer.split().freeze());
                }

                Poll::Ready(None)
            },
        }
    }
}

fn log_payload(payload: Bytes) {
    info!("Payload [{}]", String::from_utf8_lossy(&payload));
}

/// Middleware recording inbound request bodies.
#[derive(Clone)]
pub struct RequestBodyLogger {
    sink: Sink,
}

impl RequestBodyLogger {
    /// Logs each completed body at `info`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Arc::new(log_payload),
        }
    }

    /// Hands each completed body to `sink` instead of the log.
    pub fn with_sink(sink: impl Fn(Bytes) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl Default for RequestBodyLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Endpoint> Middleware<E> for RequestBodyLogger {
    type Output = RequestBodyLoggerEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestBodyLoggerEndpoint {
            inner: ep,
            sink: self.sink.clone(),
        }
    }
}

pub struct RequestBodyLoggerEndpoint<E> {
    inner: E,
    sink: Sink,
}

#[async_trait]
impl<E: Endpoint> Endpoint for RequestBodyLoggerEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let sink = self.sink.clone();
        let body: BoxStream<'static, _> = req.take_body().into_bytes_stream().boxed();

        req.set_body(Body::from_bytes_stream(PayloadRecorder::new(
            body,
            move |payload| sink(payload),
        )));

        self.inner.call(req).await
    }
}
