//! Stream Demonstration Handlers
//!
//! Small endpoints showing finite and timed sequence delivery on the async
//! runtime: a buffered JSON list, a single value, and two server-sent event
//! streams that emit one element per second and then complete.

use axum::Json;
use axum::Router;
use axum::response::sse::{Event, Sse};
use axum::routing::get;
use futures::stream::{self, Stream, StreamExt};
use std::convert::Infallible;
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tokio_stream::wrappers::IntervalStream;

pub fn router() -> Router {
    Router::new()
        .route("/flux", get(handle_flux))
        .route("/mono", get(handle_mono))
        .route("/stream", get(handle_stream))
        .route("/fluxStream", get(handle_flux_stream))
}

pub async fn handle_flux() -> Json<Vec<i32>> {
    Json(vec![1, 2, 3, 4])
}

pub async fn handle_mono() -> Json<&'static str> {
    Json("Hello World")
}

/// Emits a counter value every second, five in total (0 through 4), then
/// closes the stream.
pub async fn handle_stream() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let period = Duration::from_secs(1);
    let ticks = IntervalStream::new(interval_at(Instant::now() + period, period))
        .enumerate()
        .map(|(count, _)| Ok(Event::default().data(count.to_string())))
        .take(5);
    Sse::new(ticks)
}

/// Emits the fixed sequence 1..4 with a one second delay between elements.
pub async fn handle_flux_stream() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let numbers = tokio_stream::StreamExt::throttle(stream::iter(1..=4), Duration::from_secs(1));
    Sse::new(numbers.map(|n: i32| Ok(Event::default().data(n.to_string()))))
}
