use futures::{future::ready, Stream, StreamExt};
use termion::{event::Key, input::TermRead};
use tokio_stream::iter;
use tracing::warn;

/// Key presses from stdin. Ends when stdin closes.
pub fn user_input() -> impl Stream<Item = Key> + Unpin {
  iter(std::io::stdin().keys()).filter_map(|r| ready(match r {
    Ok(key) => Some(key),
    Err(e) => {
      warn!(error = %e, "unreadable key press");
      None
    }
  }))
}
