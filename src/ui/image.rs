use tracing::debug;

/// What the detail screen shows where the picture would go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
  Link(String),
  Unavailable
}

/// Fetching, caching and decoding images belongs to whoever implements this.
/// The detail screen only hands over the URL.
pub trait ImageLoader {
  fn load(&mut self, url: &str) -> ImageSlot;
}

/// A terminal can't draw the picture, so offer the link instead
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkImageLoader;

impl ImageLoader for LinkImageLoader {
  fn load(&mut self, url: &str) -> ImageSlot {
    debug!(url, "image requested");

    if url.trim().is_empty() { ImageSlot::Unavailable }
    else { ImageSlot::Link(url.to_string()) }
  }
}
