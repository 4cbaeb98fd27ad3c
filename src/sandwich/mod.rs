mod sandwich_json;
mod parse;

pub use parse::*;

/// One sandwich, as shown on the detail screen.
///
/// Optional fields are `None` both when the key was missing and when it held
/// an empty value, so callers never see `Some("")` or `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandwich {
  pub main_name: String,
  pub also_known_as: Option<Vec<String>>,
  pub place_of_origin: Option<String>,
  pub description: String,

  /// Opaque to us, handed to the image loader as-is
  pub image_url: String,

  pub ingredients: Option<Vec<String>>
}
