use serde_json::Value;
use tracing::{debug, warn};

use super::{sandwich_json::SandwichJson, Sandwich};

/// Why a detail entry could not become a [`Sandwich`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
  #[error("sandwich JSON is empty")]
  Empty,

  #[error("malformed sandwich JSON: {0}")]
  Malformed(#[from] serde_json::Error)
}

/// Parses one detail entry.
///
/// Only `name.mainName`, `description` and `image` are required. The list
/// fields and `placeOfOrigin` come back as `None` when missing, null, empty,
/// or of the wrong type.
pub fn parse_sandwich_json(json: &str) -> Result<Sandwich, ParseError> {
  if json.trim().is_empty() { return Err(ParseError::Empty); }

  let raw: SandwichJson = serde_json::from_str(json)?;

  let sandwich = Sandwich {
    also_known_as: string_list("alsoKnownAs", raw.name.also_known_as),
    main_name: raw.name.main_name,
    place_of_origin: non_empty_string("placeOfOrigin", raw.place_of_origin),
    description: raw.description,
    image_url: raw.image,
    ingredients: string_list("ingredients", raw.ingredients)
  };

  debug!(
    main_name = %sandwich.main_name,
    also_known_as = ?sandwich.also_known_as,
    place_of_origin = ?sandwich.place_of_origin,
    image_url = %sandwich.image_url,
    ingredients = ?sandwich.ingredients,
    "parsed sandwich"
  );

  Ok(sandwich)
}

fn string_list(field: &'static str, value: Option<Value>) -> Option<Vec<String>> {
  let items = match value? {
    Value::Null => return None,
    Value::Array(items) => items,
    other => {
      warn!(field, found = %other, "expected an array, treating as absent");
      return None;
    }
  };

  let list: Vec<String> = items
    .into_iter()
    .filter_map(|item| match item {
      Value::Null => None,
      Value::String(s) => Some(s),
      other => Some(other.to_string())
    })
    .collect();

  if list.is_empty() { None } else { Some(list) }
}

fn non_empty_string(field: &'static str, value: Option<Value>) -> Option<String> {
  match value? {
    Value::String(s) if !s.is_empty() => Some(s),
    Value::String(_) | Value::Null => None,
    other => {
      warn!(field, found = %other, "expected a string, treating as absent");
      None
    }
  }
}
