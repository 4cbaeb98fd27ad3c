use serde::Deserialize;
use serde_json::Value;

/// Wire representation of a sandwich detail entry
#[derive(Debug, Deserialize)]
pub struct SandwichJson {
  pub name: NameJson,

  #[serde(rename="placeOfOrigin", default)]
  pub place_of_origin: Option<Value>,

  pub description: String,

  pub image: String,

  #[serde(default)]
  pub ingredients: Option<Value>
}

#[derive(Debug, Deserialize)]
pub struct NameJson {
  #[serde(rename="mainName")]
  pub main_name: String,

  #[serde(rename="alsoKnownAs", default)]
  pub also_known_as: Option<Value>
}
