//! How a parsed sandwich is laid out for display, independent of any
//! terminal. Absent fields are either hidden or given a placeholder here.

use crate::sandwich::Sandwich;
use super::image::ImageSlot;

pub const PLACEHOLDER: &str = "Not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent { Hide, Placeholder }

/// Per-field treatment of absent values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
  pub also_known_as: Absent,
  pub place_of_origin: Absent,
  pub ingredients: Absent
}

impl Default for Policy {
  fn default() -> Self {
    Policy {
      also_known_as: Absent::Hide,
      place_of_origin: Absent::Hide,
      ingredients: Absent::Placeholder
    }
  }
}

impl Policy {
  /// Never hide a section, mark it instead
  pub fn show_absent() -> Self {
    Policy {
      also_known_as: Absent::Placeholder,
      place_of_origin: Absent::Placeholder,
      ingredients: Absent::Placeholder
    }
  }
}

/// A labelled block of the detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
  pub label: &'static str,
  pub body: Body
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
  Lines(Vec<String>),
  Placeholder
}

impl Section {
  fn lines(label: &'static str, lines: Vec<String>) -> Self {
    Section { label, body: Body::Lines(lines) }
  }

  /// Lines of this section as they should read, placeholder included
  pub fn text(&self) -> Vec<&str> {
    match &self.body {
      Body::Lines(lines) => lines.iter().map(String::as_str).collect(),
      Body::Placeholder => vec![PLACEHOLDER]
    }
  }
}

fn optional(label: &'static str, value: Option<Vec<String>>, absent: Absent) -> Option<Section> {
  match (value, absent) {
    (Some(lines), _) => Some(Section::lines(label, lines)),
    (None, Absent::Placeholder) => Some(Section { label, body: Body::Placeholder }),
    (None, Absent::Hide) => None
  }
}

pub fn sections(sandwich: &Sandwich, policy: Policy, image: &ImageSlot) -> Vec<Section> {
  let image = match image {
    ImageSlot::Link(url) => Section::lines("Image", vec![url.clone()]),
    ImageSlot::Unavailable => Section { label: "Image", body: Body::Placeholder }
  };

  [
    optional("Also known as", sandwich.also_known_as.clone(), policy.also_known_as),
    optional("Place of origin", sandwich.place_of_origin.clone().map(|o| vec![o]), policy.place_of_origin),
    Some(Section::lines("Description", vec![sandwich.description.clone()])),
    optional("Ingredients", sandwich.ingredients.clone(), policy.ingredients),
    Some(image)
  ]
  .into_iter()
  .flatten()
  .collect()
}

/// Plain text rendition for printing outside the interactive UI
pub fn plain_text(title: &str, sections: &[Section]) -> String {
  let mut out = format!("{}\n{}\n", title, "=".repeat(title.chars().count()));

  for section in sections {
    out.push('\n');
    out.push_str(section.label);
    out.push('\n');
    for line in section.text() {
      out.push_str("  ");
      out.push_str(line);
      out.push('\n');
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sparse() -> Sandwich {
    Sandwich {
      main_name: "Reuben".into(),
      also_known_as: None,
      place_of_origin: None,
      description: "D".into(),
      image_url: "http://x/i.png".into(),
      ingredients: None
    }
  }

  fn labels(sections: &[Section]) -> Vec<&'static str> {
    sections.iter().map(|s| s.label).collect()
  }

  #[test]
  fn default_policy_hides_names_and_origin() {
    let image = ImageSlot::Link("http://x/i.png".into());
    let sections = sections(&sparse(), Policy::default(), &image);

    assert_eq!(labels(&sections), ["Description", "Ingredients", "Image"]);
    assert_eq!(sections[1].body, Body::Placeholder);
    assert_eq!(sections[2].text(), ["http://x/i.png"]);
  }

  #[test]
  fn show_absent_keeps_every_section() {
    let sections = sections(&sparse(), Policy::show_absent(), &ImageSlot::Unavailable);

    assert_eq!(
      labels(&sections),
      ["Also known as", "Place of origin", "Description", "Ingredients", "Image"]
    );
    assert!(sections.iter().filter(|s| s.label != "Description").all(|s| s.body == Body::Placeholder));
  }

  #[test]
  fn present_fields_list_one_entry_per_line() {
    let sandwich = Sandwich {
      also_known_as: Some(vec!["Rueben".into(), "Reuben sandwich".into()]),
      place_of_origin: Some("Omaha".into()),
      ingredients: Some(vec!["Rye".into(), "Beef".into()]),
      ..sparse()
    };
    let sections = sections(&sandwich, Policy::default(), &ImageSlot::Unavailable);

    assert_eq!(sections[0].text(), ["Rueben", "Reuben sandwich"]);
    assert_eq!(sections[1].text(), ["Omaha"]);
    assert_eq!(sections[3].text(), ["Rye", "Beef"]);
    assert_eq!(sections[4].text(), [PLACEHOLDER]);
  }

  #[test]
  fn plain_text_underlines_title() {
    let sections = vec![Section::lines("Description", vec!["D".into()])];

    assert_eq!(plain_text("Reuben", &sections), "Reuben\n======\n\nDescription\n  D\n");
  }
}
