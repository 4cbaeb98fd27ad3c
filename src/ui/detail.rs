use tracing::{info, warn};

use crate::{catalog::Catalog, sandwich::{parse_sandwich_json, ParseError}};
use super::{image::ImageLoader, present::{self, Body, Policy, Section}};

/// Shown to the user whenever a detail screen has to close early
pub const DETAIL_ERROR_MESSAGE: &str = "Sandwich data not available";

const INDENT: &str = "  ";

#[derive(Debug, thiserror::Error)]
pub enum DetailError {
  #[error("no sandwich was selected")]
  NoPosition,

  #[error("no detail entry for sandwich {0}")]
  MissingDetail(usize),

  #[error(transparent)]
  Parse(#[from] ParseError)
}

/// Everything the detail screen draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
  pub title: String,
  pub sections: Vec<Section>
}

impl Detail {
  pub fn plain_text(&self) -> String {
    present::plain_text(&self.title, &self.sections)
  }

  /// Screen rows at `width` columns, already wrapped, so one row is one line
  /// on the terminal and scrolling can count them.
  pub fn rows(&self, width: usize) -> Vec<Row> {
    let mut rows = vec![];

    for (i, section) in self.sections.iter().enumerate() {
      if i > 0 { rows.push(Row { kind: RowKind::Blank, text: String::new() }); }

      rows.extend(wrap(section.label, width).into_iter().map(|text| Row { kind: RowKind::Label, text }));

      let kind = match section.body {
        Body::Lines(_) => RowKind::Text,
        Body::Placeholder => RowKind::Placeholder
      };
      for line in section.text() {
        rows.extend(
          wrap(line, width.saturating_sub(INDENT.len()))
            .into_iter()
            .map(|text| Row { kind, text: format!("{}{}", INDENT, text) })
        );
      }
    }

    rows
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind { Label, Text, Placeholder, Blank }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub kind: RowKind,
  pub text: String
}

/// Greedy word wrap. Words longer than a row are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
  let width = width.max(1);
  let mut rows = vec![];
  let mut row = String::new();
  let mut row_len = 0;

  for word in text.split_whitespace() {
    let mut rest: Vec<char> = word.chars().collect();

    while rest.len() > width {
      if row_len > 0 {
        rows.push(std::mem::take(&mut row));
        row_len = 0;
      }
      rows.push(rest.drain(..width).collect());
    }
    if rest.is_empty() { continue; }

    if row_len > 0 && row_len + 1 + rest.len() > width {
      rows.push(std::mem::take(&mut row));
      row_len = 0;
    }
    if row_len > 0 {
      row.push(' ');
      row_len += 1;
    }
    row_len += rest.len();
    row.extend(rest);
  }

  if row_len > 0 || rows.is_empty() { rows.push(row); }
  rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
  NotStarted,
  Loading,
  Displayed(Detail),
  ErrorClosed
}

/// One visit to the detail screen. Created per selection, dropped on close.
#[derive(Debug)]
pub struct DetailScreen {
  /// `None` when nothing was selected
  position: Option<usize>,
  state: DetailState,
  scroll: u16,

  /// Inner width and height of the last draw, unknown until drawn
  viewport: Option<(u16, u16)>
}

impl DetailScreen {
  pub fn new(position: Option<usize>) -> Self {
    DetailScreen { position, state: DetailState::NotStarted, scroll: 0, viewport: None }
  }

  pub fn state(&self) -> &DetailState { &self.state }

  pub fn detail(&self) -> Option<&Detail> {
    match &self.state {
      DetailState::Displayed(detail) => Some(detail),
      _ => None
    }
  }

  pub fn scroll(&self) -> u16 { self.scroll }

  /// Looks up, parses and lays out the selected sandwich.
  ///
  /// Moves to `Displayed` or `ErrorClosed`; both are final, so calling this
  /// again does nothing.
  pub fn start(
    &mut self,
    catalog: &Catalog,
    policy: Policy,
    image_loader: &mut dyn ImageLoader
  ) -> Result<(), DetailError> {
    if self.state != DetailState::NotStarted { return Ok(()); }

    self.state = DetailState::Loading;

    match self.load(catalog, policy, image_loader) {
      Ok(detail) => {
        info!(position = ?self.position, title = %detail.title, "showing sandwich");
        self.state = DetailState::Displayed(detail);
        Ok(())
      },
      Err(e) => {
        warn!(position = ?self.position, error = %e, "closing detail screen");
        self.state = DetailState::ErrorClosed;
        Err(e)
      }
    }
  }

  fn load(
    &self,
    catalog: &Catalog,
    policy: Policy,
    image_loader: &mut dyn ImageLoader
  ) -> Result<Detail, DetailError> {
    let index = self.position.ok_or(DetailError::NoPosition)?;
    let json = catalog.detail_json(index).ok_or(DetailError::MissingDetail(index))?;
    let sandwich = parse_sandwich_json(json)?;

    let image = image_loader.load(&sandwich.image_url);
    let sections = present::sections(&sandwich, policy, &image);

    Ok(Detail { title: sandwich.main_name, sections })
  }

  /// Records the drawable area and pulls the scroll back if it shrank
  pub fn set_viewport(&mut self, width: u16, height: u16) {
    self.viewport = Some((width, height));
    self.scroll = self.scroll.min(self.max_scroll());
  }

  /// Furthest scroll that still fills the viewport
  fn max_scroll(&self) -> u16 {
    match (self.detail(), self.viewport) {
      (Some(detail), Some((width, height))) => {
        let rows = detail.rows(width as usize).len();
        u16::try_from(rows.saturating_sub(height as usize)).unwrap_or(u16::MAX)
      },
      _ => 0
    }
  }

  pub fn scroll_down(&mut self) {
    if self.scroll < self.max_scroll() { self.scroll = self.scroll.saturating_add(1); }
  }

  pub fn scroll_up(&mut self) {
    self.scroll = self.scroll.saturating_sub(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::image::ImageSlot;

  /// Remembers every URL it was asked for
  #[derive(Default)]
  struct RecordingLoader(Vec<String>);

  impl ImageLoader for RecordingLoader {
    fn load(&mut self, url: &str) -> ImageSlot {
      self.0.push(url.to_string());
      ImageSlot::Link(url.to_string())
    }
  }

  fn catalog() -> Catalog {
    Catalog::new(
      vec!["Rueben".into(), "Broken".into()],
      vec![
        r#"{"name":{"mainName":"Rueben","alsoKnownAs":[]},"placeOfOrigin":"","description":"D","image":"http://x/i.png","ingredients":["rye","beef"]}"#.into(),
        r#"{"name":{"alsoKnownAs":[]},"description":"D","image":"i"}"#.into()
      ]
    )
  }

  #[test]
  fn displays_a_parsed_sandwich() {
    let mut loader = RecordingLoader::default();
    let mut screen = DetailScreen::new(Some(0));
    assert_eq!(screen.state(), &DetailState::NotStarted);

    screen.start(&catalog(), Policy::default(), &mut loader).unwrap();

    let detail = screen.detail().unwrap();
    assert_eq!(detail.title, "Rueben");
    assert_eq!(loader.0, ["http://x/i.png"]);
    assert_eq!(
      detail.plain_text(),
      "Rueben\n======\n\nDescription\n  D\n\nIngredients\n  rye\n  beef\n\nImage\n  http://x/i.png\n"
    );
  }

  #[test]
  fn sentinel_aborts_before_lookup() {
    let mut loader = RecordingLoader::default();
    let mut screen = DetailScreen::new(None);

    let err = screen.start(&catalog(), Policy::default(), &mut loader).unwrap_err();

    assert!(matches!(err, DetailError::NoPosition));
    assert_eq!(screen.state(), &DetailState::ErrorClosed);
    assert!(loader.0.is_empty());
  }

  #[test]
  fn out_of_range_index_aborts() {
    let mut screen = DetailScreen::new(Some(9));
    let err = screen.start(&catalog(), Policy::default(), &mut RecordingLoader::default()).unwrap_err();

    assert!(matches!(err, DetailError::MissingDetail(9)));
    assert_eq!(screen.state(), &DetailState::ErrorClosed);
  }

  #[test]
  fn parse_failure_aborts_without_partial_detail() {
    let mut loader = RecordingLoader::default();
    let mut screen = DetailScreen::new(Some(1));

    let err = screen.start(&catalog(), Policy::default(), &mut loader).unwrap_err();

    assert!(matches!(err, DetailError::Parse(_)));
    assert!(screen.detail().is_none());
    assert!(loader.0.is_empty());
  }

  #[test]
  fn end_states_are_final() {
    let mut screen = DetailScreen::new(None);
    let _ = screen.start(&catalog(), Policy::default(), &mut RecordingLoader::default());

    screen.position = Some(0);
    screen.start(&catalog(), Policy::default(), &mut RecordingLoader::default()).unwrap();
    assert_eq!(screen.state(), &DetailState::ErrorClosed);
  }

  #[test]
  fn scrolling_stops_when_the_last_row_is_visible() {
    let mut screen = DetailScreen::new(Some(0));
    screen.start(&catalog(), Policy::default(), &mut RecordingLoader::default()).unwrap();

    // unknown viewport, nothing to scroll against
    screen.scroll_down();
    assert_eq!(screen.scroll(), 0);

    // Description, D, blank, Ingredients, rye, beef, blank, Image, url
    screen.set_viewport(40, 4);
    for _ in 0..100 { screen.scroll_down(); }
    assert_eq!(screen.scroll(), 5);

    // narrower: both long labels and the url take two rows each
    screen.set_viewport(10, 4);
    for _ in 0..100 { screen.scroll_down(); }
    assert_eq!(screen.scroll(), 8);

    // everything fits again
    screen.set_viewport(40, 20);
    assert_eq!(screen.scroll(), 0);
  }

  #[test]
  fn rows_wrap_to_width() {
    let detail = Detail {
      title: "T".into(),
      sections: vec![Section { label: "Description", body: Body::Lines(vec!["aa bb cc abcdefghij".into()]) }]
    };

    let rows: Vec<String> = detail.rows(8).into_iter().map(|r| r.text).collect();
    assert_eq!(rows, ["Descript", "ion", "  aa bb", "  cc", "  abcdef", "  ghij"]);
  }

  #[test]
  fn wrap_keeps_empty_text_as_one_row() {
    assert_eq!(wrap("", 5), [""]);
    assert_eq!(wrap("one two", 7), ["one two"]);
    assert_eq!(wrap("one two", 6), ["one", "two"]);
  }
}
