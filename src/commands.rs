use std::io::Write;
use anyhow::{Context, Result};

use crate::{
  catalog::Catalog,
  ui::{
    detail::{DetailScreen, DetailState, DETAIL_ERROR_MESSAGE},
    image::LinkImageLoader,
    present::Policy
  }
};

/// `index<TAB>name`, one per line
pub fn list(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
  for (i, name) in catalog.names().iter().enumerate() {
    writeln!(out, "{}\t{}", i, name)?;
  }
  Ok(())
}

/// Same path as opening the detail screen, printed instead of drawn
pub fn show(catalog: &Catalog, index: usize, policy: Policy, out: &mut impl Write) -> Result<()> {
  let mut screen = DetailScreen::new(Some(index));
  screen
    .start(catalog, policy, &mut LinkImageLoader)
    .context(DETAIL_ERROR_MESSAGE)?;

  if let DetailState::Displayed(detail) = screen.state() {
    out.write_all(detail.plain_text().as_bytes())?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn lists_names_with_indices() {
    let catalog = Catalog::new(vec!["A".into(), "B".into()], vec![]);
    assert_eq!(output(|out| list(&catalog, out)), "0\tA\n1\tB\n");
  }

  #[test]
  fn shows_bundled_sandwich() {
    let catalog = Catalog::bundled().unwrap();
    let text = output(|out| show(&catalog, 1, Policy::default(), out));

    assert!(text.starts_with("Bosna\n=====\n"));
    assert!(text.contains("Also known as\n  Bosner\n"));
    assert!(text.contains("Place of origin\n  Austria\n"));
  }

  #[test]
  fn show_fails_for_unknown_index() {
    let catalog = Catalog::bundled().unwrap();
    let err = show(&catalog, 999, Policy::default(), &mut Vec::new()).unwrap_err();

    assert_eq!(err.to_string(), DETAIL_ERROR_MESSAGE);
  }
}
