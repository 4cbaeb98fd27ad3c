use std::io;
use anyhow::{Context, Result};
use termion::{event::Key, raw::IntoRawMode, screen::AlternateScreen};
use tokio_stream::{Stream, StreamExt};
use tracing::debug;
use tui::{
  Frame,
  Terminal,
  backend::{Backend, TermionBackend},
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Span, Spans},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph}
};

use crate::catalog::Catalog;
use self::{
  detail::{DetailScreen, Row, RowKind, DETAIL_ERROR_MESSAGE},
  image::{ImageLoader, LinkImageLoader},
  present::Policy,
  user_input::user_input
};

pub mod detail;
pub mod image;
pub mod present;
mod user_input;

const STATUS_HEIGHT: u16 = 3;

enum UIContext { List, Detail(DetailScreen) }

pub struct UI<B: Backend> {
  /// terminal abstraction
  terminal: Terminal<B>,

  /// Names and detail JSON, never modified
  catalog: Catalog,

  policy: Policy,

  image_loader: Box<dyn ImageLoader>,

  /// Which row of the list is highlighted
  list_state: ListState,

  /// Which screen the user is viewing
  context: UIContext,

  /// One-shot message, cleared by the next key press
  notice: Option<&'static str>
}

impl<B: Backend> UI<B> {
  pub fn new(
    mut terminal: Terminal<B>,
    catalog: Catalog,
    policy: Policy,
    image_loader: Box<dyn ImageLoader>
  ) -> Result<Self> {
    terminal.clear().context("failed to clear terminal")?;
    terminal.hide_cursor().context("failed to hide cursor")?;

    let mut list_state = ListState::default();
    if !catalog.is_empty() { list_state.select(Some(0)); }

    Ok(UI {
      terminal,
      catalog,
      policy,
      image_loader,
      list_state,
      context: UIContext::List,
      notice: None
    })
  }

  /// Hands the terminal back in a usable state
  pub fn restore(&mut self) -> Result<()> {
    self.terminal.show_cursor().context("failed to show cursor")
  }

  // draw based on state
  fn render(&mut self) -> Result<()> {
    let UI { terminal, catalog, list_state, context, notice, .. } = self;

    terminal.draw(|f| {
      let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(STATUS_HEIGHT)].as_ref())
        .split(f.size());

      match &mut *context {
        UIContext::List => draw_list(f, chunks[0], catalog.names(), list_state),
        UIContext::Detail(screen) => draw_detail(f, chunks[0], screen)
      }

      draw_status(f, chunks[1], &*context, *notice);
    })
    .context("failed to render")?;

    Ok(())
  }

  fn select_previous(&mut self) {
    if let Some(i) = self.list_state.selected() {
      self.list_state.select(Some(i.saturating_sub(1)));
    }
  }

  fn select_next(&mut self) {
    if self.catalog.is_empty() { return; }

    let last = self.catalog.len() - 1;
    let next = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
    self.list_state.select(Some(next));
  }

  fn select_last(&mut self) {
    if !self.catalog.is_empty() {
      self.list_state.select(Some(self.catalog.len() - 1));
    }
  }

  /// Only the selected index crosses over to the detail screen
  fn open_detail(&mut self) {
    let mut screen = DetailScreen::new(self.list_state.selected());

    match screen.start(&self.catalog, self.policy, self.image_loader.as_mut()) {
      Ok(()) => self.context = UIContext::Detail(screen),
      Err(_) => self.notice = Some(DETAIL_ERROR_MESSAGE)
    }
  }

  fn on_list_key(&mut self, key: Key) -> bool {
    match key {
      Key::Up | Key::Char('k') => self.select_previous(),
      Key::Down | Key::Char('j') => self.select_next(),
      Key::Home => if !self.catalog.is_empty() { self.list_state.select(Some(0)) },
      Key::End => self.select_last(),
      Key::Char('\n') => self.open_detail(),
      Key::Esc | Key::Char('q') => return true,
      _ => ()
    }

    false
  }

  fn on_detail_key(&mut self, key: Key) {
    let UIContext::Detail(screen) = &mut self.context else { return };

    match key {
      Key::Up | Key::Char('k') => screen.scroll_up(),
      Key::Down | Key::Char('j') => screen.scroll_down(),
      Key::Esc | Key::Backspace | Key::Left | Key::Char('q') => self.context = UIContext::List,
      _ => ()
    }
  }

  /// Returns true when the user asked to quit
  fn on_key(&mut self, key: Key) -> bool {
    debug!(?key, "key press");

    if let Key::Ctrl(k) = key {
      if matches!(k.to_ascii_lowercase(), 'c' | 'd') { return true; }
    }

    self.notice = None;

    match self.context {
      UIContext::List => self.on_list_key(key),
      UIContext::Detail(_) => {
        self.on_detail_key(key);
        false
      }
    }
  }

  /// Redraws after every key until the user quits or the input ends.
  pub async fn listen<S>(&mut self, mut input: S) -> Result<()>
  where
    S: Stream<Item = Key> + Unpin
  {
    self.render()?;

    while let Some(key) = input.next().await {
      if self.on_key(key) { break; }
      self.render()?;
    }

    Ok(())
  }
}

fn draw_list<B: Backend>(f: &mut Frame<B>, area: Rect, names: &[String], state: &mut ListState) {
  let items: Vec<ListItem> = names.iter().map(|name| ListItem::new(name.as_str())).collect();

  let list = List::new(items)
    .block(
      Block::default()
        .title("Sandwiches")
        .borders(Borders::ALL)
    )
    .style(Style::default().fg(Color::White))
    .highlight_style(
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
    )
    .highlight_symbol("> ");

  f.render_stateful_widget(list, area, state);
}

fn detail_spans(rows: &[Row]) -> Vec<Spans<'_>> {
  rows
    .iter()
    .map(|row| {
      let style = match row.kind {
        RowKind::Label => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        RowKind::Placeholder => Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        RowKind::Text | RowKind::Blank => Style::default()
      };
      Spans::from(Span::styled(row.text.as_str(), style))
    })
    .collect()
}

/// Rows are wrapped here rather than by the paragraph so the screen knows
/// how far it can scroll.
fn draw_detail<B: Backend>(f: &mut Frame<B>, area: Rect, screen: &mut DetailScreen) {
  let block = Block::default().borders(Borders::ALL);
  let inner = block.inner(area);
  screen.set_viewport(inner.width, inner.height);

  let (title, rows) = match screen.detail() {
    Some(detail) => (detail.title.as_str(), detail.rows(inner.width as usize)),
    None => ("", vec![])
  };

  let paragraph = Paragraph::new(detail_spans(&rows))
    .block(block.title(title))
    .scroll((screen.scroll(), 0));

  f.render_widget(paragraph, area);
}

fn draw_status<B: Backend>(f: &mut Frame<B>, area: Rect, context: &UIContext, notice: Option<&str>) {
  let line = match (notice, context) {
    (Some(notice), _) => Span::styled(format!(" {}", notice), Style::default().fg(Color::LightRed)),
    (None, UIContext::List) => Span::raw(" ↑/↓ select  enter open  q quit"),
    (None, UIContext::Detail(_)) => Span::raw(" ↑/↓ scroll  esc back  ctrl-c quit")
  };

  let status = Paragraph::new(Spans::from(line))
    .block(Block::default().borders(Borders::ALL));

  f.render_widget(status, area);
}

/// Runs the interactive UI on the real terminal.
pub async fn run(catalog: Catalog, policy: Policy) -> Result<()> {
  let stdout = io::stdout()
    .into_raw_mode()
    .context("failed to put terminal into 'raw mode'")?;

  let backend = TermionBackend::new(AlternateScreen::from(stdout));
  let terminal = Terminal::new(backend).context("failed to initialize terminal abstraction")?;

  let mut ui = UI::new(terminal, catalog, policy, Box::new(LinkImageLoader))?;
  let result = ui.listen(user_input()).await;

  // drop returns terminal to normal mode
  ui.restore()?;
  result
}
