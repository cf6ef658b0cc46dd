//! Terminal shell: sheet overlay rendering and the demo runtime.
//!
//! Everything impure lives here. The demo hosts the controller the way an
//! application would: it owns a list of record ids, forwards pointer
//! samples, ticks the animation each frame, and reacts to the drained
//! commit events.

pub mod sheet;
pub mod styles;

// Re-export for convenience
pub use sheet::{render_sheet, SheetContent};
pub use styles::{ColorConfig, SheetStyles};

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use tracing::info;

use crate::config::ResolvedConfig;
use crate::input::{PointerScale, PointerTracker};
use crate::model::{SheetError, SiblingId, Viewport};
use crate::state::{SheetController, SheetEvent};

/// Frame cadence for the demo loop (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Demo application hosting the sheet controller.
struct DemoApp {
    controller: SheetController,
    tracker: PointerTracker,
    styles: SheetStyles,
    scale: PointerScale,
    items: Vec<SiblingId>,
    current: usize,
}

impl DemoApp {
    fn new(config: ResolvedConfig, items: Vec<SiblingId>, size: Size) -> Result<Self, SheetError> {
        let scale = PointerScale::default();
        let viewport = cell_viewport(size, scale);
        let mut controller = SheetController::new(viewport, config.sheet)?;
        controller.set_siblings(items.clone(), items.first().cloned());
        Ok(Self {
            controller,
            tracker: PointerTracker::new(scale),
            styles: SheetStyles::new(),
            scale,
            items,
            current: 0,
        })
    }

    /// React to drained commit events the way a host application would.
    fn apply_events(&mut self) {
        for event in self.controller.drain_events() {
            match event {
                SheetEvent::SiblingChanged(id) => {
                    info!(record = %id, "sibling navigation committed");
                    if let Some(index) = self.items.iter().position(|item| *item == id) {
                        self.current = index;
                        self.controller
                            .set_siblings(self.items.clone(), Some(id));
                    }
                }
                SheetEvent::DetentChanged(detent) => {
                    info!(?detent, "detent committed");
                }
                SheetEvent::CloseRequested => {
                    info!("sheet close requested");
                }
            }
        }
    }

    fn content(&self) -> SheetContent {
        let title = self
            .items
            .get(self.current)
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "sheet".to_string());
        let detent = self
            .controller
            .committed_detent()
            .map(|d| format!("{d:?}").to_lowercase())
            .unwrap_or_else(|| "-".to_string());
        SheetContent {
            title,
            lines: vec![
                format!("detent: {detent}"),
                String::new(),
                "drag vertically to resize, past the bottom to dismiss".to_string(),
                "drag horizontally to toss the card to a sibling".to_string(),
            ],
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        // Background: the record list the sheet floats over.
        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let marker = if i == self.current { "> " } else { "  " };
                ListItem::new(format!("{marker}{id}"))
            })
            .collect();
        let list = List::new(list_items).block(
            Block::default()
                .title(" records ")
                .borders(Borders::ALL),
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        frame.render_widget(list, chunks[0]);
        frame.render_widget(
            Paragraph::new("o: open  d: dismiss  esc: close  q: quit"),
            chunks[1],
        );

        let content = self.content();
        render_sheet(frame, area, &self.controller, &content, &self.styles);
    }
}

fn cell_viewport(size: Size, scale: PointerScale) -> Viewport {
    Viewport::new(
        f64::from(size.width.max(1)) * scale.x,
        f64::from(size.height.max(1)) * scale.y,
    )
}

/// Run the demo event loop until the user quits.
///
/// # Errors
///
/// Returns [`SheetError`] for terminal failures or invalid configuration.
pub fn run_demo(config: ResolvedConfig, items: Vec<SiblingId>) -> Result<(), SheetError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, items);

    // Restore the terminal even when the loop errored.
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: ResolvedConfig,
    items: Vec<SiblingId>,
) -> Result<(), SheetError> {
    let mut app = DemoApp::new(config, items, terminal.size()?)?;
    let start = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('o') | KeyCode::Enter => app.controller.set_visible(true),
                    KeyCode::Char('d') => app.controller.dismiss(),
                    KeyCode::Esc => app.controller.set_visible(false),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let now = start.elapsed().as_secs_f64();
                    if let Some(drag) = app.tracker.handle_mouse(&mouse, now) {
                        app.controller.handle_drag(drag);
                    }
                }
                Event::Resize(width, height) => {
                    let viewport = cell_viewport(Size::new(width, height), app.scale);
                    app.controller.set_viewport(viewport)?;
                }
                _ => {}
            }
        }

        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();
        app.controller.tick(dt);
        app.apply_events();

        terminal.draw(|frame| app.draw(frame))?;
    }
}
