pub mod widgets;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::export;
use crate::palette::{generate_with, LockSet, Palette, PaletteMode, PALETTE_LEN};

/// How long the per-swatch "copied" flash stays visible.
const COPY_FLASH: Duration = Duration::from_secs(2);
/// How long footer status messages stay visible.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
/// Hue change per keypress.
const HUE_STEP: i32 = 10;

/// State for the interactive TUI application.
pub struct App {
    pub palette: Palette,
    pub locks: LockSet,
    pub mode: PaletteMode,
    pub base_hue: u16,
    /// Currently highlighted slot, 0..4.
    pub selected: usize,
    /// Slot showing the "copied" flash, if any.
    pub copied: Option<usize>,
    copied_at: Option<Instant>,
    pub status: String,
    status_at: Option<Instant>,
    /// Chrome styling only; swatches are unaffected either way.
    pub dark_chrome: bool,
    rng: StdRng,
}

impl App {
    pub fn new(mode: PaletteMode, base_hue: u16, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let palette = generate_with(mode, base_hue, &[], &LockSet::default(), &mut rng);
        Self {
            palette,
            locks: LockSet::default(),
            mode,
            base_hue,
            selected: 0,
            copied: None,
            copied_at: None,
            status: String::new(),
            status_at: None,
            dark_chrome: true,
            rng,
        }
    }

    /// Recompute the palette; locked slots keep their current color.
    pub fn regenerate(&mut self) {
        self.palette = generate_with(
            self.mode,
            self.base_hue,
            &self.palette.slots,
            &self.locks,
            &mut self.rng,
        );
    }

    /// Switch to the next harmony mode and regenerate through the same path.
    pub fn next_mode(&mut self) {
        self.mode = self.mode.next();
        self.regenerate();
    }

    /// Shift the base hue, wrapping into [0, 360). Does not regenerate; the
    /// new hue applies on the next generation.
    pub fn adjust_hue(&mut self, delta: i32) {
        self.base_hue = (i32::from(self.base_hue) + delta).rem_euclid(360) as u16;
    }

    pub fn toggle_lock(&mut self, slot: usize) {
        self.locks.toggle(slot);
    }

    pub fn select_left(&mut self) {
        self.selected = (self.selected + PALETTE_LEN - 1) % PALETTE_LEN;
    }

    pub fn select_right(&mut self) {
        self.selected = (self.selected + 1) % PALETTE_LEN;
    }

    /// Copy the selected hex code to the system clipboard. Clipboard failure
    /// leaves palette state untouched and shows no flash.
    fn copy_selected(&mut self) {
        let hex = self.palette.slots[self.selected].to_hex();
        if cli_clipboard::set_contents(hex).is_ok() {
            self.copied = Some(self.selected);
            self.copied_at = Some(Instant::now());
        }
    }

    /// Export the palette to `palette.txt` in the working directory.
    fn export(&mut self) {
        let path = Path::new(export::DEFAULT_FILE_NAME);
        let message = match export::write_to(&self.palette, path) {
            Ok(()) => format!("exported to {}", path.display()),
            Err(err) => format!("export failed: {err}"),
        };
        self.set_status(message);
    }

    fn set_status(&mut self, message: String) {
        self.status = message;
        self.status_at = Some(Instant::now());
    }

    /// Expire transient indicators.
    fn tick(&mut self) {
        if self.copied_at.is_some_and(|at| at.elapsed() > COPY_FLASH) {
            self.copied = None;
            self.copied_at = None;
        }
        if self.status_at.is_some_and(|at| at.elapsed() > STATUS_TIMEOUT) {
            self.status.clear();
            self.status_at = None;
        }
    }
}

/// Run the TUI: alternate screen, raw mode, poll/draw loop.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| widgets::draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('g') => app.regenerate(),
                KeyCode::Char('m') => app.next_mode(),
                KeyCode::Left => app.select_left(),
                KeyCode::Right => app.select_right(),
                KeyCode::Char(' ') | KeyCode::Enter => app.toggle_lock(app.selected),
                KeyCode::Char(c @ '1'..='5') => {
                    app.toggle_lock(c as usize - '1' as usize);
                }
                KeyCode::Char('c') => app.copy_selected(),
                KeyCode::Char('e') => app.export(),
                KeyCode::Char('d') => app.dark_chrome = !app.dark_chrome,
                KeyCode::Char('[') => app.adjust_hue(-HUE_STEP),
                KeyCode::Char(']') => app.adjust_hue(HUE_STEP),
                _ => {}
            }
        }
    }
    Ok(())
}
