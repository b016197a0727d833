//! Crossterm presentation layer for roomgrid.
//!
//! Provides a [`TermRenderer`] that draws a finished
//! [`roomgrid_core::Grid`] to an alternate-screen terminal, one glyph per
//! cell at `(column, row)`. The core stays decoupled from it: the only
//! contract between the two is the immutable grid.

use std::io::{self, Write};

use crossterm::{
    cursor, event,
    execute,
    terminal::{self, ClearType},
};

use roomgrid_core::Grid;

/// A terminal renderer for tile grids.
pub struct TermRenderer {
    active: bool,
}

impl TermRenderer {
    /// Create a renderer. The terminal is untouched until
    /// [`init`](Self::init).
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Switch the terminal to raw mode on the alternate screen with the
    /// cursor hidden.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.active = true;
        Ok(())
    }

    /// Draw every tile of `grid`, addressing the cursor per cell.
    ///
    /// A tile at `(row, column)` is drawn at terminal cell
    /// `(column, row)`; the grid is small and recomputed wholesale, so no
    /// frame diffing is attempted.
    pub fn draw(&mut self, grid: &Grid) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!("drawing {}x{} grid", grid.width(), grid.height());
        let mut stdout = io::stdout();
        for (p, tile) in grid.iter() {
            execute!(stdout, cursor::MoveTo(p.column as u16, p.row as u16))?;
            write!(stdout, "{}", tile.glyph())?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Block until any key event arrives.
    pub fn wait_for_key(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            if let event::Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }

    /// Restore the terminal. Best-effort; safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        self.active = false;
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        self.close();
    }
}
