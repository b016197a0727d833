//! Dojo — a grid-based game prototype.
//!
//! Milestones:
//! 1. ✅ a room with walls and floor
//! 2. a character that can move within the room's bounds
//! 3. a training dummy that can be destroyed by the character

mod state;

use roomgrid_crossterm::TermRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let floor = state::initial_floor();

    let mut renderer = TermRenderer::new();
    renderer.init()?;
    let result = renderer
        .draw(&floor)
        .and_then(|()| renderer.wait_for_key());
    renderer.close();
    result
}
