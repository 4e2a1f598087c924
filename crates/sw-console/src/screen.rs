//! Terminal screen control.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Queue a full screen clear plus cursor home into the given writer.
pub fn clear_to<W: Write>(w: &mut W) -> io::Result<()> {
    crossterm::queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
    w.flush()
}

/// Clear the terminal screen and move the cursor home.
pub fn clear() -> io::Result<()> {
    clear_to(&mut io::stdout())
}
