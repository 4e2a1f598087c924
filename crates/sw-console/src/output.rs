//! Plain output helpers: menus, headers, rules, typewriter text.
//!
//! Everything here writes to an explicit `Write` target so output can be
//! captured in tests or redirected. The CLI passes a locked stdout.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// The pacing used for typewriter text when no explicit delay is given.
pub const TYPEWRITER_DELAY: Duration = Duration::from_millis(40);

/// Write an enumerated menu, one `N. item` line per entry, counting from 1.
pub fn menu<W: Write, T: std::fmt::Display>(w: &mut W, items: &[T]) -> io::Result<()> {
    for (index, item) in items.iter().enumerate() {
        writeln!(w, "{}. {item}", index + 1)?;
    }
    Ok(())
}

/// Write a rule, the centered title, and a closing rule.
pub fn header<W: Write>(w: &mut W, title: &str, symbol: char, width: usize) -> io::Result<()> {
    rule(w, symbol, width)?;
    writeln!(w, "{}", format!("{title:^width$}").trim_end())?;
    rule(w, symbol, width)
}

/// Write a single line of `width` repeated symbols.
pub fn rule<W: Write>(w: &mut W, symbol: char, width: usize) -> io::Result<()> {
    writeln!(w, "{}", symbol.to_string().repeat(width))
}

/// Write text one character at a time, pausing `delay` between characters,
/// then finish the line.
///
/// Flushes after every character so the effect is visible on a live
/// terminal. A zero delay prints instantly.
pub fn typewriter<W: Write>(w: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    for ch in text.chars() {
        write!(w, "{ch}")?;
        w.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(w)
}
