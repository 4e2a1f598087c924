//! A redrawable terminal progress bar.

use std::io::{self, Write};

use crate::style::Tint;

/// A labelled progress bar.
///
/// The fields are plain data. Degenerate states are tolerated rather than
/// rejected: a `maximum` of zero is treated as 1, and `current` is clamped
/// into `0..=maximum` whenever the bar is read, so a bar never renders
/// outside its box.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    /// Label written before the bar.
    pub label: String,
    /// Current progress value.
    pub current: u32,
    /// Upper bound of the bar.
    pub maximum: u32,
    /// Bar body width in characters.
    pub width: usize,
    /// Tint applied to the bar body.
    pub tint: Tint,
}

impl ProgressBar {
    /// A bar from 0 to `maximum` with the usual defaults: labelled
    /// "Progress", 20 characters wide, tinted green.
    pub fn new(maximum: u32) -> Self {
        Self {
            label: "Progress".to_string(),
            current: 0,
            maximum,
            width: 20,
            tint: Tint::Green,
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the bar body width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the bar body tint.
    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    fn ceiling(&self) -> u32 {
        self.maximum.max(1)
    }

    fn clamped(&self) -> u32 {
        self.current.min(self.ceiling())
    }

    /// Fraction of the bar that is filled (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        f64::from(self.clamped()) / f64::from(self.ceiling())
    }

    /// Returns true once the bar has reached its maximum.
    pub fn is_complete(&self) -> bool {
        self.clamped() >= self.ceiling()
    }

    /// Set the current value.
    pub fn set(&mut self, value: u32) {
        self.current = value;
    }

    /// Move the current value by a signed delta, saturating at the bounds.
    pub fn advance(&mut self, delta: i32) {
        self.current = if delta >= 0 {
            self.current
                .saturating_add(delta.unsigned_abs())
                .min(self.ceiling())
        } else {
            self.current.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Render the bar as a single line, without the leading carriage
    /// return: `Progress: |█████-----| 50% (5/10)`.
    pub fn render(&self) -> String {
        let maximum = self.ceiling();
        let current = self.clamped();
        let fraction = self.fraction();
        let filled = (self.width as f64 * fraction) as usize;
        let body = "█".repeat(filled) + &"-".repeat(self.width - filled);
        let percent = (fraction * 100.0) as u32;
        format!(
            "{}: |{}| {percent}% ({current}/{maximum})",
            self.label,
            self.tint.apply(&body)
        )
    }

    /// Redraw the bar in place with a carriage return, adding the final
    /// newline once the bar is complete.
    pub fn draw<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "\r{}", self.render())?;
        w.flush()?;
        if self.is_complete() {
            writeln!(w)?;
        }
        Ok(())
    }
}
