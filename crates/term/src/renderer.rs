//! TerminalRenderer: flushes text frames to a real terminal.
//!
//! A frame is a list of lines. After the first full redraw only lines that
//! changed since the previous frame are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Vec<String>>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one.
    pub fn draw(&mut self, lines: Vec<String>) -> Result<()> {
        let mut out = Vec::new();
        match self.last.as_deref() {
            Some(prev) if prev.len() == lines.len() => encode_diff_into(prev, &lines, &mut out)?,
            _ => encode_full_into(&lines, &mut out)?,
        }
        self.stdout.write_all(&out)?;
        self.stdout.flush()?;
        self.last = Some(lines);
        Ok(())
    }
}

/// Encode a full redraw into `out`.
pub fn encode_full_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    for (y, line) in lines.iter().enumerate() {
        out.queue(Print(line))?;
        if y + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a redraw of the changed lines into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &[String], next: &[String], out: &mut Vec<u8>) -> Result<()> {
    for y in changed_lines(prev, next) {
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(&next[y]))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }
    Ok(())
}

/// Indices of lines that differ. Lines past the end of `prev` count as changed.
pub fn changed_lines<'a>(prev: &'a [String], next: &'a [String]) -> impl Iterator<Item = usize> + 'a {
    next.iter()
        .enumerate()
        .filter(move |(y, line)| prev.get(*y) != Some(*line))
        .map(|(y, _)| y)
}
