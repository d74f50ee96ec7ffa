//! TerminalRenderer: writes framebuffers inline to a terminal.
//!
//! Frames are drawn in place: after the first frame, each draw moves the cursor
//! back up over the previous frame before printing the next one. No alternate
//! screen is used, so the last frame stays visible after exit.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Size of the previously drawn frame, if any.
    last: Option<(u16, u16)>,
    raw_mode: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            raw_mode: false,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Prepare the terminal. `raw` switches stdin to unbuffered, unechoed mode.
    pub fn enter(&mut self, raw: bool) -> Result<()> {
        if raw {
            terminal::enable_raw_mode()?;
            self.raw_mode = true;
        }
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal to the state before [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        Ok(())
    }

    /// Draw a frame over the previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        if let Some((w, h)) = self.last {
            encode_rewind_into(w, h, &mut self.buf)?;
        }
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some((fb.width(), fb.height()));
        Ok(())
    }

    /// Whether a frame is on screen, i.e. the next draw rewinds first.
    pub fn has_drawn(&self) -> bool {
        self.last.is_some()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full frame into `out`: styled rows, each terminated by `"\r\n"`,
/// followed by a color/attribute reset.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(Print("\r\n"))?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode the cursor movement that puts the cursor back on the first cell of a
/// `width x height` frame that was just printed.
pub fn encode_rewind_into(width: u16, height: u16, out: &mut Vec<u8>) -> Result<()> {
    // A zero count would still move one cell on most terminals.
    if height > 0 {
        out.queue(cursor::MoveUp(height))?;
    }
    if width > 0 {
        out.queue(cursor::MoveLeft(width))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    fn strip_ansi(bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        let mut plain = String::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // CSI: ESC [ params final-byte
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for f in chars.by_ref() {
                        if ('@'..='~').contains(&f) {
                            break;
                        }
                    }
                }
                continue;
            }
            plain.push(c);
        }
        plain
    }

    #[test]
    fn frame_rows_end_with_crlf() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        assert_eq!(strip_ansi(&out), "AB\r\nCD\r\n");
    }

    #[test]
    fn style_is_emitted_only_on_change() {
        let fb = FrameBuffer::new(4, 1);
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // One foreground switch for the uniform row.
        assert_eq!(text.matches("38;2;").count(), 1);
    }

    #[test]
    fn rewind_moves_up_and_left_by_frame_size() {
        let mut out = Vec::new();
        encode_rewind_into(10, 5, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[5A\x1b[10D");
    }

    #[test]
    fn second_draw_rewinds_over_first() {
        let fb = FrameBuffer::new(3, 2);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&fb).unwrap();
        assert!(renderer.has_drawn());
        let first_len = renderer.get_ref().len();

        renderer.draw(&fb).unwrap();
        let out = renderer.into_inner();
        let second = String::from_utf8_lossy(&out[first_len..]).into_owned();
        assert!(second.starts_with("\x1b[2A\x1b[3D"));
        assert!(!String::from_utf8_lossy(&out[..first_len]).contains("\x1b[2A"));
    }
}
