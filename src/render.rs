use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::Board;

pub const TITLE: &str = "Conway's Game of Life";

/// One generation as handed to a renderer.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub generation: u64,
    pub board: &'a Board,
}

/// Sink for rendered generations.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Title line, status line and the glyph grid, one row per line.
pub fn format_frame(frame: &Frame<'_>) -> String {
    let text = frame.board.to_text();
    format!(
        "{TITLE}\nBoard size: {}x{} - Generation: {} - Population: {}\n{text}",
        text.width, text.height, frame.generation, text.population
    )
}

/// Redraws the whole terminal for every frame.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "{}", format_frame(frame))?;
        self.out.flush()
    }
}

/// Keeps every formatted frame.
#[derive(Clone, Debug, Default)]
pub struct MemoryRenderer {
    pub frames: Vec<String>,
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.frames.push(format_frame(frame));
        Ok(())
    }
}
