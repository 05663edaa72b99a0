//! Line-oriented front end that drives a [`Carousel`] over photo paths.
//!
//! Each input line is one [`Command`]. After every command the console
//! re-binds its slots from the carousel window and prints them.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crossbeam_channel::Receiver;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::carousel::{Carousel, SlotBinding};
use crate::error::Error;
use crate::events::PageSelected;

const HELP: &str = "\
commands:
  next | n | >      show the next page
  prev | p | <      show the previous page
  goto N | g N      jump to page N
  tap S | t S       select the page in slot S
  show | s          redraw the current window
  help | h | ?      this text
  quit | q | exit   leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Goto(usize),
    Tap(usize),
    Show,
    Help,
    Quit,
}

impl Command {
    const fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "prev",
            Self::Goto(_) => "goto",
            Self::Tap(_) => "tap",
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn parse_arg(command: &'static str, raw: Option<&str>) -> Result<usize, Error> {
    let raw = raw.unwrap_or_default();
    raw.parse().map_err(|_| Error::InvalidArgument {
        command,
        value: raw.to_string(),
    })
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(Self::Show);
        };
        let verb = verb.to_ascii_lowercase();
        let cmd = match verb.as_str() {
            "next" | "n" | ">" => Self::Next,
            "prev" | "p" | "<" => Self::Previous,
            "goto" | "g" => Self::Goto(parse_arg("goto", parts.next())?),
            "tap" | "t" => Self::Tap(parse_arg("tap", parts.next())?),
            "show" | "s" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(Error::UnknownCommand(verb)),
        };
        if let Some(extra) = parts.next() {
            return Err(Error::InvalidArgument {
                command: cmd.name(),
                value: extra.to_string(),
            });
        }
        Ok(cmd)
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Console {
    carousel: Carousel<PathBuf>,
    show_buttons: bool,
    pages: watch::Receiver<Option<usize>>,
    selections: Receiver<PageSelected<PathBuf>>,
}

impl Console {
    #[must_use]
    pub fn new(mut carousel: Carousel<PathBuf>, hide_navigation_buttons: bool) -> Self {
        let pages = carousel.subscribe_current_index();
        let selections = carousel.subscribe_selections();
        let show_buttons = !hide_navigation_buttons && carousel.scroll_enabled();
        Self {
            carousel,
            show_buttons,
            pages,
            selections,
        }
    }

    #[must_use]
    pub const fn carousel(&self) -> &Carousel<PathBuf> {
        &self.carousel
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    /// Propagates IO errors from `input` or `out`.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.render())?;
        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    Flow::Continue
                }
            };
            out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command and print its result.
    ///
    /// # Errors
    /// Propagates IO errors from `out`.
    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(command = cmd.name(), "executing");
        match cmd {
            Command::Next => self.carousel.move_to_next_page(),
            Command::Previous => self.carousel.move_to_previous_page(),
            Command::Goto(index) => {
                if index >= self.carousel.len() {
                    writeln!(
                        out,
                        "no page {index} (pages 0..{})",
                        self.carousel.len()
                    )?;
                }
                self.carousel.load_page_at(index);
            }
            Command::Tap(slot) => {
                self.tap(slot, out)?;
                return Ok(Flow::Continue);
            }
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        self.sync_page();
        writeln!(out, "{}", self.render())?;
        Ok(Flow::Continue)
    }

    /// One line showing every slot, the current one starred.
    #[must_use]
    pub fn render(&self) -> String {
        let current_slot = self.carousel.window_size() / 2;
        let slots = self
            .carousel
            .bindings()
            .map(|b| render_slot(&b, b.slot == current_slot))
            .collect::<Vec<_>>()
            .join("  ");
        if self.show_buttons {
            format!("<  {slots}  >")
        } else {
            slots
        }
    }

    fn tap(&mut self, slot: usize, out: &mut impl Write) -> io::Result<()> {
        let window = self.carousel.window_size();
        if slot >= window {
            writeln!(out, "error: {}", Error::SlotOutOfRange { slot, window })?;
            return Ok(());
        }
        self.carousel.tap_slot(slot);
        for selected in self.selections.try_iter() {
            info!(index = selected.index, "page selected");
            writeln!(
                out,
                "selected {}: {} (of {})",
                selected.index,
                selected.item().display(),
                selected.items.len()
            )?;
        }
        Ok(())
    }

    fn sync_page(&mut self) {
        if self.pages.has_changed().unwrap_or(false)
            && let Some(index) = *self.pages.borrow_and_update()
        {
            info!(index, "page changed");
        }
    }
}

fn render_slot(binding: &SlotBinding<'_, PathBuf>, current: bool) -> String {
    let label = format!("{}:{}", binding.index, file_label(binding.item));
    if current { format!("*{label}*") } else { label }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
