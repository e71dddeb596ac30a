//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate output for the current
//! input line and display it when the REPL flushes.
use log::info;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::GameStyle;

/// The boundary the engine writes its output through.
///
/// Anything that can show text and images to a player can host the game.
pub trait Presenter {
    /// Emit text without a trailing line break.
    fn print(&mut self, text: &str);
    /// Emit text followed by a line break.
    fn println(&mut self, text: &str);
    /// Surface an image reference. Ignoring it is acceptable.
    fn show_image(&mut self, image: &str);
    /// Told when the session ends (`false`).
    fn set_active(&mut self, active: bool);
}

/// A single piece of output waiting to be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Text(String),
    Line(String),
    Image(String),
    Active(bool),
}

/// View aggregates output produced while interpreting input and then displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub show_images: bool,
    pub items: Vec<ViewItem>,
    active: bool,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            show_images: true,
            items: Vec::new(),
            active: true,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// False once the engine has signalled the end of the session.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Plain text of everything buffered so far, as the player would read it.
    ///
    /// Images appear as `[image: name]` lines; activity changes are not shown.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                ViewItem::Text(text) => out.push_str(text),
                ViewItem::Line(text) => {
                    out.push_str(text);
                    out.push('\n');
                },
                ViewItem::Image(image) => {
                    out.push_str(&format!("[image: {image}]\n"));
                },
                ViewItem::Active(_) => {},
            }
        }
        out
    }

    /// Individual lines of the transcript.
    pub fn lines(&self) -> Vec<String> {
        self.transcript().lines().map(str::to_string).collect()
    }

    /// Display all buffered output on the terminal, then clear the buffer.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in &self.items {
            match item {
                ViewItem::Text(text) => print!("{}", self.styled(text)),
                ViewItem::Line(text) => println!("{}", self.styled(text)),
                ViewItem::Image(image) => {
                    if self.show_images {
                        println!("{}", image.as_str().image_style());
                    }
                },
                ViewItem::Active(active) => {
                    if !active {
                        info!("view received end of session");
                    }
                },
            }
        }
        self.items.clear();
    }

    fn styled(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| {
                let wrapped = fill(line, self.width.max(20));
                if line.starts_with("You are ") {
                    wrapped.as_str().description_style().to_string()
                } else if line.starts_with("Exits:") {
                    wrapped.as_str().exit_style().to_string()
                } else {
                    wrapped
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Presenter for View {
    fn print(&mut self, text: &str) {
        self.push(ViewItem::Text(text.to_string()));
    }

    fn println(&mut self, text: &str) {
        self.push(ViewItem::Line(text.to_string()));
    }

    fn show_image(&mut self, image: &str) {
        self.push(ViewItem::Image(image.to_string()));
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.push(ViewItem::Active(active));
    }
}
