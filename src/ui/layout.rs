//! Screen layout: turns a [`Screen`] into positioned text lines.
//!
//! Lines are placed top-down like a text cursor.  Anything wider than
//! the panel is word-wrapped; a word longer than a full line is split.
//! Nothing here touches the panel, so every frame can be checked on
//! the host before `display` draws it.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::quiz::catalog;
use crate::ui::Screen;
use heapless::Vec;

/// Most lines a frame can hold (8 rows of small text on 64 px).
pub const MAX_LINES: usize = 8;

/// Glyph size of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 5×8 cell, 25 columns.
    Small,
    /// 10×20 cell, 12 columns.
    Large,
}

impl TextSize {
    /// Character cell (width, height) in pixels.
    pub const fn cell(self) -> (u32, u32) {
        match self {
            TextSize::Small => (5, 8),
            TextSize::Large => (10, 20),
        }
    }

    /// Characters per display row.
    pub const fn columns(self) -> usize {
        (DISPLAY_WIDTH / self.cell().0) as usize
    }

    const fn line_height(self) -> i32 {
        self.cell().1 as i32
    }
}

/// One line of text, top-left anchored at `(0, top)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: &'static str,
    pub top: i32,
    pub size: TextSize,
}

/// A complete screen's worth of lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<Line, MAX_LINES>,
}

impl Frame {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Lay out `screen`.
pub fn frame(screen: Screen) -> Frame {
    let mut cursor = Cursor::default();

    match screen {
        Screen::Welcome => {
            cursor.println("Hogwarts House", TextSize::Small);
            cursor.println("Sorting Quiz", TextSize::Small);
            cursor.blank(TextSize::Small);
            cursor.println("Press any button", TextSize::Small);
            cursor.println("to begin", TextSize::Small);
        }
        Screen::Question(index) => {
            if let Some(question) = catalog::question(index) {
                cursor.println(question.prompt, TextSize::Small);
                cursor.blank(TextSize::Small);
                for option in question.options {
                    cursor.println(option, TextSize::Small);
                }
            }
        }
        Screen::Result(category) => {
            cursor.println("The Sorting Hat says:", TextSize::Small);
            cursor.blank(TextSize::Small);
            cursor.println(category.name(), TextSize::Large);
            cursor.blank(TextSize::Small);
            cursor.println("Press any button", TextSize::Small);
            cursor.println("to restart", TextSize::Small);
        }
    }

    cursor.frame
}

#[derive(Default)]
struct Cursor {
    frame: Frame,
    y: i32,
}

impl Cursor {
    fn println(&mut self, text: &'static str, size: TextSize) {
        for chunk in wrap(text, size.columns()) {
            // Past the bottom edge: clipped, same as the panel would.
            if self.y + size.line_height() > DISPLAY_HEIGHT as i32 {
                return;
            }
            let _ = self.frame.lines.push(Line {
                text: chunk,
                top: self.y,
                size,
            });
            self.y += size.line_height();
        }
    }

    fn blank(&mut self, size: TextSize) {
        self.y += size.line_height();
    }
}

/// Split `text` into display rows of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Wrap<'_> {
    Wrap {
        rest: text,
        width: width.max(1),
    }
}

/// Iterator returned by [`wrap`].
pub struct Wrap<'a> {
    rest: &'a str,
    width: usize,
}

impl<'a> Iterator for Wrap<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(' ');
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        // Byte offset of the first character that no longer fits.
        let limit = match rest.char_indices().nth(self.width) {
            Some((i, _)) => i,
            None => {
                self.rest = "";
                return Some(rest);
            }
        };

        let head = &rest[..limit];
        if rest[limit..].starts_with(' ') {
            self.rest = &rest[limit..];
            return Some(head.trim_end());
        }

        match head.rfind(' ') {
            Some(space) => {
                self.rest = &rest[space..];
                Some(head[..space].trim_end())
            }
            None => {
                self.rest = &rest[limit..];
                Some(head)
            }
        }
    }
}
