//! The editing state machine.
//!
//! A [`Model`] is either browsing (no [`EditSession`]) or editing the selected
//! parameter (an [`EditSession`] is present). [`Model::update`] is the only
//! way it changes once built.

use log::debug;

use crate::catalog::{Catalog, ImageProfile};
use crate::keys::Key;
use crate::parameters::{ParameterInstance, ParameterType, RunFlag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Editing,
}

/// Input delivered to [`Model::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(Key),
    /// An unrecoverable failure of the surrounding session, e.g. terminal I/O.
    Failure(String),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

/// An in-progress edit of the selected parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    buffer: String,
    cursor: usize,
    /// The original value split on the type's separator, for composite types.
    segments: Option<Vec<String>>,
}

impl EditSession {
    fn begin(first: char, segments: Option<Vec<String>>) -> Self {
        let mut session = Self {
            buffer: String::new(),
            cursor: 0,
            segments,
        };
        session.insert(first);
        session
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn segments(&self) -> Option<&[String]> {
        self.segments.as_deref()
    }

    fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.check_cursor();
    }

    fn delete_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        self.check_cursor();
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.check_cursor();
    }

    fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.len());
        self.check_cursor();
    }

    fn check_cursor(&self) {
        debug_assert!(
            self.cursor <= self.buffer.len(),
            "cursor {} outside buffer of length {}",
            self.cursor,
            self.buffer.len()
        );
    }

    /// Reassembles the edited value, replacing only the editable segment of a composite value.
    fn into_value(self, parameter_type: ParameterType) -> String {
        let EditSession {
            buffer, segments, ..
        } = self;

        match (segments, parameter_type.split_separator) {
            (Some(mut segments), Some(separator)) => {
                if let Some(segment) = segments.get_mut(parameter_type.editable_segment_index) {
                    *segment = buffer;
                }
                segments.join(separator)
            }
            _ => buffer,
        }
    }
}

/// Only single-byte characters are editable.
fn is_insertable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    program: String,
    image: String,
    parameters: Vec<ParameterInstance>,
    flags: Vec<RunFlag>,
    selected: usize,
    session: Option<EditSession>,
    terminal_error: Option<String>,
}

impl Model {
    /// Builds the initial model for `image` from the catalog entry for it.
    pub fn new(catalog: &Catalog, image: &str) -> Self {
        Self::from_profile(&catalog.program, image, catalog.profile(image))
    }

    pub fn from_profile(program: &str, image: &str, profile: ImageProfile) -> Self {
        let mut parameters = profile.parameters;
        for param in &mut parameters {
            param.value.clear();
        }

        Self {
            program: program.to_string(),
            image: image.to_string(),
            parameters,
            flags: profile.flags,
            selected: 0,
            session: None,
            terminal_error: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn parameters(&self) -> &[ParameterInstance] {
        &self.parameters
    }

    pub fn flags(&self) -> &[RunFlag] {
        &self.flags
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn terminal_error(&self) -> Option<&str> {
        self.terminal_error.as_deref()
    }

    pub fn mode(&self) -> Mode {
        if self.session.is_some() {
            Mode::Editing
        } else {
            Mode::Browsing
        }
    }

    pub fn update(&mut self, message: Message) -> Transition {
        match message {
            Message::Failure(reason) => {
                self.terminal_error = Some(reason);
                Transition::Quit
            }
            Message::Key(key) => match self.session {
                Some(_) => self.update_editing(key),
                None => self.update_browsing(key),
            },
        }
    }

    fn update_browsing(&mut self, key: Key) -> Transition {
        match key {
            Key::Esc | Key::Interrupt | Key::Enter => return Transition::Quit,
            Key::Left | Key::Up | Key::BackTab => self.select_previous(),
            Key::Right | Key::Down | Key::Tab => self.select_next(),
            Key::Char(c) if c.is_ascii_alphanumeric() => self.begin_edit(c),
            _ => {}
        }
        Transition::Continue
    }

    fn update_editing(&mut self, key: Key) -> Transition {
        match key {
            Key::Enter => self.commit_edit(),
            Key::Tab => {
                self.commit_edit();
                self.select_next();
            }
            Key::Esc => self.cancel_edit(),
            Key::Interrupt => {
                self.cancel_edit();
                return Transition::Quit;
            }
            _ => {
                if let Some(session) = self.session.as_mut() {
                    match key {
                        Key::Backspace => session.delete_left(),
                        Key::Left => session.move_left(),
                        Key::Right => session.move_right(),
                        Key::Char(c) if is_insertable(c) => session.insert(c),
                        _ => {}
                    }
                }
            }
        }
        Transition::Continue
    }

    fn select_previous(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.parameters.len() - 1
        } else {
            self.selected - 1
        };
    }

    fn select_next(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.parameters.len();
    }

    fn begin_edit(&mut self, first: char) {
        let Some(param) = self.parameters.get(self.selected) else {
            return;
        };

        // Composite values split the concrete value, so a defaulted slot uses its first candidate
        let segments = param.parameter_type().split(param.effective_value());
        debug!("Editing {} starting with `{first}`", param.kind);
        self.session = Some(EditSession::begin(first, segments));
    }

    fn commit_edit(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let Some(param) = self.parameters.get_mut(self.selected) else {
            return;
        };

        let mut value = session.into_value(param.parameter_type());
        if value.is_empty() {
            value = param.default_value().to_string();
        }

        debug!("Committed {} = `{value}`", param.kind);
        param.value = value;
    }

    fn cancel_edit(&mut self) {
        if self.session.take().is_some() {
            debug!("Edit cancelled");
        }
    }
}
