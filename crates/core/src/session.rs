//! The synchronous event loop driving a [`Model`].
//!
//! Keys are read one at a time, applied with [`Model::update`] and the
//! result redrawn before the next key is read. Terminal access sits behind
//! the [`KeySource`] and [`Screen`] traits.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info};

use crate::colors::Theme;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::model::{Message, Model, Transition};
use crate::render::render;

/// How long a single wait for input lasts before cancellation is checked again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub trait KeySource {
    /// Waits up to `timeout` for the next key press, `Ok(None)` if none arrived.
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

pub trait Screen {
    /// Replaces whatever is on screen with `frame`.
    fn draw(&mut self, frame: &str) -> io::Result<()>;
}

/// Runs the session until a quit key, a failure, or cancellation.
///
/// Returns the final model on a clean quit; committing it is up to the caller.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] when `cancel` is set, and [`Error::Session`]
/// when reading keys or drawing fails. In the latter case the failure is
/// stored on the model and drawn before returning.
pub fn run<K, S>(
    mut model: Model,
    keys: &mut K,
    screen: &mut S,
    theme: &Theme,
    cancel: &AtomicBool,
) -> Result<Model>
where
    K: KeySource,
    S: Screen,
{
    loop {
        if let Err(e) = screen.draw(&render(&model, theme)) {
            return fail(model, e, screen, theme);
        }

        let key = loop {
            if cancel.load(Ordering::SeqCst) {
                info!("Session cancelled");
                return Err(Error::Cancelled);
            }

            match keys.next_key(POLL_INTERVAL) {
                Ok(Some(key)) => break key,
                Ok(None) => {}
                Err(e) => return fail(model, e, screen, theme),
            }
        };

        debug!("Key {key:?} in {:?} mode", model.mode());
        if model.update(Message::Key(key)) == Transition::Quit {
            return Ok(model);
        }
    }
}

fn fail<S: Screen>(mut model: Model, error: io::Error, screen: &mut S, theme: &Theme) -> Result<Model> {
    model.update(Message::Failure(error.to_string()));

    if let Err(draw_error) = screen.draw(&render(&model, theme)) {
        debug!("Could not draw the session error: {draw_error}");
    }

    Err(Error::session(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::VecDeque;

    struct ScriptedKeys {
        script: VecDeque<io::Result<Option<Key>>>,
    }

    impl ScriptedKeys {
        fn new(keys: &[Key]) -> Self {
            Self {
                script: keys.iter().map(|key| Ok(Some(*key))).collect(),
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
            self.script
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")))
        }
    }

    /// Never produces a key, raises the cancel flag after a few polls.
    struct CancellingKeys<'a> {
        polls: usize,
        cancel: &'a AtomicBool,
    }

    impl KeySource for CancellingKeys<'_> {
        fn next_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
            self.polls += 1;
            if self.polls == 3 {
                self.cancel.store(true, Ordering::SeqCst);
            }
            Ok(None)
        }
    }

    #[derive(Default)]
    struct RecordingScreen {
        frames: Vec<String>,
        fail_after: Option<usize>,
    }

    impl Screen for RecordingScreen {
        fn draw(&mut self, frame: &str) -> io::Result<()> {
            if self.fail_after.is_some_and(|n| self.frames.len() >= n) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "screen gone"));
            }
            self.frames.push(frame.to_string());
            Ok(())
        }
    }

    fn alpine() -> Model {
        Model::new(&Catalog::builtin(), "alpine")
    }

    #[test]
    fn test_run_until_quit() {
        let mut keys = ScriptedKeys::new(&[Key::Char('a'), Key::Char('b'), Key::Enter, Key::Esc]);
        let mut screen = RecordingScreen::default();
        let cancel = AtomicBool::new(false);

        let model = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel).unwrap();

        assert_eq!(model.parameters()[0].value, "ab");
        assert_eq!(screen.frames.len(), 4);
        assert!(screen.frames[0].contains("--name alpine-test"));
        assert!(screen.frames[3].contains("--name ab"));
    }

    #[test]
    fn test_timeouts_are_skipped() {
        let mut keys = ScriptedKeys {
            script: VecDeque::from(vec![Ok(None), Ok(None), Ok(Some(Key::Down)), Ok(None), Ok(Some(Key::Enter))]),
        };
        let mut screen = RecordingScreen::default();
        let cancel = AtomicBool::new(false);

        let model = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel).unwrap();
        assert_eq!(model.selected(), 1);
        assert_eq!(screen.frames.len(), 2);
    }

    #[test]
    fn test_key_source_failure_is_rendered_and_returned() {
        let mut keys = ScriptedKeys::new(&[Key::Char('a')]);
        let mut screen = RecordingScreen::default();
        let cancel = AtomicBool::new(false);

        let result = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel);

        assert!(matches!(result, Err(Error::Session(ref m)) if m == "script exhausted"));
        assert_eq!(screen.frames.last().unwrap(), "script exhausted\n");
    }

    #[test]
    fn test_screen_failure_is_returned() {
        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Down]);
        let mut screen = RecordingScreen {
            frames: vec![],
            fail_after: Some(1),
        };
        let cancel = AtomicBool::new(false);

        let result = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel);
        assert!(matches!(result, Err(Error::Session(_))));
        assert_eq!(screen.frames.len(), 1);
    }

    #[test]
    fn test_cancel_before_start() {
        let mut keys = ScriptedKeys::new(&[Key::Char('a')]);
        let mut screen = RecordingScreen::default();
        let cancel = AtomicBool::new(true);

        let result = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel);
        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(keys.script.len(), 1);
    }

    #[test]
    fn test_cancel_while_waiting() {
        let cancel = AtomicBool::new(false);
        let mut keys = CancellingKeys {
            polls: 0,
            cancel: &cancel,
        };
        let mut screen = RecordingScreen::default();

        let result = run(alpine(), &mut keys, &mut screen, &Theme::plain(), &cancel);
        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(keys.polls, 3);
    }
}
