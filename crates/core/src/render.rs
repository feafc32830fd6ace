//! Rendering the model into the text shown on screen.
//!
//! [`render`] is pure: it reads the model and returns a string, the caller
//! decides how to put it on the terminal.

use itertools::Itertools;

use crate::colors::Theme;
use crate::config::WRAP_WIDTH;
use crate::model::{EditSession, Mode, Model};
use crate::parameters::ParameterInstance;

const BROWSING_LEGEND: &str = "↑/↓/←/→: Navigate | Tab: Next | Type: Edit | Enter: Accept | Esc: Quit";
const EDITING_LEGEND: &str = "Enter: Confirm | Tab: Confirm and Next | Esc: Cancel";

/// One whitespace-separated piece of the command, with and without styling.
struct Token {
    plain: String,
    styled: String,
}

impl Token {
    fn new(plain: String, styled: String) -> Self {
        Self { plain, styled }
    }

    fn dim(text: &str, theme: &Theme) -> Self {
        Self::new(text.to_string(), theme.dim(text))
    }
}

/// Renders the command preview followed by the key legend for the current mode.
///
/// A stored terminal error replaces everything else.
pub fn render(model: &Model, theme: &Theme) -> String {
    if let Some(error) = model.terminal_error() {
        return format!("{}\n", theme.error(error));
    }

    let mut tokens = vec![Token::dim(model.program(), theme)];
    tokens.extend(model.flags().iter().map(|flag| Token::dim(flag.token(), theme)));
    tokens.extend(
        model
            .parameters()
            .iter()
            .enumerate()
            .map(|(index, param)| render_parameter(model, index, param, theme)),
    );
    tokens.push(Token::dim(model.image(), theme));

    let legend = match model.mode() {
        Mode::Browsing => BROWSING_LEGEND,
        Mode::Editing => EDITING_LEGEND,
    };

    format!("{}\n\n{}", assemble(&tokens, theme), theme.dim(legend))
}

/// Joins tokens with spaces, or with line continuations once the line is too wide.
fn assemble(tokens: &[Token], theme: &Theme) -> String {
    let width = tokens.iter().map(|token| token.plain.len()).sum::<usize>()
        + tokens.len().saturating_sub(1);

    let separator = if width > WRAP_WIDTH {
        format!("{}\n    ", theme.dim(" \\"))
    } else {
        " ".to_string()
    };

    tokens.iter().map(|token| token.styled.as_str()).join(&separator)
}

fn render_parameter(model: &Model, index: usize, param: &ParameterInstance, theme: &Theme) -> Token {
    let text = format!("{} {}", param.kind.flag(), param.effective_value());

    if index == model.selected() {
        if let Some(session) = model.session() {
            return render_edit(param, session, theme);
        }
        let styled = theme.highlight(&text);
        return Token::new(text, styled);
    }

    if param.is_edited() {
        let styled = theme.modified(&text);
        return Token::new(text, styled);
    }

    Token::new(text.clone(), text)
}

/// The selected parameter while editing: fixed segments dimmed, the cursor cell inverted.
fn render_edit(param: &ParameterInstance, session: &EditSession, theme: &Theme) -> Token {
    let parameter_type = param.parameter_type();
    let flag = parameter_type.name;

    let (prefix, suffix) = match (session.segments(), parameter_type.split_separator) {
        (Some(segments), Some(separator)) => {
            let editable = parameter_type.editable_segment_index.min(segments.len());
            let prefix = segments[..editable]
                .iter()
                .map(|segment| format!("{segment}{separator}"))
                .collect::<String>();
            let suffix = segments
                .get(editable + 1..)
                .unwrap_or_default()
                .iter()
                .map(|segment| format!("{separator}{segment}"))
                .collect::<String>();
            (prefix, suffix)
        }
        _ => (String::new(), String::new()),
    };

    let buffer = session.buffer();
    let cursor = session.cursor().min(buffer.len());
    let before = &buffer[..cursor];
    let (at, after) = if cursor < buffer.len() {
        (&buffer[cursor..=cursor], &buffer[cursor + 1..])
    } else {
        (" ", "")
    };

    let plain = format!("{flag} {prefix}{before}{at}{after}{suffix}");
    let styled = format!(
        "{flag} {}{}{}{}{}",
        theme.dim(&prefix),
        theme.highlight(before),
        theme.cursor(at),
        theme.highlight(after),
        theme.dim(&suffix)
    );

    Token::new(plain, styled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ImageProfile};
    use crate::keys::Key;
    use crate::model::Message;
    use crate::parameters::{ParameterKind, RunFlag};

    fn model_with(flags: Vec<RunFlag>, parameters: Vec<ParameterInstance>) -> Model {
        Model::from_profile("docker run", "img", ImageProfile { flags, parameters })
    }

    fn press(model: &mut Model, keys: &[Key]) {
        for key in keys {
            model.update(Message::Key(*key));
        }
    }

    fn command_part(rendered: &str) -> &str {
        rendered.split("\n\n").next().unwrap()
    }

    #[test]
    fn test_short_command_on_one_line() {
        let model = model_with(
            vec![RunFlag::Detach],
            vec![ParameterInstance::new(ParameterKind::Name, ["web"])],
        );
        let rendered = render(&model, &Theme::plain());
        assert_eq!(
            rendered,
            format!("docker run --detach --name web img\n\n{BROWSING_LEGEND}")
        );
    }

    #[test]
    fn test_long_command_wraps_with_continuations() {
        let model = Model::new(&Catalog::builtin(), "alpine");
        let rendered = render(&model, &Theme::plain());
        assert_eq!(
            command_part(&rendered),
            "docker run \\\n    --interactive \\\n    --tty \\\n    --name alpine-test \\\n    \
             -p 8080:80 \\\n    --entrypoint /bin/ash \\\n    alpine"
        );
    }

    #[test]
    fn test_wrap_threshold() {
        // "docker run --name " + value + " img" is 22 columns plus the value
        let fits = model_with(
            vec![],
            vec![ParameterInstance::new(ParameterKind::Name, ["n".repeat(58)])],
        );
        assert!(!command_part(&render(&fits, &Theme::plain())).contains('\\'));

        let too_wide = model_with(
            vec![],
            vec![ParameterInstance::new(ParameterKind::Name, ["n".repeat(59)])],
        );
        assert!(command_part(&render(&too_wide, &Theme::plain())).contains(" \\\n    "));
    }

    #[test]
    fn test_wrap_ignores_escape_sequences() {
        let model = model_with(
            vec![RunFlag::Detach],
            vec![ParameterInstance::new(ParameterKind::Name, ["web"])],
        );
        let rendered = render(&model, &Theme::colored());
        assert!(!command_part(&rendered).contains('\n'));
    }

    #[test]
    fn test_editing_shows_cursor_and_fixed_segments() {
        let mut model = model_with(
            vec![],
            vec![ParameterInstance::new(ParameterKind::Env, ["KEY=old"])],
        );
        press(&mut model, &[Key::Char('n'), Key::Char('e'), Key::Char('w'), Key::Left]);

        let rendered = render(&model, &Theme::plain());
        assert_eq!(
            rendered,
            format!("docker run --env KEY=new img\n\n{EDITING_LEGEND}")
        );

        let colored = render(&model, &Theme::colored());
        let theme = Theme::colored();
        assert!(colored.contains(&theme.cursor("w")));
        assert!(colored.contains(&theme.dim("KEY=")));
        assert!(colored.contains(&theme.highlight("ne")));
    }

    #[test]
    fn test_editing_cursor_at_end_is_blank_cell() {
        let mut model = model_with(
            vec![],
            vec![ParameterInstance::new(ParameterKind::Volume, ["/a:/b"])],
        );
        press(&mut model, &[Key::Char('x')]);

        let rendered = render(&model, &Theme::plain());
        assert_eq!(command_part(&rendered), "docker run --volume x :/b img");

        let colored = render(&model, &Theme::colored());
        assert!(colored.contains(&Theme::colored().cursor(" ")));
        assert!(colored.contains(&Theme::colored().dim(":/b")));
    }

    #[test]
    fn test_selected_and_modified_styles() {
        let mut model = model_with(
            vec![],
            vec![
                ParameterInstance::new(ParameterKind::Name, ["web"]),
                ParameterInstance::new(ParameterKind::Entrypoint, ["/bin/sh"]),
            ],
        );
        press(&mut model, &[Key::Char('a'), Key::Enter, Key::Down]);

        let theme = Theme::colored();
        let rendered = render(&model, &theme);
        assert!(rendered.contains(&theme.modified("--name a")));
        assert!(rendered.contains(&theme.highlight("--entrypoint /bin/sh")));
    }

    #[test]
    fn test_unedited_parameter_is_plain() {
        let mut model = model_with(
            vec![],
            vec![
                ParameterInstance::new(ParameterKind::Name, ["web"]),
                ParameterInstance::new(ParameterKind::Entrypoint, ["/bin/sh"]),
            ],
        );
        press(&mut model, &[Key::Down]);

        let rendered = render(&model, &Theme::colored());
        assert!(rendered.contains(" --name web "));
    }

    #[test]
    fn test_no_parameters_renders_bare_invocation() {
        let model = Model::new(&Catalog::builtin(), "busybox");
        let rendered = render(&model, &Theme::plain());
        assert_eq!(command_part(&rendered), "docker run busybox");
    }

    #[test]
    fn test_error_preempts_everything() {
        let mut model = Model::new(&Catalog::builtin(), "alpine");
        model.update(Message::Failure("terminal went away".to_string()));
        assert_eq!(render(&model, &Theme::plain()), "terminal went away\n");
    }
}
