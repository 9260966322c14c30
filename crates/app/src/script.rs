//! Line-oriented edit scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! insert 10 English\s
//! delete 1 20
//! undo
//! redo
//! print
//! ```
//!
//! Everything after the position of an `insert` (one space in) is the text;
//! `\n`, `\t`, `\s` (space) and `\\` are unescaped.

use anyhow::{Context, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { position: usize, text: String },
    Delete { offset: usize, length: usize },
    Undo,
    Redo,
    Print,
}

/// Parses one script line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_start();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    let command = match verb {
        "insert" => {
            let (position, text) = rest.split_once(' ').unwrap_or((rest, ""));

            Command::Insert {
                position: parse_number(position, "position")?,
                text: unescape(text)?,
            }
        }
        "delete" => {
            let mut args = rest.split_whitespace();
            let offset = parse_number(args.next().unwrap_or(""), "offset")?;
            let length = parse_number(args.next().unwrap_or(""), "length")?;

            if let Some(extra) = args.next() {
                bail!("unexpected argument `{extra}` to delete");
            }

            Command::Delete { offset, length }
        }
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "print" => Command::Print,
        other => bail!("unknown command `{other}`"),
    };

    Ok(Some(command))
}

/// Parses a whole script, attaching the 1-based line number to any error.
pub fn parse(source: &str) -> anyhow::Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", idx + 1))? {
            commands.push(command);
        }
    }

    Ok(commands)
}

/// Applies `commands` in order, writing the document on every `print`.
pub fn run(
    editor: &mut editor_core::Editor,
    commands: &[Command],
    out: &mut impl std::io::Write,
) -> anyhow::Result<()> {
    for command in commands {
        tracing::debug!(?command, "applying");

        match command {
            Command::Insert { position, text } => {
                editor.insert(*position, text);
            }
            Command::Delete { offset, length } => {
                editor.delete(*offset, *length);
            }
            Command::Undo => {
                editor.undo();
            }
            Command::Redo => {
                editor.redo();
            }
            Command::Print => writeln!(out, "{}", editor.try_text()?)?,
        }
    }

    Ok(())
}

fn parse_number(raw: &str, what: &str) -> anyhow::Result<usize> {
    raw.parse()
        .with_context(|| format!("invalid {what} `{raw}`"))
}

fn unescape(raw: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);

            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('\\') => out.push('\\'),
            Some(other) => bail!("unknown escape `\\{other}`"),
            None => bail!("dangling `\\` at end of text"),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let commands = parse(
            "# setup\n\ninsert 10 English\\s\ndelete 1 20\nundo\nredo\nprint\n",
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                Command::Insert {
                    position: 10,
                    text: "English ".to_string()
                },
                Command::Delete {
                    offset: 1,
                    length: 20
                },
                Command::Undo,
                Command::Redo,
                Command::Print,
            ]
        );
    }

    #[test]
    fn insert_keeps_inner_spaces() {
        assert_eq!(
            parse_line("insert 0 This is ").unwrap(),
            Some(Command::Insert {
                position: 0,
                text: "This is ".to_string()
            })
        );
    }

    #[test]
    fn errors_carry_line_number() {
        let err = parse("undo\ndelete x 3\n").unwrap_err();

        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{err:#}").contains("invalid offset `x`"));
    }

    #[test]
    fn rejects_unknown_command_and_escape() {
        assert!(parse_line("paste 3").is_err());
        assert!(parse_line("insert 0 bad\\q").is_err());
        assert!(parse_line("delete 1 2 3").is_err());
    }

    #[test]
    fn run_prints_document() {
        let mut editor = editor_core::Editor::new("A span of text");
        let commands = parse("insert 10 English\\s\nprint\ninsert 0 This is \nundo\nprint\n").unwrap();
        let mut out = Vec::new();

        run(&mut editor, &commands, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A span of English text\nA span of English text\n"
        );
    }
}
