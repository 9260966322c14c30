mod cli;
mod logging;
mod script;

use anyhow::Context;
use clap::Parser;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = cli::CliArgs::parse();
    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();

            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;

            buf
        }
    };

    let mut commands = script::parse(&source)?;

    if commands.last() != Some(&script::Command::Print) {
        commands.push(script::Command::Print);
    }

    let mut editor = editor_core::Editor::with_options(args.text.clone(), args.editor_options());
    let stdout = std::io::stdout();

    script::run(&mut editor, &commands, &mut stdout.lock())?;

    tracing::info!(
        len = editor.len(),
        pieces = editor.piece_count(),
        history = editor.history_len(),
        "script finished"
    );

    Ok(())
}
