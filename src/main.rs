use anyhow::{bail, Context, Result};
use clap::Parser;

use ttk_edit::cli::CliArgs;
use ttk_edit::update::update;
use ttk_edit::{Cmd, EditorConfig, FileMsg, FileSlot, Msg, Session};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    ttk_edit::tracing::init();

    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let mut session = Session::new(EditorConfig::load());

    for (slot, path) in &startup.files {
        let msg = Msg::File {
            slot: *slot,
            msg: FileMsg::Open(path.clone()),
        };
        check(update(&mut session, msg))
            .with_context(|| format!("opening {} file {}", slot, path.display()))?;
        report(&session, *slot);
    }

    let mut applied = 0;
    for edit in &startup.edits {
        let msg = Msg::player(FileMsg::SetCell {
            row: edit.row,
            col: edit.col,
            value: edit.value.clone(),
        });
        if !update(&mut session, msg).is_some_and(|cmd| cmd.needs_redraw()) {
            let player = session.file(FileSlot::Player);
            bail!(
                "rejected edit {}:{}={} ({} frames, {})",
                edit.row,
                edit.col,
                edit.value,
                player.row_count(),
                player.centering()
            );
        }
        applied += 1;
    }

    if applied > 0 {
        println!("Player: {} edit(s) applied", applied);
    }

    if startup.save {
        check(update(&mut session, Msg::player(FileMsg::Save))).context("saving player file")?;
        println!("Player: saved");
    }

    Ok(())
}

/// Turn an error dialog request into an error
fn check(cmd: Option<Cmd>) -> Result<()> {
    match cmd {
        Some(Cmd::ShowError { title, message }) => bail!("{}: {}", title, message.trim_end()),
        _ => Ok(()),
    }
}

fn report(session: &Session, slot: FileSlot) {
    let file = session.file(slot);
    if let Some(path) = file.path() {
        println!(
            "{}: {} ({} frames, {})",
            slot,
            path.display(),
            file.row_count(),
            file.centering()
        );
    }
}
