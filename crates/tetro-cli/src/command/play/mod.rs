use std::{
    sync::mpsc::{self, Receiver},
    thread,
};

use tetro_engine::{
    Command, GameSession,
    game_loop::{self, LoopExit},
};

use self::sink::TerminalSink;
use super::ConfigArg;

mod input;
mod sink;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    config: ConfigArg,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = arg.config.resolve()?;
    let (sender, commands) = mpsc::sync_channel(config.input_queue_capacity);
    let session = GameSession::new(config)?;

    // Blocks on terminal input for the rest of the process; a read error
    // drops the sender, which the loop treats as quit.
    thread::spawn(move || input::forward_keys(&sender));

    let exit = ratatui::run(|terminal| -> anyhow::Result<LoopExit> {
        let mut sink = TerminalSink::new(terminal);
        let exit = game_loop::run(session, &commands, &mut sink)?;
        if exit.is_game_over() {
            wait_for_key(&commands);
        }
        Ok(exit)
    })?;

    println!("{}", summary(&exit));
    Ok(())
}

fn summary(exit: &LoopExit) -> String {
    let stats = exit.stats();
    let reason = if exit.is_game_over() { "Game over" } else { "Quit" };
    format!(
        "{reason}: score {}, lines {}, pieces {}",
        stats.score(),
        stats.total_cleared_lines(),
        stats.completed_pieces()
    )
}

/// Discards keys pressed before the game ended, then waits for a fresh one.
fn wait_for_key(commands: &Receiver<Command>) {
    while commands.try_recv().is_ok() {}
    _ = commands.recv();
}
