use std::{
    io,
    sync::mpsc::{SyncSender, TrySendError},
};

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tetro_engine::Command;

/// Maps a key press to a game command.
///
/// Arrow keys, `wasd` and `hjkl` move and rotate; `Esc`, `q` and Ctrl-C quit.
/// Releases and repeats are ignored so a held rotate key yields one command.
pub(crate) fn command_for_key(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let command = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Left | KeyCode::Char('a' | 'h') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('d' | 'l') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('s' | 'j') => Command::SoftDrop,
        KeyCode::Up | KeyCode::Char('w' | 'k') => Command::RotateCw,
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Reads terminal events until the receiving side hangs up.
///
/// Commands that find the channel full are dropped.
pub(crate) fn forward_keys(commands: &SyncSender<Command>) -> io::Result<()> {
    loop {
        let Some(command) = event::read()?
            .as_key_event()
            .and_then(|key| command_for_key(&key))
        else {
            continue;
        };
        match commands.try_send(command) {
            Ok(()) | Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let cases = [
            (KeyCode::Left, Command::MoveLeft),
            (KeyCode::Right, Command::MoveRight),
            (KeyCode::Down, Command::SoftDrop),
            (KeyCode::Up, Command::RotateCw),
        ];
        for (code, command) in cases {
            assert_eq!(command_for_key(&KeyEvent::from(code)), Some(command), "{code:?}");
        }
    }

    #[test]
    fn test_letter_keys_match_arrows() {
        for (wasd, hjkl, arrow) in [('a', 'h', KeyCode::Left), ('w', 'k', KeyCode::Up)] {
            let expected = command_for_key(&KeyEvent::from(arrow));
            assert_eq!(command_for_key(&KeyEvent::from(KeyCode::Char(wasd))), expected);
            assert_eq!(command_for_key(&KeyEvent::from(KeyCode::Char(hjkl))), expected);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for_key(&KeyEvent::from(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for_key(&KeyEvent::from(KeyCode::Char('q'))), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&ctrl_c), Some(Command::Quit));
        assert_eq!(command_for_key(&KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, kind);
            assert_eq!(command_for_key(&event), None, "{kind:?}");
        }
    }
}
