//! Input handling for the favdir TUI.
//!
//! Keys are mapped to pane-independent [`Command`]s; the app decides what a
//! command means for the pane that currently has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The current input mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Browsing favorites and directory contents.
    #[default]
    Normal,
    /// Help overlay showing all keyboard shortcuts.
    Help,
}

/// Commands that can be issued by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the highlight up in the focused pane.
    MoveUp,
    /// Move the highlight down in the focused pane.
    MoveDown,
    /// Jump to the first item of the focused pane.
    GotoTop,
    /// Jump to the last item of the focused pane.
    GotoBottom,
    /// Focus the details pane, or confirm the highlighted entry.
    Confirm,
    /// Return focus to the favorites pane.
    Cancel,
    /// Re-read the selected directory.
    Refresh,
    /// Show help screen.
    ShowHelp,
    /// Hide help screen.
    HideHelp,
    /// Quit the application.
    Quit,
    /// No operation - key was not recognized or not applicable.
    Noop,
}

/// Handle a key event and return the corresponding command.
///
/// Ctrl-C quits from any mode.
pub fn handle_key(key: KeyEvent, mode: InputMode) -> Command {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Command::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Help => Command::HideHelp,
    }
}

fn handle_normal_mode(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Command::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Command::MoveDown,

        KeyCode::Char('g') | KeyCode::Home => Command::GotoTop,
        KeyCode::Char('G') | KeyCode::End => Command::GotoBottom,

        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => Command::Confirm,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Esc => Command::Cancel,

        KeyCode::Char('r') => Command::Refresh,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('q') => Command::Quit,

        _ => Command::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_normal_mode_navigation() {
        let mode = InputMode::Normal;

        assert_eq!(handle_key(key_event(KeyCode::Char('k')), mode), Command::MoveUp);
        assert_eq!(handle_key(key_event(KeyCode::Up), mode), Command::MoveUp);
        assert_eq!(handle_key(key_event(KeyCode::Char('j')), mode), Command::MoveDown);
        assert_eq!(handle_key(key_event(KeyCode::Down), mode), Command::MoveDown);

        assert_eq!(handle_key(key_event(KeyCode::Char('g')), mode), Command::GotoTop);
        assert_eq!(handle_key(key_event(KeyCode::Home), mode), Command::GotoTop);
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), mode),
            Command::GotoBottom
        );
        assert_eq!(handle_key(key_event(KeyCode::End), mode), Command::GotoBottom);
    }

    #[test]
    fn test_confirm_and_cancel() {
        let mode = InputMode::Normal;

        assert_eq!(handle_key(key_event(KeyCode::Enter), mode), Command::Confirm);
        assert_eq!(handle_key(key_event(KeyCode::Right), mode), Command::Confirm);
        assert_eq!(handle_key(key_event(KeyCode::Char('l')), mode), Command::Confirm);

        assert_eq!(handle_key(key_event(KeyCode::Esc), mode), Command::Cancel);
        assert_eq!(handle_key(key_event(KeyCode::Left), mode), Command::Cancel);
        assert_eq!(handle_key(key_event(KeyCode::Char('h')), mode), Command::Cancel);
    }

    #[test]
    fn test_normal_mode_actions() {
        let mode = InputMode::Normal;

        assert_eq!(handle_key(key_event(KeyCode::Char('r')), mode), Command::Refresh);
        assert_eq!(handle_key(key_event(KeyCode::Char('?')), mode), Command::ShowHelp);
        assert_eq!(handle_key(key_event(KeyCode::Char('q')), mode), Command::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, InputMode::Normal), Command::Quit);
        assert_eq!(handle_key(ctrl_c, InputMode::Help), Command::Quit);
    }

    #[test]
    fn test_help_mode_closes_on_any_key() {
        assert_eq!(handle_key(key_event(KeyCode::Char('x')), InputMode::Help), Command::HideHelp);
        assert_eq!(handle_key(key_event(KeyCode::Esc), InputMode::Help), Command::HideHelp);
    }

    #[test]
    fn test_unrecognized_keys() {
        let mode = InputMode::Normal;
        assert_eq!(handle_key(key_event(KeyCode::F(1)), mode), Command::Noop);
        assert_eq!(handle_key(key_event(KeyCode::Char('c')), mode), Command::Noop);
    }
}
