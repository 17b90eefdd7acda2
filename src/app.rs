use std::path::Path;

use crate::favorites::FavoritesRegistry;
use crate::listing::LocalFs;
use crate::nav::{NavEvent, NavOutput, Navigator, Pane};
use crate::ui::{ColorScheme, Command, InputMode};

/// One-line message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Application state
pub struct App {
    pub navigator: Navigator<LocalFs>,

    // View state
    pub favorite_index: usize,
    /// First visible row of the details table body.
    pub details_offset: usize,
    pub input_mode: InputMode,
    pub color_scheme: ColorScheme,
    pub status: Option<StatusMessage>,

    /// Hand confirmed items to the system opener.
    pub open_items: bool,
    pub should_quit: bool,
}

impl App {
    /// Create the app and highlight the first favorite.
    pub fn new(registry: FavoritesRegistry, color_scheme: ColorScheme, open_items: bool) -> Self {
        let mut app = Self {
            navigator: Navigator::new(registry, LocalFs),
            favorite_index: 0,
            details_offset: 0,
            input_mode: InputMode::Normal,
            color_scheme,
            status: None,
            open_items,
            should_quit: false,
        };
        app.highlight_favorite(0);
        app
    }

    pub fn handle_command(&mut self, cmd: Command) {
        if cmd != Command::Noop {
            self.status = None;
        }

        match cmd {
            Command::Quit => self.should_quit = true,
            Command::ShowHelp => self.input_mode = InputMode::Help,
            Command::HideHelp => self.input_mode = InputMode::Normal,
            Command::MoveUp | Command::MoveDown | Command::GotoTop | Command::GotoBottom => {
                match self.navigator.focused_pane() {
                    Pane::Favorites => self.move_favorite(cmd),
                    Pane::Details => self.move_row(cmd),
                }
            }
            Command::Confirm => self.dispatch(NavEvent::Confirmed),
            Command::Cancel => self.dispatch(NavEvent::CancelRequested),
            Command::Refresh => {
                self.dispatch(NavEvent::Refresh);
                if let Some(label) = &self.navigator.state().selected_favorite {
                    self.status = Some(if self.navigator.table().has_indicator() {
                        StatusMessage::error(format!("Refresh failed for {}", label))
                    } else {
                        StatusMessage::info(format!("Refreshed {}", label))
                    });
                }
            }
            Command::Noop => {}
        }
    }

    fn move_favorite(&mut self, cmd: Command) {
        let last = self.navigator.registry().len().saturating_sub(1);
        let index = match cmd {
            Command::MoveUp => self.favorite_index.saturating_sub(1),
            Command::MoveDown => (self.favorite_index + 1).min(last),
            Command::GotoTop => 0,
            Command::GotoBottom => last,
            _ => return,
        };

        if index != self.favorite_index {
            self.highlight_favorite(index);
        }
    }

    fn move_row(&mut self, cmd: Command) {
        let table = self.navigator.table();
        let current = self.navigator.highlighted_row();
        let target = match (cmd, current) {
            (Command::MoveUp, Some(row)) => table.prev_selectable(row),
            (Command::MoveDown, Some(row)) => table.next_selectable(row),
            (Command::GotoTop, _) | (Command::MoveUp | Command::MoveDown, None) => {
                table.first_selectable()
            }
            (Command::GotoBottom, _) => table.last_selectable(),
            _ => None,
        };

        if let Some(row) = target {
            self.dispatch(NavEvent::RowHighlighted(row));
        }
    }

    fn highlight_favorite(&mut self, index: usize) {
        let Some(label) = self.navigator.registry().get(index).map(|e| e.label.clone()) else {
            return;
        };
        self.favorite_index = index;
        self.details_offset = 0;
        self.dispatch(NavEvent::FavoriteHighlighted(label));
    }

    fn dispatch(&mut self, event: NavEvent) {
        if let Some(output) = self.navigator.handle(event) {
            self.report(output);
        }
    }

    fn report(&mut self, output: NavOutput) {
        match output {
            NavOutput::ItemSelected { name, path } => {
                log::info!("selected item: {}", path.display());
                self.status = Some(StatusMessage::info(format!("Selected item: {}", name)));
                if self.open_items {
                    self.open_item(&path);
                }
            }
        }
    }

    fn open_item(&mut self, path: &Path) {
        if let Err(e) = open::that(path) {
            log::warn!("failed to open {}: {}", path.display(), e);
            self.status = Some(StatusMessage::error(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )));
        }
    }
}
