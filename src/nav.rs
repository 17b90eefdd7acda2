//! Focus and selection state machine for the two panes.
//!
//! The navigator owns everything the panes display: the favorites, the details
//! table, and which pane has focus. Input arrives as [`NavEvent`]s one at a
//! time; no event can fail. Problems such as an unknown favorite or an
//! unreadable directory become indicator rows in the table.

use std::path::{Path, PathBuf};

use crate::favorites::FavoritesRegistry;
use crate::listing::{FileSystem, LocalFs};
use crate::table::{project, TableModel, INVALID_FAVORITE};

/// The pane that receives navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Favorites,
    Details,
}

/// Which favorite is selected and which pane has focus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub selected_favorite: Option<String>,
    pub focused_pane: Pane,
}

/// Input events understood by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// The favorites list highlight moved to `label`.
    FavoriteHighlighted(String),
    /// The details highlight moved to table row `row`.
    RowHighlighted(usize),
    /// Enter: focus the details pane, or confirm the highlighted row.
    Confirmed,
    /// Escape: return focus to the favorites pane.
    CancelRequested,
    /// Re-read the selected favorite's directory.
    Refresh,
}

/// Output produced by a transition, for whoever acts on selected items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutput {
    /// A details row was confirmed.
    ItemSelected {
        /// First column of the row, without padding
        name: String,
        /// Full path of the entry
        path: PathBuf,
    },
}

/// The navigation state machine.
pub struct Navigator<F = LocalFs> {
    registry: FavoritesRegistry,
    fs: F,
    state: NavigationState,
    table: TableModel,
    highlighted_row: Option<usize>,
}

impl<F: FileSystem> Navigator<F> {
    /// Start with the favorites pane focused, nothing selected and an empty table.
    pub fn new(registry: FavoritesRegistry, fs: F) -> Self {
        Self {
            registry,
            fs,
            state: NavigationState::default(),
            table: TableModel::empty(),
            highlighted_row: None,
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: NavEvent) -> Option<NavOutput> {
        match event {
            NavEvent::FavoriteHighlighted(label) => {
                self.highlight_favorite(label);
                None
            }
            NavEvent::RowHighlighted(row) => {
                if self.table.is_selectable(row) {
                    self.highlighted_row = Some(row);
                }
                None
            }
            NavEvent::Confirmed => match self.state.focused_pane {
                Pane::Favorites => {
                    self.state.focused_pane = Pane::Details;
                    None
                }
                Pane::Details => self.confirm_row(),
            },
            NavEvent::CancelRequested => {
                self.state.focused_pane = Pane::Favorites;
                None
            }
            NavEvent::Refresh => {
                if let Some(path) = self.selected_path().map(Path::to_path_buf) {
                    let previous = self.highlighted_row;
                    let table = project(&self.fs, &path);
                    self.replace_table(table);
                    if let Some(row) = previous.filter(|&row| self.table.is_selectable(row)) {
                        self.highlighted_row = Some(row);
                    }
                }
                None
            }
        }
    }

    fn highlight_favorite(&mut self, label: String) {
        match self.registry.lookup(&label).map(Path::to_path_buf) {
            Some(path) => {
                log::debug!("favorite {:?} -> {}", label, path.display());
                let table = project(&self.fs, &path);
                self.replace_table(table);
                self.state.selected_favorite = Some(label);
            }
            None => {
                log::warn!("unknown favorite {:?}", label);
                self.replace_table(TableModel::indicator(INVALID_FAVORITE));
                self.state.selected_favorite = None;
            }
        }
    }

    fn confirm_row(&self) -> Option<NavOutput> {
        let row = self.table.row(self.highlighted_row?)?;
        if !row.is_selectable() {
            return None;
        }

        let name = row.first_cell_trimmed()?.to_string();
        let entry_name = row.entry_name.as_deref().unwrap_or(name.as_str());
        let path = self.selected_path()?.join(entry_name);

        Some(NavOutput::ItemSelected { name, path })
    }

    fn replace_table(&mut self, table: TableModel) {
        self.highlighted_row = table.first_selectable();
        self.table = table;
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn focused_pane(&self) -> Pane {
        self.state.focused_pane
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }

    /// The highlighted details row, as an index into [`Navigator::table`].
    pub fn highlighted_row(&self) -> Option<usize> {
        self.highlighted_row
    }

    pub fn registry(&self) -> &FavoritesRegistry {
        &self.registry
    }

    /// Directory of the selected favorite.
    pub fn selected_path(&self) -> Option<&Path> {
        self.state
            .selected_favorite
            .as_deref()
            .and_then(|label| self.registry.lookup(label))
    }
}
