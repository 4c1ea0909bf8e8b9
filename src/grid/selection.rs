//! Row selection state.
//!
//! Rows are opaque records without identity, so selection holds value
//! snapshots and matches by equality — the same contract the host sees.

use serde_json::Value;

/// Row selection behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Selection disabled.
    #[default]
    None,
    /// At most one selected row; selecting replaces.
    Single,
    /// Click toggles membership in a multi-row selection.
    Multi,
    /// Checkbox semantics: toggling and select-all via header checkbox.
    Checkbox,
}

/// Selected-row set.
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    mode: SelectionMode,
    selected: Vec<Value>,
}

impl RowSelection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Snapshot of the selected rows.
    pub fn selected(&self) -> Vec<Value> {
        self.selected.clone()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, row: &Value) -> bool {
        self.selected.contains(row)
    }

    /// Apply a row-click selection gesture. Returns true when the
    /// selection changed.
    pub fn click(&mut self, row: &Value) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                if self.selected.len() == 1 && self.is_selected(row) {
                    return false;
                }
                self.selected.clear();
                self.selected.push(row.clone());
                true
            }
            SelectionMode::Multi | SelectionMode::Checkbox => {
                if let Some(pos) = self.selected.iter().position(|r| r == row) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(row.clone());
                }
                true
            }
        }
    }

    /// Header select-all toggle over a candidate slice: if every candidate
    /// is already selected, clear; otherwise select exactly the candidates.
    /// Returns true when the selection changed.
    pub fn toggle_all(&mut self, candidates: &[Value]) -> bool {
        if self.mode == SelectionMode::None {
            return false;
        }
        let all_selected = !candidates.is_empty() && self.selected.len() == candidates.len();
        self.selected.clear();
        if !all_selected {
            self.selected.extend(candidates.iter().cloned());
        }
        !candidates.is_empty()
    }

    /// Drop all selections. Returns true when anything was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }
}
