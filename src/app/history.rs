use crate::core::CurvePoints;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Die Steuerpunkt-Liste ist klein, daher genügt ein vollständiger Klon.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Committete Steuerpunkte zum Zeitpunkt des Snapshots
    pub curve: CurvePoints,
}

impl Snapshot {
    /// Erstellt einen Snapshot der committeten Liste.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            curve: state.curve.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.curve = self.curve;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge werden verworfen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            let excess = stack.len().saturating_sub(max_depth);
            stack.drain(..excess);
        }
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
