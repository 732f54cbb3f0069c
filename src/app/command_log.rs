//! Verlauf der ausgeführten Commands (Diagnose, Tests).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    /// Drag-Updates werden zusammengefasst, damit ein langer Drag das Log nicht flutet.
    pub fn record(&mut self, command: &AppCommand) {
        if let (
            AppCommand::UpdatePointDrag { .. },
            Some(AppCommand::UpdatePointDrag { .. }),
        ) = (command, self.entries.last())
        {
            self.entries.pop();
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn consecutive_drag_updates_are_collapsed() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::BeginPointDrag { index: 1 });
        log.record(&AppCommand::UpdatePointDrag {
            pos: Vec2::new(0.1, 0.2),
        });
        log.record(&AppCommand::UpdatePointDrag {
            pos: Vec2::new(0.3, 0.4),
        });
        log.record(&AppCommand::CommitPointDrag);

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.entries()[1],
            AppCommand::UpdatePointDrag {
                pos: Vec2::new(0.3, 0.4)
            }
        );
    }

    #[test]
    fn log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..=CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::Undo);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert!(!log.is_empty());
    }
}
