//! Beobachter-Anbindung für Änderungen der committeten Steuerpunkt-Liste.

use crate::core::CurvePoints;

type Observer = Box<dyn FnMut(&CurvePoints)>;

/// Hält höchstens einen Beobachter und ruft ihn synchron nach jedem Commit auf.
#[derive(Default)]
pub struct ChangeNotifier {
    observer: Option<Observer>,
    notifications: u64,
}

impl ChangeNotifier {
    /// Erstellt einen Notifier ohne Beobachter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Beobachter. Ein vorheriger wird ersetzt.
    ///
    /// Die Registrierung selbst löst keine Benachrichtigung aus.
    pub fn set_observer(&mut self, observer: impl FnMut(&CurvePoints) + 'static) {
        if self.observer.is_some() {
            log::debug!("Beobachter ersetzt");
        }
        self.observer = Some(Box::new(observer));
    }

    /// Entfernt den Beobachter.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Übergibt die neue Liste an den Beobachter (falls vorhanden).
    pub fn notify(&mut self, points: &CurvePoints) {
        self.notifications += 1;
        if let Some(observer) = self.observer.as_mut() {
            observer(points);
        }
    }

    /// Anzahl der bisher ausgelösten Benachrichtigungen (auch ohne Beobachter).
    pub fn notification_count(&self) -> u64 {
        self.notifications
    }
}
