//! Cursor-Darstellung als abgeleiteter Wert (shared zwischen App und UI).

/// Cursor-Hinweis für den Canvas, rein aus dem Hover-Zustand berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorAffordance {
    /// Standard-Cursor des Hosts
    #[default]
    Default,
    /// Mauszeiger über der Linie: Klick fügt einen Punkt ein
    Crosshair,
    /// Mauszeiger über einem Punkt: Punkt kann gezogen werden
    Grab,
}

impl CursorAffordance {
    /// Kurzname für Statusanzeige und Logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Crosshair => "crosshair",
            Self::Grab => "grab",
        }
    }
}
