//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Viewport ────────────────────────────────────────────────────────

/// Rand um den Bereich [0,1]² in Domain-Einheiten.
pub const VIEWPORT_PADDING: f32 = 0.025;

// ── Steuerpunkte ───────────────────────────────────────────────────

/// Radius der Punkt-Marker in Domain-Einheiten (zugleich Hitbox).
pub const POINT_RADIUS: f32 = 0.025;
/// Vergrößerungsfaktor für den Marker unter dem Mauszeiger.
pub const POINT_HOVER_SCALE: f32 = 1.3;
/// Farbe der Punkt-Marker (RGBA: Grün, 0x2da12d).
pub const POINT_COLOR: [f32; 4] = [0.176, 0.631, 0.176, 1.0];
/// Farbe des Einfüge-Vorschaupunkts auf der Linie.
pub const HOVER_POINT_COLOR: [f32; 4] = [0.176, 0.631, 0.176, 1.0];
/// Farbe des gerade gezogenen Punkts.
pub const DRAG_POINT_COLOR: [f32; 4] = [0.176, 0.631, 0.176, 1.0];

// ── Linie ──────────────────────────────────────────────────────────

/// Sichtbare Linienstärke in Pixeln.
pub const LINE_WIDTH_PX: f32 = 3.0;
/// Breite der unsichtbaren Pick-Linie in Pixeln.
pub const PICK_LINE_WIDTH_PX: f32 = 16.0;
/// Linienfarbe (RGBA: Grün).
pub const LINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// ── Hintergrund ────────────────────────────────────────────────────

/// Hintergrundfarbe des Canvas (0x16161D).
pub const BACKGROUND_COLOR: [f32; 4] = [0.086, 0.086, 0.114, 1.0];
/// Farbe der Interaktionsfläche [0,1]² (RGBA: Magenta, halbtransparent).
pub const SURFACE_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 0.5];

// ── History ────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe.
pub const HISTORY_DEPTH: usize = 100;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Viewport ────────────────────────────────────────────────
    /// Rand um den Bereich in Domain-Einheiten
    pub viewport_padding: f32,

    // ── Punkte ──────────────────────────────────────────────────
    /// Marker-Radius in Domain-Einheiten
    pub point_radius: f32,
    /// Vergrößerung des gehoverten Markers
    #[serde(default = "default_point_hover_scale")]
    pub point_hover_scale: f32,
    /// Marker-Farbe
    pub point_color: [f32; 4],
    /// Farbe des Einfüge-Vorschaupunkts
    pub hover_point_color: [f32; 4],
    /// Farbe des gezogenen Punkts
    pub drag_point_color: [f32; 4],

    // ── Linie ───────────────────────────────────────────────────
    /// Sichtbare Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Breite der Pick-Linie in Pixeln (Hover-Toleranz = halbe Breite)
    pub pick_line_width_px: f32,
    /// Linienfarbe
    pub line_color: [f32; 4],

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Interaktionsfläche
    #[serde(default = "default_surface_color")]
    pub surface_color: [f32; 4],

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe (wirkt beim nächsten Start)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            viewport_padding: VIEWPORT_PADDING,

            point_radius: POINT_RADIUS,
            point_hover_scale: POINT_HOVER_SCALE,
            point_color: POINT_COLOR,
            hover_point_color: HOVER_POINT_COLOR,
            drag_point_color: DRAG_POINT_COLOR,

            line_width_px: LINE_WIDTH_PX,
            pick_line_width_px: PICK_LINE_WIDTH_PX,
            line_color: LINE_COLOR,

            background_color: BACKGROUND_COLOR,
            surface_color: SURFACE_COLOR,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `point_hover_scale` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_point_hover_scale() -> f32 {
    POINT_HOVER_SCALE
}

/// Serde-Default für `surface_color`.
fn default_surface_color() -> [f32; 4] {
    SURFACE_COLOR
}

/// Serde-Default für `history_depth`.
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_editor.toml")
    }

    /// Toleranz des Linien-Picks in Pixeln (halbe Pick-Linienbreite).
    pub fn line_pick_tolerance_px(&self) -> f32 {
        self.pick_line_width_px * 0.5
    }
}
