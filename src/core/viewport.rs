//! Quadratischer Viewport für den normierten Kurvenbereich.

use super::boundary::{DOMAIN_MAX, DOMAIN_MIN};
use glam::Vec2;

/// Bildet den gepolsterten Bereich `[-pad, 1+pad]²` auf das größte
/// zentrierte Quadrat der verfügbaren Bildschirmfläche ab.
///
/// Domain-y zeigt nach oben, Screen-y nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveViewport {
    /// Linke obere Ecke des Quadrats in Screen-Koordinaten
    pub origin: Vec2,
    /// Kantenlänge des Quadrats in Pixeln
    pub side: f32,
    /// Rand um den Bereich in Domain-Einheiten
    pub padding: f32,
}

impl CurveViewport {
    /// Passt ein Quadrat mittig in das Rechteck `min..min+size` ein.
    pub fn fit(min: Vec2, size: Vec2, padding: f32) -> Self {
        let side = size.x.min(size.y).max(1.0);
        let origin = min + (size - Vec2::splat(side)) * 0.5;
        Self {
            origin,
            side,
            padding: padding.max(0.0),
        }
    }

    /// Sichtbare Kantenlänge in Domain-Einheiten (Bereich + beidseitiger Rand).
    pub fn domain_span(&self) -> f32 {
        (DOMAIN_MAX - DOMAIN_MIN) + 2.0 * self.padding
    }

    /// Pixel pro Domain-Einheit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.side / self.domain_span()
    }

    /// Domain → Screen.
    pub fn domain_to_screen(&self, pos: Vec2) -> Vec2 {
        let ppu = self.pixels_per_unit();
        Vec2::new(
            self.origin.x + (pos.x - DOMAIN_MIN + self.padding) * ppu,
            self.origin.y + (DOMAIN_MAX + self.padding - pos.y) * ppu,
        )
    }

    /// Screen → Domain (Umkehrung von [`Self::domain_to_screen`]).
    pub fn screen_to_domain(&self, screen: Vec2) -> Vec2 {
        let ppu = self.pixels_per_unit();
        Vec2::new(
            (screen.x - self.origin.x) / ppu - self.padding + DOMAIN_MIN,
            DOMAIN_MAX + self.padding - (screen.y - self.origin.y) / ppu,
        )
    }

    /// Rechnet eine Pixel-Distanz in Domain-Einheiten um.
    pub fn pixels_to_domain(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_unit()
    }

    /// Gibt `true` zurück, wenn die Screen-Position im Quadrat liegt.
    pub fn contains_screen(&self, screen: Vec2) -> bool {
        let max = self.origin + Vec2::splat(self.side);
        screen.cmpge(self.origin).all() && screen.cmple(max).all()
    }

    /// Screen-Rechteck `(min, max)` des eigentlichen Bereichs `[0,1]²`.
    pub fn domain_rect_screen(&self) -> (Vec2, Vec2) {
        let top_left = self.domain_to_screen(Vec2::new(DOMAIN_MIN, DOMAIN_MAX));
        let bottom_right = self.domain_to_screen(Vec2::new(DOMAIN_MAX, DOMAIN_MIN));
        (top_left, bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_centres_square_in_wide_rect() {
        let viewport = CurveViewport::fit(Vec2::new(10.0, 20.0), Vec2::new(800.0, 600.0), 0.025);
        assert_relative_eq!(viewport.side, 600.0);
        assert_relative_eq!(viewport.origin.x, 110.0);
        assert_relative_eq!(viewport.origin.y, 20.0);
    }

    #[test]
    fn domain_corners_map_inside_padding() {
        let viewport = CurveViewport::fit(Vec2::ZERO, Vec2::new(105.0, 105.0), 0.025);
        // 105 px / 1.05 Einheiten = 100 px pro Einheit
        assert_relative_eq!(viewport.pixels_per_unit(), 100.0, epsilon = 1e-4);

        let origin = viewport.domain_to_screen(Vec2::new(0.0, 0.0));
        assert_relative_eq!(origin.x, 2.5, epsilon = 1e-4);
        assert_relative_eq!(origin.y, 102.5, epsilon = 1e-4);

        let top_right = viewport.domain_to_screen(Vec2::new(1.0, 1.0));
        assert_relative_eq!(top_right.x, 102.5, epsilon = 1e-4);
        assert_relative_eq!(top_right.y, 2.5, epsilon = 1e-4);
    }

    #[test]
    fn screen_to_domain_inverts_domain_to_screen() {
        let viewport = CurveViewport::fit(Vec2::new(5.0, 7.0), Vec2::new(640.0, 480.0), 0.025);
        let domain = Vec2::new(0.3, 0.8);
        let back = viewport.screen_to_domain(viewport.domain_to_screen(domain));
        assert_relative_eq!(back.x, domain.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, domain.y, epsilon = 1e-5);
    }

    #[test]
    fn contains_screen_respects_square() {
        let viewport = CurveViewport::fit(Vec2::ZERO, Vec2::new(200.0, 100.0), 0.0);
        assert!(viewport.contains_screen(Vec2::new(100.0, 50.0)));
        assert!(!viewport.contains_screen(Vec2::new(10.0, 50.0)));
    }
}
