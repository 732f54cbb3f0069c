//! Zeichnet die Kurven-Szene mit dem egui-Painter.

use crate::core::CurveViewport;
use crate::shared::{CursorAffordance, CurveScene};
use glam::Vec2;

/// Wandelt eine RGBA-Farbe `[0,1]` in `Color32` um.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Cursor-Icon für die Szene.
///
/// Während eines Drags ist der Hover gelöscht; der Canvas zeigt dann
/// `Grabbing`, sonst gilt der abgeleitete Cursor-Hinweis.
pub fn cursor_icon(scene: &CurveScene) -> egui::CursorIcon {
    if scene.is_dragging() {
        return egui::CursorIcon::Grabbing;
    }
    match scene.cursor {
        CursorAffordance::Crosshair => egui::CursorIcon::Crosshair,
        CursorAffordance::Grab => egui::CursorIcon::Grab,
        CursorAffordance::Default => egui::CursorIcon::Default,
    }
}

/// Zeichnet Hintergrund, Fläche, Linie und Marker in `rect`.
pub fn paint_curve_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    viewport: &CurveViewport,
    scene: &CurveScene,
) {
    let options = &scene.options;
    let ppu = viewport.pixels_per_unit();

    painter.rect_filled(rect, 0.0, to_color32(options.background_color));

    let (surface_min, surface_max) = viewport.domain_rect_screen();
    painter.rect_filled(
        egui::Rect::from_min_max(to_pos2(surface_min), to_pos2(surface_max)),
        0.0,
        to_color32(options.surface_color),
    );

    let line: Vec<egui::Pos2> = scene
        .line_points
        .iter()
        .map(|&p| to_pos2(viewport.domain_to_screen(p)))
        .collect();
    painter.add(egui::Shape::line(
        line,
        egui::Stroke::new(options.line_width_px, to_color32(options.line_color)),
    ));

    let radius_px = options.point_radius * ppu;
    for (index, pos) in scene.visible_markers() {
        let scale = if scene.hovered_index == Some(index) {
            options.point_hover_scale
        } else {
            1.0
        };
        painter.circle_filled(
            to_pos2(viewport.domain_to_screen(pos)),
            radius_px * scale,
            to_color32(options.point_color),
        );
    }

    if let Some(hover) = scene.hover_point {
        painter.circle_filled(
            to_pos2(viewport.domain_to_screen(hover)),
            radius_px,
            to_color32(options.hover_point_color),
        );
    }

    if let Some(drag) = scene.drag_point {
        painter.circle_filled(
            to_pos2(viewport.domain_to_screen(drag)),
            radius_px,
            to_color32(options.drag_point_color),
        );
    }
}
