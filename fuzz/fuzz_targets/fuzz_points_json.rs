#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(points) = curve_editor::parse_points_json(text) {
            // Geladene Listen muessen die Kurven-Invarianten erfuellen
            assert!(points.len() >= 2);
            let _ = curve_editor::write_points_json(&points);
        }
    }
});
