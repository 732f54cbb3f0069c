//! Use-Case-Funktionen für Änderungen an der committeten Steuerpunkt-Liste.
//!
//! Aufgeteilt nach Operation:
//! - `commit` — Gemeinsamer Commit-Pfad (Snapshot, Übernahme, Benachrichtigung)
//! - `insert_point` — Punkt am Linien-Hover einfügen
//! - `reset_curve` — Standard-Kurve wiederherstellen

mod commit;
mod insert_point;
mod reset_curve;

pub use commit::{commit_curve, commit_points};
pub use insert_point::insert_point_at_hover;
pub use reset_curve::reset_curve;
