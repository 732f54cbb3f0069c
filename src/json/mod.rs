//! JSON Import/Export für Steuerpunkt-Listen.
//!
//! Das Format ist ein Array von `[x, y]`-Paaren, also exakt die Liste,
//! die auch an den Host-Callback gemeldet wird.

pub mod parser;
pub mod writer;

pub use parser::parse_points_json;
pub use writer::write_points_json;
