// Hardware Abstraction Layer (HAL) Module
//
// Kapselt den LED-Strip hinter dem StripWriter-Trait aus esp-core,
// damit die Logik auf dem Host testbar bleibt.

pub mod strip_writer;

pub use strip_writer::{RmtStripWriter, StripBuffer};
