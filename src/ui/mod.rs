//! Terminal output.

mod preview;

pub use preview::write_swatches;
