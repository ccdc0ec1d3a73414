/// Bounding boxes
pub mod bbox;

/// Track colors and the default palette
pub mod color;
