pub mod anchor;
pub mod path;
pub mod rect;

pub use anchor::{Anchor, HandleMirror};
pub use path::{CubicSegment, Path};
pub use rect::Rect;
