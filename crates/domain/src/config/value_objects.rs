pub mod count_bound;
pub mod mask;
pub mod range;

pub use count_bound::CountBound;
pub use mask::{MASK_MARKER, Mask};
pub use range::{CountRange, ResolvedRange};
