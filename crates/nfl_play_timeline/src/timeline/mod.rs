pub mod clock;
pub mod field;
pub mod possession;

pub use field::{absolute_position, yardage, Snap};
pub use possession::{DriveStart, PossessionResolver};
