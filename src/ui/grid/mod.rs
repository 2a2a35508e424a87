//! Weekly availability grid: drag-to-select rendering plus the pure
//! gesture state machine behind it.

mod availability_grid;
mod selection;

pub use availability_grid::{availability_grid, SlotSubjectDialog};
pub use selection::{GridCell, Selection};
