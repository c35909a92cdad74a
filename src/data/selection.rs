//! Selection: the logical cursor/mark, always stored in elapsed time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    /// A single instant.
    Point(f64),
    /// Two instants, in the order they were marked.
    Interval(f64, f64),
}

impl Selection {
    /// The instant the mark ends on (the point itself, or the second instant).
    pub fn end(&self) -> Option<f64> {
        match *self {
            Selection::None => None,
            Selection::Point(t) => Some(t),
            Selection::Interval(_, t1) => Some(t1),
        }
    }
}
