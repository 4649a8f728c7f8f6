pub mod marking_table;
pub mod priority_queue;

pub use marking_table::{Marking, MarkingTable};
pub use priority_queue::BinaryHeapWrapper;
