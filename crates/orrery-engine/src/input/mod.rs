pub mod entry;
pub mod queue;
