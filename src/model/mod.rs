pub mod queues;
pub mod summary;
pub mod trace;
