mod direct;
#[cfg(feature = "queue")]
mod queue;
mod runner;

pub use direct::DirectCallAction;
#[cfg(feature = "queue")]
pub use queue::{QueueTask, QueuedTaskAction, SpawnTask};
pub use runner::{BulkAction, Predicate};
