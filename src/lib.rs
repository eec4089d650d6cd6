//! Bulk record actions for admin-style interfaces.
//!
//! Wraps a per-record function, or a handle to an external task queue, as an
//! action that runs over an operator-selected set of records. Each record is
//! filtered through an optional predicate and handed to the action's hook;
//! when anything was processed, a single summary notice is delivered to the
//! invoking context.
//!
//! ```
//! use bulk_actions::{ActionRegistry, BufferedNotifier, DirectCallAction, Record};
//!
//! struct Invoice {
//!     pk: u32,
//!     paid: bool,
//! }
//!
//! impl Record for Invoice {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.pk
//!     }
//! }
//!
//! let archive = DirectCallAction::new("archive_paid", |pk: u32| {
//!     // Load the record by key and do the work.
//!     println!("archiving invoice {pk}");
//!     Ok(())
//! })
//! .with_predicate(|invoice: &Invoice| invoice.paid);
//!
//! let registry = ActionRegistry::new().register(archive);
//!
//! let invoices = vec![
//!     Invoice { pk: 1, paid: true },
//!     Invoice { pk: 2, paid: false },
//! ];
//!
//! let mut notifier = BufferedNotifier::new();
//! let action = registry.get("archive_paid").unwrap();
//! let processed = action.invoke(&mut notifier, &invoices).unwrap();
//!
//! assert_eq!(processed, 1);
//! assert_eq!(notifier.notices()[0].text, "Called archive_paid for 1 Invoice.");
//! ```
//!
//! Queue-backed actions live behind the `queue` feature (enabled by
//! default); webhook notice delivery behind the `webhook` feature.

pub mod action;
pub mod error;
pub mod notify;
pub mod record;
pub mod registry;

#[cfg(feature = "queue")]
pub use action::{QueueTask, QueuedTaskAction, SpawnTask};
pub use action::{BulkAction, DirectCallAction, Predicate};
pub use error::ActionError;
#[cfg(feature = "webhook")]
pub use notify::WebhookNotifier;
pub use notify::{BufferedNotifier, LogNotifier, Notice, Notifier, Severity};
pub use record::Record;
pub use registry::ActionRegistry;
