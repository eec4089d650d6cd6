// Copyright (c) 2026 Bulk Actions
// Record Filtering and Per-Record Dispatch with Summary Reporting

use tracing::{debug, trace};

use crate::error::ActionError;
use crate::notify::{Notice, Notifier};
use crate::record::{batch_label, Record};

/// Per-record inclusion filter.
pub type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A bulk action over records of type `R`.
///
/// The provided [`invoke`] loop filters each record through [`accepts`],
/// hands the survivors to the [`handle`] hook one at a time, and reports a
/// single summary notice. Implementations define the hook; most hosts want
/// [`DirectCallAction`] rather than a hand-rolled impl.
///
/// [`invoke`]: BulkAction::invoke
/// [`accepts`]: BulkAction::accepts
/// [`handle`]: BulkAction::handle
/// [`DirectCallAction`]: crate::DirectCallAction
pub trait BulkAction<R: Record>: Send + Sync {
    /// Name the action is registered under.
    fn name(&self) -> &str;

    /// Human-facing name used in summaries. Defaults to [`name`].
    ///
    /// [`name`]: BulkAction::name
    fn display_name(&self) -> &str {
        self.name()
    }

    /// Whether `record` should be processed. The default includes everything.
    fn accepts(&self, _record: &R) -> bool {
        true
    }

    /// Processes a single record that passed the filter.
    ///
    /// Runs inline on the invoking thread; large quantities of work should
    /// be deferred to a queue-backed action instead of done here.
    fn handle(&self, record: &R) -> anyhow::Result<()>;

    /// Renders the summary line for a completed run.
    fn summary(&self, processed: usize, label: &str) -> String {
        format!("Called {} for {} {}.", self.display_name(), processed, label)
    }

    /// Runs the action over `records`, in slice order.
    ///
    /// Records failing [`accepts`] are skipped without side effect and
    /// without counting. The first hook error aborts the remaining
    /// iteration and surfaces as an [`ActionError`]; records handled before
    /// it stay handled, and no notice is emitted. When the whole collection
    /// is exhausted and at least one record was processed, exactly one
    /// success notice goes to `notifier`.
    ///
    /// [`accepts`]: BulkAction::accepts
    fn invoke(&self, notifier: &mut dyn Notifier, records: &[R]) -> Result<usize, ActionError> {
        let mut processed = 0usize;

        for record in records {
            if !self.accepts(record) {
                trace!(action = self.name(), "record skipped by predicate");
                continue;
            }
            if let Err(source) = self.handle(record) {
                return Err(ActionError {
                    action: self.display_name().to_string(),
                    processed,
                    source,
                });
            }
            processed += 1;
        }

        if processed > 0 {
            let label = batch_label::<R>(processed);
            let text = self.summary(processed, &label);
            notifier.notify(Notice::success(self.display_name(), processed, label, text));
        }
        debug!(action = self.name(), processed, "bulk action completed");

        Ok(processed)
    }
}
