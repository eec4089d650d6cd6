use crate::action::runner::{BulkAction, Predicate};
use crate::record::Record;

/// Bulk action that calls a stored function with each passing record's key.
///
/// The function receives the key rather than the record, so it can load,
/// lock, or refetch the entity however the host prefers. Execution is
/// inline and blocking; defer long-running work to a queue-backed action.
pub struct DirectCallAction<R, F>
where
    R: Record,
    F: Fn(R::Key) -> anyhow::Result<()> + Send + Sync,
{
    name: String,
    display_label: Option<String>,
    predicate: Option<Predicate<R>>,
    function: F,
}

impl<R, F> DirectCallAction<R, F>
where
    R: Record,
    F: Fn(R::Key) -> anyhow::Result<()> + Send + Sync,
{
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            display_label: None,
            predicate: None,
            function,
        }
    }

    /// Restricts the action to records the predicate accepts.
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Overrides the name shown in summaries.
    pub fn with_display_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }
}

impl<R, F> BulkAction<R> for DirectCallAction<R, F>
where
    R: Record,
    F: Fn(R::Key) -> anyhow::Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        self.display_label.as_deref().unwrap_or(&self.name)
    }

    fn accepts(&self, record: &R) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(record),
            // No filter configured: every record is processed.
            None => true,
        }
    }

    fn handle(&self, record: &R) -> anyhow::Result<()> {
        (self.function)(record.key())
    }
}
