use crate::action::BulkAction;
use crate::record::Record;

/// Ordered list of the bulk actions available for a record type.
///
/// The host surfaces [`names`] to the operator and resolves the chosen one
/// with [`get`].
///
/// [`names`]: ActionRegistry::names
/// [`get`]: ActionRegistry::get
pub struct ActionRegistry<R: Record> {
    actions: Vec<Box<dyn BulkAction<R>>>,
}

impl<R: Record> ActionRegistry<R> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Adds an action to the end of the list.
    pub fn register<A>(mut self, action: A) -> Self
    where
        A: BulkAction<R> + 'static,
    {
        self.actions.push(Box::new(action));
        self
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(|action| action.name()).collect()
    }

    /// First action registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn BulkAction<R>> {
        self.actions
            .iter()
            .find(|action| action.name() == name)
            .map(|action| action.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn BulkAction<R>> + '_ {
        self.actions.iter().map(|action| action.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<R: Record> Default for ActionRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
