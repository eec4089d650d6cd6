// Copyright (c) 2026 Bulk Actions
// Task Queue Capability and Fire-and-Forget Dispatch

use std::future::Future;
use std::marker::PhantomData;

use anyhow::Context;
use tokio::runtime::Handle;
use tracing::debug;

use crate::action::runner::{BulkAction, Predicate};
use crate::record::Record;

/// Capability required of an external task queue: a registered name and a
/// non-blocking, single-argument submission for asynchronous execution.
pub trait QueueTask: Send + Sync {
    /// Argument submitted with the task, typically a record key.
    type Arg: Send + 'static;

    /// Name the task is registered under on the queue.
    fn name(&self) -> &str;

    /// Submits `arg` for out-of-band execution.
    ///
    /// Returns once the queue has accepted the work; it must not block on
    /// the work itself. The caller gets no visibility into whether the work
    /// eventually succeeds.
    fn enqueue(&self, arg: Self::Arg) -> anyhow::Result<()>;
}

/// Bulk action that enqueues a task with each passing record's key instead
/// of doing the work inline.
///
/// The action's name defaults to the task's registered name.
pub struct QueuedTaskAction<R, T>
where
    R: Record,
    T: QueueTask<Arg = R::Key>,
{
    task: T,
    name: Option<String>,
    display_label: Option<String>,
    predicate: Option<Predicate<R>>,
}

impl<R, T> QueuedTaskAction<R, T>
where
    R: Record,
    T: QueueTask<Arg = R::Key>,
{
    pub fn new(task: T) -> Self {
        Self {
            task,
            name: None,
            display_label: None,
            predicate: None,
        }
    }

    /// Overrides the name the action registers under.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the name shown in summaries.
    pub fn with_display_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }

    /// Restricts the action to records the predicate accepts.
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }
}

impl<R, T> BulkAction<R> for QueuedTaskAction<R, T>
where
    R: Record,
    T: QueueTask<Arg = R::Key>,
{
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.task.name())
    }

    fn display_name(&self) -> &str {
        self.display_label.as_deref().unwrap_or_else(|| self.name())
    }

    fn accepts(&self, record: &R) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(record),
            // No filter configured: every record is queued.
            None => true,
        }
    }

    fn handle(&self, record: &R) -> anyhow::Result<()> {
        self.task.enqueue(record.key())
    }

    fn summary(&self, processed: usize, label: &str) -> String {
        format!("Queued tasks for {} {}.", processed, label)
    }
}

/// [`QueueTask`] backed by a Tokio runtime.
///
/// Enqueueing spawns the closure's future on the runtime and returns
/// immediately; the work runs out of band and its outcome is not observed.
pub struct SpawnTask<K, F, Fut>
where
    K: Send + 'static,
    F: Fn(K) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    name: String,
    handle: Handle,
    run: F,
    _arg: PhantomData<fn(K) -> Fut>,
}

impl<K, F, Fut> SpawnTask<K, F, Fut>
where
    K: Send + 'static,
    F: Fn(K) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    /// Builds a task that spawns onto `handle`.
    pub fn new(name: impl Into<String>, handle: Handle, run: F) -> Self {
        Self {
            name: name.into(),
            handle,
            run,
            _arg: PhantomData,
        }
    }

    /// Builds a task that spawns onto the runtime the caller is inside of.
    ///
    /// Fails when no Tokio runtime is running; use [`SpawnTask::new`] with
    /// an explicit handle in that case.
    pub fn current(name: impl Into<String>, run: F) -> anyhow::Result<Self> {
        let handle =
            Handle::try_current().context("spawned queue tasks need a running Tokio runtime")?;
        Ok(Self::new(name, handle, run))
    }
}

impl<K, F, Fut> QueueTask for SpawnTask<K, F, Fut>
where
    K: Send + 'static,
    F: Fn(K) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send + 'static,
{
    type Arg = K;

    fn name(&self) -> &str {
        &self.name
    }

    fn enqueue(&self, arg: K) -> anyhow::Result<()> {
        self.handle.spawn((self.run)(arg));
        debug!(task = %self.name, "task submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::notify::BufferedNotifier;

    struct Invoice {
        pk: u32,
        overdue: bool,
    }

    impl Record for Invoice {
        type Key = u32;

        fn key(&self) -> u32 {
            self.pk
        }
    }

    struct FakeQueue {
        name: String,
        enqueued: Arc<Mutex<Vec<u32>>>,
    }

    impl FakeQueue {
        fn new(name: &str) -> (Arc<Mutex<Vec<u32>>>, Self) {
            let enqueued = Arc::new(Mutex::new(Vec::new()));
            let queue = Self {
                name: name.to_string(),
                enqueued: Arc::clone(&enqueued),
            };
            (enqueued, queue)
        }
    }

    impl QueueTask for FakeQueue {
        type Arg = u32;

        fn name(&self) -> &str {
            &self.name
        }

        fn enqueue(&self, arg: u32) -> anyhow::Result<()> {
            self.enqueued.lock().unwrap().push(arg);
            Ok(())
        }
    }

    struct FailingQueue;

    impl QueueTask for FailingQueue {
        type Arg = u32;

        fn name(&self) -> &str {
            "always_fails"
        }

        fn enqueue(&self, _arg: u32) -> anyhow::Result<()> {
            anyhow::bail!("broker unavailable")
        }
    }

    fn invoices() -> Vec<Invoice> {
        vec![
            Invoice {
                pk: 1,
                overdue: true,
            },
            Invoice {
                pk: 2,
                overdue: false,
            },
        ]
    }

    #[test]
    fn test_task_is_enqueued_per_passing_record() {
        let (enqueued, queue) = FakeQueue::new("send_reminder");
        let action = QueuedTaskAction::new(queue)
            .with_predicate(|invoice: &Invoice| invoice.overdue);
        let mut notifier = BufferedNotifier::new();

        let processed = action.invoke(&mut notifier, &invoices()).unwrap();

        assert_eq!(processed, 1);
        assert_eq!(*enqueued.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_every_key_is_enqueued_in_order_without_a_predicate() {
        let (enqueued, queue) = FakeQueue::new("send_reminder");
        let action: QueuedTaskAction<Invoice, _> = QueuedTaskAction::new(queue);
        let mut notifier = BufferedNotifier::new();

        let processed = action.invoke(&mut notifier, &invoices()).unwrap();

        assert_eq!(processed, 2);
        assert_eq!(*enqueued.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_name_defaults_to_the_registered_task_name() {
        let (_enqueued, queue) = FakeQueue::new("send_reminder");
        let action: QueuedTaskAction<Invoice, _> = QueuedTaskAction::new(queue);

        assert_eq!(action.name(), "send_reminder");
    }

    #[test]
    fn test_explicit_name_overrides_the_task_name() {
        let (_enqueued, queue) = FakeQueue::new("send_reminder");
        let action: QueuedTaskAction<Invoice, _> =
            QueuedTaskAction::new(queue).with_name("remind_overdue");

        assert_eq!(action.name(), "remind_overdue");
    }

    #[test]
    fn test_summary_reports_queued_tasks() {
        let (_enqueued, queue) = FakeQueue::new("send_reminder");
        let action: QueuedTaskAction<Invoice, _> = QueuedTaskAction::new(queue);
        let mut notifier = BufferedNotifier::new();

        action.invoke(&mut notifier, &invoices()).unwrap();

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].text, "Queued tasks for 2 Invoices.");
    }

    #[test]
    fn test_enqueue_failure_surfaces_before_any_count() {
        let action: QueuedTaskAction<Invoice, _> = QueuedTaskAction::new(FailingQueue);
        let mut notifier = BufferedNotifier::new();

        let err = action.invoke(&mut notifier, &invoices()).unwrap_err();

        assert_eq!(err.action, "always_fails");
        assert_eq!(err.processed, 0);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_spawn_task_runs_work_out_of_band() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let task = SpawnTask::current("reindex", move |key: u32| {
            let tx = tx.clone();
            async move {
                tx.send(key).ok();
            }
        })
        .unwrap();

        assert_eq!(task.name(), "reindex");
        task.enqueue(41).unwrap();
        task.enqueue(42).unwrap();

        let mut seen = Vec::new();
        for _ in 0..2 {
            let key = tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("spawned task did not run")
                .expect("channel closed");
            seen.push(key);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![41, 42]);
    }

    #[test]
    fn test_current_requires_a_runtime() {
        let result = SpawnTask::current("reindex", |_key: u32| async {});

        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Tokio runtime"));
    }
}
