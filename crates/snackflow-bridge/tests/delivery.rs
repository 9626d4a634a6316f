use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use snackflow_bridge::{
    Lifecycle, LifecycleGatedObserver, LifecycleState, NotificationQueue, NotificationSurface,
    PresentedSnackbar, ResolveError, ResourceId, ResourceResolver, Snackbar, SnackbarDuration,
    SnackbarResult, SurfaceError,
};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::timeout,
};

const GREETING: ResourceId = ResourceId::new("hello");

/// One call to the surface, answered by the test through `reply`.
struct Presentation {
    snackbar: PresentedSnackbar,
    reply: oneshot::Sender<Result<SnackbarResult, SurfaceError>>,
}

struct ScriptedSurface {
    presented: mpsc::UnboundedSender<Presentation>,
}

impl NotificationSurface for ScriptedSurface {
    async fn present(
        &self,
        snackbar: PresentedSnackbar,
    ) -> Result<SnackbarResult, SurfaceError> {
        let (reply, result) = oneshot::channel();
        if self.presented.send(Presentation { snackbar, reply }).is_err() {
            return Err(SurfaceError::Closed);
        }
        result.await.unwrap_or(Err(SurfaceError::Closed))
    }
}

struct Greeter;

impl ResourceResolver for Greeter {
    async fn resolve(&self, id: ResourceId) -> Result<String, ResolveError> {
        match id.key() {
            "hello" => Ok("Hello from the queue".to_string()),
            _ => Err(ResolveError::Missing {
                id,
                locale: "en".to_string(),
            }),
        }
    }
}

#[derive(Default, Clone)]
struct Counters {
    action_performed: Arc<AtomicUsize>,
    dismissed: Arc<AtomicUsize>,
}

impl Counters {
    fn attach(&self, snackbar: Snackbar) -> Snackbar {
        let action_performed = self.action_performed.clone();
        let dismissed = self.dismissed.clone();
        snackbar
            .on_action_perform(move || {
                action_performed.fetch_add(1, Ordering::SeqCst);
            })
            .on_dismiss(move || {
                dismissed.fetch_add(1, Ordering::SeqCst);
            })
    }

    fn get(&self) -> (usize, usize) {
        (
            self.action_performed.load(Ordering::SeqCst),
            self.dismissed.load(Ordering::SeqCst),
        )
    }
}

struct Harness {
    queue: NotificationQueue,
    lifecycle: Lifecycle,
    presented: mpsc::UnboundedReceiver<Presentation>,
    observer: JoinHandle<()>,
}

impl Harness {
    fn start(min_active_state: LifecycleState) -> Self {
        let queue = NotificationQueue::new();
        let lifecycle = Lifecycle::new();
        let (presented_tx, presented) = mpsc::unbounded_channel();

        let observer = LifecycleGatedObserver::new(
            queue.consumer(),
            lifecycle.watch(),
            ScriptedSurface {
                presented: presented_tx,
            },
            Greeter,
        )
        .min_active_state(min_active_state);

        Self {
            queue,
            lifecycle,
            presented,
            observer: tokio::spawn(observer.run()),
        }
    }

    async fn next_presentation(&mut self) -> Presentation {
        timeout(Duration::from_secs(5), self.presented.recv())
            .await
            .expect("surface was not called")
            .expect("observer dropped the surface")
    }

    async fn assert_nothing_presented(&mut self) {
        let next = timeout(Duration::from_secs(5), self.presented.recv()).await;
        assert!(next.is_err(), "surface was called unexpectedly");
    }

    async fn wait_until_empty(&self) {
        self.queue
            .observe()
            .wait_for(|pending| pending.is_empty())
            .await
            .expect("queue is alive");
    }
}

#[tokio::test(start_paused = true)]
async fn empty_queue_never_reaches_the_surface() {
    let mut harness = Harness::start(LifecycleState::Started);
    harness.lifecycle.set_state(LifecycleState::Resumed);

    harness.assert_nothing_presented().await;
    assert!(harness.queue.snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn action_performed_runs_only_its_callback() {
    let mut harness = Harness::start(LifecycleState::Started);
    let counters = Counters::default();
    harness
        .queue
        .enqueue(counters.attach(Snackbar::new("Saved").action_label("Undo")));
    harness.lifecycle.set_state(LifecycleState::Started);

    let presentation = harness.next_presentation().await;
    assert_eq!(presentation.snackbar.message, "Saved");
    assert_eq!(presentation.snackbar.action_label.as_deref(), Some("Undo"));
    assert_eq!(presentation.snackbar.duration, SnackbarDuration::Indefinite);
    presentation
        .reply
        .send(Ok(SnackbarResult::ActionPerformed))
        .expect("observer is waiting");

    harness.wait_until_empty().await;
    assert_eq!(counters.get(), (1, 0));
    harness.assert_nothing_presented().await;
}

#[tokio::test(start_paused = true)]
async fn snackbars_are_shown_one_at_a_time_in_order() {
    let mut harness = Harness::start(LifecycleState::Started);
    for message in ["A", "B", "C"] {
        harness.queue.enqueue(Snackbar::new(message));
    }
    harness.lifecycle.set_state(LifecycleState::Started);

    for (shown, message) in ["A", "B", "C"].into_iter().enumerate() {
        let presentation = harness.next_presentation().await;
        assert_eq!(presentation.snackbar.message, message);
        // the head stays queued while it is on screen
        assert_eq!(harness.queue.snapshot().len(), 3 - shown);
        assert_eq!(harness.queue.snapshot()[0].id(), presentation.snackbar.id);
        presentation
            .reply
            .send(Ok(SnackbarResult::Dismissed))
            .expect("observer is waiting");
    }

    harness.wait_until_empty().await;
}

#[tokio::test(start_paused = true)]
async fn interrupted_snackbar_is_shown_again_exactly_once() {
    let mut harness = Harness::start(LifecycleState::Started);
    let counters = Counters::default();
    harness
        .queue
        .enqueue(counters.attach(Snackbar::new("A").action_label("ok")));
    harness.lifecycle.set_state(LifecycleState::Started);

    let mut first = harness.next_presentation().await;

    // e.g. the screen rotates while the snackbar is visible
    harness.lifecycle.set_state(LifecycleState::Created);
    first.reply.closed().await;
    assert!(
        first.reply.send(Ok(SnackbarResult::ActionPerformed)).is_err(),
        "abandoned result must be discarded"
    );
    assert_eq!(harness.queue.snapshot().len(), 1);
    assert_eq!(counters.get(), (0, 0));
    harness.assert_nothing_presented().await;

    harness.lifecycle.set_state(LifecycleState::Started);
    let second = harness.next_presentation().await;
    assert_eq!(second.snackbar.id, first.snackbar.id);
    assert_eq!(harness.queue.snapshot().len(), 1);
    second
        .reply
        .send(Ok(SnackbarResult::ActionPerformed))
        .expect("observer is waiting");

    harness.wait_until_empty().await;
    assert_eq!(counters.get(), (1, 0));
    harness.assert_nothing_presented().await;
}

#[tokio::test(start_paused = true)]
async fn stop_and_start_in_one_tick_shows_snackbar_again() {
    let mut harness = Harness::start(LifecycleState::Started);
    let counters = Counters::default();
    harness
        .queue
        .enqueue(counters.attach(Snackbar::new("A").action_label("ok")));
    harness.lifecycle.set_state(LifecycleState::Started);

    let mut first = harness.next_presentation().await;

    // the observer only runs after both transitions happened
    harness.lifecycle.set_state(LifecycleState::Created);
    harness.lifecycle.set_state(LifecycleState::Started);
    timeout(Duration::from_secs(5), first.reply.closed())
        .await
        .expect("presentation survived leaving the active state");
    assert_eq!(counters.get(), (0, 0));

    let second = harness.next_presentation().await;
    assert_eq!(second.snackbar.id, first.snackbar.id);
    second
        .reply
        .send(Ok(SnackbarResult::ActionPerformed))
        .expect("observer is waiting");

    harness.wait_until_empty().await;
    assert_eq!(counters.get(), (1, 0));
    harness.assert_nothing_presented().await;
}

#[tokio::test(start_paused = true)]
async fn inactive_host_holds_snackbars_back() {
    let mut harness = Harness::start(LifecycleState::Started);
    harness.lifecycle.set_state(LifecycleState::Created);
    harness.queue.enqueue(Snackbar::new("later"));

    harness.assert_nothing_presented().await;

    harness.lifecycle.set_state(LifecycleState::Resumed);
    let presentation = harness.next_presentation().await;
    assert_eq!(presentation.snackbar.message, "later");
}

#[tokio::test(start_paused = true)]
async fn custom_min_active_state_is_respected() {
    let mut harness = Harness::start(LifecycleState::Resumed);
    harness.queue.enqueue(Snackbar::new("focused only"));
    harness.lifecycle.set_state(LifecycleState::Started);

    harness.assert_nothing_presented().await;

    harness.lifecycle.set_state(LifecycleState::Resumed);
    harness.next_presentation().await;
}

#[tokio::test(start_paused = true)]
async fn surface_failure_is_retried_on_next_activation() {
    let mut harness = Harness::start(LifecycleState::Started);
    let counters = Counters::default();
    harness.queue.enqueue(counters.attach(Snackbar::new("A")));
    harness.lifecycle.set_state(LifecycleState::Started);

    let failed = harness.next_presentation().await;
    failed
        .reply
        .send(Err(SurfaceError::Failed("window lost".to_string())))
        .expect("observer is waiting");

    harness.assert_nothing_presented().await;
    assert_eq!(harness.queue.snapshot().len(), 1);
    assert_eq!(counters.get(), (0, 0));

    harness.lifecycle.set_state(LifecycleState::Created);
    harness.lifecycle.set_state(LifecycleState::Started);
    let retried = harness.next_presentation().await;
    assert_eq!(retried.snackbar.id, failed.snackbar.id);
    retried
        .reply
        .send(Ok(SnackbarResult::Dismissed))
        .expect("observer is waiting");

    harness.wait_until_empty().await;
    assert_eq!(counters.get(), (0, 1));
}

#[tokio::test(start_paused = true)]
async fn resources_are_resolved_at_delivery_time() {
    let mut harness = Harness::start(LifecycleState::Started);
    harness
        .queue
        .enqueue(Snackbar::new(GREETING).action_label(ResourceId::new("missing")));
    harness.lifecycle.set_state(LifecycleState::Started);

    let presentation = harness.next_presentation().await;
    assert_eq!(presentation.snackbar.message, "Hello from the queue");
    assert_eq!(presentation.snackbar.action_label.as_deref(), Some("missing"));
}

#[tokio::test(start_paused = true)]
async fn enqueue_during_presentation_waits_its_turn() {
    let mut harness = Harness::start(LifecycleState::Started);
    harness.queue.enqueue(Snackbar::new("first"));
    harness.lifecycle.set_state(LifecycleState::Started);

    let first = harness.next_presentation().await;
    harness.queue.enqueue(Snackbar::new("second"));
    harness.assert_nothing_presented().await;

    first
        .reply
        .send(Ok(SnackbarResult::Dismissed))
        .expect("observer is waiting");
    let second = harness.next_presentation().await;
    assert_eq!(second.snackbar.message, "second");
}

#[tokio::test(start_paused = true)]
async fn destroyed_host_stops_the_observer() {
    let harness = Harness::start(LifecycleState::Started);
    harness.lifecycle.set_state(LifecycleState::Started);
    harness.lifecycle.set_state(LifecycleState::Destroyed);

    timeout(Duration::from_secs(5), harness.observer)
        .await
        .expect("observer did not stop")
        .expect("observer panicked");
}
