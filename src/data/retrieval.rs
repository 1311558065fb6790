use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::error::ProviderError;

use super::model::{RecipeCatalog, RecipeDetail, RecipeId};
use super::provider::RecipeProvider;

// ---------------------------------------------------------------------------
// Generations – discard results that were superseded while in flight
// ---------------------------------------------------------------------------

/// Monotonically increasing marker attached to each retrieval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

/// Tracks the latest generation issued for one kind of retrieval.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    latest: Generation,
}

impl GenerationTracker {
    /// Start a new retrieval; every earlier generation becomes stale.
    pub fn begin(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    /// Drop interest in whatever is in flight without starting anything new.
    pub fn invalidate(&mut self) {
        self.begin();
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }
}

// ---------------------------------------------------------------------------
// Requests / results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Catalog,
    Detail(RecipeId),
}

#[derive(Debug)]
pub enum Payload {
    Catalog(Result<RecipeCatalog, ProviderError>),
    Detail(RecipeId, Result<RecipeDetail, ProviderError>),
}

/// A finished retrieval, tagged with the generation it was started under.
#[derive(Debug)]
pub struct Completed {
    pub generation: Generation,
    pub payload: Payload,
}

// ---------------------------------------------------------------------------
// Retriever – runs provider calls off the UI thread
// ---------------------------------------------------------------------------

/// Spawns provider calls on worker threads and hands results back through a
/// channel that the UI loop polls once per frame.
pub struct Retriever {
    tx: Sender<Completed>,
    rx: Receiver<Completed>,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Default for Retriever {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            notify: None,
        }
    }
}

impl Retriever {
    /// Callback invoked from the worker after a result is queued, typically
    /// to wake the UI.
    pub fn with_notify(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    pub fn spawn(
        &self,
        provider: Arc<dyn RecipeProvider>,
        request: Request,
        generation: Generation,
    ) {
        let tx = self.tx.clone();
        let notify = self.notify.clone();
        let spawned = thread::Builder::new()
            .name("recipe-retrieval".into())
            .spawn(move || {
                let payload = match request {
                    Request::Catalog => Payload::Catalog(provider.search()),
                    Request::Detail(id) => Payload::Detail(id, provider.detail(id)),
                };
                // Receiver gone means the app is shutting down.
                if tx.send(Completed { generation, payload }).is_ok() {
                    if let Some(notify) = notify {
                        notify();
                    }
                }
            });
        if let Err(e) = spawned {
            log::error!("Failed to spawn retrieval thread: {e}");
        }
    }

    /// Drain every result that has arrived so far.
    pub fn poll(&self) -> Vec<Completed> {
        let mut done = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(c) => done.push(c),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        done
    }

    /// Block until one result arrives.
    #[cfg(test)]
    pub fn wait(&self) -> Option<Completed> {
        self.rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Recipe;

    #[test]
    fn newer_generation_supersedes_older() {
        let mut tracker = GenerationTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn invalidate_makes_in_flight_stale() {
        let mut tracker = GenerationTracker::default();
        let g = tracker.begin();
        tracker.invalidate();
        assert!(!tracker.is_current(g));
    }

    struct Fixed;

    impl RecipeProvider for Fixed {
        fn search(&self) -> Result<RecipeCatalog, ProviderError> {
            let recipe = Recipe::try_from(crate::data::model::RawRecipe {
                id: Some(1),
                title: Some("Soup".into()),
                ..Default::default()
            })
            .map_err(|e| ProviderError::Load(e.to_string()))?;
            Ok(RecipeCatalog::from_recipes(vec![recipe], 0))
        }

        fn detail(&self, id: RecipeId) -> Result<RecipeDetail, ProviderError> {
            Err(ProviderError::NotFound(id.0))
        }
    }

    #[test]
    fn worker_results_carry_their_generation() {
        let retriever = Retriever::default();
        let mut tracker = GenerationTracker::default();
        let g = tracker.begin();
        retriever.spawn(Arc::new(Fixed), Request::Catalog, g);

        let done = retriever.wait().expect("result");
        assert_eq!(done.generation, g);
        match done.payload {
            Payload::Catalog(Ok(catalog)) => assert_eq!(catalog.len(), 1),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn detail_failures_are_delivered() {
        let retriever = Retriever::default();
        retriever.spawn(Arc::new(Fixed), Request::Detail(RecipeId(9)), Generation(1));
        let done = retriever.wait().expect("result");
        assert!(matches!(
            done.payload,
            Payload::Detail(RecipeId(9), Err(ProviderError::NotFound(9)))
        ));
        assert!(retriever.poll().is_empty());
    }
}
