//! Query executor: single-flight asynchronous execution per session.
//!
//! Owns the one execution slot each session gets. Submitting a new query
//! atomically supersedes (cancels) any query currently in flight for that
//! session, spawns the runner onto the tokio runtime under a timeout, and
//! returns a handle immediately. Settlement bookkeeping — clearing the
//! stored handle and resetting the running flag — runs exactly once per
//! query regardless of outcome.
//!
//! # Concurrency contract
//!
//! The replace-and-cancel step and the settlement-clears-handle step operate
//! on the same mutex-guarded slot, tagged with a generation counter: a query
//! settling after it has been superseded observes a generation mismatch and
//! leaves the newer handle alone. The running flag is an `AtomicBool` so
//! `is_running` never blocks.
//!
//! Timeout is a derived cancellation: deadline expiry fires the same token
//! an explicit `cancel()` would, and both settle as `Cancelled`.

use crate::config::ExecutionParams;
use crate::ports::approval::ApprovalPort;
use crate::ports::error_reporter::{ErrorReporter, NoErrorReporter};
use crate::ports::file_references::{FileReferencePort, NoFileReferences};
use crate::ports::model_invoker::ModelInvoker;
use crate::ports::result_sink::{NoResultSink, ResultSink};
use crate::ports::session_memory::SessionMemoryPort;
use crate::ports::tool_registry::ToolRegistryPort;
use crate::use_cases::run_query::QueryRunner;
use crate::use_cases::tool_cache::ToolClientCache;
use promptgate_domain::{Query, QueryError, QueryOutcome, SessionId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use tokio::sync::oneshot;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// The single outstanding computation for a session.
struct InFlight {
    token: CancellationToken,
    generation: u64,
}

/// Per-session execution slot. Persists across queries.
#[derive(Default)]
struct SessionSlot {
    running: AtomicBool,
    current: Mutex<Option<InFlight>>,
    generation: AtomicU64,
}

/// Opaque handle to one submitted query.
///
/// Exposes cancellation and awaiting the settled outcome; at most one
/// exists per session at any time.
pub struct QueryHandle {
    token: CancellationToken,
    receiver: oneshot::Receiver<Result<QueryOutcome, QueryError>>,
}

impl QueryHandle {
    /// Request cooperative cancellation of this query.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the query to settle.
    pub async fn settled(self) -> Result<QueryOutcome, QueryError> {
        // The sender is only dropped when a superseding execute cancelled
        // the task before it could settle.
        self.receiver.await.unwrap_or(Err(QueryError::Cancelled))
    }
}

/// Single-flight executor for query execution.
///
/// Multiple sessions execute concurrently; within one session, a new
/// `execute` call always cancels and clears the prior in-flight query
/// before installing its own handle.
pub struct QueryExecutor {
    runner: Arc<QueryRunner>,
    params: ExecutionParams,
    tool_cache: Arc<ToolClientCache>,
    result_sink: Arc<dyn ResultSink>,
    error_reporter: Arc<dyn ErrorReporter>,
    file_references: Arc<dyn FileReferencePort>,
    slots: RwLock<HashMap<SessionId, Arc<SessionSlot>>>,
}

impl QueryExecutor {
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        memory: Arc<dyn SessionMemoryPort>,
        registry: Arc<dyn ToolRegistryPort>,
        approval: Arc<dyn ApprovalPort>,
        params: ExecutionParams,
    ) -> Self {
        Self::with_tool_cache(
            invoker,
            memory,
            registry,
            approval,
            params,
            Arc::new(ToolClientCache::new()),
        )
    }

    /// Create with an explicitly injected tool cache (shared with other
    /// components that want to invalidate it).
    pub fn with_tool_cache(
        invoker: Arc<dyn ModelInvoker>,
        memory: Arc<dyn SessionMemoryPort>,
        registry: Arc<dyn ToolRegistryPort>,
        approval: Arc<dyn ApprovalPort>,
        params: ExecutionParams,
        tool_cache: Arc<ToolClientCache>,
    ) -> Self {
        let runner = Arc::new(QueryRunner::new(
            invoker,
            memory,
            registry,
            approval,
            Arc::clone(&tool_cache),
            params.clone(),
        ));
        Self {
            runner,
            params,
            tool_cache,
            result_sink: Arc::new(NoResultSink),
            error_reporter: Arc::new(NoErrorReporter),
            file_references: Arc::new(NoFileReferences),
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Attach a settlement sink.
    pub fn with_result_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.result_sink = sink;
        self
    }

    /// Attach an error-presentation collaborator.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.error_reporter = reporter;
        self
    }

    /// Attach a file-reference collaborator.
    pub fn with_file_references(mut self, files: Arc<dyn FileReferencePort>) -> Self {
        self.file_references = files;
        self
    }

    /// Submit a query for execution. Returns immediately.
    ///
    /// Any query currently in flight for the same session is cancelled and
    /// its handle discarded before the new one is installed.
    pub fn execute(&self, query: Query) -> QueryHandle {
        debug!("Execute query for session {}", query.session);

        let slot = self.slot(&query.session);
        let token = CancellationToken::new();
        let generation;
        {
            let mut current = slot.current.lock().expect("session slot lock");
            if let Some(previous) = current.take() {
                info!(
                    "Superseding in-flight query for session {}",
                    query.session
                );
                previous.token.cancel();
                self.tool_cache.invalidate(&query.session);
            }
            generation = slot.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = Some(InFlight {
                token: token.clone(),
                generation,
            });
            slot.running.store(true, Ordering::SeqCst);
        }

        let (sender, receiver) = oneshot::channel();
        let runner = Arc::clone(&self.runner);
        let result_sink = Arc::clone(&self.result_sink);
        let error_reporter = Arc::clone(&self.error_reporter);
        let file_references = Arc::clone(&self.file_references);
        let task_slot = Arc::clone(&slot);
        let task_token = token.clone();
        let deadline = query.timeout.unwrap_or(self.params.default_timeout);
        let session = query.session.clone();

        tokio::spawn(async move {
            let started = Instant::now();

            let result = match tokio::time::timeout(deadline, runner.run(&query, &task_token)).await
            {
                Ok(outcome) => outcome,
                Err(_) => {
                    // Deadline expiry converges on the cancellation path:
                    // the blocking call is abandoned, memory untouched.
                    warn!(
                        "Query for session {} timed out after {:?}",
                        session, deadline
                    );
                    task_token.cancel();
                    Err(QueryError::Cancelled)
                }
            };

            // Settlement bookkeeping: clear the stored handle and reset the
            // running flag, but only if this query is still the installed
            // one — a superseding execute already owns the slot otherwise.
            {
                let mut current = task_slot.current.lock().expect("session slot lock");
                if current
                    .as_ref()
                    .is_some_and(|inflight| inflight.generation == generation)
                {
                    *current = None;
                    task_slot.running.store(false, Ordering::SeqCst);
                }
            }

            let settled = match result {
                Ok(text) => {
                    let elapsed = started.elapsed();
                    let files = file_references.files(&session);
                    if !files.is_empty() {
                        debug!(
                            "Attaching {} file references to settled query for session {}",
                            files.len(),
                            session
                        );
                    }
                    result_sink.record_settlement(&session, elapsed, &files);
                    Ok(QueryOutcome {
                        text,
                        elapsed,
                        file_references: files,
                    })
                }
                Err(error) => {
                    if error.is_reportable() {
                        error_reporter.report(&session, &error);
                    } else {
                        debug!("Query for session {} cancelled", session);
                    }
                    Err(error)
                }
            };

            // Receiver may have been dropped; settlement already ran.
            let _ = sender.send(settled);
        });

        QueryHandle { token, receiver }
    }

    /// Cancel the in-flight query for a session, if any. Idempotent.
    ///
    /// Fires the cancellation token (the runner observes it at its blocking
    /// call sites) and invalidates the session's tool cache so a cancelled
    /// session starts clean next time.
    pub fn cancel(&self, session: &SessionId) {
        let Some(slot) = self.existing_slot(session) else {
            return;
        };
        let mut current = slot.current.lock().expect("session slot lock");
        if let Some(inflight) = current.take() {
            info!("Cancelling in-flight query for session {}", session);
            inflight.token.cancel();
            self.tool_cache.invalidate(session);
            slot.running.store(false, Ordering::SeqCst);
        }
    }

    /// Whether a query is currently in flight for the session.
    ///
    /// Safe to call from any thread; reads an atomic flag.
    pub fn is_running(&self, session: &SessionId) -> bool {
        self.existing_slot(session)
            .is_some_and(|slot| slot.running.load(Ordering::SeqCst))
    }

    fn slot(&self, session: &SessionId) -> Arc<SessionSlot> {
        if let Some(slot) = self.existing_slot(session) {
            return slot;
        }
        let mut slots = self.slots.write().expect("slot map lock");
        Arc::clone(slots.entry(session.clone()).or_default())
    }

    fn existing_slot(&self, session: &SessionId) -> Option<Arc<SessionSlot>> {
        self.slots
            .read()
            .expect("slot map lock")
            .get(session)
            .cloned()
    }
}
