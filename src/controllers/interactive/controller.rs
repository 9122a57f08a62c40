use crate::controllers::benchmark::errors::BenchmarkError;
use crate::controllers::benchmark::harness::BenchmarkHarness;
use crate::controllers::benchmark::report::BenchmarkReport;
use crate::controllers::benchmark::settings::BenchmarkSettings;
use crate::controllers::interactive::session::ExplorerSession;
use crate::core::actions::cancellation::CancelToken;
use crate::core::compute::BackendKind;
use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::target::ZoomDirection;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread::{self, JoinHandle};

struct SharedState {
    session: Mutex<ExplorerSession>,
    wake: Condvar,
    shutdown: AtomicBool,
}

/// Drives an [`ExplorerSession`] from a background tick thread.
///
/// The thread sleeps on a condition variable while no zoom is animating and
/// ticks once per `tick_interval` while one is. Input handlers and the
/// benchmark reach the session through the same mutex as the tick thread.
pub struct ZoomController {
    shared: Arc<SharedState>,
    worker: Mutex<Option<JoinHandle<()>>>,
    benchmark: BenchmarkHarness,
}

impl ZoomController {
    pub fn new(session: ExplorerSession) -> Self {
        Self::with_benchmark_settings(session, BenchmarkSettings::default())
    }

    pub fn with_benchmark_settings(
        session: ExplorerSession,
        benchmark_settings: BenchmarkSettings,
    ) -> Self {
        let shared = Arc::new(SharedState {
            session: Mutex::new(session),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("zoom-controller".to_string())
            .spawn(move || Self::worker_loop(&worker_shared, &worker_shared.shutdown));

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("zoom controller thread could not start, animations disabled: {}", err);
                None
            }
        };

        Self {
            shared,
            worker: Mutex::new(worker),
            benchmark: BenchmarkHarness::new(benchmark_settings),
        }
    }

    fn lock_session(shared: &SharedState) -> MutexGuard<'_, ExplorerSession> {
        shared
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn worker_loop<C: CancelToken>(shared: &SharedState, cancel: &C) {
        loop {
            let mut session = Self::lock_session(shared);
            session = shared
                .wake
                .wait_while(session, |s| !s.is_animating() && !cancel.is_cancelled())
                .unwrap_or_else(PoisonError::into_inner);

            if cancel.is_cancelled() {
                return;
            }

            session.tick();
            let interval = session.settings().tick_interval;
            drop(session);

            thread::sleep(interval);
        }
    }

    /// Runs `f` against the session and wakes the tick thread afterwards.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> R {
        let result = {
            let mut session = Self::lock_session(&self.shared);
            f(&mut session)
        };
        self.shared.wake.notify_all();
        result
    }

    /// Like [`Self::with_session`] but gives up instead of waiting when the
    /// session is busy, e.g. during a benchmark run.
    pub fn try_with_session<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
        let result = {
            let mut session = match self.shared.session.try_lock() {
                Ok(session) => session,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => return None,
            };
            f(&mut session)
        };
        self.shared.wake.notify_all();
        Some(result)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.with_session(|session| session.viewport())
    }

    #[must_use]
    pub fn backend(&self) -> BackendKind {
        self.with_session(|session| session.backend())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.with_session(|session| session.is_animating())
    }

    /// Left click zooms in, right click zooms out.
    pub fn select_point(&self, pixel: Point, direction: ZoomDirection) -> bool {
        self.with_session(|session| session.select_point(pixel, direction))
    }

    pub fn wheel(&self, pixel: Point, delta: f64) -> bool {
        self.with_session(|session| session.wheel(pixel, delta))
    }

    pub fn pan(&self, dx: f64, dy: f64) -> bool {
        self.with_session(|session| session.pan(dx, dy))
    }

    #[must_use]
    pub fn pointer_coordinates(&self, pixel: Point) -> Option<Complex> {
        self.with_session(|session| session.pointer_coordinates(pixel))
    }

    pub fn toggle_backend(&self) -> BackendKind {
        self.with_session(ExplorerSession::toggle_backend)
    }

    pub fn resize(&self, size: FrameSize) {
        self.with_session(|session| session.resize(size));
    }

    pub fn render(&self) {
        self.with_session(|session| {
            let _ = session.render();
        });
    }

    #[must_use]
    pub fn benchmark_is_running(&self) -> bool {
        self.benchmark.is_running()
    }

    #[must_use]
    pub fn benchmark_settings(&self) -> &BenchmarkSettings {
        self.benchmark.settings()
    }

    /// Runs the sequential vs parallel comparison on the calling thread,
    /// `steps` frames per backend.
    ///
    /// # Errors
    /// [`BenchmarkError::AlreadyRunning`] if another run is in progress,
    /// [`BenchmarkError::Cancelled`] if [`Self::shutdown`] interrupted it.
    pub fn run_benchmark(&self, steps: u32) -> Result<BenchmarkReport, BenchmarkError> {
        let report =
            self.benchmark
                .run_comparison(&self.shared.session, steps, &self.shared.shutdown);
        self.shared.wake.notify_all();
        report
    }

    /// Stops the tick thread and waits for it. Safe to call more than once.
    ///
    /// A benchmark in progress stops before its next frame.
    pub fn shutdown(&self) {
        self.shared.shutdown.store(true, Ordering::Release);
        {
            // Waits out the current tick or benchmark frame so the tick
            // thread cannot miss the wakeup between its check and its wait.
            let _session = Self::lock_session(&self.shared);
        }
        self.shared.wake.notify_all();

        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if handle.join().is_err() {
                warn!("zoom controller thread panicked");
            } else {
                debug!("zoom controller stopped");
            }
        }
    }
}

impl Drop for ZoomController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
