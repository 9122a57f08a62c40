use crate::controllers::benchmark::errors::BenchmarkError;
use crate::controllers::benchmark::report::BenchmarkReport;
use crate::controllers::benchmark::result::BenchmarkResult;
use crate::controllers::benchmark::settings::BenchmarkSettings;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::session::ExplorerSession;
use crate::core::actions::cancellation::CancelToken;
use crate::core::compute::BackendKind;
use crate::core::data::viewport::Viewport;
use log::{info, warn};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

/// Clears the single-flight flag when the run ends, however it ends.
struct RunningFlag<'a>(&'a AtomicBool);

impl Drop for RunningFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Holds the session for the whole run and puts the saved view back on drop.
struct RestoreOnDrop<'a> {
    session: MutexGuard<'a, ExplorerSession>,
    viewport: Viewport,
    backend: BackendKind,
    frame_logging: bool,
}

impl<'a> RestoreOnDrop<'a> {
    fn new(session: MutexGuard<'a, ExplorerSession>) -> Self {
        let viewport = session.viewport();
        let backend = session.backend();
        let frame_logging = session.frame_logging();
        Self {
            session,
            viewport,
            backend,
            frame_logging,
        }
    }
}

impl Deref for RestoreOnDrop<'_> {
    type Target = ExplorerSession;

    fn deref(&self) -> &Self::Target {
        &self.session
    }
}

impl DerefMut for RestoreOnDrop<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.session
    }
}

impl Drop for RestoreOnDrop<'_> {
    fn drop(&mut self) {
        self.session.set_viewport(self.viewport);
        self.session.set_backend(self.backend);
        self.session.set_frame_logging(self.frame_logging);

        if !thread::panicking() {
            let _ = self.session.render();
        }
    }
}

/// Renders the same zoom trajectory with each backend and compares the time
/// spent rendering.
#[derive(Debug, Default)]
pub struct BenchmarkHarness {
    settings: BenchmarkSettings,
    running: AtomicBool,
}

impl BenchmarkHarness {
    #[must_use]
    pub fn new(settings: BenchmarkSettings) -> Self {
        Self {
            settings,
            running: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &BenchmarkSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Runs the comparison against the live session, `steps` frames per
    /// backend.
    ///
    /// The session's viewport, backend and frame logging are saved first and
    /// restored when the run ends, including when a backend panics. Any
    /// running zoom animation is cancelled. `cancel` is checked before every
    /// frame.
    ///
    /// # Errors
    /// [`BenchmarkError::AlreadyRunning`] if a run is in progress; the
    /// session is not touched in that case. [`BenchmarkError::Cancelled`] if
    /// `cancel` fired during the run.
    pub fn run_comparison<C: CancelToken + ?Sized>(
        &self,
        session: &Mutex<ExplorerSession>,
        steps: u32,
        cancel: &C,
    ) -> Result<BenchmarkReport, BenchmarkError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Experiment already running!");
            return Err(BenchmarkError::AlreadyRunning);
        }
        let _running = RunningFlag(&self.running);

        let mut session =
            RestoreOnDrop::new(session.lock().unwrap_or_else(PoisonError::into_inner));
        session.cancel_zoom();
        session.set_frame_logging(false);

        let frame_size = session.frame_size();
        info!(
            "Starting performance comparison: {} steps at {}x{}",
            steps,
            frame_size.width(),
            frame_size.height()
        );

        let sequential = self.run_phase(&mut session, BackendKind::Sequential, steps, cancel)?;
        let parallel = self.run_phase(&mut session, BackendKind::BulkParallel, steps, cancel)?;

        let report = BenchmarkReport {
            sequential,
            parallel,
            steps,
            frame_size,
            target: self.settings.target,
        };

        report.log();
        let summary = match report.speedup() {
            Some(speedup) => format!("Speedup: {:.2}x", speedup),
            None => "Speedup: undefined".to_string(),
        };
        session
            .presenter_port()
            .present(RenderEvent::Status(summary));

        Ok(report)
    }

    fn run_phase<C: CancelToken + ?Sized>(
        &self,
        session: &mut ExplorerSession,
        backend: BackendKind,
        steps: u32,
        cancel: &C,
    ) -> Result<BenchmarkResult, BenchmarkError> {
        let settings = &self.settings;
        let mut result = BenchmarkResult::new(backend);

        session.set_backend(backend);
        session.set_viewport(Viewport::default());
        info!("Testing {} implementation...", backend.display_name());

        for step in 1..=steps {
            if cancel.is_cancelled() {
                warn!(
                    "performance comparison cancelled during the {} run",
                    backend.label()
                );
                return Err(BenchmarkError::Cancelled);
            }

            if let Err(err) = session.advance_toward(settings.target) {
                warn!(
                    "{} run stopped after {} steps: {}",
                    backend.label(),
                    step - 1,
                    err
                );
                break;
            }

            match session.render() {
                Ok(stats) => {
                    result.total_elapsed_millis += stats.elapsed.as_secs_f64() * 1000.0;
                    result.frame_count += 1;
                }
                Err(_) => result.skipped_frames += 1,
            }
            session.presenter_port().sync();

            if settings.progress_interval > 0 && step % settings.progress_interval == 0 {
                info!(
                    "{} progress: {}/{} frames",
                    backend.label(),
                    step,
                    steps
                );
            }

            if !settings.frame_delay.is_zero() {
                thread::sleep(settings.frame_delay);
            }
        }

        info!(
            "{} implementation finished: {:.2} ms",
            backend.label(),
            result.total_elapsed_millis
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
    use crate::core::compute::errors::ComputeFailure;
    use crate::core::compute::sequential::SequentialBackend;
    use crate::core::compute::{Backends, ComputeBackend};
    use crate::core::data::complex::Complex;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::data::frame_surface::FrameSurface;
    use crate::core::data::iteration_buffer::IterationBuffer;
    use crate::core::data::point::Point;
    use crate::core::zoom::target::ZoomDirection;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
        syncs: AtomicUsize,
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn sync(&self) {
            self.syncs.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct PanickingBackend;

    impl ComputeBackend for PanickingBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::BulkParallel
        }

        fn compute_frame(&self, _: Viewport, _: FrameSize) -> Result<IterationBuffer, ComputeFailure> {
            panic!("device exploded");
        }
    }

    struct DegenerateBackend;

    impl ComputeBackend for DegenerateBackend {
        fn kind(&self) -> BackendKind {
            BackendKind::BulkParallel
        }

        fn compute_frame(&self, _: Viewport, size: FrameSize) -> Result<IterationBuffer, ComputeFailure> {
            Err(ComputeFailure::DegenerateFrame {
                width: size.width(),
                height: size.height(),
            })
        }
    }

    fn quick_settings(steps: u32) -> BenchmarkSettings {
        BenchmarkSettings {
            steps,
            frame_delay: Duration::ZERO,
            progress_interval: 2,
            ..BenchmarkSettings::default()
        }
    }

    fn run(
        harness: &BenchmarkHarness,
        session: &Mutex<ExplorerSession>,
    ) -> Result<BenchmarkReport, BenchmarkError> {
        harness.run_comparison(session, harness.settings().steps, &AtomicBool::new(false))
    }

    fn live_viewport() -> Viewport {
        Viewport::new(Complex::new(0.3, -0.4), 0.75, 0.5, 123).unwrap()
    }

    fn session_with(backends: Backends) -> (Mutex<ExplorerSession>, Arc<MockPresenterPort>) {
        let presenter = Arc::new(MockPresenterPort::default());
        let session = ExplorerSession::new(
            Arc::new(FrameSurface::new(FrameSize::new(12, 8))),
            Arc::clone(&presenter) as Arc<dyn InteractiveControllerPresenterPort>,
        )
        .with_backends(backends)
        .with_backend(BackendKind::Sequential)
        .with_viewport(live_viewport());

        (Mutex::new(session), presenter)
    }

    #[test_log::test]
    fn test_comparison_reports_both_backends() {
        let harness = BenchmarkHarness::new(quick_settings(6));
        let (session, presenter) = session_with(Backends::default());

        let report = run(&harness, &session).unwrap();

        assert_eq!(report.sequential.backend, BackendKind::Sequential);
        assert_eq!(report.parallel.backend, BackendKind::BulkParallel);
        assert_eq!(report.sequential.frame_count, 6);
        assert_eq!(report.parallel.frame_count, 6);
        assert_eq!(report.steps, 6);
        assert_eq!(report.frame_size, FrameSize::new(12, 8));
        assert_eq!(presenter.syncs.load(Ordering::SeqCst), 12);
        assert!(!harness.is_running());
    }

    #[test]
    fn test_viewport_and_backend_are_restored() {
        let harness = BenchmarkHarness::new(quick_settings(4));
        let (session, presenter) = session_with(Backends::default());

        run(&harness, &session).unwrap();

        let session = session.lock().unwrap();
        assert_eq!(session.viewport(), live_viewport());
        assert_eq!(session.backend(), BackendKind::Sequential);

        // the restored view is drawn again after the run
        let events = presenter.events.lock().unwrap();
        assert!(matches!(events.last(), Some(RenderEvent::Frame(frame)) if frame.backend == BackendKind::Sequential));
    }

    #[test]
    fn test_running_animation_is_cancelled() {
        let harness = BenchmarkHarness::new(quick_settings(1));
        let (session, _) = session_with(Backends::default());
        session
            .lock()
            .unwrap()
            .select_point(Point { x: 1, y: 1 }, ZoomDirection::In);

        run(&harness, &session).unwrap();

        assert!(!session.lock().unwrap().is_animating());
    }

    #[test]
    fn test_second_run_while_running_is_rejected() {
        let harness = Arc::new(BenchmarkHarness::new(BenchmarkSettings {
            steps: 20,
            frame_delay: Duration::from_millis(10),
            progress_interval: 0,
            ..BenchmarkSettings::default()
        }));
        let (session, _) = session_with(Backends::default());
        let session = Arc::new(session);

        let first = {
            let harness = Arc::clone(&harness);
            let session = Arc::clone(&session);
            thread::spawn(move || run(&harness, &session))
        };

        let start = std::time::Instant::now();
        while !harness.is_running() && start.elapsed() < Duration::from_secs(5) {
            thread::yield_now();
        }

        let second = run(&harness, &session);

        assert_eq!(second, Err(BenchmarkError::AlreadyRunning));
        assert!(first.join().unwrap().is_ok());
        assert_eq!(session.lock().unwrap().viewport(), live_viewport());
        assert!(!harness.is_running());
    }

    #[test]
    fn test_rejected_run_does_not_touch_session() {
        let harness = BenchmarkHarness::new(quick_settings(1));
        let (session, presenter) = session_with(Backends::default());
        harness.running.store(true, Ordering::Release);

        let result = run(&harness, &session);

        assert_eq!(result, Err(BenchmarkError::AlreadyRunning));
        assert!(presenter.events.lock().unwrap().is_empty());
        assert_eq!(session.lock().unwrap().viewport(), live_viewport());
    }

    #[test_log::test]
    fn test_failed_frames_are_skipped_not_timed() {
        let harness = BenchmarkHarness::new(quick_settings(3));
        let (session, _) =
            session_with(Backends::new(Box::new(SequentialBackend), Box::new(DegenerateBackend)));

        let report = run(&harness, &session).unwrap();

        assert_eq!(report.parallel.frame_count, 0);
        assert_eq!(report.parallel.skipped_frames, 3);
        assert_eq!(report.parallel.total_elapsed_millis, 0.0);
        assert_eq!(report.speedup(), None);
        assert_eq!(report.csv_lines()[2], "Speedup,undefined");
    }

    #[test]
    fn test_panicking_backend_still_restores_and_releases() {
        let harness = BenchmarkHarness::new(quick_settings(2));
        let (session, _) =
            session_with(Backends::new(Box::new(SequentialBackend), Box::new(PanickingBackend)));

        let outcome = catch_unwind(AssertUnwindSafe(|| run(&harness, &session)));

        assert!(outcome.is_err());
        assert!(!harness.is_running());
        let session = session.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(session.viewport(), live_viewport());
        assert_eq!(session.backend(), BackendKind::Sequential);
    }

    #[test]
    fn test_step_count_overrides_settings() {
        let harness = BenchmarkHarness::new(quick_settings(6));
        let (session, _) = session_with(Backends::default());

        let report = harness
            .run_comparison(&session, 3, &AtomicBool::new(false))
            .unwrap();

        assert_eq!(report.steps, 3);
        assert_eq!(report.sequential.frame_count, 3);
        assert_eq!(report.parallel.frame_count, 3);
    }

    #[test]
    fn test_disabled_frame_logging_stays_disabled() {
        let harness = BenchmarkHarness::new(quick_settings(1));
        let (session, _) = session_with(Backends::default());
        session.lock().unwrap().set_frame_logging(false);

        run(&harness, &session).unwrap();

        assert!(!session.lock().unwrap().frame_logging());
    }

    #[test]
    fn test_enabled_frame_logging_is_restored() {
        let harness = BenchmarkHarness::new(quick_settings(1));
        let (session, _) = session_with(Backends::default());

        run(&harness, &session).unwrap();

        assert!(session.lock().unwrap().frame_logging());
    }

    #[test_log::test]
    fn test_cancelled_run_stops_and_restores() {
        let harness = BenchmarkHarness::new(quick_settings(50));
        let (session, presenter) = session_with(Backends::default());

        let result = harness.run_comparison(&session, 50, &AtomicBool::new(true));

        assert_eq!(result, Err(BenchmarkError::Cancelled));
        assert_eq!(presenter.syncs.load(Ordering::SeqCst), 0);
        assert!(!harness.is_running());
        let session = session.lock().unwrap();
        assert_eq!(session.viewport(), live_viewport());
        assert_eq!(session.backend(), BackendKind::Sequential);
    }
}
