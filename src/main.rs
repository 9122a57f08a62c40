use fractal_zoom::{
    Backends, ComputeSettings, ExplorerSession, FilePresenterPort, FrameSize, FrameSurface,
    HeadlessPresenter, InteractiveControllerPresenterPort, PpmFilePresenter, ZoomController,
};
use log::info;
use std::sync::Arc;

const FRAME_SIZE: FrameSize = FrameSize::new(800, 600);
const OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let surface = Arc::new(FrameSurface::new(FRAME_SIZE));
    let presenter = Arc::new(HeadlessPresenter::new());
    let session = ExplorerSession::new(
        Arc::clone(&surface),
        Arc::clone(&presenter) as Arc<dyn InteractiveControllerPresenterPort>,
    )
    .with_backends(Backends::with_settings(&ComputeSettings::default()));
    let controller = ZoomController::new(session);

    controller.render();
    let report = controller.run_benchmark(controller.benchmark_settings().steps)?;
    controller.shutdown();

    info!(
        "{} frames presented, {} skipped",
        presenter.frames_presented(),
        presenter.errors_presented()
    );
    if let Some(speedup) = report.speedup() {
        info!("Parallel backend was {:.2}x faster", speedup);
    }

    std::fs::create_dir_all("output")?;
    surface.read(|buffer| PpmFilePresenter::new().present(buffer, OUTPUT_PATH))?;
    info!("Wrote {}", OUTPUT_PATH);

    Ok(())
}
