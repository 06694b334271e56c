//! Headless replay of a carousel session.
//!
//! ```text
//! vitrine <catalog.json> [options.toml] [script.json]
//! ```
//!
//! Runs the engine at a fixed 60 Hz against a recording sink, applies the
//! script's steps at their timestamps and logs selection, view mode and
//! scroll changes as they happen. Set `RUST_LOG=debug` for per-transition
//! detail from the engine itself.

use std::path::Path;

use serde::Deserialize;
use vitrine::card::CardId;
use vitrine::catalog::Catalog;
use vitrine::engine::CarouselEngine;
use vitrine::error::VitrineError;
use vitrine::input::InputEvent;
use vitrine::options::Options;
use vitrine::scene::FrameRecorder;
use vitrine::util::FrameClock;
use web_time::Duration;

/// One 60 Hz frame.
const FRAME: Duration = Duration::from_nanos(16_666_667);
const VIEWPORT: (f32, f32) = (1400.0, 800.0);
/// Frames allowed after the last step for the carousel to come to rest.
const SETTLE_LIMIT: u32 = 60 * 30;

/// One timed action in a replay script.
#[derive(Debug, Clone, Deserialize)]
struct ScriptStep {
    /// Seconds since the start of the replay.
    at: f32,
    #[serde(flatten)]
    action: Action,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Action {
    Input { event: InputEvent },
    Key { code: String },
    Hover { card: Option<CardId> },
    Resize { width: f32, height: f32 },
}

fn load_script(path: &Path) -> Result<Vec<ScriptStep>, VitrineError> {
    let content = std::fs::read_to_string(path)?;
    let mut steps: Vec<ScriptStep> = serde_json::from_str(&content)?;
    steps.retain(|s| s.at.is_finite());
    steps.sort_by(|a, b| a.at.total_cmp(&b.at));
    log::info!("script loaded from {}: {} steps", path.display(), steps.len());
    Ok(steps)
}

fn apply(engine: &mut CarouselEngine, action: Action) {
    match action {
        Action::Input { event } => engine.handle_input(event),
        Action::Key { code } => engine.handle_key_press(&code),
        Action::Hover { card } => engine.set_hovered(card),
        Action::Resize { width, height } => engine.resize(width, height),
    }
}

/// What the log reports when it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Observed {
    selected: Option<CardId>,
    mode: vitrine::camera::ViewMode,
    phase: vitrine::carousel::ScrollPhase,
}

impl Observed {
    fn of(engine: &CarouselEngine) -> Self {
        Self {
            selected: engine.selected(),
            mode: engine.view_mode(),
            phase: engine.scroll().phase(),
        }
    }
}

fn run(
    engine: &mut CarouselEngine,
    steps: Vec<ScriptStep>,
) -> FrameRecorder {
    let mut sink = FrameRecorder::new();
    let mut clock = FrameClock::default();
    let mut steps = steps.into_iter().peekable();
    let mut observed = Observed::of(engine);
    let mut time = 0.0_f32;
    let mut settle_frames = 0;

    loop {
        while let Some(step) = steps.next_if(|s| s.at <= time) {
            log::debug!("t={time:.3}s {:?}", step.action);
            apply(engine, step.action);
        }

        let dt = clock.advance(FRAME);
        engine.tick(dt, &mut sink);
        time += dt;

        let now = Observed::of(engine);
        if now != observed {
            log::info!(
                "t={time:.3}s selected={:?} mode={:?} scroll={:?} @ {:.3}",
                now.selected,
                now.mode,
                now.phase,
                engine.scroll().position()
            );
            observed = now;
        }

        if steps.peek().is_none() {
            if !engine.is_animating() {
                break;
            }
            settle_frames += 1;
            if settle_frames > SETTLE_LIMIT {
                log::warn!("carousel still moving after {SETTLE_LIMIT} frames");
                break;
            }
        }
    }
    log::debug!("replayed {} frames at {:.1} fps", clock.frames(), clock.fps());
    sink
}

fn main() -> Result<(), VitrineError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(catalog_path) = args.get(1) else {
        log::error!("usage: vitrine <catalog.json> [options.toml] [script.json]");
        std::process::exit(2);
    };

    let catalog = Catalog::load(Path::new(catalog_path))?;
    let options = match args.get(2) {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let steps = match args.get(3) {
        Some(path) => load_script(Path::new(path))?,
        None => Vec::new(),
    };

    let mut engine =
        CarouselEngine::new(&catalog, options, VIEWPORT.0, VIEWPORT.1);
    let sink = run(&mut engine, steps);

    log::info!(
        "replay finished after {} frames ({:.2}s): {} card writes, selected {:?}, scroll at {:.3}",
        engine.frame_count(),
        engine.frame_count() as f32 * FRAME.as_secs_f32(),
        sink.card_writes,
        engine.selected(),
        engine.scroll().position()
    );
    if let Some(camera) = sink.camera {
        log::info!("camera eye {:?} looking at {:?}", camera.eye, camera.target);
    }
    Ok(())
}
