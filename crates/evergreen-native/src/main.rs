use evergreen_core::{
    Camera, FrameClock, InferenceLoop, Instance, ModeController, PollOutcome, Scene, SceneConfig,
};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod render;
mod sim;

use render::GpuState;
use sim::{KeyboardHand, Pose};

// Aspect ratios of the bundled photo set; cards are added one at a time as
// if each image had just finished decoding.
const PHOTO_ASPECTS: [f32; 22] = [
    0.75, 0.75, 1.333, 1.333, 0.75, 0.75, 1.333, 0.5625, 0.75, 1.778, 0.75, 1.0, 0.75, 1.333,
    0.5625, 0.75, 1.333, 1.333, 0.75, 0.5625, 1.778, 0.75,
];
const PHOTO_LOAD_INTERVAL_SEC: f32 = 0.12;

fn pose_for_key(code: KeyCode) -> Option<Option<Pose>> {
    match code {
        KeyCode::KeyF => Some(Some(Pose::Fist)),
        KeyCode::KeyO => Some(Some(Pose::Open)),
        KeyCode::KeyP => Some(Some(Pose::Pinch)),
        KeyCode::KeyR => Some(Some(Pose::Relaxed)),
        KeyCode::Space => Some(None),
        _ => None,
    }
}

fn title(controller: &ModeController) -> String {
    let state = controller.state();
    format!(
        "Evergreen  [{}]  hand: {}",
        state.mode().as_str(),
        if state.hand_detected() { "yes" } else { "no" }
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = SceneConfig::default();
    let thresholds = config.gesture;
    let mut controller = ModeController::new(config.seed);
    let mut scene = Scene::new(config)?;
    let mut inference = InferenceLoop::start(thresholds, KeyboardHand::new);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(title(&controller))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut clock = FrameClock::new();
    let mut instances: Vec<Instance> = Vec::new();
    let mut photos_loaded = 0usize;
    let mut next_photo_at = 0.0f32;
    let mut shown_title = title(&controller);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if code == KeyCode::Escape {
                elwt.exit();
            } else if let Some(pose) = pose_for_key(code) {
                if let Some(hand) = inference.tracker_mut() {
                    hand.set_pose(pose);
                }
            }
        }
        Event::AboutToWait => {
            let dt = clock.tick();
            let elapsed = clock.elapsed();

            if photos_loaded < PHOTO_ASPECTS.len() && elapsed >= next_photo_at {
                scene.add_photo(PHOTO_ASPECTS[photos_loaded]);
                photos_loaded += 1;
                next_photo_at = elapsed + PHOTO_LOAD_INTERVAL_SEC;
            }

            // Inference first so a committed mode change shows this frame
            if let Some(hand) = inference.tracker_mut() {
                hand.advance_video(elapsed as f64);
            }
            if let PollOutcome::Observed {
                change: Some(change),
                ..
            } = inference.poll(clock.now_ms(), &mut controller, scene.photo_ids())
            {
                log::debug!("[native] {:?}", change);
            }

            scene.advance(dt, elapsed, controller.state());
            scene.write_instances(&mut instances);

            let next_title = title(&controller);
            if next_title != shown_title {
                gpu.window.set_title(&next_title);
                shown_title = next_title;
            }

            let camera = Camera::viewer(gpu.aspect());
            match gpu.render(&camera, &instances) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
