mod ship;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use winit::dpi::LogicalSize;

use orrery_engine::assets::{AssetManifest, ImageAsset, MemoryAssetSource};
use orrery_engine::coords::{Color, Vec2};
use orrery_engine::engine::{EngineConfig, LoadPlan, Phase, SceneEngine, Script};
use orrery_engine::input::Key;
use orrery_engine::logging::{init_logging, LoggingConfig};
use orrery_engine::scene::shapes::{Graphic, Rectangle, Text};
use orrery_engine::scene::{
    Canvas, Drawable, RenderSettings, Style, TextAlign, Transform, Viewport, MAIN_VIEWPORT,
};
use orrery_engine::window::{Runtime, RuntimeConfig};

use ship::Ship;

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;
const HUD: &str = "hud";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Recording canvases keep the window blank; swap in a painting `Surface`
    // to see the scene.
    let viewports = vec![
        Viewport::new(MAIN_VIEWPORT, Canvas::new(WIDTH, HEIGHT)),
        Viewport::new(HUD, Canvas::new(WIDTH, HEIGHT)),
    ];

    let manifest = AssetManifest::new().image("generated/star.png", "star");
    let source = MemoryAssetSource::new().with_image("generated/star.png", star_sprite(9));

    let mut engine = SceneEngine::new(EngineConfig::default());
    engine.initialize(viewports, LoadPlan::new(manifest, source).on_load(build_scene))?;

    Runtime::run(
        RuntimeConfig {
            title: "orrery demo".to_string(),
            initial_size: LogicalSize::new(WIDTH as f64, HEIGHT as f64),
            ..RuntimeConfig::default()
        },
        engine,
    )
}

/// Soft round dot, white with a radial alpha falloff.
fn star_sprite(side: u32) -> ImageAsset {
    let c = (side as f32 - 1.0) / 2.0;
    let mut pixels = Vec::with_capacity((side * side * 4) as usize);
    for y in 0..side {
        for x in 0..side {
            let d = Vec2::new(x as f32 - c, y as f32 - c).magnitude() / c.max(1.0);
            let a = ((1.0 - d).clamp(0.0, 1.0) * 255.0) as u8;
            pixels.extend_from_slice(&[255, 255, 255, a]);
        }
    }
    ImageAsset::new(side, side, pixels)
}

/// Deterministic scatter so every run shows the same sky.
fn scatter(count: usize, spread: f32) -> Vec<Vec2> {
    let mut seed: u32 = 0x2545_F491;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        (seed as f32 / u32::MAX as f32) * 2.0 - 1.0
    };
    (0..count).map(|_| Vec2::new(next() * spread, next() * spread)).collect()
}

fn build_scene(engine: &mut SceneEngine) {
    for (i, p) in scatter(160, 2000.0).into_iter().enumerate() {
        let star = Graphic::new("star")
            .with_width(if i % 7 == 0 { 9.0 } else { 4.0 })
            .with_transform(Transform::at(p));
        engine.add_drawable(Rc::new(RefCell::new(star)));
    }

    let beacon = Rc::new(RefCell::new(
        Rectangle::square(40.0)
            .with_transform(Transform::at(Vec2::new(0.0, 200.0)).rotated(45.0))
            .with_style(Style::outlined(Color::from_rgb_u8(0xFF, 0xB7, 0x4D), 3.0))
            .with_settings(RenderSettings::default().on_layer(1)),
    ));
    engine.add_drawable(beacon.clone());

    let ship = Rc::new(RefCell::new(Ship::new(RenderSettings::default().on_layer(2))));
    engine.add_drawable(ship.clone());

    let status = Rc::new(RefCell::new(
        Text::new("")
            .with_font("monospace", 18.0)
            .with_transform(Transform::at(Vec2::new(-WIDTH / 2.0 + 16.0, HEIGHT / 2.0 - 24.0)))
            .with_style(Style::filled(Color::white()))
            .with_settings(RenderSettings::default().on_viewports([HUD])),
    ));
    status.borrow_mut().align = TextAlign::Left;
    engine.add_drawable(status.clone());

    // Ship controls; the camera follows in the same phase so it never lags.
    let controls = {
        let ship = Rc::clone(&ship);
        Script::new(move |_, engine| {
            let dt = engine.dt();
            let position = {
                let mut ship = ship.borrow_mut();
                ship.steer(engine.input(), dt);
                ship.position
            };
            if let Some(camera) = engine.main_viewport_mut() {
                camera.set_position(position);
            }
        })
    };
    engine.add_script(controls.clone(), Phase::PreRender);

    {
        let ship = Rc::clone(&ship);
        engine.add_script(
            Script::new(move |_, engine| ship.borrow_mut().run_projectiles(engine.dt())),
            Phase::PreRender,
        );
    }

    {
        let beacon = Rc::clone(&beacon);
        engine.add_script(
            Script::new(move |_, engine| {
                let dt = engine.dt();
                beacon.borrow_mut().transform.angle += 45.0 * dt;
            }),
            Phase::PreRender,
        );
    }

    // P pauses steering, H hides the beacon, F11 goes fullscreen, Q quits.
    engine.add_script(
        Script::new(move |_, engine| {
            if engine.input().key_pressed(Key::P) {
                let enabled = !controls.is_enabled();
                engine.set_script_enabled(&controls, enabled);
                log::info!("steering {}", if enabled { "resumed" } else { "paused" });
            }
            if engine.input().key_pressed(Key::H) {
                let visible = !beacon.borrow().settings().visible();
                engine.set_visible(&beacon, visible);
            }
            if engine.input().key_pressed(Key::F11) {
                engine.enter_fullscreen();
            }
            if engine.input().key_pressed(Key::Q) {
                engine.request_exit();
            }
        }),
        Phase::PostRender,
    );

    engine.add_script(
        Script::new(move |_, engine| {
            let (position, projectiles) = {
                let ship = ship.borrow();
                (ship.position, ship.projectile_count())
            };
            status.borrow_mut().content = format!(
                "frame {}  pos {}  shots {}  drawn {}",
                engine.frame(),
                position,
                projectiles,
                engine
                    .main_viewport()
                    .and_then(|v| v.surface().draw_list())
                    .map(|l| l.len())
                    .unwrap_or(0),
            );
        }),
        Phase::PostRender,
    );
}
