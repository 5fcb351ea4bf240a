use orrery_engine::coords::{Color, Vec2};
use orrery_engine::input::{InputState, Key};
use orrery_engine::scene::shapes::{Circle, Path};
use orrery_engine::scene::{Anchor, DrawCtx, Drawable, RenderSettings, Style, Transform};

/// Per-frame constants are tuned for 60 Hz and scaled by `dt * 60`.
const FORWARD_SPEED: f32 = 3.0;
const TURN_SPEED: f32 = 3.0;
const FIRE_COOLDOWN: f32 = 10.0;
const PROJECTILE_SPEED: f32 = 8.0;
const PROJECTILE_LIFE: f32 = 90.0;

struct Projectile {
    body: Circle,
    velocity: Vec2,
    life: f32,
}

/// Player ship. Its projectiles are not registered with the engine; the ship
/// draws them itself, and they stay where they were fired from as it moves.
pub struct Ship {
    pub position: Vec2,
    /// Heading in degrees, counter-clockwise from +X.
    pub angle: f32,
    hull: Path,
    active: Vec<Projectile>,
    spare: Vec<Projectile>,
    cooldown: f32,
    settings: RenderSettings,
}

impl Ship {
    pub fn new(settings: RenderSettings) -> Self {
        let hull = Path::new(vec![Vec2::new(0.0, 18.0), Vec2::new(-11.0, -12.0), Vec2::new(11.0, -12.0)])
            .with_style(Style {
                fill: Some(Color::from_rgb_u8(0x1D, 0xE9, 0xB6)),
                outline: Some(Color::white()),
                outline_width: 2.0,
            });

        Self {
            position: Vec2::ZERO,
            angle: 90.0,
            hull,
            active: Vec::new(),
            spare: Vec::new(),
            cooldown: 0.0,
            settings,
        }
    }

    /// W thrusts, A/D turn, S fires.
    pub fn steer(&mut self, input: &InputState, dt: f32) {
        let step = dt * 60.0;

        let mut turn = 0.0;
        if input.key_held(Key::A) {
            turn += 1.0;
        }
        if input.key_held(Key::D) {
            turn -= 1.0;
        }
        self.angle += turn * TURN_SPEED * step;

        if input.key_held(Key::W) {
            self.position += Vec2::from_angle(self.angle) * (FORWARD_SPEED * step);
        }

        if self.cooldown > 0.0 {
            self.cooldown -= step;
        } else if input.key_held(Key::S) {
            self.cooldown = FIRE_COOLDOWN;
            self.fire();
        }
    }

    fn fire(&mut self) {
        let mut projectile = self.spare.pop().unwrap_or_else(|| Projectile {
            body: Circle::new(3.0).with_style(Style::filled(Color::white())),
            velocity: Vec2::ZERO,
            life: 0.0,
        });
        projectile.body.transform = Transform::at(self.position);
        projectile.velocity = Vec2::from_angle(self.angle) * PROJECTILE_SPEED;
        projectile.life = PROJECTILE_LIFE;
        self.active.push(projectile);
    }

    /// Moves live projectiles and returns expired ones to the pool.
    pub fn run_projectiles(&mut self, dt: f32) {
        let step = dt * 60.0;
        let mut i = self.active.len();
        while i > 0 {
            i -= 1;
            let p = &mut self.active[i];
            p.body.transform.position += p.velocity * step;
            p.life -= step;
            if p.life <= 0.0 {
                let expired = self.active.swap_remove(i);
                self.spare.push(expired);
            }
        }
    }

    pub fn projectile_count(&self) -> usize {
        self.active.len()
    }
}

impl Drawable for Ship {
    fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw(&self, ctx: &mut DrawCtx<'_>, anchor: &Anchor) {
        for p in &self.active {
            p.body.draw(ctx, anchor);
        }

        // Hull art points up; heading 90 is up.
        let hull_anchor = anchor.child(&Transform::at(self.position).rotated(self.angle - 90.0));
        self.hull.draw(ctx, &hull_anchor);
    }
}
