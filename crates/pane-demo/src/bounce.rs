use pane_engine::{App, Bitmap, Canvas, Color, Font, Key, KeyPress, MouseButton, ShellCtx, TickTime};

const BOX_SIZE: f32 = 24.0;
const MAX_BOXES: usize = 64;

const PALETTE: [Color; 5] = [
    Color::from_hex(0xE0_6C_75),
    Color::from_hex(0x98_C3_79),
    Color::from_hex(0x61_AF_EF),
    Color::from_hex(0xE5_C0_7B),
    Color::from_hex(0xC6_78_DD),
];

/// Axis-aligned box moving at constant speed, reflecting off the canvas edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
}

impl Mover {
    pub fn step(&mut self, dt: f32, bounds: (u32, u32)) {
        let max_x = (bounds.0 as f32 - BOX_SIZE).max(0.0);
        let max_y = (bounds.1 as f32 - BOX_SIZE).max(0.0);

        self.x += self.vx * dt;
        self.y += self.vy * dt;

        if self.x < 0.0 || self.x > max_x {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, max_x);
        }
        if self.y < 0.0 || self.y > max_y {
            self.vy = -self.vy;
            self.y = self.y.clamp(0.0, max_y);
        }
    }
}

pub struct Bounce {
    movers: Vec<Mover>,
    image: Option<Bitmap>,
    font: Option<Font>,
    cursor_hidden: bool,
    paused: bool,
    fps: u32,
    ticks: u64,
}

impl Bounce {
    pub fn new(image: Option<Bitmap>, font: Option<Font>) -> Self {
        Self {
            movers: vec![Mover { x: 40.0, y: 40.0, vx: 180.0, vy: 120.0, color: PALETTE[0] }],
            image,
            font,
            cursor_hidden: false,
            paused: false,
            fps: 0,
            ticks: 0,
        }
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    /// Adds a box centered on `(x, y)`, dropping the oldest past the cap.
    pub fn spawn(&mut self, x: i32, y: i32) {
        let n = self.movers.len();
        let half = BOX_SIZE / 2.0;
        let dir = if n % 2 == 0 { 1.0 } else { -1.0 };
        self.movers.push(Mover {
            x: (x as f32 - half).max(0.0),
            y: (y as f32 - half).max(0.0),
            vx: dir * (120.0 + 20.0 * (n % 7) as f32),
            vy: -dir * (90.0 + 15.0 * (n % 5) as f32),
            color: PALETTE[n % PALETTE.len()],
        });
        if self.movers.len() > MAX_BOXES {
            self.movers.remove(0);
        }
    }
}

impl App for Bounce {
    fn on_tick(&mut self, time: TickTime, ctx: &mut ShellCtx<'_>) {
        self.fps = ctx.fps();
        self.ticks = time.index + 1;
        if self.paused {
            return;
        }

        let bounds = ctx.canvas_size();
        for m in &mut self.movers {
            m.step(time.dt, bounds);
        }
    }

    fn on_draw(&mut self, canvas: &mut Canvas) {
        canvas.clear(Color::from_hex(0x20_22_28));

        if let Some(image) = &self.image {
            canvas.draw_bitmap(image, 8, 8);
        }

        for m in &self.movers {
            let size = BOX_SIZE as i32;
            canvas.fill_rect(m.x as i32, m.y as i32, size, size, m.color);
            canvas.stroke_rect(m.x as i32, m.y as i32, size, size, Color::WHITE.with_alpha(96));
        }

        if let Some(font) = &self.font {
            let line = format!(
                "{} boxes | tick {} @ {} fps | click: spawn  space: pause  h: cursor  esc: quit",
                self.movers.len(),
                self.ticks,
                self.fps
            );
            let y = canvas.height() as i32 - 24;
            canvas.draw_text(font, &line, 8, y, 16.0, Color::WHITE);
        }
    }

    fn on_key(&mut self, key: KeyPress, ctx: &mut ShellCtx<'_>) {
        match key.key {
            Key::Escape => ctx.stop(),
            Key::Space if !key.repeat => {
                self.paused = !self.paused;
                ctx.repaint();
            }
            Key::H if !key.repeat => {
                self.cursor_hidden = !self.cursor_hidden;
                if self.cursor_hidden {
                    ctx.vanish_cursor();
                } else {
                    ctx.restore_cursor();
                }
            }
            other => log::trace!("unbound key {other}"),
        }
    }

    fn on_mouse_down(&mut self, x: i32, y: i32, button: MouseButton, ctx: &mut ShellCtx<'_>) {
        if button == MouseButton::Left {
            self.spawn(x, y);
            ctx.repaint();
        }
    }
}
