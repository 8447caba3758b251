// Desktop shell for the painter.
// What you get:
// - Hold left mouse to paint; release to end the stroke.
// - [ and ] shrink/grow the brush, M toggles mirror mode, C clears the canvas.
// - 1-9 pick palette colors. Holding Tab stands in for a UI overlay grabbing
//   the pointer (samples are dropped). ESC quits.

mod draw;

use clap::Parser;
use draw::{Drawer, blit_scaled, draw_brush_outline};
use log::info;
use mandala_paint::{CanvasMapper, Error, PainterConfig, Point, PointerSample, StrokeSession};
use minifb::Key;
use std::path::PathBuf;

const PALETTE_KEYS: [Key; 9] = [
    Key::Key1,
    Key::Key2,
    Key::Key3,
    Key::Key4,
    Key::Key5,
    Key::Key6,
    Key::Key7,
    Key::Key8,
    Key::Key9,
];

/// Mirror-symmetric pixel painter.
#[derive(Parser, Debug)]
#[command(name = "mandala-paint", about = "Kaleidoscope pixel painter")]
struct CliArgs {
    /// Config file to use instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Screen pixels per canvas pixel.
    #[arg(short, long)]
    scale: Option<u32>,
}

fn load_config(args: &CliArgs) -> Result<PainterConfig, Error> {
    let mut config = match &args.config {
        Some(path) => PainterConfig::load_from_path(path)?,
        None => PainterConfig::load_from_file()?,
    };
    if let Some(w) = args.width {
        config.canvas.width = w;
    }
    if let Some(h) = args.height {
        config.canvas.height = h;
    }
    if let Some(s) = args.scale {
        config.window.scale = s;
    }
    config.validate()?;
    Ok(config)
}

fn title(session: &StrokeSession) -> String {
    let brush = session.brush();
    format!(
        "mandala-paint | width {} | mirror {} | color #{:06X}",
        brush.half_width,
        if brush.mirror { "on" } else { "off" },
        brush.color.to_u32()
    )
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    info!(
        "canvas {}x{} at scale {}",
        config.canvas.width, config.canvas.height, config.window.scale
    );

    let mut session = StrokeSession::from_config(&config)?;
    let scale = config.window.scale as usize;
    let mapper = CanvasMapper::fit(session.width(), session.height(), scale as f32);

    let mut drawer = Drawer::new(
        &title(&session),
        session.width() as usize * scale,
        session.height() as usize * scale,
    )?;

    let mut frame = Vec::new();
    let mut shown = Vec::new();
    let mut drawn_generation = None;
    let mut was_down = false;

    while drawer.is_open() && !drawer.esc_pressed() {
        /* Settings: the only way the UI talks to the core */
        let mut settings_changed = false;
        if drawer.pressed_repeat(Key::LeftBracket) {
            let w = session.brush().half_width.saturating_sub(1);
            session.set_brush_width(w);
            settings_changed = true;
        }
        if drawer.pressed_repeat(Key::RightBracket) {
            session.set_brush_width(session.brush().half_width.saturating_add(1));
            settings_changed = true;
        }
        if drawer.pressed_once(Key::M) {
            session.set_mirror_mode(!session.brush().mirror);
            settings_changed = true;
        }
        for (key, color) in PALETTE_KEYS.iter().zip(&config.window.palette) {
            if drawer.pressed_once(*key) {
                session.set_pen_color(*color);
                settings_changed = true;
            }
        }
        if drawer.pressed_once(Key::C) {
            info!("canvas cleared");
            session.reset_canvas();
        }
        if settings_changed {
            drawer.set_title(&title(&session));
        }

        /* Pointer: minifb only reports button state, so derive the release edge */
        let down = drawer.left_mouse_down();
        let mouse = drawer.mouse_pos();
        if let Some((mx, my)) = mouse {
            session.on_pointer_sample(
                &mapper,
                PointerSample {
                    position: Point::new(mx, my),
                    down,
                    up: was_down && !down,
                    over_ui: drawer.key_down(Key::Tab),
                },
            );
        } else if was_down && !down {
            session.release();
        }
        was_down = down;

        /* Present: re-blit only when the canvas committed something new */
        if drawn_generation != Some(session.generation()) {
            blit_scaled(session.display_buffer(), scale, &mut frame);
            drawn_generation = Some(session.generation());
        }
        shown.resize(frame.len(), 0);
        shown.copy_from_slice(&frame);
        if let Some((mx, my)) = mouse {
            let px = mapper.map(Point::new(mx, my));
            let (fw, fh) = drawer.size();
            let half = (session.brush().half_width as usize)
                .saturating_mul(scale)
                .min(fw.max(fh)) as i32;
            let center = (px.x * scale as i32, px.y * scale as i32);
            draw_brush_outline(&mut shown, drawer.size(), center, half, 0x00_80_80_80);
        }
        drawer.present(&shown)?;
    }

    info!("bye");
    Ok(())
}
