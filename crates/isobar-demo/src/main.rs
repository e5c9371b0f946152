#![forbid(unsafe_code)]

//! Terminal demo: animated topographic contours in Braille.
//!
//! Runs the contour scene against a [`BrailleCanvas`] sized to the terminal
//! and repaints at a fixed cadence. Resizing the terminal re-sizes the
//! canvas; the next tick renders at the new dimensions. Quit with `q`,
//! `Esc`, or Ctrl-C.
//!
//! Logging goes to stderr via `tracing` (`RUST_LOG=isobar_demo=debug` etc.);
//! redirect stderr to a file to keep the alternate screen clean.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, event, execute, queue, terminal};
use isobar_render::{BrailleCanvas, ContourScene, Rgba, SceneParams};

/// Target repaint cadence. The scene advances a fixed amount per tick, so
/// this sets the apparent speed; 30 Hz reads smoothly in a terminal without
/// saturating slow TTYs.
const FRAME_BUDGET: Duration = Duration::from_millis(33);

fn usage() -> ! {
    eprintln!("usage: isobar-demo [--seed N]");
    std::process::exit(2);
}

fn parse_args() -> SceneParams {
    let mut params = SceneParams {
        // A terminal dot raster is far coarser than a browser canvas;
        // tighten the cells and enlarge the features to compensate.
        cell_size: 2.0,
        scale: 0.02,
        speed: 0.006,
        ..SceneParams::default()
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                Some(seed) => params.seed = seed,
                None => usage(),
            },
            "--help" | "-h" => usage(),
            _ => usage(),
        }
    }
    params
}

fn to_term_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}

/// Restores the terminal even when the run loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn present(canvas: &BrailleCanvas, out: &mut impl Write) -> io::Result<()> {
    let stroke = canvas.stroke();
    queue!(
        out,
        cursor::MoveTo(0, 0),
        SetBackgroundColor(to_term_color(canvas.background())),
        // Faint strokes alpha-composite poorly onto cell backgrounds; let
        // the terminal render them as a dim opaque tint instead.
        SetForegroundColor(to_term_color(dim(stroke.color, canvas.background())))
    )?;
    for row in canvas.rows_text() {
        queue!(out, crossterm::style::Print(row), cursor::MoveToNextLine(1))?;
    }
    out.flush()
}

/// Approximate source-over of the stroke onto the background.
fn dim(stroke: Rgba, background: Rgba) -> Rgba {
    let a = stroke.a() as u32;
    let blend = |s: u8, b: u8| (((s as u32) * a + (b as u32) * (255 - a)) / 255) as u8;
    Rgba::rgb(
        blend(stroke.r(), background.r()),
        blend(stroke.g(), background.g()),
        blend(stroke.b(), background.b()),
    )
}

fn run(mut scene: ContourScene) -> io::Result<()> {
    let mut stdout = io::stdout();
    let (cols, rows) = terminal::size()?;
    let mut canvas = BrailleCanvas::for_cells(cols, rows);
    tracing::info!(cols, rows, "starting contour animation");

    loop {
        let tick_start = Instant::now();

        // Drain pending input before rendering; the freshest resize wins.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    tracing::debug!(new_cols, new_rows, "terminal resized");
                    canvas = BrailleCanvas::for_cells(new_cols, new_rows);
                    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }

        scene.render_frame(&mut canvas);
        present(&canvas, &mut stdout)?;

        let elapsed = tick_start.elapsed();
        if elapsed < FRAME_BUDGET {
            std::thread::sleep(FRAME_BUDGET - elapsed);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let scene = ContourScene::new(parse_args())?;

    let _guard = TerminalGuard::enter()?;
    run(scene)?;
    Ok(())
}
