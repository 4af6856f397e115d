use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use raccoon_madness::audio::LogAudio;
use raccoon_madness::consts::FRAME;
use raccoon_madness::display::{self, Palette, TerminalRenderer};
use raccoon_madness::{logging, App, Config, FileStore};

// ── Game loop ────────────────────────────────────────────────────────────────

/// Drain pending input, advance one frame, draw, then sleep out the rest of
/// the frame.  Input is polled with a zero timeout so the loop never blocks.
fn run<W: Write>(
    app: &mut App<FileStore, LogAudio>,
    renderer: &mut TerminalRenderer<W>,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    let mut last = Instant::now();

    while app.is_running() {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let event::Event::Resize(..) = ev {
                display::wipe(&mut stdout())?;
            }
            if let Some(input) = renderer.translate(&ev) {
                app.handle_event(input);
            }
        }

        let dt = frame_start.duration_since(last);
        last = frame_start;
        app.update(dt, &mut rng);
        app.render(renderer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    if let Err(e) = logging::init(&config.log_path) {
        eprintln!("logging disabled: {e:#}");
    }
    info!("data directory {}", config.data_dir.display());

    let mut app = App::new(config.file_store(), LogAudio).with_context(|| {
        format!("failed to load save data from {}", config.data_dir.display())
    })?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Key-release events let held keys drop immediately; terminals without
    // the protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let result = terminal::size()
        .context("failed to query terminal size")
        .and_then(|size| {
            let palette = Palette::from_economy(app.economy());
            let mut renderer = TerminalRenderer::new(&mut out, palette, size);
            run(&mut app, &mut renderer)
        });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!("bye"),
        Err(e) => warn!("exiting on error: {e:#}"),
    }
    result
}
