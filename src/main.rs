use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use crossterm::event;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeterm::canvas::Canvas;
use lifeterm::config::Config;
use lifeterm::events::AppEvent;
use lifeterm::fps::FrameTimer;
use lifeterm::geometry::GridGeometry;
use lifeterm::io::Viewport;
use lifeterm::io::convert_event;
use lifeterm::playback::Playback;
use lifeterm::render::Renderer;
use lifeterm::term;
use lifeterm::term::HUD_ROWS;
use lifeterm::term::TermGuard;
use lifeterm::universe::Universe;

/// Poll timeout while Paused, when no frame deadline exists.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config =
        Config::from_args(std::env::args().skip(1)).context("Failed to parse arguments")?;
    info!(?config, "starting");

    let geometry = GridGeometry::new(config.cell_size, config.width, config.height);
    let renderer = Renderer::new(geometry);
    let mut canvas = Canvas::new(geometry.canvas_width(), geometry.canvas_height());
    let mut universe = Universe::new_random(config.height, config.width);
    let mut playback = Playback::new(Duration::from_millis(1000 / config.fps as u64));
    let mut timer = FrameTimer::new();

    // The canvas occupies one screen column per pixel and one screen row
    // per two pixel rows, below the HUD. Screen row r always shows pixel
    // rows 2r and 2r+1 (the last row duplicates its top pixel on an odd
    // height), so the vertical scale is exactly 2.
    let viewport = Viewport {
        x: 0,
        y: HUD_ROWS,
        scale_x: 1.0,
        scale_y: 2.0,
    };

    let mut guard = TermGuard::new()?;

    // initial paint so the paused screen is not blank
    renderer.draw(&mut canvas, universe.cells());
    term::present(&mut guard.out, &canvas, &viewport)?;
    term::draw_hud(&mut guard.out, &playback, &timer)?;

    loop {
        let now = Instant::now();
        let timeout = playback.poll_timeout(now).unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let Some(app_event) = convert_event(event::read()?, &viewport, renderer.geometry())
            else {
                continue;
            };

            match app_event {
                AppEvent::Exit => break,

                AppEvent::TogglePlayback => {
                    playback.toggle(Instant::now());
                    term::draw_hud(&mut guard.out, &playback, &timer)?;
                }

                AppEvent::SetSpeed(speed) => {
                    playback.set_speed(speed);
                    term::draw_hud(&mut guard.out, &playback, &timer)?;
                }

                AppEvent::NewRandom | AppEvent::NewDead => {
                    // wholesale replacement; the loop, if running, simply
                    // drives the new instance on its next frame
                    universe = match app_event {
                        AppEvent::NewRandom => Universe::new_random(config.height, config.width),
                        _ => Universe::new_dead(config.height, config.width),
                    };
                    playback.reset_generation();
                    debug!(running = playback.is_running(), "universe replaced");

                    if !playback.is_running() {
                        renderer.draw(&mut canvas, universe.cells());
                        term::present(&mut guard.out, &canvas, &viewport)?;
                    }
                    term::draw_hud(&mut guard.out, &playback, &timer)?;
                }

                AppEvent::Edit { row, col, cmd } => {
                    universe.apply_edit(cmd, row, col);

                    // edits are visible immediately, running or not
                    renderer.draw(&mut canvas, universe.cells());
                    term::present(&mut guard.out, &canvas, &viewport)?;
                }
            }
        }

        let now = Instant::now();
        if playback.due(now) {
            playback.frame(now, &mut universe, &renderer, &mut canvas, &mut timer);
            term::present(&mut guard.out, &canvas, &viewport)?;
            term::draw_hud(&mut guard.out, &playback, &timer)?;
        }
    }

    Ok(())
}
