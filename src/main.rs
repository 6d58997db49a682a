//! Terminal voxel viewer (default binary).
//!
//! Raw-mode loop: drain input, move the camera, ray cast a frame, blit the
//! changed cells, sleep out the rest of the tick. `--snapshot` renders one
//! frame to stdout without touching terminal modes.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};
use structopt::StructOpt;

use tui_voxel::config::Config;
use tui_voxel::core::{keep_inside, update_pose, Frame, Renderer, VoxelGrid, WorldBuilder};
use tui_voxel::input::InputHandler;
use tui_voxel::term::{FrameBuffer, FrameView, TerminalRenderer, Viewport};
use tui_voxel::types::Pose;

/// Terminal size used when none can be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// TOML config file; defaults apply when omitted.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Frame width in pixels (overrides the config).
    #[structopt(long)]
    width: Option<u16>,

    /// Frame height in rows (overrides the config).
    #[structopt(long)]
    height: Option<u16>,

    /// Print one frame to stdout and exit.
    #[structopt(long)]
    snapshot: bool,

    /// Show the pose/help status line.
    #[structopt(long)]
    hud: bool,

    /// Write log output to this file instead of stderr.
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging(opt.log_file.as_ref())?;

    let mut config = match &opt.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if opt.width.is_some() {
        config.frame.width = opt.width;
    }
    if opt.height.is_some() {
        config.frame.height = opt.height;
    }
    config.frame.show_hud |= opt.hud;
    config.validate()?;

    let world = WorldBuilder::new(config.world);
    let grid = world.build()?;
    let pose = config.spawn_pose(&world);
    debug!("spawn pose {:?}", pose);

    if opt.snapshot {
        let (tw, th) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        let (w, h) = config.frame_size(tw, th);
        let mut frame = Frame::new(w, h);
        Renderer::new(config.render).render(&pose, &grid, &mut frame);
        println!("{frame}");
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &grid, pose);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Stderr by default, or a file when the screen belongs to the viewer.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("initialize logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, grid: &VoxelGrid, mut pose: Pose) -> Result<()> {
    let view = FrameView::new(config.colors).with_hud(config.frame.show_hud);
    let mut input = InputHandler::with_hold_ms(config.controls.key_hold_ms);
    let mut renderer = Renderer::new(config.render);
    let mut frame = Frame::new(0, 0);
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(u64::from(config.frame.interval_ms));
    let mut last_tick = Instant::now();

    loop {
        let started = Instant::now();
        let elapsed_ms = started.duration_since(last_tick).as_millis().min(u32::MAX as u128) as u32;
        last_tick = started;

        let state = input.poll(elapsed_ms)?;
        if state.quit {
            info!("quit requested");
            return Ok(());
        }
        if update_pose(&mut pose, &state, &config.controls) {
            keep_inside(&mut pose, grid);
        }

        let (tw, th) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        let (w, h) = config.frame_size(tw, th);
        frame.resize(w, h);
        renderer.render(&pose, grid, &mut frame);
        view.render_into(&frame, Some(&pose), Viewport::new(tw, th), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
