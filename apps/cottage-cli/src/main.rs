use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use cottage_assets::TextureTable;
use cottage_common::{AppConfig, MoveDirection};
use cottage_input::PointerTracker;
use cottage_render::{
    Camera, DebugTextRenderer, FramePlan, PointLight, Projection, Renderer, aspect_ratio,
};
use cottage_scene::Scene;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cottage-cli", about = "Inspect the cottage scene without a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// List the draw table with mesh sizes
    Scene,
    /// Check that every scene texture loads
    Textures {
        /// Texture directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Simulate input and print the resulting frame plan
    Frame {
        /// Held movement as DIRECTION=SECONDS, e.g. forward=1.5 (repeatable)
        #[arg(long = "move", value_parser = parse_move)]
        moves: Vec<(MoveDirection, f32)>,
        /// Pointer position X,Y (repeatable); the first one only sets the baseline
        #[arg(long = "mouse", value_parser = parse_point, allow_hyphen_values = true)]
        mouse: Vec<(f64, f64)>,
        /// Scroll wheel lines (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        scroll: Vec<f32>,
        /// Press the projection toggle once
        #[arg(long)]
        toggle_projection: bool,
        /// Show the lamp marker
        #[arg(long)]
        lamp: bool,
    },
}

fn parse_move(s: &str) -> Result<(MoveDirection, f32), String> {
    let (dir, secs) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DIRECTION=SECONDS, got '{s}'"))?;
    let dir = match dir.to_ascii_lowercase().as_str() {
        "forward" | "w" => MoveDirection::Forward,
        "backward" | "s" => MoveDirection::Backward,
        "left" | "a" => MoveDirection::Left,
        "right" | "d" => MoveDirection::Right,
        "up" | "q" => MoveDirection::Up,
        "down" | "e" => MoveDirection::Down,
        other => return Err(format!("unknown direction '{other}'")),
    };
    let secs: f32 = secs
        .parse()
        .map_err(|e| format!("bad duration '{secs}': {e}"))?;
    if secs < 0.0 {
        return Err(format!("duration must be non-negative, got {secs}"));
    }
    Ok((dir, secs))
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

struct FrameInput {
    moves: Vec<(MoveDirection, f32)>,
    mouse: Vec<(f64, f64)>,
    scroll: Vec<f32>,
    toggle_projection: bool,
    lamp: bool,
}

/// Apply simulated input in the order the frame loop would: look, zoom,
/// toggle, then movement.
fn simulate(config: &AppConfig, scene: &Scene, input: &FrameInput) -> FramePlan {
    let mut camera = Camera::from_config(&config.camera);
    let mut projection = Projection::from_config(&config.projection);
    let mut pointer = PointerTracker::new();
    tracing::debug!(
        "simulating {} moves, {} pointer samples, {} scroll steps",
        input.moves.len(),
        input.mouse.len(),
        input.scroll.len()
    );

    for &(x, y) in &input.mouse {
        let offset = pointer.sample(x, y);
        camera.process_mouse_move(offset.x, offset.y);
    }
    for &lines in &input.scroll {
        camera.process_mouse_scroll(lines);
    }
    if input.toggle_projection {
        projection.mode.toggle();
    }
    for &(dir, secs) in &input.moves {
        camera.process_keyboard_move(dir, secs);
    }

    let aspect = aspect_ratio(config.window.width, config.window.height);
    let plan = FramePlan::build(
        &camera,
        &projection,
        aspect,
        PointLight::from_config(&config.light),
        scene,
    );
    if input.lamp || config.light.show_lamp {
        plan.with_lamp(config.light.lamp_scale)
    } else {
        plan
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    let scene = Scene::house();
    scene.validate().context("scene table is inconsistent")?;

    match cli.command {
        Commands::Info => {
            println!("cottage-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", cottage_common::crate_info());
            println!("scene: {}", cottage_scene::crate_info());
            println!("assets: {}", cottage_assets::crate_info());
            println!("input: {}", cottage_input::crate_info());
            println!("render: {}", cottage_render::crate_info());
        }
        Commands::Scene => {
            println!(
                "{} objects, {} meshes, {} textures, {} vertices",
                scene.objects().len(),
                scene.meshes().len(),
                scene.textures().len(),
                scene.vertex_count()
            );
            for (i, obj) in scene.objects().iter().enumerate() {
                let verts = scene.mesh(obj.mesh).map_or(0, |m| m.vertex_count());
                let texture = scene
                    .textures()
                    .get(obj.texture.index())
                    .map_or("?", |t| t.file);
                let t = obj.transform.translation;
                println!(
                    "  {i}: {:<18} verts={verts:<5} texture={texture:<22} at=({:.2}, {:.2}, {:.2})",
                    obj.name, t.x, t.y, t.z
                );
            }
        }
        Commands::Textures { dir } => {
            let dir = dir.unwrap_or(config.texture_dir);
            let mut failed = 0;
            for source in scene.textures() {
                match cottage_assets::TextureData::load(dir.join(source.file)) {
                    Ok(tex) => println!(
                        "  ok   {:<14} {}x{} ({} channels)",
                        source.name, tex.width, tex.height, tex.channels
                    ),
                    Err(e) => {
                        failed += 1;
                        println!("  FAIL {:<14} {e}", source.name);
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} textures failed to load", scene.textures().len());
            }
            // Same path the desktop app takes.
            let table = TextureTable::load_all(
                &dir,
                scene.textures().iter().map(|t| (t.name, t.file)),
            )?;
            println!("all {} textures loaded from {}", table.len(), dir.display());
        }
        Commands::Frame {
            moves,
            mouse,
            scroll,
            toggle_projection,
            lamp,
        } => {
            let input = FrameInput {
                moves,
                mouse,
                scroll,
                toggle_projection,
                lamp,
            };
            let plan = simulate(&config, &scene, &input);
            let mut renderer = DebugTextRenderer::new();
            print!("{}", renderer.render(&plan));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cottage_render::ProjectionMode;
    use glam::Vec3;

    fn no_input() -> FrameInput {
        FrameInput {
            moves: vec![],
            mouse: vec![],
            scroll: vec![],
            toggle_projection: false,
            lamp: false,
        }
    }

    #[test]
    fn parses_moves() {
        assert_eq!(parse_move("forward=1.5"), Ok((MoveDirection::Forward, 1.5)));
        assert_eq!(parse_move("Q=2"), Ok((MoveDirection::Up, 2.0)));
        assert!(parse_move("sideways=1").is_err());
        assert!(parse_move("left").is_err());
        assert!(parse_move("left=-1").is_err());
    }

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("10,-4.5"), Ok((10.0, -4.5)));
        assert!(parse_point("10").is_err());
    }

    #[test]
    fn no_input_keeps_start_pose() {
        let plan = simulate(&AppConfig::default(), &Scene::house(), &no_input());
        assert_eq!(plan.camera_position, Vec3::new(-0.5, 1.0, 4.0));
        assert_eq!(plan.mode, ProjectionMode::Perspective);
        assert_eq!(plan.draws.len(), 9);
    }

    #[test]
    fn first_mouse_sample_is_baseline() {
        let input = FrameInput {
            mouse: vec![(900.0, 700.0)],
            ..no_input()
        };
        let plan = simulate(&AppConfig::default(), &Scene::house(), &input);
        assert!((plan.camera_front - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn simulated_input_reaches_the_plan() {
        let input = FrameInput {
            moves: vec![(MoveDirection::Forward, 1.0)],
            scroll: vec![1.0],
            toggle_projection: true,
            lamp: true,
            ..no_input()
        };
        let plan = simulate(&AppConfig::default(), &Scene::house(), &input);
        assert!((plan.camera_position - Vec3::new(-0.5, 1.0, 1.5)).length() < 1e-4);
        assert_eq!(plan.fov_degrees, 44.0);
        assert_eq!(plan.mode, ProjectionMode::Orthographic);
        assert!(plan.lamp.is_some());
    }
}
