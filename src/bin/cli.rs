use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;

use vertex_face_paint::engine::{blend, PaintSession, PaintTarget, StrokeEvent};
use vertex_face_paint::model::{BlendMode, Brush, Color, FaceMesh};
use vertex_face_paint::settings;
use vertex_face_paint::util::{from_serde_str, serde_variant_names};
use vertex_face_paint::{paths, PaintError};

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(name = "vfpaint", about = "Headless vertex face painting", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config directory override
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Output raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend a brush color onto a stored corner color
    Blend {
        /// Stored color as r,g,b[,a]
        #[arg(long)]
        current: Color,
        /// Brush color as r,g,b (alpha ignored)
        #[arg(long)]
        brush: Color,
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        strength: f32,
        /// Blend mode identifier; unknown identifiers blend as MIX
        #[arg(long, default_value = "MIX")]
        mode: String,
    },
    /// List blend mode identifiers
    Modes,
    /// Paint faces of a mesh file with the configured brush
    Paint {
        /// Mesh JSON file
        #[arg(long)]
        mesh: PathBuf,
        /// Face under the cursor; repeat to hit a different face per event
        #[arg(long = "face", required = true)]
        faces: Vec<usize>,
        /// Stroke events (move, release, cancel). Defaults to a click, or a drag when
        /// several faces are given.
        #[arg(long, value_delimiter = ',', value_parser = parse_event)]
        events: Vec<StrokeEvent>,
        /// Write the painted mesh here instead of back to --mesh
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        brush: BrushArgs,
    },
    /// Show or change the saved brush
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Print the settings file JSON schema
    Schema,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Update brush fields and save
    Set {
        #[command(flatten)]
        brush: BrushArgs,
    },
}

/// Brush overrides layered on top of the saved settings.
#[derive(clap::Args)]
struct BrushArgs {
    #[arg(long)]
    color: Option<Color>,
    #[arg(long)]
    strength: Option<f32>,
    #[arg(long)]
    mode: Option<String>,
    /// Brush alpha; only written when --apply-alpha is set
    #[arg(long)]
    alpha: Option<f32>,
    /// Overwrite corner alpha with alpha * strength
    #[arg(long, overrides_with = "no_apply_alpha")]
    apply_alpha: bool,
    /// Leave corner alpha untouched
    #[arg(long, overrides_with = "apply_alpha")]
    no_apply_alpha: bool,
}

fn parse_event(s: &str) -> Result<StrokeEvent, String> {
    from_serde_str(s.trim()).ok_or_else(|| format!("unknown stroke event '{s}' (move, release, cancel)"))
}

impl BrushArgs {
    fn apply_to(&self, mut brush: Brush) -> Brush {
        if let Some(color) = self.color {
            brush.color = color;
        }
        if let Some(strength) = self.strength {
            brush.strength = strength;
        }
        if let Some(mode) = &self.mode {
            brush.blend_mode = BlendMode::from_identifier(mode);
        }
        if let Some(alpha) = self.alpha {
            brush.alpha = alpha;
        }
        if self.apply_alpha {
            brush.apply_alpha = true;
        } else if self.no_apply_alpha {
            brush.apply_alpha = false;
        }
        brush.clamped()
    }
}

// ── Command execution ────────────────────────────────────────────

struct CommandOutput {
    message: String,
    data: Value,
}

impl CommandOutput {
    fn new(message: impl Into<String>, data: impl serde::Serialize) -> Self {
        Self {
            message: message.into(),
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }
}

fn execute(command: &Commands, config_dir: &Path) -> Result<CommandOutput, PaintError> {
    match command {
        Commands::Blend {
            current,
            brush,
            strength,
            mode,
        } => {
            let mode = BlendMode::from_identifier(mode);
            let result = blend(*current, *brush, *strength, mode);
            Ok(CommandOutput::new(format!("{mode} blend"), result))
        }
        Commands::Modes => Ok(CommandOutput::new(
            "Blend modes",
            serde_variant_names(&BlendMode::ALL),
        )),
        Commands::Paint {
            mesh,
            faces,
            events,
            output,
            brush,
        } => {
            let saved = settings::load_or_default(config_dir);
            let brush = brush.apply_to(saved.brush);
            let mut target = FaceMesh::load(mesh)?;

            let painted = paint_stroke(&mut target, brush, &stroke_steps(faces, events))?;
            let out_path = output.as_deref().unwrap_or(mesh.as_path());
            target.save(out_path)?;

            Ok(CommandOutput::new(
                format!(
                    "Painted {painted} face(s) of {} into {}",
                    target.face_count(),
                    out_path.display()
                ),
                serde_json::json!({ "faces_painted": painted, "brush": brush }),
            ))
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let current = settings::load_or_default(config_dir);
                Ok(CommandOutput::new("Settings", current))
            }
            SettingsAction::Set { brush } => {
                let mut current = settings::load_or_default(config_dir);
                current.brush = brush.apply_to(current.brush);
                settings::save_settings(config_dir, &current)?;
                Ok(CommandOutput::new(
                    format!("Saved {}", paths::settings_path(config_dir).display()),
                    current,
                ))
            }
        },
        Commands::Schema => Ok(CommandOutput::new(
            "Settings schema",
            settings::settings_schema(),
        )),
    }
}

/// Pair each event with the face it hits. Event `i` hits `faces[i]`, or the last
/// face once the list runs out. Without events, one face is a click and several
/// are a drag with one move per face.
fn stroke_steps(faces: &[usize], events: &[StrokeEvent]) -> Vec<(StrokeEvent, Option<usize>)> {
    if events.is_empty() {
        return match faces {
            [face] => vec![(StrokeEvent::Release, Some(*face))],
            _ => faces
                .iter()
                .map(|face| (StrokeEvent::Move, Some(*face)))
                .chain(std::iter::once((StrokeEvent::Release, None)))
                .collect(),
        };
    }
    events
        .iter()
        .enumerate()
        .map(|(i, event)| (*event, faces.get(i).or(faces.last()).copied()))
        .collect()
}

fn paint_stroke(
    target: &mut FaceMesh,
    brush: Brush,
    steps: &[(StrokeEvent, Option<usize>)],
) -> Result<usize, PaintError> {
    let mut session = PaintSession::begin(target, brush)?;
    for (event, hit) in steps {
        session.handle(*event, *hit)?;
    }
    Ok(session.faces_painted())
}

fn print_output(output: &CommandOutput, raw_json: bool) {
    if raw_json {
        let json = serde_json::json!({
            "message": output.message,
            "data": output.data,
        });
        println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        return;
    }

    println!("{}", output.message);
    match &output.data {
        Value::Null => {}
        Value::String(s) => println!("{s}"),
        data @ (Value::Array(_) | Value::Object(_)) => {
            println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
        }
        data => println!("{data}"),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config_dir = cli.config_dir.clone().unwrap_or_else(paths::default_config_dir);

    match execute(&cli.command, &config_dir) {
        Ok(output) => print_output(&output, cli.json),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
