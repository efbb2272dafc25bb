use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;

use medora_app::config::{self, MedoraConfig};
use medora_core::models::plan::RenderMode;
use medora_core::models::soap::soap_notes_from_json;
use medora_core::plan::parse_plan_of_care;
use medora_export::docx::generate_docx;
use medora_export::styles::DocumentStyles;
use medora_export::{render_plan_sections, render_plan_text};

#[derive(Parser)]
#[command(name = "medora-plan", about = "Render the Plan of Care from a SOAP note")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the plan from a transcript response or `soap_notes` JSON file.
    Render {
        file: PathBuf,
        /// bullet, concise, or narrative. Defaults to the configured mode.
        #[arg(long)]
        mode: Option<RenderMode>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write to a file instead of stdout. Required for DOCX.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Inspect or change saved settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetMode { mode: RenderMode },
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Docx,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            file,
            mode,
            format,
            out,
        } => render(file, mode, format, out),
        Command::Config { action } => run_config(action),
    }
}

fn render(
    file: PathBuf,
    mode: Option<RenderMode>,
    format: Format,
    out: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_or_default()?;
    let mode = mode.unwrap_or(config.default_mode);

    let json = std::fs::read_to_string(&file)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
    let notes = soap_notes_from_json(&json)?;
    let sections = parse_plan_of_care(&notes.plan_text());

    tracing::info!(
        file = %file.display(),
        sections = sections.len(),
        %mode,
        "rendering plan of care"
    );

    let bytes = match format {
        Format::Text => render_plan_text(&sections, mode).into_bytes(),
        Format::Html => render_plan_sections(&sections, mode)?.into_bytes(),
        Format::Docx => {
            if out.is_none() {
                return Err(eyre::eyre!("--out is required for DOCX output"));
            }
            generate_docx(&sections, mode, &DocumentStyles::default())?
        }
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            tracing::info!(path = %path.display(), "plan written");
        }
        None => println!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetMode { mode } => {
            let mut config = if config::has_config() {
                config::load_config()?
            } else {
                MedoraConfig::default()
            };
            config.default_mode = mode;
            config::save_config(&config)?;
        }
        ConfigAction::Reset => config::delete_config()?,
    }
    Ok(())
}
