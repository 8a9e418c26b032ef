use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wizard_icons::{BatchRenderer, HueRotationSettings, IconResult, RenderProfile};

/// Generate the Wizard PWA, iOS and favicon PNG icons.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory the PNG files are written to.
    #[arg(short, long, default_value = "icons")]
    output: PathBuf,

    /// JSON render profile; explicit flags take precedence.
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Rotate every color's hue by this many degrees.
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    hue_rotation: Option<f32>,

    /// Skip loading system fonts; the text layers are left out.
    #[arg(long)]
    no_system_fonts: bool,

    /// Print the effective profile as JSON and exit.
    #[arg(long)]
    export_profile: bool,
}

impl Cli {
    fn profile(&self) -> IconResult<RenderProfile> {
        let mut profile = match &self.profile {
            Some(path) => RenderProfile::load(path)?,
            None => RenderProfile::default(),
        };
        if let Some(degrees) = self.hue_rotation {
            profile = profile.with_hue_rotation(HueRotationSettings {
                degrees,
                enabled: true,
            });
        }
        if self.no_system_fonts {
            profile = profile.with_system_fonts(false);
        }
        Ok(profile)
    }
}

fn run(cli: &Cli) -> IconResult<()> {
    let profile = cli.profile()?;
    if cli.export_profile {
        println!("{}", profile.to_json_pretty()?);
        return Ok(());
    }

    BatchRenderer::new(profile).render_all(&cli.output)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
