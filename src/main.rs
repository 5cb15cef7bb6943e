//! landing – renders the landing page to a static HTML file.
//!
//! Usage:
//!   landing [output.html] [--config site.toml] [--manifest page.json] [--strict]
//!
//! `output.html` defaults to `index.html`; `-` writes the page to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use landing_forge::error::LandingError;
use landing_forge::pipeline::{render_page, RenderedPage};
use landing_forge::sections::Section;
use landing_forge::{SiteConfig, SystemClock};

/// Render the landing page to static HTML.
#[derive(Debug, Parser)]
#[command(name = "landing", version, about)]
struct Cli {
    /// Output path, or `-` for stdout.
    #[arg(default_value = "index.html")]
    output: PathBuf,

    /// Site configuration (TOML): title, link destinations, theme.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write a JSON manifest of the rendered page.
    #[arg(short, long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Fail when any link or call-to-action control on the page has no destination.
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LandingError> {
    let site = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    let RenderedPage { html, manifest } = render_page(&site, &SystemClock);

    let inert = manifest.inert_actions();
    for (section, label) in &inert {
        log::warn!("'{label}' in section '{section}' has no destination; rendering a placeholder");
    }
    if cli.strict && !inert.is_empty() {
        return Err(LandingError::InertLinks { count: inert.len() });
    }

    if cli.output.as_os_str() == "-" {
        io::stdout()
            .write_all(html.as_bytes())
            .map_err(|source| LandingError::Write {
                path: cli.output.clone(),
                source,
            })?;
    } else {
        write_file(&cli.output, html.as_bytes())?;
        eprintln!(
            "Wrote '{}' ({} bytes, {} sections)",
            cli.output.display(),
            html.len(),
            Section::ALL.len()
        );
    }

    if let Some(path) = &cli.manifest {
        write_file(path, manifest.to_json()?.as_bytes())?;
        eprintln!("Wrote manifest '{}'", path.display());
    }

    Ok(())
}

/// Write `bytes` to `path`, creating the parent directory if necessary.
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), LandingError> {
    let to_err = |source: io::Error| LandingError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_err)?;
        }
    }
    fs::write(path, bytes).map_err(to_err)
}
