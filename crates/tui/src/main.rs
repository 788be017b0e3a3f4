mod page;
mod renderer;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio_core::html::{PageOptions, render_page};
use folio_core::model::Portfolio;
use folio_core::views::build_page;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Build or preview the portfolio page")]
struct Cli {
    /// Content file (JSON); defaults to the bundled portfolio.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the static HTML page.
    Build(BuildArgs),
    /// Preview the page in the terminal.
    View,
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Use the dark palette.
    #[arg(long)]
    dark: bool,

    /// Path of the wasm-bindgen JS module loaded by the page.
    #[arg(long, default_value = "./pkg/folio_wasm.js", conflicts_with = "no_script")]
    wasm_module: String,

    /// Emit a script-free page without scroll highlighting or animations.
    #[arg(long)]
    no_script: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let portfolio = match &cli.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Portfolio::builtin().context("bundled content is invalid")?,
    };
    let sections = build_page(&portfolio);

    match cli.command {
        Command::Build(args) => build(&portfolio, &sections, args),
        Command::View => renderer::run_viewer(&portfolio.profile.brand, &sections),
    }
}

fn build(
    portfolio: &Portfolio,
    sections: &[folio_protocol::SectionView],
    args: BuildArgs,
) -> Result<()> {
    let options = PageOptions {
        dark: args.dark,
        wasm_module: (!args.no_script).then_some(args.wasm_module),
    };
    let html = render_page(portfolio, sections, &options);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Logs go to stderr so `build` output on stdout stays clean. `RUST_LOG`
/// overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info,folio_core=debug",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
