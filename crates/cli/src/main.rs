use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use polyarea::TextWriter;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod dataset;

#[derive(Parser)]
#[command(name = "polyarea")]
#[command(about = "Read polygon files and report shoelace areas")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Input {
    /// Polygon file, one `<n> (x;y) ...` record per line
    #[arg(long)]
    input: PathBuf,
    /// Lines with fewer points are rejected
    #[arg(long, default_value_t = 3)]
    min_vertexes: usize,
}

#[derive(Subcommand)]
enum Action {
    /// Print the area of every valid polygon
    Area {
        #[command(flatten)]
        input: Input,
        /// Emit a JSON array of {line, vertexes, area}
        #[arg(long)]
        json: bool,
    },
    /// Rewrite valid polygons in canonical text
    Format {
        #[command(flatten)]
        input: Input,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Fail when any line is malformed
    Check {
        #[command(flatten)]
        input: Input,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Area { input, json } => area(input, json),
        Action::Format { input, out } => format(input, out),
        Action::Check { input } => check(input),
        Action::Report => report(),
    }
}

fn area(input: Input, json: bool) -> Result<()> {
    tracing::info!(input = %input.input.display(), json, "area");
    let data = dataset::load(&input.input, input.min_vertexes)?;
    let records = dataset::area_records(&data);
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for r in &records {
            println!("{:.1}", r.area);
        }
    }
    Ok(())
}

fn format(input: Input, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = %input.input.display(), "format");
    let data = dataset::load(&input.input, input.min_vertexes)?;
    let mut w = TextWriter::new(String::new());
    for r in &data.records {
        w.write(&r.polygon)?;
    }
    let text = w.into_inner();
    match out {
        Some(path) => write_output(&path, &text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn check(input: Input) -> Result<()> {
    let data = dataset::load(&input.input, input.min_vertexes)?;
    let total = data.records.len() + data.rejected.len();
    if !data.rejected.is_empty() {
        for r in &data.rejected {
            println!("line {}: {}", r.line, r.reason);
        }
        bail!(
            "{} of {} polygon lines rejected in {}",
            data.rejected.len(),
            total,
            input.input.display()
        );
    }
    tracing::info!(polygons = total, "check passed");
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "tool": "polyarea",
        "version": polyarea::VERSION,
        "code_rev": rev,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
