use crate::config::load_config;
use crate::layout::{Layout, ViewportTransform, compute_layout, fit_transform, oldest_parentless};
use crate::model::{Person, RelationshipEdge};
use crate::theme::Theme;
use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "stemma", version, about = "Family-tree layout engine (JSON in, layout JSON out)")]
pub struct Args {
    /// Input file with {"persons": [...], "relationships": [...]}, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config json5 file of partial layout/theme overrides
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Anchor the generation levels at this person id
    #[arg(long = "root")]
    pub root: Option<String>,

    /// Pick the oldest parentless person as the root
    #[arg(long = "oldest-root", conflicts_with = "root")]
    pub oldest_root: bool,

    /// Viewport width; with --height, a fit transform is included
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Viewport height; with --width, a fit transform is included
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct InputFile {
    persons: Vec<Person>,
    #[serde(default)]
    relationships: Vec<RelationshipEdge>,
}

#[derive(Debug, Serialize)]
struct OutputDump {
    layout: Option<Layout>,
    /// Card palette and typography for the renderer; the engine itself only
    /// consumes the line colors.
    theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewport: Option<ViewportTransform>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let parsed: InputFile = serde_json::from_str(&input)?;

    let mut layout_config = config.layout.clone();
    if let Some(root) = args.root {
        layout_config.preferred_root = Some(root);
    } else if args.oldest_root
        && let Some(root) = oldest_parentless(&parsed.persons, &parsed.relationships)
    {
        layout_config.preferred_root = Some(root.to_string());
    }

    let layout = compute_layout(
        &parsed.persons,
        &parsed.relationships,
        &config.theme,
        &layout_config,
    );

    let viewport = match (&layout, args.width, args.height) {
        (Some(layout), Some(width), Some(height)) => Some(fit_transform(layout, width, height)),
        _ => None,
    };

    write_output(
        &OutputDump {
            layout,
            theme: config.theme,
            viewport,
        },
        args.output.as_deref(),
    )
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => Err(anyhow::anyhow!("No input given; pass -i <file> or -i -")),
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_output(dump: &OutputDump, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, dump)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, dump)?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
