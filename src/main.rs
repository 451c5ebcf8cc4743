use anyhow::{bail, Context};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use yes_icons::{encode_buffer, render_with, IconConfig, DEFAULT_SUPERSAMPLE, ICON_SIZES};

const DEFAULT_OUT_DIR: &str = "store";

#[derive(Debug, PartialEq)]
struct Options {
    out_dir: PathBuf,
    config: Option<PathBuf>,
    supersample: u32,
    sizes: Vec<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            config: None,
            supersample: DEFAULT_SUPERSAMPLE,
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{} needs a value", flag),
    }
}

fn parse_positive(value: &str, flag: &str) -> anyhow::Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => bail!("{} expects a positive integer, got {:?}", flag, value),
    }
}

/// Parse command line arguments (without the program name)
fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut opts = Options::default();
    let mut sizes = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out-dir" | "-o" => {
                opts.out_dir = PathBuf::from(flag_value(args, i, "--out-dir")?);
                i += 1;
            },
            "--config" | "-c" => {
                opts.config = Some(PathBuf::from(flag_value(args, i, "--config")?));
                i += 1;
            },
            "--supersample" | "-s" => {
                opts.supersample = parse_positive(flag_value(args, i, "--supersample")?, "--supersample")?;
                i += 1;
            },
            "--size" => {
                sizes.push(parse_positive(flag_value(args, i, "--size")?, "--size")?);
                i += 1;
            },
            "--help" | "-h" => return Ok(Command::Help),
            other => bail!("unknown argument {:?} (try --help)", other),
        }
        i += 1;
    }

    if !sizes.is_empty() {
        opts.sizes = sizes;
    }
    Ok(Command::Run(opts))
}

fn print_help() {
    println!("Usage: yes-icons [OPTIONS]");
    println!();
    println!("Renders the watchface store icons as PNG files.");
    println!();
    println!("Options:");
    println!(
        "  --out-dir DIR, -o DIR       Output directory (default: {})",
        DEFAULT_OUT_DIR
    );
    println!("  --config FILE, -c FILE      JSON palette/geometry overrides");
    println!(
        "  --supersample N, -s N       Supersampling factor (default: {})",
        DEFAULT_SUPERSAMPLE
    );
    println!(
        "  --size N                    Icon edge in pixels, repeatable (default: {})",
        ICON_SIZES.map(|s| s.to_string()).join(", ")
    );
    println!("  --help, -h                  Show this help message");
}

/// Write `bytes` to `path` via a sibling temp file so readers never see a
/// partial icon
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    if let Err(e) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("icon_{}.png", size))
}

/// "a", "a and b", "a, b and c"
fn join_paths(paths: &[PathBuf]) -> String {
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

fn run(opts: &Options) -> anyhow::Result<Vec<PathBuf>> {
    let config = match &opts.config {
        Some(path) => IconConfig::load(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => IconConfig::default(),
    };

    let mut written = Vec::with_capacity(opts.sizes.len());
    for &size in &opts.sizes {
        let icon = render_with(&config, size, opts.supersample)
            .with_context(|| format!("failed to render {}px icon", size))?;
        let png = encode_buffer(&icon)?;
        let path = icon_path(&opts.out_dir, size);
        write_atomic(&path, &png).with_context(|| format!("failed to write {}", path.display()))?;
        info!("{}: {} bytes", path.display(), png.len());
        written.push(path);
    }
    Ok(written)
}

/// Main entry point for the `yes-icons` generator.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args)? {
        Command::Help => {
            print_help();
            return Ok(());
        },
        Command::Run(opts) => opts,
    };

    let written = run(&opts)?;
    println!("Wrote {}", join_paths(&written));
    Ok(())
}
