// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{info, warn, Level};

use keychords::config::{ChordsFile, ConfigEvent, ConfigWatcher};
use keychords::music::tonics;
use keychords::{Chord, ChordEngine, Notation, ScaleFamily};

fn print_usage() {
    println!("keychords - Chords for Keys");
    println!();
    println!("Usage: keychords [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --key <K>         Tonic to use (e.g. C, F#, Bb; default C)");
    println!("  --scale <S>       Scale family: major or minor (default major)");
    println!("  --config <FILE>   Load key, scale and display options from YAML");
    println!("  --watch <FILE>    Like --config, and re-print whenever the file changes");
    println!("  --ascii           Print accidentals as # and b");
    println!("  --verbose         Log selection changes");
    println!("  --list-keys       List selectable keys");
    println!("  --list-scales     List scale families");
    println!("  --help            Show this help message");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    key: Option<String>,
    scale: Option<String>,
    config: Option<PathBuf>,
    watch: bool,
    ascii: bool,
    verbose: bool,
    list_keys: bool,
    list_scales: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| anyhow!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--key" => options.key = Some(value("--key")?),
            "--scale" => options.scale = Some(value("--scale")?),
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--watch" => {
                options.config = Some(PathBuf::from(value("--watch")?));
                options.watch = true;
            }
            "--ascii" => options.ascii = true,
            "--verbose" | "-v" => options.verbose = true,
            "--list-keys" => options.list_keys = true,
            "--list-scales" => options.list_scales = true,
            "--help" | "-h" => options.help = true,
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
    }

    Ok(options)
}

fn print_section(title: &str, chords: &[Chord], notation: Notation) {
    println!();
    println!("{}", title);
    for chord in chords {
        println!("  {}", chord.render(notation));
    }
}

fn print_harmony(engine: &ChordEngine, notation: Notation) {
    let notes: Vec<String> = engine
        .scale_notes()
        .iter()
        .map(|n| n.render(notation))
        .collect();

    let selection = engine.selection();
    println!("Key: {}  Scale: {}", selection.tonic().render(notation), selection.family());
    println!("Scale Notes: {}", notes.join(" "));
    print_section("Triads", engine.triads(), notation);
    print_section("Sevenths", engine.sevenths(), notation);
    print_section("Secondary Dominants", engine.secondary_dominants(), notation);
    print_section("Secondary Leading Tones", engine.secondary_leading_tones(), notation);
    print_section("Tritone Substitution", engine.tritone_substitution(), notation);
}

/// Re-select key and scale from each reload until the watcher goes away
fn watch(path: PathBuf, mut engine: ChordEngine, ascii: bool) -> Result<()> {
    let watcher = ConfigWatcher::new(&path, None)?;
    info!(path = ?watcher.watched_path(), "watching for changes (Ctrl+C to stop)");

    while let Some(event) = watcher.recv() {
        match event {
            ConfigEvent::Reloaded(config) => match config.selection() {
                Ok(selection) => {
                    engine.select(selection);
                    let notation = if ascii { Notation::Ascii } else { config.notation() };
                    println!();
                    print_harmony(&engine, notation);
                }
                Err(e) => warn!("keeping {}: {:#}", engine.selection(), e),
            },
            ConfigEvent::Error(message) => warn!("{}", message),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if options.help {
        print_usage();
        return Ok(());
    }
    if options.list_keys {
        let keys: Vec<String> = tonics().map(|t| t.to_string()).collect();
        println!("{}", keys.join(" "));
        return Ok(());
    }
    if options.list_scales {
        for family in ScaleFamily::ALL {
            println!("{}", family);
        }
        return Ok(());
    }

    let mut config = match &options.config {
        Some(path) => ChordsFile::load(path)?,
        None => ChordsFile::default(),
    };
    if let Some(key) = options.key {
        config.selection.key = key;
    }
    if let Some(scale) = options.scale {
        config.selection.scale = scale;
    }
    if options.ascii {
        config.display.ascii_accidentals = true;
    }

    let engine = config.engine()?;
    print_harmony(&engine, config.notation());

    match options.config {
        Some(path) if options.watch => watch(path, engine, options.ascii),
        _ => Ok(()),
    }
}
