use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use verc_emit::CFilePrinter;
use verc_ir::{QualifiedName, SourceUnit};
use verc_transform::{translate_units, TransformConfig};

mod cc;
use cc::{Cc, CcError};

#[derive(Parser)]
#[command(name = "verc")]
#[command(about = "Verc - lower verified source units to C and compile them natively")]
#[command(version = "0.1.0")]
struct Cli {
    /// Source units to translate, one JSON file each
    #[arg(required = true)]
    units: Vec<PathBuf>,

    /// Name of the emitted C file and binary
    #[arg(short, long, default_value = "main")]
    output: String,

    /// Directory to place the C file and binary in
    #[arg(long, default_value = ".")]
    cdir: PathBuf,

    /// Synthesize a main() calling this exported function
    #[arg(long)]
    entry: Option<String>,

    /// Emit plain names for non-exported declarations
    #[arg(long)]
    no_mangle: bool,

    /// C compiler command to invoke
    #[arg(long, default_value = "cc")]
    cc: String,

    /// Stop after writing the C file
    #[arg(long)]
    emit_only: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    compile(cli)
}

fn compile(cli: Cli) -> Result<()> {
    use colored::*;

    if cli.verbose {
        println!("{}", "Verc back end".bright_blue().bold());
        println!(" Units: {}", cli.units.len());
        println!(" Output: {}", cli.cdir.join(&cli.output).display());
        if let Some(entry) = &cli.entry {
            println!(" Entry: {}", entry);
        }
        println!();
    }

    let mut units = Vec::with_capacity(cli.units.len());
    for path in &cli.units {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading unit {}", path.display()))?;
        let unit: SourceUnit = serde_json::from_str(&text)
            .with_context(|| format!("decoding unit {}", path.display()))?;
        units.push(unit);
    }

    if cli.verbose {
        println!(" Translating {} unit(s)...", units.len());
    }
    let config = TransformConfig {
        mangling: !cli.no_mangle,
    };
    let entry = cli.entry.as_deref().map(QualifiedName::from_path);
    let document = translate_units(&units, config, entry.as_ref())?;

    let c_path = cli.cdir.join(format!("{}.c", cli.output));
    CFilePrinter::new()
        .write_file(&document, &c_path)
        .with_context(|| format!("writing {}", c_path.display()))?;
    if cli.verbose {
        println!(" Wrote {}", c_path.display());
    }

    if cli.emit_only {
        return Ok(());
    }

    if cli.verbose {
        println!(" Compiling with {}...", cli.cc);
    }
    let compiler = Cc::new(&cli.cc).set_target(cli.cdir.join(&cli.output));
    match compiler.run(&[c_path]) {
        Ok(()) => {
            if cli.verbose {
                println!("{}", "SUCCESS".bright_green().bold());
            }
            Ok(())
        }
        Err(CcError::ExternalToolFailure {
            status,
            stdout,
            stderr,
        }) => {
            if !stdout.is_empty() {
                eprintln!("{}", String::from_utf8_lossy(&stdout));
            }
            if !stderr.is_empty() {
                eprintln!("{}", String::from_utf8_lossy(&stderr));
            }
            bail!("C compiler exited with status {}", status);
        }
        Err(err @ CcError::Launch(_)) => Err(err.into()),
    }
}
