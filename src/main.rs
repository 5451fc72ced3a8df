use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use treediff::compare::builder::DiffTreeBuilder;
use treediff::render::render;

#[derive(Parser)]
#[command(
    name = "treediff",
    version = "0.1.0",
    about = "Compare two directory trees",
    long_about = "Compares two directory trees and prints which files were removed, \
    added, changed, or renamed, recursing into subdirectories present on both sides. \
    A removed and an added file with identical content at the same level are reported \
    as a single rename."
)]
struct Cli {
    #[arg(index = 1, help = "The old directory")]
    old: PathBuf,
    #[arg(index = 2, help = "The new directory")]
    new: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Styled output is unconditional, an ANSI-capable terminal is assumed
    // even when stdout is redirected.
    colored::control::set_override(true);

    let mut tree = DiffTreeBuilder::new(&cli.old, &cli.new).build()?;
    tree.prune();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    writeln!(writer, "--- {}", cli.old.display())?;
    writeln!(writer, "+++ {}", cli.new.display())?;
    render(&tree, &mut writer)?;

    Ok(())
}
