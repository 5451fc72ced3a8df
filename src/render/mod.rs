//! Box-drawing rendering of the pruned diff tree
//!
//! Children at each level are re-sorted by name before printing, so output
//! is deterministic regardless of directory enumeration order. Rendering
//! writes to any `std::io::Write`, the binary hands it a stdout lock.

use crate::tree::{Child, DirNode};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

const PADDING: usize = 2;

/// Print the tree below the `---`/`+++` header lines.
///
/// The last child at each level gets a corner connector, the others a tee;
/// directories render bold with a folder marker and recurse with the prefix
/// extended by one indentation column.
pub fn render(tree: &DirNode, writer: &mut impl Write) -> Result<()> {
    render_level(tree, writer, "")
}

fn render_level(tree: &DirNode, writer: &mut impl Write, prefix: &str) -> Result<()> {
    let children = tree.children();
    let amount = children.len();

    for (i, (name, child)) in children.into_iter().enumerate() {
        let last = i == amount - 1;
        let connector = if last { '└' } else { '├' };
        let left_align = format!("{prefix}{connector}{}", "─".repeat(PADDING));

        match child {
            Child::File(entry) => {
                let label = match entry.renamed_from() {
                    Some(old_name) => format!("{{{name} => {old_name}}}"),
                    None => name.to_string(),
                };
                writeln!(writer, "{left_align}{}", entry.kind().paint(&label))?;
            }
            Child::Dir(node) => {
                writeln!(writer, "{left_align}{}", format!("📁 {name}").bold())?;
                let continuation = if last { ' ' } else { '│' };
                let subprefix = format!("{prefix}{continuation}{}", " ".repeat(PADDING));
                render_level(node, writer, &subprefix)?;
            }
        }
    }

    Ok(())
}
