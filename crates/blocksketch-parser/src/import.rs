//! Applies classified section buffers to a diagram.

use log::debug;

use blocksketch_core::{diagram::Diagram, error::DiagramError, geometry::Point};

use crate::{SketchScales, grammar};

/// Characters stripped out of new block names by replacing them with
/// spaces.
const NAME_PUNCTUATION: &[char] = &[
    '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '/', '\\', ',', '.', ';', '\'',
];

/// Imports blocks from the sketch buffer, a literal character canvas.
///
/// Wholly blank lines are stripped from the top and bottom only; interior
/// blank lines keep counting toward row numbering. Rows are numbered
/// bottom-up, so the y-axis points up in the emitted drawing. An all-blank
/// buffer imports nothing and is not an error.
pub(crate) fn sketch(
    diagram: &mut Diagram,
    lines: &[String],
    scales: &SketchScales,
) -> Result<(), DiagramError> {
    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return Ok(());
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);

    for (row, line) in lines[first..=last].iter().rev().enumerate() {
        let y = row as f64 * scales.y_scale;
        for token in grammar::scan_sketch_line(line) {
            let x = scales.x_scale * (token.start_col + token.end_col) as f64 / 2.0;
            diagram.add_block(
                token.reference.kind,
                token.reference.name,
                Point::new(x, y),
                None,
                None,
            )?;
        }
    }

    debug!(num_blocks = diagram.num_blocks(); "imported sketch");
    Ok(())
}

/// Imports connections; lines without a match are silently skipped, which
/// permits comments and blank separators.
pub(crate) fn connections(diagram: &mut Diagram, lines: &[String]) -> Result<(), DiagramError> {
    for line in lines {
        if let Some(spec) = grammar::match_connection(line) {
            diagram.add_connection(spec.from.name, spec.to.name, spec.weight)?;
        }
    }

    debug!(num_edges = diagram.num_edges(); "imported connections");
    Ok(())
}

/// Imports renames in strict buffer order.
///
/// Each rename resolves the short-id token against the *current* block
/// names, so a short id already renamed away no longer resolves. The new
/// name is the text after the colon with punctuation replaced by spaces and
/// surrounding whitespace trimmed.
pub(crate) fn names(diagram: &mut Diagram, lines: &[String]) -> Result<(), DiagramError> {
    for line in lines {
        if let Some(spec) = grammar::match_rename(line.trim()) {
            let new_name: String = spec
                .raw_name
                .chars()
                .map(|c| if NAME_PUNCTUATION.contains(&c) { ' ' } else { c })
                .collect();
            diagram.rename_block(spec.target.name, new_name.trim())?;
        }
    }
    Ok(())
}
