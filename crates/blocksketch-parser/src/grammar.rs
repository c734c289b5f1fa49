//! The three line grammars: block placement, connections, renames.
//!
//! All three share one token, the block reference `<shortId><digits>`
//! (e.g. `P1`, `pte12`). Short identifiers match case-insensitively; the
//! reference name keeps the casing as written. The matchers here are pure:
//! they find matches in a line and return them; applying matches to a
//! diagram is the [`import`](crate::import) module's job.

use winnow::{
    Parser as _,
    ascii::{Caseless, digit1, space0},
    combinator::alt,
    error::ModalResult,
    token::{literal, one_of, rest},
};

use blocksketch_core::{block::BlockKind, diagram::EdgeWeight};

/// A reference to a block by its sketch token, e.g. `PTE1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockRef<'s> {
    pub kind: BlockKind,
    /// The token as written, short id plus digits; doubles as the block
    /// name until a rename replaces it.
    pub name: &'s str,
}

/// One block token found in a sketch line, with its column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SketchToken<'s> {
    pub reference: BlockRef<'s>,
    /// First column of the match (0-based, in characters).
    pub start_col: usize,
    /// One past the last column of the match.
    pub end_col: usize,
}

/// A matched connection line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConnectionSpec<'s> {
    pub from: BlockRef<'s>,
    pub to: BlockRef<'s>,
    pub weight: EdgeWeight,
}

/// A matched rename line. `raw_name` is the text after the colon, before
/// punctuation cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenameSpec<'s> {
    pub target: BlockRef<'s>,
    pub raw_name: &'s str,
}

/// Parses a short identifier into its block kind.
///
/// Ordered longest-first so `pte1` resolves to the first-order lag rather
/// than stopping at `p`; since every reference requires trailing digits the
/// ordering is otherwise not observable.
fn short_id(input: &mut &str) -> ModalResult<BlockKind> {
    alt((
        alt((
            literal(Caseless("pte")).value(BlockKind::PTEinsGlied),
            literal(Caseless("ptz")).value(BlockKind::PTZweiGlied),
            literal(Caseless("sat")).value(BlockKind::Saettigung),
            literal(Caseless("tz")).value(BlockKind::TZGlied),
            literal(Caseless("kl")).value(BlockKind::KLGlied),
            literal(Caseless("c")).value(BlockKind::Coordinate),
            literal(Caseless("s")).value(BlockKind::Summationsstelle),
        )),
        alt((
            literal(Caseless("v")).value(BlockKind::Verzweigung),
            literal(Caseless("p")).value(BlockKind::PGlied),
            literal(Caseless("i")).value(BlockKind::IGlied),
            literal(Caseless("d")).value(BlockKind::DGlied),
            literal(Caseless("u")).value(BlockKind::UeFunk),
            literal(Caseless("m")).value(BlockKind::MGlied),
        )),
    ))
    .parse_next(input)
}

/// Parses a block reference: short id followed by one or more digits.
fn block_ref<'s>(input: &mut &'s str) -> ModalResult<BlockRef<'s>> {
    (short_id, digit1)
        .with_taken()
        .map(|((kind, _), name)| BlockRef { kind, name })
        .parse_next(input)
}

/// Parses a full connection specification.
fn connection_spec<'s>(input: &mut &'s str) -> ModalResult<ConnectionSpec<'s>> {
    (block_ref, space0, one_of(['-', '=']), space0, block_ref)
        .map(|(from, _, marker, _, to)| ConnectionSpec {
            from,
            to,
            weight: if marker == '=' {
                EdgeWeight::Vector
            } else {
                EdgeWeight::Scalar
            },
        })
        .parse_next(input)
}

/// Parses a full rename specification; the new name runs to end of line.
fn rename_spec<'s>(input: &mut &'s str) -> ModalResult<RenameSpec<'s>> {
    (block_ref, space0, ':', rest)
        .map(|(target, _, _, raw_name)| RenameSpec { target, raw_name })
        .parse_next(input)
}

/// Returns the leftmost match of `parser` anywhere in `line`, if any.
fn search<'s, O>(line: &'s str, parser: fn(&mut &'s str) -> ModalResult<O>) -> Option<O> {
    let mut byte = 0;
    while byte < line.len() {
        let mut remaining = &line[byte..];
        if let Ok(found) = parser(&mut remaining) {
            return Some(found);
        }
        let Some(ch) = line[byte..].chars().next() else {
            break;
        };
        byte += ch.len_utf8();
    }
    None
}

/// Finds all non-overlapping block tokens in a sketch line, leftmost first,
/// with their column spans.
pub(crate) fn scan_sketch_line(line: &str) -> Vec<SketchToken<'_>> {
    let mut tokens = Vec::new();
    let mut byte = 0;
    let mut col = 0;
    while byte < line.len() {
        let mut remaining = &line[byte..];
        let before = remaining.len();
        if let Ok(reference) = block_ref(&mut remaining) {
            // Short ids and digits are ASCII, so the consumed byte count is
            // also the consumed column count.
            let consumed = before - remaining.len();
            tokens.push(SketchToken {
                reference,
                start_col: col,
                end_col: col + consumed,
            });
            byte += consumed;
            col += consumed;
        } else {
            let Some(ch) = line[byte..].chars().next() else {
                break;
            };
            byte += ch.len_utf8();
            col += 1;
        }
    }
    tokens
}

/// Tries a connection line; only the first match is used. Lines without a
/// match are not an error.
pub(crate) fn match_connection(line: &str) -> Option<ConnectionSpec<'_>> {
    search(line, connection_spec)
}

/// Tries a rename line (already trimmed by the caller); only the first
/// match is used. Lines without a match are not an error.
pub(crate) fn match_rename(line: &str) -> Option<RenameSpec<'_>> {
    search(line, rename_spec)
}
