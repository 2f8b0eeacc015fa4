//! The fold-level engine.
//!
//! A second, independent walk over a styled range. Section headers (read back as
//! [`StyleTag::Section`] through the accessor) open fold regions: the header line
//! itself sits at the floor level with the header flag, and the lines after it sit one
//! level deeper until the next header resets the nesting.

use log::trace;
use scanfold_core::{DocumentAccess, FoldLevel, StyleTag};

use crate::classify::is_space;
use crate::scan::at_line_end;
use crate::FOLD_COMPACT;

/// Recompute fold records for the lines covering `[start, start + length)`.
///
/// Assumes the style pass already ran over the range. A record is written back only
/// when it differs from what is stored, so a repeated pass over unchanged input
/// performs no writes. Shares the style pass's precondition: `start` is a line start.
pub fn fold_levels<D: DocumentAccess + ?Sized>(doc: &mut D, start: usize, length: usize) {
    let end = start + length;
    trace!("fold pass over [{start}, {end})");
    let fold_compact = doc.config_int(FOLD_COMPACT, 1) != 0;

    let mut line_current = doc.line_of(start);
    let mut visible_chars = 0usize;
    let mut header_point = false;

    for pos in start..end {
        let ch = doc.char_at(pos);
        if doc.style_at(pos) == StyleTag::Section {
            header_point = true;
        }

        if at_line_end(ch, doc.safe_char_at(pos + 1)) {
            let number = if header_point {
                // Headers collapse back to the floor; only the lines after them nest.
                FoldLevel::BASE
            } else {
                inherited_number(doc, line_current)
            };
            let record = FoldLevel {
                number,
                is_header: header_point,
                is_blank: fold_compact && visible_chars == 0,
            };
            if record != doc.fold_level(line_current) {
                doc.set_fold_level(line_current, record);
            }

            line_current += 1;
            visible_chars = 0;
            header_point = false;
        }

        if !is_space(ch) {
            visible_chars += 1;
        }
    }

    // One more boundary for the line containing the range end. Only the level number
    // is recomputed here; flag bits already stored on that line are preserved.
    let stored = doc.fold_level(line_current);
    let record = FoldLevel {
        number: inherited_number(doc, line_current),
        ..stored
    };
    if record != stored {
        doc.set_fold_level(line_current, record);
    }
}

fn inherited_number<D: DocumentAccess + ?Sized>(doc: &D, line: usize) -> u32 {
    if line == 0 {
        return FoldLevel::BASE;
    }
    let previous = doc.fold_level(line - 1);
    if previous.is_header {
        FoldLevel::BASE + 1
    } else {
        previous.number
    }
}
