//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per snail, in display order.  Ids must be unique.
//!
//! ```csv
//! id,image,card_image
//! 1,https://example.org/snail_a.png,https://example.org/card_a.png
//! 2,https://example.org/snail_b.png,https://example.org/card_b.png
//! ```
//!
//! Row order is preserved: it decides lane assignment (`index mod lanes`) and
//! the order snails are scanned in during avoidance.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use snail_core::SnailId;

use crate::{RosterError, SnailData};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    id:         u32,
    image:      String,
    card_image: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> Result<Vec<SnailData>, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for rosters embedded in
/// the binary.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<Vec<SnailData>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut seen: HashSet<u32> = HashSet::new();
    let mut roster = Vec::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        if !seen.insert(row.id) {
            return Err(RosterError::DuplicateId(SnailId(row.id)));
        }
        roster.push(SnailData::new(SnailId(row.id), row.image, row.card_image));
    }

    if roster.is_empty() {
        return Err(RosterError::Empty);
    }
    debug!(snails = roster.len(), "loaded roster");
    Ok(roster)
}
