//! Point-code decoder.
//!
//! Point-by-point datasets annotate each point with one symbol:
//!
//! - `S` server won, `A` ace (server won)
//! - `R` returner won, `D` double fault (returner won)
//! - `;` end of game, `.` end of set, `/` serve change in a tiebreak
//!
//! Separators carry no outcome; the engine recomputes game and set
//! boundaries itself. After stripping them, what remains must be exactly
//! the two symbols `S` and `R`.

use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Symbol for a point won by the server.
pub const SERVER_WON: char = 'S';

/// Symbol for a point won by the returner.
pub const RETURNER_WON: char = 'R';

const SEPARATORS: [char; 3] = [';', '.', '/'];

fn normalize(symbol: char) -> char {
    match symbol {
        'A' => SERVER_WON,
        'D' => RETURNER_WON,
        other => other,
    }
}

/// Decode a point code into "server won" outcomes, one per point.
///
/// ```
/// use tennis_points::dataset::decode_point_code;
///
/// let points = decode_point_code("SARS;RRDR.").unwrap();
/// assert_eq!(points, vec![true, true, false, true, false, false, false, false]);
/// ```
pub fn decode_point_code(code: &str) -> Result<Vec<bool>> {
    let flat: Vec<char> = code
        .chars()
        .filter(|symbol| !SEPARATORS.contains(symbol))
        .map(normalize)
        .collect();

    let mut symbols: SmallVec<[char; 4]> = SmallVec::new();
    for &symbol in &flat {
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols.sort_unstable();

    if symbols.as_slice() != [RETURNER_WON, SERVER_WON] {
        return Err(Error::AmbiguousPointCode {
            symbols: symbols.iter().collect(),
        });
    }

    Ok(flat.into_iter().map(|symbol| symbol == SERVER_WON).collect())
}
