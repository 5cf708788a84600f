//! Event module - JSON messages a game driver sends to the board
//!
//! Two message types, tagged by `type`:
//! - `board`: the settled grid after a piece locks or rows clear, one string per row
//! - `tick`: the active piece's absolute positions and its marker
//!
//! ```json
//! {"type":"board","rows":["__________", "...", "IIII______"]}
//! {"type":"tick","positions":[[0,4],[0,5],[1,4],[1,5]],"marker":"O"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::Marker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    #[serde(rename = "board")]
    Board { rows: Vec<String> },
    #[serde(rename = "tick")]
    Tick {
        positions: Vec<[i32; 2]>,
        marker: Marker,
    },
}

impl BoardEvent {
    /// Parse one line-delimited JSON event
    pub fn parse(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A `board` event carrying a copy of `grid`
    pub fn board(grid: &Grid) -> Self {
        BoardEvent::Board {
            rows: grid.to_strings(),
        }
    }

    /// A `tick` event carrying a copy of `piece`
    pub fn tick(piece: &Piece) -> Self {
        BoardEvent::Tick {
            positions: piece.positions().iter().map(|&(r, c)| [r, c]).collect(),
            marker: piece.marker(),
        }
    }

    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tick() {
        let ev = BoardEvent::parse(r#"{"type":"tick","positions":[[0,1],[2,3]],"marker":"T"}"#)
            .unwrap();
        assert_eq!(
            ev,
            BoardEvent::Tick {
                positions: vec![[0, 1], [2, 3]],
                marker: 'T'
            }
        );
    }

    #[test]
    fn parses_board() {
        let ev = BoardEvent::parse(r#"{"type":"board","rows":["__","_O"]}"#).unwrap();
        assert_eq!(
            ev,
            BoardEvent::Board {
                rows: vec!["__".to_string(), "_O".to_string()]
            }
        );
    }

    #[test]
    fn rejects_unknown_type_and_multichar_marker() {
        assert!(matches!(
            BoardEvent::parse(r#"{"type":"score","value":1}"#),
            Err(BoardError::Json(_))
        ));
        assert!(BoardEvent::parse(r#"{"type":"tick","positions":[],"marker":"TT"}"#).is_err());
    }

    #[test]
    fn tick_json_uses_type_tag() {
        let piece = Piece::new(vec![(3, 4)], 'J');
        let json = BoardEvent::tick(&piece).to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["type"], "tick");
        assert_eq!(v["marker"], "J");
        assert_eq!(v["positions"][0][1], 4);
    }
}
