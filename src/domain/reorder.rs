use crate::{
    domain::board::{Board, ColumnId},
    error::{FlowdeckError, Result},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A completed drag gesture, as reported by the drag layer
///
/// The drag layer sends exactly one request per completed drag; a drag
/// cancelled over no valid drop target produces no request at all.
/// `dest_index` is the position the card should occupy after it has left
/// its old slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source_column: ColumnId,
    pub source_index: usize,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

impl MoveRequest {
    pub fn new(
        source_column: ColumnId,
        source_index: usize,
        dest_column: ColumnId,
        dest_index: usize,
    ) -> Self {
        Self {
            source_column,
            source_index,
            dest_column,
            dest_index,
        }
    }
}

/// What a move request did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card was relocated.
    Applied,
    /// The request named a column that is not on this board; the board was
    /// left untouched. Off-target drops end up here.
    Ignored,
}

/// Applies one completed drag gesture to the board
///
/// Relocates the card at `source_index` of the source column to
/// `dest_index` of the destination column (the two may be the same
/// column). Only the involved columns are touched, and the column set and
/// display order never change.
///
/// # Arguments
/// * `board` - The board to mutate
/// * `request` - The gesture reported by the drag layer
///
/// # Errors
///
/// Returns `CardIndexOutOfRange` if either index is outside the valid
/// bounds for its column; the board is left unchanged. Indices are never
/// clamped. A request naming an unknown column is not an error: it yields
/// [`MoveOutcome::Ignored`] with the board unchanged.
///
/// # Examples
/// ```
/// use flowdeck_core::domain::board::{Board, BoardConfig, ColumnId};
/// use flowdeck_core::domain::card::{Card, CardId};
/// use flowdeck_core::domain::reorder::{apply_move, MoveOutcome, MoveRequest};
///
/// let cards = vec![Card::new(CardId::new("1"), "First task".to_string())];
/// let mut board = Board::seeded(BoardConfig::default(), cards).unwrap();
///
/// let request = MoveRequest::new(ColumnId::new("requested"), 0, ColumnId::new("toDo"), 0);
/// assert_eq!(apply_move(&mut board, &request).unwrap(), MoveOutcome::Applied);
/// assert_eq!(board.column(&ColumnId::new("toDo")).unwrap().len(), 1);
/// ```
pub fn apply_move(board: &mut Board, request: &MoveRequest) -> Result<MoveOutcome> {
    let Some(source_position) = board.column_position(&request.source_column) else {
        debug!(column = %request.source_column, "move names unknown source column, ignoring");
        return Ok(MoveOutcome::Ignored);
    };
    let Some(dest_position) = board.column_position(&request.dest_column) else {
        debug!(column = %request.dest_column, "move names unknown destination column, ignoring");
        return Ok(MoveOutcome::Ignored);
    };

    let source_len = board.columns()[source_position].len();
    if request.source_index >= source_len {
        return Err(FlowdeckError::CardIndexOutOfRange {
            column: request.source_column.to_string(),
            index: request.source_index,
            len: source_len,
        });
    }

    // Insertion positions are counted after the card has left its old
    // slot, so a same-column move has one slot fewer to aim at.
    let insertable_len = if source_position == dest_position {
        source_len - 1
    } else {
        board.columns()[dest_position].len()
    };
    if request.dest_index > insertable_len {
        return Err(FlowdeckError::CardIndexOutOfRange {
            column: request.dest_column.to_string(),
            index: request.dest_index,
            len: insertable_len,
        });
    }

    let card = board
        .column_mut(source_position)
        .cards_mut()
        .remove(request.source_index);
    board
        .column_mut(dest_position)
        .cards_mut()
        .insert(request.dest_index, card);

    Ok(MoveOutcome::Applied)
}
