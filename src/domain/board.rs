use crate::{
    domain::card::{Card, CardId},
    error::{FlowdeckError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Stable identifier for a board column
///
/// The set of column ids is fixed when the board is constructed; no
/// operation adds or removes columns afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a ColumnId from an id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColumnId {
    type Err = FlowdeckError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            Err(FlowdeckError::InvalidColumnId(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a board column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub id: ColumnId,
    pub name: String,
}

impl ColumnSpec {
    pub fn new(id: ColumnId, name: String) -> Self {
        Self { id, name }
    }
}

/// Board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Project Management".to_string(),
            columns: vec![
                ColumnSpec::new(ColumnId::new("requested"), "Requested".to_string()),
                ColumnSpec::new(ColumnId::new("toDo"), "To do".to_string()),
                ColumnSpec::new(ColumnId::new("inProgress"), "In Progress".to_string()),
                ColumnSpec::new(ColumnId::new("done"), "Done".to_string()),
            ],
        }
    }
}

/// A live column: one workflow stage and its ordered cards
///
/// Card order is the vertical order presented to the user. Columns are
/// read-only from the outside; membership and order change only through
/// board operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    cards: Vec<Card>,
}

impl Column {
    fn new(spec: ColumnSpec) -> Self {
        Self {
            id: spec.id,
            name: spec.name,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cards in this column, in display order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

/// Board state: the columns in left-to-right display order
///
/// The board is an owned in-memory value. The rendering layer reads it
/// through [`Board::columns`]; the drag layer mutates it through
/// [`crate::domain::reorder::apply_move`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    name: String,
    columns: Vec<Column>,
}

impl Board {
    /// Builds an empty board from a configuration
    ///
    /// Column ids must be non-blank and unique; the configured order is the
    /// display order for the lifetime of the board.
    pub fn new(config: BoardConfig) -> Result<Self> {
        if config.columns.is_empty() {
            return Err(FlowdeckError::NoColumns);
        }

        let mut columns: Vec<Column> = Vec::with_capacity(config.columns.len());
        for spec in config.columns {
            if spec.id.as_str().trim().is_empty() {
                return Err(FlowdeckError::InvalidColumnId(spec.id.to_string()));
            }
            if columns.iter().any(|column| column.id == spec.id) {
                return Err(FlowdeckError::DuplicateColumnId(spec.id.to_string()));
            }
            columns.push(Column::new(spec));
        }

        Ok(Self {
            name: config.name,
            columns,
        })
    }

    /// Builds a board with every seed card placed in the leftmost column
    ///
    /// Seed order is preserved. Duplicate card ids are rejected so that
    /// each card appears on the board exactly once.
    pub fn seeded(config: BoardConfig, cards: Vec<Card>) -> Result<Self> {
        let mut board = Self::new(config)?;
        for card in cards {
            if board.find_card(&card.id).is_some() {
                return Err(FlowdeckError::DuplicateCardId(card.id.to_string()));
            }
            board.columns[0].cards.push(card);
        }
        Ok(board)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub(crate) fn column_position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    pub(crate) fn column_mut(&mut self, position: usize) -> &mut Column {
        &mut self.columns[position]
    }

    /// Appends a card to the named column
    ///
    /// Unlike the drag path, this is a deliberate host call, so an unknown
    /// column is an error rather than a no-op. A card id already present
    /// anywhere on the board is rejected.
    pub fn add_card(&mut self, column_id: &ColumnId, card: Card) -> Result<()> {
        if self.find_card(&card.id).is_some() {
            return Err(FlowdeckError::DuplicateCardId(card.id.to_string()));
        }
        let position = self
            .column_position(column_id)
            .ok_or_else(|| FlowdeckError::ColumnNotFound(column_id.to_string()))?;

        self.columns[position].cards.push(card);
        Ok(())
    }

    /// Locates a card, returning its column id and position within it
    pub fn find_card(&self, id: &CardId) -> Option<(&ColumnId, usize)> {
        for column in &self.columns {
            if let Some(position) = column.cards.iter().position(|card| &card.id == id) {
                return Some((&column.id, position));
            }
        }
        None
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_cards(count: u32) -> Vec<Card> {
        (1..=count)
            .map(|n| Card::new(CardId::new(n.to_string()), format!("Task {}", n)))
            .collect()
    }

    #[test]
    fn test_board_creation_from_default_config() {
        let board = Board::new(BoardConfig::default()).unwrap();

        assert_eq!(board.name(), "Project Management");
        assert_eq!(board.columns().len(), 4);

        let ids: Vec<&str> = board
            .columns()
            .iter()
            .map(|column| column.id().as_str())
            .collect();
        assert_eq!(ids, vec!["requested", "toDo", "inProgress", "done"]);

        assert_eq!(board.columns()[2].name(), "In Progress");
        assert!(board.columns().iter().all(|column| column.is_empty()));
    }

    #[test]
    fn test_board_requires_at_least_one_column() {
        let config = BoardConfig {
            name: "Empty".to_string(),
            columns: Vec::new(),
        };

        assert!(Board::new(config).is_err());
    }

    #[test]
    fn test_duplicate_column_ids_rejected() {
        let config = BoardConfig {
            name: "Dup".to_string(),
            columns: vec![
                ColumnSpec::new(ColumnId::new("backlog"), "Backlog".to_string()),
                ColumnSpec::new(ColumnId::new("backlog"), "Backlog again".to_string()),
            ],
        };

        assert!(Board::new(config).is_err());
    }

    #[test]
    fn test_blank_column_id_rejected() {
        let config = BoardConfig {
            name: "Blank".to_string(),
            columns: vec![ColumnSpec::new(ColumnId::new("  "), "Blank".to_string())],
        };

        assert!(Board::new(config).is_err());
    }

    #[test]
    fn test_column_id_parsing() {
        let id = ColumnId::from_str("toDo").unwrap();
        assert_eq!(id.as_str(), "toDo");

        assert!(ColumnId::from_str("").is_err());
        assert!(ColumnId::from_str("   ").is_err());
    }

    #[test]
    fn test_seeded_board_places_cards_in_first_column() {
        let board = Board::seeded(BoardConfig::default(), seed_cards(5)).unwrap();

        assert_eq!(board.card_count(), 5);
        assert_eq!(board.columns()[0].len(), 5);
        assert!(board.columns()[1..].iter().all(|column| column.is_empty()));

        let contents: Vec<&str> = board.columns()[0]
            .cards()
            .iter()
            .map(|card| card.id.as_str())
            .collect();
        assert_eq!(contents, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_seeded_board_rejects_duplicate_card_ids() {
        let cards = vec![
            Card::new(CardId::new("1"), "First task".to_string()),
            Card::new(CardId::new("1"), "First task again".to_string()),
        ];

        assert!(Board::seeded(BoardConfig::default(), cards).is_err());
    }

    #[test]
    fn test_add_card_appends_to_column() {
        let mut board = Board::seeded(BoardConfig::default(), seed_cards(2)).unwrap();

        let card = Card::new(CardId::generate(), "New task".to_string());
        let id = card.id.clone();
        board
            .add_card(&ColumnId::new("inProgress"), card)
            .unwrap();

        assert_eq!(board.card_count(), 3);
        let column = board.column(&ColumnId::new("inProgress")).unwrap();
        assert_eq!(column.len(), 1);
        assert_eq!(column.cards()[0].id, id);
    }

    #[test]
    fn test_add_card_to_unknown_column() {
        let mut board = Board::new(BoardConfig::default()).unwrap();

        let card = Card::new(CardId::new("1"), "First task".to_string());
        assert!(board.add_card(&ColumnId::new("archive"), card).is_err());
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_add_card_with_duplicate_id() {
        let mut board = Board::seeded(BoardConfig::default(), seed_cards(3)).unwrap();

        let card = Card::new(CardId::new("2"), "Impostor".to_string());
        assert!(board.add_card(&ColumnId::new("done"), card).is_err());
        assert_eq!(board.card_count(), 3);
    }

    #[test]
    fn test_find_card() {
        let board = Board::seeded(BoardConfig::default(), seed_cards(3)).unwrap();

        let (column_id, position) = board.find_card(&CardId::new("2")).unwrap();
        assert_eq!(column_id.as_str(), "requested");
        assert_eq!(position, 1);

        assert!(board.find_card(&CardId::new("99")).is_none());
    }
}
