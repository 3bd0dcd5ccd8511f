use std::fmt::Formatter;

use super::{column::Column, row::Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self) -> A1Notation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl CellPosition {
    /// Top-left cell of the first sheet. Appends are anchored here and the
    /// service places new rows after the existing table.
    pub fn origin() -> Self {
        CellPosition {
            col: Column::A,
            row: Row::first(),
        }
    }
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation(format!("{}{}", self.col, self.row))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
}

impl CellRange {
    /// Columns A through D from the header row down to `last_row`.
    pub fn table_through(last_row: Row) -> Self {
        CellRange {
            start: CellPosition::origin(),
            end: CellPosition {
                col: Column::D,
                row: last_row,
            },
        }
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation(format!(
            "{}:{}",
            self.start.to_a1_notation(),
            self.end.to_a1_notation()
        ))
    }
}
