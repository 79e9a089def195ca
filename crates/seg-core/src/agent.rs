//! Cell contents: agent type tag and satisfaction state.
//!
//! The model has exactly two occupant types plus `Empty`.  Both enums are
//! `Copy` so a [`Cell`] is a plain 2-byte value and whole boards clone with a
//! single `memcpy`.

use crate::{ConfigIssue, SegError};

// ── AgentType ─────────────────────────────────────────────────────────────────

/// Who (if anyone) occupies a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentType {
    TypeA,
    TypeB,
    /// No occupant.  Always eligible for relocation.
    #[default]
    Empty,
}

impl AgentType {
    /// `true` for `TypeA` and `TypeB`.
    #[inline]
    pub fn is_occupied(self) -> bool {
        !matches!(self, AgentType::Empty)
    }

    /// Single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            AgentType::TypeA => 'o',
            AgentType::TypeB => 'x',
            AgentType::Empty => '_',
        }
    }

    /// Label used in CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::TypeA => "a",
            AgentType::TypeB => "b",
            AgentType::Empty => "empty",
        }
    }
}

/// Accepts the board symbols (`o`, `x`, `_`) and the letter aliases `A`/`B`.
impl TryFrom<char> for AgentType {
    type Error = SegError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'o' | 'A' => Ok(AgentType::TypeA),
            'x' | 'B' => Ok(AgentType::TypeB),
            '_'       => Ok(AgentType::Empty),
            other     => Err(ConfigIssue::UnknownSymbol(other).into()),
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SatisfactionState ─────────────────────────────────────────────────────────

/// Result of the last satisfaction evaluation for a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SatisfactionState {
    /// Never evaluated (fresh board) — also what empty cells keep forever.
    #[default]
    Unset,
    Satisfied,
    NotSatisfied,
}

impl SatisfactionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SatisfactionState::Unset        => "unset",
            SatisfactionState::Satisfied    => "satisfied",
            SatisfactionState::NotSatisfied => "not_satisfied",
        }
    }
}

impl std::fmt::Display for SatisfactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid position.  Relocation moves whole cells, so the satisfaction
/// state travels with its occupant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind:         AgentType,
    pub satisfaction: SatisfactionState,
}

impl Cell {
    /// A fresh cell with `SatisfactionState::Unset`.
    #[inline]
    pub fn new(kind: AgentType) -> Self {
        Self { kind, satisfaction: SatisfactionState::Unset }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.kind.is_occupied()
    }

    /// Empty, or occupied and last classified `NotSatisfied`.
    #[inline]
    pub fn is_mobile(&self) -> bool {
        !self.is_occupied() || self.satisfaction == SatisfactionState::NotSatisfied
    }
}

impl From<AgentType> for Cell {
    fn from(kind: AgentType) -> Self {
        Cell::new(kind)
    }
}
