use core::fmt;
use core::str::FromStr;

use crate::{BlockType, ConstantEnum, ControlType, DragBehavior, EnumError, GridView};

/// Runtime handle naming one of the constant tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableKind {
    BlockType,
    GridView,
    ControlType,
    DragBehavior,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::BlockType,
        TableKind::GridView,
        TableKind::ControlType,
        TableKind::DragBehavior,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::BlockType => BlockType::TABLE,
            TableKind::GridView => GridView::TABLE,
            TableKind::ControlType => ControlType::TABLE,
            TableKind::DragBehavior => DragBehavior::TABLE,
        }
    }

    /// `(name, value)` pairs in value order.
    pub fn members(self) -> Vec<(&'static str, u8)> {
        match self {
            TableKind::BlockType => members_of::<BlockType>(),
            TableKind::GridView => members_of::<GridView>(),
            TableKind::ControlType => members_of::<ControlType>(),
            TableKind::DragBehavior => members_of::<DragBehavior>(),
        }
    }

    /// Resolves a member by symbolic name or value.
    pub fn lookup(self, key: &str) -> Result<(&'static str, u8), EnumError> {
        match self {
            TableKind::BlockType => lookup_in::<BlockType>(key),
            TableKind::GridView => lookup_in::<GridView>(key),
            TableKind::ControlType => lookup_in::<ControlType>(key),
            TableKind::DragBehavior => lookup_in::<DragBehavior>(key),
        }
    }
}

fn members_of<E: ConstantEnum>() -> Vec<(&'static str, u8)> {
    E::ALL.iter().map(|m| (m.name(), m.value())).collect()
}

fn lookup_in<E: ConstantEnum>(key: &str) -> Result<(&'static str, u8), EnumError> {
    crate::parse_member::<E>(key).map(|m| (m.name(), m.value()))
}

// Drop separators and case so `BlockType`, `block_type` and `block-type` agree.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for TableKind {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        TableKind::ALL
            .into_iter()
            .find(|k| normalize(k.name()) == wanted)
            .ok_or_else(|| EnumError::UnknownTable(s.to_string()))
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
