use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use gridlight_enums::TableKind;
use serde::{Deserialize, Serialize};

use crate::drift::{self, DriftReport};
use crate::error::TablesError;

/// Member name -> value. Values are wide so malformed copies still load.
pub type Table = BTreeMap<String, i64>;

/// Snapshot of the constant tables, one TOML section per table:
///
/// ```toml
/// [BlockType]
/// NORMAL = 1
/// LIGHT = 2
/// WALL = 3
/// ```
///
/// Sections may be absent; `verify` reports them instead of failing the load.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConstantTables {
    #[serde(rename = "BlockType", default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<Table>,
    #[serde(rename = "GridView", default, skip_serializing_if = "Option::is_none")]
    pub grid_view: Option<Table>,
    #[serde(rename = "ControlType", default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<Table>,
    #[serde(rename = "DragBehavior", default, skip_serializing_if = "Option::is_none")]
    pub drag_behavior: Option<Table>,
    // Sections that name no known table
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl ConstantTables {
    /// Snapshot of the tables compiled into this build.
    pub fn compiled() -> Self {
        let mut out = ConstantTables::default();
        for kind in TableKind::ALL {
            *out.table_mut(kind) = Some(compiled_table(kind));
        }
        out
    }

    /// Copy holding only `kind`.
    pub fn only(&self, kind: TableKind) -> Self {
        let mut out = ConstantTables::default();
        *out.table_mut(kind) = self.table(kind).cloned();
        out
    }

    pub fn table(&self, kind: TableKind) -> Option<&Table> {
        match kind {
            TableKind::BlockType => self.block_type.as_ref(),
            TableKind::GridView => self.grid_view.as_ref(),
            TableKind::ControlType => self.control_type.as_ref(),
            TableKind::DragBehavior => self.drag_behavior.as_ref(),
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut Option<Table> {
        match kind {
            TableKind::BlockType => &mut self.block_type,
            TableKind::GridView => &mut self.grid_view,
            TableKind::ControlType => &mut self.control_type,
            TableKind::DragBehavior => &mut self.drag_behavior,
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, TablesError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_toml_str(&s)?;
        log::debug!(
            "loaded {:?}: {} known section(s), {} unknown",
            path,
            TableKind::ALL
                .iter()
                .filter(|k| tables.table(**k).is_some())
                .count(),
            tables.unknown.len()
        );
        Ok(tables)
    }

    pub fn to_toml_string(&self) -> Result<String, TablesError> {
        Ok(toml::to_string(self)?)
    }

    /// Compares this snapshot with the compiled tables.
    pub fn verify(&self) -> DriftReport {
        drift::verify(self)
    }
}

fn compiled_table(kind: TableKind) -> Table {
    kind.members()
        .into_iter()
        .map(|(name, value)| (name.to_string(), i64::from(value)))
        .collect()
}
