use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("{table} has no member with value {value}")]
    UnknownValue { table: &'static str, value: i64 },

    #[error("{table} has no member named `{name}`")]
    UnknownName { table: &'static str, name: String },

    #[error("unknown table `{0}` (expected BlockType, GridView, ControlType or DragBehavior)")]
    UnknownTable(String),
}
