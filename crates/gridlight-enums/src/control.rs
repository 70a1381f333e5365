//! Tool buttons of the editor toolbar.

constant_enum! {
    /// Identifies which tool button is active.
    ///
    /// Member names overlap with [`crate::BlockType`] and [`crate::GridView`]
    /// (`LIGHT`, `WALL`) but the values are independent.
    pub enum ControlType as "ControlType" {
        Light = 1 => "LIGHT",
        Wall = 2 => "WALL",
        IncreaseElevation = 3 => "INCREASE_ELEVATION",
        DecreaseElevation = 4 => "DECREASE_ELEVATION",
    }
}
