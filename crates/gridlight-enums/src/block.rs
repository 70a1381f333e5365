//! Per-cell classification of the editing grid.

constant_enum! {
    /// What a single grid cell is made of.
    #[derive(Default)]
    pub enum BlockType as "BlockType" {
        /// Plain floor cell; receives light and can be raised or lowered.
        #[default]
        Normal = 1 => "NORMAL",
        /// Light-emitting cell.
        Light = 2 => "LIGHT",
        /// Opaque wall cell.
        Wall = 3 => "WALL",
    }
}
