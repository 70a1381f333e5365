//! Effect of a pointer drag across the grid.

constant_enum! {
    /// What happens to each cell the pointer crosses while dragging.
    ///
    /// `None` is a real member (value 0) meaning no drag is in progress; it is
    /// not the same as an absent value.
    #[derive(Default)]
    pub enum DragBehavior as "DragBehavior" {
        #[default]
        None = 0 => "NONE",
        AddLight = 1 => "ADD_LIGHT",
        RemoveLight = 2 => "REMOVE_LIGHT",
        AddWall = 3 => "ADD_WALL",
        RemoveWall = 4 => "REMOVE_WALL",
        IncreaseElevation = 5 => "INCREASE_ELEVATION",
    }
}
