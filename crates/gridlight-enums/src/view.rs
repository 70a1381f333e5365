constant_enum! {
    /// Overlay the grid renders.
    #[derive(Default)]
    pub enum GridView as "GridView" {
        #[default]
        Light = 1 => "LIGHT",
        Elevation = 2 => "ELEVATION",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantEnum;

    #[test]
    fn contract_values() {
        assert_eq!(GridView::Light.value(), 1);
        assert_eq!(GridView::Elevation.value(), 2);
        assert_eq!(u8::from(GridView::Elevation), 2);
        assert_eq!(GridView::ALL, &[GridView::Light, GridView::Elevation]);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("ELEVATION".parse::<GridView>(), Ok(GridView::Elevation));
        assert_eq!("1".parse::<GridView>(), Ok(GridView::Light));
        assert!("elevation".parse::<GridView>().is_err());
    }
}
