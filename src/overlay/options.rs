//! Axis option sets and the vertical-axis preset table
//!
//! One table drives both the dropdown contents and the synchronization
//! that runs when the vertical axis changes.

/// Option on the vertical (Y) axis dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalOption {
    System,
    Organisation,
    ManagementStyle,
}

/// Option on the X axis dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XOption {
    Subsystems,
    Products,
    Tasks,
}

/// Option on the Z axis dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZOption {
    Supersystem,
    Market,
    Resource,
}

/// One row of the preset table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPreset {
    pub vertical: VerticalOption,
    pub x: XOption,
    pub z: ZOption,
}

/// Vertical choice -> (x, z) selections
pub const PRESETS: [AxisPreset; 3] = [
    AxisPreset {
        vertical: VerticalOption::System,
        x: XOption::Subsystems,
        z: ZOption::Supersystem,
    },
    AxisPreset {
        vertical: VerticalOption::Organisation,
        x: XOption::Products,
        z: ZOption::Market,
    },
    AxisPreset {
        vertical: VerticalOption::ManagementStyle,
        x: XOption::Tasks,
        z: ZOption::Resource,
    },
];

/// Common behavior of the three option enums
pub trait AxisOption: Copy + PartialEq + 'static {
    /// Options in dropdown order
    const ALL: &'static [Self];

    /// Stable identifier of the option
    fn value(self) -> &'static str;

    /// Human readable text
    fn label(self) -> &'static str;

    /// Parse an identifier
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.value() == value)
    }

    /// Position in `ALL`
    fn position(self) -> usize {
        Self::ALL.iter().position(|&o| o == self).unwrap_or(0)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|o| o.label()).collect()
    }
}

impl AxisOption for VerticalOption {
    const ALL: &'static [Self] = &[
        VerticalOption::System,
        VerticalOption::Organisation,
        VerticalOption::ManagementStyle,
    ];

    fn value(self) -> &'static str {
        match self {
            VerticalOption::System => "systemOption",
            VerticalOption::Organisation => "organisationOption",
            VerticalOption::ManagementStyle => "managementStyleOption",
        }
    }

    fn label(self) -> &'static str {
        match self {
            VerticalOption::System => "System",
            VerticalOption::Organisation => "Organisation",
            VerticalOption::ManagementStyle => "Management style",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value {
            "systemOption" => Some(VerticalOption::System),
            "organisationOption" => Some(VerticalOption::Organisation),
            // Older pages used the leadership spelling for the same option
            "managementStyleOption" | "leadershipStyleOption" => {
                Some(VerticalOption::ManagementStyle)
            }
            _ => None,
        }
    }
}

impl AxisOption for XOption {
    const ALL: &'static [Self] = &[XOption::Subsystems, XOption::Products, XOption::Tasks];

    fn value(self) -> &'static str {
        match self {
            XOption::Subsystems => "subsystemsOption",
            XOption::Products => "productOptions",
            XOption::Tasks => "tasksOption",
        }
    }

    fn label(self) -> &'static str {
        match self {
            XOption::Subsystems => "Subsystems",
            XOption::Products => "Products",
            XOption::Tasks => "Tasks",
        }
    }
}

impl AxisOption for ZOption {
    const ALL: &'static [Self] = &[ZOption::Supersystem, ZOption::Market, ZOption::Resource];

    fn value(self) -> &'static str {
        match self {
            ZOption::Supersystem => "supersystemOption",
            ZOption::Market => "marketOption",
            ZOption::Resource => "resourceOption",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ZOption::Supersystem => "Supersystem",
            ZOption::Market => "Market",
            ZOption::Resource => "Resources",
        }
    }
}

/// Selections the X and Z dropdowns take when the vertical axis changes
pub fn sync_for_vertical(vertical: VerticalOption) -> (XOption, ZOption) {
    PRESETS
        .iter()
        .find(|p| p.vertical == vertical)
        .map(|p| (p.x, p.z))
        .unwrap_or((XOption::Subsystems, ZOption::Supersystem))
}

/// Current selection of all three dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: XOption,
    pub vertical: VerticalOption,
    pub z: ZOption,
}

impl AxisSelection {
    /// Select a vertical option and apply its preset to X and Z
    pub fn select_vertical(&mut self, vertical: VerticalOption) {
        let (x, z) = sync_for_vertical(vertical);
        self.vertical = vertical;
        self.x = x;
        self.z = z;
        log::debug!(
            "yOptions={} -> xOptions={}, zOptions={}",
            vertical.value(),
            x.value(),
            z.value()
        );
    }
}

impl Default for AxisSelection {
    fn default() -> Self {
        let preset = PRESETS[0];
        Self { x: preset.x, vertical: preset.vertical, z: preset.z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_preset() {
        let (x, z) = sync_for_vertical(VerticalOption::System);
        assert_eq!(x.value(), "subsystemsOption");
        assert_eq!(z.value(), "supersystemOption");
    }

    #[test]
    fn test_all_presets() {
        assert_eq!(
            sync_for_vertical(VerticalOption::Organisation),
            (XOption::Products, ZOption::Market)
        );
        assert_eq!(
            sync_for_vertical(VerticalOption::ManagementStyle),
            (XOption::Tasks, ZOption::Resource)
        );
    }

    #[test]
    fn test_leadership_alias() {
        assert_eq!(
            VerticalOption::from_value("leadershipStyleOption"),
            Some(VerticalOption::ManagementStyle)
        );
        assert_eq!(VerticalOption::ManagementStyle.value(), "managementStyleOption");
        assert_eq!(VerticalOption::from_value("nope"), None);
    }

    #[test]
    fn test_values_roundtrip() {
        for &o in XOption::ALL {
            assert_eq!(XOption::from_value(o.value()), Some(o));
        }
        for &o in ZOption::ALL {
            assert_eq!(ZOption::from_value(o.value()), Some(o));
        }
        for &o in VerticalOption::ALL {
            assert_eq!(VerticalOption::from_value(o.value()), Some(o));
        }
    }

    #[test]
    fn test_select_vertical_rewrites_x_and_z() {
        let mut sel = AxisSelection::default();
        sel.x = XOption::Tasks;
        sel.z = ZOption::Market;
        sel.select_vertical(VerticalOption::System);
        assert_eq!(sel.x, XOption::Subsystems);
        assert_eq!(sel.z, ZOption::Supersystem);
        assert_eq!(sel.vertical, VerticalOption::System);
    }

    #[test]
    fn test_position_matches_table_order() {
        assert_eq!(VerticalOption::ManagementStyle.position(), 2);
        assert_eq!(XOption::labels(), vec!["Subsystems", "Products", "Tasks"]);
    }
}
