use std::fmt;

/// Kind discriminator for `misc_hours_entries.entry_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscHoursKind {
    Holiday,
    HolidayWorked,
    Misc,
}

impl MiscHoursKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MiscHoursKind::Holiday => "holiday",
            MiscHoursKind::HolidayWorked => "holiday-worked",
            MiscHoursKind::Misc => "misc",
        }
    }

    pub fn parse(value: &str) -> Option<MiscHoursKind> {
        match value {
            "holiday" => Some(MiscHoursKind::Holiday),
            "holiday-worked" => Some(MiscHoursKind::HolidayWorked),
            "misc" => Some(MiscHoursKind::Misc),
            _ => None,
        }
    }
}

impl fmt::Display for MiscHoursKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_column_value() {
        for kind in [MiscHoursKind::Holiday, MiscHoursKind::HolidayWorked, MiscHoursKind::Misc] {
            assert_eq!(MiscHoursKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(MiscHoursKind::parse("vacation"), None);
    }
}
