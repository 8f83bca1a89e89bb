use crate::artifacts::comparison::display_line::LineType;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct LineFilter: u32 {
        const ADDED = 0b001;
        const EQUAL = 0b010;
        const REMOVED = 0b100;
    }
}

impl LineFilter {
    /// Parses a filter such as `AR` (added and removed only).
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                'A' => filter |= Self::ADDED,
                'E' => filter |= Self::EQUAL,
                'R' => filter |= Self::REMOVED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, line_type: LineType) -> bool {
        match line_type {
            LineType::Added => self.contains(Self::ADDED),
            LineType::Equal => self.contains(Self::EQUAL),
            LineType::Removed => self.contains(Self::REMOVED),
        }
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::all()
    }
}
