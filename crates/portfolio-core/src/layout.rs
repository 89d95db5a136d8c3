//! Layout rules for the skill bars and project grid.

/// Filled width of a skill bar, in percent.
pub fn skill_fill_percent(level: u8) -> u8 {
    level.min(100)
}

/// Inline style for a skill bar fill at its final width
pub fn skill_bar_width(level: u8) -> String {
    format!("width: {}%;", skill_fill_percent(level))
}

/// Where a project card sits in the gallery grid
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardPlacement {
    /// Normal grid flow
    #[default]
    Flow,
    /// Starts at the second column on wide layouts
    ShiftedToColumnTwo,
}

impl CardPlacement {
    /// Extra CSS class for the card, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            CardPlacement::Flow => None,
            CardPlacement::ShiftedToColumnTwo => Some("project-card--col-start-2"),
        }
    }
}

/// Placement of the card at `index` in the project table.
///
/// The fourth card centres the last row of the three-column layout.
pub fn card_placement(index: usize) -> CardPlacement {
    if index == 3 {
        CardPlacement::ShiftedToColumnTwo
    } else {
        CardPlacement::Flow
    }
}

/// Stable element id built from display names.
///
/// `dom_id(&["skill", "Frontend", "React.js"])` is `"skill-frontend-react-js"`.
pub fn dom_id(parts: &[&str]) -> String {
    let mut id = String::new();
    for part in parts {
        for c in part.chars() {
            if c.is_ascii_alphanumeric() {
                id.push(c.to_ascii_lowercase());
            } else if !id.is_empty() && !id.ends_with('-') {
                id.push('-');
            }
        }
        if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    while id.ends_with('-') {
        id.pop();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_matches_level_within_range() {
        assert_eq!(skill_fill_percent(0), 0);
        assert_eq!(skill_fill_percent(95), 95);
        assert_eq!(skill_fill_percent(100), 100);
    }

    #[test]
    fn fill_clamps_above_hundred() {
        assert_eq!(skill_fill_percent(101), 100);
        assert_eq!(skill_fill_percent(u8::MAX), 100);
        assert_eq!(skill_bar_width(180), "width: 100%;");
    }

    #[test]
    fn only_fourth_card_is_shifted() {
        for index in 0..10 {
            let expected = if index == 3 {
                CardPlacement::ShiftedToColumnTwo
            } else {
                CardPlacement::Flow
            };
            assert_eq!(card_placement(index), expected, "index {index}");
        }
        assert_eq!(card_placement(3).class(), Some("project-card--col-start-2"));
        assert_eq!(card_placement(0).class(), None);
    }

    #[test]
    fn dom_ids_are_slugged() {
        assert_eq!(dom_id(&["skill", "Frontend", "React.js"]), "skill-frontend-react-js");
        assert_eq!(dom_id(&["skill", "Tools", "Visual Studio Code"]), "skill-tools-visual-studio-code");
        assert_eq!(dom_id(&["a..b", "", "C"]), "a-b-c");
    }
}
