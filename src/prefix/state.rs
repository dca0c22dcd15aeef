/// Interaction-state prefixes a style property or asset name can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StylePrefix {
    Base,
    Insensitive,
    Hover,
    Idle,
    Activate,
    Selected,
    SelectedInsensitive,
    SelectedHover,
    SelectedIdle,
    SelectedActivate,
}

impl StylePrefix {
    pub const ALL: [Self; 10] = [
        Self::Base,
        Self::Insensitive,
        Self::Hover,
        Self::Idle,
        Self::Activate,
        Self::Selected,
        Self::SelectedInsensitive,
        Self::SelectedHover,
        Self::SelectedIdle,
        Self::SelectedActivate,
    ];

    /// The prefix text including its trailing underscore; empty for `Base`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Insensitive => "insensitive_",
            Self::Hover => "hover_",
            Self::Idle => "idle_",
            Self::Activate => "activate_",
            Self::Selected => "selected_",
            Self::SelectedInsensitive => "selected_insensitive_",
            Self::SelectedHover => "selected_hover_",
            Self::SelectedIdle => "selected_idle_",
            Self::SelectedActivate => "selected_activate_",
        }
    }

    /// Splits a prefixed property name such as `selected_hover_color`.
    ///
    /// The longest matching prefix wins.
    pub fn split(name: &str) -> (Self, &str) {
        Self::ALL
            .iter()
            .filter(|prefix| **prefix != Self::Base)
            .filter_map(|prefix| name.strip_prefix(prefix.as_str()).map(|rest| (*prefix, rest)))
            .filter(|(_, rest)| !rest.is_empty())
            .max_by_key(|(prefix, _)| prefix.as_str().len())
            .unwrap_or((Self::Base, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_prefixes_are_distinct_and_underscored() {
        for (i, prefix) in StylePrefix::ALL.iter().enumerate() {
            let text = prefix.as_str();
            assert!(text.is_empty() || text.ends_with('_'));
            assert!(StylePrefix::ALL[i + 1..].iter().all(|other| other.as_str() != text));
        }
    }

    #[test]
    fn split_prefers_longest_prefix() {
        assert_eq!(
            StylePrefix::split("selected_hover_color"),
            (StylePrefix::SelectedHover, "color")
        );
        assert_eq!(StylePrefix::split("hover_color"), (StylePrefix::Hover, "color"));
        assert_eq!(StylePrefix::split("selected_color"), (StylePrefix::Selected, "color"));
    }

    #[test]
    fn split_leaves_unprefixed_names_alone() {
        assert_eq!(StylePrefix::split("color"), (StylePrefix::Base, "color"));
        assert_eq!(StylePrefix::split("idle_"), (StylePrefix::Base, "idle_"));
    }
}
