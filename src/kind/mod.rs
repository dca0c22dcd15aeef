use std::fmt;

/// Why a kind name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindViolation {
    Empty,
    InvalidStart(char),
    InvalidChar(char),
    EmptySegment,
}

impl fmt::Display for KindViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "kind is empty"),
            Self::InvalidStart(c) => write!(f, "kind cannot start with {c:?}"),
            Self::InvalidChar(c) => write!(f, "kind contains {c:?}"),
            Self::EmptySegment => write!(f, "kind contains an empty dotted segment"),
        }
    }
}

/// A validated widget style family name such as `button` or `nvl_button`.
///
/// Kinds are identifiers: an ASCII letter or underscore followed by ASCII
/// alphanumerics and underscores, optionally joined into dotted segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kind(String);

impl Kind {
    pub fn parse(raw: &str) -> Result<Self, KindViolation> {
        validate(raw)?;
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derived variable name, e.g. `nvl_button` + `_borders`.
    pub fn var(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.0)
    }

    pub fn is(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Kind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate(raw: &str) -> Result<(), KindViolation> {
    if raw.is_empty() {
        return Err(KindViolation::Empty);
    }

    for segment in raw.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(KindViolation::EmptySegment);
        };
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(KindViolation::InvalidStart(first));
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(KindViolation::InvalidChar(bad));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_and_dotted_identifiers() {
        for raw in ["button", "nvl_button", "_private", "gui.choice_button", "b2"] {
            let kind = Kind::parse(raw).expect("identifier should parse");
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn parse_rejects_empty_kind() {
        assert_eq!(Kind::parse(""), Err(KindViolation::Empty));
    }

    #[test]
    fn parse_rejects_malformed_kinds() {
        assert_eq!(Kind::parse("2button"), Err(KindViolation::InvalidStart('2')));
        assert_eq!(Kind::parse("nvl-button"), Err(KindViolation::InvalidChar('-')));
        assert_eq!(Kind::parse("nvl button"), Err(KindViolation::InvalidChar(' ')));
        assert_eq!(Kind::parse("gui..button"), Err(KindViolation::EmptySegment));
        assert_eq!(Kind::parse("button."), Err(KindViolation::EmptySegment));
    }

    #[test]
    fn var_appends_suffix_verbatim() {
        let kind = Kind::parse("nvl_button").expect("valid kind");
        assert_eq!(kind.var("_borders"), "nvl_button_borders");
        assert_eq!(kind.var("_text_idle_color"), "nvl_button_text_idle_color");
    }
}
