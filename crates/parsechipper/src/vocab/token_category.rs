//! # Token Categories

/// The structural category of a vocabulary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TokenCategory {
    /// Atomic tokens; those without a segment separator.
    #[strum(to_string = "full")]
    Full,

    /// Head segments of composite tokens.
    #[strum(to_string = "head")]
    Head,

    /// Tail segments of composite tokens.
    #[strum(to_string = "tail")]
    Tail,

    /// Upper-case tokens without a right marker.
    #[strum(to_string = "nonterm_left")]
    NontermLeft,

    /// Upper-case tokens carrying a right marker.
    #[strum(to_string = "nonterm_right")]
    NontermRight,
}

impl TokenCategory {
    /// The id segment of this category, if it is assigned ids.
    pub fn id_segment(&self) -> Option<IdSegment> {
        match self {
            Self::Full => Some(IdSegment::Full),
            Self::Head => Some(IdSegment::Head),
            Self::Tail => Some(IdSegment::Tail),
            Self::NontermLeft | Self::NontermRight => None,
        }
    }
}

/// The id-assigning partitions of a vocabulary, in id order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum IdSegment {
    /// `[0, n_full)`.
    Full,

    /// `[n_full, n_full + n_head)`.
    Head,

    /// `[n_full + n_head, oov_id)`.
    Tail,
}

impl From<IdSegment> for TokenCategory {
    fn from(segment: IdSegment) -> Self {
        match segment {
            IdSegment::Full => Self::Full,
            IdSegment::Head => Self::Head,
            IdSegment::Tail => Self::Tail,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_segment_category_mapping() {
        for segment in IdSegment::iter() {
            assert_eq!(TokenCategory::from(segment).id_segment(), Some(segment));
        }
        assert_eq!(TokenCategory::NontermLeft.id_segment(), None);
        assert_eq!(TokenCategory::NontermRight.id_segment(), None);
    }

    #[test]
    fn test_segment_names() {
        assert_eq!("head".parse::<IdSegment>().unwrap(), IdSegment::Head);
        assert_eq!(IdSegment::Tail.to_string(), "tail");
        assert_eq!(TokenCategory::NontermRight.to_string(), "nonterm_right");

        let order: Vec<IdSegment> = IdSegment::iter().collect();
        assert_eq!(order, vec![IdSegment::Full, IdSegment::Head, IdSegment::Tail]);
    }
}
