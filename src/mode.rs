/// How many pages a carousel has, and therefore how many slots it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    /// Exactly one page; navigation is disabled.
    Single,
    /// Two or more pages that wrap in both directions.
    Cyclic,
}

impl CarouselMode {
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        if len > 1 { Self::Cyclic } else { Self::Single }
    }

    /// Number of cached items (and reusable view slots).
    #[must_use]
    pub const fn window_size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Cyclic => 3,
        }
    }

    #[must_use]
    pub const fn has_multiple_pages(self) -> bool {
        matches!(self, Self::Cyclic)
    }
}
