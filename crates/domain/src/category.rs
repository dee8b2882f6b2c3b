use std::fmt;

/// The fixed set of word families being tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Horatio,
    And,
    Hamlet,
    God,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 4] = [Self::Horatio, Self::And, Self::Hamlet, Self::God];

    /// Canonical word printed next to the count.
    pub const fn word(self) -> &'static str {
        match self {
            Self::Horatio => "horatio",
            Self::And => "and",
            Self::Hamlet => "hamlet",
            Self::God => "god",
        }
    }

    /// Normalized surface forms that belong to this category.
    ///
    /// Possessives lose their apostrophe during normalization, so `Hamlet's`
    /// arrives here as `hamlets`.
    pub const fn surface_forms(self) -> &'static [&'static str] {
        match self {
            Self::Horatio => &["horatio", "horatios"],
            Self::And => &["and"],
            Self::Hamlet => &["hamlet", "hamlets"],
            Self::God => &["god", "gods"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}
