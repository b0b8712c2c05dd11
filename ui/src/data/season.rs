/// Season selector for the district analysis.
///
/// Season labels in the source data carry trailing padding and occasional
/// variants, so matching is by substring. `WholeYear` is the default and
/// deliberately covers only the two main cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonFilter {
    #[default]
    WholeYear,
    Kharif,
    Rabi,
    Summer,
    Autumn,
    Winter,
}

impl SeasonFilter {
    pub const ALL: [Self; 6] = [
        Self::WholeYear,
        Self::Kharif,
        Self::Rabi,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WholeYear => "Whole Year",
            Self::Kharif => "Kharif",
            Self::Rabi => "Rabi",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|season| season.label() == label)
    }

    /// Wording used in chart titles.
    pub fn title_text(self) -> &'static str {
        match self {
            Self::WholeYear => "Annual",
            other => other.label(),
        }
    }

    pub fn matches(self, season: &str) -> bool {
        match self {
            Self::WholeYear => season.contains("Kharif") || season.contains("Rabi"),
            other => season.contains(other.label()),
        }
    }
}
