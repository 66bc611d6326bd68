/// The three verdicts the fact source is expected to emit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verdict {
    True,
    Uncertain,
    False,
}

impl Verdict {
    /// Display order used by the stats row and the aggregator.
    pub const ALL: [Verdict; 3] = [Verdict::True, Verdict::Uncertain, Verdict::False];

    /// Exact, case-sensitive match against the wire label.
    pub fn from_label(label: &str) -> Option<Verdict> {
        match label {
            "حقيقي" => Some(Verdict::True),
            "غير مؤكد" => Some(Verdict::Uncertain),
            "زائف" => Some(Verdict::False),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::True => "حقيقي",
            Verdict::Uncertain => "غير مؤكد",
            Verdict::False => "زائف",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            Verdict::True => Badge {
                class: "case-true",
                icon: "✓",
            },
            Verdict::Uncertain => Badge {
                class: "case-uncertain",
                icon: "?",
            },
            Verdict::False => Badge {
                class: "case-false",
                icon: "✗",
            },
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Verdict::True => 0,
            Verdict::Uncertain => 1,
            Verdict::False => 2,
        }
    }
}

/// Style class and icon pair for a verdict badge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct Badge {
    pub class: &'static str,
    pub icon: &'static str,
}

impl Badge {
    pub const NEUTRAL: Badge = Badge { class: "", icon: "" };

    pub fn is_neutral(&self) -> bool {
        self.class.is_empty() && self.icon.is_empty()
    }
}

/// Map any label to its badge. Unrecognized labels get [`Badge::NEUTRAL`].
pub fn classify(label: &str) -> Badge {
    match Verdict::from_label(label) {
        Some(verdict) => verdict.badge(),
        None => Badge::NEUTRAL,
    }
}
