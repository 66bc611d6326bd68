use crate::models::{FactCheckRecord, Verdict};

/// Summary counts shown above the table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub total: usize,
    by_category: [usize; 3],
}

impl Stats {
    pub fn count(&self, verdict: Verdict) -> usize {
        self.by_category[verdict.index()]
    }

    /// The three `(verdict, count)` pairs in display order.
    pub fn by_category(&self) -> [(Verdict, usize); 3] {
        Verdict::ALL.map(|v| (v, self.count(v)))
    }

    /// Records whose label is one of the recognized verdicts.
    pub fn categorized(&self) -> usize {
        self.by_category.iter().sum()
    }
}

/// Count records per verdict.
///
/// Records with an unrecognized label count toward `total` but toward no
/// category, so `categorized() <= total`.
pub fn aggregate<'a, I>(records: I) -> Stats
where
    I: IntoIterator<Item = &'a FactCheckRecord>,
{
    let mut stats = Stats::default();
    for record in records {
        stats.total += 1;
        if let Some(verdict) = record.verdict() {
            stats.by_category[verdict.index()] += 1;
        }
    }
    stats
}
