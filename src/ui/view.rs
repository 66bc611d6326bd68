//! Pure view composition: `(FetchStatus, ExpansionState) -> View`.
//!
//! Nothing here touches the terminal. [`crate::ui::render`] draws the result.

use chrono::{DateTime, Utc};

use crate::models::{Badge, FactCheckRecord, RecordId, Verdict};
use crate::pipeline::{aggregate, FetchStatus, Stats};
use crate::ui::expansion::ExpansionState;

pub const TITLE: &str = "🔍 لوحة التحقق من الحقائق";
pub const SUBTITLE: &str = "التحقق من صحة المعلومات بالذكاء الاصطناعي";
pub const LOADING_TEXT: &str = "جاري تحميل البيانات...";
pub const RETRY_LABEL: &str = "إعادة المحاولة";
pub const REFRESH_LABEL: &str = "🔄 تحديث البيانات";
pub const TOTAL_LABEL: &str = "إجمالي الاستعلامات";
pub const DETAIL_HEADING: &str = "📝 التحليل التفصيلي:";
pub const SHOW_DETAILS: &str = "▼ عرض التفاصيل";
pub const HIDE_DETAILS: &str = "▲ إخفاء";
pub const COLUMNS: [&str; 4] = ["#", "الاستعلام", "الحالة", "الإجراءات"];

pub fn error_text(message: &str) -> String {
    format!("حدث خطأ: {message}")
}

pub fn warning_text(message: &str) -> String {
    format!("⚠️ تم تحميل البيانات التجريبية - {message}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Loading,
    /// Fetch failed and there is nothing to show.
    Error { message: String },
    Content(ContentView),
}

impl View {
    /// Whether this view offers the retry/refresh action.
    pub fn offers_refresh(&self) -> bool {
        !matches!(self, View::Loading)
    }

    pub fn rows(&self) -> &[RowView] {
        match self {
            View::Content(content) => &content.rows,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentView {
    /// Set when the rows are stale data shown under a failed refresh.
    pub warning: Option<String>,
    pub stats: Stats,
    pub rows: Vec<RowView>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// 1-based position in the current result set.
    pub index: usize,
    pub id: RecordId,
    pub query_preview: String,
    pub label: String,
    pub verdict: Option<Verdict>,
    pub badge: Badge,
    pub expanded: bool,
    /// Full explanation, present only on the expanded row.
    pub detail: Option<String>,
}

impl RowView {
    fn new(position: usize, record: &FactCheckRecord, expanded: Option<&RecordId>) -> Self {
        let is_expanded = expanded == Some(&record.id);
        Self {
            index: position + 1,
            id: record.id.clone(),
            query_preview: record.query_preview.clone(),
            label: record.verdict.clone(),
            verdict: record.verdict(),
            badge: record.badge(),
            expanded: is_expanded,
            detail: is_expanded.then(|| record.explanation.clone()),
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            HIDE_DETAILS
        } else {
            SHOW_DETAILS
        }
    }
}

pub fn compose(status: &FetchStatus, expansion: &ExpansionState) -> View {
    let (set, warning) = match status {
        FetchStatus::Loading => return View::Loading,
        FetchStatus::Failed { message, stale } if stale.is_empty() => {
            return View::Error {
                message: message.clone(),
            }
        }
        FetchStatus::Failed { message, stale } => (stale, Some(warning_text(message))),
        FetchStatus::Ready(set) => (set, None),
    };

    let expanded = expansion.expanded_id();
    View::Content(ContentView {
        warning,
        stats: aggregate(set.iter()),
        rows: set
            .iter()
            .enumerate()
            .map(|(position, record)| RowView::new(position, record, expanded))
            .collect(),
        updated_at: set.fetched_at(),
    })
}
