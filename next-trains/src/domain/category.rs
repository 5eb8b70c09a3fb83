//! Service category (train type) labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The service type printed on the departure board.
///
/// Display-only: the category never changes how a departure is ranked.
/// Labels that aren't recognised are kept verbatim rather than rejected,
/// since a timetable may name a new limited express before this list does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// 快速
    Rapid,
    /// 中央特快
    ChuoSpecialRapid,
    /// 通勤特別快速
    CommuterSpecialRapid,
    /// 普通
    Local,
    /// かいじ
    Kaiji,
    /// あずさ
    Azusa,
    /// 富士回遊
    FujiExcursion,
    /// むさしの号
    Musashino,
    /// Any other label.
    Other(String),
}

impl Category {
    /// Map a timetable label to a category.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "快速" => Category::Rapid,
            "中央特快" => Category::ChuoSpecialRapid,
            "通勤特別快速" => Category::CommuterSpecialRapid,
            "普通" => Category::Local,
            "かいじ" => Category::Kaiji,
            "あずさ" => Category::Azusa,
            "富士回遊" => Category::FujiExcursion,
            "むさしの号" => Category::Musashino,
            other => Category::Other(other.to_string()),
        }
    }

    /// Returns the label as printed in the timetable.
    pub fn label(&self) -> &str {
        match self {
            Category::Rapid => "快速",
            Category::ChuoSpecialRapid => "中央特快",
            Category::CommuterSpecialRapid => "通勤特別快速",
            Category::Local => "普通",
            Category::Kaiji => "かいじ",
            Category::Azusa => "あずさ",
            Category::FujiExcursion => "富士回遊",
            Category::Musashino => "むさしの号",
            Category::Other(label) => label,
        }
    }

    /// Whether this is a limited express (reserved-seat) service.
    pub fn is_limited_express(&self) -> bool {
        matches!(
            self,
            Category::Kaiji | Category::Azusa | Category::FujiExcursion
        )
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
