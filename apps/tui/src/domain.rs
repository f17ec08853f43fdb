use chrono::Datelike;

/// Number of fiscal years offered by the search form.
pub const YEAR_CHOICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Profitability,
    Stability,
    Growth,
    Activity,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Profitability,
        Self::Stability,
        Self::Growth,
        Self::Activity,
    ];

    /// Label used by the backend in `idx_cl_nm`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profitability => "수익성",
            Self::Stability => "안정성",
            Self::Growth => "성장성",
            Self::Activity => "활동성",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Profitability),
            1 => Some(Self::Stability),
            2 => Some(Self::Growth),
            3 => Some(Self::Activity),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Profitability => 0,
            Self::Stability => 1,
            Self::Growth => 2,
            Self::Activity => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "수익성" => Some(Self::Profitability),
            "안정성" => Some(Self::Stability),
            "성장성" => Some(Self::Growth),
            "활동성" => Some(Self::Activity),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Profitability => "Profitability",
            Self::Stability => "Stability",
            Self::Growth => "Growth",
            Self::Activity => "Activity",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Profitability => "💰",
            Self::Stability => "🛡️",
            Self::Growth => "🚀",
            Self::Activity => "⚡",
        }
    }

    /// Bar colour for the category chart.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Profitability => (0xFF, 0x6B, 0x6B),
            Self::Stability => (0x4E, 0xCD, 0xC4),
            Self::Growth => (0x45, 0xB7, 0xD1),
            Self::Activity => (0x96, 0xCE, 0xB4),
        }
    }

    /// Threshold rules ordered from the highest threshold to the lowest.
    pub fn rules(self) -> &'static [TierRule; 4] {
        match self {
            Self::Profitability => &PROFITABILITY_RULES,
            Self::Stability => &STABILITY_RULES,
            Self::Growth => &GROWTH_RULES,
            Self::Activity => &ACTIVITY_RULES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl Tier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Excellent => (0x22, 0xc5, 0x5e),
            Self::Good => (0x3b, 0x82, 0xf6),
            Self::Average => (0xf5, 0x9e, 0x0b),
            Self::Poor => (0xef, 0x44, 0x44),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRule {
    pub threshold: f64,
    pub tier: Tier,
    pub label: &'static str,
}

const fn rule(threshold: f64, tier: Tier, label: &'static str) -> TierRule {
    TierRule {
        threshold,
        tier,
        label,
    }
}

const PROFITABILITY_RULES: [TierRule; 4] = [
    rule(15.0, Tier::Excellent, "💰 매우 우수"),
    rule(10.0, Tier::Good, "👍 양호"),
    rule(5.0, Tier::Average, "⚖️ 보통"),
    rule(0.0, Tier::Poor, "⚠️ 개선필요"),
];

const STABILITY_RULES: [TierRule; 4] = [
    rule(200.0, Tier::Excellent, "🛡️ 매우 안정"),
    rule(150.0, Tier::Good, "✅ 안정"),
    rule(100.0, Tier::Average, "⚖️ 보통"),
    rule(0.0, Tier::Poor, "⚠️ 불안정"),
];

const GROWTH_RULES: [TierRule; 4] = [
    rule(20.0, Tier::Excellent, "🚀 고성장"),
    rule(10.0, Tier::Good, "📈 성장"),
    rule(0.0, Tier::Average, "⚖️ 보통"),
    rule(-10.0, Tier::Poor, "📉 감소"),
];

const ACTIVITY_RULES: [TierRule; 4] = [
    rule(5.0, Tier::Excellent, "⚡ 매우 활발"),
    rule(3.0, Tier::Good, "🔄 활발"),
    rule(1.0, Tier::Average, "⚖️ 보통"),
    rule(0.0, Tier::Poor, "🐌 저조"),
];

/// Qualitative reading of one indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    pub tier: Tier,
    pub label: &'static str,
}

/// Classifies `value` against the category's rules.
///
/// The first rule whose threshold the value meets wins; anything below the
/// lowest threshold (or NaN) lands in the lowest tier.
pub fn classify(category: Category, value: f64) -> Interpretation {
    let rules = category.rules();
    let matched = rules
        .iter()
        .find(|rule| value >= rule.threshold)
        .unwrap_or(&rules[rules.len() - 1]);

    Interpretation {
        tier: matched.tier,
        label: matched.label,
    }
}

/// Classifies by raw backend label, using the profitability rules for
/// labels outside the four known categories.
pub fn classify_label(category_label: &str, value: f64) -> Interpretation {
    let category = Category::parse(category_label).unwrap_or(Category::Profitability);
    classify(category, value)
}

/// Maps a backend grade such as "A+ (매우우수)" onto a colour tier.
pub fn grade_tier(grade: &str) -> Tier {
    if grade.contains('A') {
        Tier::Excellent
    } else if grade.contains('B') {
        Tier::Good
    } else if grade.contains('C') {
        Tier::Average
    } else {
        Tier::Poor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportCode {
    #[default]
    ThirdQuarter,
    HalfYear,
    Annual,
    FirstQuarter,
}

impl ReportCode {
    pub const ALL: [Self; 4] = [
        Self::ThirdQuarter,
        Self::HalfYear,
        Self::Annual,
        Self::FirstQuarter,
    ];

    /// Wire value sent as `reprt_code`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThirdQuarter => "11014",
            Self::HalfYear => "11013",
            Self::Annual => "11012",
            Self::FirstQuarter => "11011",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ThirdQuarter),
            1 => Some(Self::HalfYear),
            2 => Some(Self::Annual),
            3 => Some(Self::FirstQuarter),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::ThirdQuarter => 0,
            Self::HalfYear => 1,
            Self::Annual => 2,
            Self::FirstQuarter => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "11014" | "q3" => Some(Self::ThirdQuarter),
            "11013" | "half" | "h1" => Some(Self::HalfYear),
            "11012" | "annual" => Some(Self::Annual),
            "11011" | "q1" => Some(Self::FirstQuarter),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ThirdQuarter => "3분기보고서 (Q3)",
            Self::HalfYear => "반기보고서 (Half-year)",
            Self::Annual => "사업보고서 (Annual)",
            Self::FirstQuarter => "1분기보고서 (Q1)",
        }
    }
}

/// Most recent fiscal year with complete filings.
pub fn default_latest_year() -> i32 {
    chrono::Local::now().year() - 1
}

/// Year choices for the form, most recent first.
pub fn fiscal_years(latest: i32) -> Vec<i32> {
    (0..YEAR_CHOICES)
        .map(|offset| latest - i32::try_from(offset).unwrap_or(0))
        .collect()
}
