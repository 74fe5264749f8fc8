use serde::{Deserialize, Serialize};

/// Condition under which a reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    Fasting,
    AfterMeal,
    Random,
}

impl Context {
    pub const ALL: [Context; 3] = [Context::Fasting, Context::AfterMeal, Context::Random];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Hypoglycemia,
    Normal,
    Prediabetes,
    Diabetes,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hypoglycemia,
        Category::Normal,
        Category::Prediabetes,
        Category::Diabetes,
    ];
}

const LOW_THRESHOLD: f64 = 70.0;

/// Maps a glucose value (mg/dL) and its measurement context to a category.
///
/// Fasting and non-fasting readings use different upper thresholds. Values
/// at or below zero are rejected before they get here.
pub fn classify(value: f64, context: Context) -> Category {
    if value < LOW_THRESHOLD {
        return Category::Hypoglycemia;
    }

    let (prediabetes_from, diabetes_from) = match context {
        Context::Fasting => (100.0, 126.0),
        Context::AfterMeal | Context::Random => (140.0, 200.0),
    };

    if value < prediabetes_from {
        Category::Normal
    } else if value < diabetes_from {
        Category::Prediabetes
    } else {
        Category::Diabetes
    }
}

/// Half-open range `[min, max)`; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: Option<f64>,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.is_none_or(|max| value < max)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn category_info(category: Category) -> CategoryInfo {
    let (label, description) = match category {
        Category::Hypoglycemia => (
            "Hypoglycemia",
            "Blood sugar is dangerously low. Please consume fast-acting carbs and consult a doctor.",
        ),
        Category::Normal => (
            "Normal",
            "Your blood sugar is within the healthy target range.",
        ),
        Category::Prediabetes => (
            "Prediabetes",
            "Values indicate a risk of developing Type 2 diabetes. Monitor closely.",
        ),
        Category::Diabetes => (
            "Diabetes Range",
            "Values are consistently high. Consultation with a healthcare provider is recommended.",
        ),
    };

    CategoryInfo {
        category,
        label,
        description,
    }
}

/// The value range a category covers for a given context. Together the four
/// ranges of one context partition `[0, ∞)`.
pub fn category_range(category: Category, context: Context) -> Range {
    let (prediabetes_from, diabetes_from) = match context {
        Context::Fasting => (100.0, 126.0),
        Context::AfterMeal | Context::Random => (140.0, 200.0),
    };

    match category {
        Category::Hypoglycemia => Range {
            min: 0.0,
            max: Some(LOW_THRESHOLD),
        },
        Category::Normal => Range {
            min: LOW_THRESHOLD,
            max: Some(prediabetes_from),
        },
        Category::Prediabetes => Range {
            min: prediabetes_from,
            max: Some(diabetes_from),
        },
        Category::Diabetes => Range {
            min: diabetes_from,
            max: None,
        },
    }
}

#[derive(Debug, Serialize)]
pub struct ContextRanges {
    pub context: Context,
    pub ranges: Vec<(Category, Range)>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCatalog {
    pub categories: Vec<CategoryInfo>,
    pub contexts: Vec<ContextRanges>,
}

pub fn catalog() -> CategoryCatalog {
    CategoryCatalog {
        categories: Category::ALL.into_iter().map(category_info).collect(),
        contexts: Context::ALL
            .into_iter()
            .map(|context| ContextRanges {
                context,
                ranges: Category::ALL
                    .into_iter()
                    .map(|category| (category, category_range(category, context)))
                    .collect(),
            })
            .collect(),
    }
}
