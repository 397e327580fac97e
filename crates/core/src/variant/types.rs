use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde::{deserialize_loose_number, deserialize_loose_string};

/// Anything that can take part in weighted variant selection.
pub trait Weighted {
    /// The variant identifier returned by selection.
    fn id(&self) -> &str;

    /// Relative weight. Weights are normalized against the list total.
    fn weight(&self) -> f64;
}

/// A bare `{ id, weight }` selection candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedVariant {
    pub id: String,
    pub weight: f64,
}

impl WeightedVariant {
    /// Creates a new candidate.
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

impl Weighted for WeightedVariant {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

/// One variant of a multivariate page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageVariant {
    #[serde(deserialize_with = "deserialize_loose_string")]
    pub id: String,
    /// A missing weight reads as `NaN`, like any other non-numeric weight.
    #[serde(default = "missing_weight", deserialize_with = "deserialize_loose_number")]
    pub weight: f64,
    #[serde(default)]
    pub sections: Vec<Value>,
}

impl PageVariant {
    /// Creates a page variant with the given sections.
    pub fn new(id: impl Into<String>, weight: f64, sections: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            weight,
            sections,
        }
    }
}

impl Weighted for PageVariant {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

fn missing_weight() -> f64 {
    f64::NAN
}

/// Page content split into weighted variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub multivariate: bool,
    #[serde(default)]
    pub variants: Vec<PageVariant>,
}

impl PageContent {
    /// Creates multivariate page content from its variants.
    pub fn new(variants: Vec<PageVariant>) -> Self {
        Self {
            multivariate: true,
            variants,
        }
    }
}

/// The single variant chosen for a visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub sections: Vec<Value>,
    pub variant_id: String,
}
