use std::fmt;

/// Clinical category group of a canonical item
///
/// Declaration order is the dictionary iteration order. When an ambiguous
/// label or line could resolve to items from several categories, the item in
/// the earlier category wins, so reordering these variants changes results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Proteins,
    Renal,
    Hepatic,
    Electrolytes,
    Hematology,
    Differential,
    Inflammation,
    Coagulation,
    Glucose,
    Lipids,
    Cardiac,
    Thyroid,
    TumorMarkers,
    Misc,
    Csf,
    Autoantibodies,
    Cytokines,
    NeuroMarkers,
    Muscle,
    LactatePyruvate,
    BloodGas,
    Urinalysis,
}

impl Category {
    /// All categories in precedence order
    pub const ORDER: [Category; 22] = [
        Category::Proteins,
        Category::Renal,
        Category::Hepatic,
        Category::Electrolytes,
        Category::Hematology,
        Category::Differential,
        Category::Inflammation,
        Category::Coagulation,
        Category::Glucose,
        Category::Lipids,
        Category::Cardiac,
        Category::Thyroid,
        Category::TumorMarkers,
        Category::Misc,
        Category::Csf,
        Category::Autoantibodies,
        Category::Cytokines,
        Category::NeuroMarkers,
        Category::Muscle,
        Category::LactatePyruvate,
        Category::BloodGas,
        Category::Urinalysis,
    ];

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Category::Proteins => "proteins",
            Category::Renal => "renal",
            Category::Hepatic => "hepatic",
            Category::Electrolytes => "electrolytes",
            Category::Hematology => "hematology",
            Category::Differential => "differential",
            Category::Inflammation => "inflammation",
            Category::Coagulation => "coagulation",
            Category::Glucose => "glucose",
            Category::Lipids => "lipids",
            Category::Cardiac => "cardiac",
            Category::Thyroid => "thyroid",
            Category::TumorMarkers => "tumor markers",
            Category::Misc => "misc",
            Category::Csf => "csf",
            Category::Autoantibodies => "autoantibodies",
            Category::Cytokines => "cytokines",
            Category::NeuroMarkers => "neuro markers",
            Category::Muscle => "muscle",
            Category::LactatePyruvate => "lactate/pyruvate",
            Category::BloodGas => "blood gas",
            Category::Urinalysis => "urinalysis",
        }
    }

    /// Position in the precedence order (0 = highest precedence)
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
