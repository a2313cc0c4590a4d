//! Macro chart data shaper
//!
//! Turns the latest nutrition totals into a presentation-ready percentage
//! breakdown for the macro donut chart. With no history, a fixed plausible
//! default split keeps the chart rendered.

use serde::{Deserialize, Serialize};

use crate::models::NutritionDay;

const PROTEIN_COLOR: &str = "#ff6b35";
const CARBS_COLOR: &str = "#4ecdc4";
const FAT_COLOR: &str = "#45b7d1";

/// One slice of the macro breakdown chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSlice {
    pub name: String,
    /// Percentage of the gram total, rounded to the nearest integer
    pub value: u32,
    pub color: String,
}

fn slices(protein: u32, carbs: u32, fat: u32) -> Vec<MacroSlice> {
    vec![
        MacroSlice {
            name: "Protein".to_string(),
            value: protein,
            color: PROTEIN_COLOR.to_string(),
        },
        MacroSlice {
            name: "Carbs".to_string(),
            value: carbs,
            color: CARBS_COLOR.to_string(),
        },
        MacroSlice {
            name: "Fat".to_string(),
            value: fat,
            color: FAT_COLOR.to_string(),
        },
    ]
}

fn default_split() -> Vec<MacroSlice> {
    slices(30, 45, 25)
}

/// Build the macro breakdown from the most recent nutrition day.
///
/// Percentages are of the protein+carbs+fat gram sum, not of calories.
/// Integer rounding may drift the total by one point, which is acceptable
/// for display. An empty history or a zero gram sum returns the fixed
/// default split rather than producing NaN.
pub fn generate_macro_data(nutrition_days: &[NutritionDay]) -> Vec<MacroSlice> {
    let Some(latest) = nutrition_days.last() else {
        return default_split();
    };

    let total = latest.total_protein_g + latest.total_carbs_g + latest.total_fat_g;
    if total <= f64::EPSILON {
        return default_split();
    }

    slices(
        (latest.total_protein_g / total * 100.0).round() as u32,
        (latest.total_carbs_g / total * 100.0).round() as u32,
        (latest.total_fat_g / total * 100.0).round() as u32,
    )
}
