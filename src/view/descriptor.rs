use serde::Serialize;

use super::kind::ViewKind;
use crate::color::{CategoryColors, ColorScale, Rgb, parse_hex};
use crate::data::model::CityRecord;

// ---------------------------------------------------------------------------
// Field – a column a channel can be bound to
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    City,
    MedianIncome,
    MedianHomePrice,
    CostOfLivingIndex,
    AffordabilityIndex,
}

/// A single cell, borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Text form used for category labels.
    pub fn to_label(self) -> String {
        match self {
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Number(v) => format!("{v}"),
        }
    }
}

impl Field {
    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Field::City => "City",
            Field::MedianIncome => "Median Income (USD)",
            Field::MedianHomePrice => "Median Home Price (USD)",
            Field::CostOfLivingIndex => "Cost of Living Index",
            Field::AffordabilityIndex => "Affordability Index",
        }
    }

    pub fn value(self, rec: &CityRecord) -> FieldValue<'_> {
        match self {
            Field::City => FieldValue::Text(&rec.city),
            Field::MedianIncome => FieldValue::Number(rec.median_income),
            Field::MedianHomePrice => FieldValue::Number(rec.median_home_price),
            Field::CostOfLivingIndex => FieldValue::Number(rec.cost_of_living_index),
            Field::AffordabilityIndex => FieldValue::Number(rec.affordability_index),
        }
    }

    /// The numeric value, or `None` for text fields.
    pub fn number(self, rec: &CityRecord) -> Option<f64> {
        match self.value(rec) {
            FieldValue::Number(v) => Some(v),
            FieldValue::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Channel bindings
// ---------------------------------------------------------------------------

/// An axis bound to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub field: Field,
    pub label: &'static str,
}

impl Axis {
    pub fn of(field: Field) -> Self {
        Axis {
            field,
            label: field.label(),
        }
    }
}

/// How marks are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorBinding {
    /// Every mark gets the same `#rrggbb` colour.
    Fixed { hex: &'static str },
    /// One distinct colour per distinct value of `field`.
    Categorical { field: Field },
    /// Colour taken from `scale`, spanning the min..max of `field`.
    Continuous { field: Field, scale: ColorScale },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Scatter,
}

// ---------------------------------------------------------------------------
// RenderDescriptor
// ---------------------------------------------------------------------------

/// Everything a presentation layer needs to draw one view: chart kind,
/// the rows to plot, and which field feeds each channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    pub view: ViewKind,
    pub heading: &'static str,
    pub title: &'static str,
    pub chart: ChartKind,
    pub x: Axis,
    pub y: Axis,
    /// Marker size channel (scatter only).
    pub size: Option<Field>,
    pub color: ColorBinding,
    /// Field shown as the hover name.
    pub hover: Option<Field>,
    pub rows: Vec<CityRecord>,
}

impl RenderDescriptor {
    /// Numeric values of `field` for every row, in row order.
    /// Empty for text fields.
    pub fn numbers(&self, field: Field) -> Vec<f64> {
        self.rows.iter().filter_map(|r| field.number(r)).collect()
    }

    /// City names in row order.
    pub fn cities(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.city.as_str()).collect()
    }

    /// `(min, max)` of a numeric field over the rows, if any.
    pub fn range(&self, field: Field) -> Option<(f64, f64)> {
        self.numbers(field).into_iter().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Labels of the x-axis field, one per row.
    pub fn x_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| self.x.field.value(r).to_label())
            .collect()
    }

    /// The colour of each row's mark under the colour binding.
    pub fn mark_colors(&self) -> Vec<Rgb> {
        match self.color {
            ColorBinding::Fixed { hex } => {
                let color = parse_hex(hex).unwrap_or(Rgb::new(128, 128, 128));
                vec![color; self.rows.len()]
            }
            ColorBinding::Categorical { field } => {
                let labels: Vec<String> =
                    self.rows.iter().map(|r| field.value(r).to_label()).collect();
                let colors = CategoryColors::new(labels.iter().map(String::as_str));
                labels.iter().map(|l| colors.color_for(l)).collect()
            }
            ColorBinding::Continuous { field, scale } => {
                let (lo, hi) = self.range(field).unwrap_or((0.0, 0.0));
                self.rows
                    .iter()
                    .map(|r| scale.map(field.number(r).unwrap_or(f64::NAN), lo, hi))
                    .collect()
            }
        }
    }
}
