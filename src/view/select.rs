use std::cmp::Ordering;

use super::descriptor::{Axis, ChartKind, ColorBinding, Field, RenderDescriptor};
use super::kind::{UnknownViewError, ViewKind};
use crate::color::ColorScale;
use crate::data::model::{CityRecord, Dataset};

/// Number of cities shown in the ranked views.
pub const RANKING_LEN: usize = 5;

const OVERVIEW_BAR_COLOR: &str = "#1f77b4";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Resolve `view_id` and build the descriptor for that view.
///
/// Pure: the same dataset and identifier always yield an equal descriptor.
pub fn select_view(dataset: &Dataset, view_id: &str) -> Result<RenderDescriptor, UnknownViewError> {
    let view: ViewKind = view_id.parse()?;
    log::debug!("selecting view {view} over {} rows", dataset.len());
    Ok(view.describe(dataset))
}

impl ViewKind {
    /// Build the descriptor for this view.
    pub fn describe(self, dataset: &Dataset) -> RenderDescriptor {
        let all_rows = || dataset.records().to_vec();

        let (chart, rows, x, y, size, color, hover) = match self {
            ViewKind::Overview => (
                ChartKind::Bar,
                all_rows(),
                Field::City,
                Field::AffordabilityIndex,
                None,
                ColorBinding::Fixed {
                    hex: OVERVIEW_BAR_COLOR,
                },
                None,
            ),
            ViewKind::IncomeVsPrice => (
                ChartKind::Scatter,
                all_rows(),
                Field::MedianHomePrice,
                Field::MedianIncome,
                Some(Field::AffordabilityIndex),
                ColorBinding::Categorical { field: Field::City },
                Some(Field::City),
            ),
            ViewKind::CostOfLiving => (
                ChartKind::Bar,
                all_rows(),
                Field::City,
                Field::CostOfLivingIndex,
                None,
                ColorBinding::Continuous {
                    field: Field::CostOfLivingIndex,
                    scale: ColorScale::Magma,
                },
                None,
            ),
            ViewKind::TopAffordable => (
                ChartKind::Bar,
                ranked(dataset, Rank::MostAffordable, RANKING_LEN),
                Field::City,
                Field::AffordabilityIndex,
                None,
                ColorBinding::Continuous {
                    field: Field::AffordabilityIndex,
                    scale: ColorScale::Tealgrn,
                },
                None,
            ),
            ViewKind::LeastAffordable => (
                ChartKind::Bar,
                ranked(dataset, Rank::LeastAffordable, RANKING_LEN),
                Field::City,
                Field::AffordabilityIndex,
                None,
                ColorBinding::Continuous {
                    field: Field::AffordabilityIndex,
                    scale: ColorScale::Sunset,
                },
                None,
            ),
        };

        RenderDescriptor {
            view: self,
            heading: self.heading(),
            title: self.title(),
            chart,
            x: Axis::of(x),
            y: Axis::of(y),
            size,
            color,
            hover,
            rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rank {
    /// Highest affordability index first.
    MostAffordable,
    /// Lowest affordability index first.
    LeastAffordable,
}

/// The first `len` records ordered by affordability index.
///
/// Ties keep their source order in both directions.
pub(crate) fn ranked(dataset: &Dataset, rank: Rank, len: usize) -> Vec<CityRecord> {
    let mut rows: Vec<&CityRecord> = dataset.records().iter().collect();
    // `sort_by` is stable.
    rows.sort_by(|a, b| compare(rank, a, b));
    rows.into_iter().take(len).cloned().collect()
}

fn compare(rank: Rank, a: &CityRecord, b: &CityRecord) -> Ordering {
    let ord = a.affordability_index.total_cmp(&b.affordability_index);
    match rank {
        Rank::MostAffordable => ord.reverse(),
        Rank::LeastAffordable => ord,
    }
}
