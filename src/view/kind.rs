use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The requested view identifier names none of the five views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view identifier '{0}'")]
pub struct UnknownViewError(pub String);

// ---------------------------------------------------------------------------
// ViewKind – the five dashboard tabs
// ---------------------------------------------------------------------------

/// One of the five named presentations of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Overview,
    IncomeVsPrice,
    CostOfLiving,
    TopAffordable,
    LeastAffordable,
}

impl ViewKind {
    /// All views in tab order.
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Overview,
        ViewKind::IncomeVsPrice,
        ViewKind::CostOfLiving,
        ViewKind::TopAffordable,
        ViewKind::LeastAffordable,
    ];

    /// Stable identifier accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            ViewKind::Overview => "overview",
            ViewKind::IncomeVsPrice => "income_vs_price",
            ViewKind::CostOfLiving => "cost_of_living",
            ViewKind::TopAffordable => "top_affordable",
            ViewKind::LeastAffordable => "least_affordable",
        }
    }

    /// Legacy tab value (`tab1` … `tab5`), also accepted by [`FromStr`].
    pub fn tab_value(self) -> &'static str {
        match self {
            ViewKind::Overview => "tab1",
            ViewKind::IncomeVsPrice => "tab2",
            ViewKind::CostOfLiving => "tab3",
            ViewKind::TopAffordable => "tab4",
            ViewKind::LeastAffordable => "tab5",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ViewKind::Overview => "Affordability Index Overview",
            ViewKind::IncomeVsPrice => "Income vs Home Prices",
            ViewKind::CostOfLiving => "Cost of Living Analysis",
            ViewKind::TopAffordable => "Top Affordable Cities",
            ViewKind::LeastAffordable => "Least Affordable Cities",
        }
    }

    /// Heading shown above the chart.
    pub fn heading(self) -> &'static str {
        match self {
            ViewKind::Overview => "Affordability Index Across Cities",
            ViewKind::IncomeVsPrice => "Median Income vs Median Home Price",
            ViewKind::CostOfLiving => "Cost of Living Analysis",
            ViewKind::TopAffordable => "Top Affordable Cities",
            ViewKind::LeastAffordable => "Least Affordable Cities",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Overview => "Affordability Index Across Major U.S. Cities",
            ViewKind::IncomeVsPrice => "Median Income vs Median Home Price",
            ViewKind::CostOfLiving => "Cost of Living Index by City",
            ViewKind::TopAffordable => "Top 5 Most Affordable Cities",
            ViewKind::LeastAffordable => "Top 5 Least Affordable Cities",
        }
    }
}

impl FromStr for ViewKind {
    type Err = UnknownViewError;

    /// Identifiers match exactly; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|v| v.id() == s || v.tab_value() == s)
            .ok_or_else(|| UnknownViewError(s.to_string()))
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for view in ViewKind::ALL {
            assert_eq!(view.id().parse::<ViewKind>(), Ok(view));
            assert_eq!(view.to_string(), view.id());
        }
    }

    #[test]
    fn test_tab_aliases() {
        assert_eq!("tab1".parse::<ViewKind>(), Ok(ViewKind::Overview));
        assert_eq!("tab4".parse::<ViewKind>(), Ok(ViewKind::TopAffordable));
        assert_eq!("tab5".parse::<ViewKind>(), Ok(ViewKind::LeastAffordable));
    }

    #[test]
    fn test_unknown_identifiers() {
        for bad in ["bogus", "", "Overview", " overview", "tab6", "tab0"] {
            assert_eq!(
                bad.parse::<ViewKind>(),
                Err(UnknownViewError(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_error_message_names_identifier() {
        let err = "bogus".parse::<ViewKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown view identifier 'bogus'");
    }
}
