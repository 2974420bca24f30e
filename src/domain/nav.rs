//! NAV history for a mutual fund scheme.

use chrono::NaiveDate;

/// One dated net-asset-value observation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

/// Ordered NAV history for a single scheme.
///
/// Invariant: points are held newest-first, so index 0 is the latest
/// available NAV. The constructor sorts to uphold this regardless of
/// input order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSeries {
    scheme: String,
    points: Vec<NavPoint>,
}

impl NavSeries {
    pub fn new(scheme: impl Into<String>, mut points: Vec<NavPoint>) -> Self {
        points.sort_by(|a, b| b.date.cmp(&a.date));
        NavSeries {
            scheme: scheme.into(),
            points,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent observation, if any.
    pub fn latest(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// (oldest, newest) dates covered by the series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.last(), self.points.first()) {
            (Some(oldest), Some(newest)) => Some((oldest.date, newest.date)),
            _ => None,
        }
    }
}
