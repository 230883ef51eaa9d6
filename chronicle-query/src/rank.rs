//! Grouping and ranking of period hits ahead of formatting.
//!
//! Retrieval returns flat period rows; one ruler with three titles
//! arrives as three or more rows. This stage folds them back into one
//! group per ruler, with that ruler's titles ordered by display
//! priority so the best title leads the subtitle and picks the icon.

use std::collections::HashMap;

use chronicle_core::models::{Period, PeriodHit, Ruler, Title};
use chronicle_core::rank::title_rank;

/// One title a ruler held, with every matched tenure under it.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleGroup {
    pub title: Title,
    pub rank: u32,
    pub periods: Vec<Period>,
}

/// A ruler with their titles ordered best-first.
///
/// `groups` is non-empty by construction; every group holds at least
/// one period.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerGroup {
    pub ruler: Ruler,
    pub groups: Vec<TitleGroup>,
}

impl RulerGroup {
    /// The highest-priority title group.
    pub fn lead(&self) -> &TitleGroup {
        &self.groups[0]
    }

    /// Position index of the lead title's first matched period, used to
    /// anchor the lineage view.
    pub fn lead_position(&self) -> i64 {
        self.lead()
            .periods
            .first()
            .map(|p| p.position)
            .unwrap_or_default()
    }

    pub fn earliest_start(&self) -> i64 {
        self.periods().map(|p| p.start_year).min().unwrap_or_default()
    }

    pub fn latest_end(&self) -> i64 {
        self.periods().map(|p| p.end_year).max().unwrap_or_default()
    }

    fn periods(&self) -> impl Iterator<Item = &Period> {
        self.groups.iter().flat_map(|g| g.periods.iter())
    }
}

/// Fold flat hits into one group per ruler, preserving first-seen
/// ruler order (retrieval already ordered rulers meaningfully).
pub fn group_by_ruler(hits: Vec<PeriodHit>) -> Vec<RulerGroup> {
    let mut grouped: Vec<(Ruler, Vec<PeriodHit>)> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();
    for hit in hits {
        let slot = *slots.entry(hit.ruler.ruler_id).or_insert_with(|| {
            grouped.push((hit.ruler.clone(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(hit);
    }
    grouped
        .into_iter()
        .map(|(ruler, hits)| RulerGroup {
            ruler,
            groups: group_titles(hits),
        })
        .collect()
}

/// Group one ruler's hits by title and sort groups by display rank.
/// The sort is stable, so equally ranked titles keep retrieval order.
fn group_titles(hits: Vec<PeriodHit>) -> Vec<TitleGroup> {
    let mut groups: Vec<TitleGroup> = Vec::new();
    let mut slots: HashMap<i64, usize> = HashMap::new();
    for hit in hits {
        let slot = *slots.entry(hit.title.title_id).or_insert_with(|| {
            groups.push(TitleGroup {
                rank: title_rank(&hit.title.name),
                title: hit.title.clone(),
                periods: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].periods.push(hit.period);
    }
    groups.sort_by_key(|g| g.rank);
    groups
}
