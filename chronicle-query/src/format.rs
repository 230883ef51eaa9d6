//! Rendering of hits into the uniform result-item contract.
//!
//! Every item carries the same shape: headline, subtitle, a primary
//! link-or-year argument, a named action map whose payloads embed the
//! next invocation's state variables, and an icon reference.

use std::collections::BTreeMap;

use chronicle_core::display::{format_count, format_year};
use chronicle_core::icons;
use chronicle_core::models::{
    actions, clean_notes, ActionPayload, EventHit, IconRef, PeriodHit, ResultItem, Title,
    YearMatch,
};
use chronicle_core::QueryState;

use crate::rank::RulerGroup;

/// Jump to a concrete year; clears any lineage state so the next
/// invocation starts from plain search.
fn jump_action(year: i64) -> ActionPayload {
    ActionPayload {
        valid: true,
        arg: year.to_string(),
        subtitle: format!("Travel to {}", format_year(year)),
        variables: QueryState::default().to_variables(),
    }
}

/// Enter the lineage view of one title, anchored on a ruler and
/// position, remembering the query to return to.
fn lineage_action(ruler_id: i64, title: &Title, position: i64, original_query: &str) -> ActionPayload {
    let plural = title.plural_display();
    ActionPayload {
        valid: true,
        arg: plural.clone(),
        subtitle: format!("Show all {plural}"),
        variables: QueryState::lineage(ruler_id, &title.name, position, original_query)
            .to_variables(),
    }
}

fn go_back_action(original_query: &str) -> ActionPayload {
    ActionPayload {
        valid: true,
        arg: original_query.to_string(),
        subtitle: "Go back to the original query".to_string(),
        variables: QueryState::cleared(Some(original_query)).to_variables(),
    }
}

fn copy_action(headline: &str, subtitle: &str) -> ActionPayload {
    ActionPayload {
        valid: true,
        arg: format!("{headline}: {subtitle}"),
        subtitle: "Copy full info to clipboard".to_string(),
        variables: BTreeMap::new(),
    }
}

fn nonempty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// "personal, Title (span; span, notes); Title2 (...)" fallback
/// subtitle for rulers without a biography.
fn grouped_subtitle(group: &RulerGroup) -> String {
    let titles = group
        .groups
        .iter()
        .map(|tg| {
            let spans = tg
                .periods
                .iter()
                .map(|p| match clean_notes(p.notes.as_deref()) {
                    Some(notes) => format!("{}, {notes}", p.span_display()),
                    None => p.span_display(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!("{} ({spans})", tg.title.name)
        })
        .collect::<Vec<_>>()
        .join("; ");
    match nonempty(group.ruler.personal_name.as_deref()) {
        Some(personal) => format!("{personal}, {titles}"),
        None => titles,
    }
}

/// One ruler in name-search results: all matched titles folded into a
/// single item led by the best-ranked title.
pub fn ruler_item(group: &RulerGroup, original_query: &str) -> ResultItem {
    let headline = group.ruler.display_name();
    let subtitle = match nonempty(group.ruler.biography.as_deref()) {
        Some(biography) => biography.to_string(),
        None => grouped_subtitle(group),
    };
    let lead = group.lead();
    let mut item_actions = BTreeMap::new();
    item_actions.insert(
        actions::JUMP_TO_END.to_string(),
        jump_action(group.latest_end()),
    );
    item_actions.insert(
        actions::JUMP_TO_START.to_string(),
        jump_action(group.earliest_start()),
    );
    item_actions.insert(
        actions::SHOW_LINEAGE.to_string(),
        lineage_action(
            group.ruler.ruler_id,
            &lead.title,
            group.lead_position(),
            original_query,
        ),
    );
    item_actions.insert(
        actions::GO_BACK.to_string(),
        go_back_action(original_query),
    );
    item_actions.insert(
        actions::COPY_TEXT.to_string(),
        copy_action(&headline, &subtitle),
    );
    ResultItem {
        arg: group.ruler.link(),
        valid: true,
        actions: item_actions,
        icon: IconRef::new(icons::for_title(&lead.title.name)),
        headline,
        subtitle,
    }
}

/// The year text leading a year-anchored headline: the raw anchor for
/// multi-year specs, otherwise the single matched year.
fn anchor_display(anchor: &str, spec: &YearMatch, matched: Option<i64>, fallback: i64) -> String {
    if spec.is_multi_year() {
        anchor.to_string()
    } else {
        format_year(matched.unwrap_or(fallback))
    }
}

/// One period in year-anchored results.
pub fn year_period_item(
    hit: &PeriodHit,
    anchor: &str,
    spec: &YearMatch,
    original_query: &str,
) -> ResultItem {
    let year_text = anchor_display(anchor, spec, hit.matched_year, hit.period.start_year);
    let headline = format!(
        "{year_text}: {} ({})",
        hit.ruler.display_name(),
        hit.period.label
    );
    let mut subtitle = String::new();
    if let Some(personal) = nonempty(hit.ruler.personal_name.as_deref()) {
        subtitle.push_str(personal);
        subtitle.push_str(", ");
    }
    subtitle.push_str(&format!(
        "{} ({}/{})",
        hit.title.name,
        format_count(hit.period.position),
        format_count(hit.title.max_count)
    ));
    if let Some(notes) = clean_notes(hit.period.notes.as_deref()) {
        subtitle.push(' ');
        subtitle.push_str(notes);
    }
    let mut item_actions = BTreeMap::new();
    item_actions.insert(
        actions::JUMP_TO_END.to_string(),
        jump_action(hit.period.end_year),
    );
    item_actions.insert(
        actions::JUMP_TO_START.to_string(),
        jump_action(hit.period.start_year),
    );
    item_actions.insert(
        actions::SHOW_LINEAGE.to_string(),
        lineage_action(
            hit.ruler.ruler_id,
            &hit.title,
            hit.period.position,
            original_query,
        ),
    );
    item_actions.insert(
        actions::GO_BACK.to_string(),
        go_back_action(original_query),
    );
    item_actions.insert(
        actions::COPY_TEXT.to_string(),
        copy_action(&headline, &subtitle),
    );
    ResultItem {
        arg: hit.ruler.link(),
        valid: true,
        actions: item_actions,
        icon: IconRef::new(icons::for_title(&hit.title.name)),
        headline,
        subtitle,
    }
}

fn event_actions(
    start_year: i64,
    end_year: i64,
    headline: &str,
    subtitle: &str,
    original_query: &str,
) -> BTreeMap<String, ActionPayload> {
    let mut item_actions = BTreeMap::new();
    item_actions.insert(actions::JUMP_TO_END.to_string(), jump_action(end_year));
    item_actions.insert(actions::JUMP_TO_START.to_string(), jump_action(start_year));
    item_actions.insert(
        actions::GO_BACK.to_string(),
        go_back_action(original_query),
    );
    item_actions.insert(
        actions::COPY_TEXT.to_string(),
        copy_action(headline, subtitle),
    );
    item_actions
}

/// One event in name-search results.
pub fn event_item(hit: &EventHit, original_query: &str) -> ResultItem {
    let headline = format!("{}: {}", hit.event.span_display(), hit.event.name);
    let subtitle = clean_notes(hit.event.notes.as_deref())
        .unwrap_or_default()
        .to_string();
    ResultItem {
        arg: hit.event.link(),
        valid: true,
        actions: event_actions(
            hit.event.start_year,
            hit.event.end_year,
            &headline,
            &subtitle,
            original_query,
        ),
        icon: IconRef::new(icons::EVENT),
        headline,
        subtitle,
    }
}

/// One event in year-anchored results; multi-year events append their
/// full span after the name.
pub fn year_event_item(
    hit: &EventHit,
    anchor: &str,
    spec: &YearMatch,
    original_query: &str,
) -> ResultItem {
    let year_text = anchor_display(anchor, spec, hit.matched_year, hit.event.start_year);
    let mut headline = format!("{year_text}: {}", hit.event.name);
    if !hit.event.is_single_year() {
        headline.push_str(&format!(" ({})", hit.event.span_display()));
    }
    let subtitle = clean_notes(hit.event.notes.as_deref())
        .unwrap_or_default()
        .to_string();
    ResultItem {
        arg: hit.event.link(),
        valid: true,
        actions: event_actions(
            hit.event.start_year,
            hit.event.end_year,
            &headline,
            &subtitle,
            original_query,
        ),
        icon: IconRef::new(icons::EVENT),
        headline,
        subtitle,
    }
}

/// One entry of a lineage sequence. The focal ruler's entry is starred;
/// each entry re-anchors the lineage on itself so the user can walk
/// the sequence.
pub fn lineage_item(hit: &PeriodHit, focal_ruler_id: i64, original_query: &str) -> ResultItem {
    let star = if hit.ruler.ruler_id == focal_ruler_id {
        " 🌟"
    } else {
        ""
    };
    let headline = format!("{} ({}){star}", hit.ruler.display_name(), hit.period.label);
    let detail = match nonempty(hit.ruler.biography.as_deref()) {
        Some(biography) => biography.to_string(),
        None => {
            let mut detail = String::new();
            if let Some(personal) = nonempty(hit.ruler.personal_name.as_deref()) {
                detail.push_str(personal);
                detail.push_str(", ");
            }
            detail.push_str(&hit.title.name);
            if let Some(notes) = clean_notes(hit.period.notes.as_deref()) {
                detail.push(' ');
                detail.push_str(notes);
            }
            detail
        }
    };
    let subtitle = format!(
        "{}/{} {detail}",
        format_count(hit.period.position),
        format_count(hit.title.max_count)
    );
    let mut item_actions = BTreeMap::new();
    item_actions.insert(
        actions::JUMP_TO_END.to_string(),
        jump_action(hit.period.end_year),
    );
    item_actions.insert(
        actions::JUMP_TO_START.to_string(),
        jump_action(hit.period.start_year),
    );
    item_actions.insert(
        actions::SHOW_LINEAGE.to_string(),
        lineage_action(
            hit.ruler.ruler_id,
            &hit.title,
            hit.period.position,
            original_query,
        ),
    );
    item_actions.insert(
        actions::GO_BACK.to_string(),
        go_back_action(original_query),
    );
    item_actions.insert(
        actions::COPY_TEXT.to_string(),
        copy_action(&headline, &subtitle),
    );
    ResultItem {
        arg: hit.ruler.link(),
        valid: true,
        actions: item_actions,
        icon: IconRef::new(icons::for_title(&hit.title.name)),
        headline,
        subtitle,
    }
}

/// Prefix every subtitle with its "i/M" position in the merged batch.
pub fn apply_global_counters(items: &mut [ResultItem]) {
    let total = format_count(items.len() as i64);
    for (i, item) in items.iter_mut().enumerate() {
        item.subtitle = format!(
            "{}/{total} {}",
            format_count(i as i64 + 1),
            item.subtitle
        );
    }
}

/// The single placeholder item for a query that matched nothing.
pub fn no_results(original_query: &str) -> ResultItem {
    let mut item_actions = BTreeMap::new();
    item_actions.insert(
        actions::GO_BACK.to_string(),
        go_back_action(original_query),
    );
    ResultItem {
        headline: "No results here 🫤".to_string(),
        subtitle: "Try a different query".to_string(),
        valid: false,
        arg: String::new(),
        actions: item_actions,
        icon: IconRef::new(icons::EMPTY),
    }
}

/// The single diagnostic item shown when the invocation itself failed.
pub fn diagnostic(headline: &str, subtitle: &str) -> ResultItem {
    ResultItem {
        headline: headline.to_string(),
        subtitle: subtitle.to_string(),
        valid: false,
        arg: String::new(),
        actions: BTreeMap::new(),
        icon: IconRef::new(icons::EMPTY),
    }
}
