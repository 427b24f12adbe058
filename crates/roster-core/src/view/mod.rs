//! Derived view over the contractor list.
//!
//! `project` is a pure function of the records and a [`ViewQuery`]: it never
//! touches the registry and keeps no state between calls, so surfaces can
//! call it on every render with different parameters.

pub mod collate;

use std::cmp::Ordering;
use std::collections::HashSet;

use roster_types::contractor::Contractor;
use roster_types::view::{RemarksFilter, SortDirection, SortField, SortState, ViewQuery, ViewStats};

/// Filter and sort `records` for display.
///
/// Search and remarks filter combine with AND. The sort is stable in both
/// directions: equal keys keep storage order.
pub fn project<'a>(records: &'a [Contractor], query: &ViewQuery) -> Vec<&'a Contractor> {
    let needle = query.search.to_lowercase();

    let mut view: Vec<&Contractor> = records
        .iter()
        .filter(|c| matches_search(c, &needle) && matches_remarks(c, &query.remarks))
        .collect();

    sort(&mut view, query.sort);
    view
}

/// Case-insensitive substring match against any of the four text fields.
/// `needle` must already be lower-cased; an empty needle matches everything.
fn matches_search(contractor: &Contractor, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &contractor.name,
        &contractor.contact_number,
        &contractor.address,
        &contractor.remarks,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// The substring match is unanchored, so a category that is itself a
/// substring of another remark also selects that other remark.
fn matches_remarks(contractor: &Contractor, filter: &RemarksFilter) -> bool {
    match filter {
        RemarksFilter::All => true,
        RemarksFilter::Empty => !contractor.has_remarks(),
        RemarksFilter::Contains(text) => contractor
            .remarks
            .to_lowercase()
            .contains(&text.to_lowercase()),
    }
}

pub fn sort(view: &mut [&Contractor], state: SortState) {
    view.sort_by(|a, b| {
        let ordering = compare_by(a, b, state.field);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Contractor, b: &Contractor, field: SortField) -> Ordering {
    match field {
        SortField::Serial => a.serial.cmp(&b.serial),
        SortField::Name => collate::compare(&a.name, &b.name),
        SortField::ContactNumber => collate::compare(&a.contact_number, &b.contact_number),
        SortField::Address => collate::compare(&a.address, &b.address),
        SortField::Remarks => collate::compare(&a.remarks, &b.remarks),
    }
}

/// Distinct non-blank remarks in first-seen storage order.
pub fn remark_categories(records: &[Contractor]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|c| c.has_remarks())
        .filter(|c| seen.insert(c.remarks.as_str()))
        .map(|c| c.remarks.clone())
        .collect()
}

/// Summary counters for `records` when `displayed` of them are shown.
pub fn stats(records: &[Contractor], displayed: usize) -> ViewStats {
    ViewStats {
        total: records.len(),
        displayed,
        with_remarks: records.iter().filter(|c| c.has_remarks()).count(),
        remark_categories: remark_categories(records),
    }
}
