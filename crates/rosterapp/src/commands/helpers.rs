use crate::error::{Result, RosterError};
use crate::index::{index_active, index_trash, DisplayEmployee, DisplayIndex, EmployeeSelector};
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};
use chrono::Utc;
use std::collections::HashSet;

pub fn indexed_active<S: DataStore>(store: &S) -> Result<Vec<DisplayEmployee>> {
    Ok(index_active(store.list_employees(Bucket::Active)?))
}

pub fn indexed_trash<S: DataStore>(store: &S) -> Result<Vec<DisplayEmployee>> {
    let entries = store
        .list_employees(Bucket::Trash)?
        .into_iter()
        .map(|e| {
            let deleted_at = store.deleted_at(&e.id).unwrap_or_else(Utc::now);
            (e, deleted_at)
        })
        .collect();
    Ok(index_trash(entries))
}

pub fn indexed<S: DataStore>(store: &S, bucket: Bucket) -> Result<Vec<DisplayEmployee>> {
    match bucket {
        Bucket::Active => indexed_active(store),
        Bucket::Trash => indexed_trash(store),
    }
}

pub fn find_by_id(rows: &[DisplayEmployee], id: EmployeeId) -> Option<&DisplayEmployee> {
    rows.iter().find(|row| row.id() == id)
}

/// Current display row of the given ids, in the order given.
pub fn display_rows<S: DataStore>(
    store: &S,
    bucket: Bucket,
    ids: &[EmployeeId],
) -> Result<Vec<DisplayEmployee>> {
    let rows = indexed(store, bucket)?;
    ids.iter()
        .map(|id| {
            find_by_id(&rows, *id)
                .cloned()
                .ok_or_else(|| RosterError::not_found(*id, bucket))
        })
        .collect()
}

/// Resolves selectors against the unfiltered ordering of `bucket`.
///
/// Every selector must resolve or nothing is returned. A range covers the rows whose
/// position falls inside it, and an employee selected more than once is only
/// returned once.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    bucket: Bucket,
    selectors: &[EmployeeSelector],
) -> Result<Vec<DisplayEmployee>> {
    let rows = indexed(store, bucket)?;
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for selector in selectors {
        let selected: Vec<&DisplayEmployee> = match selector {
            EmployeeSelector::Index(idx) => {
                check_bucket(idx, bucket)?;
                vec![position_row(&rows, idx, bucket)?]
            }
            EmployeeSelector::Range(start, end) => {
                check_bucket(start, bucket)?;
                // rows are numbered 1..=len, so both ends existing means the whole range does
                position_row(&rows, start, bucket)?;
                position_row(&rows, end, bucket)?;
                rows.get(start.position() - 1..end.position())
                    .unwrap_or_default()
                    .iter()
                    .collect()
            }
            EmployeeSelector::Id(id) => {
                vec![find_by_id(&rows, *id).ok_or_else(|| RosterError::not_found(*id, bucket))?]
            }
        };
        for row in selected {
            if seen.insert(row.id()) {
                results.push(row.clone());
            }
        }
    }

    Ok(results)
}

fn check_bucket(idx: &DisplayIndex, bucket: Bucket) -> Result<()> {
    if idx.bucket() != bucket {
        return Err(RosterError::Api(format!(
            "Index {} refers to the {}, expected an index in the {}",
            idx,
            idx.bucket(),
            bucket
        )));
    }
    Ok(())
}

fn position_row<'a>(
    rows: &'a [DisplayEmployee],
    idx: &DisplayIndex,
    bucket: Bucket,
) -> Result<&'a DisplayEmployee> {
    rows.get(idx.position().wrapping_sub(1))
        .filter(|row| row.index == *idx)
        .ok_or_else(|| RosterError::Api(format!("Index {} not found in the {}", idx, bucket)))
}
