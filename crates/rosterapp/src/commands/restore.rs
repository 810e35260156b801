use crate::commands::helpers::display_rows;
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::store::{Bucket, DataStore};

/// Moves trashed employees back to the end of the active roster.
pub fn run<S: DataStore>(store: &mut S, ids: &[EmployeeId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if ids.is_empty() {
        result.add_message(CmdMessage::info("No employees selected."));
        return Ok(result);
    }

    let restored = store.move_employees(ids, Bucket::Trash, Bucket::Active)?;
    let restored_ids: Vec<EmployeeId> = restored.iter().map(|e| e.id).collect();
    tracing::info!(count = restored_ids.len(), "restored from trash");

    // Restored employees get their new active index
    let affected = display_rows(store, Bucket::Active, &restored_ids)?;
    for row in &affected {
        result.add_message(CmdMessage::success(format!(
            "Restored ({}): {}",
            row.index, row.employee.name
        )));
    }
    if affected.len() > 1 {
        result.add_message(CmdMessage::info(format!(
            "{} restored.",
            plural(affected.len())
        )));
    }
    Ok(result.with_affected(affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, purge};
    use crate::error::RosterError;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn delete_then_restore_round_trip() {
        let mut fixture = StoreFixture::new()
            .with_active("Bob", "Ops", 1_000)
            .with_bonus("Ana Silva", 50_000, 10);
        let ids = fixture.ids(Bucket::Active);
        let before = fixture.store.get_employee(&ids[0], Bucket::Active).unwrap();

        delete::run(&mut fixture.store, &[ids[0]]).unwrap();
        let result = run(&mut fixture.store, &[ids[0]]).unwrap();

        let restored = &result.affected[0];
        assert_eq!(restored.employee, before);
        // Appended, not put back in its old slot
        assert_eq!(restored.index, DisplayIndex::Active(2));
        assert!(restored.deleted_at.is_none());
        assert_eq!(result.messages[0].content, "Restored (2): Bob");
        assert!(fixture.ids(Bucket::Trash).is_empty());
    }

    #[test]
    fn active_id_is_not_found_in_trash() {
        let mut fixture = StoreFixture::new().with_employees(1);
        let id = fixture.ids(Bucket::Active)[0];
        let err = run(&mut fixture.store, &[id]).unwrap_err();
        assert!(matches!(
            err,
            RosterError::NotFound {
                bucket: Bucket::Trash,
                ..
            }
        ));
    }

    #[test]
    fn purge_after_restore_is_not_found() {
        let mut fixture = StoreFixture::new().with_trashed("Zed", 10).with_trashed("Yan", 20);
        let ids = fixture.ids(Bucket::Trash);

        run(&mut fixture.store, &[ids[0]]).unwrap();
        let trash_before = fixture.ids(Bucket::Trash);

        let err = purge::run(&mut fixture.store, &[ids[0]]).unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
        assert_eq!(fixture.ids(Bucket::Trash), trash_before);
    }

    #[test]
    fn restores_batch_in_given_order() {
        let mut fixture = StoreFixture::new()
            .with_trashed("Zed", 10)
            .with_trashed("Yan", 20)
            .with_trashed("Xi", 30);
        let ids = fixture.ids(Bucket::Trash);

        let result = run(&mut fixture.store, &[ids[2], ids[0]]).unwrap();
        assert_eq!(result.affected_ids(), vec![ids[2], ids[0]]);
        assert_eq!(fixture.ids(Bucket::Active), vec![ids[2], ids[0]]);
        assert_eq!(fixture.ids(Bucket::Trash), vec![ids[1]]);
    }
}
