//! # Session: State and View Synchronisation
//!
//! A [`Session`] owns the API (and through it the store), the current filter
//! [`Criteria`] and the trash visibility flag. Clients raise [`Intent`]s; the session
//! handles each one to completion before returning:
//!
//! 1. Resolve display indexes against the current unfiltered ordering.
//! 2. Ask the presenter for any missing value, and for confirmation before
//!    destructive changes (when confirmation is enabled).
//! 3. Run the operation.
//! 4. Recompute the whole [`RosterView`](crate::presenter::RosterView) and render it, once.
//!
//! A cancelled prompt or confirmation returns [`Outcome::Cancelled`]: nothing changes
//! and nothing is rendered. A failed operation returns the error: nothing changes and
//! nothing is rendered either, the client reports the error itself.
//!
//! `handle` takes `&mut self`, so intents can never overlap.

use crate::api::RosterApi;
use crate::commands::query::Criteria;
use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::index::DisplayEmployee;
use crate::model::{EditRequest, EmployeeDraft, EmployeeId, Field};
use crate::presenter::{Presenter, RosterView};
use crate::store::{Bucket, DataStore};
use crate::validation::{parse_bonus_percent, parse_threshold, validate_threshold};

/// A user intent raised by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the add form.
    Submit(EmployeeDraft),
    /// Edit one active employee. An empty request prompts for every field.
    Edit { target: String, request: EditRequest },
    /// Set a bonus percent; `None` prompts for it.
    SetBonus { target: String, percent: Option<i64> },
    Delete(Vec<String>),
    Restore(Vec<String>),
    Purge(Vec<String>),
    EmptyTrash,
    /// Move everyone at or below a salary threshold to the trash; `None` prompts.
    DeleteBelow(Option<i64>),
    /// Replace the current filter.
    Filter(Criteria),
    ClearFilter,
    ToggleTrash,
    Refresh,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// A mutation ran and the view was re-rendered.
    Applied(CmdResult),
    /// Nothing changed in the data but the view was re-rendered.
    Refreshed,
    /// The user declined a confirmation or a prompt.
    Cancelled,
}

pub struct Session<S: DataStore, P: Presenter> {
    api: RosterApi<S>,
    presenter: P,
    criteria: Criteria,
    show_trash: bool,
    confirm: bool,
}

impl<S: DataStore, P: Presenter> Session<S, P> {
    pub fn new(api: RosterApi<S>, presenter: P) -> Self {
        Self {
            api,
            presenter,
            criteria: Criteria::default(),
            show_trash: false,
            confirm: true,
        }
    }

    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn with_show_trash(mut self, show_trash: bool) -> Self {
        self.show_trash = show_trash;
        self
    }

    pub fn api(&self) -> &RosterApi<S> {
        &self.api
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The view as it would be rendered right now.
    pub fn view(&self) -> Result<RosterView> {
        self.api.view(&self.criteria, self.show_trash, Vec::new())
    }

    pub fn handle(&mut self, intent: Intent) -> Result<Outcome> {
        tracing::debug!(?intent, "handling intent");
        let outcome = self.dispatch(intent);
        match &outcome {
            Ok(Outcome::Cancelled) => tracing::debug!("intent cancelled"),
            Err(err) => tracing::warn!(error = %err, "intent rejected"),
            Ok(_) => {}
        }
        outcome
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::Submit(draft) => {
                let result = self.api.add(&draft)?;
                self.applied(result)
            }
            Intent::Edit { target, request } => self.edit(&target, request),
            Intent::SetBonus { target, percent } => self.set_bonus(&target, percent),
            Intent::Delete(targets) => {
                let rows = self.api.resolve(&targets, Bucket::Active)?;
                if !self.confirmed(&format!("Move {} to the trash?", describe(&rows))) {
                    return Ok(Outcome::Cancelled);
                }
                let result = self.api.soft_delete(&ids(&rows))?;
                self.applied(result)
            }
            Intent::Restore(targets) => {
                let rows = self.api.resolve(&targets, Bucket::Trash)?;
                if !self.confirmed(&format!("Restore {}?", describe(&rows))) {
                    return Ok(Outcome::Cancelled);
                }
                let result = self.api.restore(&ids(&rows))?;
                self.applied(result)
            }
            Intent::Purge(targets) => {
                let rows = self.api.resolve(&targets, Bucket::Trash)?;
                let question = format!(
                    "Permanently delete {}? This cannot be undone.",
                    describe(&rows)
                );
                if !self.confirmed(&question) {
                    return Ok(Outcome::Cancelled);
                }
                let result = self.api.permanent_delete(&ids(&rows))?;
                self.applied(result)
            }
            Intent::EmptyTrash => {
                let count = self.api.store().count(Bucket::Trash)?;
                if count > 0 {
                    let question = format!(
                        "Permanently delete all {} in the trash? This cannot be undone.",
                        plural(count)
                    );
                    if !self.confirmed(&question) {
                        return Ok(Outcome::Cancelled);
                    }
                }
                let result = self.api.empty_trash()?;
                self.applied(result)
            }
            Intent::DeleteBelow(threshold) => self.delete_below(threshold),
            Intent::Filter(criteria) => {
                let warnings = criteria
                    .inverted_ranges()
                    .into_iter()
                    .map(|label| {
                        CmdMessage::warning(format!(
                            "Minimum {} is above the maximum, so nothing can match.",
                            label
                        ))
                    })
                    .collect();
                self.criteria = criteria;
                self.render(warnings)?;
                Ok(Outcome::Refreshed)
            }
            Intent::ClearFilter => {
                self.criteria = Criteria::default();
                self.refreshed()
            }
            Intent::ToggleTrash => {
                self.show_trash = !self.show_trash;
                self.refreshed()
            }
            Intent::Refresh => self.refreshed(),
        }
    }

    fn edit(&mut self, target: &str, mut request: EditRequest) -> Result<Outcome> {
        let row = self.single(target)?;
        if request.is_empty() {
            for field in Field::ALL {
                let current = row.employee.field_value(field);
                let message = format!("{} for {}", field.label(), row.employee.name);
                let Some(answer) = self.presenter.prompt(&message, Some(&current)) else {
                    return Ok(Outcome::Cancelled);
                };
                match field {
                    Field::Name => request.name = Some(answer),
                    Field::Role => request.role = Some(answer),
                    Field::Salary => request.salary = Some(answer),
                    Field::Status => request.status = Some(answer),
                }
            }
        }
        let result = self.api.update(row.id(), &request)?;
        self.applied(result)
    }

    fn set_bonus(&mut self, target: &str, percent: Option<i64>) -> Result<Outcome> {
        let row = self.single(target)?;
        let percent = match percent {
            Some(percent) => percent,
            None => {
                let message = format!("Bonus percent for {} (0-100)", row.employee.name);
                let current = row.employee.bonus_percent.to_string();
                let Some(answer) = self.presenter.prompt(&message, Some(&current)) else {
                    return Ok(Outcome::Cancelled);
                };
                i64::from(parse_bonus_percent(&answer)?)
            }
        };
        let result = self.api.set_bonus(row.id(), percent)?;
        self.applied(result)
    }

    fn delete_below(&mut self, threshold: Option<i64>) -> Result<Outcome> {
        let threshold = match threshold {
            Some(threshold) => validate_threshold(threshold)?,
            None => {
                let Some(answer) = self.presenter.prompt("Salary threshold", None) else {
                    return Ok(Outcome::Cancelled);
                };
                parse_threshold(&answer)?
            }
        };

        let candidates = self.api.below_threshold(threshold)?;
        if !candidates.is_empty() {
            let question = format!(
                "Move {} with salary at or below {} to the trash?",
                plural(candidates.len()),
                threshold
            );
            if !self.confirmed(&question) {
                return Ok(Outcome::Cancelled);
            }
        }
        let result = self.api.delete_below_threshold(threshold)?;
        self.applied(result)
    }

    /// Resolves a selector that must name exactly one active employee.
    fn single(&self, target: &str) -> Result<DisplayEmployee> {
        let mut rows = self.api.resolve(&[target], Bucket::Active)?;
        if rows.len() != 1 {
            return Err(RosterError::Api(format!(
                "{} selects {}, expected exactly one",
                target,
                plural(rows.len())
            )));
        }
        Ok(rows.remove(0))
    }

    fn confirmed(&mut self, question: &str) -> bool {
        !self.confirm || self.presenter.confirm(question)
    }

    fn applied(&mut self, result: CmdResult) -> Result<Outcome> {
        self.render(result.messages.clone())?;
        Ok(Outcome::Applied(result))
    }

    fn refreshed(&mut self) -> Result<Outcome> {
        self.render(Vec::new())?;
        Ok(Outcome::Refreshed)
    }

    fn render(&mut self, messages: Vec<CmdMessage>) -> Result<()> {
        let view = self.api.view(&self.criteria, self.show_trash, messages)?;
        self.presenter.render(&view);
        Ok(())
    }
}

fn ids(rows: &[DisplayEmployee]) -> Vec<EmployeeId> {
    rows.iter().map(DisplayEmployee::id).collect()
}

fn describe(rows: &[DisplayEmployee]) -> String {
    match rows {
        [row] => format!("({}) {}", row.index, row.employee.name),
        _ => plural(rows.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::store::memory::InMemoryStore;
    use std::collections::VecDeque;

    /// Answers confirmations and prompts from a script and records every render.
    #[derive(Default)]
    struct ScriptedPresenter {
        confirms: VecDeque<bool>,
        answers: VecDeque<Option<String>>,
        asked: Vec<String>,
        renders: Vec<RosterView>,
    }

    impl ScriptedPresenter {
        fn confirming(mut self, answers: &[bool]) -> Self {
            self.confirms.extend(answers.iter().copied());
            self
        }

        fn answering(mut self, answers: &[Option<&str>]) -> Self {
            self.answers
                .extend(answers.iter().map(|a| a.map(str::to_string)));
            self
        }
    }

    impl Presenter for ScriptedPresenter {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.confirms.pop_front().unwrap_or(false)
        }

        fn prompt(&mut self, message: &str, _default: Option<&str>) -> Option<String> {
            self.asked.push(message.to_string());
            self.answers.pop_front().flatten()
        }

        fn render(&mut self, view: &RosterView) {
            self.renders.push(view.clone());
        }
    }

    fn session(presenter: ScriptedPresenter) -> Session<InMemoryStore, ScriptedPresenter> {
        Session::new(RosterApi::new(InMemoryStore::new()), presenter)
    }

    fn submit(s: &mut Session<InMemoryStore, ScriptedPresenter>, name: &str, salary: &str) {
        s.handle(Intent::Submit(EmployeeDraft::new(
            name, "Engineer", salary, "Active",
        )))
        .unwrap();
    }

    #[test]
    fn every_mutation_renders_once() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "Ana Silva", "50000");
        assert_eq!(s.presenter().renders.len(), 1);

        let view = &s.presenter().renders[0];
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.total_payroll, 50_000);
        assert_eq!(view.messages[0].content, "Added (1): Ana Silva");

        s.handle(Intent::SetBonus {
            target: "1".into(),
            percent: Some(10),
        })
        .unwrap();
        assert_eq!(s.presenter().renders.len(), 2);
        assert_eq!(s.presenter().renders[1].rows[0].bonus_amount, 5_000);
    }

    #[test]
    fn cancelled_confirmation_changes_nothing_and_does_not_render() {
        let mut s = session(ScriptedPresenter::default().confirming(&[false]));
        submit(&mut s, "Ana Silva", "50000");

        let outcome = s.handle(Intent::Delete(vec!["1".into()])).unwrap();

        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(s.presenter().renders.len(), 1);
        assert_eq!(s.presenter().asked, vec!["Move (1) Ana Silva to the trash?"]);
        assert_eq!(s.api().store().count(Bucket::Active).unwrap(), 1);
    }

    #[test]
    fn confirmed_delete_and_restore() {
        let mut s = session(ScriptedPresenter::default().confirming(&[true, true]));
        submit(&mut s, "Ana Silva", "50000");

        s.handle(Intent::Delete(vec!["1".into()])).unwrap();
        let view = s.presenter().renders.last().unwrap().clone();
        assert!(view.rows.is_empty());
        assert_eq!(view.trash.len(), 1);
        assert_eq!(view.summary.total_payroll, 0);

        s.handle(Intent::Restore(vec!["1".into()])).unwrap();
        let view = s.presenter().renders.last().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert!(view.trash.is_empty());
        assert_eq!(s.presenter().renders.len(), 3);
    }

    #[test]
    fn confirmation_can_be_disabled() {
        let mut s = session(ScriptedPresenter::default()).with_confirm(false);
        submit(&mut s, "Ana Silva", "50000");
        s.handle(Intent::Delete(vec!["1".into()])).unwrap();
        s.handle(Intent::Purge(vec!["1".into()])).unwrap();

        assert!(s.presenter().asked.is_empty());
        assert_eq!(s.api().store().count(Bucket::Trash).unwrap(), 0);
    }

    #[test]
    fn failed_operation_does_not_render() {
        let mut s = session(ScriptedPresenter::default());
        let err = s
            .handle(Intent::Submit(EmployeeDraft::new(
                "John3", "Engineer", "100", "Active",
            )))
            .unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
        assert!(s.presenter().renders.is_empty());

        let err = s.handle(Intent::Delete(vec!["4".into()])).unwrap_err();
        assert!(matches!(err, RosterError::Api(_)));
        assert!(s.presenter().renders.is_empty());
    }

    #[test]
    fn bonus_prompt_and_cancel() {
        let presenter = ScriptedPresenter::default().answering(&[None, Some("15%")]);
        let mut s = session(presenter);
        submit(&mut s, "Ana Silva", "1000");

        let cancelled = s
            .handle(Intent::SetBonus {
                target: "1".into(),
                percent: None,
            })
            .unwrap();
        assert!(matches!(cancelled, Outcome::Cancelled));

        s.handle(Intent::SetBonus {
            target: "1".into(),
            percent: None,
        })
        .unwrap();
        let view = s.presenter().renders.last().unwrap();
        assert_eq!(view.rows[0].entry.employee.bonus_percent, 15);
        assert_eq!(view.rows[0].bonus_amount, 150);
    }

    #[test]
    fn bad_bonus_answer_is_a_range_error() {
        let presenter = ScriptedPresenter::default().answering(&[Some("150")]);
        let mut s = session(presenter);
        submit(&mut s, "Ana Silva", "1000");

        let err = s
            .handle(Intent::SetBonus {
                target: "1".into(),
                percent: None,
            })
            .unwrap_err();
        assert!(matches!(err, RosterError::Range(_)));
    }

    #[test]
    fn edit_prompts_every_field_when_request_is_empty() {
        let presenter = ScriptedPresenter::default().answering(&[
            Some("Ana Souza"),
            Some("Lead"),
            Some("60000"),
            Some("on leave"),
        ]);
        let mut s = session(presenter);
        submit(&mut s, "Ana Silva", "50000");

        s.handle(Intent::Edit {
            target: "1".into(),
            request: EditRequest::default(),
        })
        .unwrap();

        assert_eq!(s.presenter().asked.len(), 4);
        let employee = &s.presenter().renders.last().unwrap().rows[0].entry.employee;
        assert_eq!(employee.name, "Ana Souza");
        assert_eq!(employee.salary, 60_000);
        assert_eq!(employee.status, Status::OnLeave);
    }

    #[test]
    fn edit_with_fields_does_not_prompt() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "Ana Silva", "50000");

        s.handle(Intent::Edit {
            target: "1".into(),
            request: EditRequest {
                role: Some("Manager".into()),
                ..Default::default()
            },
        })
        .unwrap();

        assert!(s.presenter().asked.is_empty());
        assert_eq!(
            s.presenter().renders.last().unwrap().rows[0].entry.employee.role,
            "Manager"
        );
    }

    #[test]
    fn edit_rejects_ranges() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "Alpha", "1");
        submit(&mut s, "Bravo", "2");

        let err = s
            .handle(Intent::Edit {
                target: "1-2".into(),
                request: EditRequest::default(),
            })
            .unwrap_err();
        assert!(matches!(err, RosterError::Api(_)));
    }

    #[test]
    fn delete_below_confirms_with_count() {
        let mut s = session(ScriptedPresenter::default().confirming(&[true]));
        submit(&mut s, "Low", "1000");
        submit(&mut s, "High", "5000");

        s.handle(Intent::DeleteBelow(Some(2_000))).unwrap();

        assert_eq!(
            s.presenter().asked,
            vec!["Move 1 employee with salary at or below 2000 to the trash?"]
        );
        let view = s.presenter().renders.last().unwrap();
        assert_eq!(view.rows[0].entry.employee.name, "High");
        assert_eq!(view.trash[0].entry.employee.name, "Low");
    }

    #[test]
    fn delete_below_with_nothing_to_move_skips_confirmation() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "High", "5000");

        let outcome = s.handle(Intent::DeleteBelow(Some(10))).unwrap();
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert!(s.presenter().asked.is_empty());
        assert_eq!(s.api().store().count(Bucket::Active).unwrap(), 1);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let mut s = session(ScriptedPresenter::default());
        assert!(matches!(
            s.handle(Intent::DeleteBelow(Some(-1))),
            Err(RosterError::Range(_))
        ));
    }

    #[test]
    fn empty_trash_confirms_only_when_needed() {
        let mut s = session(ScriptedPresenter::default().confirming(&[true, true]));
        s.handle(Intent::EmptyTrash).unwrap();
        assert!(s.presenter().asked.is_empty());

        submit(&mut s, "Ana", "10");
        s.handle(Intent::Delete(vec!["1".into()])).unwrap();
        s.handle(Intent::EmptyTrash).unwrap();
        assert_eq!(s.presenter().asked.len(), 2);
        assert_eq!(s.api().store().count(Bucket::Trash).unwrap(), 0);
    }

    #[test]
    fn filter_and_toggle_rerender_without_mutation() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "Ana Silva", "50000");
        submit(&mut s, "Bob", "1000");

        s.handle(Intent::Filter(Criteria {
            name_contains: Some("bob".into()),
            ..Default::default()
        }))
        .unwrap();
        let view = s.presenter().renders.last().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].entry.index.to_string(), "2");
        assert_eq!(view.summary.active_count, 2);
        assert!(view.filtered());

        s.handle(Intent::ToggleTrash).unwrap();
        assert!(s.presenter().renders.last().unwrap().show_trash);

        s.handle(Intent::ClearFilter).unwrap();
        assert_eq!(s.presenter().renders.last().unwrap().rows.len(), 2);
        assert_eq!(s.presenter().renders.len(), 5);
    }

    #[test]
    fn filter_survives_mutations() {
        let mut s = session(ScriptedPresenter::default());
        s.handle(Intent::Filter(Criteria {
            salary_min: Some(100),
            ..Default::default()
        }))
        .unwrap();
        submit(&mut s, "Low", "10");
        submit(&mut s, "High", "1000");

        let view = s.presenter().renders.last().unwrap();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.shown_count, 1);
        assert_eq!(view.summary.active_count, 2);
    }

    fn active(s: &Session<InMemoryStore, ScriptedPresenter>) -> Vec<crate::model::Employee> {
        s.api().store().list_employees(Bucket::Active).unwrap()
    }

    #[test]
    fn edit_cancelled_midway_keeps_record() {
        let presenter = ScriptedPresenter::default().answering(&[Some("Bo Chen"), Some("Ops"), None]);
        let mut s = session(presenter);
        submit(&mut s, "Ana Silva", "50000");
        let before = active(&s);

        let outcome = s
            .handle(Intent::Edit {
                target: "1".into(),
                request: EditRequest::default(),
            })
            .unwrap();

        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(s.presenter().asked.len(), 3);
        assert_eq!(active(&s), before);
        assert_eq!(s.presenter().renders.len(), 1);
    }

    #[test]
    fn threshold_prompt_cancelled_moves_nothing() {
        let mut s = session(ScriptedPresenter::default().answering(&[None]));
        submit(&mut s, "Ana Silva", "50000");

        let outcome = s.handle(Intent::DeleteBelow(None)).unwrap();

        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(s.presenter().asked, vec!["Salary threshold"]);
        assert_eq!(s.api().store().count(Bucket::Active).unwrap(), 1);
        assert_eq!(s.api().store().count(Bucket::Trash).unwrap(), 0);
        assert_eq!(s.presenter().renders.len(), 1);
    }

    #[test]
    fn declined_restore_and_purge_leave_trash_alone() {
        let mut s = session(ScriptedPresenter::default().confirming(&[true, false, false]));
        submit(&mut s, "Ana Silva", "50000");
        s.handle(Intent::Delete(vec!["1".into()])).unwrap();
        let trash = s.api().store().list_employees(Bucket::Trash).unwrap();

        let restore = s.handle(Intent::Restore(vec!["t1".into()])).unwrap();
        let purge = s.handle(Intent::Purge(vec!["1".into()])).unwrap();

        assert!(matches!(restore, Outcome::Cancelled));
        assert!(matches!(purge, Outcome::Cancelled));
        assert_eq!(
            &s.presenter().asked[1..],
            [
                "Restore (t1) Ana Silva?",
                "Permanently delete (t1) Ana Silva? This cannot be undone."
            ]
        );
        assert_eq!(s.api().store().list_employees(Bucket::Trash).unwrap(), trash);
        assert!(active(&s).is_empty());
        assert_eq!(s.presenter().renders.len(), 2);
    }

    #[test]
    fn inverted_range_filter_warns() {
        let mut s = session(ScriptedPresenter::default());
        submit(&mut s, "Ana Silva", "50000");

        s.handle(Intent::Filter(Criteria {
            salary_min: Some(60_000),
            salary_max: Some(10),
            ..Default::default()
        }))
        .unwrap();

        let view = s.presenter().renders.last().unwrap();
        assert!(view.rows.is_empty());
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.messages[0].level, crate::commands::MessageLevel::Warning);
        assert!(view.messages[0].content.contains("salary"));
    }
}
