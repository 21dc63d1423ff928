//! Table audits built on `Validation`.

use crate::audit::issues::TableIssue;
use crate::core::TransitionTable;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single audit check.
pub type AuditResult = Validation<(), NonEmptyVec<TableIssue>>;

/// Type alias for audit check functions
pub type AuditCheck = Box<dyn Fn(&TransitionTable) -> AuditResult + Send + Sync>;

/// A set of checks run against a table, reporting every issue at once.
///
/// Audits only report; machines are built from any table regardless of the
/// outcome.
pub struct TableAudit {
    checks: Vec<AuditCheck>,
}

impl TableAudit {
    /// An audit with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Every built-in check.
    pub fn standard() -> Self {
        Self::new()
            .require(shadowed_transitions)
            .require(inert_self_loops)
            .require(named_noop_actions)
    }

    /// Add a custom check.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TransitionTable) -> AuditResult + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with an error message.
    pub fn require_pred<F>(mut self, predicate: F, message: String) -> Self
    where
        F: Fn(&TransitionTable) -> bool + Send + Sync + 'static,
    {
        let check = move |table: &TransitionTable| {
            if predicate(table) {
                Validation::success(())
            } else {
                Validation::fail(TableIssue::Custom {
                    message: message.clone(),
                })
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run all checks, accumulating ALL issues.
    pub fn run(&self, table: &TransitionTable) -> AuditResult {
        let results: Vec<AuditResult> = self.checks.iter().map(|check| check(table)).collect();
        Validation::all_vec(results).map(|_| ())
    }
}

impl Default for TableAudit {
    fn default() -> Self {
        Self::standard()
    }
}

/// Run the standard audit.
pub fn audit(table: &TransitionTable) -> AuditResult {
    TableAudit::standard().run(table)
}

/// Transitions hidden behind an earlier transition with the same key.
pub fn shadowed_transitions(table: &TransitionTable) -> AuditResult {
    let transitions = table.transitions();
    let results: Vec<AuditResult> = transitions
        .iter()
        .enumerate()
        .map(|(index, t)| {
            match transitions[..index]
                .iter()
                .position(|earlier| earlier.matches(&t.from, &t.event))
            {
                Some(shadowed_by) => Validation::fail(TableIssue::Shadowed { index, shadowed_by }),
                None => Validation::success(()),
            }
        })
        .collect();
    Validation::all_vec(results).map(|_| ())
}

/// Self-transitions that have nothing to run.
pub fn inert_self_loops(table: &TransitionTable) -> AuditResult {
    let results: Vec<AuditResult> = table
        .iter()
        .enumerate()
        .map(|(index, t)| {
            if t.is_self_transition() && t.pre_action.is_noop() && t.next_action.is_noop() {
                Validation::fail(TableIssue::InertSelfLoop { index })
            } else {
                Validation::success(())
            }
        })
        .collect();
    Validation::all_vec(results).map(|_| ())
}

/// Actions that carry a name but are disabled by their id.
pub fn named_noop_actions(table: &TransitionTable) -> AuditResult {
    let results: Vec<AuditResult> = table
        .iter()
        .enumerate()
        .flat_map(|(index, t)| [(index, &t.pre_action), (index, &t.next_action)])
        .map(|(index, action)| {
            if action.is_noop() && !action.name().is_empty() {
                Validation::fail(TableIssue::NamedNoOpAction {
                    index,
                    name: action.name().to_string(),
                })
            } else {
                Validation::success(())
            }
        })
        .collect();
    Validation::all_vec(results).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Event, State, Transition};

    fn a() -> State {
        State::new(0, "A")
    }

    fn b() -> State {
        State::new(1, "B")
    }

    fn issues(result: AuditResult) -> Vec<TableIssue> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn clean_table_passes() {
        let table = TransitionTable::new([
            Transition::new(a(), Event::new(1, "go"), b()),
            Transition::new(b(), Event::new(2, "back"), a()),
        ]);

        assert!(audit(&table).is_success());
    }

    #[test]
    fn empty_table_passes() {
        assert!(audit(&TransitionTable::default()).is_success());
    }

    #[test]
    fn reports_shadowed_duplicates() {
        let table = TransitionTable::new([
            Transition::new(a(), Event::new(1, "go"), b()),
            Transition::new(b(), Event::new(2, "back"), a()),
            Transition::new(a(), Event::new(1, "renamed go"), a())
                .with_pre_action(Action::new(1, "x")),
            Transition::new(a(), Event::new(1, "go"), b()),
        ]);

        assert_eq!(
            issues(shadowed_transitions(&table)),
            vec![
                TableIssue::Shadowed {
                    index: 2,
                    shadowed_by: 0
                },
                TableIssue::Shadowed {
                    index: 3,
                    shadowed_by: 0
                },
            ]
        );
    }

    #[test]
    fn same_event_from_differently_named_state_is_not_shadowed() {
        let table = TransitionTable::new([
            Transition::new(a(), Event::new(1, "go"), b()),
            Transition::new(State::new(0, "Other"), Event::new(1, "go"), b()),
        ]);

        assert!(shadowed_transitions(&table).is_success());
    }

    #[test]
    fn reports_inert_self_loops() {
        let table = TransitionTable::new([
            Transition::new(a(), Event::new(1, "poke"), a()),
            Transition::new(a(), Event::new(2, "tick"), a())
                .with_next_action(Action::new(1, "log")),
        ]);

        assert_eq!(
            issues(inert_self_loops(&table)),
            vec![TableIssue::InertSelfLoop { index: 0 }]
        );
    }

    #[test]
    fn reports_named_noop_actions() {
        let table = TransitionTable::new([Transition::new(a(), Event::new(1, "go"), b())
            .with_pre_action(Action::new(0, "forgot the id"))
            .with_next_action(Action::new(-1, "disabled"))]);

        assert_eq!(issues(named_noop_actions(&table)).len(), 2);
    }

    #[test]
    fn audit_accumulates_all_issues() {
        let table = TransitionTable::new([
            Transition::new(a(), Event::new(1, "poke"), a()),
            Transition::new(a(), Event::new(1, "poke"), b())
                .with_pre_action(Action::new(0, "forgot the id")),
        ]);

        let found = issues(
            TableAudit::standard()
                .require_pred(|t| t.len() > 5, "table too small".to_string())
                .run(&table),
        );

        assert_eq!(found.len(), 4);
        assert!(found.contains(&TableIssue::Shadowed {
            index: 1,
            shadowed_by: 0
        }));
        assert!(found.contains(&TableIssue::InertSelfLoop { index: 0 }));
        assert!(found
            .iter()
            .any(|i| matches!(i, TableIssue::NamedNoOpAction { index: 1, .. })));
        assert!(found.iter().any(|i| matches!(i, TableIssue::Custom { .. })));
    }

    #[test]
    fn empty_audit_always_passes() {
        let table = TransitionTable::new([Transition::new(a(), Event::new(1, "poke"), a())]);
        assert!(TableAudit::new().run(&table).is_success());
    }
}
