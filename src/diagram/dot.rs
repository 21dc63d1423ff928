//! DOT description of a transition table.

use crate::core::TransitionTable;
use std::fmt::Write;

const HEADER: &str = r#"digraph StateMachine {
    rankdir=LR
    node [width=1 fixedsize=true shape=circle style=filled fillcolor="darkorchid1"]
"#;

/// Render `table` as a Graphviz digraph.
///
/// Every distinct state name becomes a node, and every transition an edge
/// labeled `"<event> | <pre-action>"`. Unreachable duplicate transitions are
/// drawn too.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Event, State, Transition, TransitionTable};
/// use switchyard::diagram::to_dot;
///
/// let table = TransitionTable::new([Transition::new(
///     State::new(0, "Idle"),
///     Event::new(1, "start"),
///     State::new(1, "Busy"),
/// )]);
///
/// let dot = to_dot(&table);
/// assert!(dot.contains(r#""Idle" -> "Busy" [label="start | "]"#));
/// ```
pub fn to_dot(table: &TransitionTable) -> String {
    let mut dot = String::from(HEADER);

    for name in table.state_names() {
        // Writing to a String cannot fail.
        let _ = writeln!(dot, "    {}", quote(name));
    }

    for t in table {
        let label = format!("{} | {}", t.event.name(), t.pre_action.name());
        let _ = writeln!(
            dot,
            "    {} -> {} [label={}]",
            quote(t.from.name()),
            quote(t.to.name()),
            quote(&label)
        );
    }

    dot.push('}');
    dot.push('\n');
    dot
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
