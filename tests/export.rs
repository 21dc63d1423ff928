//! Diagram export through real and fake renderer processes.

mod common;

use common::{delegate, OrderProcessor};
use std::fs;
use std::path::{Path, PathBuf};
use switchyard::core::{Action, Event, State, Transition};
use switchyard::diagram::{DiagramError, GraphvizRenderer, RenderOptions};
use switchyard::engine::StateMachine;
use switchyard::DefaultDelegate;
use tempfile::TempDir;

fn machine() -> StateMachine<DefaultDelegate<OrderProcessor>> {
    let pending = State::new(0, "Pending");
    let buying = State::new(1, "Purchasing");
    let bought = State::new(2, "Purchased");

    StateMachine::new(
        delegate(OrderProcessor::default()),
        [
            Transition::new(pending.clone(), Event::new(1, "go to stall"), buying.clone())
                .with_pre_action(Action::new(1, "walk")),
            Transition::new(buying, Event::new(2, "got goods"), bought.clone()),
            Transition::new(bought.clone(), Event::new(3, "recount"), bought),
        ],
    )
}

/// A stand-in renderer: copies stdin to the `-o` file and records its
/// arguments next to it.
#[cfg(unix)]
fn fake_renderer(dir: &Path) -> GraphvizRenderer {
    let script = dir.join("fake-dot.sh");
    fs::write(
        &script,
        r#"out=""
for arg in "$@"; do
    case "$arg" in
        -o*) out="${arg#-o}" ;;
    esac
done
cat > "$out"
printf '%s\n' "$@" > "$out.args"
"#,
    )
    .unwrap();

    // Run through sh so the script never needs the executable bit.
    GraphvizRenderer::with_program("sh").arg(script)
}

#[cfg(unix)]
fn recorded_args(output: &Path) -> Vec<String> {
    let mut path = output.as_os_str().to_owned();
    path.push(".args");
    fs::read_to_string(PathBuf::from(path))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(unix)]
#[test]
fn renderer_receives_the_table_on_stdin() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stall.png");

    machine()
        .export_with(&fake_renderer(dir.path()), &RenderOptions::new(&output))
        .unwrap();

    let dot = fs::read_to_string(&output).unwrap();
    assert!(dot.starts_with("digraph StateMachine {"));
    assert!(dot.contains(r#""Pending" -> "Purchasing" [label="go to stall | walk"]"#));
    assert!(dot.contains(r#""Purchasing" -> "Purchased" [label="got goods | "]"#));
    assert!(dot.contains(r#""Purchased" -> "Purchased" [label="recount | "]"#));
    assert_eq!(dot.matches("    \"Purchased\"\n").count(), 1);
}

#[cfg(unix)]
#[test]
fn renderer_receives_the_configured_arguments() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stall.svg");
    let options = RenderOptions::new(&output)
        .format("svg")
        .layout("circo")
        .scale(96.5)
        .extra("-Gdpi=300  -Nshape=box");

    machine()
        .export_with(&fake_renderer(dir.path()), &options)
        .unwrap();

    assert_eq!(
        recorded_args(&output),
        vec![
            format!("-o{}", output.display()),
            "-Tsvg".to_string(),
            "-Kcirco".to_string(),
            "-s96.5".to_string(),
            "-Gdpi=300".to_string(),
            "-Nshape=box".to_string(),
        ]
    );
}

#[cfg(unix)]
#[test]
fn failing_renderer_reports_its_stderr() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("broken.sh");
    fs::write(&script, "cat > /dev/null\necho 'syntax error in line 1' >&2\nexit 3\n").unwrap();

    let err = machine()
        .export_with(
            &GraphvizRenderer::with_program("sh").arg(&script),
            &RenderOptions::new(dir.path().join("never.png")),
        )
        .unwrap_err();

    match err {
        DiagramError::Failed { status, stderr } => {
            assert_eq!(status.code(), Some(3));
            assert_eq!(stderr, "syntax error in line 1");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn closure_renderer_sees_the_options() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("diagram.dot");

    let renderer = |graph: &str, options: &RenderOptions| -> Result<(), DiagramError> {
        assert_eq!(options.layout, "dot");
        fs::write(&options.output, graph).map_err(DiagramError::Stdin)
    };

    machine()
        .export_with(&renderer, &RenderOptions::new(&output))
        .unwrap();

    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains(r#""Pending" -> "Purchasing""#));
}

#[test]
fn export_with_details_uses_graphviz_when_available() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stall.svg");

    match machine().export_with_details(&output, "svg", "dot", 72.0, "") {
        Ok(()) => assert!(output.exists()),
        // Graphviz is not installed on this machine.
        Err(DiagramError::Spawn { program, .. }) => assert_eq!(program, "dot"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn export_writes_png_with_default_settings() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stall.png");

    match machine().export(&output) {
        Ok(()) => assert!(output.exists()),
        Err(DiagramError::Spawn { program, .. }) => assert_eq!(program, "dot"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn chatty_renderer_does_not_block_on_large_graphs() {
    use std::sync::mpsc;
    use std::time::Duration;

    let dir = TempDir::new().unwrap();
    let script = dir.path().join("chatty.sh");
    // Fill the stderr pipe before reading any of stdin.
    fs::write(
        &script,
        "head -c 200000 /dev/zero | tr '\\0' w >&2\ncat > /dev/null\n",
    )
    .unwrap();

    let transitions = (0..3000).map(|i| {
        Transition::new(
            State::new(i, format!("state-{i}")),
            Event::new(i, format!("event-{i}")),
            State::new(i + 1, format!("state-{}", i + 1)),
        )
    });
    let machine = StateMachine::new(delegate(OrderProcessor::default()), transitions);
    assert!(switchyard::diagram::to_dot(machine.table()).len() > 100_000);

    let renderer = GraphvizRenderer::with_program("sh").arg(&script);
    let options = RenderOptions::new(dir.path().join("big.png"));
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(machine.export_with(&renderer, &options));
    });

    let result = rx
        .recv_timeout(Duration::from_secs(30))
        .expect("render did not finish");
    result.unwrap();
}
