use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const SHORTEST_PATHS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/data/shortest_paths.txt");

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("routegraph-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn routegraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routegraph"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn dijkstra_reports_every_graph() {
    let output = routegraph(&["dijkstra", SHORTEST_PATHS, "--pair", "1", "4"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Aurora and 85th"));
    assert!(text.contains("aaa"));
    assert!(text.contains("   1         4         40         1 3 2 4"));
}

#[test]
fn graph_over_vertex_cap_stops_cleanly() {
    let config = scratch_file("cap2.json", r#"{ "max_vertices": 2 }"#);
    let output = routegraph(&["--config", config.to_str().unwrap(), "dijkstra", SHORTEST_PATHS]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("exceeds the limit of 2"));
}

#[test]
fn vertex_cap_keeps_graphs_read_before_it() {
    let config = scratch_file("cap3.json", r#"{ "max_vertices": 3 }"#);
    let input = scratch_file(
        "cap3.txt",
        "2\nsmall a\nsmall b\n1 2 5\n0 0 0\n4\nw\nx\ny\nz\n1 2 1\n0 0 0\n",
    );
    let output = routegraph(&[
        "--config",
        config.to_str().unwrap(),
        "dijkstra",
        input.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("small a"));
    assert!(!text.contains("\nw\n"));
}

#[test]
fn zero_count_ends_the_file() {
    let input = scratch_file("zero.txt", "2\na\nb\n1 2\n0 0\n0\n3\nx\ny\nz\n2 3\n0 0\n");
    let output = routegraph(&["dfs", input.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Depth-first ordering: 1 2"));
    assert!(!text.contains("Node1         x"));
    assert_eq!(text.matches("Depth-first ordering:").count(), 1);
}

#[test]
fn truncated_label_list_fails() {
    let input = scratch_file("truncated.txt", "2\na\n");
    let output = routegraph(&["dfs", input.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unexpected end of input while reading vertex label"));
}

#[test]
fn non_integer_token_fails() {
    let input = scratch_file("token.txt", "2\na\nb\n1 two 3\n0 0 0\n");
    let output = routegraph(&["dijkstra", input.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected an integer, found `two`"));
}

#[test]
fn missing_input_fails() {
    let output = routegraph(&["dfs", "/nonexistent/routegraph-input.txt"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}
