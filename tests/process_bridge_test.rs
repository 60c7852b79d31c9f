//! Process bridge against real child processes
#![cfg(unix)]

use serde_json::json;
use tempfile::TempDir;
use techlint_core::{
    AnalyzerConfig, Config, Dispatcher, Error, InvocationRequest, InvocationResult, ProcessBridge,
    Transport,
};
use techlint_workspace::{sh_analyzer, write_target};

#[tokio::test]
async fn test_foo_cs_scenario() {
    let bridge = ProcessBridge::new(sh_analyzer(
        "fake",
        r#"[ "$1" = Foo.cs ] && [ "$2" = 42 ] || { echo "bad args: $*" >&2; exit 9; }
printf '[{"line":3,"message":"unused variable"}]'"#,
    ));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let result = bridge.invoke(&request).await.unwrap();

    let issues = result.issues().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].as_value(),
        &json!({"line": 3, "message": "unused variable"})
    );
}

#[tokio::test]
async fn test_sentinel_ignores_stderr() {
    let bridge = ProcessBridge::new(sh_analyzer(
        "fake",
        "echo 'warning CS0168' >&2; printf '  err  \\n'",
    ));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let result = bridge.invoke(&request).await.unwrap();
    assert_eq!(result, InvocationResult::AnalysisFailed);
}

#[tokio::test]
async fn test_non_zero_exit_carries_stderr() {
    let bridge = ProcessBridge::new(sh_analyzer(
        "fake",
        "echo '[]'; printf 'project not found\\nsearched: /src\\n' >&2; exit 1",
    ));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    match bridge.invoke(&request).await.unwrap_err() {
        Error::ChildRuntimeFailure { exit_code, stderr } => {
            assert_eq!(exit_code, 1);
            assert_eq!(stderr, "project not found\nsearched: /src\n");
        }
        other => panic!("expected runtime failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_truncated_json_is_protocol_violation() {
    let bridge = ProcessBridge::new(sh_analyzer("fake", r#"printf '[{"line":3,"mess'"#));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let err = bridge.invoke(&request).await.unwrap_err();
    assert!(err.is_protocol_violation());
}

#[tokio::test]
async fn test_missing_executable() {
    let bridge = ProcessBridge::new(
        AnalyzerConfig::new("ghost", "techlint-definitely-missing-analyzer").with_extensions(["cs"]),
    );
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let err = bridge.invoke(&request).await.unwrap_err();
    assert!(matches!(err, Error::LaunchFailure { .. }));
}

#[tokio::test]
async fn test_path_transport_leaves_stdin_empty() {
    let bridge = ProcessBridge::new(sh_analyzer(
        "fake",
        r#"if [ -n "$(cat)" ]; then exit 5; fi; echo '[]'"#,
    ));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let result = bridge.invoke(&request).await.unwrap();
    assert_eq!(result, InvocationResult::Issues(Vec::new()));
}

#[tokio::test]
async fn test_stdin_transport_streams_content() {
    let dir = TempDir::new().unwrap();
    let target = write_target(dir.path(), "Foo.cs", "class Foo {}").unwrap();
    let analyzer = sh_analyzer(
        "fake",
        r#"content=$(cat); printf '[{"message":"%s"}]' "$content""#,
    )
    .with_transport(Transport::Stdin);
    let bridge = ProcessBridge::new(analyzer);
    let request = InvocationRequest::new(&target, "42").unwrap();

    let result = bridge.invoke(&request).await.unwrap();
    assert_eq!(result.issues().unwrap()[0].message(), Some("class Foo {}"));
}

#[tokio::test]
async fn test_large_output_keeps_order_while_stderr_floods() {
    let script = r#"i=0
printf '['
while [ $i -lt 5000 ]; do
  [ $i -gt 0 ] && printf ','
  printf '{"line":%d}' $i
  echo "diagnostic noise for line $i padded out so stderr overflows the pipe buffer" >&2
  i=$((i+1))
done
printf ']'"#;
    let bridge = ProcessBridge::new(sh_analyzer("fake", script).with_timeout_secs(60));
    let request = InvocationRequest::new("Foo.cs", "42").unwrap();

    let result = bridge.invoke(&request).await.unwrap();

    let lines: Vec<u64> = result
        .issues()
        .unwrap()
        .iter()
        .map(|issue| issue.line().unwrap())
        .collect();
    assert_eq!(lines, (0..5000).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_repeated_invocations_are_identical() {
    let bridge = ProcessBridge::new(sh_analyzer(
        "fake",
        r#"printf '[{"file":"%s","id":"%s"},{"line":1}]' "$1" "$2""#,
    ));
    let request = InvocationRequest::new("Foo.cs", 42u64).unwrap();

    let (first, second) = tokio::join!(bridge.invoke(&request), bridge.invoke(&request));
    let third = bridge.invoke(&request).await.unwrap();

    let first = first.unwrap();
    assert_eq!(first, second.unwrap());
    assert_eq!(first, third);
    assert_eq!(
        first.issues().unwrap()[0].as_value(),
        &json!({"file": "Foo.cs", "id": "42"})
    );
}

#[tokio::test]
async fn test_dispatcher_uses_discovered_config() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        analyzers: vec![sh_analyzer("fake", r#"printf '[{"message":"%s"}]' "$2""#)],
        source: None,
    };
    config
        .save_to_file(&dir.path().join(".techlint.json"))
        .unwrap();
    let target = write_target(dir.path(), "Player.cs", "class Player {}").unwrap();

    let dispatcher = Dispatcher::new(Config::discover(dir.path()).unwrap()).unwrap();
    let request = InvocationRequest::new(&target, "user-7").unwrap();

    let result = dispatcher.dispatch(&request).await.unwrap();
    assert_eq!(result.issues().unwrap()[0].message(), Some("user-7"));

    let other = write_target(dir.path(), "notes.txt", "hello").unwrap();
    let request = InvocationRequest::new(&other, "user-7").unwrap();
    assert!(matches!(
        dispatcher.dispatch(&request).await.unwrap_err(),
        Error::UnsupportedFile(_)
    ));
}
