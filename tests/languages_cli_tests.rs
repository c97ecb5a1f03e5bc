mod common;

use common::run_scriptbot;

#[test]
fn languages_lists_the_table() {
    let output = run_scriptbot(&["languages"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "languages should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(stdout.contains("English"));
    assert!(stdout.contains("zh-Hans"));
    assert!(stdout.contains("Zulu"));
}

#[test]
fn languages_works_without_config_or_credentials() {
    // The table is a process-wide constant; no settings are loaded for it.
    let output = run_scriptbot(&["languages"]);

    assert!(output.status.success());
}
