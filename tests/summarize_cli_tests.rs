mod common;

use common::run_scriptbot;

#[test]
fn summarize_subcommand_is_available() {
    let output = run_scriptbot(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_rejects_url_without_separator() {
    // Fails during identifier extraction, before any network request.
    let output = run_scriptbot(&["summarize", "https://youtu.be/abc123"]);

    assert!(
        !output.status.success(),
        "summarize should fail for a URL without '='\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not contain"),
        "expected separator error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_rejects_unknown_language() {
    let output = run_scriptbot(&[
        "summarize",
        "https://youtube.com/watch?v=abc123",
        "--language",
        "Klingon",
    ]);

    assert!(
        !output.status.success(),
        "summarize should fail for an unknown language\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown language"),
        "expected unknown language error, got:\n{}",
        stderr
    );
}
