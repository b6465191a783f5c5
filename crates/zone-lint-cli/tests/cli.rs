//! End-to-end tests running the `zone-lint` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn zone_lint(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zone-lint"))
        .args(args)
        .current_dir(dir)
        .env("ZONE_LINT_CONFIG_DIR", dir.join(".no-global"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn clean_project_exits_zero() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "src/math.ts",
        "export const add = (a: number, b: number) => a + b;\n",
    );
    fs::write(
        tmp.path().join("zone-lint.toml"),
        "[rules]\n\"No console.log\" = \"error\"\n",
    )
    .unwrap();

    let output = zone_lint(tmp.path(), &["check", "--format", "compact"]);
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("[No console.log]"));
}

#[test]
fn error_violation_exits_one() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/app.ts", "export const run = () => {\n  debugger;\n};\n");

    let output = zone_lint(tmp.path(), &["check", "--format", "compact"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/app.ts:2: error [No debugger statements]"));
}

#[test]
fn json_report_is_grouped_by_zone() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "apps/web/index.ts", "console.log(1);\n");
    write(tmp.path(), "packages/ui/index.ts", "export {};\n");

    let output = zone_lint(tmp.path(), &["check", "--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files_checked"], 2);
    assert!(report["zones"]["ui"].as_array().unwrap().is_empty());
    let web = report["zones"]["web"].as_array().unwrap();
    assert!(web.iter().any(|v| v["rule"] == "No console.log" && v["line"] == 1));
}

#[test]
fn init_then_list_rules() {
    let tmp = TempDir::new().unwrap();

    assert!(zone_lint(tmp.path(), &["init"]).status.success());
    assert!(tmp.path().join("zone-lint.toml").exists());
    assert!(!zone_lint(tmp.path(), &["init"]).status.success());

    let output = zone_lint(tmp.path(), &["list-rules"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No unused variables"));
    assert!(stdout.contains("directory-naming"));
}
