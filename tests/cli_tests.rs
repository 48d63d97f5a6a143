use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    doc_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let doc_path = dir.path().join("doc.txt");
        fs::write(
            &doc_path,
            "Cat. cat CAT!\nthe quick brown fox jumps over the lazy dog\n",
        )
        .unwrap();
        Self { dir, doc_path }
    }

    fn hashtune(&self, args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_hashtune"))
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run hashtune")
    }
}

#[test]
fn test_inspect_prints_raw_report() {
    let ctx = TestContext::new();
    let out = ctx.hashtune(&["inspect", ctx.doc_path.to_str().unwrap(), "--raw"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    // CAT, THE, QUICK, BROWN, FOX, JUMPS, OVER, LAZY, DOG
    assert!(stdout.contains("size = 9"), "stdout: {}", stdout);
    assert!(stdout.contains("efficiencyFactor = "));
    assert!(stdout.contains("Chain lengths per bucket"));
}

#[test]
fn test_inspect_missing_document_fails() {
    let ctx = TestContext::new();
    let out = ctx.hashtune(&["inspect", "does_not_exist.txt"]);
    assert!(!out.status.success());
}

#[test]
fn test_search_writes_artifacts_in_working_dir() {
    let ctx = TestContext::new();
    let out = ctx.hashtune(&[
        "search",
        ctx.doc_path.to_str().unwrap(),
        "--population-size",
        "4",
        "--max-generations",
        "2",
        "--threads",
        "1",
        "-S",
        "5",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let root = ctx.dir.path();
    assert!(root.join("checkpoints/latest_checkpoint.json").is_file());
    assert!(root.join("checkpoints/gen_1_fitness.csv").is_file());
    assert!(root.join("checkpoints/gen_1_fitness.svg").is_file());
    assert!(root.join("logs/evaluation_log_gen_0.txt").is_file());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FINAL RESULT"));
}

#[test]
fn test_search_rejects_invalid_config() {
    let ctx = TestContext::new();
    let out = ctx.hashtune(&[
        "search",
        ctx.doc_path.to_str().unwrap(),
        "--population-size",
        "0",
    ]);
    assert!(!out.status.success());
}
