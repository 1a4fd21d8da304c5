use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

fn reacher_main() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reacher_main"));
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.env("RUST_LOG", "info");
    cmd
}

/// Run to completion and return the exit status with the captured stdout and stderr.
fn run_with_timeout(mut cmd: Command, timeout: Duration) -> (ExitStatus, String, String) {
    let mut child = cmd.spawn().expect("Failed to spawn reacher_main process");
    let status = match child.wait_timeout(timeout).expect("Failed to wait for reacher_main") {
        Some(status) => status,
        None => {
            child.kill().expect("Failed to kill timed-out process");
            panic!("reacher_main process timed out after {timeout:?}");
        }
    };

    let mut stdout = String::new();
    let mut stderr = String::new();
    child
        .stdout
        .take()
        .expect("Failed to capture stdout")
        .read_to_string(&mut stdout)
        .unwrap();
    child
        .stderr
        .take()
        .expect("Failed to capture stderr")
        .read_to_string(&mut stderr)
        .unwrap();
    eprintln!("--- reacher_main STDOUT ---\n{stdout}");
    eprintln!("--- reacher_main STDERR ---\n{stderr}");
    (status, stdout, stderr)
}

#[test]
fn test_reacher_main_executes_successfully() {
    let mut cmd = reacher_main();
    cmd.args(["--episodes", "2", "--seed", "0"]);
    let (status, stdout, _) = run_with_timeout(cmd, Duration::from_secs(30));

    assert!(
        status.success(),
        "reacher_main process exited with error: {:?}",
        status.code()
    );
    assert!(stdout.contains("Episode 1 finished"), "missing first episode summary");
    assert!(stdout.contains("Episode 2 finished"), "missing second episode summary");
    assert!(stdout.contains("Run finished after 2 episode(s)"));
}

#[test]
fn test_reacher_main_uses_config_file() {
    let path = std::env::temp_dir().join(format!("reacher-main-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "env": { "max_steps": 3 } }"#).unwrap();

    let mut cmd = reacher_main();
    cmd.args(["--policy", "zero", "--seed", "1", "--config"]).arg(&path);
    let (status, stdout, _) = run_with_timeout(cmd, Duration::from_secs(30));
    std::fs::remove_file(&path).unwrap();

    assert!(status.success());
    assert!(stdout.contains("steps=3"), "episode should stop after 3 steps");
}

#[test]
fn test_reacher_main_rejects_invalid_config() {
    let path = std::env::temp_dir().join(format!("reacher-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "env": { "frame_skip": 0 } }"#).unwrap();

    let mut cmd = reacher_main();
    cmd.arg("--config").arg(&path);
    let (status, _, stderr) = run_with_timeout(cmd, Duration::from_secs(30));
    std::fs::remove_file(&path).unwrap();

    assert!(!status.success());
    assert!(stderr.contains("frame_skip"), "error should name the bad field");
}

#[test]
fn test_watch_requires_config() {
    let mut cmd = reacher_main();
    cmd.arg("--watch");
    let (status, _, _) = run_with_timeout(cmd, Duration::from_secs(30));
    assert!(!status.success());
}

// Polling stand-in for a wait with timeout, which std::process::Child lacks.
trait ChildExt {
    fn wait_timeout(&mut self, duration: Duration) -> std::io::Result<Option<ExitStatus>>;
}

impl ChildExt for Child {
    fn wait_timeout(&mut self, duration: Duration) -> std::io::Result<Option<ExitStatus>> {
        let start_time = Instant::now();
        loop {
            match self.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start_time.elapsed() > duration {
                        return Ok(None);
                    }
                    thread::sleep(Duration::from_millis(50));
                }
            }
        }
    }
}
