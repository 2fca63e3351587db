//! Startup failure tests against the built binary.
//!
//! These tests run the `oms-hello` executable as a child process and check
//! how it exits when it cannot start serving.
//!
//! Run with: cargo test --test startup_tests
use std::net::TcpListener;
use std::process::{Command, Output, Stdio};

/// Run the server binary with the given arguments and wait for it to exit.
fn run_server(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oms-hello"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run oms-hello")
}

#[test]
fn test_port_in_use_exits_with_status_one() {
    // Hold the port for the lifetime of the test
    let held = TcpListener::bind("127.0.0.1:0").expect("Failed to reserve a port");
    let port = held.local_addr().unwrap().port().to_string();

    let output = run_server(&["--host", "127.0.0.1", "--port", &port]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Failed to bind"),
        "stderr should explain the bind failure, got: {}",
        stderr
    );
    assert!(stderr.contains(&port), "stderr should name the port, got: {}", stderr);

    drop(held);
}

#[test]
fn test_missing_config_file_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let output = run_server(&["--config", missing.to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Failed to read config file"),
        "stderr should explain the config failure, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_host_exits_with_status_one() {
    let output = run_server(&["--host", "not-an-ip", "--port", "0"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(
        stderr.contains("Invalid listen address"),
        "stderr should explain the address failure, got: {}",
        stderr
    );
}
