//! The binary must refuse to start without Spotify credentials.

use std::process::Command;

fn proxy_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_track-preview-proxy"));
    // Keep any developer .env out of reach
    cmd.current_dir(std::env::temp_dir())
        .env_remove("SPOTIFY_CLIENT_ID")
        .env_remove("SPOTIFY_CLIENT_SECRET")
        // A port nobody else uses, in case the guard ever regresses
        .env("PORT", "0");
    cmd
}

#[test]
fn exits_non_zero_without_credentials() {
    let output = proxy_command().output().expect("failed to run binary");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SPOTIFY_CLIENT_ID"));
    assert!(stderr.contains("SPOTIFY_CLIENT_SECRET"));
}

#[test]
fn exits_non_zero_with_empty_secret() {
    let output = proxy_command()
        .env("SPOTIFY_CLIENT_ID", "some-id")
        .env("SPOTIFY_CLIENT_SECRET", "")
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SPOTIFY_CLIENT_SECRET"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("started at"));
}

#[test]
fn exits_non_zero_with_empty_client_id() {
    let output = proxy_command()
        .env("SPOTIFY_CLIENT_ID", "")
        .env("SPOTIFY_CLIENT_SECRET", "some-secret")
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}
