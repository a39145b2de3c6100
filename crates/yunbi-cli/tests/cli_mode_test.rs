use std::process::Command;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn cli_private_command_without_credentials_fails_fast() {
    let binary_path = env!("CARGO_BIN_EXE_yunbi");

    // The fixture points at a closed port; the gate must trip before any connect.
    let output = Command::new(binary_path)
        .arg("--config")
        .arg(fixture("public.yaml"))
        .arg("me")
        .env_remove("YUNBI_ACCESS_KEY")
        .env_remove("YUNBI_SECRET_KEY")
        .output()
        .expect("Failed to start yunbi binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("access_key and secret_key required"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn cli_rejects_missing_config_file() {
    let binary_path = env!("CARGO_BIN_EXE_yunbi");

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(fixture("does-not-exist.yaml"))
        .arg("markets")
        .output()
        .expect("Failed to start yunbi binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load settings"), "unexpected stderr: {stderr}");
}
