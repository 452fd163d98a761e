use assert_cmd::Command;
use std::path::Path;

pub fn textiq_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("textiq").unwrap();
    cmd.env("TEXTIQ_HOME", home);
    cmd.env_remove("TEXTIQ_CLIPBOARD");
    cmd.env_remove("TEXTIQ_LOG");
    cmd
}

/// Short id of the post saved by `textiq new`, read from its output
#[allow(dead_code)]
pub fn saved_id(stdout: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Saved post "))
        .expect("new should report the saved id")
        .trim()
        .to_string()
}
