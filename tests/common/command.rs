use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn modified_pair_dir(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join("a.txt"),
        "keep\nold\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("b.txt"),
        "keep\nnew\nmore\n".to_string(),
    ));

    workspace_dir
}

pub fn run_gdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gdiff").expect("Failed to find gdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gdiff_stdout(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_gdiff_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}

pub fn gdiff_colored_stdout(
    dir: &Path,
    args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = run_gdiff_command(dir, args);
    cmd.env_remove("NO_COLOR");
    cmd.env("CLICOLOR_FORCE", "1");

    let output = cmd.assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
