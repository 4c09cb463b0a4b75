use super::error::{GcloudError, GcloudResult};
use std::path::Path;
use std::process::{Command, Output};
use std::{ffi::OsStr, io};

fn run<I, S>(args: I) -> GcloudResult<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match Command::new("gcloud").args(args).output() {
        Ok(output) => Ok(output),
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound => Err(GcloudError::GcloudNotInstalled),
            _ => Err(GcloudError::Io(err)),
        },
    }
}

fn authenticated() -> GcloudResult<bool> {
    let output = run(["auth", "list", "--format=value(account)"])?;
    let accounts = String::from_utf8_lossy(&output.stdout);

    Ok(output.status.success() && !accounts.trim().is_empty())
}

fn gcloud_raw<I, S>(args: I) -> GcloudResult<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    if !authenticated()? {
        return Err(GcloudError::NotLoggedIn);
    }

    let output = run(args)?;

    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    Err(GcloudError::CommandFailure {
        code: output.status.code(),
        stderr,
    })
}

pub fn gcloud_lines<I, S>(args: I) -> GcloudResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let stdout = gcloud_raw(args)?;
    let text = String::from_utf8_lossy(&stdout);

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

pub fn gcloud_unit<I, S>(args: I) -> GcloudResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    gcloud_raw(args).map(|_| ())
}

/// Runs gcloud with inherited stdio so the user sees its live output.
pub fn gcloud_streamed<I, S>(args: I, dir: &Path) -> GcloudResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new("gcloud")
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => GcloudError::GcloudNotInstalled,
            _ => GcloudError::Io(err),
        })?;

    if status.success() {
        return Ok(());
    }

    Err(GcloudError::CommandFailure {
        code: status.code(),
        stderr: "see the gcloud output above".to_owned(),
    })
}
