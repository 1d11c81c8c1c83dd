use crate::settings::RepoTarget;
use anyhow::{Context, bail};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Destination for rendered reports.
pub trait Publisher {
    fn publish(&self, file_name: &str, contents: &str) -> anyhow::Result<()>;
}

/// Prints reports instead of publishing them (`--dry-run`).
#[derive(Debug, Default)]
pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&self, file_name: &str, contents: &str) -> anyhow::Result<()> {
        println!("==> {file_name} <==\n{contents}");
        Ok(())
    }
}

/// Commits each report into a local clone of the report repository and
/// pushes it.
#[derive(Debug, Clone)]
pub struct GitPublisher {
    target: RepoTarget,
}

impl GitPublisher {
    pub fn new(target: RepoTarget) -> Self {
        Self { target }
    }

    /// Clone the remote if there is no local checkout, otherwise sync it.
    fn ready(&self) -> anyhow::Result<()> {
        let local = &self.target.local;
        if local.exists() {
            debug!("syncing {}", local.display());
            git(Some(local), &["switch", "main"])?;
            git(Some(local), &["pull"])?;
        } else {
            info!("cloning {} into {}", self.target.remote, local.display());
            let local = local.to_string_lossy();
            git(None, &["clone", self.target.remote.as_str(), &*local])?;
        }
        Ok(())
    }

    /// Write the report into the sub folder, returning its path relative to
    /// the repository root.
    fn write(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let relative = Path::new(&self.target.sub_folder).join(file_name);
        let path = self.target.local.join(&relative);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("could not write {}", path.display()))?;
        Ok(relative)
    }

    fn commit_and_push(&self, relative: &Path, file_name: &str) -> anyhow::Result<()> {
        let local = &self.target.local;
        let relative = relative.to_string_lossy();
        git(Some(local), &["add", &*relative])?;

        // `git diff --cached --quiet` exits 1 when something is staged.
        let staged = Command::new("git")
            .arg("-C")
            .arg(local)
            .args(["diff", "--cached", "--quiet"])
            .status()
            .context("could not run git")?;
        if staged.success() {
            info!("{file_name} unchanged, nothing to push");
            return Ok(());
        }

        let message = format!("Update {file_name}");
        git(Some(local), &["commit", "-m", message.as_str()])?;
        git(Some(local), &["push"])?;
        info!("published {relative}");
        Ok(())
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, file_name: &str, contents: &str) -> anyhow::Result<()> {
        self.ready()?;
        let relative = self.write(file_name, contents)?;
        self.commit_and_push(&relative, file_name)
    }
}

fn git(dir: Option<&Path>, args: &[&str]) -> anyhow::Result<Output> {
    let mut cmd = Command::new("git");
    if let Some(dir) = dir {
        cmd.arg("-C").arg(dir);
    }
    cmd.args(args);

    let output = cmd
        .output()
        .with_context(|| format!("could not run git {}", args.join(" ")))?;
    if !output.status.success() {
        bail!(
            "git {} failed ({}): {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(output)
}
