//! Invocation of the external PlantUML renderer.
//!
//! The renderer is an opaque collaborator: it receives a diagram description
//! and a target name and produces an image file. Nothing about the image is
//! inspected here.

use anyhow::{Context, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct PlantUml {
    jar: PathBuf,
}

impl PlantUml {
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self { jar: jar.into() }
    }

    /// Write `<name>.puml` under `out_dir` and run PlantUML over it,
    /// producing `<name>.png` next to it.
    pub fn render(&self, diagram: &str, out_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("create output dir {}", out_dir.display()))?;

        let source = out_dir.join(format!("{name}.puml"));
        fs::write(&source, diagram).with_context(|| format!("write {}", source.display()))?;

        let status = Command::new("java")
            .arg("-jar")
            .arg(&self.jar)
            .arg("-tpng")
            .arg(&source)
            .arg("-o")
            .arg(out_dir)
            .status()
            .with_context(|| format!("run plantuml jar {}", self.jar.display()))?;

        if !status.success() {
            bail!("plantuml exited with {} for {}", status, source.display());
        }

        Ok(out_dir.join(format!("{name}.png")))
    }
}
