//! find command - List env files below a directory

use std::path::Path;

use anyhow::Result;

use crate::cli::Context;
use crate::core::codec;
use crate::ui::output::{self, Role};

/// List env files under `root` (or the working directory).
pub fn find(ctx: &Context, root: Option<&Path>) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let root = match root {
        Some(r) if r.is_absolute() => r.to_path_buf(),
        Some(r) => cwd.join(r),
        None => cwd,
    };

    let files = codec::find_env_files(&root)?;
    if files.is_empty() {
        output::print(
            format!("No env files found under {}.", root.display()),
            ctx.verbosity(),
        );
        return Ok(());
    }

    let palette = ctx.palette();
    for file in files {
        let shown = file.strip_prefix(&root).unwrap_or(&file);
        println!("{}", palette.paint(Role::Local, &shown.display().to_string()));
    }
    Ok(())
}
