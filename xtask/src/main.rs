mod ladder;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the highest arity covered by the pipeN functions.
    PrintArity,
    /// Regenerate pipekit/src/ladder.rs.
    GenLadder {
        #[arg(long, default_value_t = pipekit::MAX_ARITY)]
        max_arity: usize,
    },
    /// Fail if pipekit/src/ladder.rs differs from the generator output.
    CheckLadder,
}

fn ladder_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("pipekit")
        .join("src")
        .join("ladder.rs")
}

fn write_ladder(path: &Path, max_arity: usize) -> anyhow::Result<()> {
    let src = ladder::render(max_arity)?;
    fs::write(path, src).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Only the arity `pipekit::MAX_ARITY` promises may be generated; anything else
/// would drop public `pipeN` functions or leave the constant out of date.
fn ensure_crate_arity(max_arity: usize) -> anyhow::Result<()> {
    if max_arity != pipekit::MAX_ARITY {
        anyhow::bail!(
            "--max-arity {max_arity} does not match pipekit::MAX_ARITY ({}); change the constant first",
            pipekit::MAX_ARITY
        );
    }
    Ok(())
}

fn check_ladder(path: &Path, max_arity: usize) -> anyhow::Result<()> {
    let committed =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if committed != ladder::render(max_arity)? {
        anyhow::bail!(
            "{} is stale; run `cargo xtask gen-ladder`",
            path.display()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintArity => {
            println!("{}", pipekit::MAX_ARITY);
        }
        Command::GenLadder { max_arity } => {
            ensure_crate_arity(max_arity)?;
            let path = ladder_path();
            write_ladder(&path, max_arity)?;
            println!("wrote {} (arities 0..={max_arity})", path.display());
        }
        Command::CheckLadder => {
            check_ladder(&ladder_path(), pipekit::MAX_ARITY)?;
            println!("ladder is up to date");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_ladder, ensure_crate_arity, write_ladder};

    #[test]
    fn written_ladder_passes_check() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("ladder.rs");
        write_ladder(&path, 3).unwrap();
        check_ladder(&path, 3).unwrap();
        assert!(check_ladder(&path, 4).is_err());
    }

    #[test]
    fn missing_file_fails_check() {
        let td = tempfile::tempdir().unwrap();
        let err = check_ladder(&td.path().join("nope.rs"), 1).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn generation_requires_crate_arity() {
        ensure_crate_arity(pipekit::MAX_ARITY).unwrap();
        let err = ensure_crate_arity(pipekit::MAX_ARITY - 1).unwrap_err();
        assert!(err.to_string().contains("does not match pipekit::MAX_ARITY"));
    }
}
