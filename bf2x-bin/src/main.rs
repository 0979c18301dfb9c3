use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use bf2x::{
    codegen::{self, Selection, Target},
    interpreter,
};
use clap::Parser;
use tracing::info;

mod run;

/// Compiles tape-machine programs (the eight operators `><+-.,[]`) into
/// standalone Python, Go, C++, C#, Lua, Ruby or Rust source.
#[derive(Parser, Debug)]
#[command(name = "bf2x", version, about)]
struct Cli {
    /// Source file to compile. Anything that isn't an operator is ignored.
    input: PathBuf,

    /// Target id (python, go, cpp, csharp, lua, ruby, rust) or menu key
    /// (1-7). `all` (or 0) generates every target.
    #[arg(short, long, value_name = "TARGET", default_value = "all")]
    target: Selection,

    /// Directory for generated files [default: the input's directory]
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Don't run the generated program for targets that have a run command
    #[arg(long)]
    no_run: bool,

    /// Print the generated program instead of writing it (single target only)
    #[arg(long, conflicts_with = "interpret")]
    stdout: bool,

    /// Execute the program in-process on stdin and stdout instead of
    /// generating code
    #[arg(long)]
    interpret: bool,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(io::stderr)
        .init();

    let raw = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    // Every operator is ASCII, so lossy decoding never drops one.
    let src = String::from_utf8_lossy(&raw);
    let tokens = bf2x::compile(&src);
    info!(tokens = tokens.len(), "compiled {}", cli.input.display());

    if cli.interpret {
        interpreter::execute(&tokens, io::stdin().lock(), io::stdout().lock())
            .context("execution failed")?;
        return Ok(());
    }

    if cli.stdout {
        let Selection::One(target) = cli.target else {
            bail!("--stdout needs a single target, not all of them");
        };
        let code = codegen::generate(target, &tokens);
        io::stdout()
            .write_all(code.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let base = cli
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no usable name")?;
    let out_dir = match &cli.out_dir {
        Some(dir) => dir.clone(),
        None => cli.input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    for (target, code) in codegen::generate_all(cli.target, &tokens) {
        let path = write_out(&out_dir, base, target, &code)?;
        println!("[ok] wrote {}", path.display());
        if !cli.no_run {
            run::try_run(target, &path);
        }
    }

    Ok(())
}

fn write_out(dir: &Path, base: &str, target: Target, code: &str) -> Result<PathBuf> {
    let path = dir.join(target.descriptor().file_name(base));
    fs::write(&path, code).with_context(|| format!("failed to write {}", path.display()))?;
    info!(%target, bytes = code.len(), "wrote {}", path.display());
    Ok(path)
}
