use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shadergen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate the GLSL shader catalog (requires dxc and spirv-cross).
    Generate(GenerateArgs),
    /// Stamp provenance annotations over a shader source tree.
    Annotate(AnnotateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Project root holding bin/ and source/shader/.
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// JSON manifest overriding toolchain paths and/or the catalog.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnnotateArgs {
    /// Project root (used when ROOT is omitted).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Tree to annotate. Defaults to the project's shader source tree.
    root: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Annotate(args) => cmd_annotate(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = shadergen::PipelineConfig::for_project(&args.project_root);
    let mut catalog = shadergen::default_catalog();

    if let Some(path) = &args.manifest {
        let manifest = shadergen::Manifest::from_path(path)
            .with_context(|| format!("load manifest '{}'", path.display()))?;
        if let Some(shaders) = manifest.apply(&args.project_root, &mut cfg) {
            catalog = shaders;
        }
    }

    let stats = shadergen::run_generate(&cfg, &catalog)?;
    eprintln!(
        "generated {} shaders from {} catalog entries into '{}'",
        stats.targets,
        stats.entries,
        cfg.generated_dir.display()
    );
    Ok(())
}

fn cmd_annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let root = args
        .root
        .unwrap_or_else(|| shadergen::PipelineConfig::for_project(&args.project_root).include_dir);

    let annotated = shadergen::annotate_tree(&root)?;
    eprintln!("annotated {annotated} files under '{}'", root.display());
    Ok(())
}
