use std::{
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use tracing::debug;

use crate::{
    config::PipelineConfig,
    error::{ShadergenError, ShadergenResult},
    expand::BuildTarget,
};

/// Compile one build target through the two-stage toolchain.
///
/// Runs the frontend (HLSL -> SPIR-V into the shared `intermediate` path),
/// then the backend (SPIR-V -> GLSL written to the target's output path),
/// checking each exit status. Tool stdout/stderr are inherited so
/// diagnostics reach the operator unparsed. The intermediate file is
/// overwritten, never deleted; its lifetime belongs to the run driver.
///
/// On success, returns the finalized output path for annotation.
pub fn compile_target(
    cfg: &PipelineConfig,
    target: &BuildTarget,
    intermediate: &Path,
) -> ShadergenResult<PathBuf> {
    let mut frontend = Command::new(&cfg.compiler);
    frontend
        .arg(&target.input_path)
        .args(["-T", target.profile.target_model])
        .args(["-E", target.profile.entry_point])
        .arg("-Fo")
        .arg(intermediate)
        .arg("-spirv")
        .arg("-I")
        .arg(&cfg.include_dir);
    for define in cfg.base_defines.iter().chain(&target.defines) {
        frontend.arg("-D").arg(define);
    }
    run_tool(cfg, &mut frontend, &target.output_path)?;

    let mut backend = Command::new(&cfg.cross_compiler);
    backend
        .arg(intermediate)
        .args(["--version", &cfg.feature_level])
        .arg("--output")
        .arg(&target.output_path);
    run_tool(cfg, &mut backend, &target.output_path)?;

    Ok(target.output_path.clone())
}

/// Verify both toolchain binaries can be spawned, before any target builds.
pub fn ensure_toolchain(cfg: &PipelineConfig) -> ShadergenResult<()> {
    if !tool_available(&cfg.compiler) {
        return Err(ShadergenError::config(format!(
            "shader compiler '{}' was not found (expected a dxc-compatible binary)",
            cfg.compiler.display()
        )));
    }
    if !tool_available(&cfg.cross_compiler) {
        return Err(ShadergenError::config(format!(
            "cross-compiler '{}' was not found (expected a spirv-cross-compatible binary)",
            cfg.cross_compiler.display()
        )));
    }
    Ok(())
}

/// Return `true` when `tool` exists and can be spawned.
///
/// Only spawnability is probed; the exit status is ignored because not every
/// toolchain binary understands `--version`.
pub fn tool_available(tool: &Path) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn run_tool(cfg: &PipelineConfig, cmd: &mut Command, output: &Path) -> ShadergenResult<()> {
    let command = render_command(cmd);
    debug!(%command, "running external tool");

    let status = match cfg.tool_timeout {
        None => cmd.status().map_err(|e| {
            anyhow::anyhow!(
                "failed to spawn '{}' (is it installed?): {e}",
                cmd.get_program().to_string_lossy()
            )
        })?,
        Some(limit) => wait_with_timeout(cmd, limit, &command, output)?,
    };

    if !status.success() {
        return Err(ShadergenError::compile(output, command));
    }
    Ok(())
}

/// Spawn `cmd` and poll until it exits or `limit` elapses; expiry kills the
/// child and is reported as a compile failure.
fn wait_with_timeout(
    cmd: &mut Command,
    limit: Duration,
    command: &str,
    output: &Path,
) -> ShadergenResult<ExitStatus> {
    let mut child = cmd.spawn().map_err(|e| {
        anyhow::anyhow!(
            "failed to spawn '{}' (is it installed?): {e}",
            cmd.get_program().to_string_lossy()
        )
    })?;

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child
            .try_wait()
            .with_context(|| format!("failed to wait for '{command}'"))?
        {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ShadergenError::compile(
                output,
                format!("{command} (timed out after {limit:?})"),
            ));
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

/// Render a command line for diagnostics.
fn render_command(cmd: &Command) -> String {
    let mut out = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        out.push(' ');
        out.push_str(&arg.to_string_lossy());
    }
    out
}
