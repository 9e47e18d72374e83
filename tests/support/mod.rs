#![allow(dead_code)] // each integration test binary uses a subset of this

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Mock dxc: records its full argv into the `-Fo` output file, failing when
/// the input path carries the `broken` marker.
pub const MOCK_DXC: &str = r#"#!/bin/sh
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "-Fo" ]; then out="$a"; fi
  prev="$a"
done
case "$1" in
  *broken*) exit 1 ;;
esac
if [ -n "$out" ]; then
  printf 'frontend %s\n' "$*" > "$out"
fi
exit 0
"#;

/// Mock spirv-cross: copies the intermediate to `--output`, failing when the
/// recorded frontend invocation carries the `badback` marker.
pub const MOCK_SPIRV_CROSS: &str = r#"#!/bin/sh
in="$1"
out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
done
if [ -z "$out" ]; then exit 0; fi
if grep -q badback "$in"; then exit 1; fi
cp "$in" "$out"
"#;

/// Mock tool that never finishes in test time.
pub const MOCK_HUNG_TOOL: &str = "#!/bin/sh\nsleep 5\n";

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("it").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[cfg(unix)]
pub fn write_tool(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// A project tree in the conventional layout, with the mock toolchain under
/// `bin/`.
pub struct FakeProject {
    pub root: PathBuf,
}

#[cfg(unix)]
impl FakeProject {
    pub fn new(name: &str) -> Self {
        let root = scratch(name);
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::create_dir_all(root.join("source/shader/hlsl")).unwrap();
        write_tool(&root.join("bin/dxc"), MOCK_DXC);
        write_tool(&root.join("bin/spirv-cross"), MOCK_SPIRV_CROSS);
        Self { root }
    }

    pub fn add_source(&self, stem: &str) {
        fs::write(
            self.root.join(format!("source/shader/hlsl/{stem}.hlsl")),
            format!("// {stem}\nfloat4 main() : SV_Target {{ return 0; }}\n"),
        )
        .unwrap();
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.root.join("source/shader/glsl_generated")
    }

    pub fn intermediate_path(&self) -> PathBuf {
        self.root.join("tmp.spv")
    }

    /// Pipeline config pinned to an in-tree intermediate path so tests can
    /// assert its removal.
    pub fn config(&self) -> shadergen::PipelineConfig {
        shadergen::PipelineConfig::for_project(&self.root)
            .with_intermediate_path(self.intermediate_path())
    }
}

pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn first_line(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}
