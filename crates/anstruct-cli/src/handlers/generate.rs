//! Generate command handler.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use anstruct_gateway::{
    BlueprintClient, BlueprintError, clean_output, validate_blueprint, wrap_single_root,
};

/// Root folder name used when the model returns more than one top-level entry.
const DEFAULT_ROOT: &str = "project";

/// File name used when `--out` names a directory.
const DEFAULT_OUTPUT_FILE: &str = "aistruct.struct";

const BLUEPRINT_EXTENSION: &str = "struct";

/// Request a blueprint from `endpoint` and print it, or write it to `out`.
pub async fn execute(
    prompt: &[String],
    endpoint: String,
    raw: bool,
    timeout_secs: u64,
    out: Option<&Path>,
) -> Result<()> {
    let prompt = prompt.join(" ");
    let target = out.map(resolve_output_path).transpose()?;
    let client = BlueprintClient::with_timeout(endpoint, Duration::from_secs(timeout_secs))?;
    debug!(endpoint = %client.endpoint(), timeout_secs, "Requesting blueprint");

    let blueprint = client.generate_blueprint(&prompt).await?;
    let rendered = render(&blueprint, raw).context("gateway returned an unusable blueprint")?;

    match target {
        Some(path) => {
            write_blueprint(&path, &rendered)?;
            info!("Blueprint written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Clean and check the gateway output. `raw` output is passed through as-is.
fn render(blueprint: &str, raw: bool) -> Result<String, BlueprintError> {
    if raw {
        return Ok(blueprint.to_string());
    }
    let text = wrap_single_root(&clean_output(blueprint), DEFAULT_ROOT);
    validate_blueprint(&text)?;
    Ok(text)
}

/// Turn an `--out` argument into the `.struct` file to write.
///
/// A trailing separator or an existing directory gets `aistruct.struct`
/// inside it; a bare name gets the `.struct` extension. Any other extension
/// is rejected.
fn resolve_output_path(out: &Path) -> Result<PathBuf> {
    let arg = out.to_string_lossy();
    let path: PathBuf = out.components().collect();

    if path.extension().is_some_and(|ext| ext == BLUEPRINT_EXTENSION) {
        return Ok(path);
    }
    if arg.ends_with('/') || arg.ends_with('\\') || path.is_dir() {
        return Ok(path.join(DEFAULT_OUTPUT_FILE));
    }
    if path.extension().is_none() {
        return Ok(path.with_extension(BLUEPRINT_EXTENSION));
    }
    bail!("output must end with .{BLUEPRINT_EXTENSION}: {}", out.display())
}

fn write_blueprint(path: &Path, blueprint: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, format!("{blueprint}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}
