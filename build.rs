use std::{env, fs, path::Path};

use anyhow::{Context, Result};

const CAPACITY_KEY: &str = "BUF_STREAM_CAPACITY";
const DEFAULT_CAPACITY: usize = u16::MAX as usize;

fn capacity() -> Result<usize> {
    println!("cargo:rerun-if-env-changed={}", CAPACITY_KEY);
    match env::var(CAPACITY_KEY) {
        Ok(val) => {
            let capacity = val
                .parse::<usize>()
                .with_context(|| format!("{} must be a number, get: {}", CAPACITY_KEY, val))?;
            anyhow::ensure!(capacity > 0, "{} must not be 0", CAPACITY_KEY);
            Ok(capacity)
        }
        Err(_) => Ok(DEFAULT_CAPACITY),
    }
}

fn main() -> Result<()> {
    let out_dir = env::var_os("OUT_DIR").context("OUT_DIR not found")?;
    let dest_path = Path::new(&out_dir).join("consts.rs");

    let content = format!(
        "/// Capacity in bytes of each of the two caches unless configured otherwise.\npub const DEFAULT_CAPACITY: usize = {};\n",
        capacity()?
    );

    if fs::read_to_string(&dest_path).ok().as_deref() == Some(content.as_str()) {
        return Ok(());
    }
    fs::write(&dest_path, content).context("Failed to write consts.rs")?;
    Ok(())
}
