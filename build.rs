// Copies the static site into `dist/` so the output directory is a
// self-contained deployable artifact.
use std::path::Path;
use std::{env, fs};

use fs_extra::dir::CopyOptions;

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Nothing to stage when compiling the wasm artifact itself.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().content_only(true);
        if let Err(e) = fs_extra::dir::copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to stage static site: {e}");
        }
    }
}
