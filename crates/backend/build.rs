use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../db.json");

    // OUT_DIR is target/<profile>/build/backend-xxx/out, files go to target/<profile>
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for name in ["config.toml", "db.json"] {
        let source = workspace_root.join(name);
        if source.exists() {
            let dest = target_dir.join(name);
            fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy {name}: {e}"));
        } else {
            println!("cargo:warning={name} not found at {source:?}, using defaults");
        }
    }
}
