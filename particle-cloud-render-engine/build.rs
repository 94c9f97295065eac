// build.rs
use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let default_presets = serde_json::json!({
        "shape": "heart",
        "colour_index": 0,
        "point_count": 8000,
        "mode": "pointer"
    });

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let config_dir = manifest_dir.join("assets").join("config");
    fs::create_dir_all(&config_dir).ok();

    // Seed the presets file for first runs; a hand-edited file is kept.
    let presets_path = config_dir.join("scene_presets.json");
    if !presets_path.exists() {
        let json_content = serde_json::to_string_pretty(&default_presets).unwrap();
        fs::write(&presets_path, &json_content)
            .expect("Failed to write scene_presets.json to assets");
        println!("cargo:warning=Generated default assets/config/scene_presets.json");
    }
}
