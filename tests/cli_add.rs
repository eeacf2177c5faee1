//! `lumin add` end to end

mod common;

use common::*;

#[test]
fn add_folder_writes_assets_sources_and_exports() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);
    env.write_file("icons/star-bold.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons"]);

    assert!(result.success, "add failed:\n{}", result.combined_output());
    for path in [
        "src/assets/regular/star.svg",
        "src/assets/thin/star-thin.svg",
        "src/assets/light/star-light.svg",
        "src/assets/bold/star-bold.svg",
        "src/assets/fill/star-fill.svg",
        "src/assets/duotone/star-duotone.svg",
        "src/defs/Star.tsx",
        "src/csr/Star.tsx",
        "src/ssr/Star.tsx",
    ] {
        assert!(env.exists(path), "missing {}", path);
    }
    assert_eq!(env.read_file("src/assets/regular/star.svg"), STAR_SVG);
    assert_eq!(
        env.read_file("src/index.ts"),
        "export * from \"./csr/Star\";\n"
    );
    assert_eq!(env.read_file("src/ssr/index.ts"), "export * from \"./Star\";\n");

    let defs = env.read_file("src/defs/Star.tsx");
    assert!(defs.contains("[\"regular\", <>"));
    assert!(defs.contains("fill={color}"));
    assert!(!defs.contains("<svg"));

    // partial weights are reported, not fatal
    assert!(result.stderr.contains("Star"), "stderr:\n{}", result.stderr);
}

#[test]
fn add_keeps_existing_export_lines() {
    let env = TestEnv::new();
    env.write_file("src/index.ts", "export * from \"./lib\";");
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "--folder", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        env.read_file("src/index.ts"),
        "export * from \"./lib\";\nexport * from \"./csr/Star\";\n"
    );
}

#[test]
fn add_twice_skips_existing_icon() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);

    assert!(env.run(&["add", "-f", "icons"]).success);
    let result = env.run(&["add", "-f", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("already exists"),
        "stderr:\n{}",
        result.stderr
    );
    assert_eq!(
        env.read_file("src/index.ts").matches("./csr/Star").count(),
        1
    );
}

#[test]
fn add_overwrite_replaces_existing_icon() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);
    assert!(env.run(&["add", "-f", "icons"]).success);

    env.write_file("icons/star.svg", MOON_SVG);
    let result = env.run(&["add", "-f", "icons", "--overwrite"]);

    assert!(result.success, "{}", result.combined_output());
    let asset = env.read_file("src/assets/regular/star.svg");
    assert!(asset.contains("viewBox=\"0 0 24 24\""));
    assert!(asset.contains("M128 24"));
    assert!(
        result.stderr.contains("adjusting viewBox from \"0 0 256 256\""),
        "stderr:\n{}",
        result.stderr
    );
    assert_eq!(
        env.read_file("src/index.ts").matches("./csr/Star").count(),
        1
    );
}

#[test]
fn add_dry_run_writes_nothing() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);
    let before = env.files();

    let result = env.run(&["add", "-f", "icons", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(env.files(), before);
    assert!(result.stdout.contains("Star"));
    assert!(result.stdout.contains("src/csr/Star.tsx"));
}

#[test]
fn add_dry_run_render_prints_svg() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons", "--dry-run", "--render"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(result.stdout.contains("viewBox=\"0 0 24 24\""));
    assert!(result.stdout.contains("fill=\"currentColor\""));
}

#[test]
fn add_render_requires_dry_run() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons", "--render"]);

    assert!(!result.success);
    assert!(!env.exists("src"));
}

#[test]
fn add_single_icon_uses_given_name() {
    let env = TestEnv::new();
    env.write_file("drawing.svg", STAR_SVG);

    let result = env.run(&["add", "-i", "drawing.svg", "-n", "lm-3-squares"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("src/assets/regular/lm-3-squares.svg"));
    assert!(env.exists("src/assets/bold/lm-3-squares-bold.svg"));
    assert!(env.exists("src/csr/ThreeSquares.tsx"));
    let csr = env.read_file("src/csr/ThreeSquares.tsx");
    assert!(csr.contains("ThreeSquaresIcon"));
}

#[test]
fn add_legacy_preset_targets_256_canvas() {
    let env = TestEnv::new();
    env.write_file("icons/moon.svg", MOON_SVG);

    let result = env.run(&["add", "-f", "icons", "--preset", "legacy"]);

    assert!(result.success, "{}", result.combined_output());
    let asset = env.read_file("src/assets/regular/moon.svg");
    assert!(asset.contains("viewBox=\"0 0 256 256\""));
    assert!(env.read_file("src/csr/Moon.tsx").contains("0 0 256 256"));
}

#[test]
fn add_preset_from_env() {
    let env = TestEnv::new();
    env.write_file("icons/moon.svg", MOON_SVG);

    let result = env.run_with_env(&["add", "-f", "icons"], &[("LUMIN_PRESET", "legacy")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env
        .read_file("src/assets/regular/moon.svg")
        .contains("viewBox=\"0 0 256 256\""));
}

#[test]
fn add_paths_from_config() {
    let env = TestEnv::new();
    env.write_file(
        "lumin.toml",
        "[paths]\ncsr = \"components/client\"\nindex = \"components/index.ts\"\n",
    );
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.exists("components/client/Star.tsx"));
    assert!(env.exists("components/index.ts"));
    assert!(!env.exists("src/csr/Star.tsx"));
}

#[test]
fn add_skips_invalid_svg_and_continues() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);
    env.write_file("icons/broken.svg", "<path d=\"M0 0\"/>");

    let result = env.run(&["add", "-f", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("broken.svg"));
    assert!(env.exists("src/csr/Star.tsx"));
    assert!(!env.exists("src/csr/Broken.tsx"));
}

#[test]
fn add_without_input_fails() {
    let env = TestEnv::new();

    let result = env.run(&["add"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("--folder or --icon"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn add_icon_without_name_is_usage_error() {
    let env = TestEnv::new();
    env.write_file("star.svg", STAR_SVG);

    let result = env.run(&["add", "-i", "star.svg"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("--name"));
    assert!(!env.exists("src"));
}

#[test]
fn add_folder_and_icon_conflict() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons", "-i", "icons/star.svg", "-n", "star"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("cannot be used with"));
    assert!(!env.exists("src"));
}

#[test]
fn add_rejects_empty_name() {
    let env = TestEnv::new();
    env.write_file("star.svg", STAR_SVG);

    for name in ["", "lm-"] {
        let result = env.run(&["add", "-i", "star.svg", "-n", name]);

        assert_eq!(result.exit_code, 1, "{}", result.combined_output());
        assert!(!env.exists("src"), "wrote output for name {:?}", name);
    }
}

#[test]
fn add_rejects_path_like_name() {
    let env = TestEnv::new();
    env.write_file("star.svg", STAR_SVG);

    let result = env.run(&["add", "-i", "star.svg", "-n", "../../escape"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("invalid icon name"));
    assert!(!env.exists("src"));
    assert!(env.files().iter().all(|f| !f.contains("escape")));
}

#[test]
fn add_missing_folder_fails() {
    let env = TestEnv::new();

    let result = env.run(&["add", "-f", "nowhere"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("folder not found"));
}

#[test]
fn add_folder_without_svgs_fails() {
    let env = TestEnv::new();
    env.write_file("icons/readme.md", "nothing here");

    let result = env.run(&["add", "-f", "icons"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no SVG files"));
}

#[test]
fn add_non_svg_icon_fails() {
    let env = TestEnv::new();
    env.write_file("star.png", "png");

    let result = env.run(&["add", "-i", "star.png", "-n", "star"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("must be an SVG"));
}

#[test]
fn add_json_emits_ndjson_event_stream() {
    let env = TestEnv::new();
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["--json", "add", "-f", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_lines();
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "add");
    assert_eq!(events[0]["file_count"], 1);

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "success");
    assert_eq!(last["icons"], 1);

    assert!(events
        .iter()
        .any(|e| e["event"] == "item_written" && e["fallback"] == "regular"));
}

#[test]
fn add_json_reports_errors_as_events() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "add", "-f", "nowhere"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_lines();
    assert_eq!(events.last().unwrap()["event"], "error");
}

#[test]
fn add_warns_about_unknown_config_keys() {
    let env = TestEnv::new();
    env.write_file("lumin.toml", "[paths]\ncsr_dir = \"x\"\n");
    env.write_file("icons/star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons", "--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("Unknown config key 'csr_dir'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn add_core_icon_collides() {
    let env = TestEnv::new();
    write_corpus_icon(&env, "core/assets", "star", ALL_WEIGHTS);
    env.write_file("icons/lm-star.svg", STAR_SVG);

    let result = env.run(&["add", "-f", "icons"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("already exists"));
    assert!(!env.exists("src/csr/Star.tsx"));
}
