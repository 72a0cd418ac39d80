use std::fs;
use std::path::{Path, PathBuf};

use image::{ColorType, GenericImageView, ImageFormat};
use shopping_assets::config::FontConfig;
use shopping_assets::constants::mipmap::DENSITIES;
use shopping_assets::feature_graphic::generate_feature_graphic;
use shopping_assets::icon::generate_icon;
use shopping_assets::load_project;
use shopping_assets::mipmap::generate_mipmaps;

/// Fresh scratch project root, unique per test
fn scratch_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("shopping-assets-{}-{}", name, std::process::id()));
    if root.exists() {
        fs::remove_dir_all(&root).expect("Failed to clear scratch directory");
    }
    fs::create_dir_all(&root).expect("Failed to create scratch directory");
    root
}

/// Font candidates that never exist, so rendering is independent of the host's fonts
fn no_fonts() -> FontConfig {
    FontConfig {
        bold: vec![PathBuf::from("/nonexistent/bold.ttf")],
        regular: vec![PathBuf::from("/nonexistent/regular.ttf")],
        light: vec![],
    }
}

fn decode_png(path: &Path) -> image::DynamicImage {
    let bytes = fs::read(path).expect(&format!("Failed to read {:?}", path));
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    image::load_from_memory(&bytes).expect("Output is not a valid PNG")
}

#[test]
fn test_icon_is_512_rgba_png() {
    let root = scratch_root("icon");
    let (_, paths) = load_project(&root).unwrap();

    generate_icon(&paths.icon).unwrap();

    assert!(paths.icon.ends_with("assets/app-icon-512.png"));
    let icon = decode_png(&paths.icon);
    assert_eq!(icon.dimensions(), (512, 512));
    assert_eq!(icon.color(), ColorType::Rgba8);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_icon_reruns_are_byte_identical() {
    let root = scratch_root("icon-rerun");
    let (_, paths) = load_project(&root).unwrap();

    generate_icon(&paths.icon).unwrap();
    let first = fs::read(&paths.icon).unwrap();
    generate_icon(&paths.icon).unwrap();
    let second = fs::read(&paths.icon).unwrap();

    assert_eq!(first, second);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_feature_graphic_with_icon() {
    let root = scratch_root("feature-with-icon");
    let (_, paths) = load_project(&root).unwrap();

    generate_icon(&paths.icon).unwrap();
    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &no_fonts()).unwrap();

    let banner = decode_png(&paths.feature_graphic);
    assert_eq!(banner.dimensions(), (1024, 500));

    // Icon sits at (644, 110); its cart body is white
    let body = banner.get_pixel(644 + 215, 110 + 140);
    assert!(body[0] > 240 && body[1] > 240 && body[2] > 240, "{:?}", body);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_feature_graphic_without_icon() {
    let root = scratch_root("feature-without-icon");
    let (_, paths) = load_project(&root).unwrap();
    assert!(!paths.icon.exists());

    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &no_fonts()).unwrap();

    let banner = decode_png(&paths.feature_graphic);
    assert_eq!(banner.dimensions(), (1024, 500));
    // Still no icon written as a side effect
    assert!(!paths.icon.exists());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_feature_graphic_reruns_are_pixel_identical() {
    let root = scratch_root("feature-rerun");
    let (_, paths) = load_project(&root).unwrap();
    generate_icon(&paths.icon).unwrap();

    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &no_fonts()).unwrap();
    let first = decode_png(&paths.feature_graphic).to_rgba8();
    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &no_fonts()).unwrap();
    let second = decode_png(&paths.feature_graphic).to_rgba8();

    assert_eq!(first, second);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_mipmaps_match_density_sizes() {
    let root = scratch_root("mipmaps");
    let (_, paths) = load_project(&root).unwrap();
    generate_icon(&paths.icon).unwrap();

    let outputs = generate_mipmaps(&paths.icon, &paths.android_res).unwrap();
    assert_eq!(outputs.len(), DENSITIES.len());

    for (output, (folder, size)) in outputs.iter().zip(DENSITIES) {
        assert_eq!(output.folder, folder);
        assert_eq!(output.launcher, paths.android_res.join(folder).join("ic_launcher.png"));

        let launcher = decode_png(&output.launcher);
        assert_eq!(launcher.dimensions(), (size, size), "{}", folder);

        let regular = fs::read(&output.launcher).unwrap();
        let round = fs::read(&output.launcher_round).unwrap();
        assert_eq!(regular, round, "{} variants differ", folder);
    }

    let mdpi = decode_png(&paths.android_res.join("mipmap-mdpi/ic_launcher.png"));
    assert_eq!(mdpi.dimensions(), (48, 48));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_mipmaps_overwrite_previous_run() {
    let root = scratch_root("mipmaps-rerun");
    let (_, paths) = load_project(&root).unwrap();
    generate_icon(&paths.icon).unwrap();

    let stale = paths.android_res.join("mipmap-hdpi/ic_launcher.png");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, b"stale").unwrap();

    generate_mipmaps(&paths.icon, &paths.android_res).unwrap();
    assert_eq!(decode_png(&stale).dimensions(), (72, 72));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_mipmaps_fail_fast_without_source() {
    let root = scratch_root("mipmaps-missing");
    let (_, paths) = load_project(&root).unwrap();

    let err = generate_mipmaps(&paths.icon, &paths.android_res).unwrap_err();

    assert!(format!("{:#}", err).contains("app-icon-512.png"));
    assert!(!paths.android_res.exists(), "no output directories should be created");

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_mipmaps_reject_corrupt_source() {
    let root = scratch_root("mipmaps-corrupt");
    let (_, paths) = load_project(&root).unwrap();
    fs::create_dir_all(paths.icon.parent().unwrap()).unwrap();
    fs::write(&paths.icon, b"not a png").unwrap();

    assert!(generate_mipmaps(&paths.icon, &paths.android_res).is_err());
    assert!(!paths.android_res.exists());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_config_file_relocates_outputs() {
    let root = scratch_root("config");
    fs::write(
        root.join("asset-gen.yaml"),
        "paths:\n  icon: store/icon.png\n  android_res: res\n",
    )
    .unwrap();

    let (config, paths) = load_project(&root).unwrap();
    assert_eq!(paths.icon, root.join("store/icon.png"));
    assert_eq!(paths.feature_graphic, root.join("assets/feature-graphic.png"));
    assert_eq!(config.fonts.bold[0], PathBuf::from("C:/Windows/Fonts/segoeuib.ttf"));

    generate_icon(&paths.icon).unwrap();
    generate_mipmaps(&paths.icon, &paths.android_res).unwrap();
    assert!(root.join("res/mipmap-xxxhdpi/ic_launcher_round.png").exists());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_invalid_config_is_reported() {
    let root = scratch_root("config-invalid");
    fs::write(root.join("asset-gen.yaml"), "paths:\n  icon: icon.webp\n").unwrap();

    let err = load_project(&root).unwrap_err();
    assert!(format!("{:#}", err).contains("asset-gen.yaml"));

    fs::remove_dir_all(&root).unwrap();
}
