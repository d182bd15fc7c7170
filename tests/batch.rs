use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgb, Rgba};
use tempfile::TempDir;

use image_transformer_lib::{
    Command, EncodeSettings, OutputFormat, Preset, ResizeSpec, TransformJob, TransformSettings,
    run_command, target_dimensions, transform_images,
};

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 251) as u8, (y % 241) as u8, 64, 255])
    });
    DynamicImage::ImageRgba8(buffer).save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

fn write_jpeg(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    let buffer = ImageBuffer::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 32]));
    DynamicImage::ImageRgb8(buffer).save_with_format(&path, ImageFormat::Jpeg).unwrap();
    path
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

fn width_job(input: &Path, output: Option<PathBuf>, width: u32) -> TransformJob {
    TransformJob::new(input, output, TransformSettings {
        resize: ResizeSpec::Width { width },
        ..TransformSettings::default()
    })
}

#[tokio::test]
async fn width_resize_preserves_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "scene.png", 1600, 1200);
    let output = dir.path().join("scene_small.png");

    let outcomes = transform_images(Vec::new(), vec![width_job(&input, Some(output.clone()), 800)]).await;

    assert!(outcomes[0].success, "{:?}", outcomes[0].error);
    assert_eq!(outcomes[0].dimensions, Some((800, 600)));
    assert_eq!(dimensions(&output), (800, 600));
    assert_eq!(dimensions(&input), (1600, 1200));
}

#[tokio::test]
async fn derived_height_matches_rounding_rule() {
    let dir = tempfile::tempdir().unwrap();
    let sizes = [(640, 427), (333, 500), (1000, 3), (97, 61)];

    let jobs: Vec<_> = sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| {
            let input = write_png(&dir, &format!("src{i}.png"), w, h);
            width_job(&input, Some(dir.path().join(format!("out{i}.png"))), 200)
        })
        .collect();

    let outcomes = transform_images(Vec::new(), jobs).await;

    for (outcome, &(w, h)) in outcomes.iter().zip(&sizes) {
        let expected = (f64::from(h) * 200.0 / f64::from(w)).round() as i64;
        let (out_w, out_h) = dimensions(outcome.output_path.as_deref().unwrap());
        assert_eq!(out_w, 200);
        assert!((i64::from(out_h) - expected).abs() <= 1, "{w}x{h} -> {out_h}, expected {expected}");
        assert_eq!((out_w, out_h), target_dimensions(w, h, &ResizeSpec::Width { width: 200 }));
    }
}

#[tokio::test]
async fn square_icon_is_exactly_1024() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_jpeg(&dir, "upload.jpg", 512, 512);
    let output = dir.path().join("icon.png");

    let jobs = Preset::AppIcon.jobs(vec![input], Some(output.clone())).unwrap();
    let outcomes = transform_images(Vec::new(), jobs).await;

    assert!(outcomes[0].success, "{:?}", outcomes[0].error);
    assert_eq!(image::ImageReader::open(&output).unwrap().with_guessed_format().unwrap().format(), Some(ImageFormat::Png));
    assert_eq!(dimensions(&output), (1024, 1024));
}

#[tokio::test]
async fn store_screenshot_ignores_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_jpeg(&dir, "shot.jpg", 585, 1266);

    let jobs = Preset::StoreScreenshot.jobs(vec![input], None).unwrap();
    let outcomes = transform_images(Vec::new(), jobs).await;

    assert_eq!(outcomes[0].output_path, Some(dir.path().join("shot.png")));
    assert_eq!(dimensions(&dir.path().join("shot.png")), (1290, 2796));
}

#[tokio::test]
async fn missing_source_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone.png");
    let present = write_png(&dir, "here.png", 40, 20);
    let output = dir.path().join("here_small.png");

    let jobs = vec![
        width_job(&missing, Some(dir.path().join("gone_small.png")), 10),
        width_job(&present, Some(output.clone()), 10),
    ];

    let mut printed = Vec::new();
    let outcomes = transform_images(&mut printed, jobs).await;
    let printed = String::from_utf8(printed).unwrap();
    let lines: Vec<_> = printed.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error processing "));
    assert!(lines[0].contains(&missing.display().to_string()));
    assert!(lines[1].starts_with("Saved "));

    assert!(!outcomes[0].success);
    assert!(!dir.path().join("gone_small.png").exists());
    assert!(outcomes[1].success);
    assert_eq!(dimensions(&output), (10, 5));
}

#[tokio::test]
async fn missing_output_directory_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "a.png", 20, 20);
    let output = dir.path().join("nested").join("a.png");

    let mut printed = Vec::new();
    let outcomes = transform_images(&mut printed, vec![width_job(&input, Some(output), 10)]).await;

    assert!(!outcomes[0].success);
    assert!(!dir.path().join("nested").exists());
    assert!(String::from_utf8(printed).unwrap().contains("Output directory does not exist"));
}

#[tokio::test]
async fn corrupt_source_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let mut printed = Vec::new();
    let outcomes = transform_images(&mut printed, vec![width_job(&input, None, 10)]).await;

    assert!(!outcomes[0].success);
    assert_eq!(std::fs::read(&input).unwrap(), b"definitely not a png");
    assert!(String::from_utf8(printed).unwrap().contains("bad.png"));
}

#[tokio::test]
async fn oversized_target_fails_and_next_job_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "tiny.png", 4, 4);
    let huge = dir.path().join("huge.png");
    let small = dir.path().join("small.png");

    let exact = |width, height| TransformSettings {
        resize: ResizeSpec::Exact { width, height },
        ..TransformSettings::default()
    };
    let jobs = vec![
        TransformJob::new(&input, Some(huge.clone()), exact(1_000_000, 1_000_000)),
        TransformJob::new(&input, Some(small.clone()), exact(2, 2)),
    ];

    let mut printed = Vec::new();
    let outcomes = transform_images(&mut printed, jobs).await;
    let printed = String::from_utf8(printed).unwrap();

    assert!(!outcomes[0].success);
    assert!(!huge.exists());
    assert!(printed.lines().next().unwrap().contains("memory limit"));
    assert!(outcomes[1].success, "{:?}", outcomes[1].error);
    assert_eq!(dimensions(&small), (2, 2));
}

#[tokio::test]
async fn unwritable_output_is_reported_and_next_job_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "a.png", 20, 20);
    // Longer than any file system's name limit, so the write itself fails.
    let unwritable = dir.path().join(format!("{}.png", "x".repeat(300)));
    let output = dir.path().join("a_small.png");

    let jobs = vec![
        width_job(&input, Some(unwritable), 10),
        width_job(&input, Some(output.clone()), 10),
    ];

    let mut printed = Vec::new();
    let outcomes = transform_images(&mut printed, jobs).await;
    let printed = String::from_utf8(printed).unwrap();
    let lines: Vec<_> = printed.lines().collect();

    assert!(!outcomes[0].success);
    assert!(lines[0].starts_with(&format!("Error processing {}: IO error: Cannot write", input.display())));
    assert!(outcomes[1].success, "{:?}", outcomes[1].error);
    assert_eq!(dimensions(&output), (10, 10));
}

#[tokio::test]
async fn webp_guides_write_sibling_webp() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "guide_egypt_bg.png", 2160, 1440);

    let jobs = Preset::WebpGuides.jobs(vec![input.clone()], None).unwrap();
    let outcomes = transform_images(Vec::new(), jobs).await;

    let output = dir.path().join("guide_egypt_bg.webp");
    assert!(outcomes[0].success, "{:?}", outcomes[0].error);
    assert_eq!(image::guess_format(&std::fs::read(&output).unwrap()).unwrap(), ImageFormat::WebP);
    assert_eq!(dimensions(&output), (1080, 720));
    assert!(input.exists());
}

#[tokio::test]
async fn resize_guides_overwrite_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "guide_tibet_bg.png", 1200, 900);

    let jobs = Preset::ResizeGuides.jobs(vec![input.clone()], None).unwrap();
    let outcomes = transform_images(Vec::new(), jobs).await;

    assert_eq!(outcomes[0].output_path.as_deref(), Some(input.as_path()));
    assert_eq!(dimensions(&input), (800, 600));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn jpeg_output_uses_requested_quality() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(&dir, "photo.png", 64, 48);

    let job = |quality| TransformJob::new(&input, Some(dir.path().join(format!("q{quality}.jpg"))), TransformSettings {
        format: Some(OutputFormat::JPEG),
        encode: EncodeSettings { quality: Some(quality), optimize: false },
        ..TransformSettings::default()
    });

    let outcomes = transform_images(Vec::new(), vec![job(10), job(95)]).await;

    assert!(outcomes.iter().all(|o| o.success));
    assert!(outcomes[0].output_size < outcomes[1].output_size);
    assert_eq!(dimensions(&dir.path().join("q10.jpg")), (64, 48));
}

#[tokio::test]
async fn manifest_jobs_run_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir, "one.png", 300, 150);
    write_jpeg(&dir, "two.jpg", 50, 80);

    let manifest = r#"{
        "jobs": [
            {"input": "one.png", "output": "one.webp", "resize": {"mode": "width", "width": 100}, "quality": 80},
            {"input": "missing.png", "output": "missing_out.png"},
            {"input": "two.jpg", "output": "two.png", "resize": {"mode": "exact", "width": 64, "height": 64}}
        ]
    }"#;
    let manifest_path = dir.path().join("jobs.json");
    std::fs::write(&manifest_path, manifest).unwrap();

    let mut printed = Vec::new();
    let outcomes = run_command(&mut printed, Command::Manifest(manifest_path)).await.unwrap();
    let printed = String::from_utf8(printed).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes.iter().map(|o| o.success).collect::<Vec<_>>(),
        vec![true, false, true]
    );
    assert!(printed.lines().nth(1).unwrap().contains("missing.png"));
    assert_eq!(dimensions(&dir.path().join("one.webp")), (100, 50));
    assert_eq!(dimensions(&dir.path().join("two.png")), (64, 64));
}
