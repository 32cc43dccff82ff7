use orrery_domain::config::{PreviewConfig, SiteConfig};
use orrery_domain::settings::{DirLayout, PreviewMiddleware, ReportingOptions};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let dir = DirLayout::default();
    assert_eq!(dir.input, PathBuf::from("src"));
    assert_eq!(dir.output, PathBuf::from("public"));
    assert_eq!(dir.includes, PathBuf::from("assets/views"));
    assert_eq!(dir.layouts, PathBuf::from("assets/views/layouts"));
    assert_eq!(dir.data, PathBuf::from("data"));

    let reporting = ReportingOptions::default();
    assert!(reporting.show_filesize);
    assert!(reporting.show_benchmark);
    assert_eq!(reporting.warning_threshold_bytes, 400_000);

    let preview = PreviewConfig::default();
    assert_eq!(preview.port, 8080);
    assert!(preview.open);

    let cfg = SiteConfig::default();
    assert!(cfg.quiet);
    assert_eq!(cfg.template_formats, ["njk", "md", "html", "11ty.js"]);
}

#[test]
fn site_config_deserializes_partially() {
    let raw = json!({
        "dir": { "output": "dist" },
        "quiet": false,
        "reporting": { "warning_threshold_bytes": 1024 },
        "preview": { "port": 9000, "not_found_page": "dist/404.html" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.dir.output, PathBuf::from("dist"));
    assert_eq!(cfg.dir.input, PathBuf::from("src"));
    assert!(!cfg.quiet);
    assert_eq!(cfg.reporting.warning_threshold_bytes, 1024);
    assert!(cfg.reporting.show_benchmark);
    assert_eq!(cfg.preview.port, 9000);
}

#[test]
fn preview_options_install_not_found_middleware() {
    let preview = PreviewConfig { open: false, ..PreviewConfig::default() };
    let options = preview.options();

    assert!(!options.open);
    assert_eq!(
        options.middleware,
        vec![PreviewMiddleware::NotFound { document: PathBuf::from("public/404.html") }]
    );
    assert_eq!(options.not_found_document(), Some(&PathBuf::from("public/404.html")));
}

#[test]
fn config_clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.preview.port = 4000;

    assert_eq!(original.preview.port, 8080);
    assert_eq!(edited.preview.port, 4000);
}
