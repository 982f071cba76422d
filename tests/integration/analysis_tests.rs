//! Integration tests for URL analysis
//!
//! These tests exercise the public API end to end: validity, normalization,
//! platform detection, categories, media types, ID extraction, the collection
//! helpers and the report layer.

use linkprism::config::{load_config_with_hash, resolve_filter};
use linkprism::output::{compute_statistics, format_markdown_report, ReportMetadata};
use linkprism::{
    analyze, category_for, detect_media_type, detect_platform, extract_ids, filter_by_category,
    filter_valid, group_by_platform, is_valid_url, normalize, MediaType, Platform,
    PlatformCategory, UrlAnalysis,
};
use std::io::Write;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

/// A corpus mixing valid, scheme-less and invalid inputs
const CORPUS: &[&str] = &[
    "",
    "   ",
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=30s",
    "music.youtube.com/watch?v=x",
    "github.com/apple/swift/pull/12345",
    "HTTPS://YOUTUBE.COM/watch?v=1",
    "http://:8080",
    "localhost:3000",
    "example.com/video.mkv",
    "user@example.com",
    "not a url",
    "file:///tmp/report.pdf",
    "https://unknownsite.xyz/c",
    "ftp://files.example.com/pub/archive.tar.gz",
    "https://mystore.myshopify.com/products/shirt",
    "\thttps://x.com/rustlang/status/1745000000000000000\n",
];

#[test]
fn test_normalize_idempotent() {
    for input in CORPUS {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_category_totality() {
    for platform in Platform::iter() {
        let category = category_for(platform);
        if platform == Platform::Unknown {
            assert_eq!(category, PlatformCategory::Unknown);
        } else {
            assert_ne!(category, PlatformCategory::Unknown, "{:?} has no category", platform);
        }
    }
}

#[test]
fn test_unknown_platform_has_empty_ids() {
    for input in CORPUS {
        if detect_platform(input) == Platform::Unknown {
            assert!(
                analyze(input).extracted_ids.is_empty(),
                "IDs extracted for unknown platform: {:?}",
                input
            );
        }
    }
}

#[test]
fn test_validity_gate() {
    for input in CORPUS {
        if !is_valid_url(input) {
            let analysis = analyze(input);
            assert_eq!(
                analysis,
                UrlAnalysis {
                    original_url: input.to_string(),
                    ..UrlAnalysis::default()
                },
                "non-default fields for invalid input {:?}",
                input
            );
        }
    }
}

#[test]
fn test_scheme_less_equivalence() {
    let domains = [
        "youtube.com/watch?v=abc",
        "youtu.be/abc",
        "music.youtube.com",
        "github.com/rust-lang/rust",
        "gist.github.com/someone/1",
        "open.spotify.com/track/abc",
        "www.reddit.com/r/rust",
        "instagram.com/reel/abc/",
        "someone.github.io",
        "unknownsite.xyz",
    ];

    for domain in domains {
        assert_eq!(
            detect_platform(domain),
            detect_platform(&format!("https://{}", domain)),
            "scheme-less mismatch for {}",
            domain
        );
    }
}

#[test]
fn test_case_insensitive_host_matching() {
    assert_eq!(
        detect_platform("HTTPS://YOUTUBE.COM/watch?v=1"),
        detect_platform("https://youtube.com/watch?v=1")
    );
    assert_eq!(detect_platform("HTTPS://YOUTUBE.COM/watch?v=1"), Platform::Youtube);
}

#[test]
fn test_youtube_watch_analysis() {
    let analysis = analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=30s");

    assert!(analysis.is_valid);
    assert_eq!(analysis.host.as_deref(), Some("www.youtube.com"));
    assert_eq!(analysis.path.as_deref(), Some("/watch"));
    assert_eq!(analysis.query.as_deref(), Some("v=dQw4w9WgXcQ"));
    assert_eq!(analysis.fragment.as_deref(), Some("t=30s"));
    assert!(analysis.is_https);
    assert_eq!(analysis.platform, Platform::Youtube);
    assert_eq!(analysis.platform_category, PlatformCategory::Video);
    assert_eq!(analysis.extracted_ids["youtube_video_id"], "dQw4w9WgXcQ");
}

#[test]
fn test_special_subdomain_priority() {
    let platform = detect_platform("music.youtube.com/watch?v=x");
    assert_eq!(platform, Platform::YoutubeMusic);
    assert_eq!(category_for(platform), PlatformCategory::Audio);
}

#[test]
fn test_github_pull_request() {
    assert_eq!(detect_platform("github.com/apple/swift/pull/12345"), Platform::Github);

    let ids = extract_ids("github.com", "/apple/swift/pull/12345", None, Platform::Github);
    assert_eq!(ids.len(), 3);
    assert_eq!(ids["github_owner"], "apple");
    assert_eq!(ids["github_repo"], "swift");
    assert_eq!(ids["github_pr_number"], "12345");
}

#[test]
fn test_validity_scenarios() {
    assert!(!is_valid_url("http://:8080"));
    assert!(is_valid_url("localhost:3000"));
}

#[test]
fn test_mkv_video_override() {
    assert_eq!(detect_media_type("example.com/video.mkv"), MediaType::Video);
}

#[test]
fn test_group_by_platform() {
    let groups = group_by_platform([
        "https://youtube.com/a",
        "https://youtube.com/b",
        "https://unknownsite.xyz/c",
    ]);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&Platform::Youtube].len(), 2);
    assert_eq!(groups[&Platform::Unknown].len(), 1);
}

#[test]
fn test_filters_preserve_order() {
    let valid = filter_valid(CORPUS);
    let positions: Vec<usize> = valid
        .iter()
        .map(|url| CORPUS.iter().position(|c| *c == url.as_str()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let video = filter_by_category(CORPUS, PlatformCategory::Video);
    assert_eq!(video.len(), 2);
}

#[test]
fn test_classification_is_thread_safe() {
    let handles: Vec<_> = CORPUS
        .iter()
        .map(|input| {
            let input = input.to_string();
            std::thread::spawn(move || analyze(&input))
        })
        .collect();

    for (handle, input) in handles.into_iter().zip(CORPUS) {
        assert_eq!(handle.join().unwrap(), analyze(input));
    }
}

#[test]
fn test_config_filter_and_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
[output]
markdown-path = "report.md"

[filter]
valid-only = true
categories = ["video", "developer"]
"#,
    )
    .unwrap();
    file.flush().unwrap();

    let (config, hash) = load_config_with_hash(file.path()).unwrap();
    let filter = resolve_filter(&config.filter).unwrap();

    let analyses: Vec<UrlAnalysis> = CORPUS
        .iter()
        .map(|input| analyze(input))
        .filter(|analysis| filter.matches(analysis))
        .collect();

    // youtube watch, HTTPS://YOUTUBE.COM and github (music.youtube.com is audio)
    assert_eq!(analyses.len(), 3);

    let stats = compute_statistics(&analyses);
    assert_eq!(stats.valid_urls, 3);
    assert_eq!(stats.by_platform[&Platform::Youtube], 2);

    let metadata = ReportMetadata::now(Some(hash.clone()));
    let markdown = format_markdown_report(&analyses, &stats, &metadata);
    assert!(markdown.contains(&hash));
    assert!(markdown.contains("| github | 1 |"));
}
