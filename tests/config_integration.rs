use std::path::PathBuf;

use hpk::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use hpk::presentation::BoundaryPolicy;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".hpkrc");
    let content = r#"
# comment
--watch

--boundary clamp
   
--debug-log=hpk.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.watch);
    assert_eq!(flags.boundary, Some(BoundaryPolicy::Clamp));
    assert_eq!(flags.debug_log, Some(PathBuf::from("hpk.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".hpkrc");
    let content = "--watch\n--boundary clamp\n--nav-timeout 1000 --pin 2000\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "hpk".to_string(),
        "--boundary".to_string(),
        "end".to_string(),
        "--no-mouse".to_string(),
        "talk.html".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.watch, "file flags should remain enabled");
    assert!(effective.no_mouse, "cli flags should be applied");
    assert_eq!(
        effective.boundary,
        Some(BoundaryPolicy::End),
        "cli should override the boundary policy"
    );
    assert_eq!(
        effective.nav_timeout_ms,
        Some(1000),
        "file config should be preserved when CLI does not override"
    );
    assert_eq!(effective.pin_ms, Some(2000));
}

#[test]
fn test_parse_flag_tokens_skips_slide_and_fragment() {
    let args = vec![
        "hpk".to_string(),
        "--slide".to_string(),
        "3".to_string(),
        "talk.html#2".to_string(),
        "--no-nav".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert!(flags.no_nav);
    assert_eq!(
        flags,
        ConfigFlags {
            no_nav: true,
            ..ConfigFlags::default()
        }
    );
}

#[test]
fn test_global_and_local_files_union() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".hpkrc");
    std::fs::write(&global, "--boundary clamp\n--pin 1000\n").unwrap();
    std::fs::write(&local, "--no-nav\n--pin 0\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(merged.boundary, Some(BoundaryPolicy::Clamp));
    assert!(merged.no_nav);
    assert_eq!(merged.pin_ms, Some(0));
}
