use super::generate::execute;
use super::*;
use std::fs;
use std::io::{Cursor, Write};
use tempfile::{tempdir, NamedTempFile};
use urlmod_core::settings::SettingsError;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn file_with(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn cli_parse_all_flags() {
    let cli = parse(&[
        "urlmod",
        "-l",
        "urls.txt",
        "-p",
        "params.txt",
        "-c",
        "20",
        "-v",
        "FUZZ",
        "--generate-strategy",
        "normal,ignore",
        "--value-strategy",
        "replace",
        "-o",
        "out.txt",
        "--double-encode",
        "--skip-invalid",
    ]);
    assert_eq!(cli.list.as_deref(), Some(std::path::Path::new("urls.txt")));
    assert_eq!(cli.parameters.as_deref(), Some(std::path::Path::new("params.txt")));
    assert_eq!(cli.chunk, Some(20));
    assert_eq!(cli.values, vec!["FUZZ"]);
    assert_eq!(cli.strategies, vec![StrategyArg::Normal, StrategyArg::Ignore]);
    assert_eq!(cli.value_strategy, Some(ValueStrategyArg::Replace));
    assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.txt")));
    assert!(cli.double_encode);
    assert!(cli.skip_invalid);
}

#[test]
fn cli_parse_short_aliases() {
    let cli = parse(&[
        "urlmod", "-p", "w.txt", "-v", "a", "--gs", "combine", "--vs", "suffix", "--de",
    ]);
    assert_eq!(cli.strategies, vec![StrategyArg::Combine]);
    assert_eq!(cli.value_strategy, Some(ValueStrategyArg::Suffix));
    assert!(cli.double_encode);
}

#[test]
fn cli_parse_defaults() {
    let cli = parse(&["urlmod"]);
    assert!(cli.list.is_none());
    assert!(cli.parameters.is_none());
    assert!(cli.chunk.is_none());
    assert!(cli.values.is_empty());
    assert!(cli.strategies.is_empty());
    assert!(cli.value_strategy.is_none());
    assert!(!cli.double_encode);
    assert!(!cli.skip_invalid);
}

#[test]
fn cli_values_repeat_and_keep_commas() {
    let cli = parse(&["urlmod", "-v", "a,b", "-v", "'\"><svg>"]);
    assert_eq!(cli.values, vec!["a,b", "'\"><svg>"]);
}

#[test]
fn cli_strategies_repeat() {
    let cli = parse(&["urlmod", "-s", "ignore", "-s", "normal,combine"]);
    assert_eq!(
        cli.strategies,
        vec![StrategyArg::Ignore, StrategyArg::Normal, StrategyArg::Combine]
    );
}

#[test]
fn cli_rejects_unknown_strategies() {
    assert!(Cli::try_parse_from(["urlmod", "--gs", "sniper"]).is_err());
    assert!(Cli::try_parse_from(["urlmod", "--vs", "prefix"]).is_err());
    assert!(Cli::try_parse_from(["urlmod", "-c", "many"]).is_err());
}

#[test]
fn settings_fall_back_to_config() {
    let cfg = UrlmodConfig {
        chunk: 7,
        value_strategy: ValueStrategy::Replace,
        double_encode: true,
        on_invalid_url: InvalidUrlPolicy::Skip,
    };
    let settings = parse(&["urlmod", "-v", "x", "--gs", "ignore"]).generator_settings(&cfg);
    assert_eq!(settings.chunk, 7);
    assert_eq!(settings.value_strategy, ValueStrategy::Replace);
    assert!(settings.double_encode);
    assert_eq!(settings.on_invalid_url, InvalidUrlPolicy::Skip);
    assert_eq!(settings.strategies, vec![Strategy::Ignore]);
    assert_eq!(settings.values, vec!["x"]);
}

#[test]
fn flags_override_config() {
    let cfg = UrlmodConfig::default();
    let settings = parse(&[
        "urlmod",
        "-c",
        "3",
        "--vs",
        "replace",
        "--de",
        "--skip-invalid",
    ])
    .generator_settings(&cfg);
    assert_eq!(settings.chunk, 3);
    assert_eq!(settings.value_strategy, ValueStrategy::Replace);
    assert!(settings.double_encode);
    assert_eq!(settings.on_invalid_url, InvalidUrlPolicy::Skip);
}

#[test]
fn execute_writes_output_file() {
    let urls = file_with("http://x.com/a?x=1\n");
    let params = file_with("p1\np2\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let cli = parse(&[
        "urlmod",
        "-l",
        urls.path().to_str().unwrap(),
        "-p",
        params.path().to_str().unwrap(),
        "-c",
        "2",
        "-v",
        "Z",
        "--gs",
        "ignore",
        "-o",
        out.to_str().unwrap(),
    ]);
    execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        false,
        Cursor::new(""),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "http://x.com/a?x=1&p2=Z\nhttp://x.com/a?x=1&p1=Z\n"
    );

    // Same output path again: refused, file untouched.
    let err = execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        false,
        Cursor::new(""),
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<SettingsError>(),
        Some(&SettingsError::OutputExists(out.clone()))
    );
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "http://x.com/a?x=1&p2=Z\nhttp://x.com/a?x=1&p1=Z\n"
    );
}

#[test]
fn execute_reads_urls_from_stdin() {
    let params = file_with("id\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let cli = parse(&[
        "urlmod",
        "-p",
        params.path().to_str().unwrap(),
        "-v",
        "1",
        "--gs",
        "combine",
        "-o",
        out.to_str().unwrap(),
    ]);
    execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        true,
        Cursor::new("  http://x.com/?q=a  \n\nhttp://y.com/\n"),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "http://x.com/?q=a1\n");
}

#[test]
fn execute_requires_urls() {
    let params = file_with("id\n");
    let cli = parse(&[
        "urlmod",
        "-p",
        params.path().to_str().unwrap(),
        "-v",
        "1",
        "--gs",
        "normal",
    ]);
    let err = execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        false,
        Cursor::new(""),
    )
    .unwrap_err();
    assert_eq!(err.downcast_ref::<SettingsError>(), Some(&SettingsError::NoUrls));
}

#[test]
fn execute_requires_values_and_strategy() {
    let params = file_with("id\n");
    let params_path = params.path().to_str().unwrap();

    let cli = parse(&["urlmod", "-p", params_path, "--gs", "normal"]);
    let err = execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        true,
        Cursor::new("http://x.com/\n"),
    )
    .unwrap_err();
    assert_eq!(err.downcast_ref::<SettingsError>(), Some(&SettingsError::NoValues));

    let cli = parse(&["urlmod", "-p", params_path, "-v", "1"]);
    let err = execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        true,
        Cursor::new("http://x.com/\n"),
    )
    .unwrap_err();
    assert_eq!(err.downcast_ref::<SettingsError>(), Some(&SettingsError::NoStrategy));
}

#[test]
fn execute_aborts_on_invalid_url_without_writing() {
    let params = file_with("id\n");
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let cli = parse(&[
        "urlmod",
        "-p",
        params.path().to_str().unwrap(),
        "-v",
        "1",
        "--gs",
        "ignore",
        "-o",
        out.to_str().unwrap(),
    ]);
    let err = execute(
        cli.generator_settings(&UrlmodConfig::default()),
        cli.run_paths(),
        true,
        Cursor::new("http://x.com/\nnot a url\n"),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("not a url"));
    assert!(!out.exists());
}
