// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use partsbid_app::AppState;
use runtime::{ApiRuntime, DemoRuntime};
use std::env;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_DEMO_SEED: u64 = 42;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `partsbid --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let client = if options.demo {
        None
    } else {
        Some(
            partsbid_api::Client::new(config.api_base_url(), config.api_timeout()?)
                .with_context(|| {
                    format!(
                        "invalid [api] config in {}; fix base_url/timeout values",
                        options.config_path.display()
                    )
                })?,
        )
    };

    if options.check_only {
        match &client {
            Some(client) => println!("api: {} (timeout {:?})", client.base_url(), client.timeout()),
            None => println!("api: demo data (seed {})", options.seed),
        }
        match logging::log_file_hint(&config) {
            Some(dir) => println!("logs: {}", dir.display()),
            None => println!("logs: disabled"),
        }
        return Ok(());
    }

    let _log_guard = logging::init(&config)?;

    let mut state = AppState::default();
    match client {
        Some(client) => {
            info!(base_url = client.base_url(), "starting against backend");
            let mut runtime = ApiRuntime::new(client, config.page_size());
            partsbid_tui::run_app(&mut state, &mut runtime)
        }
        None => {
            info!(seed = options.seed, "starting with demo data");
            let mut runtime = DemoRuntime::new(options.seed, config.page_size());
            partsbid_tui::run_app(&mut state, &mut runtime)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    seed: u64,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        demo: false,
        seed: DEFAULT_DEMO_SEED,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                options.seed = value.as_ref().parse().with_context(|| {
                    format!("--seed expects a non-negative integer, got {:?}", value.as_ref())
                })?;
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("partsbid");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --demo                   Launch with generated demo data (no backend)");
    println!("  --seed <n>               Demo data seed (implies --demo)");
    println!("  --check                  Validate config + API client and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, DEFAULT_DEMO_SEED, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/partsbid-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                print_example: false,
                demo: false,
                seed: DEFAULT_DEMO_SEED,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));

        let error = parse_cli_args(vec!["--seed"], default_options_path())
            .expect_err("missing seed value should fail");
        assert!(error.to_string().contains("--seed requires a number"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.demo);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn seed_implies_demo_and_must_be_numeric() -> Result<()> {
        let options = parse_cli_args(vec!["--seed", "7"], default_options_path())?;
        assert!(options.demo);
        assert_eq!(options.seed, 7);

        let error = parse_cli_args(vec!["--seed", "lots"], default_options_path())
            .expect_err("non-numeric seed should fail");
        assert!(error.to_string().contains("non-negative integer"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }
}
