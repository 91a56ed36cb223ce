// FILE: src/cli/mod.rs

mod config;
mod handlers;

use crate::error::{CompilerError, Result};
use clap::{Arg, ArgAction, Command, ValueEnum};
use std::time::Instant;

pub use config::ConfigFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Debug,
}

/// Settings for one run, merged from flags and the config file
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub fail_fast: bool,
    pub output_format: OutputFormat,
    pub source: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            fail_fast: false,
            output_format: OutputFormat::Debug,
            source: None,
        }
    }
}

pub struct LesserCli {
    config: ConfigFile,
    start_time: Instant,
}

impl LesserCli {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
            start_time: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.start_time = Instant::now();
        let matches = self.build_cli().get_matches();
        self.prepare(&matches)?;

        let result = match matches.subcommand() {
            Some(("check", sub_matches)) => handlers::handle_check_command(self, sub_matches),
            Some(("dump", sub_matches)) => handlers::handle_dump_command(self, sub_matches),
            Some(("kinds", _)) => handlers::handle_kinds_command(),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        };
        log::debug!("Finished in {:.2}ms", self.start_time.elapsed().as_secs_f64() * 1000.0);
        result
    }

    fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("Lesser Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count),
            )
            .subcommand(
                Command::new("check")
                    .about("Convert legacy property tuples and report failed entries")
                    .arg(Arg::new("input").help("JSON document of legacy tuples").required(true).index(1))
                    .arg(Arg::new("source").short('s').long("source").value_name("FILE").help("Stylesheet the positions refer to"))
                    .arg(Arg::new("fail-fast").long("fail-fast").help("Stop at the first failing entry").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("dump")
                    .about("Print the typed properties of a legacy tuple document")
                    .arg(Arg::new("input").help("JSON document of legacy tuples").required(true).index(1))
                    .arg(Arg::new("source").short('s').long("source").value_name("FILE").help("Stylesheet the positions refer to"))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).help("Output format")),
            )
            .subcommand(Command::new("kinds").about("List the registered property kinds"))
    }

    /// Logging comes up before the config file is read so loading is logged
    fn prepare(&mut self, matches: &clap::ArgMatches) -> Result<()> {
        self.setup_logging(matches.get_count("verbose"))?;
        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }
        Ok(())
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        if let Err(e) = env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .try_init()
        {
            log::debug!("Logger already initialized: {}", e);
        }
        Ok(())
    }

    pub fn build_run_options(&self, matches: &clap::ArgMatches) -> Result<RunOptions> {
        let mut options = RunOptions::default();

        if let Some(format) = &self.config.output_format {
            options.output_format = OutputFormat::from_str(format, true).map_err(|_| {
                CompilerError::InvalidFormat {
                    message: format!("Unknown output format '{}'. Use json or debug.", format),
                }
            })?;
        }
        if let Ok(Some(format)) = matches.try_get_one::<OutputFormat>("format") {
            options.output_format = *format;
        }

        let fail_fast_flag = matches!(matches.try_get_one::<bool>("fail-fast"), Ok(Some(true)));
        options.fail_fast = fail_fast_flag || self.config.fail_fast.unwrap_or(false);

        options.source = matches
            .get_one::<String>("source")
            .cloned()
            .or_else(|| self.config.source.clone());

        Ok(options)
    }
}

impl Default for LesserCli {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_logging_is_ready_before_config_load() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("lesser.toml");
        fs::write(&config_path, "fail_fast = true\n").unwrap();

        let mut cli = LesserCli::new();
        let matches = cli
            .build_cli()
            .try_get_matches_from(["lesser", "-v", "-c", config_path.to_str().unwrap(), "kinds"])
            .unwrap();
        cli.prepare(&matches).unwrap();

        assert!(log::max_level() >= log::LevelFilter::Info);
        assert_eq!(cli.config.fail_fast, Some(true));

        // A broken config is reported after logging is already configured
        let mut cli = LesserCli::new();
        let matches = cli
            .build_cli()
            .try_get_matches_from(["lesser", "-c", "/nonexistent/lesser.toml", "kinds"])
            .unwrap();
        assert!(matches!(cli.prepare(&matches), Err(CompilerError::FileNotFound { .. })));
        assert!(log::max_level() >= log::LevelFilter::Info);
    }

    #[test]
    fn test_run_options_merge_config() {
        let mut cli = LesserCli::new();
        cli.config.output_format = Some("json".to_string());
        cli.config.fail_fast = Some(true);
        let matches = cli.build_cli().try_get_matches_from(["lesser", "dump", "in.json"]).unwrap();
        let (_, sub_matches) = matches.subcommand().unwrap();

        let options = cli.build_run_options(sub_matches).unwrap();
        assert_eq!(options.output_format, OutputFormat::Json);
        assert!(options.fail_fast);
        assert_eq!(options.source, None);
    }
}
