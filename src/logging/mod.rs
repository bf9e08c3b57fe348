// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// write provides adapters to use anything which implements Write as a logging
/// destination.
pub mod write;

use crate::args::Args;
use crate::error::*;
use crate::logging::write::*;
use log::{LevelFilter, Log, Metadata, Record};
use regex::Regex;
use std::collections::HashMap;
use std::io::Write;
use std::str::FromStr;

const RUST_LOG_ENV_VAR: &'static str = "RUST_LOG";

/// Parse a log::LevelFilter from a string, case-insensitively and ignoring
/// surrounding whitespace. Upstream doesn't impl FromStr for this type.
pub fn parse_log_level_filter(s: &str) -> Result<LevelFilter> {
    lazy_static! {
        static ref LEVEL_FILTERS: HashMap<String, LevelFilter> = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ]
        .iter()
        .map(|&f| (f.to_string().to_lowercase(), f))
        .collect();
    }

    match LEVEL_FILTERS.get(&s.trim().to_lowercase()) {
        None => Err(Error::InvalidArgument(format!("invalid LevelFilter '{}'", s))),
        Some(f) => Ok(*f),
    }
}

/// Map the number of times a "verbose" style option was given to a
/// LevelFilter: none means warnings and errors only, and each repetition
/// enables one more level.
pub fn verbosity_level<T>(args: &Args<T>, flag: &str) -> LevelFilter {
    match args.count(flag) {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// A LogFilter applies a LevelFilter, either to every module or just to those
/// whose path matches a regular expression.
pub struct LogFilter {
    /// The modules this filter applies to, or None for all modules.
    pub module: Option<Regex>,
    /// The LevelFilter applied to matching modules.
    pub level: LevelFilter,
}

impl LogFilter {
    /// The LevelFilter this LogFilter applies to the given module, or None if
    /// it doesn't apply to it.
    pub fn max_level_for(&self, module_path: &str) -> Option<LevelFilter> {
        match self.module {
            Some(ref module) if !module.is_match(module_path) => None,
            _ => Some(self.level),
        }
    }
}

impl FromStr for LogFilter {
    type Err = Error;

    /// Filters look like "level" or "module_regex=level". Module regexes are
    /// anchored at the start of the module path.
    fn from_str(s: &str) -> Result<LogFilter> {
        Ok(match s.rfind('=') {
            None => LogFilter {
                module: None,
                level: parse_log_level_filter(s)?,
            },
            Some(eq) => LogFilter {
                module: Some(Regex::new(format!("^{}", &s[..eq]).as_str())?),
                level: parse_log_level_filter(&s[eq + 1..])?,
            },
        })
    }
}

/// LogFilters is the full set of filters a Logger applies, parsed from a
/// string like "regex=level;regex=level;...".
pub struct LogFilters(pub Vec<LogFilter>);

impl LogFilters {
    /// Returns the most restrictive LevelFilter of any filter which applies to
    /// the given module, or Trace if none apply.
    pub fn max_level_for(&self, module_path: &str) -> LevelFilter {
        self.0
            .iter()
            .filter_map(|f| f.max_level_for(module_path))
            .min()
            .unwrap_or(LevelFilter::Trace)
    }
}

impl FromStr for LogFilters {
    type Err = Error;

    fn from_str(s: &str) -> Result<LogFilters> {
        let filters: Result<Vec<LogFilter>> = s.split(';').map(|f| f.parse()).collect();
        Ok(LogFilters(filters?))
    }
}

/// Options describes how a Logger behaves. Construct it with OptionsBuilder.
pub struct Options {
    /// Filters controlling which log statements are output.
    pub filters: LogFilters,
    /// The global maximum enabled logging level.
    pub max_level: LevelFilter,
    /// Where to write log output to.
    pub output_factory: LogOutputFactory,
    /// If true, flush the output after every log statement.
    pub always_flush: bool,
}

/// OptionsBuilder provides a builder-style interface to construct an Options.
pub struct OptionsBuilder {
    filters: Option<LogFilters>,
    max_level: Option<LevelFilter>,
    output_factory: Option<LogOutputFactory>,
    always_flush: Option<bool>,
}

impl OptionsBuilder {
    /// Construct a new OptionsBuilder, with every option at its default.
    pub fn new() -> Self {
        OptionsBuilder {
            filters: None,
            max_level: None,
            output_factory: None,
            always_flush: None,
        }
    }

    /// Set the filters applied to every record. If unset, they are read from
    /// the RUST_LOG environment variable; if that is unset too, nothing is
    /// filtered out.
    pub fn set_filters(mut self, filters: LogFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the global maximum level, e.g. from verbosity_level. If unset, it
    /// is the highest level any filter allows.
    pub fn set_max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Write log output to the given Write implementation, instead of stderr.
    pub fn set_output_to<T: Write + Send + 'static>(mut self, output_writer: T) -> Self {
        self.output_factory = Some(new_log_output_factory(output_writer));
        self
    }

    /// Set whether or not the Logger flushes its output after every record.
    pub fn set_always_flush(mut self, always_flush: bool) -> Self {
        self.always_flush = Some(always_flush);
        self
    }

    /// Build an Options structure from this builder's current state. This
    /// fails if filters have to be read from the environment and they are
    /// invalid.
    pub fn build(self) -> Result<Options> {
        let filters = match self.filters {
            Some(filters) => filters,
            None => match ::std::env::var(RUST_LOG_ENV_VAR) {
                Ok(s) => s.parse()?,
                Err(::std::env::VarError::NotPresent) => LogFilters(vec![]),
                Err(e) => return Err(e.into()),
            },
        };
        let max_level = self.max_level.unwrap_or_else(|| {
            filters
                .0
                .iter()
                .map(|f| f.level)
                .max()
                .unwrap_or(LevelFilter::Trace)
        });

        Ok(Options {
            filters: filters,
            max_level: max_level,
            output_factory: self
                .output_factory
                .unwrap_or_else(|| Box::new(|| Box::new(::std::io::stderr()))),
            always_flush: self.always_flush.unwrap_or(false),
        })
    }
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        OptionsBuilder::new()
    }
}

/// Format the given log Record into a single line of output.
pub fn format_log_record(record: &Record) -> String {
    format!(
        "[{} {}:{}] {} - {}",
        ::chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        record.file().unwrap_or("UNKNOWN_FILE"),
        record
            .line()
            .map_or("UNKNOWN_LINE".to_owned(), |l| l.to_string()),
        record.level(),
        record.args()
    )
}

/// Logger is a Log implementation for command-line programs, controlled by
/// its Options.
pub struct Logger {
    options: Options,
}

impl Logger {
    /// Construct a new Logger with the given Options.
    pub fn new(options: Options) -> Self {
        Logger { options: options }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.options.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module_level = self
            .options
            .filters
            .max_level_for(record.module_path().unwrap_or(""));
        if record.level() > module_level {
            return;
        }

        // There is nowhere to report a failure to log, so output errors are
        // dropped.
        let _ = writeln!((self.options.output_factory)(), "{}", format_log_record(record));
        if self.options.always_flush {
            self.flush();
        }
    }

    fn flush(&self) {
        let _ = (self.options.output_factory)().flush();
    }
}

/// Set up a new global Logger with the given Options.
pub fn try_init(options: Options) -> Result<()> {
    let max_level = options.max_level;
    log::set_boxed_logger(Box::new(Logger::new(options)))?;
    log::set_max_level(max_level);
    Ok(())
}
