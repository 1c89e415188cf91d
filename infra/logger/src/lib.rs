//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for applications built on the rorg
//! crates. The library crates only emit events; whether they go to the terminal, to
//! rolling files, or both is decided here, once, by the binary.
//!
//! The builder is type-state: a name is required before [`LoggerBuilder::init`] exists,
//! and file-only knobs ([`rotation`](LoggerBuilder::rotation),
//! [`max_files`](LoggerBuilder::max_files), [`json`](LoggerBuilder::json)) appear only
//! after [`path`](LoggerBuilder::path).
//!
//! `RUST_LOG` refines the level unless an explicit [`env_filter`](LoggerBuilder::env_filter)
//! is given.
//!
//! ```rust
//! use rorg_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("usage-probe")
//!     .level(LevelFilter::DEBUG)
//!     .env_filter("rorg_wire=debug,rorg_kernel=info")
//!     .init()
//!     .unwrap();
//!
//! tracing::info!("ready");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileSettings>,
}

#[derive(Debug)]
struct FileSettings {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures the global subscriber. Obtain one with [`Logger::builder`].
#[derive(Debug)]
#[must_use = "the builder does nothing until `init` is called"]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = NoFile> {
    settings: Settings,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application. Also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Directive string such as `rorg_wire=debug`. Replaces `RUST_LOG` when set.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes logs to rolling files under `dir`, creating it on `init`.
    pub fn path(mut self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFile> {
        self.settings.file = Some(FileSettings {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        LoggerBuilder { settings: self.settings, name: self.name, file: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown: dropping it stops the
    /// background file writer.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an
    ///   unparsable filter, or when no output is enabled.
    /// - [`LoggerError::Io`] / [`LoggerError::Appender`] when the log directory or file
    ///   cannot be set up.
    /// - [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.settings, &name)?;

        let filter = env_filter(&self.settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let (guard, directory) = match self.settings.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, &file)?;
                layers.push(layer);
                (Some(guard), Some(file.dir))
            }
            None => (None, None),
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled; turn on the console or set a path".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(filter)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %name, file = directory.is_some(), "Logger installed");
        Ok(Logger { guard, directory })
    }
}

impl LoggerBuilder<Named, WithFile> {
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Rotated files kept on disk, oldest removed first.
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// File output as one JSON object per line. The console stays human-readable.
    pub fn json(mut self) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.json = true;
        }
        self
    }
}

/// Handle to the installed subscriber. Owns the background file writer, if any.
#[must_use = "dropping the handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
    directory: Option<PathBuf>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, file: PhantomData }
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }

    /// Directory receiving rolling files, when file output is active.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger dropped, flushing file output");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }

    if let Some(file) = &settings.file
        && file.max_files == 0
    {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: Some(file.dir.display().to_string().into()),
        });
    }

    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}

fn file_layer(name: &str, file: &FileSettings) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(&file.dir)
        .context(format!("Creating log directory {}", file.dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let boxed = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((boxed, guard))
}
