use crate::domain::ports::EventLog;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs every line to `log_file`. With `echo` set the lines also go to stderr.
pub fn init_cli_logger(log_file: &Path, echo: bool, verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("secret_santa=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("secret_santa=info"))
    };

    // 日誌檔案以附加模式開啟
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false);

    let stderr_layer = echo.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_level(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

/// Forwards core events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn debug(&self, line: &str) {
        tracing::debug!("{}", line);
    }

    fn info(&self, line: &str) {
        tracing::info!("{}", line);
    }

    fn warning(&self, line: &str) {
        tracing::warn!("{}", line);
    }

    fn error(&self, line: &str) {
        tracing::error!("{}", line);
    }
}

/// Keeps every event in memory so tests can look at it.
#[derive(Debug, Default)]
pub struct CapturedLog {
    lines: RefCell<Vec<(Level, String)>>,
}

impl CapturedLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.at(Level::DEBUG)
    }

    pub fn infos(&self) -> Vec<String> {
        self.at(Level::INFO)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::WARN)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::ERROR)
    }

    fn push(&self, level: Level, line: &str) {
        self.lines.borrow_mut().push((level, line.to_string()));
    }
}

impl EventLog for CapturedLog {
    fn debug(&self, line: &str) {
        self.push(Level::DEBUG, line);
    }

    fn info(&self, line: &str) {
        self.push(Level::INFO, line);
    }

    fn warning(&self, line: &str) {
        self.push(Level::WARN, line);
    }

    fn error(&self, line: &str) {
        self.push(Level::ERROR, line);
    }
}
