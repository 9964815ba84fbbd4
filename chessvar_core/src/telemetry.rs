use core::fmt;
use core::str::FromStr;

use tracing::Level;

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人が読むためのテキスト。
    #[default]
    Plain,
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "plain" | "text" => Ok(Self::Plain),
            _ => Err(ParseLogFormatError),
        }
    }
}

/// `LogFormat` の解析に失敗した。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseLogFormatError;

impl fmt::Display for ParseLogFormatError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("log format must be \"plain\" or \"json\"")
    }
}

impl core::error::Error for ParseLogFormatError {}

/// ログ設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct LogConfig {
    /// 出力形式。
    pub format: LogFormat,
    /// 出力する最大レベル。
    pub level: Level,
}

impl LogConfig {
    /// 設定を生成する。
    #[inline]
    #[must_use]
    pub const fn new(format: LogFormat, level: Level) -> Self {
        Self { format, level }
    }
}

impl Default for LogConfig {
    #[inline]
    fn default() -> Self {
        Self::new(LogFormat::Plain, Level::WARN)
    }
}

/// グローバルな subscriber を標準エラー出力向けに設定する。
///
/// # Errors
///
/// すでにグローバルな subscriber が設定されている場合にエラーを返す。
#[inline]
pub fn init(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt as _;

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().finish().try_init(),
        LogFormat::Plain => builder.finish().try_init(),
    }
}
