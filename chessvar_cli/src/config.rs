//! 起動時の設定（コマンドライン引数と環境変数）。

use core::fmt;

use chessvar_core::telemetry::{LogConfig, LogFormat};
use tracing::Level;

/// ASCII 表示を有効にする環境変数。
pub const ENV_ASCII: &str = "CHESSVAR_ASCII";

/// ログ形式を指定する環境変数。
pub const ENV_LOG_FORMAT: &str = "CHESSVAR_LOG_FORMAT";

/// ログレベルを指定する環境変数。
pub const ENV_LOG_LEVEL: &str = "CHESSVAR_LOG_LEVEL";

/// 使い方。
pub const USAGE: &str = "\
usage: chessvar [--ascii] [--log-level <level>] [--log-format <plain|json>]

Capture every enemy piece of one kind (e.g. both knights, or the king) to win.
Enter moves as two squares, e.g. `e2 e4`. Type `quit` to leave.

environment:
  CHESSVAR_ASCII=1          same as --ascii
  CHESSVAR_LOG_LEVEL=debug  same as --log-level
  CHESSVAR_LOG_FORMAT=json  same as --log-format";

/// 起動時に決まる設定。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// 駒を ASCII 文字で表示する。
    pub ascii: bool,
    /// ログ設定。
    pub log: LogConfig,
}

/// 起動時に実行すること。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// 使い方を表示して終了する。
    Help,
    /// 対局を開始する。
    Play(Config),
}

/// 設定の解析に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// 値の無いオプション。
    MissingValue(String),
    /// 不正な値。
    InvalidValue {
        /// オプション名または環境変数名。
        name: String,
        /// 与えられた値。
        value: String,
    },
    /// 未知の引数。
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidValue {
                ref name,
                ref value,
            } => write!(formatter, "invalid value {value:?} for {name}"),
            Self::MissingValue(ref name) => write!(formatter, "{name} needs a value"),
            Self::UnknownArgument(ref arg) => write!(formatter, "unknown argument {arg:?}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// 引数（プログラム名を除く）と環境変数から設定を作る。引数が環境変数より優先される。
///
/// # Errors
///
/// 未知の引数、値の欠落、不正な値があれば `ConfigError` を返す。
pub fn parse<I, E>(args: I, env: E) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
    E: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(value) = env(ENV_ASCII) {
        config.ascii = parse_flag(ENV_ASCII, &value)?;
    }
    if let Some(value) = env(ENV_LOG_LEVEL) {
        config.log.level = parse_level(ENV_LOG_LEVEL, &value)?;
    }
    if let Some(value) = env(ENV_LOG_FORMAT) {
        config.log.format = parse_format(ENV_LOG_FORMAT, &value)?;
    }

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ascii" => config.ascii = true,
            "--help" | "-h" => return Ok(Command::Help),
            "--log-format" => {
                let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                config.log.format = parse_format(&arg, &value)?;
            }
            "--log-level" => {
                let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                config.log.level = parse_level(&arg, &value)?;
            }
            _ => return Err(ConfigError::UnknownArgument(arg.clone())),
        }
    }

    Ok(Command::Play(config))
}

/// `1/0/true/false/yes/no` を真偽値にする。
fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}

/// ログ形式を解析する。
fn parse_format(name: &str, value: &str) -> Result<LogFormat, ConfigError> {
    value.trim().parse().map_err(|_err| invalid(name, value))
}

/// ログレベルを解析する。
fn parse_level(name: &str, value: &str) -> Result<Level, ConfigError> {
    value.trim().parse().map_err(|_err| invalid(name, value))
}

/// `ConfigError::InvalidValue` を作る。
fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}
