//! 「ある種類の駒を全て取った側が勝ち」というチェスの変種のコアロジック。
//!
//! このクレートは盤面・駒の動き・勝敗判定を管理する `engine` と、ログ出力を設定する
//! `telemetry` を提供します。UI（`chessvar_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// `tracing` の出力設定。
pub mod telemetry;
