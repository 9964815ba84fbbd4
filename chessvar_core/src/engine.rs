/// 盤面（マスと残り枚数）と駒の移動の実装。
pub mod board;
/// ゲーム進行（手番、勝敗判定など）の実装。
pub mod game;
/// 駒ごとの動きの合法性判定。
pub mod rules;
pub mod types;

pub type Board = board::Board;
pub type Color = types::Color;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type Kind = types::Kind;
pub type MoveError = game::MoveError;
pub type MoveOutcome = game::MoveOutcome;
pub type ParseSquareError = types::ParseSquareError;
pub type Piece = types::Piece;
pub type RuleError = rules::RuleError;
pub type Square = types::Square;
