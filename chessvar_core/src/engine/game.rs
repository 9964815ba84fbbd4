use core::fmt;

use tracing::{debug, info};

use crate::engine::board::Board;
use crate::engine::rules::{self, RuleError};
use crate::engine::types::{Color, ParseSquareError, Piece, Square};

/// ゲームの状態。`Unfinished` から勝敗が決まると以後変化しない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 白がある種類の駒を全て取られた。
    BlackWon,
    /// 進行中。
    Unfinished,
    /// 黒がある種類の駒を全て取られた。
    WhiteWon,
}

impl Status {
    /// 勝者を返す（進行中は `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::BlackWon => Some(Color::Black),
            Self::Unfinished => None,
            Self::WhiteWon => Some(Color::White),
        }
    }
}

impl fmt::Display for Status {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match *self {
            Self::BlackWon => "BLACK_WON",
            Self::Unfinished => "UNFINISHED",
            Self::WhiteWon => "WHITE_WON",
        };
        formatter.write_str(text)
    }
}

/// 手を適用できなかった理由。いずれの場合も盤面・手番・状態は変わらない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MoveError {
    /// 経路上に駒がある（ポーンの前進先が埋まっている場合を含む）。
    Blocked,
    /// 移動元に駒が無い。
    EmptySource,
    /// 自分の駒を取ろうとした。
    FriendlyCapture,
    /// すでに勝敗が決まっている。
    GameOver,
    /// その駒の動き方ではない。
    IllegalShape,
    /// マスの表記が不正。
    MalformedSquare(ParseSquareError),
    /// 移動元と移動先が同じマス。
    SameSquare,
    /// 相手の駒を動かそうとした。
    WrongColor,
}

impl From<ParseSquareError> for MoveError {
    #[inline]
    fn from(err: ParseSquareError) -> Self {
        Self::MalformedSquare(err)
    }
}

impl From<RuleError> for MoveError {
    #[inline]
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::Blocked => Self::Blocked,
            RuleError::EmptySource => Self::EmptySource,
            RuleError::FriendlyCapture => Self::FriendlyCapture,
            RuleError::IllegalShape => Self::IllegalShape,
            RuleError::WrongColor => Self::WrongColor,
        }
    }
}

impl fmt::Display for MoveError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Blocked => formatter.write_str("you can't jump over any pieces"),
            Self::EmptySource => formatter.write_str("there's no piece to move there"),
            Self::FriendlyCapture => formatter.write_str("you can't capture your own piece"),
            Self::GameOver => formatter.write_str("the game already has a winner"),
            Self::IllegalShape => formatter.write_str("that piece can't move that way"),
            Self::MalformedSquare(err) => write!(formatter, "invalid square: {err}"),
            Self::SameSquare => formatter.write_str("that is the same square your piece is on"),
            Self::WrongColor => formatter.write_str("you can't move the other player's piece"),
        }
    }
}

impl core::error::Error for MoveError {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match *self {
            Self::MalformedSquare(ref err) => Some(err),
            Self::Blocked
            | Self::EmptySource
            | Self::FriendlyCapture
            | Self::GameOver
            | Self::IllegalShape
            | Self::SameSquare
            | Self::WrongColor => None,
        }
    }
}

/// 適用された手の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct MoveOutcome {
    /// 取った駒。
    pub captured: Option<Piece>,
    /// 適用後のゲーム状態。
    pub status: Status,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 手番。
    side_to_move: Color,
    /// ゲーム状態。
    status: Status,
}

impl Game {
    /// 1手を棋譜表記で受け取り、合法なら適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（ゲームは変更されない）：
    /// - `MoveError::GameOver`: すでに勝敗が決まっている場合
    /// - `MoveError::MalformedSquare`: 表記が不正な場合
    /// - `MoveError::SameSquare`: 移動元と移動先が同じ場合
    /// - それ以外: `Game::play` と同じ
    #[inline]
    pub fn attempt_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!(from, to, status = %self.status, "move rejected: game over");
            return Err(MoveError::GameOver);
        }

        match (Square::parse(from), Square::parse(to)) {
            (Ok(from_sq), Ok(to_sq)) => self.play(from_sq, to_sq),
            (Err(err), _) | (_, Err(err)) => {
                debug!(from, to, %err, "move rejected: malformed square");
                Err(MoveError::MalformedSquare(err))
            }
        }
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面と手番からゲームを開始する。
    ///
    /// 開始時点で0枚の種類があっても進行中として扱う。勝敗は、以後の手で取られた
    /// 種類が0枚になった時点で決まる。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            status: Status::Unfinished,
        }
    }

    /// 初期局面からゲームを開始する（白番）。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// 勝敗が決まっているかを返す。
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::Unfinished
    }

    /// 解析済みのマスで1手を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（ゲームは変更されない）：
    /// - `MoveError::GameOver`: すでに勝敗が決まっている場合
    /// - `MoveError::SameSquare`: 移動元と移動先が同じ場合
    /// - `MoveError::EmptySource`: 移動元に駒が無い場合
    /// - `MoveError::WrongColor` / `FriendlyCapture` / `IllegalShape` / `Blocked`:
    ///   駒の動きとして不正な場合
    #[inline]
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!(%from, %to, status = %self.status, "move rejected: game over");
            return Err(MoveError::GameOver);
        }

        if from == to {
            debug!(%from, %to, "move rejected: same square");
            return Err(MoveError::SameSquare);
        }

        if let Err(err) = rules::check_move(&self.board, self.side_to_move, from, to) {
            let reason = MoveError::from(err);
            debug!(%from, %to, side = %self.side_to_move, ?reason, "move rejected");
            return Err(reason);
        }

        let captured = self.board.move_piece(from, to);
        info!(
            %from,
            %to,
            side = %self.side_to_move,
            captured = ?captured,
            "move applied"
        );

        self.status = self.evaluate_status(captured);
        if self.status == Status::Unfinished {
            self.side_to_move = self.side_to_move.opponent();
        } else {
            info!(status = %self.status, "game decided");
        }

        Ok(MoveOutcome {
            captured,
            status: self.status,
        })
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// 勝者を返す（進行中は `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// 直前の手で取った駒から状態を求める。
    ///
    /// 取られた種類の残りが0枚になったときだけ、取った側の勝ちになる。
    fn evaluate_status(&self, captured: Option<Piece>) -> Status {
        let Some(piece) = captured else {
            return Status::Unfinished;
        };
        if self.board.count(piece.color(), piece.kind()) != u8::MIN {
            return Status::Unfinished;
        }
        match piece.color() {
            Color::Black => Status::WhiteWon,
            Color::White => Status::BlackWon,
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}
