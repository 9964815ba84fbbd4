use crate::engine::board::Board;
use crate::engine::types::{Color, Kind, Piece, Square};

/// 黒のポーンの初期行（8段目が行0）。
const BLACK_PAWN_START_ROW: u8 = 1;

/// 白のポーンの初期行。
const WHITE_PAWN_START_ROW: u8 = 6;

/// 駒の動きとして不正な理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RuleError {
    /// 経路上（またはポーンの前進先）に駒がある。
    Blocked,
    /// 移動元に駒が無い。
    EmptySource,
    /// 移動先に自分の駒がある。
    FriendlyCapture,
    /// その駒の動き方ではない。
    IllegalShape,
    /// 手番ではない側の駒を動かそうとした。
    WrongColor,
}

/// 移動元と移動先の差分。
#[derive(Copy, Clone, Debug)]
struct Delta {
    /// 列の差（`to - from`）。
    col: i16,
    /// 行の差（`to - from`）。
    row: i16,
}

impl Delta {
    /// 2マスの差分を求める。
    fn between(from: Square, to: Square) -> Self {
        Self {
            col: i16::from(to.col()).wrapping_sub(i16::from(from.col())),
            row: i16::from(to.row()).wrapping_sub(i16::from(from.row())),
        }
    }

    /// 斜め（|Δrow| = |Δcol| ≠ 0）かどうか。
    const fn is_diagonal(self) -> bool {
        self.row != 0 && self.row.unsigned_abs() == self.col.unsigned_abs()
    }

    /// 縦横（どちらか一方のみ0）かどうか。
    const fn is_orthogonal(self) -> bool {
        (self.row == 0) != (self.col == 0)
    }
}

/// `color` の手番で `from` → `to` が合法かを調べる。
///
/// 盤面を変更しない純粋な判定。
///
/// # Errors
///
/// 不正な場合、その理由を `RuleError` で返す。
#[inline]
pub fn check_move(board: &Board, color: Color, from: Square, to: Square) -> Result<(), RuleError> {
    let Some(piece) = board.piece_at(from) else {
        return Err(RuleError::EmptySource);
    };

    if piece.color() != color {
        return Err(RuleError::WrongColor);
    }

    if board
        .piece_at(to)
        .is_some_and(|target| target.color() == color)
    {
        return Err(RuleError::FriendlyCapture);
    }

    let delta = Delta::between(from, to);
    match piece.kind() {
        Kind::Bishop => check_slider(board, from, to, delta.is_diagonal()),
        Kind::King => check_king(delta),
        Kind::Knight => check_knight(delta),
        Kind::Pawn => check_pawn(board, piece, from, to, delta),
        Kind::Queen => check_slider(board, from, to, delta.is_diagonal() || delta.is_orthogonal()),
        Kind::Rook => check_slider(board, from, to, delta.is_orthogonal()),
    }
}

/// `check_move` の真偽値版。
#[inline]
#[must_use]
pub fn is_legal_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    check_move(board, color, from, to).is_ok()
}

/// 直線（縦・横・斜め）上の両端を除く全マスが空かを返す。
///
/// 直線上にあることは呼び出し側で確認済みであること。
#[inline]
#[must_use]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let delta = Delta::between(from, to);
    let step_row = delta.row.signum();
    let step_col = delta.col.signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if board.piece_at(square).is_some() {
            return false;
        }
        current = square.offset(step_row, step_col);
    }

    // 盤外に出た＝直線上に無かった。
    false
}

/// キング：周囲1マス。
const fn check_king(delta: Delta) -> Result<(), RuleError> {
    let rows = delta.row.unsigned_abs();
    let cols = delta.col.unsigned_abs();
    if rows <= 1 && cols <= 1 && (rows != 0 || cols != 0) {
        Ok(())
    } else {
        Err(RuleError::IllegalShape)
    }
}

/// ナイト：(1,2) か (2,1)。飛び越え可。
const fn check_knight(delta: Delta) -> Result<(), RuleError> {
    match (delta.row.unsigned_abs(), delta.col.unsigned_abs()) {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(RuleError::IllegalShape),
    }
}

/// ポーン：前進1マス、初期行から2マス、斜め前は取りのみ。
fn check_pawn(
    board: &Board,
    pawn: Piece,
    from: Square,
    to: Square,
    delta: Delta,
) -> Result<(), RuleError> {
    let (forward, start_row): (i16, u8) = match pawn.color() {
        Color::Black => (1, BLACK_PAWN_START_ROW),
        Color::White => (-1, WHITE_PAWN_START_ROW),
    };
    let destination = board.piece_at(to);

    if delta.col == 0 && delta.row == forward {
        return match destination {
            Some(_) => Err(RuleError::Blocked),
            None => Ok(()),
        };
    }

    if delta.col == 0 && delta.row == forward.wrapping_mul(2) && from.row() == start_row {
        let intermediate = from.offset(forward, 0).and_then(|square| board.piece_at(square));
        return match (intermediate, destination) {
            (None, None) => Ok(()),
            _ => Err(RuleError::Blocked),
        };
    }

    if delta.col.unsigned_abs() == 1 && delta.row == forward {
        // 移動先の色は共通の事前条件で確認済み。
        return match destination {
            Some(_) => Ok(()),
            None => Err(RuleError::IllegalShape),
        };
    }

    Err(RuleError::IllegalShape)
}

/// ルーク・ビショップ・クイーン共通：形が合えば経路を確認する。
fn check_slider(board: &Board, from: Square, to: Square, shape_ok: bool) -> Result<(), RuleError> {
    if !shape_ok {
        return Err(RuleError::IllegalShape);
    }

    if path_is_clear(board, from, to) {
        Ok(())
    } else {
        Err(RuleError::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::{RuleError, check_move, is_legal_move, path_is_clear};
    use crate::engine::board::Board;
    use crate::engine::types::{Color, Kind, Piece, Square};

    fn sq(token: &str) -> Square {
        Square::parse(token).unwrap_or_else(|err| panic!("bad square {token}: {err}"))
    }

    fn board_with(pieces: &[(&str, Color, Kind)]) -> Board {
        Board::from_pieces(
            pieces
                .iter()
                .map(|&(token, color, kind)| (sq(token), Piece::new(color, kind))),
        )
    }

    fn check(board: &Board, color: Color, from: &str, to: &str) -> Result<(), RuleError> {
        check_move(board, color, sq(from), sq(to))
    }

    #[test]
    fn shared_preconditions_come_first() {
        let board = Board::initial();
        assert_eq!(check(&board, Color::White, "E4", "E5"), Err(RuleError::EmptySource));
        assert_eq!(check(&board, Color::White, "E7", "E5"), Err(RuleError::WrongColor));
        assert_eq!(check(&board, Color::White, "A1", "A2"), Err(RuleError::FriendlyCapture));
        // 形が不正でも色の判定が優先される。
        assert_eq!(check(&board, Color::Black, "B1", "H5"), Err(RuleError::WrongColor));
    }

    #[test]
    fn king_moves_one_square_any_direction() {
        let board = board_with(&[("D4", Color::White, Kind::King)]);
        for target in ["C3", "C4", "C5", "D3", "D5", "E3", "E4", "E5"] {
            assert!(is_legal_move(&board, Color::White, sq("D4"), sq(target)), "{target}");
        }
        assert_eq!(check(&board, Color::White, "D4", "D6"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::White, "D4", "F5"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn rook_slides_orthogonally_until_blocked() {
        let board = board_with(&[
            ("A1", Color::White, Kind::Rook),
            ("D1", Color::White, Kind::Pawn),
            ("A6", Color::Black, Kind::Pawn),
        ]);
        assert_eq!(check(&board, Color::White, "A1", "C1"), Ok(()));
        assert_eq!(check(&board, Color::White, "A1", "H1"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "A1", "A6"), Ok(()));
        assert_eq!(check(&board, Color::White, "A1", "A7"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "A1", "B2"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn bishop_slides_diagonally_until_blocked() {
        let board = board_with(&[
            ("C1", Color::White, Kind::Bishop),
            ("E3", Color::Black, Kind::Knight),
        ]);
        assert_eq!(check(&board, Color::White, "C1", "A3"), Ok(()));
        assert_eq!(check(&board, Color::White, "C1", "E3"), Ok(()));
        assert_eq!(check(&board, Color::White, "C1", "F4"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "C1", "C4"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::White, "C1", "D3"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = board_with(&[
            ("D4", Color::Black, Kind::Queen),
            ("D6", Color::White, Kind::Pawn),
            ("F6", Color::Black, Kind::Pawn),
        ]);
        assert_eq!(check(&board, Color::Black, "D4", "D6"), Ok(()));
        assert_eq!(check(&board, Color::Black, "D4", "D7"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::Black, "D4", "A4"), Ok(()));
        assert_eq!(check(&board, Color::Black, "D4", "A7"), Ok(()));
        assert_eq!(check(&board, Color::Black, "D4", "G7"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::Black, "D4", "E6"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::initial();
        assert_eq!(check(&board, Color::White, "G1", "F3"), Ok(()));
        assert_eq!(check(&board, Color::White, "G1", "H3"), Ok(()));
        assert_eq!(check(&board, Color::White, "G1", "G3"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::Black, "B8", "C6"), Ok(()));
    }

    #[test]
    fn rook_is_blocked_where_knight_shaped_jump_is_not() {
        let board = board_with(&[
            ("A1", Color::White, Kind::Rook),
            ("B1", Color::Black, Kind::Pawn),
            ("A3", Color::White, Kind::Knight),
            ("B2", Color::Black, Kind::Pawn),
            ("A2", Color::Black, Kind::Pawn),
        ]);
        assert_eq!(check(&board, Color::White, "A1", "C1"), Err(RuleError::Blocked));
        // A3→B1 は A2・B2 を飛び越える。
        assert_eq!(check(&board, Color::White, "A3", "B1"), Ok(()));
    }

    #[test]
    fn pawn_single_and_double_steps() {
        let board = Board::initial();
        assert_eq!(check(&board, Color::White, "A2", "A3"), Ok(()));
        assert_eq!(check(&board, Color::White, "A2", "A4"), Ok(()));
        assert_eq!(check(&board, Color::White, "A2", "A5"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::Black, "H7", "H6"), Ok(()));
        assert_eq!(check(&board, Color::Black, "H7", "H5"), Ok(()));
        assert_eq!(check(&board, Color::White, "A2", "A1"), Err(RuleError::FriendlyCapture));
    }

    #[test]
    fn pawn_double_step_only_from_start_row() {
        let board = board_with(&[
            ("C3", Color::White, Kind::Pawn),
            ("F6", Color::Black, Kind::Pawn),
        ]);
        assert_eq!(check(&board, Color::White, "C3", "C5"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::Black, "F6", "F4"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn pawn_forward_moves_need_empty_squares() {
        let board = board_with(&[
            ("E2", Color::White, Kind::Pawn),
            ("E3", Color::Black, Kind::Knight),
            ("D2", Color::White, Kind::Pawn),
            ("D4", Color::Black, Kind::Pawn),
            ("D7", Color::Black, Kind::Pawn),
            ("D6", Color::White, Kind::Bishop),
        ]);
        assert_eq!(check(&board, Color::White, "E2", "E3"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "E2", "E4"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "D2", "D4"), Err(RuleError::Blocked));
        assert_eq!(check(&board, Color::White, "D2", "D3"), Ok(()));
        assert_eq!(check(&board, Color::Black, "D7", "D5"), Err(RuleError::Blocked));
    }

    #[test]
    fn pawn_diagonal_only_captures() {
        let board = board_with(&[
            ("E4", Color::White, Kind::Pawn),
            ("D5", Color::Black, Kind::Pawn),
            ("F5", Color::Black, Kind::Pawn),
            ("C5", Color::Black, Kind::Pawn),
        ]);
        assert_eq!(check(&board, Color::White, "E4", "D5"), Ok(()));
        assert_eq!(check(&board, Color::White, "E4", "F5"), Ok(()));
        assert_eq!(check(&board, Color::White, "D5", "E4"), Err(RuleError::WrongColor));
        assert_eq!(check(&board, Color::Black, "D5", "E4"), Ok(()));
        assert_eq!(check(&board, Color::Black, "C5", "D4"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::White, "E4", "D3"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::White, "E4", "F4"), Err(RuleError::IllegalShape));
        assert_eq!(check(&board, Color::White, "E4", "E3"), Err(RuleError::IllegalShape));
    }

    #[test]
    fn path_is_clear_ignores_endpoints() {
        let board = board_with(&[
            ("A1", Color::White, Kind::Rook),
            ("A8", Color::Black, Kind::Rook),
            ("H8", Color::Black, Kind::Bishop),
            ("D4", Color::White, Kind::Pawn),
        ]);
        assert!(path_is_clear(&board, sq("A1"), sq("A8")));
        assert!(path_is_clear(&board, sq("A8"), sq("A1")));
        assert!(!path_is_clear(&board, sq("A1"), sq("H8")));
        assert!(path_is_clear(&board, sq("A1"), sq("C3")));
        assert!(path_is_clear(&board, sq("H8"), sq("E5")));
    }

    #[test]
    fn checks_do_not_mutate_the_board() {
        let board = Board::initial();
        let before = board.clone();
        let _legal = is_legal_move(&board, Color::White, sq("E2"), sq("E4"));
        let _illegal = is_legal_move(&board, Color::White, sq("A1"), sq("A5"));
        assert_eq!(board, before);
    }
}
