use crate::engine::types::{Color, Kind, Piece, Square};

/// マスの総数。
const SQUARE_COUNT: usize = 64;

/// 1段目/8段目の並び（A列→H列）。
const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

/// 黒の後列（8段目）の行。
const BLACK_BACK_ROW: u8 = 0;

/// 黒のポーンの初期行。
const BLACK_PAWN_ROW: u8 = 1;

/// 白のポーンの初期行。
const WHITE_PAWN_ROW: u8 = 6;

/// 白の後列（1段目）の行。
const WHITE_BACK_ROW: u8 = 7;

/// 盤面（8x8 のマス＋色・種類ごとの残り枚数）。
///
/// 残り枚数は常に盤上にある同色・同種の駒の数と一致する。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// `counts[color][kind]` の残り枚数。
    counts: [[u8; Kind::COUNT]; 2],
    /// 行優先で並べた64マス。
    squares: [Option<Piece>; SQUARE_COUNT],
}

impl Board {
    /// 指定した色・種類の残り枚数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color, kind: Kind) -> u8 {
        self.counts
            .get(color.index())
            .and_then(|row| row.get(kind.index()))
            .copied()
            .unwrap_or(u8::MIN)
    }

    /// 駒の無い盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [[u8::MIN; Kind::COUNT]; 2],
            squares: [None; SQUARE_COUNT],
        }
    }

    /// 任意の配置から盤面を生成する。残り枚数は配置した駒から数える。
    ///
    /// 同じマスが複数回現れた場合は後のものが優先される。
    #[inline]
    #[must_use]
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            if let Some(previous) = board.place(square, piece) {
                board.adjust_count(previous, CountChange::Decrement);
            }
            board.adjust_count(piece, CountChange::Increment);
        }
        board
    }

    /// いずれかの種類を全て失っているかを返す。
    #[inline]
    #[must_use]
    pub fn has_lost(&self, color: Color) -> bool {
        Kind::ALL
            .iter()
            .any(|&kind| self.count(color, kind) == u8::MIN)
    }

    /// 標準の初期配置を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (col, kind) in (u8::MIN..Square::BOARD_LEN).zip(BACK_RANK) {
            for (row, color, row_kind) in [
                (BLACK_BACK_ROW, Color::Black, kind),
                (BLACK_PAWN_ROW, Color::Black, Kind::Pawn),
                (WHITE_PAWN_ROW, Color::White, Kind::Pawn),
                (WHITE_BACK_ROW, Color::White, kind),
            ] {
                if let Some(square) = Square::from_row_col(row, col) {
                    pieces.push((square, Piece::new(color, row_kind)));
                }
            }
        }

        Self::from_pieces(pieces)
    }

    /// 駒を `from` から `to` へ移動する（合法性は確認しない）。
    ///
    /// `to` に駒があればその色・種類の残り枚数を1減らし、取った駒を返す。
    /// 合法性の確認は呼び出し側（`Game`）の責任。
    #[inline]
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = match moving {
            Some(piece) => self.place(to, piece),
            None => self.take(to),
        };

        if let Some(piece) = captured {
            self.adjust_count(piece, CountChange::Decrement);
        }

        captured
    }

    /// 指定マスの駒を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares
            .get(usize::from(square.index()))
            .copied()
            .flatten()
    }

    /// 全マスとその内容を行優先（A8→H1）で返す。
    #[inline]
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|square| (square, self.piece_at(square)))
    }

    /// 残り枚数を1増減する。
    ///
    /// 1枚の駒は一度しか取られないため、減算で下限を下回ることはない。
    fn adjust_count(&mut self, piece: Piece, change: CountChange) {
        let slot = self
            .counts
            .get_mut(piece.color().index())
            .and_then(|row| row.get_mut(piece.kind().index()));

        if let Some(count) = slot {
            *count = match change {
                CountChange::Decrement => count.wrapping_sub(1),
                CountChange::Increment => count.wrapping_add(1),
            };
        }
    }

    /// マスに駒を置き、元の駒を返す。
    fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares
            .get_mut(usize::from(square.index()))
            .and_then(|cell| cell.replace(piece))
    }

    /// マスから駒を取り除いて返す。
    fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares
            .get_mut(usize::from(square.index()))
            .and_then(Option::take)
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// 残り枚数の増減。
#[derive(Copy, Clone, Debug)]
enum CountChange {
    /// 1減らす（駒が取られた）。
    Decrement,
    /// 1増やす（駒を配置した）。
    Increment,
}
