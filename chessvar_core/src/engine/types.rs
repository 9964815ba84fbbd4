use core::fmt;
use core::str::FromStr;

/// 手番（駒の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 後手。盤の上側（8段目）から始める。
    Black,
    /// 先手。
    White,
}

impl Color {
    /// 両方の色。
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// 駒数テーブル用のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Black => 1,
            Self::White => 0,
        }
    }

    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Black => "BLACK",
            Self::White => "WHITE",
        };
        formatter.write_str(name)
    }
}

/// 駒の種類。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// ビショップ。
    Bishop,
    /// キング。
    King,
    /// ナイト。
    Knight,
    /// ポーン。
    Pawn,
    /// クイーン。
    Queen,
    /// ルーク。
    Rook,
}

impl Kind {
    /// 全種類（表示・集計用の順序）。
    pub const ALL: [Self; 6] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::Pawn,
    ];

    /// 種類数。
    pub const COUNT: usize = 6;

    /// 駒数テーブル用のインデックス（0..=5）を返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Bishop => 3,
            Self::King => 0,
            Self::Knight => 4,
            Self::Pawn => 5,
            Self::Queen => 1,
            Self::Rook => 2,
        }
    }

    /// 初期配置での1色あたりの枚数。
    #[inline]
    #[must_use]
    pub const fn initial_count(self) -> u8 {
        match self {
            Self::Bishop | Self::Knight | Self::Rook => 2,
            Self::King | Self::Queen => 1,
            Self::Pawn => 8,
        }
    }
}

impl fmt::Display for Kind {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Bishop => "Bishop",
            Self::King => "King",
            Self::Knight => "Knight",
            Self::Pawn => "Pawn",
            Self::Queen => "Queen",
            Self::Rook => "Rook",
        };
        formatter.write_str(name)
    }
}

/// 盤上の駒（色と種類の組）。位置以外の同一性は持たない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    /// 色。
    color: Color,
    /// 種類。
    kind: Kind,
}

impl Piece {
    /// 色。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 種類。
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Kind {
        self.kind
    }

    /// 駒を生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.color, self.kind)
    }
}

/// 棋譜表記（`E4` など）の解析に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseSquareError {
    /// 列の文字が A〜H ではない。
    File(char),
    /// 2文字ではない。
    Length,
    /// 段の文字が 1〜8 ではない。
    Rank(char),
}

impl fmt::Display for ParseSquareError {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::File(found) => write!(formatter, "file must be A-H, got {found:?}"),
            Self::Length => formatter.write_str("square must be a file letter and a rank digit"),
            Self::Rank(found) => write!(formatter, "rank must be 1-8, got {found:?}"),
        }
    }
}

impl core::error::Error for ParseSquareError {}

/// 列文字（A〜H）→ 列インデックス。
const FILES: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// 段文字 → 行インデックス（8段目が行0）。
const RANKS: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 列（0..=7、A列が0）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 行・列から `Square` を生成する。範囲外なら `None`。
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let mut idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        idx = match idx.checked_add(col) {
            Some(value) => value,
            None => return None,
        };

        Some(Self(idx))
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 全64マスを行優先で返す。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::BOARD_LEN.wrapping_mul(Self::BOARD_LEN)).map(Self)
    }

    /// 行方向に `d_row`、列方向に `d_col` ずらしたマスを返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i16, d_col: i16) -> Option<Self> {
        let row = i16::from(self.row()).wrapping_add(d_row);
        let col = i16::from(self.col()).wrapping_add(d_col);

        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row_u8), Ok(col_u8)) => Self::from_row_col(row_u8, col_u8),
            _ => None,
        }
    }

    /// 棋譜表記（列文字＋段数字、列は大小文字を区別しない）を解析する。
    ///
    /// # Errors
    ///
    /// 2文字でない、列が A〜H でない、段が 1〜8 でない場合に `ParseSquareError` を返す。
    #[inline]
    pub fn parse(token: &str) -> Result<Self, ParseSquareError> {
        let mut chars = token.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(ParseSquareError::Length),
        };

        let upper = file.to_ascii_uppercase();
        let Some(col) = FILES.iter().position(|&candidate| candidate == upper) else {
            return Err(ParseSquareError::File(file));
        };
        let Some(row) = RANKS.iter().position(|&candidate| candidate == rank) else {
            return Err(ParseSquareError::Rank(rank));
        };

        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row_u8), Ok(col_u8)) => {
                Self::from_row_col(row_u8, col_u8).ok_or(ParseSquareError::Length)
            }
            _ => Err(ParseSquareError::Length),
        }
    }

    /// 行（0..=7、8段目が0）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILES.get(usize::from(self.col())).copied().unwrap_or('?');
        let rank = RANKS.get(usize::from(self.row())).copied().unwrap_or('?');
        write!(formatter, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    #[inline]
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::parse(token)
    }
}
