//! 盤面と状態のテキスト表示。

use chessvar_core::engine;

/// 列見出し。
const FILE_LABELS: &str = "  a b c d e f g h";

/// 駒の表示に使う文字の組。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Glyphs {
    /// 英字（白は大文字、黒は小文字）。
    Ascii,
    /// Unicode のチェス記号。
    Unicode,
}

impl Glyphs {
    /// 駒1つ分の文字を返す。
    #[must_use]
    pub fn piece(self, piece: engine::Piece) -> char {
        match self {
            Self::Ascii => {
                let letter = match piece.kind() {
                    engine::Kind::Bishop => 'B',
                    engine::Kind::King => 'K',
                    engine::Kind::Knight => 'N',
                    engine::Kind::Pawn => 'P',
                    engine::Kind::Queen => 'Q',
                    engine::Kind::Rook => 'R',
                    _ => '?',
                };
                match piece.color() {
                    engine::Color::Black => letter.to_ascii_lowercase(),
                    _ => letter,
                }
            }
            Self::Unicode => match (piece.color(), piece.kind()) {
                (engine::Color::White, engine::Kind::King) => '\u{2654}',
                (engine::Color::White, engine::Kind::Queen) => '\u{2655}',
                (engine::Color::White, engine::Kind::Rook) => '\u{2656}',
                (engine::Color::White, engine::Kind::Bishop) => '\u{2657}',
                (engine::Color::White, engine::Kind::Knight) => '\u{2658}',
                (engine::Color::White, engine::Kind::Pawn) => '\u{2659}',
                (engine::Color::Black, engine::Kind::King) => '\u{265A}',
                (engine::Color::Black, engine::Kind::Queen) => '\u{265B}',
                (engine::Color::Black, engine::Kind::Rook) => '\u{265C}',
                (engine::Color::Black, engine::Kind::Bishop) => '\u{265D}',
                (engine::Color::Black, engine::Kind::Knight) => '\u{265E}',
                (engine::Color::Black, engine::Kind::Pawn) => '\u{265F}',
                _ => '?',
            },
        }
    }
}

/// 盤面を8段目から順に、段番号と列見出し付きで描く。
#[must_use]
pub fn board(board: &engine::Board, glyphs: Glyphs) -> String {
    let mut out = String::from(FILE_LABELS);
    out.push('\n');

    for (square, cell) in board.squares() {
        let rank = engine::Square::BOARD_LEN.wrapping_sub(square.row());
        if square.col() == u8::MIN {
            out.push_str(&rank.to_string());
        }

        out.push(' ');
        out.push(cell.map_or('.', |piece| glyphs.piece(piece)));

        if square.col() == engine::Square::BOARD_LEN.wrapping_sub(1) {
            out.push(' ');
            out.push_str(&rank.to_string());
            out.push('\n');
        }
    }

    out.push_str(FILE_LABELS);
    out
}

/// 手番または勝者の表示。
#[must_use]
pub fn status(game: &engine::Game) -> String {
    match game.winner() {
        Some(winner) => format!("{winner} WON!"),
        None => format!("{}'S TURN", game.side_to_move()),
    }
}
