//! 端末で動作する最小 UI。

mod config;
mod render;

use std::io::{self, BufRead, Write};

use chessvar_core::{engine, telemetry};
use tracing::info;

use crate::config::Command;
use crate::render::Glyphs;

/// 入力1行の解釈結果。
#[derive(Debug, Eq, PartialEq)]
enum Input<'line> {
    /// 空行。
    Blank,
    /// 移動元と移動先。
    Move(&'line str, &'line str),
    /// 終了。
    Quit,
    /// 解釈できない。
    Unrecognized,
}

/// 1行を解釈する。
fn parse_input(line: &str) -> Input<'_> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (None, _, _) => Input::Blank,
        (Some(word), None, _) if word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("exit") => {
            Input::Quit
        }
        (Some(from), Some(to), None) => Input::Move(from, to),
        _ => Input::Unrecognized,
    }
}

/// 盤面と手番（または勝者）を表示する。
fn show<W: Write>(out: &mut W, game: &engine::Game, glyphs: Glyphs) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", render::board(game.board(), glyphs))?;
    writeln!(out, "{}", render::status(game))
}

/// 勝敗が決まるか、入力が尽きるか、`quit` まで対局を進める。
fn run<R: BufRead, W: Write>(
    game: &mut engine::Game,
    input: R,
    out: &mut W,
    glyphs: Glyphs,
) -> io::Result<()> {
    show(out, game, glyphs)?;

    let mut lines = input.lines();
    loop {
        if game.is_over() {
            return Ok(());
        }
        write!(out, "{} move> ", game.side_to_move())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        match parse_input(&line) {
            Input::Blank => {}
            Input::Quit => return Ok(()),
            Input::Unrecognized => {
                writeln!(out, "Enter a move as two squares, e.g. `e2 e4`, or `quit`.")?;
            }
            Input::Move(from, to) => match game.attempt_move(from, to) {
                Ok(outcome) => {
                    if let Some(captured) = outcome.captured {
                        writeln!(out, "Captured {captured}.")?;
                    }
                    show(out, game, glyphs)?;
                }
                Err(err) => writeln!(out, "Illegal move: {err}. Try again.")?,
            },
        }
    }
}

fn main() -> Result<(), String> {
    let command = config::parse(std::env::args().skip(1), |name| std::env::var(name).ok())
        .map_err(|err| format!("{err}\n\n{}", config::USAGE))?;

    let settings = match command {
        Command::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        Command::Play(settings) => settings,
    };

    telemetry::init(&settings.log).map_err(|err| err.to_string())?;
    info!(?settings, "starting");

    let glyphs = if settings.ascii {
        Glyphs::Ascii
    } else {
        Glyphs::Unicode
    };

    let mut game = engine::Game::initial();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut game, stdin.lock(), &mut stdout, glyphs).map_err(|err| err.to_string())?;

    info!(status = %game.status(), "finished");
    Ok(())
}
