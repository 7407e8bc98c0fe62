//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move and castling rights. The en-passant,
//! halfmove and fullmove fields may be present but are ignored, since the
//! rules here have no en passant and no move clocks.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(ChessError::InvalidFen(format!(
            "expected placement and side to move in '{fen}'"
        )));
    }
    if fields.len() > 6 {
        return Err(ChessError::InvalidFen(format!(
            "FEN has extra trailing fields: '{fen}'"
        )));
    }

    let mut game_state = GameState::new_empty();
    game_state.board = parse_board(fields[0])?;
    game_state.side_to_move = parse_side_to_move(fields[1])?;
    game_state.castling_rights = match fields.get(2) {
        Some(castling_part) => parse_castling_rights(castling_part)?,
        None => CastlingRights::NONE,
    };

    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<BoardState> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = BoardState::empty();
    let mut kings = [0u8; 2];
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if col >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }

            if piece.kind == PieceKind::King {
                kings[piece.color.index()] += 1;
                if kings[piece.color.index()] > 1 {
                    return Err(ChessError::InvalidFen(format!(
                        "more than one {} king",
                        piece.color
                    )));
                }
            }

            board.set(Square::from_index(row * 8 + col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut bits = 0u8;
    for ch in castling_part.chars() {
        bits |= match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
    }

    Ok(CastlingRights::from_bits(bits))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
