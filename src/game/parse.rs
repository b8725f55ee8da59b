//! Text input: board files (rows of comma-separated `-1`/`0`/`1`) and the
//! 1-based move numbers players type.

use super::{Board, Cell, Move};
use crate::error::ParseError;

/// Parse one board row of exactly `size` comma-separated values.
pub fn parse_row(line: &str, size: usize) -> Result<Vec<Cell>, ParseError> {
    let cells = line
        .split(',')
        .map(|field| {
            let field = field.trim();
            let value: i64 = field
                .parse()
                .map_err(|_| ParseError::NotANumber(field.to_string()))?;
            Cell::from_value(value).ok_or(ParseError::InvalidCellValue(value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if cells.len() != size {
        return Err(ParseError::WrongRowLength {
            expected: size,
            got: cells.len(),
        });
    }
    Ok(cells)
}

/// Parse a whole board. Blank lines are skipped.
pub fn parse_board(text: &str, size: usize, win_length: usize) -> Result<Board, ParseError> {
    let mut cells = Vec::with_capacity(size * size);
    let mut rows = 0;
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        rows += 1;
        if rows > size {
            continue;
        }
        cells.extend(parse_row(line, size)?);
    }
    if rows != size {
        return Err(ParseError::WrongRowCount {
            expected: size,
            got: rows,
        });
    }
    Ok(Board::from_cells(size, win_length, cells))
}

/// Assemble a board from rows already parsed with [`parse_row`].
pub fn board_from_rows(
    rows: Vec<Vec<Cell>>,
    size: usize,
    win_length: usize,
) -> Result<Board, ParseError> {
    if rows.len() != size {
        return Err(ParseError::WrongRowCount {
            expected: size,
            got: rows.len(),
        });
    }
    if let Some(bad) = rows.iter().find(|r| r.len() != size) {
        return Err(ParseError::WrongRowLength {
            expected: size,
            got: bad.len(),
        });
    }
    Ok(Board::from_cells(
        size,
        win_length,
        rows.into_iter().flatten().collect(),
    ))
}

/// Translate a typed move number in `1..=size*size` into a coordinate.
pub fn parse_move_number(input: &str, size: usize) -> Result<Move, ParseError> {
    let input = input.trim();
    let number: usize = input
        .parse()
        .map_err(|_| ParseError::NotANumber(input.to_string()))?;
    let max = size * size;
    if !(1..=max).contains(&number) {
        return Err(ParseError::MoveOutOfRange { number, max });
    }
    Ok(Move::new((number - 1) / size, (number - 1) % size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        let row = parse_row(" -1, 0 ,1", 3).unwrap();
        assert_eq!(row, vec![Cell::Human, Cell::Empty, Cell::Machine]);
    }

    #[test]
    fn test_parse_row_rejects_bad_values() {
        assert_eq!(parse_row("0,2,0", 3), Err(ParseError::InvalidCellValue(2)));
        assert_eq!(
            parse_row("0,x,0", 3),
            Err(ParseError::NotANumber("x".to_string()))
        );
        assert_eq!(
            parse_row("0,0", 3),
            Err(ParseError::WrongRowLength {
                expected: 3,
                got: 2
            })
        );
        assert!(parse_row("", 3).is_err());
    }

    #[test]
    fn test_parse_board() {
        let board = parse_board("1,0,0\n\n0,-1,0\n0,0,0\n", 3, 3).unwrap();
        assert_eq!(board.get(0, 0), Cell::Machine);
        assert_eq!(board.get(1, 1), Cell::Human);
        assert_eq!(board.empty_count(), 7);
    }

    #[test]
    fn test_parse_board_wrong_row_count() {
        assert_eq!(
            parse_board("0,0,0\n0,0,0\n", 3, 3),
            Err(ParseError::WrongRowCount {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            parse_board("0\n0\n", 1, 1),
            Err(ParseError::WrongRowCount {
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let board = parse_board("1,0,0\n0,-1,0\n0,0,0\n", 3, 3).unwrap();
        assert_eq!(parse_board(&board.to_string(), 3, 3).unwrap(), board);
    }

    #[test]
    fn test_board_from_rows() {
        let rows = vec![
            vec![Cell::Empty, Cell::Human],
            vec![Cell::Machine, Cell::Empty],
        ];
        let board = board_from_rows(rows.clone(), 2, 2).unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.get(1, 0), Cell::Machine);
        assert!(board_from_rows(rows, 3, 3).is_err());
    }

    #[test]
    fn test_parse_move_number() {
        assert_eq!(parse_move_number("1", 10), Ok(Move::new(0, 0)));
        assert_eq!(parse_move_number(" 23 ", 10), Ok(Move::new(2, 2)));
        assert_eq!(parse_move_number("100", 10), Ok(Move::new(9, 9)));
        assert_eq!(
            parse_move_number("0", 10),
            Err(ParseError::MoveOutOfRange {
                number: 0,
                max: 100
            })
        );
        assert_eq!(
            parse_move_number("101", 10),
            Err(ParseError::MoveOutOfRange {
                number: 101,
                max: 100
            })
        );
        assert!(matches!(
            parse_move_number("five", 10),
            Err(ParseError::NotANumber(_))
        ));
    }
}
