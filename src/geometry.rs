use once_cell::sync::Lazy;

use crate::error::{Error, Result};

pub const BOARD_DIM: i32 = 10;
pub const SQUARES_PER_ROW: usize = BOARD_DIM as usize / 2;
pub const TOTAL_SQUARES: usize = (BOARD_DIM * BOARD_DIM) as usize / 2;

/// Ray directions in the order callers rely on: NW, NE, SW, SE.
/// White men move along the first two, black men along the last two.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

type Rays = [Vec<usize>; 4];

/// Full-length rays for every square, indexed by square number (slot 0 is unused).
static RAYS: Lazy<Vec<Rays>> = Lazy::new(|| {
    (0..=TOTAL_SQUARES)
        .map(|index| {
            if is_valid_square(index) {
                cast_rays(index)
            } else {
                Default::default()
            }
        })
        .collect()
});

/// Returns true for a playable square number (1..=50).
pub fn is_valid_square(index: usize) -> bool {
    (1..=TOTAL_SQUARES).contains(&index)
}

/// Converts a square number to `(row, col)`.
/// Rows are numbered top to bottom and columns left to right, both starting at 1.
pub fn index_to_coords(index: usize) -> (i32, i32) {
    let index = index as i32;
    let per_row = SQUARES_PER_ROW as i32;
    let row = (index - 1) / per_row + 1;
    let col = if row % 2 == 1 {
        index % BOARD_DIM * 2
    } else {
        (index - per_row) % BOARD_DIM * 2 - 1
    };
    (row, col)
}

/// Converts `(row, col)` back to a square number. The coordinates must be [`in_bounds`].
pub(crate) fn coords_to_index(row: i32, col: i32) -> usize {
    ((row - 1) * SQUARES_PER_ROW as i32 + (col - row % 2 + 1) / 2) as usize
}

pub fn in_bounds(row: i32, col: i32) -> bool {
    (1..=BOARD_DIM).contains(&row) && (1..=BOARD_DIM).contains(&col)
}

/// Squares strictly between `start` and `end`, ordered from `start` toward `end`.
///
/// Fails when the two squares do not share a diagonal, including `start == end`.
pub fn indexes_between(start: usize, end: usize) -> Result<Vec<usize>> {
    if !is_valid_square(start) || !is_valid_square(end) {
        return Err(Error::InvalidMove(format!(
            "square out of range ({start} to {end})"
        )));
    }

    let (start_row, start_col) = index_to_coords(start);
    let (end_row, end_col) = index_to_coords(end);
    let length = (end_row - start_row).abs();

    if length == 0 || length != (end_col - start_col).abs() {
        return Err(Error::InvalidMove(format!(
            "non-diagonal move detected ({start} to {end})"
        )));
    }

    let dr = (end_row - start_row).signum();
    let dc = (end_col - start_col).signum();
    Ok((1..length)
        .map(|step| coords_to_index(start_row + dr * step, start_col + dc * step))
        .collect())
}

pub fn is_black_home_row(index: usize) -> bool {
    (1..=SQUARES_PER_ROW).contains(&index)
}

pub fn is_white_home_row(index: usize) -> bool {
    index > TOTAL_SQUARES - SQUARES_PER_ROW && index <= TOTAL_SQUARES
}

/// Casts the four diagonal rays (NW, NE, SW, SE) from `index`, each limited to `range` steps.
///
/// Every ray is ordered nearest first and stops at the board edge; a ray that leaves the board
/// immediately is empty. An invalid square yields four empty rays.
pub fn lines_of_sight(index: usize, range: usize) -> [&'static [usize]; 4] {
    let empty: &'static [usize] = &[];
    match RAYS.get(index) {
        Some(rays) => std::array::from_fn(|dir| {
            let ray = &rays[dir];
            &ray[..range.min(ray.len())]
        }),
        None => [empty; 4],
    }
}

fn cast_rays(index: usize) -> Rays {
    let (row, col) = index_to_coords(index);
    DIRECTIONS.map(|(dr, dc)| {
        let mut ray = Vec::new();
        let (mut r, mut c) = (row + dr, col + dc);
        while in_bounds(r, c) {
            ray.push(coords_to_index(r, c));
            r += dr;
            c += dc;
        }
        ray
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rays(index: usize, range: usize) -> Vec<Vec<usize>> {
        lines_of_sight(index, range)
            .iter()
            .map(|ray| ray.to_vec())
            .collect()
    }

    #[test]
    fn index_to_coords_matches_notation() {
        assert_eq!(index_to_coords(1), (1, 2));
        assert_eq!(index_to_coords(5), (1, 10));
        assert_eq!(index_to_coords(6), (2, 1));
        assert_eq!(index_to_coords(28), (6, 5));
        assert_eq!(index_to_coords(41), (9, 2));
        assert_eq!(index_to_coords(45), (9, 10));
        assert_eq!(index_to_coords(46), (10, 1));
        assert_eq!(index_to_coords(50), (10, 9));
    }

    #[test]
    fn coords_to_index_matches_notation() {
        assert_eq!(coords_to_index(1, 2), 1);
        assert_eq!(coords_to_index(1, 10), 5);
        assert_eq!(coords_to_index(2, 1), 6);
        assert_eq!(coords_to_index(6, 5), 28);
        assert_eq!(coords_to_index(9, 2), 41);
        assert_eq!(coords_to_index(9, 10), 45);
        assert_eq!(coords_to_index(10, 1), 46);
        assert_eq!(coords_to_index(10, 9), 50);
    }

    #[test]
    fn coords_round_trip_for_every_square() {
        for index in 1..=TOTAL_SQUARES {
            let (row, col) = index_to_coords(index);
            assert!(in_bounds(row, col), "square {index} maps off the board");
            assert_eq!((row + col) % 2, 1, "square {index} maps to a light square");
            assert_eq!(coords_to_index(row, col), index);
        }
    }

    #[test]
    fn indexes_between_walks_the_diagonal_in_order() {
        assert_eq!(indexes_between(1, 6).unwrap(), Vec::<usize>::new());
        assert_eq!(indexes_between(1, 12).unwrap(), vec![7]);
        assert_eq!(
            indexes_between(5, 46).unwrap(),
            vec![10, 14, 19, 23, 28, 32, 37, 41]
        );
        assert_eq!(indexes_between(7, 23).unwrap(), vec![12, 18]);
        assert_eq!(indexes_between(8, 26).unwrap(), vec![12, 17, 21]);
        assert_eq!(
            indexes_between(44, 6).unwrap(),
            vec![39, 33, 28, 22, 17, 11]
        );
    }

    #[test]
    fn indexes_between_rejects_non_diagonal_pairs() {
        assert!(matches!(indexes_between(1, 2), Err(Error::InvalidMove(_))));
        assert!(matches!(indexes_between(23, 23), Err(Error::InvalidMove(_))));
        assert!(matches!(indexes_between(0, 6), Err(Error::InvalidMove(_))));
        assert!(matches!(indexes_between(46, 51), Err(Error::InvalidMove(_))));
    }

    #[test]
    fn home_rows() {
        assert!((1..=5).all(is_black_home_row));
        assert!(!is_black_home_row(6));
        assert!(!is_black_home_row(0));
        assert!((46..=50).all(is_white_home_row));
        assert!(!is_white_home_row(45));
        assert!(!is_white_home_row(51));
    }

    #[test]
    fn lines_of_sight_mid_board_limited() {
        assert_eq!(
            rays(23, 2),
            vec![vec![18, 12], vec![19, 14], vec![28, 32], vec![29, 34]]
        );
        assert_eq!(rays(27, 1), vec![vec![21], vec![22], vec![31], vec![32]]);
    }

    #[test]
    fn lines_of_sight_mid_board_full() {
        assert_eq!(
            rays(28, 10),
            vec![
                vec![22, 17, 11, 6],
                vec![23, 19, 14, 10, 5],
                vec![32, 37, 41, 46],
                vec![33, 39, 44, 50],
            ]
        );
    }

    #[test]
    fn lines_of_sight_edges() {
        assert_eq!(rays(1, 2), vec![vec![], vec![], vec![6], vec![7, 12]]);
        assert_eq!(rays(5, 2), vec![vec![], vec![], vec![10, 14], vec![]]);
        assert_eq!(rays(46, 2), vec![vec![], vec![41, 37], vec![], vec![]]);
        assert_eq!(rays(50, 2), vec![vec![44, 39], vec![45], vec![], vec![]]);
    }

    #[test]
    fn lines_of_sight_of_invalid_square_are_empty() {
        assert!(lines_of_sight(0, 10).iter().all(|ray| ray.is_empty()));
        assert!(lines_of_sight(51, 10).iter().all(|ray| ray.is_empty()));
    }
}
