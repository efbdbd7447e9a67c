//! Scoring engine: placement points, floor schedule, bonuses, winner.

use azul_engine::board::{wall_color, wall_column, PlayerBoard, Wall, WALL_SIZE};
use azul_engine::core::{PlayerId, PlayerMap, Tile};
use azul_engine::rules::{decide_result, GameResult};
use azul_engine::scoring::{end_game_bonus, floor_penalty, placement_score};

fn wall_with(cells: &[(usize, usize)]) -> Wall {
    let mut wall = Wall::new();
    for &(row, col) in cells {
        wall.place(row, wall_color(row, col)).unwrap();
    }
    wall
}

#[test]
fn test_wall_layout_is_a_latin_square() {
    for row in 0..WALL_SIZE {
        for color in Tile::ALL {
            let col = wall_column(row, color);
            assert_eq!(wall_color(row, col), color);
        }
        let colors: std::collections::HashSet<_> = (0..WALL_SIZE).map(|c| wall_color(row, c)).collect();
        assert_eq!(colors.len(), WALL_SIZE);
    }
    assert_eq!(wall_column(0, Tile::Blue), 0);
    assert_eq!(wall_column(1, Tile::Blue), 1);
    assert_eq!(wall_column(1, Tile::Turquoise), 0);
}

#[test]
fn test_isolated_placement_scores_one() {
    let wall = wall_with(&[(4, 4)]);
    assert_eq!(placement_score(&wall, 2, 2), 1);
}

#[test]
fn test_left_and_top_neighbours_score_three() {
    let wall = wall_with(&[(2, 1), (1, 2), (2, 2)]);
    assert_eq!(placement_score(&wall, 2, 2), 3);
}

#[test]
fn test_runs_score_per_tile() {
    // Horizontal run of four ending at the new tile
    let wall = wall_with(&[(3, 0), (3, 1), (3, 2), (3, 3)]);
    assert_eq!(placement_score(&wall, 3, 3), 4);

    // Run on both sides of the new tile
    let wall = wall_with(&[(0, 0), (0, 1), (0, 3), (0, 4), (0, 2)]);
    assert_eq!(placement_score(&wall, 0, 2), 5);
}

#[test]
fn test_floor_schedule() {
    let totals: Vec<u32> = (0..=7).map(floor_penalty).collect();
    assert_eq!(totals, vec![0, 1, 2, 4, 6, 8, 11, 14]);
}

#[test]
fn test_full_wall_bonus() {
    let mut wall = Wall::new();
    for row in 0..WALL_SIZE {
        for color in Tile::ALL {
            wall.place(row, color).unwrap();
        }
    }
    let bonus = end_game_bonus(&wall);
    assert_eq!((bonus.rows, bonus.columns, bonus.colors), (5, 5, 5));
    assert_eq!(bonus.total(), 5 * 2 + 5 * 7 + 5 * 10);
}

#[test]
fn test_winner_tie_break() {
    let mut leader = PlayerBoard::new();
    leader.set_score(40);
    for color in Tile::ALL {
        leader.wall_mut().place(0, color).unwrap();
    }
    let mut chaser = PlayerBoard::new();
    chaser.set_score(40);

    let boards = PlayerMap::new(2, |p| if p.index() == 0 { chaser.clone() } else { leader.clone() });
    assert_eq!(decide_result(&boards), GameResult::Winner(PlayerId::new(1)));

    let boards = PlayerMap::new(2, |_| chaser.clone());
    assert_eq!(
        decide_result(&boards),
        GameResult::Draw(vec![PlayerId::new(0), PlayerId::new(1)])
    );
}
