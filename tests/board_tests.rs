//! Board placement and scoring scenarios.
//!
//! The scoring walkthrough builds one kingdom domino by domino and checks the
//! running score after each step.

mod common;

use common::{domino, init_logging};
use kingdomino_engine::board::{
    Board, BoardExtent, Coord, DominoEnd, Edge, Landscape, PlacementError, TileId, CASTLE,
};
use kingdomino_engine::core::GameConfiguration;

use Landscape::{Forest, Water, Wheat};

fn at(board: &Board, x: i32, y: i32) -> TileId {
    board
        .tile_at(Coord::new(x, y))
        .unwrap_or_else(|| panic!("no tile at {},{}", x, y))
}

/// Play the walkthrough on `board`, returning the score after each step.
fn play_walkthrough(board: &mut Board) -> Vec<u32> {
    let mut scores = Vec::new();

    board
        .place_domino(&domino((Forest, 1), (Wheat, 0), 1), CASTLE, Edge::East, DominoEnd::Left)
        .unwrap();
    scores.push(board.score());

    let mut flipped = domino((Wheat, 1), (Forest, 0), 2);
    flipped.rotate();
    flipped.rotate();
    board
        .place_domino(&flipped, CASTLE, Edge::West, DominoEnd::Left)
        .unwrap();
    scores.push(board.score());

    board
        .place_domino(&domino((Forest, 0), (Forest, 0), 3), CASTLE, Edge::North, DominoEnd::Left)
        .unwrap();
    let anchor = at(board, -1, 0);
    board
        .place_domino(&domino((Forest, 0), (Forest, 0), 4), anchor, Edge::North, DominoEnd::Right)
        .unwrap();
    scores.push(board.score());

    let anchor = at(board, -1, 0);
    board
        .place_domino(&domino((Wheat, 0), (Wheat, 0), 5), anchor, Edge::South, DominoEnd::Right)
        .unwrap();
    board
        .place_domino(&domino((Wheat, 0), (Forest, 0), 6), CASTLE, Edge::South, DominoEnd::Left)
        .unwrap();
    scores.push(board.score());

    let anchor = at(board, -1, 1);
    board
        .place_domino(&domino((Forest, 1), (Water, 0), 7), anchor, Edge::North, DominoEnd::Right)
        .unwrap();
    let anchor = at(board, 0, 1);
    board
        .place_domino(&domino((Water, 1), (Forest, 0), 8), anchor, Edge::North, DominoEnd::Left)
        .unwrap();
    scores.push(board.score());

    scores
}

#[test]
fn test_empty_board_scores_zero() {
    init_logging();
    let board = Board::default();

    assert_eq!(board.score(), 0);
    assert_eq!(board.tile_count(), 1);
    assert_eq!(board.tile_at(Coord::ORIGIN), Some(CASTLE));
    assert_eq!(board.tile(CASTLE).unwrap().landscape(), Landscape::Castle);
}

#[test]
fn test_scoring_walkthrough() {
    init_logging();
    let mut board = Board::default();

    assert_eq!(play_walkthrough(&mut board), vec![1, 2, 7, 11, 24]);
    assert_eq!(board.tile_count(), 17);
    assert_eq!(
        board.extent(),
        BoardExtent {
            x_min: -2,
            x_max: 2,
            y_min: -1,
            y_max: 2
        }
    );
}

#[test]
fn test_scoring_walkthrough_with_middle_bonus() {
    init_logging();
    let mut board = Board::new(&GameConfiguration::new(2).with_middle_castle_bonus());

    // Centered after the fourth step, off-center once the top row is added.
    assert_eq!(play_walkthrough(&mut board), vec![1, 12, 7, 21, 24]);
}

#[test]
fn test_score_is_repeatable() {
    init_logging();
    let mut board = Board::default();
    play_walkthrough(&mut board);

    for _ in 0..3 {
        assert_eq!(board.score(), 24);
    }
    assert!(board.graph().is_at_rest());
}

#[test]
fn test_regions_sum_to_score() {
    init_logging();
    let mut board = Board::default();
    play_walkthrough(&mut board);

    let regions = board.regions();
    assert_eq!(regions.iter().map(|r| r.score()).sum::<u32>(), board.score());
    assert_eq!(board.total_crowns(), 4);

    let biggest = regions.iter().map(|r| r.size()).max().unwrap();
    assert_eq!(board.largest_region().unwrap().size(), biggest);
    assert!(regions.iter().all(|r| r.landscape != Landscape::Castle));
}

#[test]
fn test_links_are_reciprocal() {
    init_logging();
    let mut board = Board::default();
    play_walkthrough(&mut board);

    for (id, tile) in board.graph().iter() {
        for (edge, neighbor) in tile.neighbors() {
            let back = board.tile(neighbor).unwrap().neighbor(edge.opposite());
            assert_eq!(back, Some(id), "{} -> {} across {:?}", id, neighbor, edge);
            assert_eq!(tile.coord().step(edge), board.tile(neighbor).unwrap().coord());
        }
    }
}

#[test]
fn test_rejections_leave_board_unchanged() {
    init_logging();
    let mut board = Board::default();
    play_walkthrough(&mut board);
    let before = board.coordinate_map();
    let score = board.score();

    let forest = domino((Forest, 0), (Forest, 0), 9);
    assert_eq!(
        board.place_domino(&forest, CASTLE, Edge::East, DominoEnd::Left),
        Err(PlacementError::Overlap {
            coord: Coord::new(1, 0)
        })
    );
    assert_eq!(
        board.place_domino(&forest, TileId(99), Edge::East, DominoEnd::Left),
        Err(PlacementError::UnknownAnchor(TileId(99)))
    );

    let east = at(&board, 2, 0);
    assert_eq!(
        board.place_domino(&forest, east, Edge::East, DominoEnd::Left),
        Err(PlacementError::OutOfBounds {
            coord: Coord::new(4, 0),
            max_size: 5
        })
    );

    assert_eq!(board.coordinate_map(), before);
    assert_eq!(board.score(), score);
    assert_eq!(board.tile_count(), 17);
}

#[test]
fn test_water_cannot_touch_only_wheat() {
    init_logging();
    let mut board = Board::default();
    board
        .place_domino(&domino((Wheat, 0), (Wheat, 0), 1), CASTLE, Edge::East, DominoEnd::Left)
        .unwrap();

    let water = domino((Water, 0), (Water, 0), 2);
    let wheat_end = at(&board, 2, 0);
    assert_eq!(
        board.place_domino(&water, wheat_end, Edge::North, DominoEnd::Left),
        Err(PlacementError::NoMatchingEdge)
    );

    // Beside the castle any landscape is welcome.
    assert!(board
        .place_domino(&water, CASTLE, Edge::North, DominoEnd::Left)
        .is_ok());
}

#[test]
fn test_expanded_board_allows_wider_kingdom() {
    init_logging();
    let wheat = domino((Wheat, 0), (Wheat, 0), 1);

    let mut standard = Board::default();
    let mut expanded = Board::new(&GameConfiguration::new(2).with_expanded_board());
    for board in [&mut standard, &mut expanded] {
        board
            .place_domino(&wheat, CASTLE, Edge::East, DominoEnd::Left)
            .unwrap();
        let anchor = at(board, 2, 0);
        board
            .place_domino(&wheat, anchor, Edge::East, DominoEnd::Left)
            .unwrap();
    }

    // x would reach 6
    let anchor = at(&standard, 4, 0);
    assert!(matches!(
        standard.place_domino(&wheat, anchor, Edge::East, DominoEnd::Left),
        Err(PlacementError::OutOfBounds { .. })
    ));
    let anchor = at(&expanded, 4, 0);
    assert!(expanded
        .place_domino(&wheat, anchor, Edge::East, DominoEnd::Left)
        .is_ok());
    assert_eq!(expanded.extent().width(), 6);
}

#[test]
fn test_snapshot_independent_of_board() {
    init_logging();
    let mut board = Board::default();
    let snapshot = board.coordinate_map();

    board
        .place_domino(&domino((Forest, 0), (Forest, 0), 1), CASTLE, Edge::South, DominoEnd::Left)
        .unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(board.coordinate_map().len(), 3);
}

#[test]
fn test_legal_placements_all_commit() {
    init_logging();
    let mut board = Board::default();
    play_walkthrough(&mut board);
    let probe = domino((Forest, 0), (Water, 0), 10);

    let placements = board.legal_placements(&probe);
    assert!(!placements.is_empty());

    for placement in placements {
        let mut copy = board.clone();
        let placed = copy
            .place_domino(&probe, placement.anchor, placement.edge, placement.end)
            .unwrap();
        assert_eq!(copy.tile(placed).unwrap().coord(), placement.coords.connected);
        assert_eq!(copy.tile_count(), board.tile_count() + 2);
    }
}

#[test]
fn test_chained_forest_scores_by_region() {
    init_logging();
    let mut board = Board::default();

    // Wheat end against the castle, forest end out west.
    board
        .place_domino(&domino((Forest, 2), (Wheat, 0), 1), CASTLE, Edge::West, DominoEnd::Right)
        .unwrap();
    assert_eq!(board.tile(at(&board, -2, 0)).unwrap().landscape(), Forest);
    assert_eq!(board.score(), 2);

    let forest_end = at(&board, -2, 0);
    board
        .place_domino(
            &domino((Forest, 0), (Forest, 0), 2),
            forest_end,
            Edge::North,
            DominoEnd::Left,
        )
        .unwrap();

    let regions = board.regions();
    let forest = regions.iter().find(|r| r.landscape == Forest).unwrap();
    let wheat = regions.iter().find(|r| r.landscape == Wheat).unwrap();
    assert_eq!((forest.size(), forest.crowns, forest.score()), (3, 2, 6));
    assert_eq!((wheat.size(), wheat.crowns, wheat.score()), (1, 0, 0));
    assert_eq!(board.score(), 6);
}

#[test]
fn test_surrounded_castle_rejects_every_placement() {
    init_logging();
    let mut board = Board::default();
    let wheat = domino((Wheat, 0), (Wheat, 0), 1);

    for (edge, end) in [
        (Edge::East, DominoEnd::Left),
        (Edge::West, DominoEnd::Right),
        (Edge::North, DominoEnd::Left),
        (Edge::South, DominoEnd::Left),
    ] {
        board.place_domino(&wheat, CASTLE, edge, end).unwrap();
    }
    assert_eq!(board.tile_count(), 9);
    let before = board.coordinate_map();

    let forest = domino((Forest, 1), (Forest, 0), 2);
    for edge in Edge::ALL {
        for end in [DominoEnd::Left, DominoEnd::Right] {
            assert_eq!(
                board.place_domino(&forest, CASTLE, edge, end),
                Err(PlacementError::Overlap {
                    coord: Coord::ORIGIN.step(edge)
                }),
                "{:?} {:?}",
                edge,
                end
            );
        }
    }

    assert_eq!(board.tile_count(), 9);
    assert_eq!(board.coordinate_map(), before);
}
