use tourney_core::{Board, BoardError, SvgOptions, UNUSED, parse_move_text, render_svg, to_move_text};

/// 6x6 の閉じたナイトの巡回（訪問順）
const TOUR_6X6: [i32; 36] = [
    0, 13, 24, 32, 28, 17, 4, 15, 11, 3, 7, 18, 31, 20, 9, 5, 16, 29, 33, 22, 35, 27, 23, 34, 26, 30,
    19, 6, 2, 10, 14, 1, 12, 25, 21, 8,
];

/// 6x6 の巡回をテキスト形式にしたもの
const TOUR_6X6_TEXT: &str = "657455\n053043\n652062\n621265\n704014\n110133\n";

/// 4x4 の tourney（4本の長さ4の閉路）
const TOURNEY_4X4: [[i32; 4]; 4] = [[0, 9, 15, 6], [3, 5, 12, 10], [1, 8, 14, 7], [2, 4, 13, 11]];

fn cycle_edges(cycle: &[i32]) -> impl Iterator<Item = (i32, i32)> + '_ {
    (0..cycle.len()).map(move |k| (cycle[k], cycle[(k + 1) % cycle.len()]))
}

fn tour_6x6() -> Board {
    let mut board = Board::with_seed(6, 6, 1).unwrap();
    for (a, b) in cycle_edges(&TOUR_6X6) {
        assert!(board.is_knight_move(a, b), "{a} -> {b}");
        assert!(board.insert_undirected_move(a, b).unwrap());
    }
    board
}

fn tourney_4x4() -> Board {
    let mut board = Board::with_seed(4, 4, 1).unwrap();
    for cycle in &TOURNEY_4X4 {
        for (a, b) in cycle_edges(cycle) {
            assert!(board.is_knight_move(a, b), "{a} -> {b}");
            assert!(board.insert_undirected_move(a, b).unwrap());
        }
    }
    board
}

#[test]
fn test_tour_6x6_is_tour_and_tourney() {
    let board = tour_6x6();
    assert!(board.is_tour());
    assert!(board.is_tourney());
    assert_eq!(board.cycle_count(), Some(1));

    let report = board.report();
    assert_eq!(report.used_cells, 36);
    assert!(report.tour);
    assert_eq!(report.cycles, Some(1));
}

#[test]
fn test_deleting_any_edge_breaks_tour() {
    for (a, b) in cycle_edges(&TOUR_6X6) {
        let mut board = tour_6x6();
        assert!(board.delete_move(a, b));
        assert!(!board.is_move(a, b));
        assert!(!board.is_tour(), "{a} -> {b}");
        assert!(!board.is_tourney(), "{a} -> {b}");
        assert_eq!(board.cycle_count(), None);
        // 2回目は何も消さない
        assert!(!board.delete_move(a, b));
    }
}

#[test]
fn test_tourney_4x4_is_not_tour() {
    let board = tourney_4x4();
    assert!(board.is_tourney());
    assert!(!board.is_tour());
    assert_eq!(board.cycle_count(), Some(4));
}

#[test]
fn test_direction_round_trip_keeps_structure() {
    let mut board = tour_6x6();
    let before = board.moves().to_vec();

    board.make_directed();
    assert!(board.is_directed());
    assert!(board.is_tour());
    assert!(board.is_tourney());
    assert!(matches!(
        board.insert_undirected_move(0, 13),
        Err(BoardError::NotUndirected { .. })
    ));

    assert!(board.make_undirected());
    assert!(board.is_undirected());
    assert!(board.is_tour());
    assert_eq!(board.moves(), &before[..]);
}

#[test]
fn test_directed_inserts_with_mixed_orientation() {
    let mut board = Board::new(6, 6).unwrap();
    board.make_directed();
    for (k, (a, b)) in cycle_edges(&TOUR_6X6).enumerate() {
        let inserted = if k % 3 == 0 {
            board.insert_directed_move(b, a)
        } else {
            board.insert_directed_move(a, b)
        };
        assert!(inserted.unwrap());
    }
    assert!(board.is_tour());
    assert!(board.make_undirected());
    assert!(board.is_tour());
    for (a, b) in cycle_edges(&TOUR_6X6) {
        assert!(board.is_move(a, b));
    }
}

#[test]
fn test_tourney_copied_into_quadrants() {
    let tile = tourney_4x4();

    let mut board = Board::new(8, 8).unwrap();
    assert_eq!(board.copy_to_sub_board(&tile, 4, 4).unwrap(), 16);
    for cycle in &TOURNEY_4X4 {
        for (a, b) in cycle_edges(cycle) {
            let (ax, ay) = tile.coords(a);
            let (bx, by) = tile.coords(b);
            assert!(board.is_move(board.index_of(ax + 4, ay + 4), board.index_of(bx + 4, by + 4)));
        }
    }
    assert!(!board.is_tourney());
    assert_eq!(board[0], UNUSED);

    for (x0, y0) in [(0, 0), (4, 0), (0, 4)] {
        assert_eq!(board.copy_to_sub_board(&tile, x0, y0).unwrap(), 16);
    }
    assert!(board.is_tourney());
    assert_eq!(board.cycle_count(), Some(16));

    let mut directed = Board::new(8, 8).unwrap();
    directed.make_directed();
    for (x0, y0) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        assert_eq!(directed.copy_to_sub_board(&tile, x0, y0).unwrap(), 16);
    }
    assert!(directed.is_tourney());
    assert_eq!(directed.cycle_count(), Some(16));
}

#[test]
fn test_tour_text_round_trip() {
    let board = tour_6x6();
    let text = to_move_text(&board).unwrap();
    assert_eq!(text, TOUR_6X6_TEXT);

    let parsed = parse_move_text(&text).unwrap();
    assert_eq!(parsed.moves(), board.moves());
    assert!(parsed.is_tour());
}

#[test]
fn test_tour_svg_draws_every_move() {
    let board = tour_6x6();
    let svg = render_svg(&board, &SvgOptions::default()).unwrap();
    // 罫線 5+5 本と手 36 本
    assert_eq!(svg.matches("<line").count(), 46);
    assert_eq!(svg.matches("<circle").count(), 36);
}
