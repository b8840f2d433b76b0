use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hexchess_core::game_state::chess_types::Color;
use hexchess_core::game_state::game_state::GameState;
use hexchess_core::move_generation::legal_move_generator::{generate_legal_moves, LegalMoveGenerator};
use hexchess_core::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    setup: &'static str,
    side_to_move: Color,
    expected_nodes: &'static [u64],
}

const OPENING_SETUP: &str = "///N7n///K8k/N7n";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        setup: OPENING_SETUP,
        side_to_move: Color::White,
        expected_nodes: &[17, 289, 5780],
    },
    BenchCase {
        name: "knight_capture",
        setup: "K/1n//N//10k",
        side_to_move: Color::White,
        expected_nodes: &[11, 109, 1361],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        setup: OPENING_SETUP,
        side_to_move: Color::White,
        expected_nodes: &[17, 289, 5780, 114_794],
    },
    BenchCase {
        name: "knight_capture",
        setup: "K/1n//N//10k",
        side_to_move: Color::White,
        expected_nodes: &[11, 109, 1361, 18_663],
    },
    BenchCase {
        name: "knight_capture_black",
        setup: "K/1n//N//10k",
        side_to_move: Color::Black,
        expected_nodes: &[11, 105, 1494],
    },
    BenchCase {
        name: "bare_kings_black",
        setup: "/////K1k",
        side_to_move: Color::Black,
        expected_nodes: &[7, 25, 219],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("HEXCHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn load(case: &BenchCase) -> GameState {
    let mut game = GameState::from_setup(case.setup).expect("benchmark setup should parse");
    game.side_to_move = case.side_to_move;
    game
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = load(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&LegalMoveGenerator, &mut warmup_game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&LegalMoveGenerator, black_box(&mut bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_legal_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for case in selected_cases() {
        let mut game = load(case);
        let expected = case.expected_nodes[0] as usize;
        assert_eq!(
            generate_legal_moves(&mut game).expect("benchmark position should be valid").len(),
            expected,
            "move count mismatch for {}",
            case.name
        );

        group.bench_function(case.name, |b| {
            b.iter(|| {
                let moves = generate_legal_moves(black_box(&mut game)).expect("generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_legal_move_generation);
criterion_main!(perft_benches);
