use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rowan_chess::game_state::game_state::GameState;
use rowan_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8_902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2_039],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2_812],
    },
];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(10));

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("bench FEN should parse");
        let depth = case.expected_nodes.len() as u8;
        let expected = *case
            .expected_nodes
            .last()
            .expect("every bench case lists at least one depth");

        // Validate once outside the measured loop.
        assert_eq!(perft(&game, depth), expected, "bad counts for {}", case.name);

        group.throughput(Throughput::Elements(expected));
        group.bench_with_input(
            BenchmarkId::new(case.name, depth),
            &(game, depth),
            |b, (game, depth)| b.iter(|| perft(black_box(game), black_box(*depth))),
        );
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
