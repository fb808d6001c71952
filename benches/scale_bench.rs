use criterion::{Criterion, black_box, criterion_group, criterion_main};
use modescale::*;

fn bench_all_scales(c: &mut Criterion) {
    c.bench_function("all_roots_all_modes", |b| {
        b.iter(|| {
            for mode in Mode::ALL {
                for letter in Letter::ALL {
                    for accidental in -1..=1 {
                        let scale = Scale::new(Pitch::new(letter, accidental), mode);
                        black_box(scale);
                    }
                }
            }
        });
    });
}

fn bench_run(c: &mut Criterion) {
    c.bench_function("run_parse_and_format", |b| {
        b.iter(|| {
            let line = run([black_box("Eb"), black_box("6")]);
            black_box(line)
        });
    });
}

criterion_group!(benches, bench_all_scales, bench_run);
criterion_main!(benches);
