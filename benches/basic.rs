use asciimath_unicode::{convert, parse, render, RenderConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

static GREEK: &str = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu nu xi
pi rho sigma tau upsilon phi chi psi omega Gamma Delta Theta Lambda Xi Pi Sigma Phi Psi Omega
varepsilon vartheta varphi alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu";

fn match_on_greek(c: &mut Criterion) {
    c.bench_function("match on greek", |b| {
        b.iter(|| convert(black_box(GREEK), RenderConfig::default()).unwrap())
    });
}

fn subscript_torture(c: &mut Criterion) {
    let expression = parse("a_(5_(5_(5_(5_(5_(5_(5_(5_(5_(5_(5_b))))))))))").unwrap();
    c.bench_function("subscript torture", |b| {
        b.iter(|| render(black_box(&expression), RenderConfig::default()))
    });
}

fn sum_of_cubes(c: &mut Criterion) {
    c.bench_function("sum of cubes", |b| {
        b.iter(|| {
            convert(
                black_box("sum_(i=1)^n i^3=((n(n+1))/2)^2"),
                RenderConfig::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, match_on_greek, subscript_torture, sum_of_cubes);
criterion_main!(benches);
