use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logics::{parse_ldl, parse_ltl, parse_pl, Formula, Logic};

fn bench_parse_pl(c: &mut Criterion) {
    c.bench_function("parse_pl", |b| {
        b.iter(|| parse_pl(black_box("a & b | !c -> (d <-> e) & \"long atom name\"")))
    });
}

fn bench_parse_ltl(c: &mut Criterion) {
    c.bench_function("parse_ltl", |b| {
        b.iter(|| parse_ltl(black_box("G(request -> F(grant)) & (a U b U c) & X[!](!d)")))
    });
}

fn bench_parse_ldl(c: &mut Criterion) {
    c.bench_function("parse_ldl", |b| {
        b.iter(|| parse_ldl(black_box("[(a + b ; c)*](<d>tt & [(e)?]ff)")))
    });
}

fn bench_construct(c: &mut Criterion) {
    let operands: Vec<Formula> = (0..64)
        .map(|i| Formula::atom(Logic::Pl, format!("p{i}")))
        .collect();
    c.bench_function("and_64", |b| {
        b.iter(|| Formula::and(black_box(operands.clone())))
    });
}

criterion_group!(
    benches,
    bench_parse_pl,
    bench_parse_ltl,
    bench_parse_ldl,
    bench_construct
);
criterion_main!(benches);
