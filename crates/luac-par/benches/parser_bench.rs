use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luac_par::Parser;
use luac_util::Interner;

const SOURCE: &str = r#"
local total = 0
local i = 0
while i < 1000 do
  total = total + i * 2 - 1
  i = i + 1
end

function double(x)
  return x * 2
end

print(double(total))
"#;

fn parse_all(source: &str) {
    let mut interner = Interner::new();
    let mut parser = Parser::new(source, &mut interner).expect("parser construction");
    parser.parse_program().expect("parse ok");
}

fn bench_parser(c: &mut Criterion) {
    c.bench_function("parse_loop_and_function_program", |b| {
        b.iter(|| parse_all(black_box(SOURCE)));
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
