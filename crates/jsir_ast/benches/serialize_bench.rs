//! Benchmark harness for module serialization.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p jsir_ast

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsir_ast::*;

/// Build a function whose body is a switch with `cases` members, each
/// holding a nested conditional.
fn build_function(index: usize, cases: usize) -> FunctionNode {
    let members = (0..cases)
        .map(|case| {
            let cond = ConditionalStatement::new(
                BooleanLiteral::new(case % 2 == 0).boxed(),
                Some(BlockStatement::with_statements(vec![EmptyStatement::new().boxed()]).boxed()),
                Some(BlockStatement::absent().boxed()),
            );
            SwitchMember::new([case.to_string()], vec![cond.boxed()])
        })
        .collect();
    let switch = SwitchStatement::new(BooleanLiteral::new(true).boxed(), Some(members));
    let decls = VariableStatement::new(vec![
        VariableDeclarator::new("a", Some(BooleanLiteral::new(true).boxed())),
        VariableDeclarator::new("b", None),
    ]);
    FunctionNode::new(
        format!("f{}", index),
        ["x", "y"],
        Some(BlockStatement::with_statements(vec![decls.boxed(), switch.boxed()])),
    )
}

fn build_module(functions: usize) -> Module {
    let mut module = Module::new();
    module.push_all((0..functions).map(|i| build_function(i, 8).boxed()));
    module
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_module");
    for functions in [1usize, 10, 100] {
        let module = build_module(functions);
        group.bench_with_input(BenchmarkId::from_parameter(functions), &module, |b, m| {
            b.iter(|| black_box(m.serialize()))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_module_100", |b| b.iter(|| black_box(build_module(100))));
}

criterion_group!(benches, bench_serialize, bench_build);
criterion_main!(benches);
