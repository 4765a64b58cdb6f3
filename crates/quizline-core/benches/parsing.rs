use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizline_core::store::{parse_questions_str, validate_questions};

fn bench_question_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_parsing");

    let small = generate_questions_json(5);
    let large = generate_questions_json(500);

    group.bench_function("5_questions", |b| {
        b.iter(|| parse_questions_str(black_box(&small)))
    });

    group.bench_function("500_questions", |b| {
        b.iter(|| parse_questions_str(black_box(&large)))
    });

    group.bench_function("validate_500", |b| {
        let questions = parse_questions_str(&large).unwrap();
        b.iter(|| validate_questions(black_box(&questions)))
    });

    group.finish();
}

fn generate_questions_json(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"q": "Question {i}?", "choices": ["a{i}", "b{i}", "c{i}", "d{i}"], "answer": "C"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(",\n"))
}

criterion_group!(benches, bench_question_parsing);
criterion_main!(benches);
