//! Performance benchmarks for the Credit Pre-evaluation Engine.
//!
//! The engine is a pure synchronous computation, so these benches exercise
//! it directly:
//! - Approval path: validation, rate lookup, one payment calculation
//! - Counteroffer path: the nested term/bisection search (the bounded
//!   worst case of 9 terms x 40 payment evaluations)
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

use credit_engine::config::PolicyConfig;
use credit_engine::engine::evaluate;
use credit_engine::models::{Application, EmploymentType};

fn approved_application() -> Application {
    Application {
        name: "Ana Torres".to_string(),
        age: 30,
        monthly_income: Decimal::from(9_000),
        monthly_debt: Decimal::from(500),
        employment_type: EmploymentType::Employee,
        months_of_experience: 24,
        credit_score: 750,
        amount: Decimal::from(20_000),
        term: 24,
        active_defaults: false,
    }
}

fn counteroffer_application() -> Application {
    Application {
        name: "Luis Vega".to_string(),
        age: 40,
        monthly_income: Decimal::from(8_000),
        monthly_debt: Decimal::from(3_000),
        employment_type: EmploymentType::Employee,
        months_of_experience: 36,
        credit_score: 700,
        amount: Decimal::from(300_000),
        term: 12,
        active_defaults: false,
    }
}

fn bench_approval_path(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let application = approved_application();

    c.bench_function("evaluate_approved", |b| {
        b.iter(|| evaluate(black_box(&application), black_box(&policy)).unwrap())
    });
}

fn bench_counteroffer_path(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let application = counteroffer_application();

    c.bench_function("evaluate_counteroffer_search", |b| {
        b.iter(|| evaluate(black_box(&application), black_box(&policy)).unwrap())
    });
}

criterion_group!(benches, bench_approval_path, bench_counteroffer_path);
criterion_main!(benches);
