// File: benches/numdiff_benchmarks.rs

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ndarray::prelude::*;
use numopt::prelude::*;
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TestType {
    GradientDescent,
    NewtonRaphson,
}

impl TestType {
    pub fn name(&self) -> &'static str {
        match self {
            TestType::GradientDescent => "GradientDescent",
            TestType::NewtonRaphson => "NewtonRaphson",
        }
    }

    pub fn all_types() -> Vec<TestType> {
        vec![TestType::GradientDescent, TestType::NewtonRaphson]
    }
}

#[derive(Clone)]
struct TestProblem {
    name: String,
    function: fn(&Point) -> f64,
    x0: Array1<f64>,
    lambda: f64,
}

// Test Functions
fn sphere_function(x: &Point) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn rosenbrock_function(x: &Point) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len().saturating_sub(1) {
        sum += 100.0 * (x[i + 1] - x[i] * x[i]).powi(2) + (1.0 - x[i]).powi(2);
    }
    sum
}

fn ellipsoid_function(x: &Point) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, xi)| (i + 1) as f64 * xi * xi)
        .sum()
}

fn setup_test_problems() -> Vec<TestProblem> {
    vec![
        TestProblem {
            name: "sphere_2d".to_string(),
            function: sphere_function,
            x0: array![1.5, 1.5],
            lambda: 0.1,
        },
        TestProblem {
            name: "ellipsoid_5d".to_string(),
            function: ellipsoid_function,
            x0: Array1::from_elem(5, 0.5),
            lambda: 0.05,
        },
        TestProblem {
            name: "rosenbrock_2d".to_string(),
            function: rosenbrock_function,
            x0: array![-1.2, 1.0],
            lambda: 1e-3,
        },
    ]
}

fn run_optimization_benchmark(problem: &TestProblem, test_type: TestType, max_iters: usize) -> (f64, usize) {
    let config = MinimizerConfigBuilder::new().max_iters(max_iters).build();
    let x0 = Point::new(problem.x0.clone());
    let result = match test_type {
        TestType::GradientDescent => {
            gradient_descent_with_config(problem.function, x0, problem.lambda, config)
        }
        TestType::NewtonRaphson => newton_raphson_with_config(problem.function, x0, 1.0, config),
    };
    match result {
        Ok(res) => (res.fmin, res.iters),
        Err(_) => (f64::NAN, 0),
    }
}

fn bench_derivatives(c: &mut Criterion) {
    let mut group = c.benchmark_group("numdiff");
    group.measurement_time(Duration::from_secs(5));

    for &dim in &[2, 5, 10, 20] {
        let x = Point::new(Array1::linspace(-1.0, 1.0, dim));
        group.throughput(Throughput::Elements(dim as u64));
        group.bench_with_input(BenchmarkId::new("gradient", dim), &x, |b, x| {
            b.iter(|| black_box(numerical_gradient(&rosenbrock_function, black_box(x))));
        });
        group.bench_with_input(BenchmarkId::new("hessian", dim), &x, |b, x| {
            b.iter(|| black_box(numerical_hessian(&rosenbrock_function, black_box(x))));
        });
    }
    group.finish();
}

fn bench_minimizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimizers");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let problems = setup_test_problems();
    for test_type in TestType::all_types() {
        for problem in &problems {
            group.bench_with_input(
                BenchmarkId::new(test_type.name(), &problem.name),
                problem,
                |b, prob| {
                    b.iter(|| {
                        black_box(run_optimization_benchmark(
                            black_box(prob),
                            black_box(test_type),
                            black_box(1000),
                        ))
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(numdiff_benches, bench_derivatives, bench_minimizers);
criterion_main!(numdiff_benches);
