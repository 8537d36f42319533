// Opt-in runtime harness. Run with: cargo bench --bench runtime
use std::hint::black_box;
use std::time::{Duration, Instant};

use moneyfield::interpret;
use moneyfield::locale::resolve_tag;

struct Case {
    name: &'static str,
    locale: &'static str,
    text: &'static str,
    calculable: bool,
}

fn main() {
    let iterations = env_u64("MONEYFIELD_RUNTIME_ITERS", 20_000);
    let warmup = env_u64("MONEYFIELD_RUNTIME_WARMUP", 100);
    let budget_us = env_f64("MONEYFIELD_RUNTIME_BUDGET_US");

    println!("moneyfield runtime harness");
    println!("iterations={iterations} warmup={warmup}");
    if let Some(budget) = budget_us {
        println!("budget_us={budget}");
    }

    let cases = [
        Case {
            name: "plain_de",
            locale: "de-DE",
            text: "123.456,789",
            calculable: false,
        },
        Case {
            name: "plain_hi",
            locale: "hi-IN",
            text: "1,23,45,67,890.12",
            calculable: false,
        },
        Case {
            name: "calc_de",
            locale: "de-DE",
            text: "1,23 * (4 + 5,5) / 3 - 2 ^ 3",
            calculable: true,
        },
        Case {
            name: "calc_nested",
            locale: "en-US",
            text: "((((1 + 2) * 3) - 4) / 5) ^ 2 + ((6 - 7) * (8 + 9))",
            calculable: true,
        },
    ];

    let mut failed = false;
    for case in &cases {
        let avg_us = run_case(case, iterations, warmup);
        if let Some(budget) = budget_us
            && avg_us > budget
        {
            eprintln!(
                "budget exceeded for {}: avg_us={:.3} budget_us={:.3}",
                case.name, avg_us, budget
            );
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn run_case(case: &Case, iterations: u64, warmup: u64) -> f64 {
    let profile = resolve_tag(case.locale);

    for _ in 0..warmup {
        let result = interpret(case.text, &profile, case.calculable, None).expect("warmup run failed");
        black_box(result);
    }

    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        let result = interpret(black_box(case.text), &profile, case.calculable, None)
            .expect("timed run failed");
        black_box(result);
        total += start.elapsed();
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_us = if iterations == 0 {
        0.0
    } else {
        total.as_secs_f64() * 1_000_000.0 / iterations as f64
    };

    println!(
        "case {}: avg_us={:.3} total_ms={:.3}",
        case.name, avg_us, total_ms
    );

    avg_us
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value > 0.0)
}
