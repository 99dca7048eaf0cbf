//! Command dispatch benchmark suite.
//!
//! Measures the client-side cost of element commands against an in-memory
//! transport (no network):
//! - Chain lengths: 1, 10, 100
//! - Bridge script construction
//! - Visibility probe with an installed helper
//!
//! Run with: cargo bench --bench command_dispatch
//! Results saved to: target/criterion/

use std::sync::Arc;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use tokio::runtime::Runtime;

use webdriver_element::{BridgeOp, By, Element, PendingCommand, Result, Session, Transport};

// ============================================================================
// In-Memory Transport
// ============================================================================

struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn issue_command(&self, command: PendingCommand) -> Result<Value> {
        match command.path.as_str() {
            "/element" => Ok(json!({ "ELEMENT": "bench" })),
            "/execute" => Ok(json!(true)),
            _ => Ok(Value::Null),
        }
    }
}

fn element(rt: &Runtime) -> Element {
    let session = Session::builder(Arc::new(EchoTransport)).build();
    rt.block_on(session.find_element(By::css("#bench")))
        .expect("lookup")
}

// ============================================================================
// Benchmark Parameters
// ============================================================================

const CHAIN_LENGTHS: &[usize] = &[1, 10, 100];

// ============================================================================
// Benchmark: Chained Commands
// ============================================================================

fn bench_chained_clicks(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let el = element(&rt);

    let mut group = c.benchmark_group("chained_clicks");

    for &length in CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("click", length), &length, |b, &n| {
            b.to_async(&rt).iter(|| async {
                let mut current = el.clone();
                for _ in 0..n {
                    current = current.click().await.expect("click");
                }
                current
            });
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Bridge
// ============================================================================

fn bench_bridge_script(c: &mut Criterion) {
    let op = BridgeOp::Css("background-color".to_string());
    c.bench_function("bridge_script", |b| b.iter(|| op.script("jQuery")));
}

fn bench_visibility_probe(c: &mut Criterion) {
    let rt = Runtime::new().expect("runtime");
    let el = element(&rt);

    c.bench_function("visibility_probe", |b| {
        b.to_async(&rt)
            .iter(|| async { el.is_visible().await.expect("visible") });
    });
}

criterion_group!(
    benches,
    bench_chained_clicks,
    bench_bridge_script,
    bench_visibility_probe
);
criterion_main!(benches);
