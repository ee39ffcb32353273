mod helpers;

use ferrous_resolv_application::use_cases::{
    DispatchQueryUseCase, QueryOutcome, ResolveQueryUseCase,
};
use ferrous_resolv_domain::{QueryRequest, RecordType, ResolveError};
use helpers::rdata::a;
use helpers::{MockEngine, RawAnswerBuilder};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::sync::mpsc;

fn setup() -> (Arc<MockEngine>, DispatchQueryUseCase) {
    let engine = Arc::new(MockEngine::new());
    let resolver = Arc::new(ResolveQueryUseCase::new(engine.clone()));
    (engine, DispatchQueryUseCase::new(resolver))
}

/// Dispatches with a callback that forwards `(context, outcome)`; the
/// channel closes once the callback has been consumed.
fn dispatch_collecting(
    dispatcher: &DispatchQueryUseCase,
    request: QueryRequest,
    context: u32,
) -> mpsc::UnboundedReceiver<(u32, QueryOutcome)> {
    let (tx, rx) = mpsc::unbounded_channel();
    dispatcher
        .dispatch_with_callback(request, context, move |context, outcome| {
            tx.send((context, outcome)).unwrap();
        })
        .unwrap();
    rx
}

// ── callback completion ────────────────────────────────────────────────────

#[tokio::test]
async fn test_callback_receives_context_and_answer_once() {
    let (engine, dispatcher) = setup();
    engine.set_answer(
        "example.com",
        1,
        RawAnswerBuilder::new("example.com", RecordType::A)
            .rdata(a(Ipv4Addr::new(192, 0, 2, 1)))
            .build(),
    );

    let mut rx = dispatch_collecting(
        &dispatcher,
        QueryRequest::new("example.com", RecordType::A),
        77,
    );

    let (context, outcome) = rx.recv().await.unwrap();
    assert_eq!(context, 77);
    assert!(outcome.unwrap().have_data());
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_callback_runs_once_on_engine_error() {
    let (engine, dispatcher) = setup();
    engine.set_error("broken.example", 1, 1);

    let mut rx = dispatch_collecting(
        &dispatcher,
        QueryRequest::new("broken.example", RecordType::A),
        1,
    );

    let (_, outcome) = rx.recv().await.unwrap();
    assert_eq!(outcome.unwrap_err().code(), Some(1));
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_callback_runs_once_when_engine_panics() {
    let (engine, dispatcher) = setup();
    engine.set_panic("boom.example", 1);

    let mut rx = dispatch_collecting(
        &dispatcher,
        QueryRequest::new("boom.example", RecordType::A),
        5,
    );

    let (context, outcome) = rx.recv().await.unwrap();
    assert_eq!(context, 5);
    match outcome {
        Err(ResolveError::Dispatch(reason)) => assert!(reason.contains("boom.example")),
        other => panic!("expected dispatch error, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_many_dispatches_each_complete_once() {
    let (_engine, dispatcher) = setup();
    let (tx, mut rx) = mpsc::unbounded_channel();

    for i in 0..32u32 {
        let tx = tx.clone();
        dispatcher
            .dispatch_with_callback(
                QueryRequest::new(format!("host{}.example", i), RecordType::A),
                i,
                move |i, outcome| {
                    tx.send((i, outcome.is_ok())).unwrap();
                },
            )
            .unwrap();
    }
    drop(tx);

    let mut seen = Vec::new();
    while let Some((i, ok)) = rx.recv().await {
        assert!(ok);
        seen.push(i);
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..32).collect::<Vec<_>>());
}

// ── channel completion ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_dispatch_delivers_on_own_channel() {
    let (engine, dispatcher) = setup();
    engine.set_error("a.example", 1, 3);

    let first = dispatcher
        .dispatch(QueryRequest::new("a.example", RecordType::A))
        .unwrap();
    let second = dispatcher
        .dispatch(QueryRequest::new("b.example", RecordType::A))
        .unwrap();

    assert_eq!(first.await.unwrap().unwrap_err().code(), Some(3));
    assert!(second.await.unwrap().unwrap().nx_domain());
}

#[tokio::test]
async fn test_dropped_receiver_still_runs_query() {
    let (engine, dispatcher) = setup();

    let rx = dispatcher
        .dispatch(QueryRequest::new("ignored.example", RecordType::A))
        .unwrap();
    drop(rx);

    let answer = dispatcher
        .resolve(QueryRequest::new("after.example", RecordType::A))
        .await;
    assert!(answer.is_ok());

    // Blocking pool tasks are not ordered; wait for the first one.
    for _ in 0..100 {
        if engine.queries().len() == 2 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(engine.queries().len(), 2);
}

#[tokio::test]
async fn test_resolve_awaits_outcome() {
    let (engine, dispatcher) = setup();
    engine.set_error("x.example", 28, 9);

    let err = dispatcher
        .resolve(QueryRequest::new("x.example", RecordType::AAAA))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(9));
}

// ── outside a runtime ──────────────────────────────────────────────────────

#[test]
fn test_dispatch_without_runtime_fails_synchronously() {
    let (engine, dispatcher) = setup();

    let err = dispatcher
        .dispatch(QueryRequest::new("example.com", RecordType::A))
        .unwrap_err();

    assert!(matches!(err, ResolveError::Dispatch(_)));
    assert!(engine.queries().is_empty());
}

#[test]
fn test_dispatch_after_runtime_shutdown_completes_with_error() {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .unwrap();
    let handle = runtime.handle().clone();
    runtime.shutdown_background();
    let _entered = handle.enter();

    let (engine, dispatcher) = setup();
    let completions = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&completions);

    let result = dispatcher.dispatch_with_callback(
        QueryRequest::new("example.com", RecordType::A),
        5u32,
        move |context, outcome| sink.lock().unwrap().push((context, outcome)),
    );

    assert!(result.is_ok());
    let completions = completions.lock().unwrap();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].0, 5);
    assert!(matches!(completions[0].1, Err(ResolveError::Dispatch(_))));
    assert!(engine.queries().is_empty());
}
