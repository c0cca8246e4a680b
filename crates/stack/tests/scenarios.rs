//! End-to-end scenarios over the public API

use pretty_assertions::assert_eq;
use strata_stack::prelude::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .try_init();
}

#[test]
fn test_dynamic_stack_of_owned_strings() {
    init_logging();

    let mut stack: DynamicStack<Option<String>> = DynamicStack::new().unwrap();
    assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
    assert!(stack.is_empty());
    assert!(!stack.is_full());

    for i in 0..40 {
        stack.push(Some(format!("stack str type {i}"))).unwrap();
    }

    assert_eq!(stack.capacity(), 64);
    assert_eq!(stack.size(), 40);
    assert!(!stack.is_empty());

    let mut printed = Vec::new();
    stack.for_each(&mut printed, |item, printed| {
        printed.push(item.clone().unwrap_or_default());
    });
    assert_eq!(printed.len(), 40);
    assert_eq!(printed[0], "stack str type 0");
    assert_eq!(printed[39], "stack str type 39");

    let popped = stack.pop();
    assert_eq!(popped.as_deref(), Some("stack str type 39"));
    assert_eq!(stack.size(), 39);

    // Take every string out before tearing the stack down.
    let mut released = Vec::new();
    stack.for_each(&mut released, |item, released| {
        if let Some(s) = item.take() {
            released.push(s);
        }
    });
    assert_eq!(released.len(), 39);
    assert!(stack.iter().all(Option::is_none));

    stack.destroy();
    assert!(!stack.is_allocated());
    assert_eq!(stack.state(), State::Destroyed);
}

#[test]
fn test_static_stack_of_ints() {
    init_logging();

    let mut stack = StaticStack::with_capacity(32).unwrap();
    assert_eq!(stack.size(), 0);

    stack.push_all([8, 100, 1, 3, 4]).unwrap();
    assert_eq!(stack.size(), 5);
    assert_eq!(stack.pop(), 4);
    assert_eq!(stack.pop(), 3);
    assert_eq!(stack.size(), 3);

    stack.push_all([4; 5]).unwrap();
    assert_eq!(stack.pop(), 4);

    stack.push_all([100, 100, 100, 100, 100, 100, 100, 100, 900, 100]).unwrap();
    assert_eq!(stack.capacity(), 32);
    assert_eq!(stack.size(), 17);

    let mut rendered = String::new();
    stack.for_each(&mut rendered, |item, out| {
        out.push_str(&item.to_string());
        out.push(' ');
    });
    assert_eq!(
        rendered,
        "8 100 1 4 4 4 4 100 100 100 100 100 100 100 100 900 100 "
    );

    assert_eq!(stack.pop(), 100);
    assert_eq!(stack.size(), 16);

    stack.destroy();
    assert!(!stack.is_allocated());
    stack.destroy();
    assert!(!stack.is_allocated());
}

#[test]
fn test_static_stack_fills_then_rejects() {
    let mut stack = StaticStack::with_config(StackConfig::new(4)).unwrap();
    stack.push_all(0..4).unwrap();
    assert!(stack.is_full());

    let err = stack.push(4).unwrap_err();
    assert_eq!(err.code(), "STACK:CAPACITY:EXCEEDED");
    assert!(err.is_retryable());
    assert_eq!(stack.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_visitor_mutation_is_seen_by_pop() {
    let mut stack = DynamicStack::new().unwrap();
    stack.push_all(1..=5).unwrap();

    let mut visits = 0;
    stack.for_each(&mut visits, |item, visits| {
        *visits += 1;
        *item *= 2;
    });

    assert_eq!(visits, 5);
    assert_eq!(*stack.peek(), 10);
    let drained: Vec<_> = std::iter::from_fn(|| stack.try_pop()).collect();
    assert_eq!(drained, vec![10, 8, 6, 4, 2]);
}

#[test]
fn test_large_config_preset() {
    let stack = DynamicStack::<u64>::with_config(StackConfig::large()).unwrap();
    assert_eq!(stack.capacity(), 1024);
    assert_eq!(stack.mode(), Mode::Dynamic);
}
