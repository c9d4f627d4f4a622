//! Tests for the live responsive state driven by viewport hosts.
//!
//! These tests verify that:
//! - Resize events update every derived read
//! - Teardown unsubscribes exactly once and ignores later events
//! - Polled hosts are read live and publish on refresh
//! - Effects and context consumers see the same state
//! - Dropped states are withdrawn from context
//!
//! Note: These tests run serially because they share the thread-local
//! reactive runtime and its context map.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serial_test::serial;
use stratum::reactive::create_effect;
use stratum_test::prelude::*;

// ============================================================================
// Subscribable hosts
// ============================================================================

/// Width 700 is mobile, 900 is not; teardown releases the subscription once.
#[test]
#[serial]
fn test_resize_from_mobile_to_tablet() {
    init_tracing();
    let host = MockViewport::new(700.0, 600.0);
    let state = ResponsiveState::new(host.source());

    assert_eq!(host.subscribe_count(), 1);
    assert!(state.is_mobile(), "700px should be mobile");

    host.resize(900.0, 600.0);
    assert!(!state.is_mobile(), "900px should not be mobile");
    assert!(state.is_tablet());
    assert_eq!(state.breakpoint(), ScreenSizeBp::Sm);

    state.teardown();
    assert_eq!(host.unsubscribe_count(), 1);
    assert_eq!(host.listener_count(), 0);

    let delivered = host.delivered_count();
    host.resize(2000.0, 1200.0);
    assert_eq!(host.delivered_count(), delivered, "no listener should remain");
    assert_eq!(host.unsubscribe_count(), 1);
}

/// A host that keeps calling a released listener cannot reach the state.
#[test]
#[serial]
fn test_stale_listener_after_teardown_is_ignored() {
    let host = MockViewport::retaining(700.0, 600.0);
    let state = ResponsiveState::new(host.source());
    let handle = state.handle();
    let changes = Rc::new(Cell::new(0));
    state.on_breakpoint_change({
        let changes = changes.clone();
        move |_| changes.set(changes.get() + 1)
    });

    state.teardown();
    assert_eq!(host.unsubscribe_count(), 1);
    assert_eq!(host.listener_count(), 1, "host kept the released listener");

    let delivered = host.delivered_count();
    host.resize(1500.0, 900.0);
    host.resize(300.0, 900.0);
    assert_eq!(host.delivered_count(), delivered + 2);
    assert_eq!(changes.get(), 0);
    assert_eq!(handle.try_snapshot(), None);
    assert_eq!(host.unsubscribe_count(), 1);
}

/// Dropping during a panic still unsubscribes.
#[test]
#[serial]
fn test_unsubscribe_on_unwind() {
    let host = MockViewport::new(1024.0, 768.0);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _state = ResponsiveState::new(host.source());
        panic!("component render failed");
    }));

    assert!(result.is_err());
    assert_eq!(host.subscribe_count(), 1);
    assert_eq!(host.unsubscribe_count(), 1);
    assert_eq!(host.listener_count(), 0);
}

/// Every read after a resize reflects the new width.
#[test]
#[serial]
fn test_derived_reads_follow_width() {
    let host = MockViewport::new(100.0, 600.0);
    let state = ResponsiveState::new(host.source());
    let gap = Responsive::new().base(8).sm(16).lg(32);

    let cases = [
        (100.0, ScreenSizeBp::Base, 8),
        (320.0, ScreenSizeBp::Xs, 8),
        (800.0, ScreenSizeBp::Sm, 16),
        (1019.0, ScreenSizeBp::Sm, 16),
        (1020.0, ScreenSizeBp::Md, 16),
        (1280.0, ScreenSizeBp::Lg, 32),
        (1920.0, ScreenSizeBp::Xxl, 32),
        (500.0, ScreenSizeBp::Xs, 8),
    ];

    for (width, bucket, expected_gap) in cases {
        host.resize(width, 600.0);
        assert_eq!(state.width(), width);
        assert_eq!(state.height(), 600.0);
        assert_eq!(state.breakpoint(), bucket, "width {width}");
        assert_eq!(state.select(&gap), Some(&expected_gap), "width {width}");

        let flags = [state.is_mobile(), state.is_tablet(), state.is_desktop()];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "width {width}");

        assert_eq!(state.at_least(Breakpoint::Md), width >= 1020.0);
        assert_eq!(state.below(Breakpoint::Md), width < 1020.0);
        assert_eq!(state.snapshot().breakpoint, bucket);
    }
}

/// Height-only resizes update height without moving the bucket.
#[test]
#[serial]
fn test_height_changes_are_published() {
    let host = MockViewport::new(1300.0, 700.0);
    let state = ResponsiveState::new(host.source());
    let handle = state.handle();

    host.resize(1300.0, 400.0);
    assert_eq!(handle.height(), 400.0);
    assert_eq!(handle.breakpoint(), ScreenSizeBp::Lg);
}

/// Several states can share one host, and each releases only itself.
#[test]
#[serial]
fn test_independent_subscriptions() {
    let host = MockViewport::new(700.0, 600.0);
    let first = ResponsiveState::new(host.source());
    let second = ResponsiveState::new(host.source());
    assert_eq!(host.listener_count(), 2);

    drop(first);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(host.unsubscribe_count(), 1);

    host.resize(1500.0, 900.0);
    assert!(second.is_desktop());

    drop(second);
    assert_eq!(host.unsubscribe_count(), 2);
}

/// A custom table moves the device-class cutoffs.
#[test]
#[serial]
fn test_custom_grid() {
    let grid = GridBreakpoints::new([200.0, 400.0, 600.0, 800.0, 1000.0, 1200.0])
        .expect("valid table");
    let host = MockViewport::new(450.0, 600.0);
    let state = ResponsiveState::with_grid(host.source(), grid);

    assert_eq!(state.breakpoint(), ScreenSizeBp::Sm);
    assert!(state.is_tablet());
    host.resize(800.0, 600.0);
    assert!(state.is_desktop());
    assert_eq!(state.grid(), &grid);
}

// ============================================================================
// Polled hosts
// ============================================================================

/// Polled state reads the host live and never subscribes.
#[test]
#[serial]
fn test_polled_host_is_read_live() {
    let host = FixedViewport::new(700.0, 600.0);
    let state = ResponsiveState::new(host.source());
    assert!(!state.is_subscribed());
    assert!(state.is_mobile());

    host.set(900.0, 600.0);
    assert!(!state.is_mobile());
    assert_eq!(state.breakpoint(), ScreenSizeBp::Sm);
    assert!(host.query_count() >= 2);
}

/// Refresh publishes a polled size to handles and effects.
#[test]
#[serial]
fn test_polled_refresh_publishes() {
    let host = FixedViewport::new(700.0, 600.0);
    let state = ResponsiveState::new(host.source());
    let handle = state.handle();

    let runs = Rc::new(Cell::new(0));
    create_effect({
        let runs = runs.clone();
        move |_| {
            handle.width();
            runs.set(runs.get() + 1);
        }
    });
    assert_eq!(runs.get(), 1);

    host.set(1300.0, 800.0);
    assert!(handle.is_mobile(), "handle only sees published sizes");

    state.refresh();
    assert!(handle.is_desktop());
    assert_eq!(runs.get(), 2);

    state.refresh();
    assert_eq!(runs.get(), 2, "unchanged size should not republish");
}

// ============================================================================
// Reactivity and context
// ============================================================================

/// Effects that read the state rerun on resize.
#[test]
#[serial]
fn test_effect_tracks_resizes() {
    let host = MockViewport::new(700.0, 600.0);
    let state = ResponsiveState::new(host.source());
    let handle = state.handle();

    let columns = Responsive::new().base(1).md(2).xl(4);
    let seen = Rc::new(RefCell::new(Vec::new()));
    create_effect({
        let seen = seen.clone();
        move |_| {
            seen.borrow_mut().push(*handle.select(&columns).unwrap_or(&0));
        }
    });

    host.resize(1100.0, 600.0);
    host.resize(1500.0, 600.0);
    host.resize(1500.0, 600.0);

    assert_eq!(*seen.borrow(), vec![1, 2, 4]);
}

/// Breakpoint callbacks fire only when the bucket changes.
#[test]
#[serial]
fn test_breakpoint_change_callback() {
    let host = MockViewport::new(700.0, 600.0);
    let state = ResponsiveState::new(host.source());
    let seen = Rc::new(RefCell::new(Vec::new()));
    state.on_breakpoint_change({
        let seen = seen.clone();
        move |bp| seen.borrow_mut().push(bp)
    });

    host.resize(710.0, 600.0);
    host.resize(1300.0, 600.0);
    host.resize(1300.0, 300.0);
    host.resize(10.0, 300.0);

    assert_eq!(
        *seen.borrow(),
        vec![ScreenSizeBp::Xs, ScreenSizeBp::Lg, ScreenSizeBp::Base]
    );
}

/// Nested consumers find the provided handle.
#[test]
#[serial]
fn test_provided_handle_is_shared() {
    let host = MockViewport::new(1600.0, 900.0);
    let state = ResponsiveState::new(host.source());
    provide_responsive(&state);

    let consumer = use_responsive().expect("handle should be provided");
    assert_eq!(consumer.breakpoint(), ScreenSizeBp::Xl);
    assert!(consumer.matches(ScreenSize::DESKTOP));

    host.resize(600.0, 900.0);
    assert!(consumer.is_mobile());
    assert!(consumer.below(Breakpoint::Sm));
    assert_eq!(consumer.snapshot(), state.snapshot());
}

/// Dropping the provided state withdraws it from context, and handles
/// copied out earlier report it as gone instead of panicking.
#[test]
#[serial]
fn test_provided_handle_is_withdrawn_on_drop() {
    let host = MockViewport::new(1100.0, 800.0);
    let state = ResponsiveState::new(host.source());
    provide_responsive(&state);
    let consumer = use_responsive().expect("handle should be provided");
    assert_eq!(
        consumer.try_snapshot().map(|s| s.breakpoint),
        Some(ScreenSizeBp::Md)
    );

    drop(state);
    assert!(use_responsive().is_none());
    assert_eq!(consumer.try_snapshot(), None);
}

/// Dropping a state that was never provided leaves the provided one alone.
#[test]
#[serial]
fn test_drop_keeps_other_provided_handle() {
    let host = MockViewport::new(1100.0, 800.0);
    let provided = ResponsiveState::new(host.source());
    provide_responsive(&provided);

    let other = ResponsiveState::new(host.source());
    drop(other);

    let consumer = use_responsive().expect("provided handle should remain");
    assert_eq!(consumer.breakpoint(), ScreenSizeBp::Md);
}
