// File: crates/ratings-core/tests/tooltip.rs
// Purpose: Hover events drive the shared tooltip: content, position and fades.

mod common;

use ratings_core::tooltip::cubic_in_out;
use ratings_core::{BarChart, ChartConfig, HoverTracker, PointerEvent, Tooltip};

fn chart() -> BarChart {
    BarChart::new(common::seasons(&[("2010", "3.5"), ("2012", "5.0")]), ChartConfig::default()).unwrap()
}

#[test]
fn enter_fills_content_and_position() {
    let chart = chart();
    let mut tip = chart.tooltip();
    tip.handle(&PointerEvent::Enter { bar: 1, x: 300.0, y: 200.0 }, &chart);

    let content = tip.content().expect("content after enter");
    assert_eq!(content.title, "Season: 2");
    assert_eq!(content.entries[0], ("Year".to_string(), "2,012".to_string()));
    assert_eq!(content.entries[2], ("Avg. Viewers (mil)".to_string(), "5.0".to_string()));
    assert_eq!(content.entries[4], ("Viewers (mil)".to_string(), "1,234,567".to_string()));
    assert_eq!((tip.position().x, tip.position().y), (300.0, 172.0));
    assert_eq!(tip.hovered(), Some(1));
}

#[test]
fn fade_in_then_out() {
    let chart = chart();
    let mut tip = chart.tooltip();
    assert_eq!(tip.opacity(), 0.0);
    assert!(!tip.is_visible());

    tip.handle(&PointerEvent::Enter { bar: 0, x: 10.0, y: 10.0 }, &chart);
    tip.advance(100.0);
    assert!((tip.opacity() - 0.45).abs() < 1e-9, "halfway through a cubic in-out fade");
    tip.advance(100.0);
    assert!((tip.opacity() - 0.9).abs() < 1e-12);
    assert!(!tip.is_fading());
    assert!(tip.is_visible());

    tip.handle(&PointerEvent::Leave { bar: 0 }, &chart);
    tip.advance(250.0);
    assert!((tip.opacity() - 0.45).abs() < 1e-9);
    tip.advance(250.0);
    assert_eq!(tip.opacity(), 0.0);
    assert!(!tip.is_visible());
    // Content survives the fade so the panel does not go blank mid-transition.
    assert!(tip.content().is_some());
}

#[test]
fn leave_interrupts_fade_in() {
    let chart = chart();
    let mut tip = chart.tooltip();
    tip.handle(&PointerEvent::Enter { bar: 0, x: 0.0, y: 0.0 }, &chart);
    tip.advance(100.0);
    tip.handle(&PointerEvent::Leave { bar: 0 }, &chart);
    assert!((tip.opacity() - 0.45).abs() < 1e-9, "fade-out starts from the current opacity");
    tip.advance(250.0);
    assert!((tip.opacity() - 0.225).abs() < 1e-9);
}

#[test]
fn zero_duration_fades_are_immediate() {
    let chart = chart();
    let mut timing = chart.config().tooltip;
    timing.fade_in_ms = 0.0;
    let mut tip = Tooltip::new(timing);
    tip.handle(&PointerEvent::Enter { bar: 0, x: 0.0, y: 0.0 }, &chart);
    assert_eq!(tip.opacity(), 0.9);
}

#[test]
fn easing_endpoints() {
    assert_eq!(cubic_in_out(0.0), 0.0);
    assert_eq!(cubic_in_out(0.5), 0.5);
    assert_eq!(cubic_in_out(1.0), 1.0);
}

#[test]
fn tracker_turns_moves_into_enter_and_leave() {
    let chart = chart();
    let bar = chart.bars()[0].clone();
    let mut tracker = HoverTracker::new();

    assert!(tracker.pointer_moved(&chart, 900.0, 100.0).is_empty());
    let events = tracker.pointer_moved(&chart, bar.x + 5.0, 400.0);
    assert_eq!(events, vec![PointerEvent::Enter { bar: 0, x: bar.x + 5.0, y: 400.0 }]);
    assert!(tracker.pointer_moved(&chart, bar.x + 6.0, 401.0).is_empty());

    let second = chart.bars()[1].clone();
    let events = tracker.pointer_moved(&chart, second.x + 5.0, 400.0);
    assert_eq!(events[0], PointerEvent::Leave { bar: 0 });
    assert!(matches!(events[1], PointerEvent::Enter { bar: 1, .. }));

    assert_eq!(tracker.pointer_left(), Some(PointerEvent::Leave { bar: 1 }));
    assert_eq!(tracker.current(), None);
}

#[test]
fn visible_tooltip_is_drawn_on_top() {
    let chart = chart();
    let mut tip = chart.tooltip();
    let plain = chart.render();
    assert_eq!(chart.render_with_tooltip(&tip).items.len(), plain.items.len());

    tip.handle(&PointerEvent::Enter { bar: 0, x: 100.0, y: 300.0 }, &chart);
    tip.advance(200.0);
    let scene = chart.render_with_tooltip(&tip);
    // Panel rect + title + five entries.
    assert_eq!(scene.items.len(), plain.items.len() + 7);
    assert!(scene.texts().any(|t| t.content == "Season: 1"));
}

#[test]
fn non_finite_fade_timing_never_reaches_a_chart() {
    let mut cfg = ChartConfig::default();
    cfg.tooltip.fade_in_ms = f64::NAN;
    let err = BarChart::new(common::seasons(&[("2010", "3.5")]), cfg).unwrap_err();
    assert!(matches!(err, ratings_core::ChartError::Config(_)));

    // Stock timings finish the fade-in and show the panel.
    let chart = chart();
    let mut tip = chart.tooltip();
    tip.handle(&PointerEvent::Enter { bar: 0, x: 10.0, y: 10.0 }, &chart);
    tip.advance(10_000.0);
    assert!(!tip.is_fading());
    assert!(tip.is_visible());
    assert!((tip.opacity() - 0.9).abs() < 1e-12);
}
