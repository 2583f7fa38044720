//! Integration tests for the AppService → controller → ports pipeline.
//!
//! These run on the host (x86_64) and drive the service with scripted
//! sensor inputs and a monotonic clock, asserting on what reaches the
//! local outputs, the notifier, and the event sink.

use crate::mock_hw::{ActuatorCall, LogSink, MockHardware, MockNotifier, NotifierCall};

use firealarm::alarm::context::AlarmReason;
use firealarm::app::events::AppEvent;
use firealarm::app::service::AppService;
use firealarm::config::{NotifyPolicy, SystemConfig};

fn make_app(config: SystemConfig) -> (AppService, MockHardware, MockNotifier, LogSink) {
    let mut app = AppService::new(&config);
    let mut sink = LogSink::new();
    app.start(&mut sink);
    (app, MockHardware::new(), MockNotifier::new(), sink)
}

// ── Manual button episode ─────────────────────────────────────

#[test]
fn button_press_runs_one_full_episode() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());
    assert_eq!(sink.events, [AppEvent::Started]);

    hw.press_button(true);
    app.tick(100, &mut hw, &mut notifier, &mut sink);
    assert_eq!(notifier.calls, [NotifierCall::Text(AlarmReason::ButtonPressed)]);
    assert!(hw.calls.is_empty(), "outputs stay off until the next tick");

    hw.press_button(false);
    app.tick(150, &mut hw, &mut notifier, &mut sink);
    assert_eq!(
        hw.calls,
        [ActuatorCall::Indicator(true), ActuatorCall::Sounder(true)]
    );
    assert_eq!(notifier.calls.last(), Some(&NotifierCall::StartCall));
    assert!(sink.events.contains(&AppEvent::AlarmRaised { at: 150 }));

    // Elapsed == duration at 3150: still alarming.
    for now in (200..=3150).step_by(50) {
        app.tick(now, &mut hw, &mut notifier, &mut sink);
        assert!(app.state().is_alarming, "cleared early at {now}");
    }

    app.tick(3200, &mut hw, &mut notifier, &mut sink);
    assert!(!app.state().is_alarming);
    assert!(!hw.indicator_on());
    assert!(!hw.sounder_on());
    assert_eq!(
        notifier.calls,
        [
            NotifierCall::Text(AlarmReason::ButtonPressed),
            NotifierCall::StartCall,
            NotifierCall::EndCall,
        ]
    );
    assert!(sink.events.contains(&AppEvent::AlarmCleared { at: 3200 }));
}

// ── Notification ordering ─────────────────────────────────────

#[test]
fn texts_go_out_before_the_call() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    hw.set_flame(100);
    hw.set_smoke(200);
    app.tick(0, &mut hw, &mut notifier, &mut sink);
    app.tick(50, &mut hw, &mut notifier, &mut sink);

    assert_eq!(
        notifier.calls,
        [
            NotifierCall::Text(AlarmReason::FlameThreshold),
            NotifierCall::Text(AlarmReason::SmokeThreshold),
            NotifierCall::StartCall,
        ]
    );
    assert_eq!(
        notifier.bodies,
        ["WARNING!\nFIRE THRESHOLD REACHED", "WARNING!\nSMOKE THRESHOLD REACHED"]
    );
}

#[test]
fn threshold_is_inclusive() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    hw.set_flame(901);
    app.tick(0, &mut hw, &mut notifier, &mut sink);
    assert!(notifier.calls.is_empty());

    hw.set_flame(900);
    app.tick(50, &mut hw, &mut notifier, &mut sink);
    assert_eq!(notifier.texts(), [AlarmReason::FlameThreshold]);
}

// ── One call per episode ──────────────────────────────────────

#[test]
fn held_button_places_a_single_call_per_episode() {
    let mut config = SystemConfig::default();
    config.notify_policy = NotifyPolicy::EveryTick;
    let (mut app, mut hw, mut notifier, mut sink) = make_app(config);

    hw.press_button(true);
    let mut ticks = 0;
    // Activation at 50; reset needs now > 3050.
    for now in (0..=3050).step_by(50) {
        app.tick(now, &mut hw, &mut notifier, &mut sink);
        ticks += 1;
    }

    assert_eq!(notifier.texts().len(), ticks, "every-tick policy texts on each tick");
    assert_eq!(notifier.count(NotifierCall::StartCall), 1);
    assert_eq!(notifier.count(NotifierCall::EndCall), 0);
    assert!(app.state().is_alarming);
}

#[test]
fn edge_policy_texts_once_per_held_condition() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    hw.set_smoke(0);
    for now in (0..=2000).step_by(50) {
        app.tick(now, &mut hw, &mut notifier, &mut sink);
    }
    assert_eq!(notifier.texts(), [AlarmReason::SmokeThreshold]);
    assert_eq!(
        sink.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Notified(_)))
            .count(),
        1
    );
}

// ── Output invariant ──────────────────────────────────────────

#[test]
fn indicator_and_sounder_always_agree_with_state() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    for step in 0u64..400 {
        let now = step * 50;
        // Button pulses every 5 s, smoke appears in the middle stretch.
        hw.press_button(step % 100 == 0);
        hw.set_smoke(if (150..180).contains(&step) { 10 } else { 1000 });

        app.tick(now, &mut hw, &mut notifier, &mut sink);

        assert_eq!(hw.indicator_on(), app.state().is_alarming, "t={now}");
        assert_eq!(hw.sounder_on(), app.state().is_alarming, "t={now}");
        assert_eq!(app.state().is_calling, app.state().is_alarming, "t={now}");
    }
    assert_eq!(
        notifier.count(NotifierCall::StartCall),
        notifier.count(NotifierCall::EndCall) + usize::from(app.state().is_alarming)
    );
}

// ── Diagnostics cadence ───────────────────────────────────────

#[test]
fn telemetry_every_two_seconds() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    for now in (0..=10_000).step_by(50) {
        app.tick(now, &mut hw, &mut notifier, &mut sink);
    }
    assert_eq!(sink.telemetry_times(), [2000, 4000, 6000, 8000, 10_000]);
    assert_eq!(app.tick_count(), 201);
    assert_eq!(hw.reads, 201);
}

#[test]
fn telemetry_shows_inputs_before_the_decision() {
    let (mut app, mut hw, mut notifier, mut sink) = make_app(SystemConfig::default());

    app.tick(0, &mut hw, &mut notifier, &mut sink);
    hw.set_flame(42);
    app.tick(2000, &mut hw, &mut notifier, &mut sink);

    let telemetry = sink
        .events
        .iter()
        .find_map(|e| match e {
            AppEvent::Telemetry(t) => Some(*t),
            _ => None,
        })
        .expect("telemetry at 2000");
    assert_eq!(telemetry.now, 2000);
    assert_eq!(telemetry.flame_value, 42);
    assert!(!telemetry.is_alarming);
    assert_eq!(telemetry.alarm_started_at, 0);
}
