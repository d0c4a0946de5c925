use perf_chart_wasm::domain::chart::{LabelAnchor, LabelScheduler, Track, with_label_anchors};
use perf_chart_wasm::domain::logging::{FixedOffsetClock, TimeProvider};
use perf_chart_wasm::domain::series::{FullSeries, Preset, Sample, Timestamp};
use quickcheck_macros::quickcheck;
use std::sync::Arc;
use strum::IntoEnumIterator;

// 2024-03-03 14:00:00 UTC
const NOW: i64 = 1_709_474_400_000;

fn now() -> Timestamp {
    Timestamp::from_millis(NOW)
}

fn scheduler(local_time: impl TimeProvider + 'static) -> LabelScheduler {
    LabelScheduler::new(1_000, Arc::new(local_time))
}

/// Local time that moves from `before` to `after` minutes east at `switch_at`.
struct DaylightSwitch {
    switch_at: i64,
    before: i32,
    after: i32,
}

impl TimeProvider for DaylightSwitch {
    fn current_timestamp(&self) -> i64 {
        NOW
    }

    fn utc_offset_minutes_at(&self, timestamp: i64) -> i32 {
        if timestamp < self.switch_at { self.before } else { self.after }
    }

    fn format_timestamp(&self, timestamp: i64) -> String {
        timestamp.to_string()
    }
}

#[quickcheck]
fn labels_are_ascending_unique_and_visible(left: u8, width: u8, preset_index: u8) -> bool {
    let presets: Vec<Preset> = Preset::iter().collect();
    let preset = presets[preset_index as usize % presets.len()];
    let width = 5.0 + (width % 96) as f64;
    let left = (left as f64 / 255.0) * (100.0 - width);

    let track = Track::new(now(), preset.total_minutes());
    let visible = track.window_for(left, width);
    let labels = LabelScheduler::default().schedule(track, visible, preset.label_step_minutes());
    let step_ms = preset.label_step_minutes() as i64 * 60_000;

    labels.windows(2).all(|w| w[0].time < w[1].time)
        && labels.iter().all(|l| visible.contains(l.time))
        && labels.iter().all(|l| (NOW - l.time.value()) % step_ms == 0)
}

#[test]
fn intraday_axis_for_full_three_hour_track() {
    let preset = Preset::ThreeHours;
    let track = Track::new(now(), preset.total_minutes());
    let visible = track.window_for(0.0, 100.0);
    let labels = LabelScheduler::default().schedule(track, visible, preset.label_step_minutes());
    let axis = LabelScheduler::position(labels, visible);

    let lines: Vec<String> = axis
        .iter()
        .map(|a| format!("{} @{:.1}% {}", a.label.text, a.pct, a.anchor))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    2:00 PM @0.0% start
    5:00 PM @12.5% middle
    8:00 PM @25.0% middle
    11:00 PM @37.5% middle
    2:00 AM @50.0% middle
    5:00 AM @62.5% middle
    8:00 AM @75.0% middle
    11:00 AM @87.5% middle
    2:00 PM @100.0% end
    ");
}

#[test]
fn multi_day_presets_use_day_month_labels() {
    let preset = Preset::SevenDays;
    let track = Track::new(now(), preset.total_minutes());
    let width = preset.default_window_pct();
    let visible = track.window_for(100.0 - width, width);
    let labels = LabelScheduler::default().schedule(track, visible, preset.label_step_minutes());
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["2 MAR", "3 MAR"]);
}

#[test]
fn local_offset_shifts_label_text_not_position() {
    let track = Track::new(now(), Preset::FifteenMinutes.total_minutes());
    let visible = track.window_for(87.5, 12.5);
    let utc = scheduler(FixedOffsetClock::UTC).schedule(track, visible, 15);
    let cet = scheduler(FixedOffsetClock::new(60)).schedule(track, visible, 15);
    assert_eq!(
        utc.iter().map(|l| l.time).collect::<Vec<_>>(),
        cet.iter().map(|l| l.time).collect::<Vec<_>>()
    );
    assert_eq!(cet.last().unwrap().text, "3:00 PM");
}

#[test]
fn each_label_uses_the_offset_of_its_own_instant() {
    // 2024-03-03 01:00 UTC
    let local_time = DaylightSwitch { switch_at: 1_709_427_600_000, before: 60, after: 120 };
    let track = Track::new(now(), Preset::OneDay.total_minutes());
    let labels = scheduler(local_time).schedule(track, track.window_for(0.0, 100.0), 360);
    let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["3:00 PM", "9:00 PM", "4:00 AM", "10:00 AM", "4:00 PM"]);
}

#[test]
fn day_labels_near_midnight_follow_the_local_date() {
    // 2024-10-20 22:30 UTC: past midnight at +120, still the 20th at +60.
    let label_at = 1_729_463_400_000;
    let track = Track::new(Timestamp::from_millis(label_at), Preset::SevenDays.total_minutes());
    let visible = track.window_for(0.0, 100.0);
    let summer = DaylightSwitch { switch_at: i64::MAX, before: 120, after: 60 };
    let winter = DaylightSwitch { switch_at: i64::MIN, before: 120, after: 60 };
    let step = Preset::SevenDays.label_step_minutes();
    assert_eq!(scheduler(summer).schedule(track, visible, step).last().unwrap().text, "21 OCT");
    assert_eq!(scheduler(winter).schedule(track, visible, step).last().unwrap().text, "20 OCT");
}

#[test]
fn zero_step_schedules_nothing() {
    let track = Track::new(now(), 120);
    assert!(LabelScheduler::default().schedule(track, track.window_for(0.0, 100.0), 0).is_empty());
}

#[test]
fn anchors_between_samples_are_interpolated() {
    let series = FullSeries::from_samples(vec![
        Sample::new(Timestamp::from_millis(0), 10.0),
        Sample::new(Timestamp::from_millis(1_000), 30.0),
        Sample::new(Timestamp::from_millis(2_000), 50.0),
    ])
    .unwrap();
    let label = Timestamp::from_millis(1_250);
    let points = with_label_anchors(&series, series.samples(), &[label]);

    assert_eq!(points.len(), 4);
    let anchor = points.iter().find(|p| p.is_label_anchor).unwrap();
    assert_eq!(anchor.time, label);
    assert!((anchor.value - 35.0).abs() < 1e-9);
    assert!(points.windows(2).all(|w| w[0].time < w[1].time));
}

#[quickcheck]
fn interpolated_anchors_stay_between_their_bracketing_samples(
    steps: Vec<(u16, i16)>,
    label_seed: u32,
) -> bool {
    let mut time = 0;
    let mut samples = vec![Sample::new(Timestamp::from_millis(0), 0.0)];
    for (gap, value) in steps {
        time += gap as i64 + 1;
        samples.push(Sample::new(Timestamp::from_millis(time), value as f64));
    }
    if samples.len() < 2 {
        return true;
    }
    let series = FullSeries::from_samples(samples).unwrap();
    let label = Timestamp::from_millis(label_seed as i64 % (time + 1));
    let points = with_label_anchors(&series, series.samples(), &[label]);

    let Some(anchor) = points.iter().find(|p| p.is_label_anchor) else {
        return false;
    };
    let before = series.samples().iter().rev().find(|s| s.time <= label).unwrap();
    let after = series.samples().iter().find(|s| s.time >= label).unwrap();
    let (lo, hi) = (before.value.min(after.value), before.value.max(after.value));

    anchor.time == label
        && anchor.value >= lo - 1e-9
        && anchor.value <= hi + 1e-9
        && points.windows(2).all(|w| w[0].time < w[1].time)
}

#[test]
fn anchor_on_a_sample_flags_it() {
    let series = FullSeries::from_samples(vec![
        Sample::new(Timestamp::from_millis(0), 10.0),
        Sample::new(Timestamp::from_millis(1_000), 30.0),
    ])
    .unwrap();
    let points = with_label_anchors(&series, series.samples(), &[Timestamp::from_millis(1_000)]);
    assert_eq!(points.len(), 2);
    assert!(points[1].is_label_anchor);
    assert_eq!(points[1].value, 30.0);
}

#[test]
fn edge_labels_hang_inwards() {
    assert_eq!(LabelAnchor::for_pct(2.0), LabelAnchor::Start);
    assert_eq!(LabelAnchor::for_pct(50.0), LabelAnchor::Middle);
    assert_eq!(LabelAnchor::for_pct(97.0), LabelAnchor::End);
}

#[test]
fn preset_names() {
    let names: Vec<String> = Preset::iter().map(|p| p.to_string()).collect();
    insta::assert_json_snapshot!(names, @r#"
    [
      "15m",
      "3h",
      "1d",
      "7d",
      "30d"
    ]
    "#);
}
