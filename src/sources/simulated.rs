use std::io::{Error, ErrorKind};
use std::ops::Range;

use chrono::TimeDelta;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Reading;
use crate::sources::{ReadingSource, SourceError, TimeWindow};

const DISTRACTORS: [&str; 6] = ["OUTDOOR", "12:34'", "R26", "#35.", "IGNITION", "<<<<<<<<"];

/// Ways the OCR stage misreads the gauge digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Misread {
    /// One digit lost: `"86"` becomes `"8"`.
    Truncated,
    /// A digit read as a letter: `"86"` becomes `"B6"`.
    Letter,
    /// A segment lost, so the display reads lower than it is.
    UnderRead,
    /// A stray two-digit token from the surrounding panel.
    StrayNumber,
}

const MISREADS: [Misread; 4] = [
    Misread::Truncated,
    Misread::Letter,
    Misread::UnderRead,
    Misread::StrayNumber,
];

/// Synthetic gauge that discharges steadily and is photographed at a fixed
/// interval, producing readings shaped like the detection stage's output.
///
/// Captures are anchored at the end of the requested window and spaced
/// `interval` apart going back in time; only captures inside the window are
/// generated. Generation is seeded per capture, so a capture reads the same
/// in every window that contains it.
#[derive(Debug, Clone)]
pub struct SimulatedGauge {
    seed: u64,
    start_level: u8,
    drain_per_reading: f64,
    count: usize,
    interval: TimeDelta,
    noise_percentage: u32,
}

impl SimulatedGauge {
    pub fn new(
        start_level: u8,
        drain_per_reading: f64,
        count: usize,
        interval: TimeDelta,
        noise_percentage: u32,
        seed: u64,
    ) -> Result<Self, Error> {
        if start_level > 99 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "start level must be in [0, 99]",
            ));
        }
        if !drain_per_reading.is_finite() || drain_per_reading < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "drain per reading must be a finite value >= 0",
            ));
        }
        if interval < TimeDelta::milliseconds(1) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "interval must be at least 1 ms",
            ));
        }
        if noise_percentage > 100 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Noise percentage must be in [0, 100]",
            ));
        }

        Ok(Self {
            seed,
            start_level,
            drain_per_reading,
            count,
            interval,
            noise_percentage,
        })
    }

    /// Capture indices, oldest first, whose instant can lie in `window`.
    fn indices_in(&self, window: &TimeWindow) -> Range<usize> {
        if self.count == 0 || window.end < window.start {
            return 0..0;
        }
        let span_ms = window.end.signed_duration_since(window.start).num_milliseconds();
        let step_ms = self.interval.num_milliseconds().max(1);
        let max_back = usize::try_from(span_ms / step_ms).unwrap_or(usize::MAX);
        (self.count - 1).saturating_sub(max_back)..self.count
    }

    /// Each capture draws from its own stream, so it reads the same whatever
    /// window it is fetched through.
    fn capture_rng(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(
            self.seed
                .wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// True level of the `index`-th capture, oldest first.
    #[inline]
    fn level_at(&self, index: usize) -> u8 {
        let level = f64::from(self.start_level) - self.drain_per_reading * index as f64;
        level.round().clamp(0.0, 99.0) as u8
    }

    fn display_text(rng: &mut StdRng, level: u8) -> String {
        if rng.random_bool(0.5) {
            format!("{level:02}%")
        } else {
            format!("{level:02}")
        }
    }

    fn misread(rng: &mut StdRng, level: u8, texts: &mut Vec<String>) {
        let digits = format!("{level:02}");
        match MISREADS[rng.random_range(0..MISREADS.len())] {
            Misread::Truncated => {
                let keep = rng.random_range(0..2);
                texts.push(digits[keep..keep + 1].to_string());
            }
            Misread::Letter => texts.push(format!("B{}", &digits[1..])),
            Misread::UnderRead => {
                let lost: u8 = rng.random_range(1..=9);
                texts.push(format!("{:02}", level.saturating_sub(lost)));
            }
            Misread::StrayNumber => {
                texts.push(Self::display_text(rng, level));
                texts.push(format!("{:02}", rng.random_range(10..100)));
            }
        }
    }

    fn capture(&self, rng: &mut StdRng, index: usize) -> Vec<String> {
        let level = self.level_at(index);
        let mut texts = Vec::new();

        for _ in 0..rng.random_range(1..=3) {
            texts.push(DISTRACTORS[rng.random_range(0..DISTRACTORS.len())].to_string());
        }

        let roll: u32 = rng.random_range(1..=100);
        if roll <= self.noise_percentage {
            Self::misread(rng, level, &mut texts);
        } else {
            texts.push(Self::display_text(rng, level));
        }
        texts
    }
}

impl ReadingSource for SimulatedGauge {
    fn label(&self) -> String {
        format!(
            "simulated gauge (start={}, drain={}, n={}, noise={}%, seed={})",
            self.start_level, self.drain_per_reading, self.count, self.noise_percentage, self.seed
        )
    }

    fn fetch(&self, window: &TimeWindow) -> Result<Vec<Reading>, SourceError> {
        let indices = self.indices_in(window);
        let mut out = Vec::with_capacity(indices.len());

        for index in indices {
            let steps_back = self.count - 1 - index;
            let at = i32::try_from(steps_back)
                .ok()
                .and_then(|n| self.interval.checked_mul(n))
                .and_then(|back| window.end.checked_sub_signed(back));
            let Some(at) = at.filter(|t| window.contains(*t)) else {
                continue;
            };

            let texts = self.capture(&mut self.capture_rng(index), index);
            let reading = texts.into_iter().enumerate().fold(
                Reading::new(Some(at.to_rfc3339()))
                    .with_fragment("Image", format!("sim-{index:04}.jpg")),
                |r, (slot, text)| r.with_fragment(format!("Text_{slot}"), text),
            );
            out.push(reading);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FragmentKeys;
    use crate::estimation::{AgreementEstimator, LevelEstimator, Strategy, normalize};
    use chrono::{TimeZone, Utc};

    fn window() -> TimeWindow {
        let now = Utc.with_ymd_and_hms(2022, 10, 20, 12, 0, 0).unwrap();
        TimeWindow::ending_at(now, TimeDelta::days(3))
    }

    fn gauge(noise: u32, count: usize) -> SimulatedGauge {
        SimulatedGauge::new(90, 0.5, count, TimeDelta::hours(1), noise, 7).unwrap()
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let err = SimulatedGauge::new(100, 0.5, 3, TimeDelta::hours(1), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = SimulatedGauge::new(90, -1.0, 3, TimeDelta::hours(1), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = SimulatedGauge::new(90, 0.5, 3, TimeDelta::zero(), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = SimulatedGauge::new(90, 0.5, 3, TimeDelta::hours(1), 101, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn same_seed_same_readings() {
        let g = gauge(30, 24);
        assert_eq!(g.fetch(&window()).unwrap(), g.fetch(&window()).unwrap());
    }

    #[test]
    fn captures_are_spaced_and_end_at_window_end() {
        let out = gauge(0, 5).fetch(&window()).unwrap();
        assert_eq!(out.len(), 5);
        let last = out.last().unwrap().upload_timestamp.clone().unwrap();
        assert_eq!(crate::core::parse_timestamp(&last), Some(window().end));
    }

    #[test]
    fn captures_outside_window_are_dropped() {
        let out = gauge(0, 100).fetch(&window()).unwrap();
        // 72 hourly steps back plus the capture at the end itself.
        assert_eq!(out.len(), 73);
    }

    #[test]
    fn noiseless_gauge_is_read_exactly() {
        let batch = normalize(&gauge(0, 6).fetch(&window()).unwrap(), &FragmentKeys::default());
        let e = AgreementEstimator::default().estimate(&batch);
        // 90 90 89 89 88 88, oldest first.
        assert_eq!(e.strategy(), Some(Strategy::SingleCandidate));
        assert_eq!(e.value(), Some(90.0));
    }

    #[test]
    fn misreads_yield_at_most_two_candidates() {
        let out = gauge(100, 20).fetch(&window()).unwrap();
        let batch = normalize(&out, &FragmentKeys::default());
        assert_eq!(batch.len(), 20);
        assert!(batch.iter().all(|n| n.numbers.len() <= 2));
    }

    #[test]
    fn sub_millisecond_interval_is_rejected() {
        let err =
            SimulatedGauge::new(90, 0.5, 3, TimeDelta::microseconds(10), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn huge_count_only_generates_the_window() {
        let g = SimulatedGauge::new(90, 0.5, usize::MAX, TimeDelta::hours(1), 0, 1).unwrap();
        let out = g.fetch(&window()).unwrap();
        assert_eq!(out.len(), 73);
        let last = out.last().unwrap().upload_timestamp.clone().unwrap();
        assert_eq!(crate::core::parse_timestamp(&last), Some(window().end));
    }

    #[test]
    fn capture_reads_the_same_in_a_narrower_window() {
        let g = gauge(50, 48);
        let wide = g.fetch(&window()).unwrap();
        let narrow = g
            .fetch(&TimeWindow::ending_at(window().end, TimeDelta::hours(5)))
            .unwrap();
        assert_eq!(wide.len(), 48);
        assert_eq!(narrow.len(), 6);
        assert_eq!(narrow[..], wide[wide.len() - 6..]);
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = window();
        let inverted = TimeWindow::new(w.end, w.start);
        assert!(gauge(0, 10).fetch(&inverted).unwrap().is_empty());
    }
}
