/// Incremental arithmetic mean over gauge candidates.
///
/// Non-finite inputs are skipped. An empty accumulator has no estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningMean {
    len: usize,
    sum: f64,
}

impl RunningMean {
    #[inline]
    pub fn add(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn estimation(&self) -> Option<f64> {
        if self.len > 0 {
            Some(self.sum / self.len as f64)
        } else {
            None
        }
    }
}

impl FromIterator<f64> for RunningMean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mean = RunningMean::default();
        for v in iter {
            mean.add(v);
        }
        mean
    }
}
