use crate::prelude::{Real, INF, NAN};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

pub trait Stats {
    fn add(&mut self, x: Real);
    fn add_many<I>(&mut self, xs: I)
    where
        I: IntoIterator<Item = Real>,
    {
        for x in xs {
            self.add(x);
        }
    }
    fn size(&self) -> usize;
    fn total(&self) -> Real;
    fn min(&self) -> Real;
    fn max(&self) -> Real;
    fn var(&self) -> Real;
    fn std(&self) -> Real {
        self.var().sqrt()
    }
    /// Arithmetic mean. NaN for an empty accumulator.
    fn mean(&self) -> Real {
        self.total() / self.size() as Real
    }
    fn stats(&self) -> PointStats {
        PointStats {
            count: self.size(),
            mean: self.mean(),
            std: self.std(),
            min: self.min(),
            max: self.max(),
        }
    }
}

/// Running accumulator over a stream of values.
#[derive(Debug, Copy, Clone, PartialEq, CopyGetters)]
pub struct PointStatsAcc {
    #[getset(get_copy = "pub")]
    n: usize,
    m1: Real,
    m2: Real,
    min: Real,
    max: Real,
}

impl PointStatsAcc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the present values of a column with missing cells.
    pub fn from_present<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<Real>>,
    {
        let mut acc = Self::new();
        acc.add_many(cells.into_iter().flatten());
        return acc;
    }
}

impl Stats for PointStatsAcc {
    /// Welford update: m1 is the running mean and m2 the running sum of
    /// squared deviations from it.
    fn add(&mut self, x: Real) {
        self.n += 1;
        let delta = x - self.m1;
        self.m1 += delta / self.n as Real;
        self.m2 += delta * (x - self.m1);
        self.min = Real::min(x, self.min);
        self.max = Real::max(x, self.max);
    }

    fn mean(&self) -> Real {
        if self.n == 0 {
            return NAN;
        }
        self.m1
    }

    fn total(&self) -> Real {
        return self.m1 * self.n as Real;
    }

    /// Sample variance (n - 1 in the denominator).
    fn var(&self) -> Real {
        if self.n < 2 {
            return NAN;
        }
        return self.m2 / (self.n - 1) as Real;
    }

    fn min(&self) -> Real {
        if self.n == 0 { NAN } else { self.min }
    }

    fn max(&self) -> Real {
        if self.n == 0 { NAN } else { self.max }
    }

    fn size(&self) -> usize {
        self.n
    }
}

impl Default for PointStatsAcc {
    fn default() -> Self {
        PointStatsAcc {
            n: 0,
            m1: 0.,
            m2: 0.,
            min: INF,
            max: -INF,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PointStats {
    count: usize,
    mean: Real,
    std: Real,
    min: Real,
    max: Real,
}
