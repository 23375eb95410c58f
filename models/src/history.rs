use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryPoint {
    /// Local clock time the sample arrived, `HH:MM:SS`
    pub time: String,
    /// Degrees Celcius
    pub temperature: f64,
}

/// Fixed-capacity temperature history. Oldest points are dropped first.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> History {
        History {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: HistoryPoint) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &HistoryPoint> + '_ {
        self.points.iter()
    }

    /// Lowest and highest temperature currently retained.
    pub fn temperature_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.temperature).fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })
    }
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(DEFAULT_CAPACITY)
    }
}
