use anyhow::Result;

/// Fixed-capacity ring of instantaneous FPS samples.
///
/// Zero-filled at creation so `mean` is defined from the first tick; unwritten
/// slots count as zero until the ring has wrapped once.
#[derive(Debug, Clone)]
pub struct FrameSampleBuffer {
    samples: Box<[f64]>,
    write_index: usize,
}

impl FrameSampleBuffer {
    pub fn new(capacity: usize) -> Result<Self> {
        anyhow::ensure!(capacity > 0, "sample buffer capacity must be non-zero");
        Ok(Self {
            samples: vec![0.0; capacity].into_boxed_slice(),
            write_index: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Slot the next `push` overwrites. Always `< capacity()`.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Stores `sample` and advances the write index. Returns the slot written.
    pub fn push(&mut self, sample: f64) -> usize {
        let slot = self.write_index;
        self.samples[slot] = sample;
        self.write_index = (slot + 1) % self.samples.len();
        slot
    }

    pub fn get(&self, slot: usize) -> Option<f64> {
        self.samples.get(slot).copied()
    }

    /// Raw storage order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Samples from the oldest slot to the most recently written one.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = f64> + '_ {
        let (newer, older) = self.samples.split_at(self.write_index);
        older.iter().chain(newer.iter()).copied()
    }

    /// Arithmetic mean over every slot, written or not.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.iter_oldest_first().sum();
        sum / self.samples.len() as f64
    }

    pub fn min(&self) -> f64 {
        self.iter_oldest_first().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.iter_oldest_first().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(FrameSampleBuffer::new(0).is_err());
    }

    #[test]
    fn starts_zeroed() {
        let b = FrameSampleBuffer::new(4).unwrap();
        assert_eq!(b.as_slice(), &[0.0; 4]);
        assert_eq!(b.mean(), 0.0);
        assert_eq!(b.write_index(), 0);
    }

    #[test]
    fn stale_slots_bias_mean_low() {
        let mut b = FrameSampleBuffer::new(4).unwrap();
        b.push(8.0);
        b.push(8.0);
        assert_eq!(b.mean(), 4.0);
    }

    #[test]
    fn push_wraps() {
        let mut b = FrameSampleBuffer::new(3).unwrap();
        assert_eq!(b.push(1.0), 0);
        assert_eq!(b.push(2.0), 1);
        assert_eq!(b.push(3.0), 2);
        assert_eq!(b.write_index(), 0);
        assert_eq!(b.push(4.0), 0);
        assert_eq!(b.as_slice(), &[4.0, 2.0, 3.0]);
        assert_eq!(b.iter_oldest_first().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn min_max() {
        let mut b = FrameSampleBuffer::new(3).unwrap();
        b.push(5.0);
        b.push(1.0);
        b.push(9.0);
        assert_eq!(b.min(), 1.0);
        assert_eq!(b.max(), 9.0);
    }

    #[test]
    fn infinite_sample_poisons_mean() {
        let mut b = FrameSampleBuffer::new(2).unwrap();
        b.push(f64::INFINITY);
        b.push(60.0);
        assert!(b.mean().is_infinite());
    }
}
