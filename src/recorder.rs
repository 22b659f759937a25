//! Bounded measurement history
//!
//! Stores the samples of the current run in a fixed-capacity ring buffer.
//! Once the buffer is full, the oldest sample is overwritten.

use std::num::NonZeroUsize;

use pendusim_types::Measurement;

/// Sliding window of the most recent measurements
///
/// # Example
///
/// ```ignore
/// let mut buffer = MeasurementBuffer::new(NonZeroUsize::new(100).unwrap());
/// buffer.record(Measurement { time: 0.016, angle: 0.78, energy: 2.8 });
///
/// // Chronological copy for charting or persistence
/// for m in buffer.data() {
///     println!("t={}, θ={}, E={}", m.time, m.angle, m.energy);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MeasurementBuffer {
    /// Circular storage, grows up to capacity then wraps
    samples: Vec<Measurement>,
    /// Next slot to overwrite once full
    write_index: usize,
    capacity: NonZeroUsize,
}

impl MeasurementBuffer {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity.get()),
            write_index: 0,
            capacity,
        }
    }

    /// Maximum number of samples kept
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Get number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity.get()
    }

    /// Drop all samples; capacity is kept
    pub fn clear(&mut self) {
        self.samples.clear();
        self.write_index = 0;
    }

    /// Append a sample, evicting the oldest when full
    pub fn record(&mut self, sample: Measurement) {
        if self.is_full() {
            self.samples[self.write_index] = sample;
        } else {
            self.samples.push(sample);
        }
        self.write_index = (self.write_index + 1) % self.capacity.get();
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Measurement> + '_ {
        // Until the buffer wraps, storage order is already chronological
        let split = if self.is_full() { self.write_index } else { 0 };
        let (newer, older) = self.samples.split_at(split);
        older.iter().chain(newer.iter())
    }

    /// Owned copy in chronological order
    pub fn data(&self) -> Vec<Measurement> {
        self.iter().copied().collect()
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&Measurement> {
        self.iter().next_back()
    }

    /// Oldest sample still held
    pub fn first(&self) -> Option<&Measurement> {
        self.iter().next()
    }
}
