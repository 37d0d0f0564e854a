use fcontainers::FQueue;

/// Mean of the last `window` samples, backed by a bounded queue.
struct MovingAverage {
    samples: FQueue<f64>,
    window: usize,
    sum: f64,
}

impl MovingAverage {
    fn new(window: usize) -> Result<Self, fcontainers::Error> {
        Ok(Self {
            samples: FQueue::with_capacity(window)?,
            window,
            sum: 0.0,
        })
    }

    fn push(&mut self, sample: f64) -> f64 {
        if self.samples.len() == self.window {
            self.sum -= self.samples.dequeue().unwrap_or(0.0);
        }
        // The queue rounds its capacity up, so it always has room here.
        if self.samples.enqueue(sample).is_ok() {
            self.sum += sample;
        }
        self.sum / self.samples.len() as f64
    }
}

fn main() -> Result<(), fcontainers::Error> {
    let mut average = MovingAverage::new(3)?;
    let samples = [1.0, 10.0, 3.0, 5.0, 8.0, 2.0];
    let expected = [1.0, 5.5, 14.0 / 3.0, 6.0, 16.0 / 3.0, 5.0];

    for (sample, expected) in samples.into_iter().zip(expected) {
        let mean = average.push(sample);
        println!("push {sample:>4} -> window {:?} mean {mean:.3}", average.samples);
        assert!((mean - expected).abs() < 1e-9);
    }

    // Oldest first, newest last.
    let newest_first: Vec<f64> = average.samples.iter().rev().copied().collect();
    assert_eq!(newest_first, [2.0, 8.0, 5.0]);

    Ok(())
}
