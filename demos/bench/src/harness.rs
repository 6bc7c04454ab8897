use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;
use m3d::math::matrix::Matrix4f;
use rand::rngs::StdRng;
use rand::Rng;

use crate::BenchError;

const DOTS: &str = "...................................";
const INPUT_RANGE: std::ops::Range<f32> = 0.0..5.0;
const MAX_ATTEMPTS_PER_SAMPLE: u64 = 100;

/// Fresh pseudo-random scalars for one sample, regenerated every iteration so
/// nothing can be hoisted out of the timed region.
pub struct Inputs([f32; 16]);

impl Inputs {
    pub fn random(rng: &mut StdRng) -> Self {
        let mut values = [0.0; 16];
        for value in &mut values {
            *value = rng.random_range(INPUT_RANGE);
        }
        Self(values)
    }
}

impl std::ops::Index<usize> for Inputs {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    pub min: Duration,
    pub max: Duration,
    pub total: Duration,
    pub count: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            min: Duration::MAX,
            max: Duration::ZERO,
            total: Duration::ZERO,
            count: 0,
        }
    }
}

impl Timings {
    pub fn record(&mut self, elapsed: Duration) {
        self.min = self.min.min(elapsed);
        self.max = self.max.max(elapsed);
        self.total += elapsed;
        self.count += 1;
    }

    #[must_use]
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        self.total / self.count
    }
}

pub struct Harness {
    rng: StdRng,
    samples: u32,
    outlier_threshold: Duration,
    sink: f32,
}

impl Harness {
    pub fn new(rng: StdRng, samples: u32, outlier_threshold: Duration) -> Self {
        Self {
            rng,
            samples,
            outlier_threshold,
            sink: 0.0,
        }
    }

    #[must_use]
    pub fn sink(&self) -> f32 {
        self.sink
    }

    /// Times `operation` until `samples` runs under the outlier threshold were
    /// recorded, then prints one report line.
    pub fn run<I, O>(
        &mut self,
        name: &'static str,
        setup: impl Fn(&Inputs) -> I,
        operation: impl Fn(I) -> O,
        sum: impl Fn(&O) -> f32,
    ) -> Result<Timings, BenchError> {
        let mut timings = Timings::default();
        let max_attempts = u64::from(self.samples) * MAX_ATTEMPTS_PER_SAMPLE;
        let mut attempts = 0;
        let mut discarded = 0;

        while timings.count < self.samples {
            if attempts == max_attempts {
                return Err(BenchError::TooManyOutliers { operation: name });
            }
            attempts += 1;

            let input = setup(&Inputs::random(&mut self.rng));
            let start = Instant::now();
            let output = black_box(operation(black_box(input)));
            let elapsed = start.elapsed();

            if elapsed > self.outlier_threshold {
                discarded += 1;
                continue;
            }

            timings.record(elapsed);
            self.sink += sum(&output);
        }

        if discarded > 0 {
            debug!("{name}: discarded {discarded} outliers");
        }
        println!("{}", report_line(name, &timings));
        Ok(timings)
    }
}

pub fn sum_matrix(matrix: &Matrix4f) -> f32 {
    <[[f32; 4]; 4]>::from(*matrix).iter().flatten().sum()
}

pub fn report_line(name: &str, timings: &Timings) -> String {
    let dots = DOTS.get(name.len() + 1..).unwrap_or("");
    let stats = format!(
        "min: {:>5}ns, max: {:>5}ns, average: {:>7.1}ns",
        timings.min.as_nanos(),
        timings.max.as_nanos(),
        timings.average().as_secs_f64() * 1e9,
    );

    if dots.is_empty() {
        format!("{name} {stats}")
    } else {
        format!("{name} {dots} {stats}")
    }
}
