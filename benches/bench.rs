use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use ctfft::{fft_32, fft_64, fft_64_with_opts, Options, TwiddleMode};
use rand::{distributions::Uniform, rngs::StdRng, Rng, SeedableRng};
use utilities::gen_random_signal;
use utilities::rustfft::num_complex::Complex;
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22,
];

/// Seeded so every implementation is measured on the same inputs.
fn generate_numbers(n: usize) -> Vec<f64> {
    let rng = StdRng::seed_from_u64(n as u64);
    rng.sample_iter(Uniform::new(-1.0, 1.0))
        .take(2 * n)
        .collect()
}

fn to_complex(data: &[f64]) -> Vec<Complex<f64>> {
    data.chunks_exact(2)
        .map(|z| Complex::new(z[0], z[1]))
        .collect()
}

fn benchmark_forward_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f64");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("ctfft recurrence", len), |b| {
            b.iter_batched(
                || generate_numbers(len),
                |mut data| fft_64(&mut data, len),
                BatchSize::LargeInput,
            );
        });

        let direct = Options::default().with_twiddles(TwiddleMode::Direct);
        group.bench_function(BenchmarkId::new("ctfft direct", len), |b| {
            b.iter_batched(
                || generate_numbers(len),
                |mut data| fft_64_with_opts(&mut data, len, &direct),
                BatchSize::LargeInput,
            );
        });

        let guessed = Options::guess_options(len);
        group.bench_function(BenchmarkId::new("ctfft guessed", len), |b| {
            b.iter_batched(
                || generate_numbers(len),
                |mut data| fft_64_with_opts(&mut data, len, &guessed),
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("RustFFT", len), |b| {
            let mut planner = FftPlanner::<f64>::new();
            let fft = planner.plan_fft_forward(len);
            b.iter_batched(
                || to_complex(&generate_numbers(len)),
                |mut buffer| fft.process(&mut buffer),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn benchmark_forward_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward f32");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("ctfft recurrence", len), |b| {
            b.iter_batched(
                || {
                    let mut data = vec![0.0f32; 2 * len];
                    gen_random_signal(&mut data);
                    data
                },
                |mut data| fft_32(&mut data, len),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_forward_f64, benchmark_forward_f32);
criterion_main!(benches);
