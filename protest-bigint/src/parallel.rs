//! Independent generation sessions spread across worker threads.
//!
//! Each worker owns its own RNG, seeded from the base seed and the worker
//! index, so sessions never share random state and need no locking.

use crate::config::{GeneratorConfig, ParallelConfig};
use crate::error::Result;
use crate::generator::Generator;
use crate::rng::{create_seeded_rng, derive_seed};

/// Generate `count` values across worker threads
///
/// The output is ordered by worker, then by draw within a worker, and is a
/// pure function of `seed`, `count` and `parallel`. When `count` is below the
/// batch size, or only one thread is configured, all values come from the
/// stream of worker 0 on the calling thread.
pub fn generate_parallel<T, G>(
    generator: &G,
    seed: u64,
    count: usize,
    parallel: &ParallelConfig,
    config: &GeneratorConfig,
) -> Result<Vec<T>>
where
    T: Send,
    G: Generator<T> + Sync + ?Sized,
{
    parallel.validate()?;

    if count < parallel.batch_size || parallel.num_threads == 1 {
        return Ok(generate_stream(generator, seed, 0, count, config));
    }

    let num_threads = parallel.num_threads.min(count);
    let per_thread = count / num_threads;
    let remaining = count % num_threads;

    if config.verbose {
        eprintln!(
            "Generating {} values across {} threads (seed {})",
            count, num_threads, seed
        );
    }

    let outcome = crossbeam::scope(|s| {
        let handles: Vec<_> = (0..num_threads)
            .map(|worker| {
                let share = if worker < remaining {
                    per_thread + 1
                } else {
                    per_thread
                };
                s.spawn(move |_| generate_stream(generator, seed, worker, share, config))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<std::thread::Result<Vec<Vec<T>>>>()
    });

    match outcome {
        Ok(Ok(chunks)) => Ok(chunks.into_iter().flatten().collect()),
        // A panicking generator is a bug in the caller's code; surface it as-is
        Ok(Err(payload)) | Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn generate_stream<T, G>(
    generator: &G,
    seed: u64,
    worker: usize,
    count: usize,
    config: &GeneratorConfig,
) -> Vec<T>
where
    G: Generator<T> + ?Sized,
{
    let mut rng = create_seeded_rng(derive_seed(seed, worker as u64));
    (0..count)
        .map(|_| generator.generate(&mut rng, config))
        .collect()
}
