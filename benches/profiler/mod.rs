// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Criterion settings for the regviz benches, tunable from the environment:
// - REGVIZ_BENCH_SAMPLES       samples per case (default 50)
// - REGVIZ_BENCH_WARMUP_MS     warm-up per case (default 500)
// - REGVIZ_BENCH_MEASURE_MS    measurement per case (default 2000)
// - REGVIZ_PROFILE_FREQ        pprof sampling rate in Hz, 0 disables the flamegraph (default 199)

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let samples = env_or("REGVIZ_BENCH_SAMPLES", 50_usize).clamp(10, 500);
    let warmup_ms = env_or("REGVIZ_BENCH_WARMUP_MS", 500_u64).clamp(100, 30_000);
    let measure_ms = env_or("REGVIZ_BENCH_MEASURE_MS", 2_000_u64).clamp(200, 120_000);
    let frequency = env_or("REGVIZ_PROFILE_FREQ", 199_i32).clamp(0, 1000);

    let config = Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_millis(warmup_ms))
        .measurement_time(Duration::from_millis(measure_ms));
    if frequency == 0 {
        return config;
    }
    config.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
