use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use fcontainers::FHashTable;
use fcontainers::FnvBuildHasher;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;

trait BenchKey: Clone + Eq + core::hash::Hash {
    fn new(key: u64) -> Self;
}

impl BenchKey for u64 {
    fn new(key: u64) -> Self {
        black_box(key)
    }
}

impl BenchKey for String {
    fn new(key: u64) -> Self {
        black_box(format!("key_{:016X}", key))
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    (1 << 18),
];

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn shuffled<K: Clone>(keys: &[K]) -> Vec<K> {
    let mut keys = keys.to_vec();
    keys.shuffle(&mut SmallRng::from_os_rng());
    keys
}

fn filled_fhashtable<K: BenchKey>(keys: &[K]) -> FHashTable<K, u64> {
    let mut table = FHashTable::new();
    for (i, key) in keys.iter().enumerate() {
        table.upsert(key.clone(), i as u64).unwrap();
    }
    table
}

fn filled_hashbrown<K: BenchKey>(keys: &[K]) -> HashbrownMap<K, u64, FnvBuildHasher> {
    let mut map = HashbrownMap::with_hasher(FnvBuildHasher::default());
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn bench_insert<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("insert_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("fhashtable/{size}"), |b| {
            b.iter_batched(
                || shuffled(&keys),
                |keys| {
                    let mut table = FHashTable::new();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(table.upsert(key, i as u64).unwrap());
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&keys),
                |keys| {
                    let mut map = HashbrownMap::with_hasher(FnvBuildHasher::default());
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys::<K>(size);
        let table = filled_fhashtable(&keys);
        let map = filled_hashbrown(&keys);
        let probes = shuffled(&keys);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("fhashtable/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(table.get_value(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_miss<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_miss_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys::<K>(size);
        let table = filled_fhashtable(&keys);
        let map = filled_hashbrown(&keys);
        let probes = random_keys::<K>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("fhashtable/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(table.contains_key(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &probes {
                    black_box(map.contains_key(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys::<K>(size);
        let table = filled_fhashtable(&keys);
        let map = filled_hashbrown(&keys);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("fhashtable/{size}"), |b| {
            b.iter_batched(
                || (table.clone(), shuffled(&keys)),
                |(mut table, keys)| {
                    for key in &keys {
                        black_box(table.delete(key).ok());
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || (map.clone(), shuffled(&keys)),
                |(mut map, keys)| {
                    for key in &keys {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Op {
    Insert,
    Find,
    Remove,
}

/// Zipf-distributed operations over a key space twice the table size.
fn mixed_ops<K: BenchKey>(size: usize) -> Vec<(Op, K)> {
    let mut rng = SmallRng::from_os_rng();
    let key_distr = Zipf::new(size as f64 * 2.0, 1.0).unwrap();
    (0..size)
        .map(|_| {
            let op = match rng.random_range(0..10) {
                0..=3 => Op::Insert,
                4..=8 => Op::Find,
                _ => Op::Remove,
            };
            let key = rng.sample(key_distr) as u64;
            (op, K::new(key))
        })
        .collect()
}

fn bench_mixed_zipf<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("mixed_zipf_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let ops = mixed_ops::<K>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("fhashtable/{size}"), |b| {
            b.iter(|| {
                let mut table = FHashTable::new();
                for (op, key) in &ops {
                    match op {
                        Op::Insert => {
                            black_box(table.upsert(key.clone(), 0u64).unwrap());
                        }
                        Op::Find => {
                            black_box(table.get_value(key));
                        }
                        Op::Remove => {
                            black_box(table.delete(key).ok());
                        }
                    }
                }
                black_box(table)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut map = HashbrownMap::with_hasher(FnvBuildHasher::default());
                for (op, key) in &ops {
                    match op {
                        Op::Insert => {
                            black_box(map.insert(key.clone(), 0u64));
                        }
                        Op::Find => {
                            black_box(map.get(key));
                        }
                        Op::Remove => {
                            black_box(map.remove(key));
                        }
                    }
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert::<u64>,
    bench_insert::<String>,
    bench_find_hit::<u64>,
    bench_find_hit::<String>,
    bench_find_miss::<u64>,
    bench_find_miss::<String>,
    bench_remove::<u64>,
    bench_remove::<String>,
    bench_mixed_zipf::<u64>,
    bench_mixed_zipf::<String>,
);
criterion_main!(benches);
