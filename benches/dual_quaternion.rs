// benches/dual_quaternion.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dq_engine::{DualQuaternion, Quaternion, Vec3};

const BATCH: usize = 1_000;

fn bench_products(c: &mut Criterion) {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(-0.5, 0.25, 1.0, -2.0);

    c.bench_function("quaternion Hamilton product × 1000", |bencher| {
        bencher.iter(|| {
            let mut r = p;
            for _ in 0..BATCH {
                r = black_box(r).product(black_box(&q));
            }
            black_box(r)
        })
    });

    let a = DualQuaternion::from_transform(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0), 0.3);
    let b =
        DualQuaternion::from_transform(Vec3::new(-1.0, 0.0, 0.5), Vec3::new(1.0, 1.0, 0.0), 1.1);

    c.bench_function("dual quaternion product × 1000", |bencher| {
        bencher.iter(|| {
            let mut r = a;
            for _ in 0..BATCH {
                r = black_box(r).product(black_box(&b));
            }
            black_box(r)
        })
    });
}

fn bench_apply_to_point(c: &mut Criterion) {
    let transform = DualQuaternion::from_transform(
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(1.0, 1.0, 1.0),
        2.0 * std::f64::consts::PI / 3.0,
    );
    let pt = Vec3::new(1.0, 0.0, 0.0);

    c.bench_function("apply_to_point sandwich × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = pt;
            for _ in 0..BATCH {
                p = transform.apply_to_point(black_box(p));
            }
            black_box(p)
        })
    });

    c.bench_function("try_apply_to_point checked × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = pt;
            for _ in 0..BATCH {
                if let Ok(next) = transform.try_apply_to_point(black_box(p)) {
                    p = next;
                }
            }
            black_box(p)
        })
    });

    c.bench_function("from_transform × 1000", |bencher| {
        bencher.iter(|| {
            let mut dq = DualQuaternion::IDENTITY;
            for i in 0..BATCH {
                dq = DualQuaternion::from_transform(
                    black_box(Vec3::new(i as f64, 0.0, 1.0)),
                    black_box(Vec3::new(0.0, 1.0, 0.0)),
                    black_box(0.01 * i as f64),
                );
            }
            black_box(dq)
        })
    });
}

criterion_group!(benches, bench_products, bench_apply_to_point);
criterion_main!(benches);
