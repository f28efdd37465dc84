// demos/transform_point.rs
use dq_engine::prelude::*;
use std::f64::consts::PI;

fn main() {
    env_logger::init();

    // 120° about (1, 1, 1): x → y → z → x, then shift along z
    let transform = DualQuaternion::from_transform(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(1.0, 1.0, 1.0),
        2.0 * PI / 3.0,
    );
    println!("transform   = {}", transform);
    println!("|transform| = {:.6}", transform.magnitude());
    println!("rotation    = {}", transform.rotation_quaternion());
    println!("translation = {}", Rounded::new(&transform.translation(), 6));

    for p in [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ] {
        let q = transform.apply_to_point(p);
        println!("{} -> {}", p, Rounded::new(&q, 6));
    }

    // a zero axis is rejected by the checked constructor (logged at warn level)
    match DualQuaternion::try_from_transform(Vec3::ZERO, Vec3::ZERO, 1.0) {
        Ok(dq) => println!("unexpected transform {}", dq),
        Err(e) => println!("✘ {}", e),
    }
}
