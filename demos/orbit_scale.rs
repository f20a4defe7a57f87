//! Orbit-while-scaling demo
//!
//! The case the combined rotor blend exists for: an object orbiting a
//! quarter turn around the Y axis while doubling in size. Blending the
//! pose as one TRD rotor keeps the two effects coupled; blending position,
//! quaternion and scale separately would not.
//!
//! Run with: cargo run --example orbit_scale

use cgalerp::{Pose, Quat, TrdLerp, Vec3};
use std::f32::consts::PI;

fn main() {
    let start = Pose::new(Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, 1.0);
    let end = Pose::new(
        Vec3::new(0.0, 0.0, 2.0),
        Quat::from_axis_angle(Vec3::Y, PI / 2.0),
        2.0,
    );

    let lerp = TrdLerp::precompute(&start, &end).expect("well-formed poses");

    println!("factor     position                     scale");
    for i in 0..=10 {
        let factor = i as f32 / 10.0;
        let pose = lerp.evaluate(factor);
        println!(
            "{:.1}      ({:6.3}, {:6.3}, {:6.3})    {:.3}",
            factor, pose.position.x, pose.position.y, pose.position.z, pose.scale
        );
    }
}
