//! cgalerp - conformal-algebra pose interpolation
//!
//! Headless demo driver: stands in for the host's per-frame update
//! callback, stepping the interpolation factor from 0 to 1 and logging the
//! blended pose each frame. A second object is blended through
//! pool-resident rotors to exercise the free-function surface.

use cgalerp::config::AppConfig;
use cgalerp_anim::extract::split_trd;
use cgalerp_anim::rotor::combine_trd;
use cgalerp_anim::{evaluate, MvPool, TrdLerp};

fn main() {
    // Load configuration first so its log level can seed the logger;
    // RUST_LOG still overrides it.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting cgalerp");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let start = config.demo.start.to_pose();
    let end = config.demo.end.to_pose();

    // Precompute once when the interpolation begins
    let lerp = TrdLerp::precompute(&start, &end)
        .unwrap_or_else(|e| panic!("Failed to precompute blend rotors: {}", e))
        .with_renormalization(config.blend.renormalize);

    // A host animating many objects parks its rotors in the pool; this demo
    // drives one extra object through that path.
    let mut pool = MvPool::with_capacity(config.pool.capacity);
    let (tr_start, scale_start) = split_trd(&combine_trd(start.rotation, start.position, start.scale))
        .unwrap_or_else(|e| panic!("Failed to split start rotor: {}", e));
    let (tr_end, scale_end) = split_trd(&combine_trd(end.rotation, end.position, end.scale))
        .unwrap_or_else(|e| panic!("Failed to split end rotor: {}", e));
    let key_start = pool.acquire();
    let key_end = pool.acquire();
    *pool.get_mut(key_start).unwrap() = tr_start;
    *pool.get_mut(key_end).unwrap() = tr_end;
    log::info!("Pool warmed: {} of {} slots in use", pool.len(), pool.capacity());

    let frames = config.blend.frames.max(2);
    for frame in 0..frames {
        let factor = frame as f32 / (frames - 1) as f32;
        let pose = lerp.evaluate(factor);
        let pooled = evaluate(
            pool.get(key_start).unwrap(),
            pool.get(key_end).unwrap(),
            scale_start,
            scale_end,
            factor,
        );
        log::info!(
            "frame {:3} factor {:.3} pos ({:.3}, {:.3}, {:.3}) rot ({:.3}, {:.3}, {:.3}, {:.3}) scale {:.3}",
            frame,
            factor,
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.rotation.x,
            pose.rotation.y,
            pose.rotation.z,
            pose.rotation.w,
            pose.scale
        );
        if !config.blend.renormalize {
            debug_assert!((pose.position.x - pooled.position.x).abs() < 1e-4);
            debug_assert!((pose.scale - pooled.scale).abs() < 1e-4);
        }
    }

    pool.release(key_start);
    pool.release(key_end);
    log::info!("Done: pool back to {} slots in use", pool.len());
}
