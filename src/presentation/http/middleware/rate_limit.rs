// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Interval between replenished tokens for a sustained rate of `per_second`.
fn replenish_period(per_second: u64) -> Option<Duration> {
    let per_second = u32::try_from(per_second).ok().filter(|n| *n > 0)?;
    Some(Duration::from_secs(1) / per_second).filter(|period| !period.is_zero())
}

/// Per-client-IP token bucket allowing `per_second` requests per second after
/// an initial `burst`. `None` when either limit is zero.
pub fn rate_limit_layer(per_second: u64, burst: u32) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.period(replenish_period(per_second)?);
    builder.burst_size(burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
