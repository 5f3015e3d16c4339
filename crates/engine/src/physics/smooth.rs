/// Smallest smoothing time accepted; anything lower would blow up `2 / t`.
pub const MIN_SMOOTH_TIME: f64 = 1e-4;

/// Critically damped step of `current` toward `desired`.
///
/// `velocity` carries the filter's rate of change between calls and must be
/// threaded through unchanged from one call to the next. `max_speed` bounds
/// how far from `desired` the filter is allowed to start (`max_speed *
/// smooth_time`). If the step would carry `current` past `desired`, the
/// result snaps to `desired` and `velocity` is zeroed.
pub fn smooth_damp(
    current: f64,
    desired: f64,
    velocity: &mut f64,
    smooth_time: f64,
    max_speed: f64,
    dt: f64,
) -> f64 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let decay = exp_neg(omega * dt);

    let max_change = max_speed * smooth_time;
    let change = clamp(current - desired, -max_change, max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let next = target + (change + temp) * decay;

    if (desired > current) == (next > desired) {
        *velocity = 0.0;
        return desired;
    }
    next
}

/// Lower bound checked first, then the upper. Never panics, even when the
/// bounds are inverted or NaN.
fn clamp(value: f64, low: f64, high: f64) -> f64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Rational approximation of `e^-x` for `x >= 0`.
fn exp_neg(x: f64) -> f64 {
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x2 * x2;
    1.0 / (0.068_696_719_612_505_34 * x4
        + 0.137_393_439_225_010_68 * x3
        + 0.515_225_397_093_790_1 * x2
        + 0.996_102_434_381_327_4 * x
        + 1.000_395_979_357_109)
}
