/// Computes the squared difference of the frame with a shifted version
/// of itself, for every candidate lag. Unlike plain autocorrelation the
/// profile dips instead of peaks at the period, and adding a constant
/// offset to the samples does not change it. `profile` must hold one
/// slot per lag, i.e. half the frame length.
pub(crate) fn difference(frame: &[f32], profile: &mut [f32]) {
    let lag_count = profile.len();
    for tau in 0..lag_count {
        let mut sum = 0.0;
        for i in 0..lag_count {
            let delta = frame[i] - frame[i + tau];
            sum += delta * delta;
        }
        profile[tau] = sum;
    }
}

/// Normalizes the difference profile in place by the cumulative mean of
/// the values seen so far, so that longer lags are not favored by the
/// monotonically growing raw sum. Lag zero is forced to 1, excluding it
/// from consideration. While the running sum is zero the division is
/// skipped, leaving the already zero raw values untouched.
pub(crate) fn cumulative_mean_normalize(profile: &mut [f32]) {
    profile[0] = 1.0;
    let mut running_sum = 0.0;
    for tau in 1..profile.len() {
        running_sum += profile[tau];
        if running_sum > 0.0 {
            profile[tau] *= tau as f32 / running_sum;
        }
    }
}

/// Finds the smallest lag (starting at 2) whose normalized value drops
/// below `threshold`, then walks forward to the bottom of that dip.
/// Returns `None` if no lag qualifies, meaning the frame has no
/// discernable pitch.
pub(crate) fn absolute_threshold(profile: &[f32], threshold: f32) -> Option<usize> {
    let lag_count = profile.len();
    // The values at lags 0 and 1 are never usable period candidates.
    for tau in 2..lag_count {
        if profile[tau] < threshold {
            let mut dip = tau;
            while dip + 1 < lag_count && profile[dip + 1] < profile[dip] {
                dip += 1;
            }
            return Some(dip);
        }
    }
    None
}

/// Refines an integer lag estimate to a fractional one by fitting a
/// parabola through the profile values at the lag and its two
/// neighbors. At the ends of the profile, where a neighbor collapses
/// onto the estimate itself, the smaller of the two remaining values
/// wins. A zero or otherwise degenerate parabola denominator falls
/// back to the unrefined integer lag.
pub(crate) fn parabolic_interpolation(profile: &[f32], tau_estimate: usize) -> f32 {
    let x0 = if tau_estimate < 1 {
        tau_estimate
    } else {
        tau_estimate - 1
    };
    let x2 = if tau_estimate + 1 < profile.len() {
        tau_estimate + 1
    } else {
        tau_estimate
    };

    if x0 == tau_estimate {
        let better_tau = if profile[tau_estimate] <= profile[x2] {
            tau_estimate
        } else {
            x2
        };
        return better_tau as f32;
    }
    if x2 == tau_estimate {
        let better_tau = if profile[tau_estimate] <= profile[x0] {
            tau_estimate
        } else {
            x0
        };
        return better_tau as f32;
    }

    let s0 = profile[x0];
    let s1 = profile[tau_estimate];
    let s2 = profile[x2];
    let refined = tau_estimate as f32 + (s2 - s0) / (2.0 * (2.0 * s1 - s2 - s0));
    if refined.is_finite() {
        refined
    } else {
        tau_estimate as f32
    }
}
