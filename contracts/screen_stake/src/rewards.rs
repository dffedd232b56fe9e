//! Settlement arithmetic.
//!
//! Screen time beyond the allowance is charged per *whole* hour; a partial
//! hour of overage costs nothing. All values are integers in the token's
//! smallest unit, so no rounding other than the hour floor ever happens.

/// Seconds in one penalized hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Penalty charged per whole exceeded hour, fixed in the token's smallest unit
/// whatever decimals the token uses.
pub const PENALTY_RATE: i128 = 150_000_000_000_000;

/// Whole hours by which `screen_time` exceeds `allowed_time` (both in seconds).
pub fn exceeded_hours(allowed_time: u64, screen_time: u64) -> u64 {
    screen_time.saturating_sub(allowed_time) / SECONDS_PER_HOUR
}

/// Uncapped penalty for the reported usage. May exceed the staked amount.
pub fn compute_penalty(allowed_time: u64, screen_time: u64) -> i128 {
    i128::from(exceeded_hours(allowed_time, screen_time)).saturating_mul(PENALTY_RATE)
}

/// Amount returned to the user: the principal minus the penalty, floored at zero.
pub fn compute_reward(amount: i128, allowed_time: u64, screen_time: u64) -> i128 {
    let penalty = compute_penalty(allowed_time, screen_time);
    if penalty >= amount {
        0
    } else {
        amount - penalty
    }
}

/// Splits `amount` into `(reward, penalty)`; the two always sum to `amount`.
pub fn split(amount: i128, allowed_time: u64, screen_time: u64) -> (i128, i128) {
    let reward = compute_reward(amount, allowed_time, screen_time);
    (reward, amount.saturating_sub(reward))
}
