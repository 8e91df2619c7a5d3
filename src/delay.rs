//! Busy-wait delays. Loop-count based and uncalibrated; good enough for settling times.

/// Loop iterations per millisecond, tuned for the 8 MHz reset clock of STM32F4 parts.
pub const LOOPS_PER_MS: u32 = 8_000;

/// Number of loop iterations a delay of `ms` milliseconds spins for, saturating.
pub const fn loops_for(ms: u32) -> u32 {
    ms.saturating_mul(LOOPS_PER_MS)
}

/// Spin for roughly `ms` milliseconds.
pub fn delay_ms(ms: u32) {
    spin(loops_for(ms));
}

#[cfg(feature = "cortex_m")]
fn spin(loops: u32) {
    cortex_m::asm::delay(loops);
}

#[cfg(not(feature = "cortex_m"))]
fn spin(loops: u32) {
    for _ in 0..loops {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loops_scale_with_milliseconds() {
        assert_eq!(loops_for(0), 0);
        assert_eq!(loops_for(1), 8_000);
        assert_eq!(loops_for(250), 2_000_000);
    }

    #[test]
    fn long_delays_saturate() {
        assert_eq!(loops_for(u32::MAX), u32::MAX);
    }

    #[test]
    fn zero_delay_returns() {
        delay_ms(0);
        delay_ms(1);
    }
}
