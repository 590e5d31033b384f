use crate::domain::model::{SafetyAssessment, SafetyStatus};

const CAUTION_THRESHOLD_M: f64 = 1.5;
const UNSAFE_THRESHOLD_M: f64 = 2.0;

/// Classify sea state from wave height in meters. Pure.
///
/// Negative and NaN inputs are clamped to 0.0; an unchecked NaN would fall
/// through every comparison and land in the Safe band. Boundaries belong to
/// the higher band: 1.5 m is already Caution, 2.0 m is already Unsafe.
pub fn classify_safety(wave_height: f64) -> SafetyAssessment {
    let wave_height = if wave_height.is_nan() {
        0.0
    } else {
        wave_height.max(0.0)
    };

    if wave_height >= UNSAFE_THRESHOLD_M {
        SafetyAssessment {
            status: SafetyStatus::Unsafe,
            advice: "High waves - fishing is not recommended today.".to_string(),
        }
    } else if wave_height >= CAUTION_THRESHOLD_M {
        SafetyAssessment {
            status: SafetyStatus::Caution,
            advice: "Moderate waves - small boats should stay ashore; carry safety gear."
                .to_string(),
        }
    } else {
        SafetyAssessment {
            status: SafetyStatus::Safe,
            advice: "Sea conditions are generally safe for fishing.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_waves_are_safe() {
        assert_eq!(classify_safety(0.0).status, SafetyStatus::Safe);
        assert_eq!(classify_safety(0.8).status, SafetyStatus::Safe);
        assert_eq!(classify_safety(1.49).status, SafetyStatus::Safe);
    }

    #[test]
    fn boundary_goes_to_higher_band() {
        assert_eq!(classify_safety(1.5).status, SafetyStatus::Caution);
        assert_eq!(classify_safety(2.0).status, SafetyStatus::Unsafe);
    }

    #[test]
    fn mid_band_is_caution() {
        assert_eq!(classify_safety(1.7).status, SafetyStatus::Caution);
        assert_eq!(classify_safety(1.99).status, SafetyStatus::Caution);
    }

    #[test]
    fn high_waves_are_unsafe() {
        assert_eq!(classify_safety(2.5).status, SafetyStatus::Unsafe);
        assert_eq!(classify_safety(10.0).status, SafetyStatus::Unsafe);
    }

    #[test]
    fn negative_and_nan_clamp_to_zero() {
        assert_eq!(classify_safety(-3.0).status, SafetyStatus::Safe);
        assert_eq!(classify_safety(f64::NAN).status, SafetyStatus::Safe);
    }

    #[test]
    fn higher_waves_never_classify_safer() {
        let rank = |h: f64| match classify_safety(h).status {
            SafetyStatus::Safe => 0,
            SafetyStatus::Caution => 1,
            SafetyStatus::Unsafe => 2,
        };

        let mut prev = rank(0.0);
        for step in 1..=60 {
            let next = rank(step as f64 * 0.05);
            assert!(next >= prev);
            prev = next;
        }
    }
}
