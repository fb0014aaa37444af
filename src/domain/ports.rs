use crate::domain::model::ZodiacSign;
use crate::utils::error::Result;
use std::fmt::Debug;

/// A raw value offered as a score. Only integer types holding a non-negative
/// value that fits a `u32` are accepted; everything else is reported back with
/// its `Debug` rendering.
pub trait ScoreInput: Debug {
    fn to_score(&self) -> Option<u32>;
}

macro_rules! impl_score_input_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScoreInput for $t {
                fn to_score(&self) -> Option<u32> {
                    u32::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_score_input_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats and text are never integers, whatever their value.
macro_rules! impl_score_input_rejected {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScoreInput for $t {
                fn to_score(&self) -> Option<u32> {
                    None
                }
            }
        )*
    };
}

impl_score_input_rejected!(f32, f64, &str, String);

pub trait SignResolver {
    fn resolve_sign(&self, input: &str) -> Result<ZodiacSign>;

    fn resolve(&self, input: &str) -> Result<&'static str> {
        self.resolve_sign(input).map(|sign| sign.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_scores() {
        assert_eq!(3i32.to_score(), Some(3));
        assert_eq!(0u8.to_score(), Some(0));
        assert_eq!((-1i64).to_score(), None);
        assert_eq!((u64::from(u32::MAX) + 1).to_score(), None);
    }

    #[test]
    fn test_non_integer_types_rejected() {
        assert_eq!(2.0f64.to_score(), None);
        assert_eq!(1.5f64.to_score(), None);
        assert_eq!(0.0f32.to_score(), None);
        assert_eq!("2".to_score(), None);
        assert_eq!(String::from("3").to_score(), None);
    }
}
