// src/chooser.rs
//! Weighted selection over an injected `[0,1)` source.

use crate::core::{FixedOrRandom, Weighted};
use crate::error::SeedError;
use crate::random::RandomSource;

/// Uniform draw inclusive of both `min` and `max`, consuming exactly one
/// draw: `floor(draw * (max - min + 1)) + min`.
#[inline]
pub fn random_between(random: &mut dyn RandomSource, min: f64, max: f64) -> f64 {
    (random.draw() * (max - min + 1.0)).floor() + min
}

/// Walk `choices` in order, accumulating probabilities until the sampled
/// goal is reached, and return that choice's value. Probabilities across
/// the list must sum to >= 100; that is a content-authoring contract,
/// not something validated up front.
pub fn choose_among<T: Clone>(
    random: &mut dyn RandomSource,
    choices: &[Weighted<T>],
) -> Result<T, SeedError> {
    let goal = random_between(random, 0.0, 100.0);
    let mut sum = 0.0;
    for choice in choices {
        sum += choice.probability;
        if sum >= goal {
            return Ok(choice.value.clone());
        }
    }
    Err(SeedError::SchemaProbability { sum, goal })
}

/// Resolve a value that may be fixed or drawn from weighted candidates.
pub fn fixed_or_random<T: Clone>(
    random: &mut dyn RandomSource,
    value: &FixedOrRandom<T>,
) -> Result<T, SeedError> {
    match value {
        FixedOrRandom::Fixed(v) => Ok(v.clone()),
        FixedOrRandom::Random(choices) => choose_among(random, choices),
    }
}

/// Like [`fixed_or_random`], falling back to `default` when absent.
pub fn fixed_or_random_or<T: Clone>(
    random: &mut dyn RandomSource,
    value: Option<&FixedOrRandom<T>>,
    default: &T,
) -> Result<T, SeedError> {
    match value {
        Some(v) => fixed_or_random(random, v),
        None => Ok(default.clone()),
    }
}

#[cfg(test)]
mod chooser_tests {
    use super::*;
    use crate::random::SequenceRandom;

    #[test]
    fn random_between_reaches_both_endpoints() {
        let mut low = SequenceRandom::new(vec![0.0]);
        assert_eq!(3.0, random_between(&mut low, 3.0, 7.0));
        let mut high = SequenceRandom::new(vec![0.999]);
        assert_eq!(7.0, random_between(&mut high, 3.0, 7.0));
    }

    #[test]
    fn choose_among_takes_first_choice_reaching_goal() {
        let choices = vec![
            Weighted { probability: 30.0, value: "a" },
            Weighted { probability: 30.0, value: "b" },
            Weighted { probability: 40.0, value: "c" },
        ];
        // goal = floor(0.5 * 101) = 50; 30 < 50 <= 60
        let mut random = SequenceRandom::new(vec![0.5]);
        assert_eq!("b", choose_among(&mut random, &choices).unwrap());
    }

    #[test]
    fn choose_among_goal_zero_takes_the_first_choice() {
        let choices = vec![
            Weighted { probability: 30.0, value: "a" },
            Weighted { probability: 70.0, value: "b" },
        ];
        let mut random = SequenceRandom::new(vec![0.0]);
        assert_eq!("a", choose_among(&mut random, &choices).unwrap());
    }

    #[test]
    fn choose_among_reports_unreachable_goal() {
        let choices = vec![Weighted { probability: 5.0, value: "val" }];
        // goal = floor(0.99 * 101) = 99
        let mut random = SequenceRandom::new(vec![0.99]);
        let err = choose_among(&mut random, &choices).unwrap_err();
        assert_eq!(
            "Choices only reached sum 5 out of goal 99.",
            err.to_string()
        );
    }

    #[test]
    fn fixed_value_passes_through_without_draws() {
        let mut random = SequenceRandom::new(vec![0.99]);
        let value = fixed_or_random(&mut random, &FixedOrRandom::Fixed(12.5)).unwrap();
        assert_eq!(12.5, value);
    }

    #[test]
    fn fixed_list_value_is_never_treated_as_choices() {
        // The tag keeps a literal list distinct from a weighted-choice
        // list, which a structural check could misclassify.
        let value: FixedOrRandom<Vec<f64>> = FixedOrRandom::Fixed(vec![1.0, 2.0, 3.0]);
        let mut random = SequenceRandom::new(vec![0.99]);
        assert_eq!(
            vec![1.0, 2.0, 3.0],
            fixed_or_random(&mut random, &value).unwrap()
        );
    }

    #[test]
    fn absent_value_falls_back_to_default() {
        let mut random = SequenceRandom::new(vec![0.0]);
        assert_eq!(
            9.0,
            fixed_or_random_or::<f64>(&mut random, None, &9.0).unwrap()
        );
    }
}
