use{
    serde::{Serialize, Deserialize},
    crate::misc_types::*,
};

/// Per-contact transmission probability. Ramps up linearly with the round
/// counter and saturates at `max`, the way the outbreak accelerates once
/// community spread is established.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct InfectionProbability{
    initial: f64,
    growth: f64,
    max: f64,
}

impl InfectionProbability{
    pub fn new(initial: f64, growth: f64, max: f64) -> Result<Self, SimError>
    {
        if !(0.0..=1.0).contains(&initial){
            return Err(
                SimError::InvalidArgument(
                    format!("initial infection probability {initial} outside [0,1]")
                )
            );
        }
        if !(initial..=1.0).contains(&max){
            return Err(
                SimError::InvalidArgument(
                    format!("max infection probability {max} outside [{initial},1]")
                )
            );
        }
        // negative growth would make probability(t) decreasing
        if growth < 0.0 {
            return Err(
                SimError::InvalidArgument(
                    format!("probability growth rate {growth} is negative")
                )
            );
        }
        Ok(
            Self{
                initial,
                growth,
                max
            }
        )
    }

    pub fn probability(&self, t: u32) -> f64
    {
        (self.initial + self.growth * t as f64).min(self.max)
    }

    pub fn max(&self) -> f64
    {
        self.max
    }
}

#[cfg(test)]
mod testing
{
    use super::*;
    use crate::misc_types::*;

    #[test]
    fn monotone_and_capped()
    {
        let prob = InfectionProbability::new(
            DEFAULT_INITIAL_INFECTION_PROB,
            DEFAULT_PROB_GROWTH_RATE,
            DEFAULT_MAX_INFECTION_PROB
        ).unwrap();

        let mut last = 0.0;
        for t in 0..1000{
            let p = prob.probability(t);
            assert!(p >= last);
            assert!(p <= DEFAULT_MAX_INFECTION_PROB);
            last = p;
        }
        // far beyond the ramp the cap has to be reached
        assert_eq!(prob.probability(100_000), DEFAULT_MAX_INFECTION_PROB);
    }

    #[test]
    fn zero_growth_is_constant()
    {
        let prob = InfectionProbability::new(0.25, 0.0, 0.5).unwrap();
        assert_eq!(prob.probability(0), 0.25);
        assert_eq!(prob.probability(10_000), 0.25);
    }

    #[test]
    fn rejects_bad_parameters()
    {
        assert!(InfectionProbability::new(-0.1, 0.0, 0.5).is_err());
        assert!(InfectionProbability::new(0.5, 0.0, 0.1).is_err());
        assert!(InfectionProbability::new(0.1, -0.001, 0.5).is_err());
        assert!(InfectionProbability::new(0.1, 0.0, 1.5).is_err());
    }
}
