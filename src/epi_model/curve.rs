use serde::{Serialize, Deserialize};

/// The epidemic curve: how many nodes were newly infected in each round.
/// Append only, one entry per completed round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpidemicCurve{
    new_cases: Vec<u32>,
}

impl EpidemicCurve{
    pub fn new() -> Self
    {
        Self{
            new_cases: Vec::new()
        }
    }

    pub fn with_capacity(rounds: usize) -> Self
    {
        Self{
            new_cases: Vec::with_capacity(rounds)
        }
    }

    pub fn record(&mut self, count: u32)
    {
        self.new_cases.push(count);
    }

    pub fn series(&self) -> &[u32]
    {
        &self.new_cases
    }

    pub fn rounds(&self) -> usize
    {
        self.new_cases.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.new_cases.is_empty()
    }

    /// Seed not included, the curve only counts transmissions.
    pub fn total_infections(&self) -> u64
    {
        self.new_cases.iter().map(|&count| count as u64).sum()
    }
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn records_in_order()
    {
        let mut curve = EpidemicCurve::new();
        assert!(curve.is_empty());
        curve.record(2);
        curve.record(0);
        curve.record(5);
        assert_eq!(curve.series(), &[2, 0, 5]);
        assert_eq!(curve.rounds(), 3);
        assert_eq!(curve.total_infections(), 7);
    }
}
