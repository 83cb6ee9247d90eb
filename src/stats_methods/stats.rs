//mean and variance of the measured outbreak sizes.

#[derive(Clone)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance_of_mean(&self) -> f64
    {
        self.var
    }

    pub fn from_slice(slice: &[u32], frac: Option<f64>) -> Self
    {
        let mean = calc_average(slice, frac);
        let var = calc_variance(slice, mean, frac);
        Self{
            mean,
            var
        }
    }
}

pub fn calc_average(slice: &[u32], frac: Option<f64>) -> f64
{
    let norm = frac.unwrap_or(1.0);
    let sum: f64 = slice.iter()
        .map(|&val| val as f64 / norm)
        .sum();
    sum / slice.len() as f64
}

pub fn calc_variance(slice: &[u32], mean: f64, frac: Option<f64>) -> f64
{
    let norm = frac.unwrap_or(1.0);
    let sum: f64 = slice.iter()
        .map(
            |&val|
            {
                let diff = val as f64 / norm - mean;
                diff * diff
            }
        )
        .sum();
    sum / slice.len() as f64
}

#[cfg(test)]
mod testing
{
    use super::*;

    #[test]
    fn mean_and_variance()
    {
        let samples = [2_u32, 4, 4, 4, 5, 5, 7, 9];
        let var = MyVariance::from_slice(&samples, None);
        assert_eq!(var.mean(), 5.0);
        assert_eq!(var.variance_of_mean(), 4.0);
    }

    #[test]
    fn normalized_mean()
    {
        let samples = [10_u32, 30];
        let var = MyVariance::from_slice(&samples, Some(100.0));
        assert_eq!(var.mean(), 0.2);
    }
}
