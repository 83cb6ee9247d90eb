use{
    super::*,
    crate::misc_types::*,

    crate::epi_curves::*,
    crate::scan_spreaders::*,
};

/// Everything an outbreak needs besides the topology and the seed node.
#[derive(Clone, Copy, Debug)]
pub struct OutbreakOptions{
    pub infection_prob: InfectionProbability,
    pub incubation_min: u32,
    pub incubation_max: u32,
    pub recovery_time: u32,
    pub time_steps: u32,
    pub sir_seed: u64,
}

impl OutbreakOptions{
    pub fn from_curves_param(param: &EpiCurvesParam) -> Result<Self, SimError>
    {
        let infection_prob = InfectionProbability::new(
            param.initial_infection_prob,
            param.prob_growth_rate,
            param.max_infection_prob
        )?;
        Ok(
            Self{
                infection_prob,
                incubation_min: param.incubation_min,
                incubation_max: param.incubation_max,
                recovery_time: param.recovery_time,
                time_steps: param.time_steps,
                sir_seed: param.sir_seed,
            }
        )
    }

    pub fn from_spreader_scan_param(param: &ScanSpreadersParam) -> Result<Self, SimError>
    {
        let infection_prob = InfectionProbability::new(
            param.initial_infection_prob,
            param.prob_growth_rate,
            param.max_infection_prob
        )?;
        Ok(
            Self{
                infection_prob,
                incubation_min: param.incubation_min,
                incubation_max: param.incubation_max,
                recovery_time: param.recovery_time,
                time_steps: param.time_steps,
                sir_seed: param.sir_seed,
            }
        )
    }
}
