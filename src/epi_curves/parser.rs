use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::num::*,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Sample epidemic curves of the incubation model on a scale-free network
pub struct EpiCurves
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl EpiCurves {
    pub fn parse(&self) -> (EpiCurvesParam, Value)
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self)
    {
        let (param, json) = self.parse();
        super::execute::execute_curves(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EpiCurvesParam
{
    pub system_size: NonZeroUsize,
    pub graph_type: GraphType,

    pub spreader_min: usize,
    pub spreader_max: usize,

    pub initial_infection_prob: f64,
    pub max_infection_prob: f64,
    pub prob_growth_rate: f64,

    pub time_steps: u32,
    pub incubation_min: u32,
    pub incubation_max: u32,
    pub recovery_time: u32,

    pub graph_seed: u64,
    pub sir_seed: u64,
    pub samples: usize
}

impl EpiCurvesParam
{
    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}Curves_N{}T{}P{}M{}G{}Inc{}-{}Rec{}Spr{}-{}Sam{}Graph{}GS{}SS{}",
            crate::VERSION,
            self.system_size,
            self.time_steps,
            self.initial_infection_prob,
            self.max_infection_prob,
            self.prob_growth_rate,
            self.incubation_min,
            self.incubation_max,
            self.recovery_time,
            self.spreader_min,
            self.spreader_max,
            self.samples,
            self.graph_type.name(),
            self.graph_seed,
            self.sir_seed
        )
    }
}

impl Default for EpiCurvesParam
{
    fn default() -> Self {

        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            graph_type: GraphType::Barabasi(DEFAULT_ATTACHMENT_DEGREE, DEFAULT_SOURCE_N),
            spreader_min: DEFAULT_SPREADER_MIN,
            spreader_max: DEFAULT_SPREADER_MAX,
            initial_infection_prob: DEFAULT_INITIAL_INFECTION_PROB,
            max_infection_prob: DEFAULT_MAX_INFECTION_PROB,
            prob_growth_rate: DEFAULT_PROB_GROWTH_RATE,
            time_steps: DEFAULT_TIME_STEPS,
            incubation_min: DEFAULT_INCUBATION_MIN,
            incubation_max: DEFAULT_INCUBATION_MAX,
            recovery_time: DEFAULT_RECOVERY_TIME,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
            samples: DEFAULT_SAMPLES
        }
    }
}
