use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::num::*,
    crate::misc_types::*,
    crate::json_parsing::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Scan the super-spreader count and measure the outbreak size
pub struct ScanSpreaders
{
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl ScanSpreaders {
    pub fn parse(&self) -> (ScanSpreadersParam, Value)
    {
        parse(self.json.as_ref())
    }

    pub fn execute(&self)
    {
        let (param, json) = self.parse();
        super::execute::execute_scan(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScanSpreadersParam
{
    pub system_size: NonZeroUsize,
    pub graph_type: GraphType,

    pub spreader_range: UsizeRangeBuilder,

    pub initial_infection_prob: f64,
    pub max_infection_prob: f64,
    pub prob_growth_rate: f64,

    pub time_steps: u32,
    pub incubation_min: u32,
    pub incubation_max: u32,
    pub recovery_time: u32,

    pub graph_seed: u64,
    pub sir_seed: u64,
    pub samples_per_point: usize,
    pub fraction: bool
}

impl ScanSpreadersParam
{
    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}ScanSpr_N{}T{}K{}-{}Sam{}Graph{}GS{}SS{}.dat",
            crate::VERSION,
            self.system_size,
            self.time_steps,
            self.spreader_range.start,
            self.spreader_range.end,
            self.samples_per_point,
            self.graph_type.name(),
            self.graph_seed,
            self.sir_seed
        )
    }
}

impl Default for ScanSpreadersParam
{
    fn default() -> Self {

        Self{
            system_size: DEFAULT_SYSTEM_SIZE,
            graph_type: GraphType::Barabasi(DEFAULT_ATTACHMENT_DEGREE, DEFAULT_SOURCE_N),
            spreader_range: UsizeRangeBuilder{
                start: DEFAULT_SPREADER_MIN,
                end: DEFAULT_SPREADER_MAX,
                steps: ONE
            },
            initial_infection_prob: DEFAULT_INITIAL_INFECTION_PROB,
            max_infection_prob: DEFAULT_MAX_INFECTION_PROB,
            prob_growth_rate: DEFAULT_PROB_GROWTH_RATE,
            time_steps: DEFAULT_TIME_STEPS,
            incubation_min: DEFAULT_INCUBATION_MIN,
            incubation_max: DEFAULT_INCUBATION_MAX,
            recovery_time: DEFAULT_RECOVERY_TIME,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
            samples_per_point: DEFAULT_SAMPLES,
            fraction: true
        }
    }
}
