use{
    serde::{Serialize, Deserialize},

    std::{
        num::*,

        ops::RangeInclusive,

    },
};

// graph defaults, matching the networks the model was tuned on
pub const DEFAULT_SYSTEM_SIZE: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(20000)};
pub const DEFAULT_ATTACHMENT_DEGREE: usize = 3;
pub const DEFAULT_SOURCE_N: usize = 5;
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;

// disease course defaults
pub const DEFAULT_INITIAL_INFECTION_PROB: f64 = 0.001;
pub const DEFAULT_MAX_INFECTION_PROB: f64 = 0.0625;
pub const DEFAULT_PROB_GROWTH_RATE: f64 = 0.0003;
pub const DEFAULT_TIME_STEPS: u32 = 150;
pub const DEFAULT_INCUBATION_MIN: u32 = 10;
pub const DEFAULT_INCUBATION_MAX: u32 = 20;
pub const DEFAULT_RECOVERY_TIME: u32 = 20;

pub const DEFAULT_SPREADER_MIN: usize = 1;
pub const DEFAULT_SPREADER_MAX: usize = 10;
pub const DEFAULT_SAMPLES: usize = 1000;

pub const ONE: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(1)};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum GraphType{
    // place holder for later graph types I might want to use
    // This makes sure I have to implement it
    Barabasi(usize,usize),
    Invalid
}

impl GraphType{
    pub fn name(&self) -> String
    {
        match self
        {
            Self::Barabasi(q,r) => format!("ba{}{}",q,r),
            Self::Invalid => unimplemented!()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UsizeRangeBuilder
{
    pub start: usize,
    pub end: usize,
    pub steps: NonZeroUsize
}

impl UsizeRangeBuilder {
    pub fn range(&self) -> RangeInclusive<usize>
    {
        self.start..=self.end
    }

    pub fn iter(&self) -> impl Iterator<Item=usize>
    {
        self.range().step_by(self.steps.get())
    }

    pub fn len(&self) -> usize
    {
        self.iter().count()
    }
    pub fn is_empty(&self) -> bool{
        self.start > self.end
    }
}
