pub mod epi_states;
pub use epi_states::*;

pub mod barabasi;
pub use barabasi::*;

pub mod barabasi_options;
pub use barabasi_options::*;

pub mod infection_prob;
pub use infection_prob::*;

pub mod spreaders;
pub use spreaders::*;

pub mod curve;
pub use curve::*;

pub mod outbreak;
pub use outbreak::*;

pub mod outbreak_options;
pub use outbreak_options::*;

pub mod curve_writer;
pub use curve_writer::*;
