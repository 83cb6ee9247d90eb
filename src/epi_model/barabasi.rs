use serde::{Serialize, Deserialize};

use {
    net_ensembles::*,
    super::*,
    rand_pcg::Pcg64,
    net_ensembles::{
        WithGraph,
        MeasurableGraphQuantities,
        SimpleSample,
        rand::SeedableRng,
    },
};

pub type BarabasiEnsemble = BAensemble<ContactNode,Pcg64>;
pub type ContactGraph = GenericGraph<ContactNode, graph::NodeContainer<ContactNode>>;

/// The contact network collaborator: a Barabasi-Albert scale-free graph,
/// re-randomized until connected so the outbreak can reach everyone.
#[derive(Clone, Serialize, Deserialize)]
pub struct BarabasiModel{
    pub ensemble: BarabasiEnsemble,
    pub n: usize,
}

impl BarabasiModel{
    pub fn ensemble(&self) -> &BarabasiEnsemble
    {
        &self.ensemble
    }

    pub fn ensemble_mut(&mut self) -> &mut BarabasiEnsemble
    {
        &mut self.ensemble
    }

    /// The topology handed to the outbreak. Cloned, the ensemble keeps its
    /// own copy untouched.
    pub fn contact_graph(&self) -> ContactGraph
    {
        self.ensemble.graph().clone()
    }
}

impl From<BarabasiOptions> for BarabasiModel{
    fn from(param:BarabasiOptions) -> Self{
        let graph_rng = Pcg64::seed_from_u64(param.graph_seed);
        let mut ensemble = BarabasiEnsemble::new(param.system_size.get(),graph_rng,param.m,param.source_n);
        let mut counter = 0_u32;
        while !ensemble.is_connected().unwrap()
        {
            counter += 1;
            ensemble.randomize();
        }
        if counter > 0
        {
            println!("Randomized the ensemble {} additional times to find a connected network", counter);
        }
        Self{
            ensemble,
            n: param.system_size.get()
        }

    }

}
