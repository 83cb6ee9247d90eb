use {
    serde::{Serialize, Deserialize},
    net_ensembles::Node
};

/// Disease course of a single node. Incubating nodes are the only
/// contagious ones, leaving incubation goes straight to Recovered and
/// recovered nodes are never infected again.
#[derive(Clone, Debug,PartialEq,Eq,Copy)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    Susceptible,
    Incubating,
    Recovered,
}
impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self,InfectionState::Susceptible)
    }
    pub fn inc_check(&self) -> bool{
        matches!(self,InfectionState::Incubating)
    }
    pub fn rec_check(&self) -> bool{
        matches!(self,InfectionState::Recovered)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        matches!(self, Self::Incubating | Self::Recovered)
    }
}

impl Default for InfectionState{
    fn default() -> Self{
        InfectionState::Susceptible
    }
}

/// Payload of the contact network vertices. The outbreak keeps its own
/// state table, the graph itself only carries topology.
#[derive(Clone, Copy, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct ContactNode;

impl Node for ContactNode{
    fn new_from_index(_index: usize) -> Self{
        ContactNode
    }
}
