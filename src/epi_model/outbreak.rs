use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use net_ensembles::rand::prelude::Distribution;
use rand_pcg::Pcg64;
use net_ensembles::rand::SeedableRng;
use rand::distributions::Uniform;
use super::*;
use crate::misc_types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutbreakStage{
    Ready,
    Running,
    Finished
}

/// A single outbreak on a fixed contact network.
///
/// Owns every piece of per-node bookkeeping: the dense state table, the
/// sparse incubation/recovery timer tables and the infected list. The
/// graph is topology only and never mutated. All randomness of a run
/// comes from the one Pcg64 stream held here, so a run is reproducible
/// from its seed.
#[derive(Clone)]
pub struct Outbreak{
    graph: ContactGraph,
    states: Vec<InfectionState>,
    infected_list: Vec<usize>,
    new_infected_list: Vec<usize>,
    incubation_timers: HashMap<usize, u32>,
    recovery_timers: HashMap<usize, u32>,
    curve: EpidemicCurve,
    rng_type: Pcg64,
    infection_prob: InfectionProbability,
    incubation_min: u32,
    incubation_max: u32,
    recovery_time: u32,
    time_steps: u32,
    time: u32,
    stage: OutbreakStage,
    patient_zero: usize
}

impl Outbreak{
    pub fn new(
        graph: ContactGraph,
        patient_zero: usize,
        opt: OutbreakOptions
    ) -> Result<Self, SimError>
    {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(SimError::SeedUnavailable);
        }
        if patient_zero >= n {
            return Err(
                SimError::InvalidArgument(
                    format!("patient zero {patient_zero} outside the graph (size {n})")
                )
            );
        }
        if opt.incubation_min == 0 {
            return Err(
                SimError::InvalidArgument(
                    "incubation period must last at least 1 time step".into()
                )
            );
        }
        if opt.incubation_min > opt.incubation_max {
            return Err(
                SimError::InvalidArgument(
                    format!(
                        "incubation bounds {}..={} are inverted",
                        opt.incubation_min,
                        opt.incubation_max
                    )
                )
            );
        }
        if opt.recovery_time == 0 {
            return Err(
                SimError::InvalidArgument(
                    "recovery time must last at least 1 time step".into()
                )
            );
        }

        let rng_type = Pcg64::seed_from_u64(opt.sir_seed);
        let mut res = Self{
            graph,
            states: vec![InfectionState::Susceptible; n],
            infected_list: Vec::new(),
            new_infected_list: Vec::new(),
            incubation_timers: HashMap::new(),
            recovery_timers: HashMap::new(),
            curve: EpidemicCurve::new(),
            rng_type,
            infection_prob: opt.infection_prob,
            incubation_min: opt.incubation_min,
            incubation_max: opt.incubation_max,
            recovery_time: opt.recovery_time,
            time_steps: opt.time_steps,
            time: 0,
            stage: OutbreakStage::Ready,
            patient_zero
        };
        res.reset();
        Ok(res)
    }

    pub fn reseed_sir_rng(&mut self, rng: &mut Pcg64)
    { //reseeding rng
        self.rng_type = Pcg64::from_rng(rng).unwrap();
    }

    /// Back to the pre-round state: everyone susceptible except patient
    /// zero, whose incubation duration is assigned in the first round.
    pub fn reset(&mut self)
    {
        self.states
            .iter_mut()
            .for_each(|state| *state = InfectionState::Susceptible);
        self.states[self.patient_zero] = InfectionState::Incubating;
        self.infected_list.clear();
        self.infected_list.push(self.patient_zero);
        self.new_infected_list.clear();
        self.incubation_timers.clear();
        self.recovery_timers.clear();
        self.curve = EpidemicCurve::with_capacity(self.time_steps as usize);
        self.time = 0;
        self.stage = OutbreakStage::Ready;
    }

    fn propagate_one_time_step(&mut self)
    {
        debug_assert!(self.new_infected_list.is_empty());
        debug_assert!(self.time < self.time_steps);
        self.stage = OutbreakStage::Running;

        let p = self.infection_prob.probability(self.time);
        let prob_dist = Uniform::new_inclusive(0.0,1.0);

        // exposure. Only nodes that were already incubating when the round
        // started are contagious, the fresh cases wait until next round.
        // Marking a fresh case immediately keeps a node with two infected
        // neighbours from being counted twice.
        for &index in self.infected_list.iter(){
            for (n_index, _) in self.graph.contained_iter_neighbors_with_index(index){
                if self.states[n_index].sus_check()
                    && prob_dist.sample(&mut self.rng_type) < p
                {
                    self.states[n_index] = InfectionState::Incubating;
                    self.new_infected_list.push(n_index);
                }
            }
        }

        // timers assigned below are skipped here, a sampled duration of d
        // means d full rounds of contagiousness
        for timer in self.incubation_timers.values_mut(){
            *timer -= 1;
        }
        for timer in self.recovery_timers.values_mut(){
            *timer -= 1;
        }

        // every incubating node without a timer just got exposed, except
        // for patient zero who picks up its duration in the first round
        let incubation_dist = Uniform::new_inclusive(self.incubation_min, self.incubation_max);
        for &index in self.infected_list.iter().chain(self.new_infected_list.iter()){
            self.incubation_timers
                .entry(index)
                .or_insert_with(|| incubation_dist.sample(&mut self.rng_type));
        }

        // incubation over: straight to Recovered, the recovery countdown
        // only models the delay until the case is considered resolved
        let mut expired: Vec<usize> = self.incubation_timers
            .iter()
            .filter(|&(_, &timer)| timer == 0)
            .map(|(&index, _)| index)
            .collect();
        expired.sort_unstable();
        for &index in expired.iter(){
            self.states[index] = InfectionState::Recovered;
            self.incubation_timers.remove(&index);
            self.recovery_timers.insert(index, self.recovery_time);
        }
        if !expired.is_empty(){
            self.infected_list.retain(|&index| !self.states[index].rec_check());
        }

        // countdown cleanup. The node recovered when incubation ended, so
        // dropping the entry changes nothing observable.
        self.recovery_timers.retain(|_, timer| *timer != 1);

        self.curve.record(self.new_infected_list.len() as u32);
        self.infected_list.append(&mut self.new_infected_list);

        self.time += 1;
        if self.time == self.time_steps{
            self.stage = OutbreakStage::Finished;
        }
    }

    pub fn propagate_until_completion(&mut self)
    {
        while self.time < self.time_steps{
            self.propagate_one_time_step();
        }
        self.stage = OutbreakStage::Finished;
    }

    /// Same as propagate_until_completion, but checks the flag between
    /// rounds. Returns false if the run was aborted, the curve stays
    /// inaccessible in that case.
    pub fn propagate_while(&mut self, keep_running: &AtomicBool) -> bool
    {
        while self.time < self.time_steps{
            if !keep_running.load(Ordering::Relaxed){
                return false;
            }
            self.propagate_one_time_step();
        }
        self.stage = OutbreakStage::Finished;
        true
    }

    /// The finished epidemic curve. None while the run is still going.
    pub fn curve(&self) -> Option<&EpidemicCurve>
    {
        match self.stage{
            OutbreakStage::Finished => Some(&self.curve),
            _ => None
        }
    }

    pub fn stage(&self) -> OutbreakStage
    {
        self.stage
    }

    pub fn time(&self) -> u32
    {
        self.time
    }

    pub fn patient_zero(&self) -> usize
    {
        self.patient_zero
    }

    pub fn infected_count(&self) -> usize
    {
        self.infected_list.len()
    }

    pub fn sus_count(&self) -> usize
    {
        self.states
            .iter()
            .filter(|state| state.sus_check())
            .count()
    }

    pub fn recovered_count(&self) -> usize
    {
        self.states
            .iter()
            .filter(|state| state.rec_check())
            .count()
    }

    /// Called C in the paper
    pub fn calculate_ever_infected(&self) -> usize
    {
        self.states
            .iter()
            .filter(|state| state.is_or_was_infected())
            .count()
    }
}

#[cfg(test)]
mod tests {
    // Note this useful idiom: importing names from outer (for mod tests) scope.
    use super::*;
    use crate::epi_model::*;
    use std::num::NonZeroUsize;

    fn path_graph(n: usize) -> ContactGraph
    {
        let mut graph = ContactGraph::new(n);
        for index in 0..n - 1{
            graph.add_edge(index, index + 1).unwrap();
        }
        graph
    }

    fn certain_infection() -> InfectionProbability
    {
        InfectionProbability::new(1.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn path_graph_scenario()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 1,
            recovery_time: 1,
            time_steps: 4,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(5), 2, opt).unwrap();
        assert_eq!(outbreak.stage(), OutbreakStage::Ready);

        // round 0: both neighbours of the seed catch it
        outbreak.propagate_one_time_step();
        assert_eq!(outbreak.curve.series(), &[2]);
        assert!(outbreak.states[1].inc_check());
        assert!(outbreak.states[3].inc_check());
        assert!(outbreak.states[2].inc_check());

        // round 1: the seed recovers, the outer ring catches it
        outbreak.propagate_one_time_step();
        assert_eq!(outbreak.curve.series(), &[2, 2]);
        assert!(outbreak.states[2].rec_check());
        assert!(outbreak.states[0].inc_check());
        assert!(outbreak.states[4].inc_check());

        // nobody left to infect
        outbreak.propagate_until_completion();
        assert_eq!(outbreak.stage(), OutbreakStage::Finished);
        assert_eq!(outbreak.curve().unwrap().series(), &[2, 2, 0, 0]);
        assert_eq!(outbreak.calculate_ever_infected(), 5);
        assert_eq!(outbreak.infected_count(), 0);
    }

    #[test]
    fn zero_probability_never_spreads()
    {
        let opt = OutbreakOptions{
            infection_prob: InfectionProbability::new(0.0, 0.0, 0.0).unwrap(),
            incubation_min: 2,
            incubation_max: 3,
            recovery_time: 2,
            time_steps: 20,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(5), 2, opt).unwrap();
        outbreak.propagate_until_completion();
        assert_eq!(outbreak.curve().unwrap().series(), &[0; 20]);
        // the seed is not a new infection and still runs its course
        assert_eq!(outbreak.calculate_ever_infected(), 1);
        assert_eq!(outbreak.recovered_count(), 1);
    }

    #[test]
    fn zero_time_steps_finish_immediately()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 1,
            recovery_time: 1,
            time_steps: 0,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(3), 0, opt).unwrap();
        assert_eq!(outbreak.stage(), OutbreakStage::Ready);
        outbreak.propagate_until_completion();
        assert_eq!(outbreak.stage(), OutbreakStage::Finished);
        assert!(outbreak.curve().unwrap().is_empty());
    }

    #[test]
    fn curve_gated_until_finished()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 2,
            recovery_time: 1,
            time_steps: 3,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(4), 1, opt).unwrap();
        assert!(outbreak.curve().is_none());
        outbreak.propagate_one_time_step();
        assert!(outbreak.curve().is_none());
        outbreak.propagate_until_completion();
        assert!(outbreak.curve().is_some());
    }

    #[test]
    fn fixed_seed_is_deterministic()
    {
        let graph_opt = BarabasiOptions{
            graph_seed: DEFAULT_GRAPH_SEED,
            system_size: NonZeroUsize::new(200).unwrap(),
            m: 2,
            source_n: 5
        };
        let model: BarabasiModel = graph_opt.into();
        let graph = model.contact_graph();
        let patient_zero = top_spreaders(&graph, 1).unwrap()[0];

        let opt = OutbreakOptions{
            infection_prob: InfectionProbability::new(0.5, 0.01, 0.9).unwrap(),
            incubation_min: 2,
            incubation_max: 4,
            recovery_time: 3,
            time_steps: 50,
            sir_seed: 42
        };
        let mut first = Outbreak::new(graph.clone(), patient_zero, opt).unwrap();
        let mut second = Outbreak::new(graph, patient_zero, opt).unwrap();
        first.propagate_until_completion();
        second.propagate_until_completion();
        assert_eq!(first.curve().unwrap(), second.curve().unwrap());
        assert!(first.curve().unwrap().total_infections() > 0);
    }

    #[test]
    fn invariants_hold_between_rounds()
    {
        let graph_opt = BarabasiOptions{
            graph_seed: DEFAULT_GRAPH_SEED,
            system_size: NonZeroUsize::new(100).unwrap(),
            m: 2,
            source_n: 5
        };
        let model: BarabasiModel = graph_opt.into();
        let graph = model.contact_graph();
        let patient_zero = top_spreaders(&graph, 1).unwrap()[0];

        let opt = OutbreakOptions{
            infection_prob: InfectionProbability::new(0.3, 0.005, 0.8).unwrap(),
            incubation_min: 1,
            incubation_max: 3,
            recovery_time: 2,
            time_steps: 40,
            sir_seed: 271828
        };
        let mut outbreak = Outbreak::new(graph, patient_zero, opt).unwrap();

        let n = outbreak.states.len();
        let mut ever_infected = vec![false; n];
        ever_infected[patient_zero] = true;
        let mut prev_recovered = 0;

        while outbreak.stage() != OutbreakStage::Finished{
            outbreak.propagate_one_time_step();

            for &index in outbreak.infected_list.iter(){
                assert!(outbreak.states[index].inc_check());
                ever_infected[index] = true;
            }
            // no duplicates on the infected list either
            assert_eq!(
                outbreak.infected_list.len(),
                outbreak.states.iter().filter(|state| state.inc_check()).count()
            );

            // recovered only ever grows, and nobody recovers who was
            // never infected
            let recovered = outbreak.recovered_count();
            assert!(recovered >= prev_recovered);
            prev_recovered = recovered;
            for (index, state) in outbreak.states.iter().enumerate(){
                if state.rec_check(){
                    assert!(ever_infected[index]);
                }
            }

            // never both timers at once
            for index in outbreak.incubation_timers.keys(){
                assert!(!outbreak.recovery_timers.contains_key(index));
            }

            assert_eq!(
                outbreak.sus_count() + outbreak.infected_count() + recovered,
                n
            );
        }
    }

    #[test]
    fn setup_validation()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 1,
            recovery_time: 1,
            time_steps: 4,
            sir_seed: DEFAULT_SIR_SEED
        };

        assert_eq!(
            Outbreak::new(ContactGraph::new(0), 0, opt).err(),
            Some(SimError::SeedUnavailable)
        );
        assert!(matches!(
            Outbreak::new(path_graph(3), 7, opt).err(),
            Some(SimError::InvalidArgument(_))
        ));

        let mut inverted = opt;
        inverted.incubation_min = 5;
        inverted.incubation_max = 2;
        assert!(matches!(
            Outbreak::new(path_graph(3), 0, inverted).err(),
            Some(SimError::InvalidArgument(_))
        ));

        let mut no_incubation = opt;
        no_incubation.incubation_min = 0;
        assert!(matches!(
            Outbreak::new(path_graph(3), 0, no_incubation).err(),
            Some(SimError::InvalidArgument(_))
        ));

        let mut no_recovery = opt;
        no_recovery.recovery_time = 0;
        assert!(matches!(
            Outbreak::new(path_graph(3), 0, no_recovery).err(),
            Some(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cancellation_between_rounds()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 1,
            recovery_time: 1,
            time_steps: 10,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(5), 2, opt).unwrap();

        let stop = AtomicBool::new(false);
        assert!(!outbreak.propagate_while(&stop));
        assert_ne!(outbreak.stage(), OutbreakStage::Finished);
        assert!(outbreak.curve().is_none());

        let keep_running = AtomicBool::new(true);
        assert!(outbreak.propagate_while(&keep_running));
        assert_eq!(outbreak.stage(), OutbreakStage::Finished);
        assert_eq!(outbreak.curve().unwrap().rounds(), 10);
    }

    #[test]
    fn reset_allows_a_fresh_sample()
    {
        let opt = OutbreakOptions{
            infection_prob: certain_infection(),
            incubation_min: 1,
            incubation_max: 1,
            recovery_time: 1,
            time_steps: 4,
            sir_seed: DEFAULT_SIR_SEED
        };
        let mut outbreak = Outbreak::new(path_graph(5), 2, opt).unwrap();
        outbreak.propagate_until_completion();
        assert_eq!(outbreak.calculate_ever_infected(), 5);

        outbreak.reset();
        assert_eq!(outbreak.stage(), OutbreakStage::Ready);
        assert_eq!(outbreak.time(), 0);
        assert_eq!(outbreak.sus_count(), 4);
        assert_eq!(outbreak.infected_count(), 1);
        assert_eq!(outbreak.patient_zero(), 2);

        outbreak.propagate_until_completion();
        assert_eq!(outbreak.curve().unwrap().series(), &[2, 2, 0, 0]);
    }
}
