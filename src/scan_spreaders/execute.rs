use std::{ io::Write};

use {
    super::parser::*,
    serde_json::Value,
    std::{num::*, fs::File, io::BufWriter},
    rayon::prelude::*,
    rand_pcg::Pcg64,
    net_ensembles::rand::SeedableRng,
    crate::*,
    crate::misc_types::*,
    crate::epi_model::*,
    crate::stats_methods::*,
};

pub fn execute_scan(
    param: ScanSpreadersParam,
    json: Value,
    num_threads: Option<NonZeroUsize>
)
{
    match param.graph_type{
        GraphType::Barabasi(_,_) => scan_ba(param, json, num_threads),
        _ => unimplemented!()
    }
}

fn scan_ba(param: ScanSpreadersParam, json: Value, num_threads: Option<NonZeroUsize>){
    let opt = BarabasiOptions::from_spreader_scan_param(&param);
    let model: BarabasiModel = opt.into();
    let graph = model.contact_graph();

    let outbreak_opt = OutbreakOptions::from_spreader_scan_param(&param)
        .expect("invalid outbreak options");

    let j = num_threads.unwrap_or(ONE);
    // limit number of threads to j
    rayon::ThreadPoolBuilder::new().num_threads(j.get()).build_global().unwrap();
    let mut master_rng = Pcg64::seed_from_u64(param.sir_seed);

    let samples_per_thread = param.samples_per_point / j.get();
    let points = param.spreader_range.len();
    let bar = indication_bar((points * j.get() * samples_per_thread) as u64);

    let mut results: Vec<(usize, MyVariance)> = Vec::with_capacity(points);
    for k in param.spreader_range.iter(){
        let spreaders = top_spreaders(&graph, k)
            .expect("unable to pick super spreaders");
        let patient_zero = spreaders[0];

        // reseeded in a fixed order, so the result is independent of the
        // thread schedule
        let mut rngs: Vec<_> = (0..j.get())
            .map(|_| Pcg64::from_rng(&mut master_rng).unwrap())
            .collect();

        let per_thread: Vec<Vec<u32>> = rngs.par_iter_mut()
            .map(
                |rng|
                {
                    let mut outbreak = Outbreak::new(graph.clone(), patient_zero, outbreak_opt)
                        .expect("unable to set up outbreak");
                    let mut ever_infected = Vec::with_capacity(samples_per_thread);
                    for _ in 0..samples_per_thread
                    {
                        outbreak.reseed_sir_rng(rng);
                        outbreak.reset();
                        outbreak.propagate_until_completion();
                        ever_infected.push(outbreak.calculate_ever_infected() as u32);
                        bar.inc(1);
                    }
                    ever_infected
                }
            ).collect();

        let merged: Vec<u32> = per_thread.concat();
        let frac = if param.fraction{
            Some(param.system_size.get() as f64)
        }else{
            None
        };
        results.push((k, MyVariance::from_slice(&merged, frac)));
    }
    bar.finish_with_message("Done");

    write_scan(&results, &param, &json);
}

fn write_scan(results: &[(usize, MyVariance)], param: &ScanSpreadersParam, json: &Value){
    //one gnuplot-ready row per scanned spreader count
    let name = param.quick_name();
    println!("creating: {name}");
    let file = File::create(name).expect("unable to create file");
    let mut buf = BufWriter::new(file);
    write!(buf, "#").unwrap();
    serde_json::to_writer(&mut buf, json)
        .unwrap();
    writeln!(buf).unwrap();
    writeln!(buf, "#spreaders mean_ever_infected variance").unwrap();
    for (k, var) in results{
        writeln!(buf, "{} {} {}", k, var.mean(), var.variance_of_mean()).unwrap();
    }
}
