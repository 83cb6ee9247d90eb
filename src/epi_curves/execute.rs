use {
    super::parser::*,
    serde_json::Value,
    std::{num::*},
    rand_pcg::Pcg64,
    net_ensembles::rand::SeedableRng,
    rand::Rng,
    crate::*,
    crate::misc_types::*,
    crate::epi_model::*,
};

pub fn execute_curves(
    param: EpiCurvesParam,
    json: Value,
    num_threads: Option<NonZeroUsize>
)
{
    match param.graph_type{
        GraphType::Barabasi(_,_) => execute_ba(param, json, num_threads),
        _ => unimplemented!()
    }
}

pub fn execute_ba(param: EpiCurvesParam, json: Value, num_threads: Option<NonZeroUsize>){
    assert!(
        param.spreader_min >= 1 && param.spreader_min <= param.spreader_max,
        "invalid spreader range {}..={}",
        param.spreader_min,
        param.spreader_max
    );

    let opt = BarabasiOptions::from_curves_param(&param);
    let model: BarabasiModel = opt.into();
    let graph = model.contact_graph();

    let outbreak_opt = OutbreakOptions::from_curves_param(&param)
        .expect("invalid outbreak options");

    let j = num_threads.unwrap_or(ONE);
    // limit number of threads to j
    rayon::ThreadPoolBuilder::new().num_threads(j.get()).build_global().unwrap();

    // one master stream drives everything: the spreader counts and the
    // per-sample engine streams, so the whole batch is reproducible
    let mut master_rng = Pcg64::seed_from_u64(param.sir_seed);

    let name = param.quick_name();
    let mut writer = CurveWriter::new(&name);
    writer.write_header(&[json]).unwrap();

    let bar = indication_bar(param.samples as u64);
    for _ in 0..param.samples{
        let k = master_rng.gen_range(param.spreader_min..=param.spreader_max);
        let spreaders = top_spreaders(&graph, k)
            .expect("unable to pick super spreaders");
        // only the strongest spreader seeds the outbreak
        let mut outbreak = Outbreak::new(graph.clone(), spreaders[0], outbreak_opt)
            .expect("unable to set up outbreak");
        outbreak.reseed_sir_rng(&mut master_rng);
        outbreak.propagate_until_completion();
        writer.write_curve(outbreak.curve().unwrap()).unwrap();
        bar.inc(1);
    }
    bar.finish_with_message("Done");
}
