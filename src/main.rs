use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod epi_model;
pub mod misc_types;
pub mod stats_methods;
pub mod json_parsing;
pub mod epi_curves;
pub mod scan_spreaders;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::Curves(o) => o.execute(),
        CmdOption::ScanSpreaders(o) => o.execute()
    }
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()))

}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}


#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Epidemic curves for an incubation model on scale-free contact networks!")]
pub enum CmdOption
{
    Curves(epi_curves::EpiCurves),
    ScanSpreaders(scan_spreaders::ScanSpreaders)
}
