use{
    std::num::*,
    crate::misc_types::*,

    crate::epi_curves::*,
    crate::scan_spreaders::*,
};

pub struct BarabasiOptions{
    pub graph_seed: u64,
    pub system_size: NonZeroUsize,
    pub m:usize,
    pub source_n:usize,
}

impl BarabasiOptions{
    pub fn from_curves_param(param: &EpiCurvesParam) -> Self
    {
        let (m,source_n) = match param.graph_type {
            GraphType::Barabasi(mm,source_nn) => (mm,source_nn),
            _ => panic!("Invalid graph type")
        };
        Self{
            graph_seed: param.graph_seed,
            system_size: param.system_size,
            m,
            source_n,
        }
    }

    pub fn from_spreader_scan_param(param: &ScanSpreadersParam) -> Self
    {
        let (m,source_n) = match param.graph_type {
            GraphType::Barabasi(mm,source_nn) => (mm,source_nn),
            _ => panic!("Invalid graph type")
        };
        Self{
            graph_seed: param.graph_seed,
            system_size: param.system_size,
            m,
            source_n,
        }
    }
}
