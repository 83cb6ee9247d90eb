use std::mem::ManuallyDrop;
use std::ops::DerefMut;
use std::process::Command;

use{
    std::{
        fs::File,
        io::{Write, BufWriter}
    },
    serde_json::Value,
    super::*
};

pub type CurveFileWriter = BufWriter<File>;

/// Reporting boundary: takes finished epidemic curves and writes them as
/// gnuplot-ready rows, one sample per line. The simulation itself never
/// touches a file.
pub struct CurveWriter
{
    pub writer: ManuallyDrop<CurveFileWriter>,
    pub path: String
}

impl Drop for CurveWriter
{
    fn drop(&mut self)
    {
        // first drop the writer so everything is flushed!
        unsafe{
            ManuallyDrop::drop(&mut self.writer);
        };

        // next: Zipping time!
        let out = Command::new("gzip")
            .arg(&self.path)
            .output();
        match out {
            Ok(_) => println!("Success! Zipped {}", self.path),
            Err(e) => println!("Error! Failed to zip {} due to {:?}", self.path, e)
        }
    }
}

impl CurveWriter
{
    pub fn new(name: &str) -> Self
    {
        let path = format!("{name}.curves");
        let writer = BufWriter::new(
            File::create(&path)
                .expect("unable to create curve file")
        );

        Self{
            writer: ManuallyDrop::new(writer),
            path
        }
    }

    pub fn write_header(&mut self, jsons: &[Value]) -> std::io::Result<()>
    {
        writeln!(self.writer, "#NewInfections[0] NewInfections[1] …")?;
        write_jsons(jsons, self.writer.deref_mut())
    }

    pub fn write_curve(&mut self, curve: &EpidemicCurve) -> std::io::Result<()>
    {
        for count in curve.series()
        {
            write!(self.writer, "{count} ")?;
        }
        writeln!(self.writer)
    }
}

pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}
