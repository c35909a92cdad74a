use std::io::Write;
use std::path::Path;

use crate::data::aggregate::WindowStats;
use crate::data::channel::Channel;
use crate::data::sample::Sample;
use crate::data::units::UnitSystem;
use crate::error::EngineResult;

/// Write one row per sample: the axis coordinate followed by each channel's value.
pub fn write_series_csv<W: Write>(
    mut w: W,
    samples: &[Sample],
    axis: Channel,
    units: UnitSystem,
    channels: &[Channel],
) -> std::io::Result<()> {
    write!(w, "{}", axis.key())?;
    for ch in channels {
        write!(w, ",{}", ch.key())?;
    }
    writeln!(w)?;
    for dp in samples {
        write!(w, "{:.9}", axis.value(dp, units))?;
        for ch in channels {
            write!(w, ",{}", ch.value(dp, units))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn save_series_csv<P: AsRef<Path>>(
    path: P,
    samples: &[Sample],
    axis: Channel,
    units: UnitSystem,
    channels: &[Channel],
) -> EngineResult<()> {
    let f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_series_csv(f, samples, axis, units, channels)?;
    Ok(())
}

/// Columns: channel,value,delta,min,mean,max
pub fn write_stats_csv<W: Write>(mut w: W, rows: &[(Channel, WindowStats)]) -> std::io::Result<()> {
    writeln!(w, "channel,value,delta,min,mean,max")?;
    for (ch, s) in rows {
        writeln!(
            w,
            "{},{},{},{},{},{}",
            ch.key(),
            s.value_at_end,
            s.delta,
            s.min,
            s.mean,
            s.max
        )?;
    }
    Ok(())
}
