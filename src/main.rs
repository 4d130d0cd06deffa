// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
mod ideal_gas;

use anyhow::Result;
use log::debug;
use structopt::StructOpt;

/// Work the ideal gas law through scalar, vector, and matrix quantities
#[derive(Debug, StructOpt)]
#[structopt(name = "ideal-gas")]
struct Opt {
    /// Unit to show the single-state pressure in
    #[structopt(long, default_value = "MPa")]
    pressure_unit: String,

    /// Unit to show the pressure series in
    #[structopt(long, default_value = "Pa")]
    series_unit: String,

    /// Unit to show pressure-volume products in
    #[structopt(long, default_value = "J")]
    energy_unit: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    debug!("{:?}", opt);

    let p = ideal_gas::single_state()?;
    println!("p = {}", p.format(Some(&opt.pressure_unit))?);

    let ps = ideal_gas::state_series()?;
    println!("p = {}", ps.format(Some(&opt.series_unit))?);

    let work = ideal_gas::pressure_volume_work()?;
    println!("p V = {}", work.format(Some(&opt.energy_unit))?);

    Ok(())
}
