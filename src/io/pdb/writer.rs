use crate::io::error::Error;
use crate::model::record::Point;
use std::io::Write;

/// Renders one normalized record in the main output layout: serial in a
/// 5-column field, atom name centered in 4, residue name in 3, residue
/// number right-justified in 4, three `8.3` coordinates, and the fixed
/// occupancy/temperature-factor literals.
pub fn atom_line(serial: usize, name: &str, res_name: &str, res_id: usize, pos: &Point) -> String {
    let (x, y, z) = (pos.x, pos.y, pos.z);
    format!(
        "ATOM  {serial:5} {name:^4} {res_name:<3} {res_id:4}    {x:8.3}{y:8.3}{z:8.3}  1.00  0.00"
    )
}

/// Renders one record of the first-unit extraction artifact. The residue is
/// always `MOL` number 1, held in a wider fixed field than the main layout
/// uses, so the artifact's coordinates start one column later.
pub fn extract_line(serial: usize, name: &str, pos: &Point) -> String {
    let (x, y, z) = (pos.x, pos.y, pos.z);
    format!("ATOM  {serial:5} {name:^4} MOL     1    {x:8.3}{y:8.3}{z:8.3}  1.00  0.00")
}

pub fn write_header<W: Write>(writer: &mut W, line: &str) -> Result<(), Error> {
    writeln!(writer, "{line}").map_err(|e| Error::from_io(e, None))
}

pub fn write_atom<W: Write>(
    writer: &mut W,
    serial: usize,
    name: &str,
    res_name: &str,
    res_id: usize,
    pos: &Point,
) -> Result<(), Error> {
    writeln!(writer, "{}", atom_line(serial, name, res_name, res_id, pos))
        .map_err(|e| Error::from_io(e, None))
}

pub fn write_extract_atom<W: Write>(
    writer: &mut W,
    serial: usize,
    name: &str,
    pos: &Point,
) -> Result<(), Error> {
    writeln!(writer, "{}", extract_line(serial, name, pos)).map_err(|e| Error::from_io(e, None))
}

/// Terminator line closing one residue.
pub fn write_ter<W: Write>(writer: &mut W) -> Result<(), Error> {
    writeln!(writer, "TER").map_err(|e| Error::from_io(e, None))
}

/// End-of-file marker following the last record.
pub fn write_end<W: Write>(writer: &mut W) -> Result<(), Error> {
    writeln!(writer, "END").map_err(|e| Error::from_io(e, None))
}
