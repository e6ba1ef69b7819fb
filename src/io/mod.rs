mod error;
mod mol2;
mod pdb;

pub use mol2::reader::read as read_mol2_template;

pub use pdb::reader::read as read_pdb_document;
pub use pdb::writer::{
    atom_line, extract_line, write_atom, write_end, write_extract_atom, write_header, write_ter,
};

pub use error::Error;
