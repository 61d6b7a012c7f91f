//! Read a membership vector from a (small) csv file, one integer cluster label
//! per record, in the order of the items.


use anyhow::{anyhow};

use std::fs::OpenOptions;
use std::path::{Path};

use csv::ReaderBuilder;


/// read the membership vector stored in filepath, one label in the first field of each record.
/// delim is the field delimiter, only relevant if records carry trailing fields (they are ignored)
pub fn membership_from_csv(filepath : &Path, delim : u8) -> anyhow::Result<Vec<i64>> {
    //
    let fileres = OpenOptions::new().read(true).open(&filepath);
    if fileres.is_err() {
        log::error!("membership_from_csv : could not open file {:?}", filepath.as_os_str());
        return Err(anyhow!("membership_from_csv could not open file {:?}", filepath.as_os_str()));
    }
    let file = fileres.unwrap();
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).delimiter(delim).from_reader(file);
    //
    let mut membership = Vec::<i64>::new();
    let mut nb_record = 0;
    for result in rdr.records() {
        let record = result?;
        nb_record += 1;
        let field = match record.get(0) {
            Some(field) => { field.trim() },
            _           => { return Err(anyhow!("empty record at line {}", nb_record)); },
        };
        let label = match field.parse::<i64>() {
            Ok(label) => { label },
            _         => { return Err(anyhow!("could not parse label {:?} at line {}", field, nb_record)); },
        };
        membership.push(label);
    }
    log::info!("membership_from_csv read {} labels from {:?}", nb_record, filepath.as_os_str());
    Ok(membership)
} // end of membership_from_csv


//========================================================================================


// end of mod tests
