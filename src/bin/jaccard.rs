//! an executable computing the jaccard similarity between two clusterings
//! example usage:
//! jaccard --csv1 "membership1.csv" --csv2 "membership2.csv"
//! jaccard --csv1 "membership1.csv" --csv2 "membership2.csv" --delim ";" --parallel
//!
//! each csv file carries one integer cluster label per record, record i giving the
//! label of item i. The two files must describe the same number of items.
//!




use clap::{Arg, Command};

use cpu_time::ProcessTime;
use std::time::{SystemTime};

use clustercmp::prelude::*;


pub fn main() {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    log::info!("logger initialized");
    //
    let matches = Command::new("jaccard")
        .arg_required_else_help(true)
        .arg(Arg::new("csvfile1")
            .long("csv1")
            .takes_value(true)
            .required(true)
            .help("csv file of the first membership vector"))
        .arg(Arg::new("csvfile2")
            .long("csv2")
            .takes_value(true)
            .required(true)
            .help("csv file of the second membership vector"))
        .arg(Arg::new("delim")
            .long("delim")
            .takes_value(true)
            .required(false)
            .help("field delimiter in the csv files, default is ','"))
        .arg(Arg::new("parallel")
            .long("parallel")
            .takes_value(false)
            .help("use the threaded pair enumeration instead of the histogram derivation"))
    .get_matches();

    // decode args

    let fname1 = matches.value_of("csvfile1").unwrap().to_string();
    let fname2 = matches.value_of("csvfile2").unwrap().to_string();
    //
    let delim = match matches.value_of("delim") {
        Some(str) => {
            if str.as_bytes().len() != 1 {
                log::error!("delimiter must be a single byte, got {:?}", str);
                std::process::exit(1);
            }
            str.as_bytes()[0]
        },
        _         => { b',' },
    }; // end match
    let parallel = matches.is_present("parallel");
    //
    log::info!("loading membership files {:?} and {:?}", fname1, fname2);
    let membership1 = match membership_from_csv(std::path::Path::new(&fname1), delim) {
        Ok(membership) => { membership },
        Err(err)       => {
            log::error!("could not read {:?} : {:?}", fname1, err);
            std::process::exit(1);
        },
    };
    let membership2 = match membership_from_csv(std::path::Path::new(&fname2), delim) {
        Ok(membership) => { membership },
        Err(err)       => {
            log::error!("could not read {:?} : {:?}", fname2, err);
            std::process::exit(1);
        },
    };
    //
    // we have our two membership vectors
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    let res = if parallel {
        jaccard_similarity_parallel(&membership1, &membership2)
    }
    else {
        jaccard_similarity(&membership1, &membership2)
    };
    let cpu_time: std::time::Duration = cpu_start.elapsed();
    log::info!(" jaccard similarity sys time(ms) {:?} cpu time(ms) {:?}", sys_start.elapsed().unwrap().as_millis(), cpu_time.as_millis());
    //
    match res {
        Ok(similarity) => {
            println!("jaccard similarity : {:.6e}", similarity);
        },
        Err(ClusterCmpError::LengthMismatch{nb_a, nb_b}) => {
            log::error!("the two files describe different numbers of items : {} and {}", nb_a, nb_b);
            std::process::exit(1);
        },
        Err(ClusterCmpError::UndefinedSimilarity) => {
            log::error!("similarity undefined : no item pair co-clustered in either clustering");
            std::process::exit(1);
        },
    }
    //
}  // end of main
