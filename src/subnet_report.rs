// Copyright (c) 2026 Mikko Tanner. All rights reserved.

use std::{env, process::ExitCode};
use subnetcalc::{Options, SubnetError, SubnetReport};

const USAGE: &str = "usage: subnet-report <ip> <prefix> | <ip>/<prefix>";

fn report(args: &[String]) -> Result<SubnetReport, String> {
    let opts: Options = Options::default();
    let res: Result<SubnetReport, SubnetError> = match args {
        [cidr] => SubnetReport::from_cidr(cidr, &opts),
        [ip, prefix] => {
            let prefix: u8 = prefix
                .trim()
                .parse()
                .map_err(|_| format!("invalid prefix: '{prefix}'"))?;
            SubnetReport::new(ip, prefix, &opts)
        }
        _ => return Err(USAGE.to_string()),
    };
    res.map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match report(&args) {
        Ok(r) => {
            println!("{r}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
