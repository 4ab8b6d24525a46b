// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Green, Purple, Red, Yellow};
use clap::Parser;

use usbser_probe::driver::{
    CdcAcmDriver, Ch34xDriver, Cp210xDriver, FtdiDriver, Pl2303Driver, SerialDriver,
};
use usbser_probe::{ProbeTable, TableConfig, UsbDeviceIdentity};

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "USB serial probe table control", long_about = None)]
struct Args {
    /// Extra probe table entries, TOML file.
    #[arg(short = 't', long = "table", value_name = "FILE")]
    table: Option<std::path::PathBuf>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the assembled probe table.
    List,
    /// Find the driver for a hardware identity.
    Find {
        /// Identity in VID:PID hexadecimal form.
        identity: String,
    },
    /// List stock drivers and their device catalogs.
    Drivers,
}

fn style_identity(identity: UsbDeviceIdentity) -> String {
    Purple.paint(format!("[{}]", identity)).to_string()
}

fn print_catalog<D: SerialDriver>() {
    let mut devices: Vec<_> = D::supported_devices().into_iter().collect();
    devices.sort_by_key(|(vendor_id, _)| *vendor_id);

    for (vendor_id, mut product_ids) in devices {
        product_ids.sort_unstable();

        for product_id in product_ids {
            println!(
                "{} {}",
                style_identity(UsbDeviceIdentity::new(vendor_id, product_id)),
                Yellow.bold().paint(D::KIND.to_string())
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(log::LevelFilter::Off);
    log_config.set_thread_level(log::LevelFilter::Off);
    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut table = ProbeTable::stock();

    if let Some(path) = &args.table {
        log::debug!("Load extra table entries from {}", path.display());

        let config = TableConfig::try_from_file(path)?;
        config.apply(&mut table);
    }

    match args.command {
        Command::List => {
            for (identity, driver) in table.entries() {
                println!(
                    "{} {}",
                    style_identity(identity),
                    Yellow.bold().paint(driver.to_string())
                );
            }

            log::debug!("Probe table holds {} identities", table.len());
        }
        Command::Find { identity } => {
            let identity: UsbDeviceIdentity = identity.parse()?;

            match table.find_driver(identity.vendor_id, identity.product_id) {
                Some(driver) => {
                    println!(
                        "{} {}",
                        style_identity(identity),
                        Green.bold().paint(driver.to_string())
                    );
                }
                None => {
                    println!("{} {}", style_identity(identity), Red.paint("no driver"));

                    std::process::exit(1);
                }
            }
        }
        Command::Drivers => {
            print_catalog::<FtdiDriver>();
            print_catalog::<CdcAcmDriver>();
            print_catalog::<Cp210xDriver>();
            print_catalog::<Pl2303Driver>();
            print_catalog::<Ch34xDriver>();
        }
    }

    Ok(())
}
