use crate::io::OutputWriter;
use crate::models::hex::Hex;
use crate::models::location::Location;
use crate::services::astrometrics;

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

fn subsector_label(hex: &Hex) -> String {
    match hex.subsector() {
        Some(letter) => format!("{} ({})", letter, hex.to_subsector_string()),
        None => "-".to_string(),
    }
}

pub struct HexPresenter;

impl HexPresenter {
    pub fn show_hex(hex: &Hex, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<10}{}", "HEX", hex));
        output.writeln(&format!("{:<10}{}", "SUBSECTOR", subsector_label(hex)));
        output.writeln(&format!("{:<10}{}", "VALID", yes_no(hex.is_valid())));
    }
}

pub struct LocationPresenter;

impl LocationPresenter {
    /// Full report for one location. `sector_name` is the catalog's name
    /// for the location's sector, if it has one.
    pub fn show_location(
        location: &Location,
        sector_name: Option<&str>,
        output: &mut dyn OutputWriter,
    ) {
        let (sector, hex) = match *location {
            Location::Empty => {
                output.writeln("LOCATION NOT FOUND");
                return;
            }
            Location::At { sector, hex } => (sector, hex),
        };

        let sector_label = match sector_name {
            Some(name) => format!("{} ({})", name, sector),
            None => format!("({})", sector),
        };
        output.writeln(&format!("{:<10}{}", "SECTOR", sector_label));
        output.writeln(&format!("{:<10}{}", "HEX", location.hex_string()));
        output.writeln(&format!("{:<10}{}", "SUBSECTOR", subsector_label(&hex)));
        if let Some(world) = astrometrics::coordinates_of(location) {
            output.writeln(&format!("{:<10}{}", "WORLD", world));
        }
        output.writeln(&format!("{:<10}{}", "VALID", yes_no(location.is_valid())));
    }

    pub fn show_distance(from: &Location, to: &Location, output: &mut dyn OutputWriter) {
        match astrometrics::distance(from, to) {
            Some(parsecs) => output.writeln(&format!("DISTANCE  {} PARSECS", parsecs)),
            None => output.writeln("LOCATION NOT FOUND"),
        }
    }

    /// One line per location: sector, then hex.
    pub fn show_list(locations: &[Location], output: &mut dyn OutputWriter) {
        for location in locations {
            match location.sector() {
                Some(sector) => {
                    output.writeln(&format!("{:<10}{}", sector.to_string(), location.hex_string()))
                }
                None => output.writeln("-"),
            }
        }
    }
}
