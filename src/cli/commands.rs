use log::debug;

use super::args::Command;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::LocationResult;
use crate::models::hex::Hex;
use crate::models::location::{Location, LocationBuilder};
use crate::services::catalog::SectorCatalog;
use crate::ui::presenters::{HexPresenter, LocationPresenter};

/// Run one subcommand against a loaded catalog.
pub fn run(
    command: &Command,
    catalog: &SectorCatalog,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> LocationResult<()> {
    match command {
        Command::Hex { token } => describe_hex(token, output),
        Command::Locate { sector, hex, strict } => locate(catalog, sector, hex, *strict, output),
        Command::Distance {
            from_sector,
            from_hex,
            to_sector,
            to_hex,
        } => {
            let from =
                Location::from_text(Some(from_sector.as_str()), Some(from_hex.as_str()), catalog);
            let to = Location::from_text(Some(to_sector.as_str()), Some(to_hex.as_str()), catalog);
            LocationPresenter::show_distance(&from, &to, output);
            Ok(())
        }
        Command::Sort => sort(catalog, input, output),
    }
}

fn describe_hex(token: &str, output: &mut dyn OutputWriter) -> LocationResult<()> {
    let hex: Hex = token.parse()?;
    HexPresenter::show_hex(&hex, output);
    Ok(())
}

fn locate(
    catalog: &SectorCatalog,
    sector: &str,
    hex: &str,
    strict: bool,
    output: &mut dyn OutputWriter,
) -> LocationResult<()> {
    let builder = LocationBuilder::new().sector_name(sector).hex_name(hex);
    let location = if strict {
        builder.try_build(catalog)?
    } else {
        builder.build(catalog)
    };
    let name = location.sector().and_then(|s| catalog.name_at(s));
    LocationPresenter::show_location(&location, name, output);
    Ok(())
}

/// Split "Spinward Marches 1910" into its sector name and hex token.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (sector, hex) = line.trim().rsplit_once(char::is_whitespace)?;
    Some((sector.trim_end(), hex))
}

fn sort(
    catalog: &SectorCatalog,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> LocationResult<()> {
    let mut locations: Vec<Location> = input
        .read_lines()?
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match split_line(line) {
            Some((sector, hex)) => Location::from_text(Some(sector), Some(hex), catalog),
            None => {
                debug!("skipping unreadable line '{}'", line);
                Location::EMPTY
            }
        })
        .collect();
    locations.sort();
    LocationPresenter::show_list(&locations, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::errors::LocationError;
    use crate::services::catalog::SectorEntry;

    fn catalog() -> SectorCatalog {
        SectorCatalog::from_entries([
            SectorEntry::new("Spinward Marches", -4, -1),
            SectorEntry::new("Deneb", -3, -1),
            SectorEntry::new("Core", 0, 0),
        ])
        .unwrap()
    }

    fn run_command(command: Command, lines: Vec<&str>) -> (LocationResult<()>, MockOutput) {
        let mut input = MockInput::new(lines);
        let mut output = MockOutput::new();
        let result = run(&command, &catalog(), &mut input, &mut output);
        (result, output)
    }

    #[test]
    fn hex_command_describes_token() {
        let (result, output) = run_command(Command::Hex { token: "3240".into() }, vec![]);
        assert!(result.is_ok());
        assert!(output.contains("SUBSECTOR P (0810)"));
    }

    #[test]
    fn hex_command_rejects_malformed_token() {
        let (result, _) = run_command(Command::Hex { token: "32x0".into() }, vec![]);
        assert!(matches!(result, Err(LocationError::InvalidHex(_))));
    }

    #[test]
    fn locate_reports_catalog_name() {
        let command = Command::Locate {
            sector: "spinwardmarches".into(),
            hex: "1910".into(),
            strict: false,
        };
        let (result, output) = run_command(command, vec![]);
        assert!(result.is_ok());
        assert!(output.contains("Spinward Marches (-4,-1)"));
        assert!(output.contains("VALID     YES"));
    }

    #[test]
    fn locate_unknown_sector() {
        let lenient = Command::Locate {
            sector: "Nowhere".into(),
            hex: "1910".into(),
            strict: false,
        };
        let (result, output) = run_command(lenient, vec![]);
        assert!(result.is_ok());
        assert_eq!(output.messages, vec!["LOCATION NOT FOUND"]);

        let strict = Command::Locate {
            sector: "Nowhere".into(),
            hex: "1910".into(),
            strict: true,
        };
        let (result, _) = run_command(strict, vec![]);
        assert!(matches!(result, Err(LocationError::UnknownSector(_))));
    }

    #[test]
    fn distance_between_neighbors() {
        let command = Command::Distance {
            from_sector: "Spinward Marches".into(),
            from_hex: "3201".into(),
            to_sector: "Deneb".into(),
            to_hex: "0101".into(),
        };
        let (result, output) = run_command(command, vec![]);
        assert!(result.is_ok());
        assert_eq!(output.messages, vec!["DISTANCE  1 PARSECS"]);
    }

    #[test]
    fn sort_orders_sector_major() {
        let lines = vec![
            "Deneb 0101",
            "Core 0140",
            "Spinward Marches 3240",
            "",
            "Spinward Marches 0101",
            "garbage",
        ];
        let (result, output) = run_command(Command::Sort, lines);
        assert!(result.is_ok());
        assert_eq!(
            output.messages,
            vec!["-", "-4,-1     0101", "-4,-1     3240", "-3,-1     0101", "0,0       0140"]
        );
    }

    #[test]
    fn split_line_keeps_spaces_in_names() {
        assert_eq!(split_line("  Spinward Marches  1910 "), Some(("Spinward Marches", "1910")));
        assert_eq!(split_line("1910"), None);
    }
}
