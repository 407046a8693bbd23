use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kundali_chart::{BirthChart, BirthInput, ChartConfig, generate_chart_with};
use kundali_time::julian_day;
use kundali_vedic_base::{
    AyanamshaSystem, NakshatraData, ayanamsha_deg, check_nakshatra_table, deg_to_dms,
    karana_from_elongation, nakshatra_by_name, nakshatra_by_number, nakshatra_from_longitude,
    rashi_from_longitude, rashi_lord, tithi_from_longitudes, yoga_from_sum,
};
use log::debug;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal birth-chart calculator")]
struct Cli {
    /// Log pipeline stages (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Offset of the given time from UTC in hours; omit for UT
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<f64>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Ayanamsha system name (overrides config)
        #[arg(long)]
        ayanamsha: Option<String>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Nakshatra from sidereal longitude, or lookup by number/name
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Nakshatra number (1-27)
        #[arg(long, conflicts_with_all = ["lon", "name"])]
        number: Option<u8>,
        /// Nakshatra name
        #[arg(long, conflicts_with = "lon")]
        name: Option<String>,
    },
    /// Tithi, karana and yoga from sidereal Moon and Sun longitudes
    Tithi {
        /// Moon longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Sun longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Julian Day for a UT date and time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM or HH:MM:SS)
        #[arg(long, default_value = "00:00:00")]
        time: String,
    },
    /// Ayanamsha for a year
    Ayanamsa {
        /// Year, may be fractional
        year: f64,
        /// System name (default Lahiri); "all" lists every system
        #[arg(long, default_value = "lahiri")]
        system: String,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("invalid date '{s}', expected YYYY-MM-DD"));
    }
    let year = parts[0].parse().map_err(|_| format!("invalid year in '{s}'"))?;
    let month = parts[1].parse().map_err(|_| format!("invalid month in '{s}'"))?;
    let day = parts[2].parse().map_err(|_| format!("invalid day in '{s}'"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("invalid time '{s}', expected HH:MM[:SS]"));
    }
    let hour = parts[0].parse().map_err(|_| format!("invalid hour in '{s}'"))?;
    let minute = parts[1].parse().map_err(|_| format!("invalid minute in '{s}'"))?;
    let second = match parts.get(2) {
        Some(p) => p.parse().map_err(|_| format!("invalid second in '{s}'"))?,
        None => 0,
    };
    Ok((hour, minute, second))
}

fn parse_system(name: &str) -> AyanamshaSystem {
    AyanamshaSystem::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid ayanamsha system: {name}");
        let valid: Vec<&str> = AyanamshaSystem::all().iter().map(|s| s.name()).collect();
        eprintln!("Valid: {}", valid.join(", "));
        std::process::exit(1);
    })
}

/// Print an error and its source chain, then exit.
fn fail(err: &dyn Error) -> ! {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn print_nakshatra_data(data: &NakshatraData) {
    println!(
        "{} (#{}) - lord {}, deity {}, {:?} gana, {:?}",
        data.nakshatra.name(),
        data.nakshatra.number(),
        data.lord,
        data.deity,
        data.gana,
        data.nature
    );
    println!(
        "  span: {:.4} .. {:.4} deg",
        data.start_deg(),
        data.end_deg()
    );
    println!("  favorable: {}", data.favorable_activities().join(", "));
    println!("  unfavorable: {}", data.unfavorable_activities().join(", "));
}

fn print_chart(chart: &BirthChart) {
    let input = chart.input();
    println!(
        "Birth: {:04}-{:02}-{:02} {:02}:{:02}:{:02}{} at {:.4}, {:.4}",
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
        input
            .utc_offset_hours
            .map(|h| format!(" (UTC{h:+})"))
            .unwrap_or_default(),
        input.latitude_deg,
        input.longitude_deg
    );
    println!("JD (UT):     {:.6}", chart.julian_day());
    println!(
        "Ayanamsha:   {:.6} deg ({})",
        chart.ayanamsha_deg(),
        chart.config().ayanamsha.name()
    );
    println!("GMST / LST:  {:.4} / {:.4} deg", chart.gmst_deg(), chart.lst_deg());

    let asc = chart.ascendant();
    println!(
        "Lagna:       {:.4} deg - {} {}",
        asc.longitude_deg,
        asc.rashi.name(),
        deg_to_dms(asc.degree_in_sign)
    );
    let mc = rashi_from_longitude(chart.midheaven_deg());
    println!(
        "MC:          {:.4} deg - {} {}",
        chart.midheaven_deg(),
        mc.rashi.name(),
        mc.dms
    );
    println!();

    println!(
        "{:<8} {:>10} {:<10} {:>14} {:>5} {:<18} {:>2}",
        "Graha", "Longitude", "Rashi", "In rashi", "House", "Nakshatra", "R"
    );
    for p in chart.planets().values() {
        println!(
            "{:<8} {:>10.4} {:<10} {:>14} {:>5} {:<18} {:>2}",
            p.graha.name(),
            p.longitude_deg,
            p.rashi.name(),
            p.dms.to_string(),
            p.house,
            format!("{} {}", p.nakshatra.name, p.nakshatra.pada),
            if p.retrograde { "R" } else { "" }
        );
    }
    println!();

    let cusps = chart.house_cusps().as_array();
    for (i, cusp) in cusps.iter().enumerate() {
        let r = rashi_from_longitude(*cusp);
        println!(
            "House {:>2}: {:>6.1} deg {:<10} lord {}",
            i + 1,
            cusp,
            r.rashi.name(),
            rashi_lord(r.rashi)
        );
    }
    println!();

    let nak = chart.moon_nakshatra();
    let tithi = chart.tithi();
    println!(
        "Moon nakshatra: {} (#{}) pada {} - lord {}",
        nak.name, nak.number, nak.pada, nak.lord
    );
    println!(
        "Tithi:          {} {} (#{}, {:.1}% elapsed)",
        tithi.paksha.name(),
        tithi.name(),
        tithi.number,
        tithi.progress * 100.0
    );
    println!("Karana:         {}", chart.karana().karana.name());
    println!("Yoga:           {}", chart.yoga().yoga.name());
    println!("Vaar:           {}", chart.vaar().name());
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = check_nakshatra_table() {
        eprintln!("Reference table check failed: {e}");
        std::process::exit(2);
    }
    debug!("nakshatra table verified");

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
            utc_offset,
            config,
            ayanamsha,
            json,
        } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let (hour, minute, second) = parse_time(&time).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });

            let mut chart_config = match config {
                Some(path) => ChartConfig::load(&path).unwrap_or_else(|e| fail(&e)),
                None => ChartConfig::default(),
            };
            if let Some(name) = ayanamsha {
                chart_config = chart_config.with_ayanamsha(parse_system(&name));
            }

            let mut input = BirthInput::new(year, month, day, hour, minute, second, lat, lon);
            if let Some(hours) = utc_offset {
                input = input.with_utc_offset(hours);
            }

            let chart = generate_chart_with(&input, &chart_config).unwrap_or_else(|e| {
                eprintln!("Chart failed at {} stage", e.stage());
                fail(&e)
            });

            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fail(&e),
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Nakshatra { lon, number, name } => {
            if let Some(n) = number {
                match nakshatra_by_number(n) {
                    Ok(data) => print_nakshatra_data(data),
                    Err(e) => fail(&e),
                }
            } else if let Some(name) = name {
                match nakshatra_by_name(&name) {
                    Ok(data) => print_nakshatra_data(data),
                    Err(e) => fail(&e),
                }
            } else if let Some(lon) = lon {
                let info = nakshatra_from_longitude(lon);
                println!(
                    "{} (#{}) - Pada {} - lord {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                    info.name,
                    info.number,
                    info.pada,
                    info.lord,
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                );
            } else {
                eprintln!("Give a longitude, --number or --name");
                std::process::exit(1);
            }
        }

        Commands::Tithi { moon, sun } => {
            let tithi = tithi_from_longitudes(moon, sun);
            let karana = karana_from_elongation(moon - sun);
            let yoga = yoga_from_sum(moon + sun);
            println!(
                "Tithi {} - {} {} ({} of paksha, {:.1}% elapsed)",
                tithi.number,
                tithi.paksha.name(),
                tithi.name(),
                tithi.tithi_in_paksha,
                tithi.progress * 100.0
            );
            println!("Karana {} - {}", karana.karana_index + 1, karana.karana.name());
            println!("Yoga {} - {}", yoga.yoga_index + 1, yoga.yoga.name());
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi), lord {}",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi,
                rashi_lord(info.rashi)
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }

        Commands::Jd { date, time } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let (hour, minute, second) = parse_time(&time).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            match julian_day(year, month, day, hour, minute, second) {
                Ok(jd) => println!("{jd:.6}"),
                Err(e) => fail(&e),
            }
        }

        Commands::Ayanamsa { year, system } => {
            if system.eq_ignore_ascii_case("all") {
                for &s in AyanamshaSystem::all() {
                    println!("{:<16} {:.6} deg", s.name(), ayanamsha_deg(s, year));
                }
            } else {
                let s = parse_system(&system);
                println!("{:.6} deg", ayanamsha_deg(s, year));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn date_parsing() {
        assert_eq!(parse_date("1990-05-15"), Ok((1990, 5, 15)));
        assert!(parse_date("1990/05/15").is_err());
        assert!(parse_date("1990-xx-15").is_err());
    }

    #[test]
    fn time_parsing() {
        assert_eq!(parse_time("14:30"), Ok((14, 30, 0)));
        assert_eq!(parse_time("14:30:05"), Ok((14, 30, 5)));
        assert!(parse_time("14").is_err());
        assert!(parse_time("14:30:05:01").is_err());
    }

    #[test]
    fn chart_subcommand_parses() {
        let cli = Cli::try_parse_from([
            "kundali",
            "chart",
            "--date",
            "1990-05-15",
            "--time",
            "14:30",
            "--lat",
            "28.6139",
            "--lon",
            "-77.2090",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { lon, json, .. } => {
                assert_eq!(lon, -77.2090);
                assert!(json);
            }
            _ => panic!("expected chart subcommand"),
        }
    }
}
