use crate::runtime::error::ArgsError;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    Hold,
    #[default]
    Sweep,
    Wander,
}

impl FromStr for ProfileKind {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hold" => Ok(Self::Hold),
            "sweep" => Ok(Self::Sweep),
            "wander" => Ok(Self::Wander),
            other => Err(ArgsError::UnknownProfile(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub show_help: bool,
    pub initial_rpm: Option<f64>,
    pub seed: Option<u64>,
    pub ticks: u64,
    pub tick_ms: u64,
    pub profile: ProfileKind,
    pub sweep_period_s: f64,
    pub realtime: bool,
    pub print_table: bool,
    pub queries: Vec<f64>,
    pub json_logs: bool,
    pub log_dir: Option<PathBuf>,
    #[cfg(feature = "gui")]
    pub gui: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            initial_rpm: None,
            seed: None,
            ticks: 600,
            tick_ms: 100,
            profile: ProfileKind::default(),
            sweep_period_s: 60.0,
            realtime: false,
            print_table: false,
            queries: Vec::new(),
            json_logs: false,
            log_dir: None,
            #[cfg(feature = "gui")]
            gui: false,
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ArgsError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ArgsError::MissingValue {
            flag: flag.to_string(),
        })
}

fn parse<T: FromStr>(raw: &str, flag: &str) -> Result<T, ArgsError> {
    raw.parse::<T>().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ArgsError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    /// Parse `args`, where `args[0]` is the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ArgsError> {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--rpm" => {
                    cfg.initial_rpm = Some(parse(value(args, i, flag)?, flag)?);
                    i += 1;
                }
                "--seed" => {
                    cfg.seed = Some(parse(value(args, i, flag)?, flag)?);
                    i += 1;
                }
                "--ticks" => {
                    cfg.ticks = parse(value(args, i, flag)?, flag)?;
                    i += 1;
                }
                "--tick-ms" => {
                    cfg.tick_ms = parse(value(args, i, flag)?, flag)?;
                    if cfg.tick_ms == 0 {
                        return Err(ArgsError::InvalidValue {
                            flag: flag.to_string(),
                            value: "0".to_string(),
                        });
                    }
                    i += 1;
                }
                "--profile" => {
                    cfg.profile = value(args, i, flag)?.parse()?;
                    i += 1;
                }
                "--sweep-period" => {
                    let raw = value(args, i, flag)?;
                    cfg.sweep_period_s = parse(raw, flag)?;
                    if !(cfg.sweep_period_s.is_finite() && cfg.sweep_period_s > 0.0) {
                        return Err(ArgsError::InvalidValue {
                            flag: flag.to_string(),
                            value: raw.to_string(),
                        });
                    }
                    i += 1;
                }
                "--realtime" => {
                    cfg.realtime = true;
                }
                "--print-table" => {
                    cfg.print_table = true;
                }
                "--query" => {
                    cfg.queries.push(parse(value(args, i, flag)?, flag)?);
                    i += 1;
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--log-dir" => {
                    cfg.log_dir = Some(PathBuf::from(value(args, i, flag)?));
                    i += 1;
                }
                #[cfg(feature = "gui")]
                "--gui" => {
                    cfg.gui = true;
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                other => return Err(ArgsError::UnknownFlag(other.to_string())),
            }
            i += 1;
        }
        Ok(cfg)
    }

    pub fn print_help() {
        println!(
            r#"boat-fuelflow - simulated boat-engine fuel flow versus RPM

USAGE:
    boat-fuelflow [OPTIONS]

OPTIONS:
    --rpm <RPM>             Initial engine RPM, clamped to 0..=6000 [default: 1500]
    --seed <N>              Seed for table generation and flow noise (random if omitted)
    --ticks <N>             Telemetry ticks to simulate [default: 600]
    --tick-ms <MS>          Simulated time per tick in milliseconds [default: 100]
    --profile <NAME>        Throttle profile: hold|sweep|wander [default: sweep]
    --sweep-period <SECS>   Period of the sweep profile [default: 60]
    --realtime              Pace ticks at wall-clock speed
    --print-table           Print the generated table as JSON
    --query <RPM>           Print the interpolated median flow at RPM (repeatable)
    --json-logs             Output logs in JSON format
    --log-dir <DIR>         Also write JSON logs to a daily rolling file in DIR
    --gui                   Open the chart window (requires 'gui' feature)
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=debug,flow_core=trace)

EXAMPLES:
    # Reproducible headless run
    boat-fuelflow --seed 7 --profile wander --ticks 1200

    # Dump the table and look up two operating points
    boat-fuelflow --print-table --query 2250 --query 4875 --ticks 0
"#
        );
    }
}
