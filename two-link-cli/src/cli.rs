use self::{arm::ArmArgs, logger::Logger};
use std::{io::Write, path::PathBuf};

mod arm;
mod logger;
mod solve;

type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Positions of the elbow and the end effector
    Fk(ArmArgs),
    /// Joint angles reaching a target
    Ik {
        #[clap(flatten)]
        arm: ArmArgs,
        /// Target x
        #[clap(allow_negative_numbers = true)]
        x: f64,
        /// Target y
        #[clap(allow_negative_numbers = true)]
        y: f64,
        /// Only list the solutions within the joint limits
        #[clap(long)]
        within_limits: bool,
    },
    /// Velocity Jacobian of the end effector
    Jacobian(ArmArgs),
    /// Reachable workspace
    Workspace(ArmArgs),
    /// Denavit-Hartenberg transform (angles in degrees)
    Dh {
        /// Joint angle
        #[clap(allow_negative_numbers = true)]
        theta: f64,
        /// Link offset
        #[clap(allow_negative_numbers = true)]
        d: f64,
        /// Link length
        #[clap(allow_negative_numbers = true)]
        a: f64,
        /// Link twist
        #[clap(allow_negative_numbers = true)]
        alpha: f64,
    },
    /// Solve a 3x3 linear system by Cramer's Rule
    Solve(solve::Solve),
    /// Draw the arm and its workspace to an SVG file
    Plot {
        #[clap(flatten)]
        arm: ArmArgs,
        /// Output SVG path
        out: PathBuf,
        /// Mark a target point `x,y`, can be given many times
        #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
        target: Vec<f64>,
    },
}

impl Entry {
    pub(super) fn main() {
        register_panic_hook();
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        let mut logger = Logger::new(&mut stdout);
        if let Err(e) = entry.cmd.run(&mut logger).and_then(|()| Ok(logger.flush()?)) {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

impl Cmd {
    fn run<W: Write>(self, logger: &mut Logger<W>) -> AnyResult {
        match self {
            Self::Fk(arm) => arm::fk(logger, &arm.load()?),
            Self::Ik { arm, x, y, within_limits } => {
                arm::ik(logger, &arm.load()?, [x, y], within_limits)
            }
            Self::Jacobian(arm) => arm::jacobian(logger, &arm.load()?),
            Self::Workspace(arm) => arm::workspace(logger, &arm.load()?),
            Self::Dh { theta, d, a, alpha } => {
                logger.top_title("dh transform")?;
                for row in two_link::dh::transform(theta, d, a, alpha) {
                    logger.log(row)?;
                    logger.newline()?;
                }
                Ok(())
            }
            Self::Solve(solve) => solve::solve(logger, solve),
            Self::Plot { arm, out, target } => {
                if target.len() % 2 != 0 {
                    return Err("target needs both x and y".into());
                }
                let targets = target
                    .chunks_exact(2)
                    .map(|c| [c[0], c[1]])
                    .collect::<Vec<_>>();
                arm::plot(logger, &arm.load()?, &out, &targets)
            }
        }
    }
}

fn register_panic_hook() {
    // Print panic messages without stack trace
    std::panic::set_hook(Box::new(|info| {
        match info.payload().downcast_ref::<&str>() {
            Some(s) => eprintln!("{s}"),
            None => eprintln!("{info}"),
        }
        std::process::exit(1);
    }));
}
