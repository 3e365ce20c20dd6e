use super::{AnyResult, Logger};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use two_link::{Joint, Link, PlanarArm};

#[derive(clap::Args)]
pub(super) struct ArmArgs {
    /// Load the arm from a RON file instead of the options below
    #[clap(long)]
    arm: Option<PathBuf>,
    /// Length of the first link
    #[clap(long, default_value_t = 5.)]
    l1: f64,
    /// Length of the second link
    #[clap(long, default_value_t = 3.)]
    l2: f64,
    /// Base joint angle in degrees
    #[clap(long, default_value_t = 45., allow_negative_numbers = true)]
    t1: f64,
    /// Elbow joint angle in degrees
    #[clap(long, default_value_t = 30., allow_negative_numbers = true)]
    t2: f64,
    /// Lower limit of the base joint
    #[clap(long, default_value_t = Joint::MIN_ANGLE, allow_negative_numbers = true)]
    min1: f64,
    /// Upper limit of the base joint
    #[clap(long, default_value_t = Joint::MAX_ANGLE, allow_negative_numbers = true)]
    max1: f64,
    /// Lower limit of the elbow joint
    #[clap(long, default_value_t = Joint::MIN_ANGLE, allow_negative_numbers = true)]
    min2: f64,
    /// Upper limit of the elbow joint
    #[clap(long, default_value_t = Joint::MAX_ANGLE, allow_negative_numbers = true)]
    max2: f64,
}

impl ArmArgs {
    pub(super) fn load(&self) -> AnyResult<PlanarArm> {
        if let Some(path) = &self.arm {
            return parse_arm(&std::fs::read_to_string(path)?);
        }
        Ok(PlanarArm::new(
            Link::new(self.l1, "Link 1")?,
            Joint::with_limits(self.t1, self.min1, self.max1)?,
            Link::new(self.l2, "Link 2")?,
            Joint::with_limits(self.t2, self.min2, self.max2)?,
        ))
    }
}

fn parse_arm(s: &str) -> AnyResult<PlanarArm> {
    Ok(ron::from_str(s)?)
}

#[derive(serde::Serialize)]
struct IkReport {
    target: [f64; 2],
    up: Option<[f64; 2]>,
    down: Option<[f64; 2]>,
}

#[derive(serde::Serialize)]
struct JacobianReport {
    jacobian: [[f64; 2]; 2],
    det: f64,
    singular: bool,
}

pub(super) fn fk<W: Write>(logger: &mut Logger<W>, arm: &PlanarArm) -> AnyResult {
    logger.top_title("forward kinematics")?;
    logger.log(arm.forward_kinematics())?;
    Ok(())
}

pub(super) fn ik<W: Write>(
    logger: &mut Logger<W>,
    arm: &PlanarArm,
    target @ [x, y]: [f64; 2],
    within_limits: bool,
) -> AnyResult {
    logger.top_title("inverse kinematics")?;
    let [up, down] = match arm.inverse_kinematics(x, y) {
        Ok(solutions) => solutions,
        Err(e) if e.is_unreachable() => {
            logger.line(e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let allowed = |angles @ [t1, t2]: [f64; 2]| {
        let ok = !within_limits || (arm.joint1().contains(t1) && arm.joint2().contains(t2));
        ok.then_some(angles)
    };
    logger.log(IkReport {
        target,
        up: allowed(up),
        down: allowed(down),
    })?;
    Ok(())
}

pub(super) fn jacobian<W: Write>(logger: &mut Logger<W>, arm: &PlanarArm) -> AnyResult {
    logger.top_title("jacobian")?;
    logger.log(JacobianReport {
        jacobian: arm.jacobian(),
        det: arm.jacobian_det(),
        singular: arm.is_singular(1e-9),
    })?;
    Ok(())
}

pub(super) fn workspace<W: Write>(logger: &mut Logger<W>, arm: &PlanarArm) -> AnyResult {
    logger.top_title("workspace")?;
    logger.log(arm.workspace_summary())?;
    logger.line(format_args!("area={:.04}", arm.workspace().area()))?;
    Ok(())
}

pub(super) fn plot<W: Write>(
    logger: &mut Logger<W>,
    arm: &PlanarArm,
    out: &Path,
    targets: &[[f64; 2]],
) -> AnyResult {
    use two_link::plot::{plot_arm, SVGBackend};
    plot_arm(SVGBackend::new(out, (800, 800)), "Two-link Arm", arm, targets)?;
    logger.top_title("plot")?;
    logger.line(format_args!("saved={}", out.display()))?;
    Ok(())
}
