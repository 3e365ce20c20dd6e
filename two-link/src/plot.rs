//! The functions used to plot the arm and its workspace.
use crate::PlanarArm;
pub use plotters::{prelude::*, *};

/// Get font setting.
pub fn font() -> TextStyle<'static> {
    ("Times New Roman", 24).into_font().color(&BLACK)
}

/// Plot the posed arm over its workspace annulus.
///
/// Extra `targets` are marked with crosses.
pub fn plot_arm<B>(backend: B, title: &str, arm: &PlanarArm, targets: &[[f64; 2]]) -> anyhow::Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    const RES: usize = 180;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let [min_reach, max_reach] = arm.workspace_bounds();
    let r = max_reach * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, font())
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (4).percent())
        .margin((8).percent())
        .build_cartesian_2d(-r..r, -r..r)?;
    chart
        .configure_mesh()
        .x_label_style(font())
        .y_label_style(font())
        .draw()?;
    for (label, radius, color) in [("Max reach", max_reach, BLUE), ("Min reach", min_reach, RED)] {
        chart
            .draw_series(LineSeries::new(circle(radius, RES), color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    let pose = arm.forward_kinematics();
    let links = [[0., 0.], pose.elbow, pose.end_effector].map(|[x, y]| (x, y));
    chart
        .draw_series(LineSeries::new(links, BLACK.stroke_width(3)))?
        .label("Arm")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    chart.draw_series(links.map(|c| Circle::new(c, 5, BLACK.filled())))?;
    chart.draw_series(
        targets
            .iter()
            .map(|&[x, y]| Cross::new((x, y), 6, GREEN.stroke_width(2))),
    )?;
    chart
        .configure_series_labels()
        .background_style(WHITE)
        .border_style(BLACK)
        .label_font(font())
        .draw()?;
    Ok(())
}

fn circle(radius: f64, res: usize) -> impl Iterator<Item = (f64, f64)> {
    let step = std::f64::consts::TAU / res as f64;
    (0..=res).map(move |i| {
        let (s, c) = (i as f64 * step).sin_cos();
        (radius * c, radius * s)
    })
}

#[test]
fn plot_svg() {
    use crate::{Joint, Link};
    let arm = PlanarArm::new(
        Link::new(5., "Link 1").unwrap(),
        Joint::new(45.).unwrap(),
        Link::new(3., "Link 2").unwrap(),
        Joint::new(30.).unwrap(),
    );
    let mut svg = String::new();
    plot_arm(SVGBackend::with_string(&mut svg, (800, 800)), "Arm", &arm, &[[6., 2.]]).unwrap();
    assert!(svg.contains("<svg"));
}
