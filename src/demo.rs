//! The walkthrough: one section per principle, always in the same order.

use std::io::Write;

use tracing::debug;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::p1_single_responsibility::{self as srp, AuthenticationService, UserManagementService};
use crate::p2_open_closed::{Circle, Rectangle, Shape};
use crate::p3_liskov_substitution::{try_fly, Bird, Penguin, Sparrow};
use crate::p4_interface_segregation::{run_shift, Eatable, HumanWorker, RobotWorker, Workable};
use crate::p5_dependency_inversion::{LightBulb, LightSwitch};

pub const SECTIONS: [&str; 5] = [
    "Single Responsibility Principle",
    "Open/Closed Principle",
    "Liskov Substitution Principle",
    "Interface Segregation Principle",
    "Dependency Inversion Principle",
];

fn section(out: &mut dyn Write, index: usize) -> Result<()> {
    debug!(section = SECTIONS[index], "starting section");
    writeln!(out)?;
    writeln!(out, "[{}] {}", index + 1, SECTIONS[index])?;
    Ok(())
}

pub fn run(out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
    single_responsibility(out, config)?;
    open_closed(out, config)?;
    liskov_substitution(out)?;
    interface_segregation(out)?;
    dependency_inversion(out)?;
    out.flush()?;
    Ok(())
}

fn single_responsibility(out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
    section(out, 0)?;
    let auth = AuthenticationService::new();
    let users = UserManagementService::new();
    srp::run_with(out, &auth, &users, &config.username, &config.password)
}

fn open_closed(out: &mut dyn Write, config: &DemoConfig) -> Result<()> {
    section(out, 1)?;
    let circle = Circle::new(config.circle_radius)?;
    let rectangle = Rectangle::new(config.rectangle_length, config.rectangle_width)?;

    // `{:?}` keeps the trailing `.0` on whole-number areas.
    for shape in [&circle as &dyn Shape, &rectangle] {
        writeln!(out, "{} Area: {:?}", shape.name(), shape.area())?;
    }
    Ok(())
}

fn liskov_substitution(out: &mut dyn Write) -> Result<()> {
    section(out, 2)?;
    let sparrow: &dyn Bird = &Sparrow;
    let penguin: &dyn Bird = &Penguin;

    sparrow.make_sound(out)?;
    penguin.make_sound(out)?;

    try_fly(sparrow, out, "Sparrows can't fly")?;
    try_fly(penguin, out, "Penguins can't fly")?;
    Ok(())
}

fn interface_segregation(out: &mut dyn Write) -> Result<()> {
    section(out, 3)?;
    let human = HumanWorker;
    let robot = RobotWorker;

    let crew: [&dyn Workable; 2] = [&human, &robot];
    run_shift(&crew, out)?;
    human.eat(out)?;
    Ok(())
}

fn dependency_inversion(out: &mut dyn Write) -> Result<()> {
    section(out, 4)?;
    let light_switch = LightSwitch::new(LightBulb);

    light_switch.switch_on(out)?;
    light_switch.switch_off(out)?;
    Ok(())
}
